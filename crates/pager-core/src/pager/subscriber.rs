//! Pager subscriber trait

use super::PagerContext;

/// Trait for components that need to respond to page changes
pub trait PagerSubscriber: Send + Sync {
    /// Called after the current page or the page count changes
    fn on_page_change(&self, context: &PagerContext);
}
