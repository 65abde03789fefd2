use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::window::WindowError;

mod engine;
mod subscriber;

pub use engine::PagerEngine;
pub use subscriber::PagerSubscriber;

/// Snapshot of the pager state handed to subscribers and the UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagerContext {
    pub current_page: usize,
    pub total_pages: usize,
}

/// Errors from pager operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// A previous-page step was requested on page 1
    #[error("already at the first page")]
    AtFirstPage,

    /// A next-page step was requested on the last page
    #[error("already at the last page")]
    AtLastPage,

    /// The requested page or page count was malformed
    #[error(transparent)]
    Window(#[from] WindowError),
}
