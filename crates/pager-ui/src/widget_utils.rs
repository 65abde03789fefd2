//! Widget utilities for managing IDs and preventing conflicts
//!
//! Every token in the strip gets a stable egui ID so that interaction state
//! survives the cluster shifting underneath it, and so that two pagers on
//! the same screen never collide. This is why the before/after ellipses are
//! distinct token variants even though they render identically.

use egui::Id;
use pager_core::PageToken;
use std::fmt::Display;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Stable egui ID for one strip token
pub fn token_id(token: &PageToken) -> Id {
    let builder = match token {
        PageToken::Page(n) => WidgetId::new("pager_token").with("page").with(n),
        PageToken::EllipsisBefore => WidgetId::new("pager_token").with("ellipsis_before"),
        PageToken::EllipsisAfter => WidgetId::new("pager_token").with("ellipsis_after"),
    };
    builder.id()
}

/// Helper function to create a unique widget ID for a given context
pub fn widget_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}_{}", base, suffix)
}
