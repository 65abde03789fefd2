//! User interface for the pager control
//!
//! This crate provides the egui-based widgets: the pager strip panel,
//! widget-identity helpers, and the application theme.

pub mod pager_panel;
pub mod theme;
pub mod widget_utils;

// Re-export commonly used types
pub use pager_panel::{PagerPanel, PagerPanelConfig};
pub use theme::{accent_color, apply_theme, Theme};
pub use widget_utils::{token_id, widget_id, WidgetId};

/// Common icon definitions
pub mod icons {
    pub const CHEVRON_LEFT: &str = "◀";
    pub const CHEVRON_RIGHT: &str = "▶";
    pub const ELLIPSIS: &str = "…";
}
