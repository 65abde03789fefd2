//! Core functionality for the pager control
//!
//! This crate provides the windowing calculator that decides which page
//! tokens are visible, and the pager engine that owns the current page
//! and dispatches page changes to subscribers.

pub mod pager;
pub mod window;

// Re-export commonly used types
pub use pager::{PagerContext, PagerEngine, PagerError, PagerSubscriber};
pub use window::{compute_window, PageToken, WindowError};
