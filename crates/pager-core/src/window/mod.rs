use thiserror::Error;

mod compute;
mod token;

pub use compute::compute_window;
pub use token::PageToken;

/// Errors for malformed window requests
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The page count must be at least one
    #[error("total page count must be at least 1, got {0}")]
    InvalidTotal(usize),

    /// The requested page lies outside `1..=total`
    #[error("current page {current_page} outside the valid range 1..={total}")]
    InvalidCurrentPage { current_page: usize, total: usize },
}
