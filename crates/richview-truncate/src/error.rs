//! Error types for truncation

use thiserror::Error;

/// Truncation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TruncateError {
    /// The inputs can never produce a fitting result, e.g. a view narrower than
    /// the see-more fragment
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No line layout has been realized yet; truncation has to wait for one
    #[error("Line layout is not available yet")]
    LayoutUnavailable,
}

/// Result type for truncation operations
pub type TruncateResult<T> = Result<T, TruncateError>;
