//! Error types for markup parsing

use richview_core::ColorError;
use thiserror::Error;

/// Markup parsing error type
///
/// Offsets point into the normalized document (newlines replaced by `<br/>`,
/// wrapped in `<html>`), not into the caller's source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A `<rich color="...">` value the color resolver rejected
    #[error("Invalid color in markup: {0}")]
    Color(#[from] ColorError),

    /// A tag opened with `<` but never closed with `>`
    #[error("Unterminated tag at offset {offset}")]
    UnterminatedTag { offset: usize },

    /// A `<rich>` tag opened while another one was still open
    #[error("Nested <rich> tag at offset {offset}")]
    NestedRich { offset: usize },
}

/// Result type for markup operations
pub type MarkupResult<T> = Result<T, MarkupError>;
