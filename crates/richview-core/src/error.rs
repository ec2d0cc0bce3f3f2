//! Error types for style values

use thiserror::Error;

/// A color string the resolver could not turn into an [`crate::Rgb`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Neither a `#RRGGBB`/`#AARRGGBB` literal nor a known color name
    #[error("Unknown color: {0}")]
    Invalid(String),
}

/// A size string that is not `N`, `Nsp` or `Npx`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid text size: {0}")]
pub struct ParseSizeError(pub String);
