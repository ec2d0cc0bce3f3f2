//! Error types for the view controller

use richview_config::ConfigError;
use richview_markup::MarkupError;
use richview_truncate::TruncateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Truncate(#[from] TruncateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ViewResult<T> = Result<T, ViewError>;
