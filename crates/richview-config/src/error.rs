//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension with no enabled parser
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// A size or padding that cannot be rendered
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// A line limit that leaves nothing to show
    #[error("Invalid max lines: {0}")]
    InvalidMaxLines(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
