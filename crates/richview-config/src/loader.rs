//! Reading [`ViewConfig`] from TOML or YAML files

use crate::error::{ConfigError, ConfigResult};
use crate::view::ViewConfig;
use std::path::Path;
use tracing::debug;

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl ViewConfig {
    /// Parses and validates a configuration document.
    pub fn from_str_as(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        let config: ViewConfig = match format {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(content)?,
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            #[allow(unreachable_patterns)]
            other => return Err(ConfigError::UnsupportedFormat(format!("{:?}", other))),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, picking the parser from its extension.
    ///
    /// A relative `text_resource` is resolved against the file's directory.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_str_as(&content, format)?;
        if let (Some(resource), Some(base)) = (config.text_resource.as_mut(), path.parent()) {
            if resource.is_relative() {
                *resource = base.join(&*resource);
            }
        }
        debug!("Loaded {:?} configuration from {}", format, path.display());
        Ok(config)
    }
}
