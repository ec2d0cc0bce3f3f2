//! # richview configuration
//!
//! Serde structs for a view's line limit and see-more fragment, loaded from
//! TOML or YAML.
//!
//! ```rust
//! use richview_config::{ConfigFormat, SeeMoreTextStyle, ViewConfig};
//!
//! let config = ViewConfig::from_str_as(
//!     "maxLines = 3\nseeMoreText = \"more\"\nseeMoreTextStyle = \"bold_underline\"\n",
//!     ConfigFormat::Toml,
//! )
//! .unwrap();
//! assert_eq!(config.max_lines, Some(3));
//! assert_eq!(config.see_more.see_more_text_style, SeeMoreTextStyle::BoldUnderline);
//! ```

pub mod error;
pub mod loader;
pub mod view;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigFormat;
pub use view::{SeeMoreConfig, SeeMoreTextStyle, ViewConfig};
