//! View and see-more settings

use crate::error::{ConfigError, ConfigResult};
use richview_core::TextSize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Styles offered for the see-more fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeeMoreTextStyle {
    #[default]
    None,
    Bold,
    Italic,
    BoldItalic,
    BoldUnderline,
    ItalicUnderline,
    BoldItalicUnderline,
}

impl SeeMoreTextStyle {
    /// The `<rich style>` value for this style, empty for [`SeeMoreTextStyle::None`].
    pub fn markup_token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Bold => "b",
            Self::Italic => "i",
            Self::BoldItalic => "b_i",
            Self::BoldUnderline => "b_u",
            Self::ItalicUnderline => "i_u",
            Self::BoldItalicUnderline => "b_i_u",
        }
    }
}

/// Settings for the fragment appended to truncated text.
#[derive(Debug, Clone, PartialEq)]
pub struct SeeMoreConfig {
    /// Fragment text; truncation is off without it
    pub see_more_text: Option<String>,
    /// Any color the resolver accepts
    pub see_more_text_color: Option<String>,
    pub see_more_text_size: TextSize,
    pub see_more_text_style: SeeMoreTextStyle,
    /// Extra width reserved next to the fragment
    pub see_more_text_padding: f32,
    /// Expand on any click on the view instead of only on the fragment
    pub click_whole_view_to_expand: bool,
}

fn default_text_size() -> TextSize {
    TextSize::sp(14)
}

impl Default for SeeMoreConfig {
    fn default() -> Self {
        Self {
            see_more_text: None,
            see_more_text_color: None,
            see_more_text_size: default_text_size(),
            see_more_text_style: SeeMoreTextStyle::None,
            see_more_text_padding: 0.0,
            click_whole_view_to_expand: false,
        }
    }
}

impl SeeMoreConfig {
    /// The fragment text, when it is set and not empty.
    pub fn text(&self) -> Option<&str> {
        self.see_more_text.as_deref().filter(|text| !text.is_empty())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.see_more_text_size.is_set() {
            return Err(ConfigError::InvalidSize(format!(
                "see_more_text_size must be positive, got {}",
                self.see_more_text_size
            )));
        }
        if !self.see_more_text_padding.is_finite() || self.see_more_text_padding < 0.0 {
            return Err(ConfigError::InvalidSize(format!(
                "see_more_text_padding must be a non-negative number, got {}",
                self.see_more_text_padding
            )));
        }
        Ok(())
    }
}

/// Everything a view is configured with.
///
/// On disk all keys sit at the top level. Keys are snake_case; the camelCase
/// attribute names of the view are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ViewConfigFile", into = "ViewConfigFile")]
pub struct ViewConfig {
    /// Line limit; unlimited when absent
    pub max_lines: Option<usize>,
    /// File whose lines become the initial text
    pub text_resource: Option<PathBuf>,
    pub see_more: SeeMoreConfig,
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_lines == Some(0) {
            return Err(ConfigError::InvalidMaxLines(
                "max_lines must be at least 1 when set".to_string(),
            ));
        }
        self.see_more.validate()
    }
}

/// The flat on-disk layout of [`ViewConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewConfigFile {
    #[serde(default, alias = "maxLines", skip_serializing_if = "Option::is_none")]
    max_lines: Option<usize>,
    #[serde(default, alias = "textResource", skip_serializing_if = "Option::is_none")]
    text_resource: Option<PathBuf>,
    #[serde(default, alias = "seeMoreText", skip_serializing_if = "Option::is_none")]
    see_more_text: Option<String>,
    #[serde(default, alias = "seeMoreTextColor", skip_serializing_if = "Option::is_none")]
    see_more_text_color: Option<String>,
    #[serde(default = "default_text_size", alias = "seeMoreTextSize")]
    see_more_text_size: TextSize,
    #[serde(default, alias = "seeMoreTextStyle")]
    see_more_text_style: SeeMoreTextStyle,
    #[serde(default, alias = "seeMoreTextPadding")]
    see_more_text_padding: f32,
    #[serde(default, alias = "clickWholeViewToExpand")]
    click_whole_view_to_expand: bool,
}

impl From<ViewConfigFile> for ViewConfig {
    fn from(file: ViewConfigFile) -> Self {
        Self {
            max_lines: file.max_lines,
            text_resource: file.text_resource,
            see_more: SeeMoreConfig {
                see_more_text: file.see_more_text,
                see_more_text_color: file.see_more_text_color,
                see_more_text_size: file.see_more_text_size,
                see_more_text_style: file.see_more_text_style,
                see_more_text_padding: file.see_more_text_padding,
                click_whole_view_to_expand: file.click_whole_view_to_expand,
            },
        }
    }
}

impl From<ViewConfig> for ViewConfigFile {
    fn from(config: ViewConfig) -> Self {
        let see_more = config.see_more;
        Self {
            max_lines: config.max_lines,
            text_resource: config.text_resource,
            see_more_text: see_more.see_more_text,
            see_more_text_color: see_more.see_more_text_color,
            see_more_text_size: see_more.see_more_text_size,
            see_more_text_style: see_more.see_more_text_style,
            see_more_text_padding: see_more.see_more_text_padding,
            click_whole_view_to_expand: see_more.click_whole_view_to_expand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SeeMoreTextStyle::None, "" ; "none")]
    #[test_case(SeeMoreTextStyle::Bold, "b" ; "bold")]
    #[test_case(SeeMoreTextStyle::Italic, "i" ; "italic")]
    #[test_case(SeeMoreTextStyle::BoldItalic, "b_i" ; "bold italic")]
    #[test_case(SeeMoreTextStyle::BoldUnderline, "b_u" ; "bold underline")]
    #[test_case(SeeMoreTextStyle::ItalicUnderline, "i_u" ; "italic underline")]
    #[test_case(SeeMoreTextStyle::BoldItalicUnderline, "b_i_u" ; "all")]
    fn style_tokens(style: SeeMoreTextStyle, token: &str) {
        assert_eq!(style.markup_token(), token);
    }

    #[test]
    fn defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.max_lines, None);
        assert_eq!(config.see_more.see_more_text_size, TextSize::sp(14));
        assert_eq!(config.see_more.text(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_text_counts_as_unset() {
        let config = SeeMoreConfig {
            see_more_text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.text(), None);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn serializes_flat() {
        let config = ViewConfig {
            max_lines: Some(3),
            see_more: SeeMoreConfig {
                see_more_text: Some("more".to_string()),
                see_more_text_style: SeeMoreTextStyle::BoldItalic,
                ..Default::default()
            },
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("max_lines = 3"));
        assert!(text.contains("see_more_text_size = \"14sp\""));
        assert!(text.contains("see_more_text_style = \"bold_italic\""));
        assert_eq!(toml::from_str::<ViewConfig>(&text).unwrap(), config);
    }

    #[test]
    fn rejects_unrenderable_sizes() {
        let zero = SeeMoreConfig {
            see_more_text_size: TextSize::px(0),
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::InvalidSize(_))));

        let negative = SeeMoreConfig {
            see_more_text_padding: -1.0,
            ..Default::default()
        };
        assert!(matches!(negative.validate(), Err(ConfigError::InvalidSize(_))));
    }

    #[test]
    fn rejects_zero_max_lines() {
        let config = ViewConfig {
            max_lines: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMaxLines(_))));
        assert!(ViewConfig {
            max_lines: Some(1),
            ..Default::default()
        }
        .validate()
        .is_ok());
    }
}
