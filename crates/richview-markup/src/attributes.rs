//! Attribute extraction and the `<rich>` attribute value grammars.

use once_cell::sync::Lazy;
use regex::Regex;
use richview_core::{FontStyle, SizeUnit, TextSize};
use tracing::{debug, trace};

/// Size used when a `size` attribute has no parsable number.
pub const DEFAULT_RICH_SIZE: i32 = 20;

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("attribute pattern is valid")
});

/// Attributes of one start tag, names lowercased and values entity-decoded.
///
/// When a name repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn parse(body: &str) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for cap in ATTRIBUTE.captures_iter(body) {
            let Some(name) = cap.get(1) else { continue };
            let name = name.as_str().to_ascii_lowercase();
            if entries.iter().any(|(existing, _)| *existing == name) {
                trace!("Ignoring repeated attribute {}", name);
                continue;
            }
            let raw = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str())
                .unwrap_or("");
            let value = html_escape::decode_html_entities(raw).into_owned();
            entries.push((name, value));
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`Attributes::get`], but an empty value counts as absent.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps a `style` value to its font style and underline flag.
///
/// Tokens are joined by `_` and matched case-insensitively: `b`/`bold`,
/// `i`/`italic`, `u`/`underline`. Order and repetition do not matter. Any other
/// token turns the whole value into plain text.
pub fn parse_style(value: &str) -> (FontStyle, bool) {
    let mut bold = false;
    let mut italic = false;
    let mut underline = false;

    for token in value.split('_') {
        match token.to_ascii_lowercase().as_str() {
            "b" | "bold" => bold = true,
            "i" | "italic" => italic = true,
            "u" | "underline" => underline = true,
            other => {
                debug!("Unrecognized style token {:?} in {:?}", other, value);
                return (FontStyle::Normal, false);
            }
        }
    }

    (FontStyle::from_flags(bold, italic), underline)
}

/// Parses a `size` value: an integer with an optional `sp`/`px` suffix.
///
/// Unparsable numbers fall back to [`DEFAULT_RICH_SIZE`] in the suffix's unit.
pub fn parse_size(value: &str) -> TextSize {
    let lower = value.trim().to_ascii_lowercase();
    let (digits, unit) = if let Some(digits) = lower.strip_suffix("sp") {
        (digits, SizeUnit::DeviceIndependent)
    } else if let Some(digits) = lower.strip_suffix("px") {
        (digits, SizeUnit::Pixel)
    } else {
        (lower.as_str(), SizeUnit::DeviceIndependent)
    };

    let value = digits.trim().parse::<i32>().unwrap_or_else(|_| {
        debug!("Unparsable size {:?}, using {}", value, DEFAULT_RICH_SIZE);
        DEFAULT_RICH_SIZE
    });

    TextSize { value, unit }
}
