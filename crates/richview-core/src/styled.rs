//! Plain text with single-attribute style runs.

use crate::color::Rgb;
use crate::error::ParseSizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => Self::BoldItalic,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (false, false) => Self::Normal,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Flag union, the way stacked typeface styles combine when painted.
    pub fn union(self, other: FontStyle) -> Self {
        Self::from_flags(
            self.is_bold() || other.is_bold(),
            self.is_italic() || other.is_italic(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeUnit {
    /// Scales with display density (`sp`)
    #[default]
    DeviceIndependent,
    /// Raw pixels (`px`)
    Pixel,
}

impl SizeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::DeviceIndependent => "sp",
            Self::Pixel => "px",
        }
    }
}

/// A font size with its unit. Values `<= 0` mean "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextSize {
    pub value: i32,
    pub unit: SizeUnit,
}

impl TextSize {
    pub const fn sp(value: i32) -> Self {
        Self {
            value,
            unit: SizeUnit::DeviceIndependent,
        }
    }

    pub const fn px(value: i32) -> Self {
        Self {
            value,
            unit: SizeUnit::Pixel,
        }
    }

    pub fn is_set(&self) -> bool {
        self.value > 0
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Strict parse: `14`, `14sp` or `14px`, suffix case-insensitive.
impl FromStr for TextSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let (digits, unit) = if let Some(d) = lower.strip_suffix("px") {
            (d, SizeUnit::Pixel)
        } else if let Some(d) = lower.strip_suffix("sp") {
            (d, SizeUnit::DeviceIndependent)
        } else {
            (lower.as_str(), SizeUnit::DeviceIndependent)
        };
        let value = digits
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseSizeError(s.to_string()))?;
        Ok(Self { value, unit })
    }
}

impl TryFrom<String> for TextSize {
    type Error = ParseSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TextSize> for String {
    fn from(size: TextSize) -> Self {
        size.to_string()
    }
}

/// The one attribute a [`StyleRun`] carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RunAttribute {
    Click(String),
    Color(Rgb),
    Size(TextSize),
    FontStyle(FontStyle),
    Underline,
}

/// A half-open byte range `[start, end)` of the plain text carrying one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    pub attribute: RunAttribute,
}

impl StyleRun {
    pub fn new(range: Range<usize>, attribute: RunAttribute) -> Self {
        debug_assert!(range.start <= range.end);
        Self {
            start: range.start,
            end: range.end,
            attribute,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn covers(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Everything that applies to one stretch of text once overlapping runs are folded.
///
/// Font styles combine as flags; color, size and click tag are last-write-wins in
/// run order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    pub font_style: FontStyle,
    pub underline: bool,
    pub color: Option<Rgb>,
    pub size: Option<TextSize>,
    pub click: Option<String>,
}

impl ResolvedStyle {
    fn apply(&mut self, attribute: &RunAttribute) {
        match attribute {
            RunAttribute::Click(tag) => self.click = Some(tag.clone()),
            RunAttribute::Color(color) => self.color = Some(*color),
            RunAttribute::Size(size) => self.size = Some(*size),
            RunAttribute::FontStyle(style) => self.font_style = self.font_style.union(*style),
            RunAttribute::Underline => self.underline = true,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Plain text plus the runs that style it.
///
/// Invariant: every run satisfies `start <= end <= plain.len()` and both ends sit on
/// char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyledText {
    plain: String,
    runs: Vec<StyleRun>,
}

impl StyledText {
    pub fn new(plain: impl Into<String>, runs: Vec<StyleRun>) -> Self {
        let plain = plain.into();
        debug_assert!(runs.iter().all(|r| r.start <= r.end
            && r.end <= plain.len()
            && plain.is_char_boundary(r.start)
            && plain.is_char_boundary(r.end)));
        Self { plain, runs }
    }

    pub fn from_plain(plain: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            runs: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.plain
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<StyleRun>) {
        (self.plain, self.runs)
    }

    /// The prefix `[0, end)`. Runs inside it are kept, runs crossing `end` are
    /// clipped, runs past it are dropped.
    pub fn truncated(&self, end: usize) -> StyledText {
        let end = end.min(self.plain.len());
        debug_assert!(self.plain.is_char_boundary(end));
        let runs = self
            .runs
            .iter()
            .filter_map(|run| {
                if run.end <= end {
                    Some(run.clone())
                } else if run.start < end {
                    Some(StyleRun::new(run.start..end, run.attribute.clone()))
                } else {
                    None
                }
            })
            .collect();
        StyledText {
            plain: self.plain[..end].to_string(),
            runs,
        }
    }

    /// The sub-text `range`, with runs clipped to it and shifted to start at 0.
    pub fn slice(&self, range: Range<usize>) -> StyledText {
        let end = range.end.min(self.plain.len());
        let start = range.start.min(end);
        debug_assert!(self.plain.is_char_boundary(start) && self.plain.is_char_boundary(end));
        let runs = self
            .runs
            .iter()
            .filter(|run| {
                let overlaps = run.start.max(start) < run.end.min(end);
                overlaps || (run.is_empty() && start <= run.start && run.start < end)
            })
            .map(|run| {
                StyleRun::new(
                    run.start.max(start) - start..run.end.min(end) - start,
                    run.attribute.clone(),
                )
            })
            .collect();
        StyledText {
            plain: self.plain[start..end].to_string(),
            runs,
        }
    }

    /// Appends unstyled text.
    pub fn push_str(&mut self, text: &str) {
        self.plain.push_str(text);
    }

    /// Appends another styled text, shifting its runs past the current end.
    pub fn append(&mut self, other: &StyledText) {
        let offset = self.plain.len();
        self.plain.push_str(&other.plain);
        self.runs.extend(other.runs.iter().map(|run| {
            StyleRun::new(run.start + offset..run.end + offset, run.attribute.clone())
        }));
    }

    /// Runs covering the byte at `offset`.
    pub fn runs_at(&self, offset: usize) -> impl Iterator<Item = &StyleRun> {
        self.runs.iter().filter(move |run| run.covers(offset))
    }

    /// The click tag active at `offset`; the last covering click run wins.
    pub fn click_tag_at(&self, offset: usize) -> Option<&str> {
        self.runs_at(offset)
            .filter_map(|run| match &run.attribute {
                RunAttribute::Click(tag) => Some(tag.as_str()),
                _ => None,
            })
            .last()
    }

    /// Splits the text at every run boundary and folds the runs over each piece.
    pub fn segments(&self) -> Vec<(Range<usize>, ResolvedStyle)> {
        let mut bounds: Vec<usize> = Vec::with_capacity(self.runs.len() * 2 + 2);
        bounds.push(0);
        bounds.push(self.plain.len());
        for run in &self.runs {
            bounds.push(run.start);
            bounds.push(run.end);
        }
        bounds.sort_unstable();
        bounds.dedup();

        bounds
            .windows(2)
            .map(|w| {
                let (start, end) = (w[0], w[1]);
                let mut style = ResolvedStyle::default();
                for run in &self.runs {
                    if run.start <= start && end <= run.end {
                        style.apply(&run.attribute);
                    }
                }
                (start..end, style)
            })
            .collect()
    }
}

impl From<&str> for StyledText {
    fn from(plain: &str) -> Self {
        Self::from_plain(plain)
    }
}

impl From<String> for StyledText {
    fn from(plain: String) -> Self {
        Self::from_plain(plain)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample() -> StyledText {
        StyledText::new(
            "hello world",
            vec![
                StyleRun::new(0..5, RunAttribute::FontStyle(FontStyle::Bold)),
                StyleRun::new(3..9, RunAttribute::Underline),
                StyleRun::new(6..11, RunAttribute::Click("w".into())),
            ],
        )
    }

    #[test_case("14", TextSize::sp(14) ; "bare number")]
    #[test_case("14sp", TextSize::sp(14) ; "sp suffix")]
    #[test_case("14PX", TextSize::px(14) ; "px suffix uppercase")]
    #[test_case(" 9px ", TextSize::px(9) ; "surrounding whitespace")]
    fn text_size_parses(input: &str, expected: TextSize) {
        assert_eq!(input.parse::<TextSize>().unwrap(), expected);
    }

    #[test]
    fn text_size_rejects_garbage() {
        assert!("abc".parse::<TextSize>().is_err());
        assert!("px".parse::<TextSize>().is_err());
    }

    #[test]
    fn text_size_display_round_trips_unit() {
        assert_eq!(TextSize::px(12).to_string(), "12px");
        assert_eq!(TextSize::sp(12).to_string(), "12sp");
    }

    #[test]
    fn font_style_union_combines_flags() {
        assert_eq!(FontStyle::Bold.union(FontStyle::Italic), FontStyle::BoldItalic);
        assert_eq!(FontStyle::Normal.union(FontStyle::Italic), FontStyle::Italic);
    }

    #[test]
    fn truncated_keeps_clips_and_drops() {
        let cut = sample().truncated(5);
        assert_eq!(cut.as_str(), "hello");
        assert_eq!(
            cut.runs(),
            &[
                StyleRun::new(0..5, RunAttribute::FontStyle(FontStyle::Bold)),
                StyleRun::new(3..5, RunAttribute::Underline),
            ]
        );
    }

    #[test]
    fn truncated_past_end_is_identity() {
        let text = sample();
        assert_eq!(text.truncated(100), text);
    }

    #[test]
    fn slice_clips_and_shifts() {
        let middle = sample().slice(4..8);
        assert_eq!(middle.as_str(), "o wo");
        assert_eq!(
            middle.runs(),
            &[
                StyleRun::new(0..1, RunAttribute::FontStyle(FontStyle::Bold)),
                StyleRun::new(0..4, RunAttribute::Underline),
                StyleRun::new(2..4, RunAttribute::Click("w".into())),
            ]
        );
        assert!(sample().slice(5..5).runs().is_empty());
    }

    #[test]
    fn append_shifts_runs() {
        let mut text = StyledText::from_plain("ab");
        let tail = StyledText::new("cd", vec![StyleRun::new(0..2, RunAttribute::Underline)]);
        text.push_str("-");
        text.append(&tail);
        assert_eq!(text.as_str(), "ab-cd");
        assert_eq!(text.runs(), &[StyleRun::new(3..5, RunAttribute::Underline)]);
    }

    #[test]
    fn click_tag_lookup() {
        let text = sample();
        assert_eq!(text.click_tag_at(7), Some("w"));
        assert_eq!(text.click_tag_at(2), None);
        assert_eq!(text.click_tag_at(11), None);
    }

    #[test]
    fn segments_fold_overlapping_runs() {
        let segments = sample().segments();
        let ranges: Vec<_> = segments.iter().map(|(r, _)| r.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..5, 5..6, 6..9, 9..11]);

        let (_, middle) = &segments[1];
        assert_eq!(middle.font_style, FontStyle::Bold);
        assert!(middle.underline);
        assert!(middle.click.is_none());

        let (_, overlap) = &segments[3];
        assert!(overlap.underline);
        assert_eq!(overlap.click.as_deref(), Some("w"));
    }

    #[test]
    fn segments_of_unstyled_text() {
        let segments = StyledText::from_plain("plain").segments();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].1.is_plain());
    }

    #[test]
    fn segments_of_empty_text() {
        assert!(StyledText::default().segments().is_empty());
    }
}
