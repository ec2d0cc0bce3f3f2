//! Host measuring and line-breaking services.

use crate::styled::StyledText;

/// Measures the rendered width of a string.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> f32;
}

/// Breaks styled text into visual lines at a given width.
pub trait Layouter {
    fn layout(&self, text: &StyledText, width: f32) -> LineLayout;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }
}

impl<T: Layouter + ?Sized> Layouter for &T {
    fn layout(&self, text: &StyledText, width: f32) -> LineLayout {
        (**self).layout(text, width)
    }
}

/// One visual line: byte range `[start, end)` and its rendered width.
///
/// A line ending in a hard break includes the `\n` in its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub start: usize,
    pub end: usize,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    lines: Vec<LineMetrics>,
}

impl LineLayout {
    pub fn new(lines: Vec<LineMetrics>) -> Self {
        debug_assert!(lines.windows(2).all(|w| w[0].end <= w[1].start));
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.lines[line].start
    }

    pub fn line_end(&self, line: usize) -> usize {
        self.lines[line].end
    }

    pub fn line_width(&self, line: usize) -> f32 {
        self.lines[line].width
    }

    /// The text of `line` within `text`, trailing break included.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let metrics = &self.lines[line];
        &text[metrics.start..metrics.end]
    }

    pub fn lines(&self) -> &[LineMetrics] {
        &self.lines
    }
}
