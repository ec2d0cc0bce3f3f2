//! First-fit line breaking on top of `textwrap`'s wrapping algorithm.
//!
//! Offsets are tracked through the wrap so every line maps back to a byte range
//! of the input, which `textwrap::wrap` alone would not give us.

use richview_core::{Layouter, LineLayout, LineMetrics, StyledText, TextMeasurer};
use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;
use tracing::trace;

/// Breaks text at spaces and hard `\n` breaks, splitting words that are wider
/// than a whole line.
///
/// Lines ending in a hard break include the `\n`; text ending in `\n` gets a
/// final empty line. Trailing spaces stay on the line they follow but do not
/// count towards its width.
#[derive(Debug, Clone, Default)]
pub struct WrapLayouter<M> {
    measurer: M,
}

/// A word plus the spaces after it, as byte offsets into one paragraph.
#[derive(Debug)]
struct Piece {
    start: usize,
    end: usize,
    whitespace_end: usize,
    width: f64,
    whitespace_width: f64,
}

impl Fragment for Piece {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace_width
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

impl<M: TextMeasurer> WrapLayouter<M> {
    pub fn new(measurer: M) -> Self {
        Self { measurer }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    fn paragraph(
        &self,
        text: &str,
        start: usize,
        end: usize,
        hard_break: bool,
        width: f32,
        lines: &mut Vec<LineMetrics>,
    ) {
        let break_len = usize::from(hard_break);
        let paragraph = &text[start..end];
        if paragraph.is_empty() {
            lines.push(LineMetrics {
                start,
                end: end + break_len,
                width: 0.0,
            });
            return;
        }

        let pieces = self.pieces(paragraph, width);
        let wrapped = wrap_first_fit(&pieces, &[f64::from(width)]);
        let last = wrapped.len().saturating_sub(1);
        for (i, line) in wrapped.iter().enumerate() {
            let (Some(first), Some(tail)) = (line.first(), line.last()) else {
                continue;
            };
            let mut line_end = start + tail.whitespace_end;
            if i == last {
                line_end += break_len;
            }
            lines.push(LineMetrics {
                start: start + first.start,
                end: line_end,
                width: self.measurer.measure(&paragraph[first.start..tail.end]),
            });
        }
    }

    fn pieces(&self, paragraph: &str, width: f32) -> Vec<Piece> {
        let mut pieces = Vec::new();
        let mut pos = 0;
        while pos < paragraph.len() {
            let word_end = paragraph[pos..]
                .find(' ')
                .map_or(paragraph.len(), |i| pos + i);
            let whitespace_end = paragraph[word_end..]
                .find(|c| c != ' ')
                .map_or(paragraph.len(), |i| word_end + i);
            self.push_word(paragraph, pos, word_end, whitespace_end, width, &mut pieces);
            pos = whitespace_end;
        }
        pieces
    }

    /// Pushes one word, split into line-sized chunks when it is wider than a line.
    fn push_word(
        &self,
        paragraph: &str,
        start: usize,
        end: usize,
        whitespace_end: usize,
        width: f32,
        pieces: &mut Vec<Piece>,
    ) {
        let whitespace_width = f64::from(self.measurer.measure(&paragraph[end..whitespace_end]));
        let word_width = self.measurer.measure(&paragraph[start..end]);
        if word_width <= width {
            pieces.push(Piece {
                start,
                end,
                whitespace_end,
                width: f64::from(word_width),
                whitespace_width,
            });
            return;
        }

        trace!("Splitting word wider than the line: {:?}", &paragraph[start..end]);
        let mut chunk_start = start;
        for (i, c) in paragraph[start..end].char_indices() {
            let char_end = start + i + c.len_utf8();
            let candidate = self.measurer.measure(&paragraph[chunk_start..char_end]);
            let char_start = start + i;
            if candidate > width && char_start > chunk_start {
                pieces.push(Piece {
                    start: chunk_start,
                    end: char_start,
                    whitespace_end: char_start,
                    width: f64::from(self.measurer.measure(&paragraph[chunk_start..char_start])),
                    whitespace_width: 0.0,
                });
                chunk_start = char_start;
            }
        }
        pieces.push(Piece {
            start: chunk_start,
            end,
            whitespace_end,
            width: f64::from(self.measurer.measure(&paragraph[chunk_start..end])),
            whitespace_width,
        });
    }
}

impl<M: TextMeasurer> Layouter for WrapLayouter<M> {
    fn layout(&self, text: &StyledText, width: f32) -> LineLayout {
        let text = text.as_str();
        let mut lines = Vec::new();
        let mut start = 0;
        loop {
            let (end, hard_break) = match text[start..].find('\n') {
                Some(i) => (start + i, true),
                None => (text.len(), false),
            };
            self.paragraph(text, start, end, hard_break, width, &mut lines);
            if !hard_break {
                break;
            }
            start = end + 1;
        }
        LineLayout::new(lines)
    }
}

impl<M: TextMeasurer> TextMeasurer for WrapLayouter<M> {
    fn measure(&self, text: &str) -> f32 {
        self.measurer.measure(text)
    }
}
