//! The see-more line fitting algorithm.

use crate::error::{TruncateError, TruncateResult};
use crate::see_more::SeeMoreSpec;
use richview_core::{Layouter, LineLayout, StyledText, TextMeasurer};
use std::ops::Range;
use tracing::debug;

/// Placed between the shortened last line and the see-more fragment.
pub const ELLIPSIS: &str = "... ";

/// Slack on the reserved fragment width, absorbing rounding differences between
/// the trial layout of the fragment and the final composition.
pub const SAFETY_MARGIN: f32 = 1.1;

/// Characters dropped from a last line before it is shrunk to fit.
const TRIM_CHARS: usize = 3;

/// The last non-blank line at or before the cut, and its text without the
/// trailing break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastLine {
    pub line: usize,
    pub range: Range<usize>,
}

impl LastLine {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range.clone()]
    }
}

/// Walks back from `from` past lines that are nothing but a `\n`.
///
/// Returns `None` when every line down to the first is such a line.
pub fn last_visible_line(text: &str, layout: &LineLayout, from: usize) -> Option<LastLine> {
    (0..=from).rev().find_map(|line| {
        let line_text = layout.line_text(text, line);
        if line_text == "\n" {
            return None;
        }
        let start = layout.line_start(line);
        let visible = line_text.strip_suffix('\n').unwrap_or(line_text);
        Some(LastLine {
            line,
            range: start..start + visible.len(),
        })
    })
}

/// What survives of the full text: a prefix, an optional piece of the last
/// line, and whether an ellipsis follows.
#[derive(Debug)]
struct Cut {
    prefix_end: usize,
    tail: Range<usize>,
    ellipsis: bool,
}

impl Cut {
    fn lines_only(prefix_end: usize) -> Self {
        Self {
            prefix_end,
            tail: prefix_end..prefix_end,
            ellipsis: false,
        }
    }
}

/// Fits styled text into a maximum line count with a trailing see-more fragment.
///
/// Stateless apart from the host services it measures with; the same inputs
/// always produce the same output.
pub struct TruncationEngine<'a> {
    measurer: &'a dyn TextMeasurer,
    layouter: &'a dyn Layouter,
}

impl<'a> TruncationEngine<'a> {
    pub fn new(measurer: &'a dyn TextMeasurer, layouter: &'a dyn Layouter) -> Self {
        Self { measurer, layouter }
    }

    /// Width reserved for the ellipsis, padding and fragment, safety margin included.
    pub fn see_more_width(&self, see_more: &SeeMoreSpec, available_width: f32) -> f32 {
        let trial = self.layouter.layout(&see_more.text, available_width);
        let first_line = if trial.line_count() > 0 {
            trial.line_width(0)
        } else {
            0.0
        };
        (SAFETY_MARGIN * (first_line + see_more.padding + self.measurer.measure(ELLIPSIS))).ceil()
    }

    /// Drops trailing characters until `text` plus `reserved` fits `available_width`.
    ///
    /// The empty string is the floor, so the loop ends after at most one step per
    /// character.
    pub fn shrink_to_fit<'t>(&self, text: &'t str, reserved: f32, available_width: f32) -> &'t str {
        let mut candidate = text;
        while !candidate.is_empty() && self.measurer.measure(candidate) + reserved > available_width {
            let mut chars = candidate.chars();
            chars.next_back();
            candidate = chars.as_str();
        }
        candidate
    }

    /// Computes the displayed text for `full` cut at `max_lines`.
    ///
    /// `Ok(None)` means nothing needs cutting: the fragment or the text is empty,
    /// or the layout already fits. `layout` must be the layout of `full` at
    /// `available_width`.
    pub fn fit(
        &self,
        full: &StyledText,
        layout: Option<&LineLayout>,
        max_lines: usize,
        see_more: &SeeMoreSpec,
        available_width: f32,
    ) -> TruncateResult<Option<StyledText>> {
        if see_more.is_empty() || full.is_empty() {
            return Ok(None);
        }
        let layout = layout.ok_or(TruncateError::LayoutUnavailable)?;
        if max_lines == 0 {
            return Err(TruncateError::Configuration(
                "max lines must be at least 1 to show a see-more fragment".to_string(),
            ));
        }
        if layout.line_count() <= max_lines {
            return Ok(None);
        }

        let reserved = self.see_more_width(see_more, available_width);
        if available_width < reserved {
            return Err(TruncateError::Configuration(format!(
                "the view must be wider than the see-more text: {} available, {} needed",
                available_width, reserved
            )));
        }

        let cut = self.cut(full.as_str(), layout, max_lines - 1, reserved, available_width);
        debug!(
            "Truncating {} lines to {}: keeping {} + {} bytes",
            layout.line_count(),
            max_lines,
            cut.prefix_end,
            cut.tail.len()
        );

        let mut shown = full.truncated(cut.prefix_end);
        shown.append(&full.slice(cut.tail));
        if cut.ellipsis {
            shown.push_str(ELLIPSIS);
        }
        shown.append(&see_more.text);
        Ok(Some(shown))
    }

    fn cut(
        &self,
        text: &str,
        layout: &LineLayout,
        cut_line: usize,
        reserved: f32,
        available_width: f32,
    ) -> Cut {
        let lines_before = |line: usize| if line == 0 { 0 } else { layout.line_end(line - 1) };

        let last = match last_visible_line(text, layout, cut_line) {
            Some(last) if !last.is_empty() => last,
            _ => {
                debug!("No visible text on the last line, appending the fragment only");
                return Cut::lines_only(lines_before(cut_line));
            }
        };
        let last_text = last.text(text);

        if last.line == cut_line && layout.line_width(cut_line) + reserved < available_width {
            return Cut {
                prefix_end: lines_before(cut_line),
                tail: last.range,
                ellipsis: true,
            };
        }
        // Applies to a line found past blank lines too.
        if last_text.chars().count() <= TRIM_CHARS {
            debug!("Last line too short to trim, dropping it");
            return Cut::lines_only(lines_before(last.line));
        }

        let shown = self.shrink_to_fit(drop_last_chars(last_text, TRIM_CHARS), reserved, available_width);
        Cut {
            prefix_end: lines_before(last.line),
            tail: last.range.start..last.range.start + shown.len(),
            ellipsis: true,
        }
    }
}

fn drop_last_chars(text: &str, count: usize) -> &str {
    match text.char_indices().rev().nth(count.saturating_sub(1)) {
        Some((index, _)) if count > 0 => &text[..index],
        Some(_) => text,
        None => "",
    }
}
