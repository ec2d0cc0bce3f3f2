use richview_core::TextMeasurer;
use unicode_width::UnicodeWidthChar;

/// Measures text as a grid of fixed-width cells, the way a terminal renders it.
///
/// Wide characters take two cells; control characters take none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    cell_width: f32,
}

impl MonospaceMeasurer {
    pub fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cells(text: &str) -> usize {
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> f32 {
        Self::cells(text) as f32 * self.cell_width
    }
}
