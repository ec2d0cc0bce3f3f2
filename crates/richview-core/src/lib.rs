//! # richview core
//!
//! Shared vocabulary for the richview crates:
//! - [`StyledText`] and [`StyleRun`]: plain text plus overlapping single-attribute runs
//! - [`Rgb`] and [`ColorResolver`]: color strings resolved at parse time
//! - [`TextMeasurer`], [`Layouter`] and [`LineLayout`]: the host's measuring and
//!   line-breaking services
//! - [`ClickSink`]: where activated click tags go

pub mod color;
pub mod error;
pub mod layout;
pub mod styled;

pub use color::{ColorResolver, DefaultColorResolver, Rgb};
pub use error::{ColorError, ParseSizeError};
pub use layout::{Layouter, LineLayout, LineMetrics, TextMeasurer};
pub use styled::{FontStyle, ResolvedStyle, RunAttribute, SizeUnit, StyleRun, StyledText, TextSize};

/// Receives the tag of a clickable run when the host activates it.
pub trait ClickSink {
    fn on_click(&mut self, tag: &str);
}

impl<F> ClickSink for F
where
    F: FnMut(&str),
{
    fn on_click(&mut self, tag: &str) {
        self(tag)
    }
}
