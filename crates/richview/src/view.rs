//! The view controller: full text, displayed text and the expand state.

use crate::error::ViewResult;
use crate::resource::{load_text_resource, read_markup};
use crate::see_more::{see_more_spec, SEE_MORE_TAG};
use richview_config::ViewConfig;
use richview_core::{ClickSink, Layouter, StyledText, TextMeasurer};
use richview_markup::MarkupParser;
use richview_truncate::{SeeMoreSpec, TruncationEngine};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Holds a text and what is currently shown of it.
///
/// Call [`RichTextView::measure`] whenever the width is known or changes; the
/// displayed text is recomputed from the full text every time.
pub struct RichTextView<H> {
    host: H,
    parser: MarkupParser,
    full: StyledText,
    displayed: StyledText,
    max_lines: Option<usize>,
    see_more: Option<SeeMoreSpec>,
    truncated: bool,
}

impl<H> RichTextView<H>
where
    H: Layouter + TextMeasurer,
{
    pub fn new(host: H) -> Self {
        Self {
            host,
            parser: MarkupParser::new(),
            full: StyledText::default(),
            displayed: StyledText::default(),
            max_lines: None,
            see_more: None,
            truncated: false,
        }
    }

    /// Builds a view from configuration, loading its text resource if one is set.
    ///
    /// The configuration is validated first, so configs built in code get the
    /// same checks as loaded ones.
    pub fn from_config(host: H, config: &ViewConfig) -> ViewResult<Self> {
        config.validate()?;
        let mut view = Self::new(host);
        view.max_lines = config.max_lines;
        view.see_more = see_more_spec(&config.see_more, &view.parser)?;
        if let Some(path) = &config.text_resource {
            view.set_text_resource(path)?;
        }
        Ok(view)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: Option<usize>) {
        self.max_lines = max_lines;
    }

    pub fn see_more(&self) -> Option<&SeeMoreSpec> {
        self.see_more.as_ref()
    }

    pub fn set_see_more(&mut self, see_more: Option<SeeMoreSpec>) {
        self.see_more = see_more;
    }

    /// Sets the text, parsing it as markup when it contains a closing tag.
    pub fn set_text(&mut self, text: &str) -> ViewResult<()> {
        let full = if text.contains("</") {
            self.parser.parse(text)?
        } else {
            StyledText::from_plain(text)
        };
        self.replace_text(full);
        Ok(())
    }

    /// Sets the text from a reader, one `<br/>`-terminated line per source line.
    pub fn set_text_from_reader<R: BufRead>(&mut self, reader: R) -> ViewResult<()> {
        let markup = read_markup(reader)?;
        let full = self.parser.parse(&markup)?;
        self.replace_text(full);
        Ok(())
    }

    pub fn set_text_resource(&mut self, path: impl AsRef<Path>) -> ViewResult<()> {
        let markup = load_text_resource(path)?;
        let full = self.parser.parse(&markup)?;
        self.replace_text(full);
        Ok(())
    }

    fn replace_text(&mut self, full: StyledText) {
        self.displayed = full.clone();
        self.full = full;
        self.truncated = false;
    }

    /// Lays the text out at `width` and truncates it when it has more lines
    /// than allowed and a see-more fragment is configured.
    pub fn measure(&mut self, width: f32) -> ViewResult<&StyledText> {
        match self.fit(width)? {
            Some(shown) => {
                debug!(
                    "Showing {} of {} bytes at width {}",
                    shown.len(),
                    self.full.len(),
                    width
                );
                self.displayed = shown;
                self.truncated = true;
            }
            None => {
                self.displayed = self.full.clone();
                self.truncated = false;
            }
        }
        Ok(&self.displayed)
    }

    fn fit(&self, width: f32) -> ViewResult<Option<StyledText>> {
        let (Some(max_lines), Some(see_more)) = (self.max_lines, self.see_more.as_ref()) else {
            return Ok(None);
        };
        let layout = self.host.layout(&self.full, width);
        let engine = TruncationEngine::new(&self.host, &self.host);
        Ok(engine.fit(&self.full, Some(&layout), max_lines, see_more, width)?)
    }

    pub fn full_text(&self) -> &StyledText {
        &self.full
    }

    pub fn displayed(&self) -> &StyledText {
        &self.displayed
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Activates the click region at `offset` of the displayed text.
    ///
    /// The see-more tag expands the view; any other tag goes to `sink`.
    /// Returns whether a click region was hit.
    pub fn click_at(&mut self, offset: usize, sink: &mut impl ClickSink) -> bool {
        let Some(tag) = self.displayed.click_tag_at(offset).map(str::to_string) else {
            return false;
        };
        if tag == SEE_MORE_TAG {
            self.expand();
        } else {
            sink.on_click(&tag);
        }
        true
    }

    /// A click anywhere on the view; expands it when the fragment is configured
    /// to make the whole view clickable.
    pub fn click_view(&mut self) -> bool {
        let whole_view = self
            .see_more
            .as_ref()
            .is_some_and(|see_more| see_more.clickable_whole_view);
        if whole_view {
            self.expand();
        }
        whole_view
    }

    /// Lifts the line limit and shows the full text.
    pub fn expand(&mut self) {
        debug!("Expanding view");
        self.max_lines = None;
        self.displayed = self.full.clone();
        self.truncated = false;
    }
}
