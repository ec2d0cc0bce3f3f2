//! The markup interpreter: standard inline HTML plus the custom `<rich>` tag.

use crate::attributes::{parse_size, parse_style, Attributes};
use crate::error::{MarkupError, MarkupResult};
use crate::scanner::{Scanner, Token};
use richview_core::{
    ColorResolver, DefaultColorResolver, FontStyle, RunAttribute, StyleRun, StyledText, TextSize,
};
use tracing::{debug, trace};

/// Name of the custom tag, matched case-insensitively.
pub const RICH_TAG: &str = "rich";

/// Newlines in markup source are hard breaks; every `\n` becomes `<br/>`.
const BREAK_TAG: &str = "<br/>";

/// Newlines kept around block elements such as `<p>` and `<div>`.
const BLOCK_MARGIN: usize = 2;

/// Prepares source text for interpretation: newlines become `<br/>` and the
/// result is wrapped in `<html>` unless it already starts with it.
pub fn normalize(source: &str) -> String {
    let document = source.replace('\n', BREAK_TAG);
    if document.starts_with("<html>") {
        document
    } else {
        format!("<html>{}</html>", document)
    }
}

/// Parser for `<rich>` markup.
///
/// Holds no per-document state, so one parser can serve any number of `parse`
/// calls, from any number of threads when the resolver allows it.
#[derive(Debug, Clone, Default)]
pub struct MarkupParser<R = DefaultColorResolver> {
    resolver: R,
}

impl MarkupParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ColorResolver> MarkupParser<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parses `source` into plain text and style runs.
    ///
    /// Fails on unterminated tags, on nested `<rich>` tags and on `<rich>` colors
    /// the resolver rejects. Anything else malformed about an attribute makes
    /// that attribute absent.
    pub fn parse(&self, source: &str) -> MarkupResult<StyledText> {
        let document = normalize(source);
        let mut state = ParseState::new(&self.resolver);

        for token in Scanner::new(&document) {
            match token? {
                Token::Text(text) => state.characters(text),
                Token::Start {
                    name,
                    attributes,
                    self_closing,
                    offset,
                } => {
                    let name = name.to_ascii_lowercase();
                    state.start_tag(&name, &Attributes::parse(attributes), offset)?;
                    if self_closing {
                        state.end_tag(&name)?;
                    }
                }
                Token::End { name } => state.end_tag(&name.to_ascii_lowercase())?,
                Token::Comment => {}
            }
        }

        let parsed = state.finish()?;
        debug!(
            "Parsed {} bytes of markup into {} bytes of text with {} runs",
            source.len(),
            parsed.len(),
            parsed.runs().len()
        );
        Ok(parsed)
    }
}

/// Collected while a `<rich>` tag is open.
#[derive(Debug, Clone, Default)]
struct TagContext {
    start: usize,
    font_style: FontStyle,
    underline: bool,
    click: Option<String>,
    color: Option<String>,
    size: Option<TextSize>,
}

impl TagContext {
    fn from_attributes(start: usize, attributes: &Attributes) -> Self {
        let mut context = Self {
            start,
            ..Self::default()
        };

        if let Some(style) = attributes.non_empty("style") {
            (context.font_style, context.underline) = parse_style(style);
        }
        if let Some(clickable) = attributes.non_empty("clickable") {
            context.click = Some(clickable.to_string());
        }
        if let Some(size) = attributes.non_empty("size") {
            context.size = Some(parse_size(size)).filter(TextSize::is_set);
        }
        if let Some(color) = attributes.non_empty("color") {
            context.color = Some(color.to_string());
        }

        context
    }
}

/// A standard element waiting for its end tag.
#[derive(Debug)]
struct OpenElement {
    name: String,
    start: usize,
    attribute: Option<RunAttribute>,
    block: bool,
}

struct ParseState<'r, R> {
    out: String,
    runs: Vec<StyleRun>,
    rich: Option<TagContext>,
    open: Vec<OpenElement>,
    resolver: &'r R,
}

impl<'r, R: ColorResolver> ParseState<'r, R> {
    fn new(resolver: &'r R) -> Self {
        Self {
            out: String::new(),
            runs: Vec::new(),
            rich: None,
            open: Vec::new(),
            resolver,
        }
    }

    /// Appends decoded text, collapsing whitespace runs into one space and
    /// dropping whitespace that follows a space, a newline or starts the output.
    fn characters(&mut self, raw: &str) {
        let decoded = html_escape::decode_html_entities(raw);
        for c in decoded.chars() {
            if matches!(c, ' ' | '\n' | '\t' | '\r' | '\x0c') {
                let pred = self.out.chars().last().unwrap_or('\n');
                if pred != ' ' && pred != '\n' {
                    self.out.push(' ');
                }
            } else {
                self.out.push(c);
            }
        }
    }

    fn start_tag(&mut self, name: &str, attributes: &Attributes, offset: usize) -> MarkupResult<()> {
        if name.eq_ignore_ascii_case(RICH_TAG) {
            return self.start_rich(attributes, offset);
        }

        let (attribute, block) = match name {
            "br" => {
                self.out.push('\n');
                return Ok(());
            }
            "p" | "div" | "blockquote" | "ul" | "li" => (None, true),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                (Some(RunAttribute::FontStyle(FontStyle::Bold)), true)
            }
            "b" | "strong" => (Some(RunAttribute::FontStyle(FontStyle::Bold)), false),
            "i" | "em" | "cite" | "dfn" => (Some(RunAttribute::FontStyle(FontStyle::Italic)), false),
            "u" | "ins" => (Some(RunAttribute::Underline), false),
            "a" => (
                attributes
                    .non_empty("href")
                    .map(|href| RunAttribute::Click(href.to_string())),
                false,
            ),
            "font" => (self.font_color(attributes), false),
            _ => {
                trace!("Treating <{}> as transparent", name);
                return Ok(());
            }
        };

        if block {
            self.block_break();
        }
        self.open.push(OpenElement {
            name: name.to_string(),
            start: self.out.len(),
            attribute,
            block,
        });
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> MarkupResult<()> {
        if name.eq_ignore_ascii_case(RICH_TAG) {
            return self.end_rich();
        }

        match self.open.iter().rposition(|element| element.name == name) {
            Some(index) => {
                // Anything opened after the matching element closes with it.
                while self.open.len() > index {
                    if let Some(element) = self.open.pop() {
                        self.close_element(element);
                    }
                }
            }
            None => debug!("Ignoring unmatched </{}>", name),
        }
        Ok(())
    }

    fn close_element(&mut self, element: OpenElement) {
        let end = self.out.len();
        if let Some(attribute) = element.attribute {
            if element.start < end {
                self.runs.push(StyleRun::new(element.start..end, attribute));
            }
        }
        if element.block {
            self.block_break();
        }
    }

    fn font_color(&self, attributes: &Attributes) -> Option<RunAttribute> {
        let color = attributes.non_empty("color")?;
        match self.resolver.resolve(color) {
            Ok(rgb) => Some(RunAttribute::Color(rgb)),
            Err(err) => {
                debug!("Ignoring <font> color: {}", err);
                None
            }
        }
    }

    /// Ensures the output ends in [`BLOCK_MARGIN`] newlines, unless it is empty.
    fn block_break(&mut self) {
        if self.out.is_empty() {
            return;
        }
        let trailing = self.out.chars().rev().take_while(|&c| c == '\n').count();
        for _ in trailing..BLOCK_MARGIN {
            self.out.push('\n');
        }
    }

    fn start_rich(&mut self, attributes: &Attributes, offset: usize) -> MarkupResult<()> {
        if self.rich.is_some() {
            return Err(MarkupError::NestedRich { offset });
        }
        self.rich = Some(TagContext::from_attributes(self.out.len(), attributes));
        Ok(())
    }

    fn end_rich(&mut self) -> MarkupResult<()> {
        let Some(context) = self.rich.take() else {
            debug!("Ignoring </{}> without an open tag", RICH_TAG);
            return Ok(());
        };

        let range = context.start..self.out.len();
        if let Some(tag) = context.click {
            self.runs
                .push(StyleRun::new(range.clone(), RunAttribute::Click(tag)));
        }
        if let Some(color) = context.color {
            let rgb = self.resolver.resolve(&color)?;
            self.runs
                .push(StyleRun::new(range.clone(), RunAttribute::Color(rgb)));
        }
        if let Some(size) = context.size {
            self.runs
                .push(StyleRun::new(range.clone(), RunAttribute::Size(size)));
        }
        if context.font_style != FontStyle::Normal {
            self.runs.push(StyleRun::new(
                range.clone(),
                RunAttribute::FontStyle(context.font_style),
            ));
        }
        if context.underline {
            self.runs.push(StyleRun::new(range, RunAttribute::Underline));
        }
        Ok(())
    }

    /// Closes whatever the document left open and hands back the result.
    fn finish(mut self) -> MarkupResult<StyledText> {
        if self.rich.is_some() {
            debug!("Closing unterminated <{}> at end of document", RICH_TAG);
            self.end_rich()?;
        }
        while let Some(element) = self.open.pop() {
            self.close_element(element);
        }
        Ok(StyledText::new(self.out, self.runs))
    }
}
