//! ANSI output for styled text

use crossterm::style::{Color, ContentStyle, Stylize};
use richview_core::{ResolvedStyle, StyledText};

/// Terminal style for a folded run style. Sizes have no terminal equivalent;
/// click regions are underlined like links.
pub fn content_style(style: &ResolvedStyle) -> ContentStyle {
    let mut content = ContentStyle::new();
    if style.font_style.is_bold() {
        content = content.bold();
    }
    if style.font_style.is_italic() {
        content = content.italic();
    }
    if style.underline || style.click.is_some() {
        content = content.underlined();
    }
    if let Some(color) = style.color {
        content = content.with(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        });
    }
    content
}

/// Renders `text` with SGR escapes, resetting after every styled segment.
pub fn paint(text: &StyledText) -> String {
    let plain = text.as_str();
    let mut out = String::with_capacity(plain.len());
    for (range, style) in text.segments() {
        let piece = &plain[range];
        let content = content_style(&style);
        if content == ContentStyle::default() {
            out.push_str(piece);
        } else {
            out.push_str(&content.apply(piece).to_string());
        }
    }
    out
}
