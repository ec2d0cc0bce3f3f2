//! Building the see-more fragment from configuration

use crate::error::ViewResult;
use richview_config::SeeMoreConfig;
use richview_core::ColorResolver;
use richview_markup::{MarkupParser, RICH_TAG};
use richview_truncate::SeeMoreSpec;
use tracing::debug;

/// Click tag of the see-more fragment; clicking it expands the view.
pub const SEE_MORE_TAG: &str = "rich_tag_see_more";

/// The `<rich>` markup for a fragment: size always, color and style when set,
/// and the [`SEE_MORE_TAG`] click region unless the whole view is clickable.
pub fn see_more_markup(config: &SeeMoreConfig, text: &str) -> String {
    let mut markup = format!(
        r#"<{} size="{}""#,
        RICH_TAG,
        html_escape::encode_double_quoted_attribute(&config.see_more_text_size.to_string())
    );
    if let Some(color) = config.see_more_text_color.as_deref().filter(|c| !c.is_empty()) {
        markup.push_str(&format!(
            r#" color="{}""#,
            html_escape::encode_double_quoted_attribute(color)
        ));
    }
    let style = config.see_more_text_style.markup_token();
    if !style.is_empty() {
        markup.push_str(&format!(r#" style="{}""#, style));
    }
    if !config.click_whole_view_to_expand {
        markup.push_str(&format!(r#" clickable="{}""#, SEE_MORE_TAG));
    }
    markup.push_str(&format!(">{}</{}>", text, RICH_TAG));
    markup
}

/// Parses the configured fragment; `None` when no see-more text is set.
pub fn see_more_spec<R: ColorResolver>(
    config: &SeeMoreConfig,
    parser: &MarkupParser<R>,
) -> ViewResult<Option<SeeMoreSpec>> {
    let Some(text) = config.text() else {
        return Ok(None);
    };
    let markup = see_more_markup(config, text);
    debug!("See-more fragment markup: {}", markup);

    Ok(Some(SeeMoreSpec {
        text: parser.parse(&markup)?,
        color: config.see_more_text_color.clone(),
        size: config.see_more_text_size,
        style: config.see_more_text_style.markup_token().to_string(),
        padding: config.see_more_text_padding,
        clickable_whole_view: config.click_whole_view_to_expand,
    }))
}
