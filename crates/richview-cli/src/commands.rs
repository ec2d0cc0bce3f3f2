//! The `render` and `runs` commands. Both return their output instead of
//! printing it.

use crate::cli::{RenderArgs, RunsArgs};
use crate::paint::paint;
use anyhow::{Context, Result};
use richview::RichTextView;
use richview_config::ViewConfig;
use richview_core::{RunAttribute, StyleRun, StyledText};
use richview_layout::{MonospaceMeasurer, WrapLayouter};
use richview_markup::MarkupParser;
use tracing::debug;

fn terminal_host() -> WrapLayouter<MonospaceMeasurer> {
    WrapLayouter::new(MonospaceMeasurer::default())
}

/// Loads the config file if given, then applies command-line overrides.
fn view_config(args: &RenderArgs) -> Result<ViewConfig> {
    let mut config = match &args.config {
        Some(path) => ViewConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewConfig::default(),
    };
    if args.max_lines.is_some() {
        config.max_lines = args.max_lines;
    }
    if let Some(text) = &args.see_more {
        config.see_more.see_more_text = Some(text.clone());
    }
    Ok(config)
}

pub fn render(args: &RenderArgs) -> Result<String> {
    let config = view_config(args)?;
    let mut view = RichTextView::from_config(terminal_host(), &config)?;
    view.set_text_resource(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    if args.expand {
        view.expand();
    } else {
        view.measure(f32::from(args.width))?;
    }
    debug!(
        "Rendering {} of {} bytes",
        view.displayed().len(),
        view.full_text().len()
    );

    let displayed = view.displayed();
    Ok(if args.plain {
        displayed.as_str().to_string()
    } else {
        paint(displayed)
    })
}

pub fn runs(args: &RunsArgs) -> Result<String> {
    let source = richview::load_text_resource(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let parsed = MarkupParser::new().parse(&source)?;
    if args.json {
        return Ok(serde_json::to_string_pretty(&parsed)?);
    }
    Ok(listing(&parsed))
}

/// The plain text, escaped, followed by one line per run.
pub fn listing(text: &StyledText) -> String {
    let mut out = format!("text: {:?}\n", text.as_str());
    for run in text.runs() {
        out.push_str(&describe(run));
        out.push('\n');
    }
    out
}

fn describe(run: &StyleRun) -> String {
    let attribute = match &run.attribute {
        RunAttribute::Click(tag) => format!("click {:?}", tag),
        RunAttribute::Color(color) => format!("color {}", color),
        RunAttribute::Size(size) => format!("size {}", size),
        RunAttribute::FontStyle(style) => format!("style {:?}", style),
        RunAttribute::Underline => "underline".to_string(),
    };
    format!("{}..{} {}", run.start, run.end, attribute)
}
