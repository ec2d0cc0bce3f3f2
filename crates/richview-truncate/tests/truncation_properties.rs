use proptest::prelude::*;
use richview_core::{FontStyle, Layouter, RunAttribute, StyleRun, StyledText, TextMeasurer};
use richview_layout::{MonospaceMeasurer, WrapLayouter};
use richview_markup::MarkupParser;
use richview_truncate::{SeeMoreSpec, TruncationEngine};

fn layouter() -> WrapLayouter<MonospaceMeasurer> {
    WrapLayouter::new(MonospaceMeasurer::default())
}

fn see_more() -> SeeMoreSpec {
    let text = MarkupParser::new()
        .parse(r#"<rich clickable="rich_tag_see_more" style="b">See more</rich>"#)
        .unwrap();
    SeeMoreSpec::new(text)
}

/// Words separated by single spaces, with the occasional hard break.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,8}", prop::bool::weighted(0.15)), 1..40).prop_map(|words| {
        let mut text = String::new();
        for (i, (word, newline)) in words.iter().enumerate() {
            if i > 0 {
                text.push(if *newline { '\n' } else { ' ' });
            }
            text.push_str(word);
        }
        text
    })
}

#[test]
fn markup_end_to_end() {
    let parser = MarkupParser::new();
    let full = parser
        .parse(concat!(
            r#"<rich style="b">aaaa bbbb cccc dddd</rich> eeee ffff gggg hhhh "#,
            "iiii jjjj kkkk llll mmmm nnnn oooo pppp"
        ))
        .unwrap();
    let layouter = layouter();
    let engine = TruncationEngine::new(&layouter, &layouter);
    let layout = layouter.layout(&full, 30.0);
    assert_eq!(layout.line_count(), 3);

    let shown = engine
        .fit(&full, Some(&layout), 2, &see_more(), 30.0)
        .unwrap()
        .unwrap();

    // reserved = ceil(1.1 * (8 + 4)) = 14, so the second line shrinks to 16 cells
    assert_eq!(
        shown.as_str(),
        "aaaa bbbb cccc dddd eeee ffff gggg hhhh iiii j... See more"
    );
    assert_eq!(
        shown.runs(),
        &[
            StyleRun::new(0..19, RunAttribute::FontStyle(FontStyle::Bold)),
            StyleRun::new(50..58, RunAttribute::Click("rich_tag_see_more".into())),
            StyleRun::new(50..58, RunAttribute::FontStyle(FontStyle::Bold)),
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fit_is_idempotent(text in arb_text(), width in 20u16..60, max_lines in 1usize..5) {
        let layouter = layouter();
        let engine = TruncationEngine::new(&layouter, &layouter);
        let full = StyledText::from_plain(text);
        let width = f32::from(width);
        let layout = layouter.layout(&full, width);

        let first = engine.fit(&full, Some(&layout), max_lines, &see_more(), width);
        let second = engine.fit(&full, Some(&layout), max_lines, &see_more(), width);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_fit_stays_within_max_lines(text in arb_text(), width in 20u16..60, max_lines in 1usize..5) {
        let layouter = layouter();
        let engine = TruncationEngine::new(&layouter, &layouter);
        let full = StyledText::from_plain(text);
        let width = f32::from(width);
        let layout = layouter.layout(&full, width);

        if let Some(shown) = engine.fit(&full, Some(&layout), max_lines, &see_more(), width).unwrap() {
            let relaid = layouter.layout(&shown, width);
            prop_assert!(
                relaid.line_count() <= max_lines,
                "{:?} took {} lines at width {}",
                shown.as_str(),
                relaid.line_count(),
                width
            );
            prop_assert!(shown.as_str().ends_with("See more"));
        } else {
            prop_assert!(layout.line_count() <= max_lines);
        }
    }

    #[test]
    fn prop_shrink_never_exceeds_budget(
        text in "[a-zA-Z ]{0,40}",
        reserved in 0u16..30,
        extra in 0u16..30,
    ) {
        let layouter = layouter();
        let engine = TruncationEngine::new(&layouter, &layouter);
        let reserved = f32::from(reserved);
        let available = reserved + f32::from(extra);

        let shown = engine.shrink_to_fit(&text, reserved, available);
        prop_assert!(layouter.measure(shown) + reserved <= available);
        prop_assert!(text.starts_with(shown));
    }
}
