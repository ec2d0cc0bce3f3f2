use proptest::prelude::*;
use richview_core::{Layouter, StyledText};
use richview_layout::{MonospaceMeasurer, WrapLayouter};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-z]{1,12}", Just("日本".to_string())], 0..20).prop_flat_map(
        |words| {
            let separators = prop::collection::vec(prop_oneof![Just(" "), Just("  "), Just("\n")], words.len());
            separators.prop_map(move |seps| {
                words
                    .iter()
                    .zip(seps)
                    .map(|(word, sep)| format!("{}{}", word, sep))
                    .collect::<String>()
            })
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn lines_tile_the_text(text in text_strategy(), width in 2u16..30) {
        let layouter = WrapLayouter::new(MonospaceMeasurer::default());
        let layout = layouter.layout(&StyledText::from_plain(text.clone()), f32::from(width));

        prop_assert!(layout.line_count() >= 1);
        let mut expected_start = 0;
        for line in layout.lines() {
            prop_assert_eq!(line.start, expected_start);
            prop_assert!(line.end >= line.start);
            expected_start = line.end;
        }
        prop_assert_eq!(expected_start, text.len());
    }

    #[test]
    fn lines_fit_the_width(text in text_strategy(), width in 2u16..30) {
        let layouter = WrapLayouter::new(MonospaceMeasurer::default());
        let layout = layouter.layout(&StyledText::from_plain(text), f32::from(width));
        for line in layout.lines() {
            prop_assert!(line.width <= f32::from(width), "{:?} wider than {}", line, width);
        }
    }

    #[test]
    fn hard_breaks_end_lines(text in text_strategy(), width in 2u16..30) {
        let layouter = WrapLayouter::new(MonospaceMeasurer::default());
        let layout = layouter.layout(&StyledText::from_plain(text.clone()), f32::from(width));
        let breaks = text.matches('\n').count();
        let ending_in_break = (0..layout.line_count())
            .filter(|&i| layout.line_text(&text, i).ends_with('\n'))
            .count();
        prop_assert_eq!(ending_in_break, breaks);
    }
}
