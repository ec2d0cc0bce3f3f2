use proptest::prelude::*;
use richview_core::{FontStyle, RunAttribute, SizeUnit};
use richview_markup::{parse_size, parse_style, MarkupParser};

fn style_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("b"),
        Just("bold"),
        Just("i"),
        Just("italic"),
        Just("u"),
        Just("underline"),
    ]
}

fn random_case(token: &str, upper: &[bool]) -> String {
    token
        .chars()
        .zip(upper.iter().cycle())
        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
        .collect()
}

/// Plain words that survive whitespace collapsing unchanged.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_style_tokens_are_order_independent(
        tokens in prop::collection::vec(style_token(), 1..4),
        upper in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let forward: Vec<String> = tokens.iter().map(|t| random_case(t, &upper)).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let expected_bold = tokens.iter().any(|t| t.starts_with('b'));
        let expected_italic = tokens.iter().any(|t| t.starts_with('i'));
        let expected_underline = tokens.iter().any(|t| t.starts_with('u'));

        let a = parse_style(&forward.join("_"));
        let b = parse_style(&backward.join("_"));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.0, FontStyle::from_flags(expected_bold, expected_italic));
        prop_assert_eq!(a.1, expected_underline);
    }

    #[test]
    fn prop_size_with_suffix_keeps_unit(value in 1i32..10_000, px in any::<bool>()) {
        let suffix = if px { "px" } else { "sp" };
        let size = parse_size(&format!("{}{}", value, suffix));
        prop_assert_eq!(size.value, value);
        prop_assert_eq!(size.unit, if px { SizeUnit::Pixel } else { SizeUnit::DeviceIndependent });
    }

    #[test]
    fn prop_regions_map_to_their_words(
        words in prop::collection::vec((arb_word(), arb_word()), 1..6),
    ) {
        // "lead<rich clickable=..>word</rich> " repeated
        let mut source = String::new();
        let mut expected_plain = String::new();
        let mut expected_ranges = Vec::new();
        for (i, (lead, word)) in words.iter().enumerate() {
            source.push_str(lead);
            source.push_str(&format!(r#"<rich clickable="r{}">{}</rich> "#, i, word));
            expected_plain.push_str(lead);
            let start = expected_plain.len();
            expected_plain.push_str(word);
            expected_ranges.push((start..expected_plain.len(), format!("r{}", i)));
            expected_plain.push(' ');
        }

        let parsed = MarkupParser::new().parse(&source).unwrap();
        prop_assert_eq!(parsed.as_str(), expected_plain.as_str());
        prop_assert!(!parsed.as_str().contains('<'));
        prop_assert_eq!(parsed.runs().len(), words.len());
        for (run, (range, tag)) in parsed.runs().iter().zip(expected_ranges) {
            prop_assert_eq!(run.range(), range);
            prop_assert_eq!(&run.attribute, &RunAttribute::Click(tag));
        }
    }

    #[test]
    fn prop_runs_stay_in_bounds(source in r#"[a-z <>/="]{0,60}"#) {
        if let Ok(parsed) = MarkupParser::new().parse(&source) {
            for run in parsed.runs() {
                prop_assert!(run.start <= run.end);
                prop_assert!(run.end <= parsed.len());
            }
        }
    }
}
