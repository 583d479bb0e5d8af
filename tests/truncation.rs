//! Property tests for the visual-width utility.

use neve::width::{ELLIPSIS, SUMMARY_BUDGET, TITLE_BUDGET};
use neve::{truncate_visual, visual_length};
use proptest::prelude::*;

fn mixed_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            proptest::char::range('A', 'Z'),
            proptest::char::range('0', '9'),
            Just(' '),
            proptest::char::range('\u{4e00}', '\u{4fff}'),
            proptest::char::range('\u{ff01}', '\u{ff5e}'),
        ],
        0..120,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn length_is_between_half_and_full_char_count(s in mixed_text()) {
        let n = s.chars().count() as f64;
        let len = visual_length(&s);
        prop_assert!(len >= n * 0.5 - 1e-9);
        prop_assert!(len <= n + 1e-9);
    }

    #[test]
    fn truncation_output_never_exceeds_budget_plus_marker(s in mixed_text()) {
        for budget in [TITLE_BUDGET, SUMMARY_BUDGET] {
            let out = truncate_visual(&s, budget);
            if out.ends_with(ELLIPSIS) {
                let body: String = out.chars().take(out.chars().count() - 1).collect();
                prop_assert!(visual_length(&body) <= budget);
                prop_assert!(s.starts_with(&body));
            } else {
                prop_assert_eq!(&out, &s);
            }
        }
    }

    #[test]
    fn strings_within_budget_pass_through(s in mixed_text()) {
        let budget = visual_length(&s) + 1.0;
        prop_assert_eq!(truncate_visual(&s, budget), s);
    }

    #[test]
    fn truncation_is_idempotent_at_any_budget(s in mixed_text(), budget in 1u32..80) {
        let budget = f64::from(budget);
        let once = truncate_visual(&s, budget);
        let twice = truncate_visual(&once, budget);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn truncation_is_monotone_in_the_budget(s in mixed_text()) {
        // A bigger budget never yields a shorter kept prefix.
        let small = truncate_visual(&s, TITLE_BUDGET);
        let large = truncate_visual(&s, SUMMARY_BUDGET);
        let small_body: String = if small.ends_with(ELLIPSIS) {
            small.chars().take(small.chars().count() - 1).collect()
        } else {
            small.clone()
        };
        prop_assert!(large.starts_with(&small_body));
    }
}

#[test]
fn spec_examples_hold() {
    assert_eq!(visual_length("abc"), 1.5);
    assert_eq!(visual_length("中文"), 2.0);
    assert_eq!(visual_length(""), 0.0);

    let long_title = "中文标题超过限制的文字内容在这里继续一直到超过二十六个汉字长度为止";
    let cut = truncate_visual(long_title, 26.0);
    assert!(cut.ends_with(ELLIPSIS));
    let body: String = cut.chars().take(cut.chars().count() - 1).collect();
    assert!(visual_length(&body) <= 26.0);
}
