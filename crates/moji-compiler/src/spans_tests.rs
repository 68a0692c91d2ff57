use crate::Encoding;
use crate::spans::{Span, compact, find_contiguous_spans, render_spans};

#[test]
fn merges_consecutive_runs() {
    let spans = find_contiguous_spans(&[0x35, 0x31, 0x33, 0x32, 0x31]);
    assert_eq!(
        spans,
        vec![
            Span {
                start: 0x31,
                end: 0x33
            },
            Span::single(0x35),
        ]
    );
}

#[test]
fn digits_one_to_three_or_five() {
    insta::assert_snapshot!(compact(&[0x31, 0x32, 0x33, 0x35], Encoding::Scalar), @"[1-35]");
}

#[test]
fn two_wide_run_has_no_range_operator() {
    insta::assert_snapshot!(compact(&[0x62, 0x61], Encoding::Scalar), @"[ab]");
}

#[test]
fn single_member_is_not_bracketed() {
    insta::assert_snapshot!(compact(&[0x200d], Encoding::Scalar), @r"\u{200d}");
    insta::assert_snapshot!(compact(&[0x200d], Encoding::Utf16), @r"\u200d");
}

#[test]
fn empty_set_renders_nothing() {
    assert_eq!(render_spans(&[], Encoding::Scalar), "");
}

#[test]
fn skin_tones_form_one_range() {
    insta::assert_snapshot!(
        compact(&[0x1f3ff, 0x1f3fb, 0x1f3fc, 0x1f3fd, 0x1f3fe], Encoding::Scalar),
        @r"[\u{1f3fb}-\u{1f3ff}]"
    );
}

#[test]
fn mixed_members_keep_numeric_order() {
    insta::assert_snapshot!(
        compact(&[0x2a, 0x33, 0x30, 0x23, 0x31, 0x32], Encoding::Scalar),
        @r"[\u{23}\u{2a}0-3]"
    );
}

#[test]
fn span_len() {
    assert_eq!(Span::single(7).len(), 1);
    assert_eq!(Span { start: 3, end: 9 }.len(), 7);
}
