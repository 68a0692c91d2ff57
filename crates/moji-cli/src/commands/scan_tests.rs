use super::scan::{list_matches, matcher_from_pattern};

const PATTERN: &str = r"\u{1f44b}[\u{1f3fb}-\u{1f3ff}]?|\u{2764}\u{fe0f}?|3\u{fe0f}?\u{20e3}";

#[test]
fn pattern_file_trailing_newline_is_ignored() {
    let matcher = matcher_from_pattern(&format!("{PATTERN}\n")).unwrap();
    assert!(matcher.contains_emoji("\u{2764}"));
}

#[test]
fn empty_pattern_is_rejected() {
    let err = matcher_from_pattern(" \n").err().unwrap();
    assert_eq!(err, "pattern is empty");
}

#[test]
fn invalid_pattern_reports_build_error() {
    let err = matcher_from_pattern("(").err().unwrap();
    assert!(err.starts_with("failed to build matcher"), "{err}");
}

#[test]
fn list_shows_offset_key_and_text() {
    let matcher = matcher_from_pattern(PATTERN).unwrap();
    let out = list_matches(&matcher, "hi \u{1f44b}\u{1f3fd} 3\u{fe0f}\u{20e3}\u{2764}\u{fe0f}");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "3\t1f44b-1f3fd\t\u{1f44b}\u{1f3fd}",
            "12\t33-20e3\t3\u{fe0f}\u{20e3}",
            "19\t2764\t\u{2764}\u{fe0f}",
        ]
    );
}

#[test]
fn list_of_plain_text_is_empty() {
    let matcher = matcher_from_pattern(PATTERN).unwrap();
    assert_eq!(list_matches(&matcher, "no emoji here"), "");
}
