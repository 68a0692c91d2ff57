use moji_core::TableError;

use crate::{canonical_key, from_code_point, to_code_point};

#[test]
fn variation_selector_is_dropped() {
    assert_eq!(canonical_key("\u{2764}\u{fe0f}"), "2764");
}

#[test]
fn zwj_sequences_keep_every_codepoint() {
    assert_eq!(
        canonical_key("\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f466}"),
        "1f468-200d-1f469-200d-1f466"
    );
    assert_eq!(
        canonical_key("\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}"),
        "1f3f3-fe0f-200d-1f308"
    );
}

#[test]
fn keycap_key() {
    assert_eq!(canonical_key("3\u{fe0f}\u{20e3}"), "33-20e3");
}

#[test]
fn custom_separator() {
    assert_eq!(to_code_point("\u{1f1e8}\u{1f1f3}", "~"), "1f1e8~1f1f3");
}

#[test]
fn from_code_point_builds_text() {
    assert_eq!(from_code_point("1f1e8-1f1f3").unwrap(), "\u{1f1e8}\u{1f1f3}");
    assert_eq!(from_code_point("2764").unwrap(), "\u{2764}");
}

#[test]
fn from_code_point_rejects_garbage() {
    assert!(matches!(
        from_code_point("1f1e8-zz"),
        Err(TableError::InvalidCodepoint { .. })
    ));
}
