use std::collections::HashSet;

use crate::CodepointSequence;

#[test]
fn key_is_derived_from_codepoints() {
    let seq = CodepointSequence::new(vec![0x1F1FA, 0x1F1F8]);
    assert_eq!(seq.key(), "1f1fa-1f1f8");
    assert_eq!(seq.to_string(), "1f1fa-1f1f8");
    assert_eq!(seq.len(), 2);
    assert!(seq.include_in_picker());
}

#[test]
fn equality_ignores_picker_flag() {
    let a = CodepointSequence::new(vec![0x1F46B, 0x1F3FB]);
    let b = CodepointSequence::with_picker(vec![0x1F46B, 0x1F3FB], false);
    assert_eq!(a, b);

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn equality_is_order_sensitive_and_exact() {
    let a = CodepointSequence::new(vec![0x1F468, 0x200D, 0x1F469]);
    let b = CodepointSequence::new(vec![0x1F469, 0x200D, 0x1F468]);
    let prefix = CodepointSequence::new(vec![0x1F468, 0x200D]);
    assert_ne!(a, b);
    assert_ne!(a, prefix);
}

#[test]
fn zwj_detection() {
    assert!(CodepointSequence::parse("1f468-200d-1f4bb").unwrap().has_zwj());
    assert!(!CodepointSequence::parse("2764-fe0f").unwrap().has_zwj());
}

#[test]
fn to_text_round_trips() {
    let seq = CodepointSequence::parse("2764-fe0f").unwrap();
    assert_eq!(seq.to_text(), "\u{2764}\u{FE0F}");
}
