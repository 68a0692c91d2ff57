use std::collections::BTreeSet;

use crate::grouping::{SpanGroup, group_sequences, span_groups};
use crate::{CompileError, Encoding};

fn ascii(words: &[&str]) -> Vec<Vec<u32>> {
    words
        .iter()
        .map(|w| w.chars().map(u32::from).collect())
        .collect()
}

#[test]
fn factors_shared_prefixes() {
    let seqs = ascii(&["abc", "abe", "abi", "hi", "t"]);
    insta::assert_snapshot!(group_sequences(&seqs, Encoding::Scalar).unwrap(), @"(?:ab[cei]|hi|t)");
}

#[test]
fn bare_class_without_prefix() {
    let seqs = ascii(&["c", "a", "b"]);
    insta::assert_snapshot!(group_sequences(&seqs, Encoding::Scalar).unwrap(), @"[a-c]");
}

#[test]
fn single_prefixed_group_is_still_wrapped() {
    let seqs = ascii(&["ab", "ac"]);
    insta::assert_snapshot!(group_sequences(&seqs, Encoding::Scalar).unwrap(), @"(?:a[bc])");
}

#[test]
fn longer_prefixes_come_first() {
    let seqs = ascii(&["x", "yz", "abc", "ba"]);
    let groups = span_groups(seqs.iter().map(Vec::as_slice));
    let prefixes: Vec<String> = groups
        .iter()
        .map(|g| g.prefix.iter().filter_map(|&u| char::from_u32(u)).collect())
        .collect();
    assert_eq!(prefixes, ["ab", "b", "y", ""]);
}

#[test]
fn duplicates_collapse() {
    let seqs = ascii(&["ab", "ab"]);
    let groups = span_groups(seqs.iter().map(Vec::as_slice));
    assert_eq!(
        groups,
        vec![SpanGroup {
            prefix: vec![0x61],
            terminals: BTreeSet::from([0x62]),
        }]
    );
}

#[test]
fn empty_input_is_an_error() {
    let seqs: Vec<Vec<u32>> = Vec::new();
    assert_eq!(
        group_sequences(&seqs, Encoding::Scalar),
        Err(CompileError::EmptyAlternation)
    );
}

#[test]
fn empty_sequences_are_ignored() {
    let seqs: Vec<Vec<u32>> = vec![vec![]];
    assert_eq!(
        group_sequences(&seqs, Encoding::Scalar),
        Err(CompileError::EmptyAlternation)
    );
}

#[test]
fn utf16_groups_by_high_surrogate() {
    let tones: Vec<[u32; 1]> = (0x1f3fb..=0x1f3ff).map(|cp| [cp]).collect();
    insta::assert_snapshot!(group_sequences(&tones, Encoding::Utf16).unwrap(), @r"(?:\ud83c[\udffb-\udfff])");
}

#[test]
fn utf16_mixed_planes() {
    let seqs = vec![vec![0xfe0f], vec![0x1f3fb], vec![0x1f3fc]];
    insta::assert_snapshot!(group_sequences(&seqs, Encoding::Utf16).unwrap(), @r"(?:\ud83c[\udffb\udffc]|\ufe0f)");
}

#[test]
fn family_sequence() {
    let seqs = vec![vec![0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f466]];
    insta::assert_snapshot!(
        group_sequences(&seqs, Encoding::Scalar).unwrap(),
        @r"(?:\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f466})"
    );
}
