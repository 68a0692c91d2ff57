//! Table to compiler to scanner, end to end.

use moji_core::{CodepointSequence, EmojiType, parse_table};

use crate::test_utils::{TABLE, matcher};
use crate::{Decorator, Matcher, canonical_key};

fn keys(matcher: &Matcher, text: &str) -> Vec<String> {
    matcher
        .find_iter(text)
        .map(|m| canonical_key(m.text))
        .collect()
}

#[test]
fn every_table_sequence_is_one_match() {
    let table = parse_table(TABLE).unwrap();
    let matcher = matcher();

    for record in table.records() {
        let set = record.diversity_set().unwrap();
        for seq in set.iter() {
            let mut text = seq.to_text();
            if record.kind() == EmojiType::TextDefault {
                text.push('\u{fe0f}');
            }
            let found: Vec<_> = matcher.find_iter(&text).map(|m| m.text).collect();
            assert_eq!(found, [text.as_str()], "{}", seq.key());
        }
    }
}

#[test]
fn toned_and_gendered_keys() {
    let matcher = matcher();
    let text = "hi \u{1f44b}\u{1f3fd}, \u{1f9d1}\u{1f3fb}\u{200d}\u{1f33e} and \u{1f3cc}\u{fe0f}\u{200d}\u{2640}\u{fe0f}!";
    assert_eq!(
        keys(&matcher, text),
        [
            "1f44b-1f3fd",
            "1f9d1-1f3fb-200d-1f33e",
            "1f3cc-fe0f-200d-2640-fe0f"
        ]
    );
}

#[test]
fn selectors_and_keycaps() {
    let matcher = matcher();
    assert_eq!(
        keys(&matcher, "\u{2764}\u{fe0f} \u{2764} 3\u{fe0f}\u{20e3} 3\u{20e3} 3"),
        ["2764", "2764", "33-20e3", "33-20e3"]
    );
}

#[test]
fn text_presentation_is_left_alone() {
    let matcher = matcher();
    assert!(!matcher.contains_emoji("\u{2764}\u{fe0e} \u{2122}"));
    assert_eq!(keys(&matcher, "\u{2122}\u{fe0f}"), ["2122"]);
}

#[test]
fn multi_diversity_pairs() {
    let matcher = matcher();
    let same = CodepointSequence::new(vec![0x1f46b, 0x1f3fc]).to_text();
    let different =
        CodepointSequence::new(vec![0x1f469, 0x1f3fb, 0x200d, 0x1f91d, 0x200d, 0x1f468, 0x1f3ff])
            .to_text();
    assert_eq!(keys(&matcher, &same), ["1f46b-1f3fc"]);
    assert_eq!(
        keys(&matcher, &different),
        ["1f469-1f3fb-200d-1f91d-200d-1f468-1f3ff"]
    );
}

#[test]
fn serialized_matcher_decorates_the_same() {
    let matcher = matcher();
    let restored = Matcher::from_bytes(&matcher.to_bytes()).unwrap();
    let text = "\u{1f1e8}\u{1f1f3} \u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f466}";

    let direct = Decorator::new(matcher).parse_string(text);
    let loaded = Decorator::new(restored).parse_string(text);
    assert_eq!(direct, loaded);
    assert!(direct.contains("/1f1e8-1f1f3.png"));
    assert!(direct.contains("/1f468-200d-1f469-200d-1f466.png"));
}
