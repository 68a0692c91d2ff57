use indoc::indoc;

use crate::{EmojiType, TableError, TemplateToken, parse_table};

const TABLE: &str = indoc! {r#"
    [
      {
        "id": "people",
        "title": "People",
        "items": [
          { "unicode": "1f44b", "type": "diversity", "description": "waving hand", "keywords": "hello, wave" },
          {
            "unicode": "1f46b",
            "type": "multi-diversity",
            "multi_diversity_base_same": "1f46b-skintone",
            "multi_diversity_base_different": "1f469-skintone-200d-1f91d-200d-1f468-skintone",
            "multi_diversity_base_different_is_sorted": true
          }
        ]
      },
      {
        "id": "symbols",
        "title": "Symbols",
        "items": [
          { "unicode": "2764", "type": "variant" },
          { "unicode": "1f600" },
          { "unicode": "1f5ff", "exclude_from_picker": true }
        ]
      }
    ]
"#};

#[test]
fn parses_categories_in_order() {
    let table = parse_table(TABLE).unwrap();
    let ids: Vec<_> = table.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["people", "symbols"]);
    assert_eq!(table.len(), 5);
}

#[test]
fn missing_type_means_normal() {
    let table = parse_table(TABLE).unwrap();
    let grinning = table.records().find(|r| r.key() == "1f600").unwrap();
    assert_eq!(grinning.kind(), EmojiType::Normal);
}

#[test]
fn keywords_are_split_and_trimmed() {
    let table = parse_table(TABLE).unwrap();
    let wave = table.records().next().unwrap();
    assert_eq!(wave.description(), "waving hand");
    assert_eq!(wave.keywords(), ["hello", "wave"]);
}

#[test]
fn templates_are_parsed() {
    let table = parse_table(TABLE).unwrap();
    let couple = table.records().find(|r| r.key() == "1f46b").unwrap();
    let templates = couple.templates().unwrap();
    assert!(templates.different_is_sorted);
    assert_eq!(
        templates.same.as_ref().unwrap().tokens(),
        [TemplateToken::Codepoint(0x1F46B), TemplateToken::SkinTone]
    );
    assert_eq!(
        templates.different.to_string(),
        "1f469-skintone-200d-1f91d-200d-1f468-skintone"
    );
}

#[test]
fn unknown_type_names_the_sequence() {
    let err = parse_table(r#"[{"id": "x", "title": "X", "items": [{"unicode": "1f600", "type": "sparkly"}]}]"#)
        .unwrap_err();
    assert_eq!(
        err,
        TableError::UnknownType {
            key: "1f600".to_string(),
            tag: "sparkly".to_string(),
        }
    );
    assert_eq!(err.to_string(), "emoji 1f600: unknown type 'sparkly'");
}

#[test]
fn every_type_tag_round_trips() {
    for kind in EmojiType::ALL {
        assert_eq!(EmojiType::from_tag(kind.as_str()), Some(kind));
    }
    assert_eq!(EmojiType::from_tag("variant,diversity"), Some(EmojiType::VariantDiversity));
}

#[test]
fn invalid_json_is_reported() {
    assert!(matches!(parse_table("{"), Err(TableError::Json(_))));
}

#[test]
fn picker_skips_excluded_and_hidden_sequences() {
    let table = parse_table(TABLE).unwrap();
    let picker = table.picker_sequences().unwrap();

    // waving hand: 6, couple: 26 minus 10 hidden, heart: 1, grinning: 1, moai: excluded
    assert_eq!(picker.len(), 6 + 16 + 1 + 1);
    assert!(!picker.iter().any(|s| s.key() == "1f5ff"));
}
