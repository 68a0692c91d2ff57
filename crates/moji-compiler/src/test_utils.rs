//! Test fixtures.

use moji_core::{EmojiTable, parse_table};

/// A small table with at least one record in every category.
pub const FIXTURE: &str = indoc::indoc! {r#"
    [
      {
        "id": "people",
        "title": "Smileys & People",
        "items": [
          { "unicode": "1f600", "description": "grinning face" },
          { "unicode": "1f44b", "type": "diversity", "description": "waving hand" },
          { "unicode": "261d", "type": "variant,diversity", "description": "index pointing up" },
          { "unicode": "1f468-200d-1f4bb", "type": "diversity", "description": "man technologist" },
          { "unicode": "1f469-200d-1f4bb", "type": "diversity", "description": "woman technologist" },
          { "unicode": "1f9d1-200d-1f4bb", "type": "diversity", "description": "technologist" },
          { "unicode": "26f9-fe0f-200d-2642-fe0f", "type": "diversity", "description": "man bouncing ball" },
          { "unicode": "26f9-fe0f-200d-2640-fe0f", "type": "diversity", "description": "woman bouncing ball" },
          { "unicode": "1f46e-200d-2642-fe0f", "type": "diversity", "description": "man police officer" },
          { "unicode": "1f46e-200d-2640-fe0f", "type": "diversity", "description": "woman police officer" },
          { "unicode": "1f468-200d-1f469-200d-1f466", "description": "family" },
          {
            "unicode": "1f9d1-200d-1f91d-200d-1f9d1",
            "type": "multi-diversity",
            "description": "people holding hands",
            "multi_diversity_base_same": "1f9d1-skintone-200d-1f91d-200d-1f9d1-skintone",
            "multi_diversity_base_different": "1f9d1-skintone-200d-1f91d-200d-1f9d1-skintone"
          }
        ]
      },
      {
        "id": "symbols",
        "title": "Symbols",
        "items": [
          { "unicode": "2764", "type": "variant", "description": "red heart" },
          { "unicode": "2194", "type": "text-default", "description": "left-right arrow" },
          { "unicode": "23-20e3", "type": "keycap", "description": "keycap: #" },
          { "unicode": "2a-20e3", "type": "keycap", "description": "keycap: *" },
          { "unicode": "30-20e3", "type": "keycap", "description": "keycap: 0" },
          { "unicode": "31-20e3", "type": "keycap", "description": "keycap: 1" },
          { "unicode": "32-20e3", "type": "keycap", "description": "keycap: 2" },
          { "unicode": "33-20e3", "type": "keycap", "description": "keycap: 3" }
        ]
      },
      {
        "id": "flags",
        "title": "Flags",
        "items": [
          { "unicode": "1f1fa-1f1f8", "type": "flag", "description": "flag: United States" },
          { "unicode": "1f1e6", "type": "regional", "description": "regional indicator A" }
        ]
      }
    ]
"#};

pub fn fixture_table() -> EmojiTable {
    parse_table(FIXTURE).expect("fixture table is valid")
}

/// Text form of a dash-joined hex key.
pub fn text(unicode: &str) -> String {
    moji_core::CodepointSequence::parse(unicode)
        .expect("valid key")
        .to_text()
}
