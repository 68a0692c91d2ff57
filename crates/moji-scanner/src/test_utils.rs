//! Test fixtures.

use moji_core::parse_table;

use crate::Matcher;

/// Table covering every category, for end-to-end tests through the compiler.
pub const TABLE: &str = indoc::indoc! {r#"
    [
      {
        "id": "all",
        "title": "All",
        "items": [
          { "unicode": "1f600" },
          { "unicode": "1f44b", "type": "diversity" },
          { "unicode": "270c", "type": "variant,diversity" },
          { "unicode": "1f468-200d-1f33e", "type": "diversity" },
          { "unicode": "1f469-200d-1f33e", "type": "diversity" },
          { "unicode": "1f9d1-200d-1f33e", "type": "diversity" },
          { "unicode": "1f3cc-fe0f-200d-2642-fe0f", "type": "diversity" },
          { "unicode": "1f3cc-fe0f-200d-2640-fe0f", "type": "diversity" },
          { "unicode": "1f477-200d-2642-fe0f", "type": "diversity" },
          { "unicode": "1f477-200d-2640-fe0f", "type": "diversity" },
          { "unicode": "1f468-200d-1f469-200d-1f466" },
          { "unicode": "1f3f3-fe0f-200d-1f308" },
          {
            "unicode": "1f46b",
            "type": "multi-diversity",
            "multi_diversity_base_same": "1f46b-skintone",
            "multi_diversity_base_different": "1f469-skintone-200d-1f91d-200d-1f468-skintone"
          },
          { "unicode": "2764", "type": "variant" },
          { "unicode": "2122", "type": "text-default" },
          { "unicode": "2194", "type": "text-default" },
          { "unicode": "23-20e3", "type": "keycap" },
          { "unicode": "2a-20e3", "type": "keycap" },
          { "unicode": "33-20e3", "type": "keycap" },
          { "unicode": "1f1e8-1f1f3", "type": "flag" },
          { "unicode": "1f1e6", "type": "regional" }
        ]
      }
    ]
"#};

/// Matcher built from `TABLE` by the pattern compiler.
pub fn matcher() -> Matcher {
    let table = parse_table(TABLE).expect("fixture table parses");
    let pattern = moji_compiler::compile(&table).expect("fixture table compiles");
    Matcher::new(pattern.source()).expect("compiled pattern builds")
}
