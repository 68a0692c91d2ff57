//! Canonical keys: the hex name an emoji's image is stored under.

use moji_core::codepoints::chars::{VS16, ZWJ};
use moji_core::{TableError, hex_key, parse_hex_key};

/// Hex codepoints of `text` joined by `sep`: `"\u{1f1e8}\u{1f1f3}"` gives `1f1e8-1f1f3`.
pub fn to_code_point(text: &str, sep: &str) -> String {
    let codepoints: Vec<u32> = text.chars().map(u32::from).collect();
    hex_key(&codepoints, sep)
}

/// Inverse of `to_code_point` with `-`: `1f1e8-1f1f3` gives `"\u{1f1e8}\u{1f1f3}"`.
pub fn from_code_point(key: &str) -> Result<String, TableError> {
    Ok(parse_hex_key(key)?
        .into_iter()
        .filter_map(char::from_u32)
        .collect())
}

/// Key for a matched emoji.
///
/// VS16 is dropped unless the match contains a ZWJ: joined sequences are
/// stored under their full codepoint list.
pub fn canonical_key(raw: &str) -> String {
    if raw.contains(ZWJ) {
        to_code_point(raw, "-")
    } else {
        let stripped: String = raw.chars().filter(|&c| c != VS16).collect();
        to_code_point(&stripped, "-")
    }
}
