//! Canonical hex keys: `1f468-200d-1f4bb`.

use crate::TableError;

/// Join codepoints as lowercase, unpadded hex.
///
/// # Examples
/// ```
/// use moji_core::hex_key;
/// assert_eq!(hex_key(&[0x33, 0x20e3], "-"), "33-20e3");
/// assert_eq!(hex_key(&[0x1F1FA, 0x1F1F8], "~"), "1f1fa~1f1f8");
/// ```
pub fn hex_key(codepoints: &[u32], sep: &str) -> String {
    let mut key = String::with_capacity(codepoints.len() * 6);
    for (i, cp) in codepoints.iter().enumerate() {
        if i > 0 {
            key.push_str(sep);
        }
        key.push_str(&format!("{cp:x}"));
    }
    key
}

/// Parse a dash-joined hex key back into codepoints.
///
/// Every token must be a Unicode scalar value; surrogates and values past U+10FFFF are rejected.
pub fn parse_hex_key(unicode: &str) -> Result<Vec<u32>, TableError> {
    let unicode = unicode.trim();
    if unicode.is_empty() {
        return Err(TableError::EmptySequence);
    }

    unicode
        .split('-')
        .map(|token| parse_codepoint(unicode, token))
        .collect()
}

pub(crate) fn parse_codepoint(unicode: &str, token: &str) -> Result<u32, TableError> {
    u32::from_str_radix(token.trim(), 16)
        .ok()
        .filter(|&cp| char::from_u32(cp).is_some())
        .ok_or_else(|| TableError::InvalidCodepoint {
            unicode: unicode.to_string(),
            token: token.to_string(),
        })
}
