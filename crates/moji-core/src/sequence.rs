//! The codepoint sequence value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::codepoints::ZWJ;
use crate::key::{hex_key, parse_hex_key};
use crate::TableError;

/// An ordered sequence of Unicode scalar values (never UTF-16 units).
///
/// Equality and hashing look at the codepoints only. The picker flag is presentation
/// metadata: a sequence hidden from the picker is still the same sequence and still
/// has to be recognized in text.
#[derive(Clone, Debug)]
pub struct CodepointSequence {
    codepoints: Vec<u32>,
    key: String,
    include_in_picker: bool,
}

impl CodepointSequence {
    pub fn new(codepoints: Vec<u32>) -> Self {
        Self::with_picker(codepoints, true)
    }

    pub fn with_picker(codepoints: Vec<u32>, include_in_picker: bool) -> Self {
        let key = hex_key(&codepoints, "-");
        Self {
            codepoints,
            key,
            include_in_picker,
        }
    }

    /// Parse a dash-joined hex key such as `1f468-200d-1f4bb`.
    pub fn parse(unicode: &str) -> Result<Self, TableError> {
        parse_hex_key(unicode).map(Self::new)
    }

    pub fn codepoints(&self) -> &[u32] {
        &self.codepoints
    }

    /// Canonical hex key, used for set membership and diagnostics.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn include_in_picker(&self) -> bool {
        self.include_in_picker
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.codepoints.contains(&cp)
    }

    pub fn has_zwj(&self) -> bool {
        self.contains(ZWJ)
    }

    /// The sequence as text. Values that are not scalar values are skipped.
    pub fn to_text(&self) -> String {
        self.codepoints
            .iter()
            .filter_map(|&cp| char::from_u32(cp))
            .collect()
    }
}

impl PartialEq for CodepointSequence {
    fn eq(&self, other: &Self) -> bool {
        self.codepoints == other.codepoints
    }
}

impl Eq for CodepointSequence {}

impl Hash for CodepointSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.codepoints.hash(state);
    }
}

impl AsRef<[u32]> for CodepointSequence {
    fn as_ref(&self) -> &[u32] {
        &self.codepoints
    }
}

impl fmt::Display for CodepointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
