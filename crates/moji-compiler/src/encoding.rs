//! Target encodings for emitted patterns.

use std::fmt::{self, Write};

/// What a pattern matches on, and how it spells codepoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Unicode scalar values, `\u{1f468}`. Executable by the native regex engine.
    #[default]
    Scalar,
    /// UTF-16 code units, `\ud83d\udc68`. For embedding into JavaScript sources.
    Utf16,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Utf16 => "utf16",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scalar" => Some(Self::Scalar),
            "utf16" | "utf-16" => Some(Self::Utf16),
            _ => None,
        }
    }

    /// Split codepoints into the units this encoding matches on.
    ///
    /// Under UTF-16 every supplementary codepoint becomes a surrogate pair, so a
    /// class can only ever range over low surrogates sharing one high surrogate.
    pub fn units(self, codepoints: &[u32]) -> Vec<u32> {
        match self {
            Self::Scalar => codepoints.to_vec(),
            Self::Utf16 => {
                let mut units = Vec::with_capacity(codepoints.len() * 2);
                for &cp in codepoints {
                    match cp {
                        0x10000..=0x10FFFF => {
                            units.push(((cp - 0x10000) >> 10) + 0xD800);
                            units.push((cp & 0x3FF) + 0xDC00);
                        }
                        0..=0xFFFF => units.push(cp),
                        _ => {}
                    }
                }
                units
            }
        }
    }

    /// Append one unit. ASCII alphanumerics are written as-is, everything else escaped.
    pub fn push_unit(self, out: &mut String, unit: u32) {
        if let Ok(byte) = u8::try_from(unit)
            && byte.is_ascii_alphanumeric()
        {
            out.push(char::from(byte));
            return;
        }

        // writing to a String cannot fail
        let _ = match self {
            Self::Scalar => write!(out, "\\u{{{unit:x}}}"),
            Self::Utf16 => write!(out, "\\u{unit:04x}"),
        };
    }

    /// Render already-encoded units as a literal run.
    pub fn literal(self, units: &[u32]) -> String {
        let mut out = String::new();
        for &unit in units {
            self.push_unit(&mut out, unit);
        }
        out
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
