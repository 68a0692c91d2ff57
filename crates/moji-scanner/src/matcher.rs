//! Executable matcher.
//!
//! The pattern is compiled into a forward/reverse pair of sparse DFAs. A `Matcher`
//! holds no search state: every scan gets its own `Matches` cursor.
//!
//! Serialized layout (little endian):
//! `MAGIC (4) | VERSION (u32) | forward length (u32) | forward DFA | reverse DFA`

use std::borrow::Cow;

use moji_core::codepoints::chars::VS15;
use regex_automata::Input;
use regex_automata::dfa::regex::Regex;
use regex_automata::dfa::{StartKind, dense, sparse};

use crate::{Result, ScannerError};

pub const MAGIC: [u8; 4] = *b"MOJI";
pub const VERSION: u32 = 1;

const HEADER_SIZE: usize = 12;

/// One emoji occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmojiMatch<'h> {
    /// Matched text, exactly as it appears in the haystack.
    pub text: &'h str,
    /// Byte offset of `text` in the haystack.
    pub start: usize,
}

impl EmojiMatch<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Compiled emoji pattern.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex<sparse::DFA<Vec<u8>>>,
}

impl Matcher {
    /// Build from pattern source in scalar encoding.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::builder()
            .dense(dense::Config::new().start_kind(StartKind::Unanchored))
            .build_sparse(pattern)
            .map_err(|e| ScannerError::Build(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Load a matcher written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE || bytes[..4] != MAGIC {
            return Err(ScannerError::BadHeader);
        }
        let version = read_u32(&bytes[4..8]);
        if version != VERSION {
            return Err(ScannerError::Deserialize(format!(
                "unsupported version {version}"
            )));
        }

        let forward_len = read_u32(&bytes[8..12]) as usize;
        let body = &bytes[HEADER_SIZE..];
        if forward_len > body.len() {
            return Err(ScannerError::Deserialize("truncated forward DFA".to_string()));
        }
        let (forward_bytes, reverse_bytes) = body.split_at(forward_len);

        let (forward, _) = sparse::DFA::from_bytes(forward_bytes)
            .map_err(|e| ScannerError::Deserialize(e.to_string()))?;
        let (reverse, _) = sparse::DFA::from_bytes(reverse_bytes)
            .map_err(|e| ScannerError::Deserialize(e.to_string()))?;

        let regex = Regex::builder().build_from_dfas(forward.to_owned(), reverse.to_owned());
        Ok(Self { regex })
    }

    /// Serialize both DFAs behind the header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let forward = self.regex.forward().to_bytes_little_endian();
        let reverse = self.regex.reverse().to_bytes_little_endian();

        let mut out = Vec::with_capacity(HEADER_SIZE + forward.len() + reverse.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&(forward.len() as u32).to_le_bytes());
        out.extend_from_slice(&forward);
        out.extend_from_slice(&reverse);
        out
    }

    /// All emoji in `haystack`, left to right, non-overlapping.
    pub fn find_iter<'m, 'h>(&'m self, haystack: &'h str) -> Matches<'m, 'h> {
        Matches {
            matcher: self,
            haystack,
            pos: 0,
        }
    }

    pub fn contains_emoji(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Replace every emoji with the callback's output. Text between matches is copied as-is.
    pub fn replace<'h, F>(&self, text: &'h str, mut replacement: F) -> Cow<'h, str>
    where
        F: FnMut(&EmojiMatch<'h>) -> String,
    {
        let mut matches = self.find_iter(text).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in matches {
            out.push_str(&text[last..m.start]);
            out.push_str(&replacement(&m));
            last = m.end();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(buf)
}

/// Cursor over the emoji of one haystack.
///
/// A match directly followed by VS15 asked for text presentation and is not reported.
pub struct Matches<'m, 'h> {
    matcher: &'m Matcher,
    haystack: &'h str,
    pos: usize,
}

impl<'h> Matches<'_, 'h> {
    /// Move past the char at `pos`.
    fn skip_char(&mut self) {
        let width = self.haystack[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width;
    }
}

impl<'h> Iterator for Matches<'_, 'h> {
    type Item = EmojiMatch<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.haystack.len() {
            let input = Input::new(self.haystack).range(self.pos..);
            let m = match self.matcher.regex.try_search(&input) {
                Ok(Some(m)) => m,
                Ok(None) => {
                    self.pos = self.haystack.len();
                    return None;
                }
                // not expected for these patterns; keep scanning after the anomaly
                Err(_) => {
                    self.skip_char();
                    continue;
                }
            };

            if m.is_empty() {
                self.pos = m.start();
                self.skip_char();
                continue;
            }

            self.pos = m.end();
            if self.haystack[m.end()..].starts_with(VS15) {
                continue;
            }

            return Some(EmojiMatch {
                text: &self.haystack[m.range()],
                start: m.start(),
            });
        }
        None
    }
}
