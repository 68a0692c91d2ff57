//! Prefix grouping: factor sequences into `prefix + class` alternatives.
//!
//! `[1,2,3] [1,2,5] [1,2,9] [8,9] [20]` groups into `1 2 [359]`, `8 9`, `20`.
//! This is what keeps skin tone and flag permutations from exploding the pattern.

use std::collections::{BTreeMap, BTreeSet};

use crate::spans::compact;
use crate::{CompileError, Encoding, Result};

/// Terminal units that may follow one shared prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanGroup {
    pub prefix: Vec<u32>,
    pub terminals: BTreeSet<u32>,
}

impl SpanGroup {
    pub fn render(&self, encoding: Encoding) -> String {
        let terminals: Vec<u32> = self.terminals.iter().copied().collect();
        let mut out = encoding.literal(&self.prefix);
        out.push_str(&compact(&terminals, encoding));
        out
    }
}

/// Group already-encoded unit sequences by everything but their last unit.
///
/// Longest prefixes come first so an alternative never shadows a longer one
/// starting at the same position. Equal lengths are ordered by unit value.
pub fn span_groups<'a, I>(sequences: I) -> Vec<SpanGroup>
where
    I: IntoIterator<Item = &'a [u32]>,
{
    let mut by_prefix: BTreeMap<&'a [u32], BTreeSet<u32>> = BTreeMap::new();
    for units in sequences {
        let Some((&last, prefix)) = units.split_last() else {
            continue;
        };
        by_prefix.entry(prefix).or_default().insert(last);
    }

    let mut groups: Vec<SpanGroup> = by_prefix
        .into_iter()
        .map(|(prefix, terminals)| SpanGroup {
            prefix: prefix.to_vec(),
            terminals,
        })
        .collect();
    // stable: keeps the BTreeMap order within one length
    groups.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    groups
}

/// Build one fragment matching exactly the given codepoint sequences.
///
/// Codepoints are first split into `encoding` units. A single group with no
/// prefix is returned bare; anything else is wrapped as `(?:a|b|...)`.
pub fn group_sequences<S>(sequences: &[S], encoding: Encoding) -> Result<String>
where
    S: AsRef<[u32]>,
{
    let encoded: Vec<Vec<u32>> = sequences
        .iter()
        .map(|s| encoding.units(s.as_ref()))
        .collect();
    let groups = span_groups(encoded.iter().map(Vec::as_slice));

    match groups.as_slice() {
        [] => Err(CompileError::EmptyAlternation),
        [only] if only.prefix.is_empty() => Ok(only.render(encoding)),
        _ => {
            let parts: Vec<String> = groups.iter().map(|g| g.render(encoding)).collect();
            Ok(format!("(?:{})", parts.join("|")))
        }
    }
}
