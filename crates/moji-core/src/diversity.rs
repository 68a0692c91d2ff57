//! Skin tone expansion: every sequence a record can be rendered as.

use crate::codepoints::{SKIN_TONES, VS16, ZWJ};
use crate::{CodepointSequence, EmojiRecord, EmojiType, TableError};

/// All sequences derivable from one record by adding 0, 1 or 2 skin tones.
///
/// The base sequence always comes first.
#[derive(Clone, Debug, Default)]
pub struct DiversitySet {
    sequences: Vec<CodepointSequence>,
}

impl DiversitySet {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn base(&self) -> Option<&CodepointSequence> {
        self.sequences.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodepointSequence> {
        self.sequences.iter()
    }

    pub fn contains(&self, codepoints: &[u32]) -> bool {
        self.sequences.iter().any(|s| s.codepoints() == codepoints)
    }
}

impl IntoIterator for DiversitySet {
    type Item = CodepointSequence;
    type IntoIter = std::vec::IntoIter<CodepointSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiversitySet {
    type Item = &'a CodepointSequence;
    type IntoIter = std::slice::Iter<'a, CodepointSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

impl EmojiRecord {
    /// Expand this record into its `DiversitySet`.
    ///
    /// - `diversity`, `variant,diversity`: base plus one sequence per tone. With a ZWJ the tone
    ///   goes right before the first joiner and any VS16 ahead of it is dropped; otherwise the
    ///   tone is appended.
    /// - `multi-diversity`: base plus all 25 ordered tone pairs filled into the templates.
    /// - anything else: just the base.
    pub fn diversity_set(&self) -> Result<DiversitySet, TableError> {
        let mut sequences = vec![self.sequence.clone()];

        match self.kind {
            EmojiType::Diversity | EmojiType::VariantDiversity => {
                let cps = self.sequence.codepoints();
                for tone in SKIN_TONES {
                    sequences.push(CodepointSequence::new(with_tone(cps, tone)));
                }
            }
            EmojiType::MultiDiversity => {
                sequences.extend(self.tone_pairs()?);
            }
            EmojiType::Normal
            | EmojiType::Variant
            | EmojiType::Keycap
            | EmojiType::Flag
            | EmojiType::Regional
            | EmojiType::TextDefault => {}
        }

        Ok(DiversitySet { sequences })
    }

    fn tone_pairs(&self) -> Result<Vec<CodepointSequence>, TableError> {
        let key = self.key();
        let Some(templates) = &self.templates else {
            return Err(TableError::MissingTemplate {
                key: key.to_string(),
            });
        };

        if templates.different.slot_count() != 2 {
            return Err(TableError::InvalidTemplate {
                key: key.to_string(),
                template: templates.different.to_string(),
                reason: "must contain exactly two skintone placeholders",
            });
        }
        if let Some(same) = &templates.same
            && same.slot_count() == 0
        {
            return Err(TableError::InvalidTemplate {
                key: key.to_string(),
                template: same.to_string(),
                reason: "must contain a skintone placeholder",
            });
        }

        let mut out = Vec::with_capacity(SKIN_TONES.len() * SKIN_TONES.len());
        for first in SKIN_TONES {
            for second in SKIN_TONES {
                if first == second {
                    let template = templates.same.as_ref().unwrap_or(&templates.different);
                    out.push(CodepointSequence::new(template.fill(first, second)));
                } else {
                    let visible = first >= second || !templates.different_is_sorted;
                    out.push(CodepointSequence::with_picker(
                        templates.different.fill(first, second),
                        visible,
                    ));
                }
            }
        }
        Ok(out)
    }
}

fn with_tone(cps: &[u32], tone: u32) -> Vec<u32> {
    let Some(zwj) = cps.iter().position(|&cp| cp == ZWJ) else {
        let mut out = cps.to_vec();
        out.push(tone);
        return out;
    };

    let (before, after) = cps.split_at(zwj);
    let mut out: Vec<u32> = before.iter().copied().filter(|&cp| cp != VS16).collect();
    out.push(tone);
    out.extend_from_slice(after);
    out
}
