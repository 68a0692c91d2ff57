//! Sequence classification: every table record lands in exactly one category bucket.
//!
//! Gendered ZWJ sequences are not stored verbatim. Only the canonical member of
//! each man/woman/person (or male/female sign) family contributes its residue;
//! the compiler reinserts the gender as a class, which covers the complements.

use std::collections::HashSet;

use indexmap::IndexMap;
use moji_core::codepoints::{FEMALE_SIGN, KEYCAP, MALE_SIGN, MAN, PERSON, VS16, WOMAN, ZWJ};
use moji_core::{EmojiRecord, EmojiTable, EmojiType, hex_key};

use crate::trace::{NoopTracer, Tracer};
use crate::{Category, CompileError, Result};

/// Which side of a ZWJ sequence carries the gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenderAxis {
    /// `PERSON ZWJ rest`
    LeadingGender,
    /// `base VS16 ZWJ MALE-SIGN VS16`
    TrailingGenderWithVariant,
    /// `base ZWJ MALE-SIGN VS16`
    TrailingGenderWithoutVariant,
}

impl GenderAxis {
    pub fn category(self) -> Category {
        match self {
            Self::LeadingGender => Category::ZwjLeadingGender,
            Self::TrailingGenderWithVariant => Category::ZwjTrailingGenderWithVariant,
            Self::TrailingGenderWithoutVariant => Category::ZwjTrailingGenderWithoutVariant,
        }
    }
}

/// Structural reading of a gendered ZWJ sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenderShape<'a> {
    /// Sequences that must exist elsewhere in the table.
    pub complements: Vec<Vec<u32>>,
    /// Bucket entry, present only for the canonical member of the family.
    pub residue: Option<(GenderAxis, &'a [u32])>,
}

/// Match a ZWJ diversity sequence against the seven gender shapes, in order.
///
/// Returns `None` when no shape fits.
pub fn gender_shape(cps: &[u32]) -> Option<GenderShape<'_>> {
    let shape = match cps {
        [MAN, ZWJ, ..] => GenderShape {
            complements: vec![with_head(cps, WOMAN), with_head(cps, PERSON)],
            residue: None,
        },
        [WOMAN, ZWJ, ..] => GenderShape {
            complements: vec![with_head(cps, MAN), with_head(cps, PERSON)],
            residue: None,
        },
        [PERSON, ZWJ, rest @ ..] => GenderShape {
            complements: vec![with_head(cps, MAN), with_head(cps, WOMAN)],
            residue: Some((GenderAxis::LeadingGender, rest)),
        },
        [base @ .., VS16, ZWJ, MALE_SIGN, VS16] => GenderShape {
            complements: vec![with_sign(cps, FEMALE_SIGN)],
            residue: Some((GenderAxis::TrailingGenderWithVariant, base)),
        },
        [.., VS16, ZWJ, FEMALE_SIGN, VS16] => GenderShape {
            complements: vec![with_sign(cps, MALE_SIGN)],
            residue: None,
        },
        [base @ .., ZWJ, MALE_SIGN, VS16] => GenderShape {
            complements: vec![with_sign(cps, FEMALE_SIGN)],
            residue: Some((GenderAxis::TrailingGenderWithoutVariant, base)),
        },
        [.., ZWJ, FEMALE_SIGN, VS16] => GenderShape {
            complements: vec![with_sign(cps, MALE_SIGN)],
            residue: None,
        },
        _ => return None,
    };
    Some(shape)
}

fn with_head(cps: &[u32], head: u32) -> Vec<u32> {
    let mut out = cps.to_vec();
    out[0] = head;
    out
}

/// Replace the trailing `SIGN VS16` pair.
fn with_sign(cps: &[u32], sign: u32) -> Vec<u32> {
    let mut out = cps[..cps.len() - 2].to_vec();
    out.extend([sign, VS16]);
    out
}

/// Sequences per category, in table order. Every category is present, possibly empty.
#[derive(Clone, Debug)]
pub struct Classification {
    buckets: IndexMap<Category, Vec<Vec<u32>>>,
}

impl Classification {
    fn new() -> Self {
        Self {
            buckets: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    fn push(&mut self, category: Category, cps: Vec<u32>, tracer: &mut impl Tracer) {
        tracer.trace_classified(category, &hex_key(&cps, "-"));
        self.buckets.entry(category).or_default().push(cps);
    }

    pub fn sequences(&self, category: Category) -> &[Vec<u32>] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Vec<u32>])> {
        self.buckets.iter().map(|(c, seqs)| (*c, seqs.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Classify a table without tracing.
pub fn classify(table: &EmojiTable) -> Result<Classification> {
    classify_with_tracer(table, &mut NoopTracer)
}

/// Partition every record of `table` into category buckets.
///
/// Fails on ZWJ sequences with a type other than `diversity`/`normal`, on
/// gendered sequences outside the seven known shapes, and on missing complements.
pub fn classify_with_tracer(table: &EmojiTable, tracer: &mut impl Tracer) -> Result<Classification> {
    let mut out = Classification::new();
    let mut gendered: Vec<&EmojiRecord> = Vec::new();

    for record in table.records() {
        let cps = record.codepoints();

        if record.kind() == EmojiType::MultiDiversity {
            for seq in record.diversity_set()? {
                out.push(Category::MultiDiversity, seq.codepoints().to_vec(), tracer);
            }
            continue;
        }

        if record.sequence().has_zwj() {
            match record.kind() {
                EmojiType::Diversity => gendered.push(record),
                EmojiType::Normal => out.push(Category::Zwj, cps.to_vec(), tracer),
                kind => {
                    return Err(CompileError::InvalidZwjType {
                        key: record.key().to_string(),
                        kind,
                    });
                }
            }
            continue;
        }

        let category = match record.kind() {
            EmojiType::Keycap => {
                let base = cps.iter().copied().filter(|&cp| cp != KEYCAP).collect();
                out.push(Category::Keycap, base, tracer);
                continue;
            }
            EmojiType::Diversity => Category::Diversity,
            EmojiType::VariantDiversity => Category::VariantDiversity,
            EmojiType::TextDefault => Category::TextDefault,
            EmojiType::Variant => Category::Variant,
            EmojiType::Normal | EmojiType::Flag | EmojiType::Regional => Category::Normal,
            EmojiType::MultiDiversity => unreachable!("handled above"),
        };
        out.push(category, cps.to_vec(), tracer);
    }

    let known: HashSet<&[u32]> = gendered.iter().map(|&r| r.codepoints()).collect();
    for record in gendered {
        let Some(shape) = gender_shape(record.codepoints()) else {
            return Err(CompileError::UnpairedGender {
                key: record.key().to_string(),
            });
        };

        for complement in &shape.complements {
            let complement_key = hex_key(complement, "-");
            if !known.contains(complement.as_slice()) {
                return Err(CompileError::MissingGenderComplement {
                    key: record.key().to_string(),
                    complement: complement_key,
                });
            }
            tracer.trace_gender_pair(record.key(), &complement_key);
        }

        if let Some((axis, residue)) = shape.residue {
            out.push(axis.category(), residue.to_vec(), tracer);
        }
    }

    Ok(out)
}
