//! Emoji table model.
//!
//! `RawCategory`/`RawEmoji` mirror the JSON table field for field. `EmojiTable::from_raw`
//! validates them into typed records; from there on nothing is a string tag.

use std::fmt;

use crate::key::{parse_codepoint, parse_hex_key};
use crate::{CodepointSequence, TableError};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// One category as it appears in the table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<RawEmoji>,
}

/// One emoji entry as it appears in the table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawEmoji {
    /// Dash-joined hex codepoints, e.g. `1f9d1-200d-1f4bb`.
    pub unicode: String,
    /// Type tag; absent means `normal`.
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Comma-separated keywords.
    pub keywords: Option<String>,
    #[serde(default)]
    pub exclude_from_picker: bool,
    pub multi_diversity_base_same: Option<String>,
    pub multi_diversity_base_different: Option<String>,
    #[serde(default)]
    pub multi_diversity_base_different_is_sorted: bool,
}

/// Parse a JSON table (an array of categories) into validated records.
pub fn parse_table(json: &str) -> Result<EmojiTable, TableError> {
    let raw: Vec<RawCategory> =
        serde_json::from_str(json).map_err(|e| TableError::Json(e.to_string()))?;
    EmojiTable::from_raw(raw)
}

// ============================================================================
// Analysis Layer
// ============================================================================

/// Semantic type of an emoji entry. Decides which expansion rule applies to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmojiType {
    Normal,
    Variant,
    Diversity,
    VariantDiversity,
    MultiDiversity,
    Keycap,
    Flag,
    Regional,
    TextDefault,
}

impl EmojiType {
    pub const ALL: [EmojiType; 9] = [
        EmojiType::Normal,
        EmojiType::Variant,
        EmojiType::Diversity,
        EmojiType::VariantDiversity,
        EmojiType::MultiDiversity,
        EmojiType::Keycap,
        EmojiType::Flag,
        EmojiType::Regional,
        EmojiType::TextDefault,
    ];

    /// Tag used in the table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Variant => "variant",
            Self::Diversity => "diversity",
            Self::VariantDiversity => "variant,diversity",
            Self::MultiDiversity => "multi-diversity",
            Self::Keycap => "keycap",
            Self::Flag => "flag",
            Self::Regional => "regional",
            Self::TextDefault => "text-default",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Takes a single skin tone modifier.
    pub fn is_diversity(self) -> bool {
        matches!(self, Self::Diversity | Self::VariantDiversity)
    }
}

impl fmt::Display for EmojiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token of a multi-diversity template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateToken {
    Codepoint(u32),
    /// Placeholder: a skin tone goes here.
    SkinTone,
}

/// A codepoint sequence with skin tone placeholders, e.g. `1f9d1-skintone-200d-1f91d-200d-1f9d1-skintone`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<TemplateToken>,
}

impl Template {
    pub fn new(tokens: Vec<TemplateToken>) -> Self {
        Self { tokens }
    }

    pub fn parse(template: &str) -> Result<Self, TableError> {
        let template = template.trim();
        if template.is_empty() {
            return Err(TableError::EmptySequence);
        }

        let tokens = template
            .split('-')
            .map(|token| {
                if token.trim().eq_ignore_ascii_case("skintone") {
                    Ok(TemplateToken::SkinTone)
                } else {
                    parse_codepoint(template, token).map(TemplateToken::Codepoint)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn slot_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, TemplateToken::SkinTone))
            .count()
    }

    /// Substitute tones: the first placeholder takes `first`, every later one takes `second`.
    pub fn fill(&self, first: u32, second: u32) -> Vec<u32> {
        let mut used_first = false;
        self.tokens
            .iter()
            .map(|token| match *token {
                TemplateToken::Codepoint(cp) => cp,
                TemplateToken::SkinTone if used_first => second,
                TemplateToken::SkinTone => {
                    used_first = true;
                    first
                }
            })
            .collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            match token {
                TemplateToken::Codepoint(cp) => write!(f, "{cp:x}")?,
                TemplateToken::SkinTone => f.write_str("skintone")?,
            }
        }
        Ok(())
    }
}

/// Templates for an emoji depicting two independently colorable people.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiversity {
    /// Used when both people share a tone. Falls back to `different`.
    pub same: Option<Template>,
    pub different: Template,
    /// Only canonically ordered pairs (first tone >= second tone) are shown in the picker.
    pub different_is_sorted: bool,
}

impl MultiDiversity {
    pub fn new(different: Template) -> Self {
        Self {
            same: None,
            different,
            different_is_sorted: false,
        }
    }

    pub fn same(mut self, template: Template) -> Self {
        self.same = Some(template);
        self
    }

    pub fn sorted(mut self, value: bool) -> Self {
        self.different_is_sorted = value;
        self
    }
}

/// One logical emoji.
#[derive(Clone, Debug)]
pub struct EmojiRecord {
    pub(crate) sequence: CodepointSequence,
    pub(crate) kind: EmojiType,
    pub(crate) templates: Option<MultiDiversity>,
    pub(crate) description: String,
    pub(crate) keywords: Vec<String>,
    pub(crate) exclude_from_picker: bool,
}

impl EmojiRecord {
    pub fn new(sequence: CodepointSequence, kind: EmojiType) -> Self {
        Self {
            sequence,
            kind,
            templates: None,
            description: String::new(),
            keywords: Vec::new(),
            exclude_from_picker: false,
        }
    }

    /// Shorthand for tests and hand-built tables: `EmojiRecord::from_hex("1f44b", EmojiType::Diversity)`.
    pub fn from_hex(unicode: &str, kind: EmojiType) -> Result<Self, TableError> {
        CodepointSequence::parse(unicode).map(|seq| Self::new(seq, kind))
    }

    pub fn with_templates(mut self, templates: MultiDiversity) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn excluded_from_picker(mut self, value: bool) -> Self {
        self.exclude_from_picker = value;
        self
    }

    pub fn sequence(&self) -> &CodepointSequence {
        &self.sequence
    }

    pub fn codepoints(&self) -> &[u32] {
        self.sequence.codepoints()
    }

    pub fn key(&self) -> &str {
        self.sequence.key()
    }

    pub fn kind(&self) -> EmojiType {
        self.kind
    }

    pub fn templates(&self) -> Option<&MultiDiversity> {
        self.templates.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_excluded_from_picker(&self) -> bool {
        self.exclude_from_picker
    }

    fn from_raw(raw: RawEmoji) -> Result<Self, TableError> {
        let codepoints = parse_hex_key(&raw.unicode)?;
        let sequence = CodepointSequence::with_picker(codepoints, !raw.exclude_from_picker);

        let kind = match raw.type_tag.as_deref() {
            None => EmojiType::Normal,
            Some(tag) => EmojiType::from_tag(tag.trim()).ok_or_else(|| TableError::UnknownType {
                key: sequence.key().to_string(),
                tag: tag.to_string(),
            })?,
        };

        let templates = match raw.multi_diversity_base_different.as_deref() {
            Some(different) => {
                let same = raw
                    .multi_diversity_base_same
                    .as_deref()
                    .map(Template::parse)
                    .transpose()?;
                Some(MultiDiversity {
                    same,
                    different: Template::parse(different)?,
                    different_is_sorted: raw.multi_diversity_base_different_is_sorted,
                })
            }
            None => None,
        };

        let keywords = raw
            .keywords
            .as_deref()
            .map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            sequence,
            kind,
            templates,
            description: raw.description,
            keywords,
            exclude_from_picker: raw.exclude_from_picker,
        })
    }
}

/// A titled group of emoji.
#[derive(Clone, Debug)]
pub struct EmojiCategory {
    pub id: String,
    pub title: String,
    pub records: Vec<EmojiRecord>,
}

impl EmojiCategory {
    pub fn new(id: impl Into<String>, title: impl Into<String>, records: Vec<EmojiRecord>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            records,
        }
    }
}

/// The complete, ordered emoji table: the compiler's only input.
#[derive(Clone, Debug, Default)]
pub struct EmojiTable {
    categories: Vec<EmojiCategory>,
}

impl EmojiTable {
    pub fn new(categories: Vec<EmojiCategory>) -> Self {
        Self { categories }
    }

    pub fn from_raw(raw: Vec<RawCategory>) -> Result<Self, TableError> {
        let categories = raw
            .into_iter()
            .map(|cat| {
                let records = cat
                    .items
                    .into_iter()
                    .map(EmojiRecord::from_raw)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(EmojiCategory::new(cat.id, cat.title, records))
            })
            .collect::<Result<Vec<_>, TableError>>()?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[EmojiCategory] {
        &self.categories
    }

    /// All records in table order.
    pub fn records(&self) -> impl Iterator<Item = &EmojiRecord> {
        self.categories.iter().flat_map(|c| c.records.iter())
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every sequence a picker should offer, in table order.
    ///
    /// Records excluded from the picker contribute nothing, and derived permutations
    /// flagged as hidden are skipped. This never affects what the pattern matches.
    pub fn picker_sequences(&self) -> Result<Vec<CodepointSequence>, TableError> {
        let mut out = Vec::new();
        for record in self.records() {
            if record.exclude_from_picker {
                continue;
            }
            out.extend(
                record
                    .diversity_set()?
                    .into_iter()
                    .filter(CodepointSequence::include_in_picker),
            );
        }
        Ok(out)
    }
}
