//! Compile errors.
//!
//! All of these mean the table is inconsistent. None are recoverable: a pattern
//! built from a broken table would silently miss emoji.

use moji_core::{EmojiType, TableError};

use crate::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("category '{0}' has no sequences")]
    EmptyCategory(Category),

    #[error("cannot build an alternation from zero sequences")]
    EmptyAlternation,

    #[error("ZWJ item {key}: invalid type '{kind}', must be 'diversity' or 'normal'")]
    InvalidZwjType { key: String, kind: EmojiType },

    #[error("ZWJ diversity item {key} is missing its gender complement {complement}")]
    MissingGenderComplement { key: String, complement: String },

    #[error("ZWJ diversity item {key} must be part of a gender pair")]
    UnpairedGender { key: String },

    #[error("emitted pattern does not parse: {0}")]
    InvalidPattern(String),
}
