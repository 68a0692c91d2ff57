//! Errors raised while building the typed emoji table.

/// A table entry that cannot be turned into a valid `EmojiRecord`.
///
/// Every variant names the offending sequence so the entry can be found in the source table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid codepoint '{token}' in sequence '{unicode}'")]
    InvalidCodepoint { unicode: String, token: String },

    #[error("empty codepoint sequence")]
    EmptySequence,

    #[error("emoji {key}: unknown type '{tag}'")]
    UnknownType { key: String, tag: String },

    #[error("emoji {key}: multi-diversity template '{template}' {reason}")]
    InvalidTemplate {
        key: String,
        template: String,
        reason: &'static str,
    },

    #[error("emoji {key}: multi-diversity emoji needs a multi_diversity_base_different template")]
    MissingTemplate { key: String },

    #[error("emoji table is not valid JSON: {0}")]
    Json(String),
}
