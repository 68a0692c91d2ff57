#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for moji emoji tables.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON emoji table (`RawCategory`, `RawEmoji`)
//! - **Analysis layer**: validated, typed records (`EmojiTable`, `EmojiRecord`)
//!
//! Everything here is built once per compilation run and never mutated afterwards.

pub mod codepoints;
pub mod colors;
mod diversity;
mod error;
pub mod key;
mod sequence;
mod table;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod sequence_tests;
#[cfg(test)]
mod table_tests;

pub use colors::{Colors, Painted, Role};
pub use diversity::DiversitySet;
pub use error::TableError;
pub use key::{hex_key, parse_hex_key};
pub use sequence::CodepointSequence;
pub use table::{
    EmojiCategory, EmojiRecord, EmojiTable, EmojiType, MultiDiversity, RawCategory, RawEmoji,
    Template, TemplateToken, parse_table,
};

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
