//! moji scanner: find emoji in text and swap them for image references.
//!
//! The scanner executes a pattern produced by `moji-compiler` (as source text or a
//! serialized matcher). It never rewrites what it cannot resolve.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod decorator;
pub mod document;
mod error;
pub mod escape;
pub mod key;
pub mod matcher;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod key_tests;
#[cfg(test)]
mod pipeline_tests;

pub use decorator::{Decorator, DecoratorOptions};
pub use document::{Element, Node};
pub use error::ScannerError;
pub use escape::{escape_html, is_attribute_name};
pub use key::{canonical_key, from_code_point, to_code_point};
pub use matcher::{EmojiMatch, Matcher, Matches};

/// Result type for scanner setup.
pub type Result<T> = std::result::Result<T, ScannerError>;
