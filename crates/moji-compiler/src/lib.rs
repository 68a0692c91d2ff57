//! moji compiler: turns an emoji table into one pattern that recognizes every emoji.
//!
//! Pipeline:
//! - `classify` - partition records into categories, check gender completeness
//! - `grouping` - factor each category into `prefix + class` alternatives
//! - `spans` - compact terminal codepoints into character classes
//! - `compiler` - assemble category fragments into the master pattern
//! - `trace` - compile-time instrumentation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod category;
pub mod classify;
pub mod compiler;
pub mod config;
pub mod encoding;
mod error;
pub mod grouping;
pub mod spans;
pub mod trace;
mod verify;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod encoding_tests;
#[cfg(test)]
mod grouping_tests;
#[cfg(test)]
mod spans_tests;
#[cfg(test)]
mod trace_tests;

pub use category::Category;
pub use classify::{Classification, GenderAxis, classify};
pub use compiler::{CompiledPattern, PatternCompiler, compile};
pub use config::Config;
pub use encoding::Encoding;
pub use error::CompileError;
pub use grouping::{SpanGroup, group_sequences};
pub use spans::{Span, compact};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
