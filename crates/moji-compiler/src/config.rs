//! Compiler configuration.

use moji_core::Colors;

use crate::Encoding;

/// Configuration for pattern compilation.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) encoding: Encoding,
    /// Re-parse scalar output before returning it
    pub(crate) verify: bool,
    /// Color configuration for `CompiledPattern::dump`
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            verify: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, value: Encoding) -> Self {
        self.encoding = value;
        self
    }

    /// Set whether scalar output is parsed back as a syntax check.
    ///
    /// UTF-16 output is never checked: surrogate escapes are not valid scalar syntax.
    pub fn verify(mut self, value: bool) -> Self {
        self.verify = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
