//! Compile-time instrumentation.
//!
//! `NoopTracer` compiles away entirely. `PrintTracer` collects readable lines
//! that the CLI prints to stderr, so stdout stays reserved for the pattern.

use moji_core::{Colors, Role};

use crate::Category;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default (-v): one line per fragment with its size, plus the master size.
    #[default]
    Default,
    /// Verbose (-vv): verified gender pairs, fragment sources.
    Verbose,
    /// Very verbose (-vvv): every sequence as it is assigned a category.
    VeryVerbose,
}

/// Hooks called at fixed points of compilation.
///
/// - `trace_classified` - a sequence landed in a category bucket
/// - `trace_gender_pair` - a gendered ZWJ sequence found its complement
/// - `trace_fragment` - a named fragment was rendered
/// - `trace_master` - the master pattern was assembled
pub trait Tracer {
    fn trace_classified(&mut self, category: Category, key: &str);

    fn trace_gender_pair(&mut self, key: &str, complement: &str);

    fn trace_fragment(&mut self, name: &str, source: &str);

    fn trace_master(&mut self, source: &str);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_classified(&mut self, _category: Category, _key: &str) {}

    #[inline(always)]
    fn trace_gender_pair(&mut self, _key: &str, _complement: &str) {}

    #[inline(always)]
    fn trace_fragment(&mut self, _name: &str, _source: &str) {}

    #[inline(always)]
    fn trace_master(&mut self, _source: &str) {}
}

/// Tracer that collects a compile log.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{}", line);
        }
    }

    fn format_size(&self, source: &str) -> String {
        let bytes = format!("({} bytes)", source.len());
        self.colors.paint(Role::Meta, bytes).to_string()
    }
}

impl Tracer for PrintTracer {
    fn trace_classified(&mut self, category: Category, key: &str) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        self.lines.push(format!(
            "  {} <- {}",
            c.paint(Role::Name, category),
            c.paint(Role::Literal, key)
        ));
    }

    fn trace_gender_pair(&mut self, key: &str, complement: &str) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        self.lines.push(format!(
            "  pair {} ~ {}",
            c.paint(Role::Literal, key),
            c.paint(Role::Literal, complement)
        ));
    }

    fn trace_fragment(&mut self, name: &str, source: &str) {
        let c = self.colors;
        let size = self.format_size(source);
        self.lines.push(format!("{} {}", c.paint(Role::Name, name), size));
        if self.verbosity != Verbosity::Default {
            self.lines.push(format!("  {}", c.paint(Role::Literal, source)));
        }
    }

    fn trace_master(&mut self, source: &str) {
        let size = self.format_size(source);
        self.lines.push(format!("master {}", size));
    }
}
