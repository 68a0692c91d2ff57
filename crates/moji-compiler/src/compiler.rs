//! Master pattern assembly.
//!
//! Each category compiles into one fragment through prefix grouping. The fragments
//! are then stitched together with the fixed auxiliary fragments (selectors, joiner,
//! skin tones, gender signs) into one alternation, most specific shape first.

use indexmap::IndexMap;
use moji_core::codepoints::{
    FEMALE_SIGN, KEYCAP, MALE_SIGN, MAN, PERSON, SKIN_TONES, VS15, VS16, WOMAN, ZWJ,
};
use moji_core::{Colors, EmojiTable, Role};

use crate::classify::{Classification, classify_with_tracer};
use crate::grouping::group_sequences;
use crate::trace::{NoopTracer, Tracer};
use crate::verify::check_syntax;
use crate::{Category, CompileError, Config, Encoding, Result};

/// Names of the fixed fragments, in emission order.
pub const AUXILIARY: [&str; 8] = [
    "vs15",
    "vs16",
    "zwj-literal",
    "keycap-literal",
    "skin-tone",
    "skin-tone-or-vs16",
    "female-or-male-sign",
    "man-woman-person",
];

/// Compile `table` with default configuration.
pub fn compile(table: &EmojiTable) -> Result<CompiledPattern> {
    PatternCompiler::new(Config::default()).compile(table)
}

/// Compiles emoji tables into patterns.
pub struct PatternCompiler {
    config: Config,
}

impl PatternCompiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn compile(&self, table: &EmojiTable) -> Result<CompiledPattern> {
        self.compile_with_tracer(table, &mut NoopTracer)
    }

    pub fn compile_with_tracer(
        &self,
        table: &EmojiTable,
        tracer: &mut impl Tracer,
    ) -> Result<CompiledPattern> {
        let classification = classify_with_tracer(table, tracer)?;
        self.assemble(&classification, tracer)
    }

    /// Render every fragment and join them into the master pattern.
    pub fn assemble(
        &self,
        classification: &Classification,
        tracer: &mut impl Tracer,
    ) -> Result<CompiledPattern> {
        let encoding = self.config.encoding;
        let mut fragments: IndexMap<&'static str, String> = IndexMap::new();

        for (name, source) in auxiliary_fragments(encoding)? {
            tracer.trace_fragment(name, &source);
            let previous = fragments.insert(name, source);
            debug_assert!(previous.is_none(), "fragment {name} defined twice");
        }

        for (category, sequences) in classification.iter() {
            if sequences.is_empty() {
                return Err(CompileError::EmptyCategory(category));
            }
            let source = group_sequences(sequences, encoding)?;
            tracer.trace_fragment(category.name(), &source);
            let previous = fragments.insert(category.name(), source);
            debug_assert!(previous.is_none(), "fragment {category} defined twice");
        }

        let source = master(&fragments);
        tracer.trace_master(&source);

        if self.config.verify {
            check_syntax(&source, encoding)?;
        }

        Ok(CompiledPattern {
            encoding,
            source,
            fragments,
            colors: self.config.colors,
        })
    }
}

fn auxiliary_fragments(encoding: Encoding) -> Result<Vec<(&'static str, String)>> {
    let single = |cp: u32| group_sequences(&[[cp]], encoding);
    let any_of = |cps: &[u32]| {
        let seqs: Vec<[u32; 1]> = cps.iter().map(|&cp| [cp]).collect();
        group_sequences(&seqs, encoding)
    };

    let mut skin_tone_or_vs16 = vec![VS16];
    skin_tone_or_vs16.extend(SKIN_TONES);

    let sources = [
        single(VS15)?,
        single(VS16)?,
        single(ZWJ)?,
        single(KEYCAP)?,
        any_of(&SKIN_TONES)?,
        any_of(&skin_tone_or_vs16)?,
        any_of(&[FEMALE_SIGN, MALE_SIGN])?,
        any_of(&[MAN, WOMAN, PERSON])?,
    ];
    Ok(AUXILIARY.into_iter().zip(sources).collect())
}

fn master(f: &IndexMap<&'static str, String>) -> String {
    let get = |name: &str| f.get(name).map_or("", String::as_str);

    let alternatives = [
        get("multi-diversity").to_string(),
        format!(
            "{}{}?{}{}",
            get("man-woman-person"),
            get("skin-tone"),
            get("zwj-literal"),
            get("zwj-leading-gender"),
        ),
        format!(
            "{}{}?{}{}{}?",
            get("zwj-trailing-gender-with-variant"),
            get("skin-tone-or-vs16"),
            get("zwj-literal"),
            get("female-or-male-sign"),
            get("vs16"),
        ),
        format!(
            "{}{}?{}{}{}?",
            get("zwj-trailing-gender-without-variant"),
            get("skin-tone"),
            get("zwj-literal"),
            get("female-or-male-sign"),
            get("vs16"),
        ),
        get("zwj").to_string(),
        format!(
            "{}{}?{}",
            get("keycap"),
            get("vs16"),
            get("keycap-literal")
        ),
        format!("{}{}?", get("variant-diversity"), get("skin-tone-or-vs16")),
        format!("{}{}?", get("diversity"), get("skin-tone")),
        format!("{}{}", get("text-default"), get("vs16")),
        format!("{}{}?", get("variant"), get("vs16")),
        get("normal").to_string(),
    ];
    alternatives.join("|")
}

/// Result of compiling a table.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    encoding: Encoding,
    source: String,
    fragments: IndexMap<&'static str, String>,
    colors: Colors,
}

impl CompiledPattern {
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The master pattern.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    pub fn fragment(&self, name: &str) -> Option<&str> {
        self.fragments.get(name).map(String::as_str)
    }

    /// Named fragments: auxiliaries first, then categories in precedence order.
    pub fn fragments(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fragments.iter().map(|(name, src)| (*name, src.as_str()))
    }

    pub fn category(&self, category: Category) -> Option<&str> {
        self.fragment(category.name())
    }

    /// Human-readable listing of every fragment and the master pattern.
    pub fn dump(&self) -> String {
        let c = self.colors;
        let mut out = String::new();
        for (name, src) in self.fragments() {
            out.push_str(&format!(
                "{} {}\n",
                c.paint(Role::Name, name),
                c.paint(Role::Literal, src)
            ));
        }
        let summary = format!(
            "({} fragments, {}, {} bytes)",
            self.fragments.len(),
            self.encoding,
            self.source.len()
        );
        out.push_str(&format!(
            "{} {}\n",
            c.paint(Role::Name, "master"),
            c.paint(Role::Meta, summary)
        ));
        out
    }
}
