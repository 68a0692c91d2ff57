//! Decorate text with a compiled matcher.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use moji_compiler::compile;
use moji_scanner::{Decorator, DecoratorOptions, Matcher, canonical_key};

use super::input::{fail, load_table, read_bytes, read_text};

/// Where the matcher comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatcherSource {
    /// Pattern text written by `moji compile`
    Pattern(PathBuf),
    /// Table compiled on the fly
    Table(PathBuf),
    /// Bytes written by `moji compile --matcher`
    Serialized(PathBuf),
}

pub struct ScanArgs {
    pub source: MatcherSource,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub options_file: Option<PathBuf>,
    pub list: bool,
}

pub fn run(args: ScanArgs) {
    let matcher = load_matcher(&args.source).unwrap_or_else(|msg| fail(msg));

    let (text, inline) = match (&args.input_text, &args.input_path) {
        (Some(text), _) => (text.clone(), true),
        (None, Some(path)) => (read_text(path).unwrap_or_else(|msg| fail(msg)), false),
        (None, None) => (read_text(Path::new("-")).unwrap_or_else(|msg| fail(msg)), false),
    };

    if args.list {
        print!("{}", list_matches(&matcher, &text));
        return;
    }

    let options = match &args.options_file {
        Some(path) => load_options(path).unwrap_or_else(|msg| fail(msg)),
        None => DecoratorOptions::default(),
    };
    let decorated = Decorator::new(matcher).options(options).parse_string(&text);
    if inline {
        println!("{}", decorated);
    } else {
        print!("{}", decorated);
    }
}

pub fn load_matcher(source: &MatcherSource) -> Result<Matcher, String> {
    match source {
        MatcherSource::Pattern(path) => matcher_from_pattern(&read_text(path)?),
        MatcherSource::Table(path) => {
            let table = load_table(path)?;
            let pattern = compile(&table).map_err(|e| e.to_string())?;
            Matcher::new(pattern.source()).map_err(|e| e.to_string())
        }
        MatcherSource::Serialized(path) => {
            let bytes = read_bytes(path)?;
            Matcher::from_bytes(&bytes).map_err(|e| format!("{}: {}", path.display(), e))
        }
    }
}

/// Build from pattern text. Surrounding whitespace (a trailing newline from stdout) is ignored.
pub fn matcher_from_pattern(pattern: &str) -> Result<Matcher, String> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err("pattern is empty".to_string());
    }
    Matcher::new(pattern).map_err(|e| e.to_string())
}

fn load_options(path: &Path) -> Result<DecoratorOptions, String> {
    let json = read_text(path)?;
    DecoratorOptions::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
}

/// `offset<TAB>key<TAB>text`, one line per emoji.
pub fn list_matches(matcher: &Matcher, text: &str) -> String {
    let mut out = String::new();
    for m in matcher.find_iter(text) {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}\t{}\t{}", m.start, canonical_key(m.text), m.text);
    }
    out
}
