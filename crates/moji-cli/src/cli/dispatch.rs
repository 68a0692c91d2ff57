//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use moji_compiler::{Encoding, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::scan::{MatcherSource, ScanArgs};

pub struct CheckParams {
    pub table_path: PathBuf,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            table_path: p.table_path,
            verbosity: verbosity(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompileParams {
    pub table_path: PathBuf,
    pub encoding: Encoding,
    pub output: Option<PathBuf>,
    pub matcher_out: Option<PathBuf>,
    pub verify: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            encoding: parse_encoding(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            matcher_out: m.get_one::<PathBuf>("matcher_out").cloned(),
            verify: !m.get_flag("no_verify"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            table_path: p.table_path,
            encoding: p.encoding,
            output: p.output,
            matcher_out: p.matcher_out,
            verify: p.verify,
            verbosity: verbosity(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub table_path: PathBuf,
    pub encoding: Encoding,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            encoding: parse_encoding(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            table_path: p.table_path,
            encoding: p.encoding,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ScanParams {
    pub source: MatcherSource,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub options_file: Option<PathBuf>,
    pub list: bool,
}

impl ScanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let path = |id: &str| m.get_one::<PathBuf>(id).cloned();

        // The required group guarantees exactly one of the three.
        let source = if let Some(p) = path("pattern_file") {
            MatcherSource::Pattern(p)
        } else if let Some(p) = path("table_file") {
            MatcherSource::Table(p)
        } else {
            MatcherSource::Serialized(path("matcher_file").unwrap_or_default())
        };

        Self {
            source,
            input_path: path("input_path"),
            input_text: m.get_one::<String>("input_text").cloned(),
            options_file: path("options_file"),
            list: m.get_flag("list"),
        }
    }
}

impl From<ScanParams> for ScanArgs {
    fn from(p: ScanParams) -> Self {
        Self {
            source: p.source,
            input_path: p.input_path,
            input_text: p.input_text,
            options_file: p.options_file,
            list: p.list,
        }
    }
}

fn table_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("table_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_encoding(m: &ArgMatches) -> Encoding {
    m.get_one::<String>("encoding")
        .and_then(|name| Encoding::from_name(name))
        .unwrap_or_default()
}

/// `-v` count to trace level. No flag means no trace at all.
fn verbosity(count: u8) -> Option<Verbosity> {
    match count {
        0 => None,
        1 => Some(Verbosity::Default),
        2 => Some(Verbosity::Verbose),
        _ => Some(Verbosity::VeryVerbose),
    }
}
