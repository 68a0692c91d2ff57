//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definition without repeating ids, help text, or parsers.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Emoji table JSON (positional).
pub fn table_path_arg() -> Arg {
    Arg::new("table_path")
        .value_name("TABLE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Emoji table JSON file ('-' for stdin)")
}

/// Output escape encoding (--encoding).
pub fn encoding_arg() -> Arg {
    Arg::new("encoding")
        .long("encoding")
        .value_name("ENCODING")
        .default_value("scalar")
        .value_parser(["scalar", "utf16", "utf-16"])
        .help("Escape form for non-alphanumeric code units")
}

/// Skip re-parsing the assembled pattern (--no-verify).
pub fn no_verify_arg() -> Arg {
    Arg::new("no_verify")
        .long("no-verify")
        .action(ArgAction::SetTrue)
        .help("Skip the syntax check of the assembled pattern")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the pattern to file instead of stdout")
}

/// Write a serialized matcher (--matcher), for `compile`.
pub fn matcher_out_arg() -> Arg {
    Arg::new("matcher_out")
        .long("matcher")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Also write a serialized matcher to file")
}

/// Pattern source file (--pattern).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .long("pattern")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern produced by 'moji compile'")
}

/// Emoji table to compile on the fly (--table).
pub fn table_file_arg() -> Arg {
    Arg::new("table_file")
        .long("table")
        .value_name("TABLE")
        .value_parser(value_parser!(PathBuf))
        .help("Emoji table JSON, compiled before scanning")
}

/// Serialized matcher file (--matcher), for `scan`.
pub fn matcher_file_arg() -> Arg {
    Arg::new("matcher_file")
        .long("matcher")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Serialized matcher written by 'moji compile --matcher'")
}

/// Text file to scan (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Text file to scan (stdin if omitted)")
}

/// Inline text (-t/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline text to scan")
}

/// Decorator options JSON (--options).
pub fn options_file_arg() -> Arg {
    Arg::new("options_file")
        .long("options")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Decorator options JSON (base_url, size, image_type, class_name)")
}

/// List matches instead of decorating (--list).
pub fn list_arg() -> Arg {
    Arg::new("list")
        .long("list")
        .action(ArgAction::SetTrue)
        .help("Print one line per emoji (offset, key, text) instead of decorating")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Print the compile trace to stderr (-v sizes, -vv sources, -vvv every sequence)")
}
