//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("moji")
        .about("Compile emoji tables into one matching pattern and decorate text with it")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(compile_command())
        .subcommand(dump_command())
        .subcommand(scan_command())
}

/// Validate and compile a table without printing the pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate an emoji table")
        .after_help(
            r#"EXAMPLES:
  moji check emoji.json          # silent on success
  moji check emoji.json -vv      # show pairs and fragment sources"#,
        )
        .arg(table_path_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Compile a table into the master pattern.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile an emoji table into a pattern")
        .after_help(
            r#"EXAMPLES:
  moji compile emoji.json                      # scalar pattern on stdout
  moji compile emoji.json --encoding utf16     # \uXXXX surrogate escapes
  moji compile emoji.json -o emoji.re          # write to file
  moji compile emoji.json --matcher emoji.dfa  # also serialize a matcher"#,
        )
        .arg(table_path_arg())
        .arg(encoding_arg())
        .arg(output_file_arg())
        .arg(matcher_out_arg())
        .arg(no_verify_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Show every named fragment and the master summary.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the named fragments of a compiled table")
        .after_help(
            r#"EXAMPLES:
  moji dump emoji.json
  moji dump emoji.json --encoding utf16 --color never"#,
        )
        .arg(table_path_arg())
        .arg(encoding_arg())
        .arg(color_arg())
}

/// Find emoji in text and decorate them.
pub fn scan_command() -> Command {
    Command::new("scan")
        .about("Replace emoji in text with image tags")
        .override_usage(
            "\
  moji scan --pattern <FILE> [FILE]
  moji scan --table <TABLE> -t <TEXT>
  moji scan --matcher <FILE> [FILE] [--options <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  moji scan --table emoji.json -t 'I ❤️ emoji'
  moji scan --matcher emoji.dfa page.txt --options twemoji.json
  echo '👋🏽' | moji scan --pattern emoji.re --list"#,
        )
        .arg(pattern_file_arg())
        .arg(table_file_arg())
        .arg(matcher_file_arg())
        .group(
            ArgGroup::new("matcher_source")
                .args(["pattern_file", "table_file", "matcher_file"])
                .required(true)
                .multiple(false),
        )
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(options_file_arg())
        .arg(list_arg())
}
