use std::path::PathBuf;

use moji_compiler::{Config, Verbosity};

use super::input::{compile_table, fail, load_table};

pub struct CheckArgs {
    pub table_path: PathBuf,
    pub verbosity: Option<Verbosity>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let table = load_table(&args.table_path).unwrap_or_else(|msg| fail(msg));

    let config = Config::new().colored(args.color);
    if let Err(msg) = compile_table(&table, config, args.verbosity, args.color) {
        fail(msg);
    }

    // Silent on success (like cargo check)
}
