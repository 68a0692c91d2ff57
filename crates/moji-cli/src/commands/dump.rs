use std::path::PathBuf;

use moji_compiler::{Config, Encoding};

use super::input::{compile_table, fail, load_table};

pub struct DumpArgs {
    pub table_path: PathBuf,
    pub encoding: Encoding,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let table = load_table(&args.table_path).unwrap_or_else(|msg| fail(msg));

    // Fragments are shown even if the master would fail to re-parse.
    let config = Config::new()
        .encoding(args.encoding)
        .verify(false)
        .colored(args.color);
    let pattern = compile_table(&table, config, None, args.color).unwrap_or_else(|msg| fail(msg));

    print!("{}", pattern.dump());
}
