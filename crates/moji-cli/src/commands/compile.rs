use std::io::{self, Write};
use std::path::PathBuf;

use moji_compiler::{Config, Encoding, Verbosity};
use moji_scanner::Matcher;

use super::input::{compile_table, fail, load_table, write_output};

pub struct CompileArgs {
    pub table_path: PathBuf,
    pub encoding: Encoding,
    pub output: Option<PathBuf>,
    pub matcher_out: Option<PathBuf>,
    pub verify: bool,
    pub verbosity: Option<Verbosity>,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    if args.matcher_out.is_some() && args.encoding != Encoding::Scalar {
        fail("--matcher needs --encoding scalar");
    }

    let table = load_table(&args.table_path).unwrap_or_else(|msg| fail(msg));
    let config = Config::new()
        .encoding(args.encoding)
        .verify(args.verify)
        .colored(args.color);
    let pattern = compile_table(&table, config, args.verbosity, args.color)
        .unwrap_or_else(|msg| fail(msg));

    if let Some(path) = &args.matcher_out {
        let matcher = Matcher::new(pattern.source()).unwrap_or_else(|e| fail(e));
        write_output(path, matcher.to_bytes()).unwrap_or_else(|msg| fail(msg));
    }

    match &args.output {
        Some(path) => write_output(path, pattern.source()).unwrap_or_else(|msg| fail(msg)),
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", pattern.source()) {
                fail(format!("failed to write stdout: {}", e));
            }
        }
    }
}
