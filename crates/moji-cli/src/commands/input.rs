//! Reading tables and text from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use moji_compiler::{CompiledPattern, Config, PatternCompiler, PrintTracer, Verbosity};
use moji_core::{Colors, EmojiTable, parse_table};

/// Read a file as UTF-8, with `-` meaning stdin.
pub fn read_text(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), String> {
    fs::write(path, contents).map_err(|e| format!("failed to write '{}': {}", path.display(), e))
}

pub fn load_table(path: &Path) -> Result<EmojiTable, String> {
    let json = read_text(path)?;
    let table = parse_table(&json).map_err(|e| format!("{}: {}", path.display(), e))?;
    if table.is_empty() {
        return Err(format!("{}: table has no emoji", path.display()));
    }
    Ok(table)
}

/// Compile with an optional trace. The trace is printed even when compilation fails.
pub fn compile_table(
    table: &EmojiTable,
    config: Config,
    verbosity: Option<Verbosity>,
    color: bool,
) -> Result<CompiledPattern, String> {
    let compiler = PatternCompiler::new(config);
    let result = match verbosity {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity, Colors::new(color));
            let result = compiler.compile_with_tracer(table, &mut tracer);
            tracer.print();
            result
        }
        None => compiler.compile(table),
    };
    result.map_err(|e| e.to_string())
}

/// Print `error: msg` and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
