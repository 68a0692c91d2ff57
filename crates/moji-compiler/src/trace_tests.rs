use moji_core::Colors;

use crate::test_utils::fixture_table;
use crate::{Config, PatternCompiler, PrintTracer, Verbosity};

fn trace(verbosity: Verbosity) -> Vec<String> {
    let mut tracer = PrintTracer::new(verbosity, Colors::OFF);
    PatternCompiler::new(Config::new())
        .compile_with_tracer(&fixture_table(), &mut tracer)
        .unwrap();
    tracer.lines().to_vec()
}

#[test]
fn default_lists_fragment_sizes() {
    let lines = trace(Verbosity::Default);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "vs15 (8 bytes)");
    assert_eq!(lines[1], "vs16 (8 bytes)");
    assert!(lines[19].starts_with("master ("));
}

#[test]
fn verbose_adds_pairs_and_sources() {
    let lines = trace(Verbosity::Verbose);
    assert!(lines.contains(&"  pair 1f468-200d-1f4bb ~ 1f469-200d-1f4bb".to_string()));
    assert!(lines.contains(&"  pair 26f9-fe0f-200d-2642-fe0f ~ 26f9-fe0f-200d-2640-fe0f".to_string()));
    assert!(lines.contains(&r"  [\u{23}\u{2a}0-3]".to_string()));
    assert!(!lines.iter().any(|l| l.contains(" <- ")));
}

#[test]
fn very_verbose_adds_classification() {
    let lines = trace(Verbosity::VeryVerbose);
    assert!(lines.contains(&"  keycap <- 23".to_string()));
    assert!(lines.contains(&"  zwj-leading-gender <- 1f4bb".to_string()));
    assert_eq!(lines.iter().filter(|l| l.contains(" <- ")).count(), 43);
}

#[test]
fn colors_wrap_names() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::ON);
    PatternCompiler::new(Config::new())
        .compile_with_tracer(&fixture_table(), &mut tracer)
        .unwrap();
    assert!(tracer.lines()[0].starts_with("\x1b[36mvs15\x1b[0m"));
}
