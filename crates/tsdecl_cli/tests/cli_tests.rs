//! Driver tests: options, output placement, and diagnostics.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use serde_json::Value;
use tsdecl_cli::{load_options, output_path, parse_files, run, Cli, CliError};

fn write_file(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).expect("write input");
    path.to_string_lossy().into_owned()
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["tsdecl"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn test_requires_a_file() {
    assert!(Cli::try_parse_from(["tsdecl"]).is_err());
}

#[test]
fn test_flags() {
    let parsed = cli(&["--pretty", "--maxDepth", "12", "--noComments", "--outDir", "out", "a.d.ts", "b.d.ts"]);
    assert!(parsed.pretty);
    assert_eq!(parsed.max_depth, Some(12));
    assert!(parsed.no_comments);
    assert_eq!(parsed.out_dir, Some(PathBuf::from("out")));
    assert_eq!(parsed.files, vec!["a.d.ts", "b.d.ts"]);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_options_without_config() {
    let options = load_options(&cli(&["a.d.ts"])).expect("options");
    assert_eq!(options.max_depth(), 200);
    assert!(options.attach_comments());
}

#[test]
fn test_flags_override_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_file(dir.path(), "tsdecl.json", r#"{ "maxDepth": 40, "attachComments": false }"#);

    let options = load_options(&cli(&["--config", &config, "--maxDepth", "7", "a.d.ts"])).expect("options");
    assert_eq!(options.max_depth(), 7);
    assert!(!options.attach_comments());
}

#[test]
fn test_invalid_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_file(dir.path(), "tsdecl.json", "{ maxDepth: }");

    let err = load_options(&cli(&["--config", &config, "a.d.ts"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidConfig { .. }));
}

#[test]
fn test_missing_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("absent.json");

    let err = load_options(&cli(&["--config", &config.to_string_lossy(), "a.d.ts"])).unwrap_err();
    assert!(matches!(err, CliError::ReadConfig { .. }));
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn test_writes_one_document_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let a = write_file(dir.path(), "a.d.ts", "interface A {}");
    let b = write_file(dir.path(), "b.d.ts", "declare function f(): void;");

    let mut out = Vec::new();
    let diagnostics = run(&cli(&[&a, &b]), &mut out).expect("run");
    assert!(diagnostics.is_empty());

    let text = String::from_utf8(out).expect("utf-8 output");
    let documents: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a document"))
        .collect();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["Statements"][0]["Kind"], 264);
    assert_eq!(documents[1]["Statements"][0]["Kind"], 262);
}

#[test]
fn test_out_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_file(dir.path(), "lib.d.ts", "declare const x: number;");
    let out_dir = dir.path().join("out");

    let mut out = Vec::new();
    let args = cli(&["--pretty", "--outDir", &out_dir.to_string_lossy(), &input]);
    run(&args, &mut out).expect("run");

    assert!(out.is_empty());
    let written = fs::read_to_string(out_dir.join("lib.d.ts.json")).expect("output file");
    assert!(written.contains('\n'));
    let document: Value = serde_json::from_str(&written).expect("document");
    assert_eq!(document["Kind"], 312);
}

#[test]
fn test_check_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_file(dir.path(), "a.d.ts", "interface A {}");

    let mut out = Vec::new();
    let diagnostics = run(&cli(&["--check", &input]), &mut out).expect("run");
    assert!(diagnostics.is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_syntax_error_becomes_diagnostic() {
    let dir = tempfile::tempdir().expect("temp dir");
    let good = write_file(dir.path(), "good.d.ts", "type A = string;");
    let bad = write_file(dir.path(), "bad.d.ts", "interface A {\n  x: number\n");

    let mut out = Vec::new();
    let diagnostics = run(&cli(&[&good, &bad]), &mut out).expect("run");
    assert_eq!(diagnostics.error_count(), 1);

    let diagnostic = &diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.code, 1005);
    assert_eq!(diagnostic.file.as_deref(), Some(bad.as_str()));
    assert!(diagnostic.to_string().ends_with("error TS1005: '}' expected."));

    let text = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.d.ts").to_string_lossy().into_owned();

    let reports = parse_files(&[missing.clone()], &Default::default());
    let diagnostic = reports[0].outcome.as_ref().unwrap_err();
    assert_eq!(diagnostic.code, 6053);
    assert_eq!(diagnostic.message_text, format!("File '{}' not found.", missing));
}

#[test]
fn test_unreadable_input_is_not_reported_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.d.ts");
    fs::write(&path, b"declare const caf\xe9: string;").expect("write input");
    let path = path.to_string_lossy().into_owned();

    let reports = parse_files(&[path.clone()], &Default::default());
    let diagnostic = reports[0].outcome.as_ref().unwrap_err();
    assert_eq!(diagnostic.code, 5012);
    assert!(
        diagnostic.message_text.starts_with(&format!("Cannot read file '{}': ", path)),
        "{}",
        diagnostic.message_text
    );

    let directory = dir.path().to_string_lossy().into_owned();
    let reports = parse_files(&[directory], &Default::default());
    assert_ne!(reports[0].outcome.as_ref().unwrap_err().code, 6053);
}

#[test]
fn test_no_comments_flag() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_file(dir.path(), "a.d.ts", "/** Docs. */\ninterface A {}");

    let mut out = Vec::new();
    run(&cli(&["--noComments", &input]), &mut out).expect("run");
    let document: Value = serde_json::from_slice(&out).expect("document");
    assert!(document["Statements"][0]["Name"].get("Comment").is_none());
}

#[test]
fn test_output_path() {
    assert_eq!(output_path(Path::new("out"), "src/types/index.d.ts"), PathBuf::from("out/index.d.ts.json"));
}
