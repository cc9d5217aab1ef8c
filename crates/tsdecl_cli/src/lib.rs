//! tsdecl_cli: Command-line driver for the declaration parser.
//!
//! Parses each input file on the rayon pool, writes the interchange JSON of
//! every file that parsed, and collects one diagnostic for every file that
//! did not. Printing and the exit code are left to the binary.

pub mod error;
pub mod logging;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use tsdecl_ast::interchange::{to_json, to_json_pretty};
use tsdecl_ast::node::SourceFile;
use tsdecl_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use tsdecl_parser::{parse_options, parse_source_file_with_options, ParserOptions};

pub use error::CliError;

#[derive(clap::Parser, Debug, Default)]
#[command(name = "tsdecl", about = "Parse TypeScript declaration files into a JSON syntax tree", version)]
pub struct Cli {
    /// Declaration files to parse.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// JSON file with parser options (`maxDepth`, `attachComments`).
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum nesting of types and namespaces.
    #[arg(long = "maxDepth", value_name = "N")]
    pub max_depth: Option<u32>,

    /// Do not attach doc comments to declarations.
    #[arg(long = "noComments")]
    pub no_comments: bool,

    /// Write one `<file>.json` per input into this directory instead of stdout.
    #[arg(long = "outDir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Only report syntax errors; write no JSON.
    #[arg(long)]
    pub check: bool,
}

/// The result of parsing one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub outcome: Result<SourceFile, Diagnostic>,
}

/// Build the parser options: command-line flags first, then the config file.
pub fn load_options(cli: &Cli) -> Result<ParserOptions, CliError> {
    let flags = ParserOptions {
        max_depth: cli.max_depth,
        attach_comments: cli.no_comments.then_some(false),
    };
    let Some(path) = &cli.config else {
        return Ok(flags);
    };

    let content = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let file_options = parse_options(&content).map_err(|source| CliError::InvalidConfig {
        path: path.clone(),
        source,
    })?;
    Ok(flags.merged_with(&file_options))
}

pub fn parse_file(path: &str, options: &ParserOptions) -> FileReport {
    let outcome = match fs::read_to_string(path) {
        Ok(text) => parse_source_file_with_options(&text, options).map_err(|err| err.to_diagnostic(path)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(Diagnostic::new(&messages::FILE_0_NOT_FOUND, &[path]))
        }
        Err(err) => Err(Diagnostic::new(&messages::CANNOT_READ_FILE_0_COLON_1, &[path, &err.to_string()])),
    };
    match &outcome {
        Ok(file) => debug!(path, statements = file.statements.len(), "parsed"),
        Err(diagnostic) => debug!(path, code = diagnostic.code, "failed"),
    }
    FileReport { path: path.to_string(), outcome }
}

/// Parse every file in parallel. Reports come back in input order.
pub fn parse_files(files: &[String], options: &ParserOptions) -> Vec<FileReport> {
    files.par_iter().map(|path| parse_file(path, options)).collect()
}

/// Parse the inputs named by `cli` and write their JSON.
///
/// Without `--outDir` each document goes to `out` on its own line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<DiagnosticCollection, CliError> {
    let options = load_options(cli)?;
    info!(files = cli.files.len(), max_depth = options.max_depth(), "parsing");

    let reports = parse_files(&cli.files, &options);
    let mut diagnostics = DiagnosticCollection::new();

    if let Some(dir) = &cli.out_dir {
        if !cli.check {
            fs::create_dir_all(dir).map_err(|source| CliError::Write { path: dir.clone(), source })?;
        }
    }

    for report in reports {
        let file = match report.outcome {
            Ok(file) => file,
            Err(diagnostic) => {
                diagnostics.add(diagnostic);
                continue;
            }
        };
        if cli.check {
            continue;
        }

        let json = if cli.pretty { to_json_pretty(&file)? } else { to_json(&file)? };
        match &cli.out_dir {
            Some(dir) => {
                let target = output_path(dir, &report.path);
                fs::write(&target, json).map_err(|source| CliError::Write { path: target.clone(), source })?;
            }
            None => {
                writeln!(out, "{}", json).map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
            }
        }
    }

    diagnostics.sort();
    Ok(diagnostics)
}

/// `<dir>/<input file name>.json`, e.g. `out/lib.d.ts.json`.
pub fn output_path(dir: &Path, input: &str) -> PathBuf {
    let name = Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());
    dir.join(format!("{}.json", name))
}
