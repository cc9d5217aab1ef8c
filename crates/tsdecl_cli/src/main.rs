//! tsdecl: Parse TypeScript declaration files into JSON.
//!
//! Usage:
//!   tsdecl [options] <file...>

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser as ClapParser;
use tsdecl_cli::{logging, run, Cli};
use tsdecl_diagnostics::{messages, Diagnostic, DiagnosticCollection};

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let diagnostics = match run(&cli, &mut out) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            print_error(&err.to_string());
            process::exit(1);
        }
    };

    process::exit(report(&diagnostics));
}

fn report(diagnostics: &DiagnosticCollection) -> i32 {
    let use_color = io::stderr().is_terminal();
    for diag in diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if !diagnostics.has_errors() {
        return 0;
    }

    let count = diagnostics.error_count().to_string();
    let summary = Diagnostic::new(&messages::FOUND_0_ERRORS, &[&count]);
    if use_color {
        eprintln!("\n{}{}{}", RED, summary.message_text, RESET);
    } else {
        eprintln!("\n{}", summary.message_text);
    }
    1
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if !use_color {
        eprintln!("{}", diag);
        return;
    }

    let color = if diag.is_error() { RED } else { YELLOW };
    if let Some(ref file) = diag.file {
        eprint!("{}{}{}", CYAN, file, RESET);
        if let Some(location) = diag.location {
            eprint!("({})", location);
        }
        eprint!(": ");
    }
    eprintln!(
        "{}{}{}{} {}TS{}{}: {}",
        BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
    );
}

fn print_error(msg: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
