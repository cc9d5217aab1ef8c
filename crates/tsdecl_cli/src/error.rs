//! Errors that stop a `tsdecl` run before or after parsing.
//!
//! Syntax errors in the inputs are not here; those become diagnostics.

use std::path::PathBuf;

use tsdecl_ast::interchange::InterchangeError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read config file '{}': {source}", path.display())]
    ReadConfig { path: PathBuf, source: std::io::Error },

    #[error("invalid config file '{}': {source}", path.display())]
    InvalidConfig { path: PathBuf, source: serde_json::Error },

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("cannot encode syntax tree: {0}")]
    Encode(#[from] InterchangeError),
}
