//! tsdecl_scanner: Lexer for ambient declaration files.
//!
//! Produces the token stream the declaration parser consumes:
//! - punctuation, keywords and identifiers (including Unicode identifiers)
//! - string and numeric literals
//! - the last comment in each token's leading trivia, for documentation

mod char_codes;
pub mod comments;
mod scanner;

pub use comments::doc_comment_text;
pub use scanner::{Scanner, ScannerState};
