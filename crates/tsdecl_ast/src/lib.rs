//! tsdecl_ast: Abstract Syntax Tree definitions for ambient declarations.
//!
//! This crate defines the AST node types, the SyntaxKind enum, flag types,
//! and the `Kind`-discriminated interchange format. Node shapes and kind
//! numbers mirror TypeScript's own AST.

#[macro_use]
mod macros;

pub mod generated;
pub mod interchange;
pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use generated::{modifier_flags, Node};
pub use interchange::InterchangeError;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
