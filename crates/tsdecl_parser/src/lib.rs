//! tsdecl_parser: Recursive descent parser for ambient declarations.
//!
//! Parses `.d.ts` source text into the `tsdecl_ast` tree. Parsing is
//! all-or-nothing: a file either yields a complete [`SourceFile`] or the
//! [`ParseError`] that got furthest into the input.

mod declarations;
mod members;
pub mod options;
mod parser;
mod types;

pub use options::{parse_options, ParserOptions};
pub use parser::{ParseResult, Parser};

use tsdecl_ast::node::{ClassElement, SourceFile, Statement, TypeElement, TypeNode};
use tsdecl_diagnostics::ParseError;

/// Parse a declaration file with default options.
pub fn parse_source_file(source_text: &str) -> Result<SourceFile, ParseError> {
    parse_source_file_with_options(source_text, &ParserOptions::default())
}

pub fn parse_source_file_with_options(source_text: &str, options: &ParserOptions) -> Result<SourceFile, ParseError> {
    Parser::new(source_text, options.clone()).parse_source_file()
}

/// Parse a single type expression, such as `Map<K, V[]> | undefined`.
pub fn parse_type_str(source_text: &str) -> Result<TypeNode, ParseError> {
    Parser::new(source_text, ParserOptions::default()).parse_entire(|p| p.parse_type())
}

/// Parse a single interface member, such as `name?: string;`.
pub fn parse_type_member_str(source_text: &str) -> Result<TypeElement, ParseError> {
    Parser::new(source_text, ParserOptions::default()).parse_entire(|p| p.parse_type_member())
}

/// Parse a single class member, such as `static create(): Foo;`.
pub fn parse_class_member_str(source_text: &str) -> Result<ClassElement, ParseError> {
    Parser::new(source_text, ParserOptions::default()).parse_entire(|p| p.parse_class_member())
}

pub fn parse_statement_str(source_text: &str) -> Result<Statement, ParseError> {
    Parser::new(source_text, ParserOptions::default()).parse_entire(|p| p.parse_statement())
}
