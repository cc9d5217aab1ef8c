//! The declaration parser.
//!
//! A recursive descent parser over the scanner's token stream. Every rule
//! returns a [`ParseResult`]; a failed rule leaves no partial node behind.
//! Where the grammar is ambiguous, the competing rules are listed in order and
//! tried from the same scanner checkpoint by [`Parser::alternatives`], which
//! keeps the failure that got furthest into the input.
//!
//! The grammar itself is split across `types`, `members` and `declarations`.

use tracing::debug;
use tsdecl_ast::node::*;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_core::ensure_sufficient_stack;
use tsdecl_core::text::{LineMap, TextPos};
use tsdecl_diagnostics::{messages, DiagnosticMessage, ParseError};
use tsdecl_scanner::{doc_comment_text, Scanner, ScannerState};

use crate::options::ParserOptions;

pub type ParseResult<T> = Result<T, ParseError>;

/// One alternative at an ambiguous grammar position.
pub(crate) type Rule<'src, T> = fn(&mut Parser<'src>) -> ParseResult<T>;

/// The parser produces AST nodes from declaration source text.
pub struct Parser<'src> {
    pub(crate) scanner: Scanner<'src>,
    options: ParserOptions,
    /// Current nesting of types and namespace bodies.
    depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source_text: &'src str, options: ParserOptions) -> Self {
        let mut scanner = Scanner::new(source_text);
        scanner.scan();
        Self {
            scanner,
            options,
            depth: 0,
        }
    }

    /// Parse a whole declaration file.
    pub fn parse_source_file(mut self) -> ParseResult<SourceFile> {
        let result = self.parse_statements_until(SyntaxKind::EndOfFileToken);
        let statements = self.finish(result)?;
        debug!(statements = statements.len(), "parsed source file");
        Ok(SourceFile::new(statements))
    }

    /// Parse a single construct with `rule`, requiring the input to end
    /// afterwards.
    pub fn parse_entire<T>(mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let result = rule(&mut self).and_then(|node| {
            if self.current_token() == SyntaxKind::EndOfFileToken {
                Ok(node)
            } else {
                Err(self.error_at_current(&messages::UNEXPECTED_TOKEN, &[]))
            }
        });
        self.finish(result)
    }

    /// Attach line and column information to a failure.
    fn finish<T>(&self, result: ParseResult<T>) -> ParseResult<T> {
        result.map_err(|err| err.locate(&LineMap::new(self.scanner.text())))
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn current_token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.scanner.scan()
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> TextPos {
        self.scanner.token_start()
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &'src str {
        self.scanner.token_value()
    }

    pub(crate) fn expect_token(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.current_token() == kind {
            self.next_token();
            Ok(())
        } else {
            let text = kind.token_text().unwrap_or("token");
            Err(self.error_at_current(&messages::_0_EXPECTED, &[text]))
        }
    }

    pub(crate) fn optional_token(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.current_token() == kind {
            self.next_token();
            Some(Token::new(kind))
        } else {
            None
        }
    }

    /// A statement or member terminator: `;`, or nothing before a line
    /// break, `}` or the end of input.
    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        match self.current_token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(())
            }
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken => Ok(()),
            _ if self.scanner.has_preceding_line_break() => Ok(()),
            _ => Err(self.error_at_current(&messages::_0_EXPECTED, &[";"])),
        }
    }

    /// Build a failure at the current token. A malformed token reports its
    /// own lexical error instead of `message`.
    pub(crate) fn error_at_current(&self, message: &DiagnosticMessage, args: &[&str]) -> ParseError {
        match self.scanner.token_error() {
            Some(lexical) => ParseError::new(self.token_pos(), lexical, &[]),
            None => ParseError::new(self.token_pos(), message, args),
        }
    }

    /// The documentation attached to the current token, if any.
    pub(crate) fn doc_comment(&self) -> Option<String> {
        if !self.options.attach_comments() {
            return None;
        }
        self.scanner.leading_comment().and_then(doc_comment_text)
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// Whether the current token can be used as a declared name: an
    /// identifier or a keyword that is not reserved.
    pub(crate) fn is_identifier(&self) -> bool {
        let token = self.current_token();
        token == SyntaxKind::Identifier || (token.is_keyword() && !token.is_reserved_word())
    }

    /// Whether the current token can be used as a member name.
    pub(crate) fn is_identifier_name(&self) -> bool {
        let token = self.current_token();
        token == SyntaxKind::Identifier || token.is_keyword()
    }

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        if !self.is_identifier() {
            return Err(self.error_at_current(&messages::IDENTIFIER_EXPECTED, &[]));
        }
        let id = Identifier::new(self.token_value());
        self.next_token();
        Ok(id)
    }

    /// An identifier where reserved words are also allowed (member names,
    /// the right side of a qualified name, import and export specifiers).
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult<Identifier> {
        if !self.is_identifier_name() {
            return Err(self.error_at_current(&messages::IDENTIFIER_EXPECTED, &[]));
        }
        let id = Identifier::new(self.token_value());
        self.next_token();
        Ok(id)
    }

    pub(crate) fn parse_string_literal(&mut self) -> ParseResult<StringLiteral> {
        if self.current_token() != SyntaxKind::StringLiteral || self.scanner.token_error().is_some() {
            return Err(self.error_at_current(&messages::STRING_LITERAL_EXPECTED, &[]));
        }
        let literal = StringLiteral::new(self.token_value());
        self.next_token();
        Ok(literal)
    }

    /// `A` or `A.B.C`. Every dot nests the name one level deeper.
    pub(crate) fn parse_entity_name(&mut self) -> ParseResult<EntityName> {
        let mut name = EntityName::Identifier(self.parse_identifier()?);
        self.with_levels(|p| {
            while p.current_token() == SyntaxKind::DotToken {
                p.enter_level()?;
                p.next_token();
                let right = p.parse_identifier_name()?;
                name = EntityName::QualifiedName(Box::new(QualifiedName {
                    kind: SyntaxKind::QualifiedName,
                    left: name,
                    right,
                }));
            }
            Ok(name)
        })
    }

    // ========================================================================
    // Backtracking
    // ========================================================================

    #[inline]
    pub(crate) fn checkpoint(&self) -> ScannerState {
        self.scanner.save_state()
    }

    #[inline]
    pub(crate) fn rewind(&mut self, state: ScannerState) {
        self.scanner.restore_state(state);
    }

    /// Look ahead: run `f` and restore the scanner whatever it returns.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.checkpoint();
        let result = f(self);
        self.rewind(state);
        result
    }

    /// Try each rule in order from the current position; the first success
    /// wins. When every rule fails, the failure that got furthest is
    /// returned. Several rules failing at that same point with different
    /// complaints means no rule owns the input there, so `fallback` is
    /// reported instead.
    pub(crate) fn alternatives<T>(
        &mut self,
        rules: &[Rule<'src, T>],
        fallback: &DiagnosticMessage,
    ) -> ParseResult<T> {
        let start = self.checkpoint();
        let mut furthest: Option<ParseError> = None;
        let mut contested = false;

        for rule in rules {
            match rule(self) {
                Ok(node) => return Ok(node),
                Err(err) => {
                    self.rewind(start);
                    match &furthest {
                        Some(best) if err.pos < best.pos => {}
                        Some(best) if err.pos == best.pos => {
                            contested |= err.code != best.code || err.message != best.message;
                        }
                        _ => {
                            furthest = Some(err);
                            contested = false;
                        }
                    }
                }
            }
        }

        match furthest {
            Some(err) if contested => Err(ParseError::new(err.pos, fallback, &[])),
            Some(err) => Err(err),
            None => Err(self.error_at_current(fallback, &[])),
        }
    }

    /// Run `f` one nesting level deeper, failing once the configured depth
    /// is exceeded.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.enter_level()?;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Run `f`, which may call [`Parser::enter_level`] once for every node
    /// it wraps around a previous one in a loop. The depth is restored
    /// afterwards.
    pub(crate) fn with_levels<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let outer = self.depth;
        let result = f(self);
        self.depth = outer;
        result
    }

    pub(crate) fn enter_level(&mut self) -> ParseResult<()> {
        if self.depth >= self.options.max_depth() {
            return Err(self.error_at_current(&messages::TYPE_EXPECTED, &[]));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parse one or more comma-separated elements. The closing token is not
    /// consumed; with `allow_trailing`, a comma directly before `close` ends
    /// the list.
    pub(crate) fn parse_delimited_list<T>(
        &mut self,
        close: SyntaxKind,
        allow_trailing: bool,
        mut parse_element: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut elements = vec![parse_element(self)?];
        while self.optional_token(SyntaxKind::CommaToken).is_some() {
            if allow_trailing && self.current_token() == close {
                break;
            }
            elements.push(parse_element(self)?);
        }
        Ok(elements)
    }
}
