//! The declaration scanner.
//!
//! Converts source text into the token stream the parser consumes. Positions
//! are byte offsets into the text. Comments are trivia, but the last comment
//! before each token is remembered so the parser can attach it as
//! documentation.

use crate::char_codes::*;
use memchr::memmem;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_ast::types::TokenFlags;
use tsdecl_core::text::{TextPos, TextRange};
use tsdecl_diagnostics::{messages, DiagnosticMessage};

/// Saved scanner state for lookahead and backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState {
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
    comment: Option<TextRange>,
    error: Option<&'static DiagnosticMessage>,
}

/// The scanner converts declaration source text into tokens.
pub struct Scanner<'src> {
    /// The source text being scanned.
    text: &'src str,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
    /// The last comment in the current token's leading trivia.
    comment: Option<TextRange>,
    /// Lexical error for the current token.
    error: Option<&'static DiagnosticMessage>,
}

impl<'src> Scanner<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: TokenFlags::NONE,
            comment: None,
            error: None,
        }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            token_flags: self.token_flags,
            comment: self.comment,
            error: self.error,
        }
    }

    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_flags = state.token_flags;
        self.comment = state.comment;
        self.error = state.error;
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Get the start position of the current token (after trivia).
    #[inline]
    pub fn token_start(&self) -> TextPos {
        self.token_start as TextPos
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// The source text of the current token.
    pub fn token_text(&self) -> &'src str {
        &self.text[self.token_start..self.pos]
    }

    /// The value of the current token: the content between the quotes for a
    /// string literal, the source text otherwise.
    pub fn token_value(&self) -> &'src str {
        let text = self.token_text();
        if self.token != SyntaxKind::StringLiteral || text.is_empty() {
            return text;
        }
        let inner = &text[1..];
        if self.token_flags.contains(TokenFlags::UNTERMINATED) {
            inner
        } else {
            &inner[..inner.len() - 1]
        }
    }

    /// The raw text of the last comment before the current token.
    pub fn leading_comment(&self) -> Option<&'src str> {
        self.comment.map(|range| range.slice(self.text))
    }

    /// The lexical error of the current token, if it is malformed.
    pub fn token_error(&self) -> Option<&'static DiagnosticMessage> {
        self.error
    }

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    /// Skip whitespace and comments before the next token. Comments that
    /// start on the same line as the previous token trail it and are not
    /// remembered.
    fn skip_trivia(&mut self) {
        let mut collecting = self.pos == 0;
        while let Some(ch) = self.current_char() {
            match ch {
                '\r' | '\n' | '\u{2028}' | '\u{2029}' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    collecting = true;
                    self.pos += ch.len_utf8();
                }
                '/' if self.byte_at(1) == Some(b'/') => {
                    let start = self.pos;
                    let rest = &self.text.as_bytes()[self.pos..];
                    self.pos += memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
                    if collecting {
                        self.comment = Some(TextRange::new(start as TextPos, self.pos as TextPos));
                    }
                }
                '/' if self.byte_at(1) == Some(b'*') => {
                    let start = self.pos;
                    let body = &self.text.as_bytes()[self.pos + 2..];
                    match memmem::find(body, b"*/") {
                        Some(end) => {
                            if memchr::memchr2(b'\n', b'\r', &body[..end]).is_some() {
                                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                            }
                            self.pos += 2 + end + 2;
                            if collecting {
                                self.comment = Some(TextRange::new(start as TextPos, self.pos as TextPos));
                            }
                        }
                        None => {
                            self.pos = self.text.len();
                            self.error = Some(&messages::ASTERISK_SLASH_EXPECTED);
                            return;
                        }
                    }
                }
                c if is_white_space_single_line(c) => {
                    self.pos += c.len_utf8();
                }
                _ => return,
            }
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.comment = None;
        self.error = None;

        self.skip_trivia();
        self.token_start = self.pos;

        if self.error.is_some() {
            self.token = SyntaxKind::Unknown;
            return self.token;
        }

        let Some(ch) = self.current_char() else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '{' => self.single(SyntaxKind::OpenBraceToken),
            '}' => self.single(SyntaxKind::CloseBraceToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '?' => self.single(SyntaxKind::QuestionToken),
            '<' => self.single(SyntaxKind::LessThanToken),
            // `>` is always a single token so nested `Array<Array<T>>`
            // closes one list at a time.
            '>' => self.single(SyntaxKind::GreaterThanToken),
            '|' => self.single(SyntaxKind::BarToken),
            '&' => self.single(SyntaxKind::AmpersandToken),
            '+' => self.single(SyntaxKind::PlusToken),
            '-' => self.single(SyntaxKind::MinusToken),
            '*' => self.single(SyntaxKind::AsteriskToken),
            '/' => self.single(SyntaxKind::SlashToken),
            '%' => self.single(SyntaxKind::PercentToken),
            '^' => self.single(SyntaxKind::CaretToken),
            '!' => self.single(SyntaxKind::ExclamationToken),
            '~' => self.single(SyntaxKind::TildeToken),
            '@' => self.single(SyntaxKind::AtToken),
            '#' => self.single(SyntaxKind::HashToken),
            '`' => self.single(SyntaxKind::BacktickToken),
            '=' => self.scan_equals(),
            '.' => self.scan_dot(),
            '"' | '\'' => self.scan_string_literal(ch),
            c if is_digit(c) => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c => {
                self.pos += c.len_utf8();
                self.error = Some(&messages::INVALID_CHARACTER);
                self.token_flags |= TokenFlags::IS_INVALID;
                SyntaxKind::Unknown
            }
        };
        self.token
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.byte_at(1) == Some(b'>') {
            self.pos += 2;
            return SyntaxKind::EqualsGreaterThanToken;
        }
        self.single(SyntaxKind::EqualsToken)
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.byte_at(1) == Some(b'.') && self.byte_at(2) == Some(b'.') {
            self.pos += 3;
            return SyntaxKind::DotDotDotToken;
        }
        if self.byte_at(1).is_some_and(|b| b.is_ascii_digit()) {
            return self.scan_number();
        }
        self.single(SyntaxKind::DotToken)
    }

    /// Scan a quoted string. Escapes are kept as written; only an escaped
    /// quote is stepped over so it does not end the literal.
    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1;
        loop {
            let Some(ch) = self.current_char() else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error = Some(&messages::UNTERMINATED_STRING_LITERAL);
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if is_line_break(ch) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error = Some(&messages::UNTERMINATED_STRING_LITERAL);
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                if let Some(escaped) = self.current_char() {
                    self.pos += escaped.len_utf8();
                }
                continue;
            }
            self.pos += ch.len_utf8();
        }
        SyntaxKind::StringLiteral
    }

    fn scan_number(&mut self) -> SyntaxKind {
        if self.byte_at(0) == Some(b'0') && matches!(self.byte_at(1), Some(b'x' | b'X')) {
            self.pos += 2;
            self.token_flags |= TokenFlags::HEX_SPECIFIER;
            let digits = self.skip_while(is_hex_digit);
            if digits == 0 {
                self.error = Some(&messages::HEXADECIMAL_DIGIT_EXPECTED);
            }
            return SyntaxKind::NumericLiteral;
        }

        self.skip_while(is_digit);
        if self.byte_at(0) == Some(b'.') {
            self.pos += 1;
            self.skip_while(is_digit);
        }
        if matches!(self.byte_at(0), Some(b'e' | b'E')) {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            if matches!(self.byte_at(0), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_while(is_digit) == 0 {
                self.error = Some(&messages::DIGIT_EXPECTED);
            }
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.skip_while(is_identifier_part);
        let text = &self.text[start..self.pos];
        SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    /// Advance over characters matching `pred`, returning how many were
    /// consumed.
    fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = Scanner::new("( ) { } [ ] ; , :");
        assert_eq!(scanner.scan(), SyntaxKind::OpenParenToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseParenToken);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
        assert_eq!(scanner.scan(), SyntaxKind::CommaToken);
        assert_eq!(scanner.scan(), SyntaxKind::ColonToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_trailing_comment_is_not_leading() {
        let mut scanner = Scanner::new("x; // about x\n/** about y */ y; /* trails y */ z");
        scanner.scan();
        scanner.scan();
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.leading_comment(), Some("/** about y */"));

        scanner.scan();
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "z");
        assert_eq!(scanner.leading_comment(), None);
    }

    #[test]
    fn test_comment_at_file_start_is_leading() {
        let mut scanner = Scanner::new("  /* first */ a");
        scanner.scan();
        assert_eq!(scanner.leading_comment(), Some("/* first */"));
    }
}
