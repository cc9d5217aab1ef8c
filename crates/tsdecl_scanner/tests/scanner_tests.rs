//! Scanner integration tests.
//!
//! Verifies tokenization of the constructs found in declaration files.

use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_diagnostics::messages;
use tsdecl_scanner::Scanner;

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("   \n\t  ").is_empty());
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        scan_kinds("declare interface Foo extends keyof"),
        vec![
            SyntaxKind::DeclareKeyword,
            SyntaxKind::InterfaceKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::ExtendsKeyword,
            SyntaxKind::KeyOfKeyword,
        ]
    );

    let tokens = scan_all("$el _private café");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::Identifier));
    assert_eq!(tokens[2].1, "café");
}

#[test]
fn test_punctuation() {
    assert_eq!(
        scan_kinds("(...args) => void"),
        vec![
            SyntaxKind::OpenParenToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::Identifier,
            SyntaxKind::CloseParenToken,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::VoidKeyword,
        ]
    );
    assert_eq!(
        scan_kinds("a.b?:|&"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::DotToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::ColonToken,
            SyntaxKind::BarToken,
            SyntaxKind::AmpersandToken,
        ]
    );
}

#[test]
fn test_greater_than_is_never_combined() {
    assert_eq!(
        scan_kinds("A<B<C>>"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_string_literals() {
    let tokens = scan_all(r#""hello" 'world' "a\"b""#);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], (SyntaxKind::StringLiteral, "hello".to_string()));
    assert_eq!(tokens[1], (SyntaxKind::StringLiteral, "world".to_string()));
    assert_eq!(tokens[2], (SyntaxKind::StringLiteral, r#"a\"b"#.to_string()));
}

#[test]
fn test_unterminated_string() {
    let mut scanner = Scanner::new("\"abc\nx");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "abc");
    assert_eq!(scanner.token_error(), Some(&messages::UNTERMINATED_STRING_LITERAL));
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_error(), None);
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 0xFF 1e10 .5");
    let values: Vec<&str> = tokens.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0xFF", "1e10", ".5"]);
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::NumericLiteral));

    let mut scanner = Scanner::new("0x");
    scanner.scan();
    assert_eq!(scanner.token_error(), Some(&messages::HEXADECIMAL_DIGIT_EXPECTED));
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        scan_kinds("// line\nfoo /* block */ bar"),
        vec![SyntaxKind::Identifier, SyntaxKind::Identifier]
    );
}

#[test]
fn test_leading_comment_is_last_comment() {
    let mut scanner = Scanner::new("// first\n/* second */\n\nclass");
    assert_eq!(scanner.scan(), SyntaxKind::ClassKeyword);
    assert_eq!(scanner.leading_comment(), Some("/* second */"));
    assert!(scanner.has_preceding_line_break());

    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    assert_eq!(scanner.leading_comment(), None);
}

#[test]
fn test_unterminated_comment() {
    let mut scanner = Scanner::new("foo /* never closed");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.token_error(), Some(&messages::ASTERISK_SLASH_EXPECTED));
    assert_eq!(scanner.token_start() as usize, "foo /* never closed".len());
}

#[test]
fn test_invalid_character() {
    let mut scanner = Scanner::new("a § b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.token_error(), Some(&messages::INVALID_CHARACTER));
    assert_eq!(scanner.token_start(), 2);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "b");
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = Scanner::new("/** doc */ a b c");
    scanner.scan();
    let state = scanner.save_state();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.token_value(), "c");
    scanner.restore_state(state);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.leading_comment(), Some("/** doc */"));
}
