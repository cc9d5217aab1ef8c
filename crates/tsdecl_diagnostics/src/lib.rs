//! tsdecl_diagnostics: Diagnostic messages and the parse error type.
//!
//! Messages carry the same codes and wording as TypeScript's
//! `diagnosticMessages.json`, so output reads like `tsc`. A [`ParseError`]
//! is the single failure a parse reports; it converts into a [`Diagnostic`]
//! for display.

use std::fmt;
use tsdecl_core::text::{LineAndColumn, LineMap, TextPos, TextSpan};

/// Diagnostic category, matching TypeScript's DiagnosticCategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
/// This corresponds to a single entry in `diagnosticMessages.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1005).
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    pub span: Option<TextSpan>,
    /// Line and column of `span.start`, when the source was available.
    pub location: Option<LineAndColumn>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// A diagnostic that is not tied to a file position.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            location: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            match (self.location, self.span) {
                (Some(location), _) => write!(f, "({})", location)?,
                (None, Some(span)) => write!(f, "({})", span.start)?,
                (None, None) => {}
            }
            write!(f, ": ")?;
        }
        write!(f, "{} TS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Substitute `{0}`, `{1}`, ... in a message template.
pub fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| text.replace(&format!("{{{}}}", i), arg))
}

/// A collection of diagnostics accumulated across a batch of files.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Order by file, then by position; file-less diagnostics come first.
    pub fn sort(&mut self) {
        let start = |d: &Diagnostic| d.span.map_or(0, |span| span.start);
        self.diagnostics
            .sort_by(|a, b| a.file.cmp(&b.file).then_with(|| start(a).cmp(&start(b))));
    }
}

/// A syntax failure: the input did not match any grammar alternative at
/// `pos`.
///
/// `location` stays at `0,0` until [`ParseError::locate`] is called with the
/// line map of the text the error was raised against; the parser's public
/// entry points always do this before returning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("({location}): error TS{code}: {message}")]
pub struct ParseError {
    /// Byte offset of the offending token.
    pub pos: TextPos,
    pub location: LineAndColumn,
    pub code: u32,
    pub message: String,
}

impl ParseError {
    pub fn new(pos: TextPos, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            pos,
            location: LineAndColumn::new(0, 0),
            code: message.code,
            message: format_message(message.message, args),
        }
    }

    /// Fill in the line and column of `pos`.
    pub fn locate(mut self, line_map: &LineMap) -> Self {
        self.location = line_map.line_and_column_of(self.pos);
        self
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.location.line + 1
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.location.character + 1
    }

    pub fn to_diagnostic(&self, file: impl Into<String>) -> Diagnostic {
        Diagnostic {
            file: Some(file.into()),
            span: Some(TextSpan::empty(self.pos)),
            location: Some(self.location),
            message_text: self.message.clone(),
            code: self.code,
            category: DiagnosticCategory::Error,
        }
    }
}

// ============================================================================
// Diagnostic Messages - ported from TypeScript's diagnosticMessages.json
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token.");
    pub const A_REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(1014, Error, "A rest parameter must be last in a parameter list.");
    pub const AN_INDEX_SIGNATURE_MUST_HAVE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(1021, Error, "An index signature must have a type annotation.");
    pub const AN_INDEX_SIGNATURE_PARAMETER_MUST_HAVE_A_TYPE_ANNOTATION: DiagnosticMessage = diag!(1022, Error, "An index signature parameter must have a type annotation.");
    pub const _0_MODIFIER_ALREADY_SEEN: DiagnosticMessage = diag!(1030, Error, "'{0}' modifier already seen.");
    pub const _0_MODIFIER_CANNOT_BE_USED_HERE: DiagnosticMessage = diag!(1042, Error, "'{0}' modifier cannot be used here.");
    pub const A_REST_PARAMETER_CANNOT_BE_OPTIONAL: DiagnosticMessage = diag!(1047, Error, "A rest parameter cannot be optional.");
    pub const IN_AMBIENT_ENUM_DECLARATIONS_MEMBER_INITIALIZER_MUST_BE_CONSTANT_EXPRESSION: DiagnosticMessage = diag!(1066, Error, "In ambient enum declarations member initializer must be constant expression.");
    pub const UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED: DiagnosticMessage = diag!(1068, Error, "Unexpected token. A constructor, method, accessor, or property was expected.");
    pub const _0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_MEMBER: DiagnosticMessage = diag!(1070, Error, "'{0}' modifier cannot appear on a type member.");

    // ========================================================================
    // Parser errors (1100-1199)
    // ========================================================================
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1110, Error, "Type expected.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, Error, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, Error, "Hexadecimal digit expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = diag!(1128, Error, "Declaration or statement expected.");
    pub const PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, Error, "Property or signature expected.");
    pub const ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, Error, "Enum member expected.");
    pub const VARIABLE_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1134, Error, "Variable declaration expected.");
    pub const PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1138, Error, "Parameter declaration expected.");
    pub const TYPE_PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1139, Error, "Type parameter declaration expected.");
    pub const TYPE_ARGUMENT_EXPECTED: DiagnosticMessage = diag!(1140, Error, "Type argument expected.");
    pub const STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1141, Error, "String literal expected.");

    // ========================================================================
    // File system messages (5000-5999)
    // ========================================================================
    pub const CANNOT_READ_FILE_0_COLON_1: DiagnosticMessage = diag!(5012, Error, "Cannot read file '{0}': {1}.");

    // ========================================================================
    // CLI messages (6000-6999)
    // ========================================================================
    pub const FILE_0_NOT_FOUND: DiagnosticMessage = diag!(6053, Error, "File '{0}' not found.");
    pub const FOUND_0_ERRORS: DiagnosticMessage = diag!(6194, Message, "Found {0} errors.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("'{0}' expected.", &[";"]);
        assert_eq!(msg, "';' expected.");
    }

    #[test]
    fn test_diagnostic_display_without_location() {
        let mut diag = ParseError::new(10, &messages::_0_EXPECTED, &["{"]).to_diagnostic("lib.d.ts");
        diag.location = None;
        assert_eq!(diag.span, Some(TextSpan::new(10, 0)));
        assert_eq!(diag.to_string(), "lib.d.ts(10): error TS1005: '{' expected.");
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::new(&messages::UNEXPECTED_TOKEN, &[]);
        assert!(diag.file.is_none());
        assert_eq!(diag.code, 1012);
        assert!(diag.is_error());
    }

    #[test]
    fn test_diagnostic_collection_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(ParseError::new(10, &messages::UNEXPECTED_TOKEN, &[]).to_diagnostic("b.d.ts"));
        collection.add(ParseError::new(5, &messages::IDENTIFIER_EXPECTED, &[]).to_diagnostic("a.d.ts"));
        collection.add(Diagnostic::new(&messages::FOUND_0_ERRORS, &["2"]));
        collection.sort();
        assert_eq!(collection.error_count(), 2);
        assert_eq!(collection.diagnostics()[0].file, None);
        assert_eq!(collection.diagnostics()[1].file.as_deref(), Some("a.d.ts"));
    }

    #[test]
    fn test_parse_error_location() {
        let text = "interface A {\n  x: ;\n}";
        let err = ParseError::new(19, &messages::TYPE_EXPECTED, &[]).locate(&LineMap::new(text));
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 6);
        assert_eq!(err.to_string(), "(2,6): error TS1110: Type expected.");

        let diag = err.to_diagnostic("a.d.ts");
        assert_eq!(diag.to_string(), "a.d.ts(2,6): error TS1110: Type expected.");
    }
}
