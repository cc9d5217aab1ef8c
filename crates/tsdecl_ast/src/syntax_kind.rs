//! SyntaxKind enum - the node and token discriminators.
//!
//! Values match TypeScript 5.x's `SyntaxKind` numbering exactly, since the
//! integer is written to the interchange format as `Kind` and read back by
//! tools built against the TypeScript compiler.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

macro_rules! syntax_kinds {
    ($($name:ident = $value:literal,)*) => {
        /// The kind of a syntax token or node in the AST.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($name = $value,)*
        }

        impl SyntaxKind {
            /// Every kind, in discriminator order.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$name,)*];

            /// Look up a kind by its numeric discriminator.
            pub fn from_u16(value: u16) -> Option<SyntaxKind> {
                match value {
                    $($value => Some(SyntaxKind::$name),)*
                    _ => None,
                }
            }
        }
    };
}

syntax_kinds! {
    // Tokens
    Unknown = 0,
    EndOfFileToken = 1,

    // Trivia
    SingleLineCommentTrivia = 2,
    MultiLineCommentTrivia = 3,
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,
    ShebangTrivia = 6,
    ConflictMarkerTrivia = 7,
    NonTextFileMarkerTrivia = 8,

    // Literals
    NumericLiteral = 9,
    BigIntLiteral = 10,
    StringLiteral = 11,
    JsxText = 12,
    JsxTextAllWhiteSpaces = 13,
    RegularExpressionLiteral = 14,
    NoSubstitutionTemplateLiteral = 15,

    // Pseudo-literals (template)
    TemplateHead = 16,
    TemplateMiddle = 17,
    TemplateTail = 18,

    // Punctuation
    OpenBraceToken = 19,
    CloseBraceToken = 20,
    OpenParenToken = 21,
    CloseParenToken = 22,
    OpenBracketToken = 23,
    CloseBracketToken = 24,
    DotToken = 25,
    DotDotDotToken = 26,
    SemicolonToken = 27,
    CommaToken = 28,
    QuestionDotToken = 29,
    LessThanToken = 30,
    LessThanSlashToken = 31,
    GreaterThanToken = 32,
    LessThanEqualsToken = 33,
    GreaterThanEqualsToken = 34,
    EqualsEqualsToken = 35,
    ExclamationEqualsToken = 36,
    EqualsEqualsEqualsToken = 37,
    ExclamationEqualsEqualsToken = 38,
    EqualsGreaterThanToken = 39,
    PlusToken = 40,
    MinusToken = 41,
    AsteriskToken = 42,
    AsteriskAsteriskToken = 43,
    SlashToken = 44,
    PercentToken = 45,
    PlusPlusToken = 46,
    MinusMinusToken = 47,
    LessThanLessThanToken = 48,
    GreaterThanGreaterThanToken = 49,
    GreaterThanGreaterThanGreaterThanToken = 50,
    AmpersandToken = 51,
    BarToken = 52,
    CaretToken = 53,
    ExclamationToken = 54,
    TildeToken = 55,
    AmpersandAmpersandToken = 56,
    BarBarToken = 57,
    QuestionToken = 58,
    ColonToken = 59,
    AtToken = 60,
    QuestionQuestionToken = 61,
    BacktickToken = 62,
    HashToken = 63,

    // Assignments
    EqualsToken = 64,
    PlusEqualsToken = 65,
    MinusEqualsToken = 66,
    AsteriskEqualsToken = 67,
    AsteriskAsteriskEqualsToken = 68,
    SlashEqualsToken = 69,
    PercentEqualsToken = 70,
    LessThanLessThanEqualsToken = 71,
    GreaterThanGreaterThanEqualsToken = 72,
    GreaterThanGreaterThanGreaterThanEqualsToken = 73,
    AmpersandEqualsToken = 74,
    BarEqualsToken = 75,
    BarBarEqualsToken = 76,
    AmpersandAmpersandEqualsToken = 77,
    QuestionQuestionEqualsToken = 78,
    CaretEqualsToken = 79,

    // Identifiers
    Identifier = 80,
    PrivateIdentifier = 81,
    JSDocCommentTextToken = 82,

    // Reserved words
    BreakKeyword = 83,
    CaseKeyword = 84,
    CatchKeyword = 85,
    ClassKeyword = 86,
    ConstKeyword = 87,
    ContinueKeyword = 88,
    DebuggerKeyword = 89,
    DefaultKeyword = 90,
    DeleteKeyword = 91,
    DoKeyword = 92,
    ElseKeyword = 93,
    EnumKeyword = 94,
    ExportKeyword = 95,
    ExtendsKeyword = 96,
    FalseKeyword = 97,
    FinallyKeyword = 98,
    ForKeyword = 99,
    FunctionKeyword = 100,
    IfKeyword = 101,
    ImportKeyword = 102,
    InKeyword = 103,
    InstanceOfKeyword = 104,
    NewKeyword = 105,
    NullKeyword = 106,
    ReturnKeyword = 107,
    SuperKeyword = 108,
    SwitchKeyword = 109,
    ThisKeyword = 110,
    ThrowKeyword = 111,
    TrueKeyword = 112,
    TryKeyword = 113,
    TypeOfKeyword = 114,
    VarKeyword = 115,
    VoidKeyword = 116,
    WhileKeyword = 117,
    WithKeyword = 118,

    // Strict mode reserved words
    ImplementsKeyword = 119,
    InterfaceKeyword = 120,
    LetKeyword = 121,
    PackageKeyword = 122,
    PrivateKeyword = 123,
    ProtectedKeyword = 124,
    PublicKeyword = 125,
    StaticKeyword = 126,
    YieldKeyword = 127,

    // Contextual keywords
    AbstractKeyword = 128,
    AccessorKeyword = 129,
    AsKeyword = 130,
    AssertsKeyword = 131,
    AssertKeyword = 132,
    AnyKeyword = 133,
    AsyncKeyword = 134,
    AwaitKeyword = 135,
    BooleanKeyword = 136,
    ConstructorKeyword = 137,
    DeclareKeyword = 138,
    GetKeyword = 139,
    InferKeyword = 140,
    IntrinsicKeyword = 141,
    IsKeyword = 142,
    KeyOfKeyword = 143,
    ModuleKeyword = 144,
    NamespaceKeyword = 145,
    NeverKeyword = 146,
    OutKeyword = 147,
    ReadonlyKeyword = 148,
    RequireKeyword = 149,
    NumberKeyword = 150,
    ObjectKeyword = 151,
    SatisfiesKeyword = 152,
    SetKeyword = 153,
    StringKeyword = 154,
    SymbolKeyword = 155,
    TypeKeyword = 156,
    UndefinedKeyword = 157,
    UniqueKeyword = 158,
    UnknownKeyword = 159,
    UsingKeyword = 160,
    FromKeyword = 161,
    GlobalKeyword = 162,
    BigIntKeyword = 163,
    OverrideKeyword = 164,
    OfKeyword = 165,

    // Names
    QualifiedName = 166,
    ComputedPropertyName = 167,

    // Signature elements
    TypeParameter = 168,
    Parameter = 169,
    Decorator = 170,

    // Type members
    PropertySignature = 171,
    PropertyDeclaration = 172,
    MethodSignature = 173,
    MethodDeclaration = 174,
    ClassStaticBlockDeclaration = 175,
    Constructor = 176,
    GetAccessor = 177,
    SetAccessor = 178,
    CallSignature = 179,
    ConstructSignature = 180,
    IndexSignature = 181,

    // Types
    TypePredicate = 182,
    TypeReference = 183,
    FunctionType = 184,
    ConstructorType = 185,
    TypeQuery = 186,
    TypeLiteral = 187,
    ArrayType = 188,
    TupleType = 189,
    OptionalType = 190,
    RestType = 191,
    UnionType = 192,
    IntersectionType = 193,
    ConditionalType = 194,
    InferType = 195,
    ParenthesizedType = 196,
    ThisType = 197,
    TypeOperator = 198,
    IndexedAccessType = 199,
    MappedType = 200,
    LiteralType = 201,
    NamedTupleMember = 202,
    TemplateLiteralType = 203,
    TemplateLiteralTypeSpan = 204,
    ImportType = 205,

    // Binding patterns
    ObjectBindingPattern = 206,
    ArrayBindingPattern = 207,
    BindingElement = 208,

    // Expressions
    ArrayLiteralExpression = 209,
    ObjectLiteralExpression = 210,
    PropertyAccessExpression = 211,
    ElementAccessExpression = 212,
    CallExpression = 213,
    NewExpression = 214,
    TaggedTemplateExpression = 215,
    TypeAssertionExpression = 216,
    ParenthesizedExpression = 217,
    FunctionExpression = 218,
    ArrowFunction = 219,
    DeleteExpression = 220,
    TypeOfExpression = 221,
    VoidExpression = 222,
    AwaitExpression = 223,
    PrefixUnaryExpression = 224,
    PostfixUnaryExpression = 225,
    BinaryExpression = 226,
    ConditionalExpression = 227,
    TemplateExpression = 228,
    YieldExpression = 229,
    SpreadElement = 230,
    ClassExpression = 231,
    OmittedExpression = 232,
    ExpressionWithTypeArguments = 233,
    AsExpression = 234,
    NonNullExpression = 235,
    MetaProperty = 236,
    SyntheticExpression = 237,
    SatisfiesExpression = 238,

    // Misc
    TemplateSpan = 239,
    SemicolonClassElement = 240,

    // Statements
    Block = 241,
    EmptyStatement = 242,
    VariableStatement = 243,
    ExpressionStatement = 244,
    IfStatement = 245,
    DoStatement = 246,
    WhileStatement = 247,
    ForStatement = 248,
    ForInStatement = 249,
    ForOfStatement = 250,
    ContinueStatement = 251,
    BreakStatement = 252,
    ReturnStatement = 253,
    WithStatement = 254,
    SwitchStatement = 255,
    LabeledStatement = 256,
    ThrowStatement = 257,
    TryStatement = 258,
    DebuggerStatement = 259,

    // Declarations
    VariableDeclaration = 260,
    VariableDeclarationList = 261,
    FunctionDeclaration = 262,
    ClassDeclaration = 263,
    InterfaceDeclaration = 264,
    TypeAliasDeclaration = 265,
    EnumDeclaration = 266,
    ModuleDeclaration = 267,
    ModuleBlock = 268,
    CaseBlock = 269,
    NamespaceExportDeclaration = 270,
    ImportEqualsDeclaration = 271,
    ImportDeclaration = 272,
    ImportClause = 273,
    NamespaceImport = 274,
    NamedImports = 275,
    ImportSpecifier = 276,
    ExportAssignment = 277,
    ExportDeclaration = 278,
    NamedExports = 279,
    NamespaceExport = 280,
    ExportSpecifier = 281,
    MissingDeclaration = 282,

    // Module references
    ExternalModuleReference = 283,

    // JSX
    JsxElement = 284,
    JsxSelfClosingElement = 285,
    JsxOpeningElement = 286,
    JsxClosingElement = 287,
    JsxFragment = 288,
    JsxOpeningFragment = 289,
    JsxClosingFragment = 290,
    JsxAttribute = 291,
    JsxAttributes = 292,
    JsxSpreadAttribute = 293,
    JsxExpression = 294,
    JsxNamespacedName = 295,

    // Clauses
    CaseClause = 296,
    DefaultClause = 297,
    HeritageClause = 298,
    CatchClause = 299,

    // Import attributes
    ImportAttributes = 300,
    ImportAttribute = 301,
    ImportTypeAssertionContainer = 302,

    // Property assignments
    PropertyAssignment = 303,
    ShorthandPropertyAssignment = 304,
    SpreadAssignment = 305,

    // Enum
    EnumMember = 306,

    // Unparsed
    UnparsedPrologue = 307,
    UnparsedPrepend = 308,
    UnparsedText = 309,
    UnparsedInternalText = 310,
    UnparsedSyntheticReference = 311,

    // Top-level nodes
    SourceFile = 312,
}

impl SyntaxKind {
    pub const FIRST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::SingleLineCommentTrivia;
    pub const LAST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::NonTextFileMarkerTrivia;
    /// TypeScript names the numeric literal kind `FirstLiteralToken` in its
    /// serialized output.
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_STATEMENT: SyntaxKind = SyntaxKind::VariableStatement;
    pub const LAST_STATEMENT: SyntaxKind = SyntaxKind::DebuggerStatement;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;

    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= SyntaxKind::FIRST_KEYWORD && self <= SyntaxKind::LAST_KEYWORD
    }

    /// Whether this kind is a keyword that can never be used as a name.
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self >= SyntaxKind::FIRST_RESERVED_WORD && self <= SyntaxKind::LAST_RESERVED_WORD
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= SyntaxKind::FIRST_PUNCTUATION && self <= SyntaxKind::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self >= SyntaxKind::FIRST_LITERAL_TOKEN && self <= SyntaxKind::LAST_LITERAL_TOKEN
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        self >= SyntaxKind::FIRST_TRIVIA_TOKEN && self <= SyntaxKind::LAST_TRIVIA_TOKEN
    }

    /// Whether this kind represents a type node.
    #[inline]
    pub fn is_type_node(self) -> bool {
        self >= SyntaxKind::FIRST_TYPE_NODE && self <= SyntaxKind::LAST_TYPE_NODE
    }

    /// Whether this kind represents a modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Whether this kind is one of the zero-payload keyword types
    /// (`string`, `number`, `void`, ...).
    #[inline]
    pub fn is_keyword_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::IntrinsicKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::NullKeyword
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            SyntaxKind::AbstractKeyword => Some("abstract"),
            SyntaxKind::AccessorKeyword => Some("accessor"),
            SyntaxKind::AsKeyword => Some("as"),
            SyntaxKind::AssertsKeyword => Some("asserts"),
            SyntaxKind::AssertKeyword => Some("assert"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::AsyncKeyword => Some("async"),
            SyntaxKind::AwaitKeyword => Some("await"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::ConstructorKeyword => Some("constructor"),
            SyntaxKind::DeclareKeyword => Some("declare"),
            SyntaxKind::GetKeyword => Some("get"),
            SyntaxKind::InferKeyword => Some("infer"),
            SyntaxKind::IntrinsicKeyword => Some("intrinsic"),
            SyntaxKind::IsKeyword => Some("is"),
            SyntaxKind::KeyOfKeyword => Some("keyof"),
            SyntaxKind::ModuleKeyword => Some("module"),
            SyntaxKind::NamespaceKeyword => Some("namespace"),
            SyntaxKind::NeverKeyword => Some("never"),
            SyntaxKind::OutKeyword => Some("out"),
            SyntaxKind::ReadonlyKeyword => Some("readonly"),
            SyntaxKind::RequireKeyword => Some("require"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::ObjectKeyword => Some("object"),
            SyntaxKind::SatisfiesKeyword => Some("satisfies"),
            SyntaxKind::SetKeyword => Some("set"),
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::SymbolKeyword => Some("symbol"),
            SyntaxKind::TypeKeyword => Some("type"),
            SyntaxKind::UndefinedKeyword => Some("undefined"),
            SyntaxKind::UniqueKeyword => Some("unique"),
            SyntaxKind::UnknownKeyword => Some("unknown"),
            SyntaxKind::UsingKeyword => Some("using"),
            SyntaxKind::FromKeyword => Some("from"),
            SyntaxKind::GlobalKeyword => Some("global"),
            SyntaxKind::BigIntKeyword => Some("bigint"),
            SyntaxKind::OverrideKeyword => Some("override"),
            SyntaxKind::OfKeyword => Some("of"),
            _ => None,
        }
    }

    /// Get the keyword kind for a string, or None if it's not a keyword.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "case" => Some(SyntaxKind::CaseKeyword),
            "catch" => Some(SyntaxKind::CatchKeyword),
            "class" => Some(SyntaxKind::ClassKeyword),
            "const" => Some(SyntaxKind::ConstKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "debugger" => Some(SyntaxKind::DebuggerKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "enum" => Some(SyntaxKind::EnumKeyword),
            "export" => Some(SyntaxKind::ExportKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "finally" => Some(SyntaxKind::FinallyKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "import" => Some(SyntaxKind::ImportKeyword),
            "in" => Some(SyntaxKind::InKeyword),
            "instanceof" => Some(SyntaxKind::InstanceOfKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "switch" => Some(SyntaxKind::SwitchKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "throw" => Some(SyntaxKind::ThrowKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "try" => Some(SyntaxKind::TryKeyword),
            "typeof" => Some(SyntaxKind::TypeOfKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "void" => Some(SyntaxKind::VoidKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "with" => Some(SyntaxKind::WithKeyword),
            "implements" => Some(SyntaxKind::ImplementsKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "package" => Some(SyntaxKind::PackageKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "protected" => Some(SyntaxKind::ProtectedKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            "yield" => Some(SyntaxKind::YieldKeyword),
            "abstract" => Some(SyntaxKind::AbstractKeyword),
            "accessor" => Some(SyntaxKind::AccessorKeyword),
            "as" => Some(SyntaxKind::AsKeyword),
            "asserts" => Some(SyntaxKind::AssertsKeyword),
            "assert" => Some(SyntaxKind::AssertKeyword),
            "any" => Some(SyntaxKind::AnyKeyword),
            "async" => Some(SyntaxKind::AsyncKeyword),
            "await" => Some(SyntaxKind::AwaitKeyword),
            "boolean" => Some(SyntaxKind::BooleanKeyword),
            "constructor" => Some(SyntaxKind::ConstructorKeyword),
            "declare" => Some(SyntaxKind::DeclareKeyword),
            "get" => Some(SyntaxKind::GetKeyword),
            "infer" => Some(SyntaxKind::InferKeyword),
            "intrinsic" => Some(SyntaxKind::IntrinsicKeyword),
            "is" => Some(SyntaxKind::IsKeyword),
            "keyof" => Some(SyntaxKind::KeyOfKeyword),
            "module" => Some(SyntaxKind::ModuleKeyword),
            "namespace" => Some(SyntaxKind::NamespaceKeyword),
            "never" => Some(SyntaxKind::NeverKeyword),
            "out" => Some(SyntaxKind::OutKeyword),
            "readonly" => Some(SyntaxKind::ReadonlyKeyword),
            "require" => Some(SyntaxKind::RequireKeyword),
            "number" => Some(SyntaxKind::NumberKeyword),
            "object" => Some(SyntaxKind::ObjectKeyword),
            "satisfies" => Some(SyntaxKind::SatisfiesKeyword),
            "set" => Some(SyntaxKind::SetKeyword),
            "string" => Some(SyntaxKind::StringKeyword),
            "symbol" => Some(SyntaxKind::SymbolKeyword),
            "type" => Some(SyntaxKind::TypeKeyword),
            "undefined" => Some(SyntaxKind::UndefinedKeyword),
            "unique" => Some(SyntaxKind::UniqueKeyword),
            "unknown" => Some(SyntaxKind::UnknownKeyword),
            "using" => Some(SyntaxKind::UsingKeyword),
            "from" => Some(SyntaxKind::FromKeyword),
            "global" => Some(SyntaxKind::GlobalKeyword),
            "bigint" => Some(SyntaxKind::BigIntKeyword),
            "override" => Some(SyntaxKind::OverrideKeyword),
            "of" => Some(SyntaxKind::OfKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::EqualsToken => Some("="),
            _ => None,
        }
    }

    /// The source text for a token kind, used in "'{0}' expected." messages.
    pub fn token_text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Serialize for SyntaxKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(*self as u16)
    }
}

impl<'de> Deserialize<'de> for SyntaxKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u16::deserialize(deserializer)?;
        SyntaxKind::from_u16(value)
            .ok_or_else(|| de::Error::custom(format_args!("unknown syntax kind {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminators_match_typescript() {
        assert_eq!(SyntaxKind::NumericLiteral as u16, 9);
        assert_eq!(SyntaxKind::StringLiteral as u16, 11);
        assert_eq!(SyntaxKind::Identifier as u16, 80);
        assert_eq!(SyntaxKind::VoidKeyword as u16, 116);
        assert_eq!(SyntaxKind::StringKeyword as u16, 154);
        assert_eq!(SyntaxKind::ClassDeclaration as u16, 263);
        assert_eq!(SyntaxKind::InterfaceDeclaration as u16, 264);
        assert_eq!(SyntaxKind::EnumDeclaration as u16, 266);
        assert_eq!(SyntaxKind::HeritageClause as u16, 298);
        assert_eq!(SyntaxKind::EnumMember as u16, 306);
        assert_eq!(SyntaxKind::SourceFile as u16, 312);
    }

    #[test]
    fn test_all_is_dense() {
        for (i, kind) in SyntaxKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
            assert_eq!(SyntaxKind::from_u16(i as u16), Some(*kind));
        }
        assert_eq!(SyntaxKind::from_u16(SyntaxKind::ALL.len() as u16), None);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(SyntaxKind::from_keyword("interface"), Some(SyntaxKind::InterfaceKeyword));
        assert_eq!(SyntaxKind::from_keyword("keyof"), Some(SyntaxKind::KeyOfKeyword));
        assert_eq!(SyntaxKind::from_keyword("Interface"), None);
        assert_eq!(SyntaxKind::ReadonlyKeyword.keyword_text(), Some("readonly"));
        assert_eq!(SyntaxKind::CloseBraceToken.token_text(), Some("}"));
        assert!(SyntaxKind::ClassKeyword.is_reserved_word());
        assert!(!SyntaxKind::TypeKeyword.is_reserved_word());
    }
}
