//! AST node definitions for ambient declarations.
//!
//! Shapes follow TypeScript's AST node interfaces, restricted to what can
//! appear in a `.d.ts` file. Nodes own their children by value and carry no
//! source positions. Every struct has a `kind` set once at construction; the
//! field names serialize in PascalCase, so a node's JSON form is its `Kind`
//! plus exactly its own fields.

use crate::interchange::{deserialize_modifiers, deserialize_type_operator};
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;
use serde::{Deserialize, Serialize};

/// Behaviour shared by every node struct and every node enum.
pub trait AstNode {
    /// The discriminator this node was built with.
    fn kind(&self) -> SyntaxKind;

    /// Whether a node of this type may carry `kind`.
    fn accepts(kind: SyntaxKind) -> bool
    where
        Self: Sized;
}

// ============================================================================
// Tokens, names and literals
// ============================================================================

/// A zero-payload token: a modifier keyword, `?`, `...`, `true`/`false`, or
/// the `+`/`-` of a mapped type modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Token {
    #[serde(deserialize_with = "Token::deserialize_kind")]
    pub kind: SyntaxKind,
}

impl Token {
    pub fn new(kind: SyntaxKind) -> Self {
        Self { kind }
    }
}

/// Modifiers (`export`, `declare`, `readonly`, ...) are keyword tokens.
pub type Modifier = Token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Identifier {
    #[serde(deserialize_with = "Identifier::deserialize_kind")]
    pub kind: SyntaxKind,
    pub text: String,
    /// Documentation comment of the declaration this identifier names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Identifier {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::Identifier,
            text: text.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

/// `Left.Right` in a type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QualifiedName {
    #[serde(deserialize_with = "QualifiedName::deserialize_kind")]
    pub kind: SyntaxKind,
    pub left: EntityName,
    pub right: Identifier,
}

kind_enum! {
    /// A possibly dotted name: `Foo` or `ns.Foo`.
    pub enum EntityName {
        Identifier(Identifier),
        QualifiedName(Box<QualifiedName>),
    }
}

impl EntityName {
    /// The dotted source form of the name.
    pub fn text(&self) -> String {
        match self {
            EntityName::Identifier(id) => id.text.clone(),
            EntityName::QualifiedName(qn) => format!("{}.{}", qn.left.text(), qn.right.text),
        }
    }
}

/// A string literal; `text` is the content between the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringLiteral {
    #[serde(deserialize_with = "StringLiteral::deserialize_kind")]
    pub kind: SyntaxKind,
    pub text: String,
}

impl StringLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::StringLiteral,
            text: text.into(),
        }
    }
}

/// A numeric literal, kept as its source digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumericLiteral {
    #[serde(deserialize_with = "NumericLiteral::deserialize_kind")]
    pub kind: SyntaxKind,
    pub text: String,
}

impl NumericLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::NumericLiteral,
            text: text.into(),
        }
    }
}

kind_enum! {
    /// Literal values: enum initializers and literal types.
    pub enum LiteralExpression {
        StringLiteral(StringLiteral),
        NumericLiteral(NumericLiteral),
        /// `true` or `false`, only valid in a literal type.
        BooleanLiteral(Token),
    }
}

kind_enum! {
    /// The name of a member or enum member.
    pub enum PropertyName {
        Identifier(Identifier),
        StringLiteral(StringLiteral),
        NumericLiteral(NumericLiteral),
    }
}

impl PropertyName {
    pub fn text(&self) -> &str {
        match self {
            PropertyName::Identifier(id) => &id.text,
            PropertyName::StringLiteral(lit) => &lit.text,
            PropertyName::NumericLiteral(lit) => &lit.text,
        }
    }

    /// The documentation comment, when the name is an identifier.
    pub fn comment(&self) -> Option<&str> {
        match self {
            PropertyName::Identifier(id) => id.comment.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// Type Nodes
// ============================================================================

kind_enum! {
    /// Any node that can appear in a type position.
    pub enum TypeNode {
        KeywordType(KeywordTypeNode),
        ThisType(ThisTypeNode),
        TypeReference(TypeReferenceNode),
        TypePredicate(TypePredicateNode),
        FunctionType(FunctionTypeNode),
        ConstructorType(ConstructorTypeNode),
        TypeQuery(TypeQueryNode),
        TypeLiteral(TypeLiteralNode),
        ArrayType(ArrayTypeNode),
        TupleType(TupleTypeNode),
        OptionalType(OptionalTypeNode),
        RestType(RestTypeNode),
        NamedTupleMember(NamedTupleMemberNode),
        UnionType(UnionTypeNode),
        IntersectionType(IntersectionTypeNode),
        ParenthesizedType(ParenthesizedTypeNode),
        TypeOperator(TypeOperatorNode),
        IndexedAccessType(IndexedAccessTypeNode),
        MappedType(MappedTypeNode),
        LiteralType(LiteralTypeNode),
    }
}

/// `any`, `string`, `void`, `null`, ... The kind is the keyword's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeywordTypeNode {
    #[serde(deserialize_with = "KeywordTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
}

impl KeywordTypeNode {
    pub fn new(kind: SyntaxKind) -> Self {
        debug_assert!(kind.is_keyword_type());
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThisTypeNode {
    #[serde(deserialize_with = "ThisTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeReferenceNode {
    #[serde(deserialize_with = "TypeReferenceNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub type_name: EntityName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeNode>>,
}

kind_enum! {
    /// The subject of a type predicate: a parameter name or `this`.
    pub enum TypePredicateParameterName {
        Identifier(Identifier),
        ThisType(ThisTypeNode),
    }
}

/// `x is T`, `asserts x is T` or `asserts x` in a return type position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypePredicateNode {
    #[serde(deserialize_with = "TypePredicateNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asserts_modifier: Option<Token>,
    pub parameter_name: TypePredicateParameterName,
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_node: Option<Box<TypeNode>>,
}

/// `<T>(a: A) => R`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionTypeNode {
    #[serde(deserialize_with = "FunctionTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `new <T>(a: A) => R`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorTypeNode {
    #[serde(deserialize_with = "ConstructorTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `typeof x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeQueryNode {
    #[serde(deserialize_with = "TypeQueryNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub expr_name: EntityName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeNode>>,
}

/// `{ a: A; [k: string]: V }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeLiteralNode {
    #[serde(deserialize_with = "TypeLiteralNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub members: Vec<TypeElement>,
}

/// `T[]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArrayTypeNode {
    #[serde(deserialize_with = "ArrayTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub element_type: Box<TypeNode>,
}

/// `[A, B]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TupleTypeNode {
    #[serde(deserialize_with = "TupleTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub elements: Vec<TypeNode>,
}

/// `T?` inside a tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionalTypeNode {
    #[serde(deserialize_with = "OptionalTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `...T` inside a tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestTypeNode {
    #[serde(deserialize_with = "RestTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `name?: T` or `...rest: T[]` inside a tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamedTupleMemberNode {
    #[serde(deserialize_with = "NamedTupleMemberNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_dot_dot_token: Option<Token>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnionTypeNode {
    #[serde(deserialize_with = "UnionTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntersectionTypeNode {
    #[serde(deserialize_with = "IntersectionTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub types: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParenthesizedTypeNode {
    #[serde(deserialize_with = "ParenthesizedTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `keyof T`, `readonly T[]`, `unique symbol`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeOperatorNode {
    #[serde(deserialize_with = "TypeOperatorNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(deserialize_with = "deserialize_type_operator")]
    pub operator: SyntaxKind,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `T[K]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexedAccessTypeNode {
    #[serde(deserialize_with = "IndexedAccessTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub object_type: Box<TypeNode>,
    pub index_type: Box<TypeNode>,
}

/// `{ readonly [K in C]?: T }`. The key is a type parameter whose
/// constraint is the `in` type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MappedTypeNode {
    #[serde(deserialize_with = "MappedTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly_token: Option<Token>,
    pub type_parameter: Box<TypeParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_type: Option<Box<TypeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_node: Option<Box<TypeNode>>,
}

/// `"a"`, `42`, `true` in a type position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LiteralTypeNode {
    #[serde(deserialize_with = "LiteralTypeNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub literal: LiteralExpression,
}

// ============================================================================
// Signature elements
// ============================================================================

/// `T extends C = D`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeParameterDeclaration {
    #[serde(deserialize_with = "TypeParameterDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Box<TypeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Box<TypeNode>>,
}

impl TypeParameterDeclaration {
    pub fn new(name: Identifier) -> Self {
        Self {
            kind: SyntaxKind::TypeParameter,
            name,
            constraint: None,
            default: None,
        }
    }
}

/// `readonly ...name?: T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterDeclaration {
    #[serde(deserialize_with = "ParameterDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_dot_dot_token: Option<Token>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `extends A, B<C>` / `implements A`. The keyword itself is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeritageClause {
    #[serde(deserialize_with = "HeritageClause::deserialize_kind")]
    pub kind: SyntaxKind,
    pub types: Vec<ExpressionWithTypeArgumentsNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressionWithTypeArgumentsNode {
    #[serde(deserialize_with = "ExpressionWithTypeArgumentsNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub expression: EntityName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeNode>>,
}

// ============================================================================
// Type Members (interfaces and type literals)
// ============================================================================

kind_enum! {
    /// A member of an interface body or type literal.
    pub enum TypeElement {
        PropertySignature(PropertySignatureNode),
        MethodSignature(MethodSignatureNode),
        CallSignature(CallSignatureNode),
        ConstructSignature(ConstructSignatureNode),
        IndexSignature(IndexSignatureNode),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertySignatureNode {
    #[serde(deserialize_with = "PropertySignatureNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodSignatureNode {
    #[serde(deserialize_with = "MethodSignatureNode::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `<T>(a: A): R` inside a type body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallSignatureNode {
    #[serde(deserialize_with = "CallSignatureNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `new <T>(a: A): R` inside a type body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructSignatureNode {
    #[serde(deserialize_with = "ConstructSignatureNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `[key: K]: V`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexSignatureNode {
    #[serde(deserialize_with = "IndexSignatureNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

// ============================================================================
// Class Members
// ============================================================================

kind_enum! {
    /// A member of a class body.
    pub enum ClassElement {
        PropertyDeclaration(PropertyDeclarationNode),
        MethodDeclaration(MethodDeclarationNode),
        Constructor(ConstructorDeclaration),
        IndexSignature(IndexSignatureNode),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDeclarationNode {
    #[serde(deserialize_with = "PropertyDeclarationNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodDeclarationNode {
    #[serde(deserialize_with = "MethodDeclarationNode::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

/// `constructor(a: A);` The constructor has no name identifier, so its
/// documentation comment is held on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorDeclaration {
    #[serde(deserialize_with = "ConstructorDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
}

// ============================================================================
// Statements
// ============================================================================

kind_enum! {
    /// A top-level or namespace-level declaration.
    pub enum Statement {
        VariableStatement(VariableStatement),
        FunctionDeclaration(FunctionDeclaration),
        ClassDeclaration(ClassDeclaration),
        InterfaceDeclaration(InterfaceDeclaration),
        TypeAliasDeclaration(TypeAliasDeclaration),
        EnumDeclaration(EnumDeclaration),
        ModuleDeclaration(ModuleDeclaration),
        ImportDeclaration(ImportDeclaration),
        ExportDeclaration(ExportDeclaration),
        ExportAssignment(ExportAssignment),
        NamespaceExportDeclaration(NamespaceExportDeclaration),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InterfaceDeclaration {
    #[serde(deserialize_with = "InterfaceDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heritage_clauses: Option<Vec<HeritageClause>>,
    pub members: Vec<TypeElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassDeclaration {
    #[serde(deserialize_with = "ClassDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heritage_clauses: Option<Vec<HeritageClause>>,
    pub members: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumDeclaration {
    #[serde(deserialize_with = "EnumDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: Identifier,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumMember {
    #[serde(deserialize_with = "EnumMember::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<LiteralExpression>,
}

/// `function f<T>(a: A): R;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionDeclaration {
    #[serde(deserialize_with = "FunctionDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub return_type: Box<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeAliasDeclaration {
    #[serde(deserialize_with = "TypeAliasDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Vec<TypeParameterDeclaration>>,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

/// `declare const a: A, b: B;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariableStatement {
    #[serde(deserialize_with = "VariableStatement::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub declaration_list: VariableDeclarationList,
}

/// The declarations of one variable statement. `flags` holds `LET` or
/// `CONST`; `var` leaves it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariableDeclarationList {
    #[serde(deserialize_with = "VariableDeclarationList::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub flags: NodeFlags,
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariableDeclaration {
    #[serde(deserialize_with = "VariableDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: Identifier,
    #[serde(rename = "Type")]
    pub type_node: Box<TypeNode>,
}

kind_enum! {
    /// `namespace A` / `module "a"`.
    pub enum ModuleName {
        Identifier(Identifier),
        StringLiteral(StringLiteral),
    }
}

kind_enum! {
    /// The body of a module: a block, or the next level of a dotted
    /// `namespace A.B.C` chain.
    pub enum ModuleBody {
        ModuleBlock(ModuleBlock),
        ModuleDeclaration(Box<ModuleDeclaration>),
    }
}

/// `declare namespace N { ... }`, `declare module "m" { ... }` or
/// `declare global { ... }`. A shorthand `declare module "m";` has no body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleDeclaration {
    #[serde(deserialize_with = "ModuleDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub flags: NodeFlags,
    #[serde(default, deserialize_with = "deserialize_modifiers", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    pub name: ModuleName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ModuleBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleBlock {
    #[serde(deserialize_with = "ModuleBlock::deserialize_kind")]
    pub kind: SyntaxKind,
    pub statements: Vec<Statement>,
}

/// `import d, { a, b as c } from "m";`, `import * as n from "m";` or
/// `import "m";`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportDeclaration {
    #[serde(deserialize_with = "ImportDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_clause: Option<ImportClause>,
    pub module_specifier: StringLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportClause {
    #[serde(deserialize_with = "ImportClause::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub is_type_only: bool,
    /// The default import binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_bindings: Option<NamedImportBindings>,
}

kind_enum! {
    pub enum NamedImportBindings {
        NamespaceImport(NamespaceImport),
        NamedImports(NamedImports),
    }
}

/// `* as n`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamespaceImport {
    #[serde(deserialize_with = "NamespaceImport::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamedImports {
    #[serde(deserialize_with = "NamedImports::deserialize_kind")]
    pub kind: SyntaxKind,
    pub elements: Vec<ImportSpecifier>,
}

/// `a` or `a as b`. When renamed, `property_name` is the exported name and
/// `name` is the local alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportSpecifier {
    #[serde(deserialize_with = "ImportSpecifier::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub is_type_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

/// `export { a, b as c };`, `export { a } from "m";` or `export * from "m";`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportDeclaration {
    #[serde(deserialize_with = "ExportDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub is_type_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_clause: Option<NamedExports>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_specifier: Option<StringLiteral>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamedExports {
    #[serde(deserialize_with = "NamedExports::deserialize_kind")]
    pub kind: SyntaxKind,
    pub elements: Vec<ExportSpecifier>,
}

/// `a` or `a as b`. When renamed, `property_name` is the local name and
/// `name` is the exported alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportSpecifier {
    #[serde(deserialize_with = "ExportSpecifier::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub is_type_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

/// `export = x;` or `export default x;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportAssignment {
    #[serde(deserialize_with = "ExportAssignment::deserialize_kind")]
    pub kind: SyntaxKind,
    #[serde(default)]
    pub is_export_equals: bool,
    pub expression: EntityName,
}

/// `export as namespace N;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamespaceExportDeclaration {
    #[serde(deserialize_with = "NamespaceExportDeclaration::deserialize_kind")]
    pub kind: SyntaxKind,
    pub name: Identifier,
}

// ============================================================================
// Source File
// ============================================================================

/// The root of a parsed `.d.ts` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceFile {
    #[serde(deserialize_with = "SourceFile::deserialize_kind")]
    pub kind: SyntaxKind,
    pub statements: Vec<Statement>,
}

impl SourceFile {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            kind: SyntaxKind::SourceFile,
            statements,
        }
    }
}
