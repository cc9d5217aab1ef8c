//! Generated kind tables and accessors for AST nodes.
//!
//! `impl_ast_node!` assigns each node struct the kinds it may carry; the
//! `Node` enum below is generated from the same structs, so the decode
//! table covers every shape by construction.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::ModifierFlags;

impl<T: AstNode> AstNode for Box<T> {
    #[inline]
    fn kind(&self) -> SyntaxKind {
        (**self).kind()
    }

    #[inline]
    fn accepts(kind: SyntaxKind) -> bool {
        T::accepts(kind)
    }
}

impl_ast_node! {
    Token => k if k.is_punctuation() || (k.is_keyword() && !k.is_keyword_type()),
    Identifier => SyntaxKind::Identifier,
    QualifiedName => SyntaxKind::QualifiedName,
    StringLiteral => SyntaxKind::StringLiteral,
    NumericLiteral => SyntaxKind::NumericLiteral,

    KeywordTypeNode => k if k.is_keyword_type(),
    ThisTypeNode => SyntaxKind::ThisType,
    TypeReferenceNode => SyntaxKind::TypeReference,
    TypePredicateNode => SyntaxKind::TypePredicate,
    FunctionTypeNode => SyntaxKind::FunctionType,
    ConstructorTypeNode => SyntaxKind::ConstructorType,
    TypeQueryNode => SyntaxKind::TypeQuery,
    TypeLiteralNode => SyntaxKind::TypeLiteral,
    ArrayTypeNode => SyntaxKind::ArrayType,
    TupleTypeNode => SyntaxKind::TupleType,
    OptionalTypeNode => SyntaxKind::OptionalType,
    RestTypeNode => SyntaxKind::RestType,
    NamedTupleMemberNode => SyntaxKind::NamedTupleMember,
    UnionTypeNode => SyntaxKind::UnionType,
    IntersectionTypeNode => SyntaxKind::IntersectionType,
    ParenthesizedTypeNode => SyntaxKind::ParenthesizedType,
    TypeOperatorNode => SyntaxKind::TypeOperator,
    IndexedAccessTypeNode => SyntaxKind::IndexedAccessType,
    MappedTypeNode => SyntaxKind::MappedType,
    LiteralTypeNode => SyntaxKind::LiteralType,

    TypeParameterDeclaration => SyntaxKind::TypeParameter,
    ParameterDeclaration => SyntaxKind::Parameter,
    HeritageClause => SyntaxKind::HeritageClause,
    ExpressionWithTypeArgumentsNode => SyntaxKind::ExpressionWithTypeArguments,

    PropertySignatureNode => SyntaxKind::PropertySignature,
    MethodSignatureNode => SyntaxKind::MethodSignature,
    CallSignatureNode => SyntaxKind::CallSignature,
    ConstructSignatureNode => SyntaxKind::ConstructSignature,
    IndexSignatureNode => SyntaxKind::IndexSignature,
    PropertyDeclarationNode => SyntaxKind::PropertyDeclaration,
    MethodDeclarationNode => SyntaxKind::MethodDeclaration,
    ConstructorDeclaration => SyntaxKind::Constructor,

    InterfaceDeclaration => SyntaxKind::InterfaceDeclaration,
    ClassDeclaration => SyntaxKind::ClassDeclaration,
    EnumDeclaration => SyntaxKind::EnumDeclaration,
    EnumMember => SyntaxKind::EnumMember,
    FunctionDeclaration => SyntaxKind::FunctionDeclaration,
    TypeAliasDeclaration => SyntaxKind::TypeAliasDeclaration,
    VariableStatement => SyntaxKind::VariableStatement,
    VariableDeclarationList => SyntaxKind::VariableDeclarationList,
    VariableDeclaration => SyntaxKind::VariableDeclaration,
    ModuleDeclaration => SyntaxKind::ModuleDeclaration,
    ModuleBlock => SyntaxKind::ModuleBlock,
    ImportDeclaration => SyntaxKind::ImportDeclaration,
    ImportClause => SyntaxKind::ImportClause,
    NamespaceImport => SyntaxKind::NamespaceImport,
    NamedImports => SyntaxKind::NamedImports,
    ImportSpecifier => SyntaxKind::ImportSpecifier,
    ExportDeclaration => SyntaxKind::ExportDeclaration,
    NamedExports => SyntaxKind::NamedExports,
    ExportSpecifier => SyntaxKind::ExportSpecifier,
    ExportAssignment => SyntaxKind::ExportAssignment,
    NamespaceExportDeclaration => SyntaxKind::NamespaceExportDeclaration,
    SourceFile => SyntaxKind::SourceFile,
}

kind_enum! {
    /// Any node, one variant per concrete shape. This is the root type of
    /// the interchange format: decoding reads `Kind` and picks the variant.
    pub enum Node {
        Token(Token),
        Identifier(Identifier),
        QualifiedName(QualifiedName),
        StringLiteral(StringLiteral),
        NumericLiteral(NumericLiteral),
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
        TypeParameter(TypeParameterDeclaration),
        Parameter(ParameterDeclaration),
        HeritageClause(HeritageClause),
        ExpressionWithTypeArguments(ExpressionWithTypeArgumentsNode),
        PropertySignature(PropertySignatureNode),
        MethodSignature(MethodSignatureNode),
        CallSignature(CallSignatureNode),
        ConstructSignature(ConstructSignatureNode),
        IndexSignature(IndexSignatureNode),
        PropertyDeclaration(PropertyDeclarationNode),
        MethodDeclaration(MethodDeclarationNode),
        Constructor(ConstructorDeclaration),
        InterfaceDeclaration(InterfaceDeclaration),
        ClassDeclaration(ClassDeclaration),
        EnumDeclaration(EnumDeclaration),
        EnumMember(EnumMember),
        FunctionDeclaration(FunctionDeclaration),
        TypeAliasDeclaration(TypeAliasDeclaration),
        VariableStatement(VariableStatement),
        VariableDeclarationList(VariableDeclarationList),
        VariableDeclaration(VariableDeclaration),
        ModuleDeclaration(ModuleDeclaration),
        ModuleBlock(ModuleBlock),
        ImportDeclaration(ImportDeclaration),
        ImportClause(ImportClause),
        NamespaceImport(NamespaceImport),
        NamedImports(NamedImports),
        ImportSpecifier(ImportSpecifier),
        ExportDeclaration(ExportDeclaration),
        NamedExports(NamedExports),
        ExportSpecifier(ExportSpecifier),
        ExportAssignment(ExportAssignment),
        NamespaceExportDeclaration(NamespaceExportDeclaration),
        SourceFile(SourceFile),
    }
}

/// Fold a modifier list into `ModifierFlags`.
pub fn modifier_flags(modifiers: Option<&[Modifier]>) -> ModifierFlags {
    modifiers
        .unwrap_or_default()
        .iter()
        .fold(ModifierFlags::NONE, |flags, m| flags | ModifierFlags::from_kind(m.kind))
}

impl Statement {
    /// The declared name, for statements that declare one.
    pub fn name(&self) -> Option<String> {
        match self {
            Statement::VariableStatement(n) => n
                .declaration_list
                .declarations
                .first()
                .map(|d| d.name.text.clone()),
            Statement::FunctionDeclaration(n) => Some(n.name.text.clone()),
            Statement::ClassDeclaration(n) => Some(n.name.text.clone()),
            Statement::InterfaceDeclaration(n) => Some(n.name.text.clone()),
            Statement::TypeAliasDeclaration(n) => Some(n.name.text.clone()),
            Statement::EnumDeclaration(n) => Some(n.name.text.clone()),
            Statement::ModuleDeclaration(n) => Some(match &n.name {
                ModuleName::Identifier(id) => id.text.clone(),
                ModuleName::StringLiteral(lit) => lit.text.clone(),
            }),
            Statement::NamespaceExportDeclaration(n) => Some(n.name.text.clone()),
            Statement::ImportDeclaration(_)
            | Statement::ExportDeclaration(_)
            | Statement::ExportAssignment(_) => None,
        }
    }

    pub fn modifiers(&self) -> Option<&[Modifier]> {
        match self {
            Statement::VariableStatement(n) => n.modifiers.as_deref(),
            Statement::FunctionDeclaration(n) => n.modifiers.as_deref(),
            Statement::ClassDeclaration(n) => n.modifiers.as_deref(),
            Statement::InterfaceDeclaration(n) => n.modifiers.as_deref(),
            Statement::TypeAliasDeclaration(n) => n.modifiers.as_deref(),
            Statement::EnumDeclaration(n) => n.modifiers.as_deref(),
            Statement::ModuleDeclaration(n) => n.modifiers.as_deref(),
            Statement::ImportDeclaration(_)
            | Statement::ExportDeclaration(_)
            | Statement::ExportAssignment(_)
            | Statement::NamespaceExportDeclaration(_) => None,
        }
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        modifier_flags(self.modifiers())
    }

    /// The documentation comment attached to the declaration's name.
    pub fn comment(&self) -> Option<&str> {
        let name = match self {
            Statement::VariableStatement(n) => &n.declaration_list.declarations.first()?.name,
            Statement::FunctionDeclaration(n) => &n.name,
            Statement::ClassDeclaration(n) => &n.name,
            Statement::InterfaceDeclaration(n) => &n.name,
            Statement::TypeAliasDeclaration(n) => &n.name,
            Statement::EnumDeclaration(n) => &n.name,
            Statement::NamespaceExportDeclaration(n) => &n.name,
            Statement::ModuleDeclaration(n) => match &n.name {
                ModuleName::Identifier(id) => id,
                ModuleName::StringLiteral(_) => return None,
            },
            Statement::ImportDeclaration(_)
            | Statement::ExportDeclaration(_)
            | Statement::ExportAssignment(_) => return None,
        };
        name.comment.as_deref()
    }
}

impl TypeElement {
    pub fn name(&self) -> Option<&PropertyName> {
        match self {
            TypeElement::PropertySignature(n) => Some(&n.name),
            TypeElement::MethodSignature(n) => Some(&n.name),
            TypeElement::CallSignature(_)
            | TypeElement::ConstructSignature(_)
            | TypeElement::IndexSignature(_) => None,
        }
    }
}

impl ClassElement {
    pub fn name(&self) -> Option<&PropertyName> {
        match self {
            ClassElement::PropertyDeclaration(n) => Some(&n.name),
            ClassElement::MethodDeclaration(n) => Some(&n.name),
            ClassElement::Constructor(_) | ClassElement::IndexSignature(_) => None,
        }
    }

    pub fn modifiers(&self) -> Option<&[Modifier]> {
        match self {
            ClassElement::PropertyDeclaration(n) => n.modifiers.as_deref(),
            ClassElement::MethodDeclaration(n) => n.modifiers.as_deref(),
            ClassElement::Constructor(n) => n.modifiers.as_deref(),
            ClassElement::IndexSignature(n) => n.modifiers.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_variants_are_disjoint() {
        for &kind in SyntaxKind::ALL {
            let found = Node::variants_accepting(kind);
            assert!(found.len() <= 1, "{:?} accepted by {:?}", kind, found);
            let found = TypeNode::variants_accepting(kind);
            assert!(found.len() <= 1, "{:?} accepted by {:?}", kind, found);
            let found = Statement::variants_accepting(kind);
            assert!(found.len() <= 1, "{:?} accepted by {:?}", kind, found);
            let found = ClassElement::variants_accepting(kind);
            assert!(found.len() <= 1, "{:?} accepted by {:?}", kind, found);
        }
    }

    #[test]
    fn test_category_kinds() {
        assert!(TypeNode::accepts(SyntaxKind::StringKeyword));
        assert!(TypeNode::accepts(SyntaxKind::UnionType));
        assert!(!TypeNode::accepts(SyntaxKind::Identifier));
        assert!(TypeElement::accepts(SyntaxKind::IndexSignature));
        assert!(ClassElement::accepts(SyntaxKind::IndexSignature));
        assert!(!TypeElement::accepts(SyntaxKind::PropertyDeclaration));
        assert!(Statement::accepts(SyntaxKind::EnumDeclaration));
        assert!(Node::accepts(SyntaxKind::SourceFile));
    }

    #[test]
    fn test_modifier_flags() {
        let modifiers = [
            Token::new(SyntaxKind::ExportKeyword),
            Token::new(SyntaxKind::DeclareKeyword),
        ];
        let flags = modifier_flags(Some(&modifiers));
        assert_eq!(flags, ModifierFlags::EXPORT | ModifierFlags::AMBIENT);
        assert_eq!(modifier_flags(None), ModifierFlags::NONE);
    }
}
