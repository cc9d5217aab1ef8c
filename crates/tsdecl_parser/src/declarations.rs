//! Declaration grammar: the statements of a file or namespace body.

use tracing::trace;
use tsdecl_ast::node::*;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_ast::types::NodeFlags;
use tsdecl_diagnostics::messages;

use crate::parser::{ParseResult, Parser, Rule};

const INTERFACE_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::ExportKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::DeclareKeyword,
];

const CLASS_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::ExportKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::AbstractKeyword,
];

const ENUM_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::ExportKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::ConstKeyword,
];

const FUNCTION_MODIFIERS: &[SyntaxKind] = INTERFACE_MODIFIERS;

/// Type aliases, variables and namespaces.
const AMBIENT_MODIFIERS: &[SyntaxKind] = &[SyntaxKind::ExportKeyword, SyntaxKind::DeclareKeyword];

impl<'src> Parser<'src> {
    /// Parse statements until `close` or the end of input. Stray
    /// semicolons are skipped; `close` itself is left for the caller.
    pub(crate) fn parse_statements_until(&mut self, close: SyntaxKind) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.optional_token(SyntaxKind::SemicolonToken).is_some() {}
            let token = self.current_token();
            if token == close || token == SyntaxKind::EndOfFileToken {
                return Ok(statements);
            }
            statements.push(self.parse_statement()?);
        }
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let rules: [Rule<'src, Statement>; 12] = [
            Self::parse_import_declaration,
            Self::parse_namespace_export_declaration,
            Self::parse_export_declaration,
            Self::parse_interface_declaration,
            Self::parse_class_declaration,
            Self::parse_function_declaration,
            Self::parse_type_alias_declaration,
            Self::parse_enum_declaration,
            Self::parse_variable_statement,
            Self::parse_module_declaration,
            Self::parse_global_augmentation,
            Self::parse_export_assignment,
        ];
        self.nested(|p| p.alternatives(&rules, &messages::DECLARATION_OR_STATEMENT_EXPECTED))
    }

    /// Modifiers in `allowed`; any other modifier keyword in front of a
    /// declaration is rejected. `const` is left alone since it also starts
    /// a variable statement.
    fn parse_declaration_modifiers(&mut self, allowed: &[SyntaxKind]) -> ParseResult<Option<Vec<Modifier>>> {
        let modifiers = self.parse_modifiers(allowed)?;
        let token = self.current_token();
        if token.is_modifier_kind() && token != SyntaxKind::ConstKeyword && self.next_token_can_follow_modifier() {
            let text = token.keyword_text().unwrap_or_default();
            return Err(self.error_at_current(&messages::_0_MODIFIER_CANNOT_BE_USED_HERE, &[text]));
        }
        Ok(modifiers)
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn parse_interface_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_interface_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(INTERFACE_MODIFIERS)?;
        self.expect_token(SyntaxKind::InterfaceKeyword)?;
        let name = self.parse_identifier()?.with_comment(comment);
        let type_parameters = self.parse_type_parameters()?;
        let heritage_clauses = self.parse_heritage_clauses()?;
        let members = self.parse_type_members()?;
        Ok(Statement::InterfaceDeclaration(InterfaceDeclaration {
            kind: SyntaxKind::InterfaceDeclaration,
            modifiers,
            name,
            type_parameters,
            heritage_clauses,
            members,
        }))
    }

    fn parse_class_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_class_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(CLASS_MODIFIERS)?;
        self.expect_token(SyntaxKind::ClassKeyword)?;
        let name = self.parse_identifier()?.with_comment(comment);
        let type_parameters = self.parse_type_parameters()?;
        let heritage_clauses = self.parse_heritage_clauses()?;
        let members = self.parse_class_members()?;
        Ok(Statement::ClassDeclaration(ClassDeclaration {
            kind: SyntaxKind::ClassDeclaration,
            modifiers,
            name,
            type_parameters,
            heritage_clauses,
            members,
        }))
    }

    fn parse_type_alias_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_type_alias_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(AMBIENT_MODIFIERS)?;
        self.expect_token(SyntaxKind::TypeKeyword)?;
        let name = self.parse_identifier()?.with_comment(comment);
        let type_parameters = self.parse_type_parameters()?;
        self.expect_token(SyntaxKind::EqualsToken)?;
        let type_node = self.parse_boxed_type()?;
        self.parse_semicolon()?;
        Ok(Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            kind: SyntaxKind::TypeAliasDeclaration,
            modifiers,
            name,
            type_parameters,
            type_node,
        }))
    }

    fn parse_enum_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_enum_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(ENUM_MODIFIERS)?;
        self.expect_token(SyntaxKind::EnumKeyword)?;
        let name = self.parse_identifier()?.with_comment(comment);
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let members = self.parse_delimited_list(SyntaxKind::CloseBraceToken, true, |p| p.parse_enum_member())?;
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(Statement::EnumDeclaration(EnumDeclaration {
            kind: SyntaxKind::EnumDeclaration,
            modifiers,
            name,
            members,
        }))
    }

    /// `Name [= "literal" | = 42]`
    fn parse_enum_member(&mut self) -> ParseResult<EnumMember> {
        let comment = self.doc_comment();
        let name = match self.current_token() {
            SyntaxKind::StringLiteral => self.parse_property_name(comment)?,
            _ if self.is_identifier_name() => self.parse_property_name(comment)?,
            _ => return Err(self.error_at_current(&messages::ENUM_MEMBER_EXPECTED, &[])),
        };

        let initializer = if self.optional_token(SyntaxKind::EqualsToken).is_some() {
            let literal = match self.current_token() {
                _ if self.scanner.token_error().is_some() => None,
                SyntaxKind::StringLiteral => Some(LiteralExpression::StringLiteral(StringLiteral::new(self.token_value()))),
                SyntaxKind::NumericLiteral => Some(LiteralExpression::NumericLiteral(NumericLiteral::new(self.token_value()))),
                _ => None,
            };
            let Some(literal) = literal else {
                return Err(self.error_at_current(
                    &messages::IN_AMBIENT_ENUM_DECLARATIONS_MEMBER_INITIALIZER_MUST_BE_CONSTANT_EXPRESSION,
                    &[],
                ));
            };
            self.next_token();
            Some(literal)
        } else {
            None
        };

        Ok(EnumMember {
            kind: SyntaxKind::EnumMember,
            name,
            initializer,
        })
    }

    // ========================================================================
    // Values
    // ========================================================================

    fn parse_function_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_function_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(FUNCTION_MODIFIERS)?;
        self.expect_token(SyntaxKind::FunctionKeyword)?;
        let name = self.parse_identifier()?.with_comment(comment);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        self.expect_token(SyntaxKind::ColonToken)?;
        let return_type = self.parse_return_type()?;
        self.parse_semicolon()?;
        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            kind: SyntaxKind::FunctionDeclaration,
            modifiers,
            name,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    /// `declare const a: A, b: B;`
    fn parse_variable_statement(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_variable_statement");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(AMBIENT_MODIFIERS)?;
        let flags = match self.current_token() {
            SyntaxKind::ConstKeyword => NodeFlags::CONST,
            SyntaxKind::LetKeyword => NodeFlags::LET,
            SyntaxKind::VarKeyword => NodeFlags::NONE,
            _ => return Err(self.error_at_current(&messages::VARIABLE_DECLARATION_EXPECTED, &[])),
        };
        self.next_token();

        let mut comment = comment;
        let declarations = self.parse_delimited_list(SyntaxKind::SemicolonToken, false, |p| {
            let name = p.parse_identifier()?.with_comment(comment.take());
            p.expect_token(SyntaxKind::ColonToken)?;
            let type_node = p.parse_boxed_type()?;
            Ok(VariableDeclaration {
                kind: SyntaxKind::VariableDeclaration,
                name,
                type_node,
            })
        })?;
        self.parse_semicolon()?;

        Ok(Statement::VariableStatement(VariableStatement {
            kind: SyntaxKind::VariableStatement,
            modifiers,
            declaration_list: VariableDeclarationList {
                kind: SyntaxKind::VariableDeclarationList,
                flags,
                declarations,
            },
        }))
    }

    // ========================================================================
    // Namespaces
    // ========================================================================

    /// `namespace A.B { ... }`, `module A { ... }` or `module "m" { ... }`.
    /// A string-named module may omit its body.
    fn parse_module_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_module_declaration");
        let comment = self.doc_comment();
        let modifiers = self.parse_declaration_modifiers(AMBIENT_MODIFIERS)?;
        let flags = match self.current_token() {
            SyntaxKind::NamespaceKeyword => NodeFlags::NAMESPACE,
            SyntaxKind::ModuleKeyword => NodeFlags::NONE,
            _ => return Err(self.error_at_current(&messages::_0_EXPECTED, &["namespace"])),
        };
        self.next_token();

        if flags.is_empty() && self.current_token() == SyntaxKind::StringLiteral {
            let name = self.parse_string_literal()?;
            let body = if self.current_token() == SyntaxKind::OpenBraceToken {
                Some(ModuleBody::ModuleBlock(self.parse_module_block()?))
            } else {
                self.parse_semicolon()?;
                None
            };
            return Ok(Statement::ModuleDeclaration(ModuleDeclaration {
                kind: SyntaxKind::ModuleDeclaration,
                flags,
                modifiers,
                name: ModuleName::StringLiteral(name),
                body,
            }));
        }

        self.parse_namespace_declaration(flags, modifiers, comment)
            .map(Statement::ModuleDeclaration)
    }

    /// One segment of a dotted namespace name and everything after it.
    fn parse_namespace_declaration(
        &mut self,
        flags: NodeFlags,
        modifiers: Option<Vec<Modifier>>,
        comment: Option<String>,
    ) -> ParseResult<ModuleDeclaration> {
        let name = self.parse_identifier()?.with_comment(comment);
        let body = if self.optional_token(SyntaxKind::DotToken).is_some() {
            let inner_flags = NodeFlags::NESTED_NAMESPACE | (flags & NodeFlags::NAMESPACE);
            let inner = self.nested(|p| p.parse_namespace_declaration(inner_flags, None, None))?;
            ModuleBody::ModuleDeclaration(Box::new(inner))
        } else {
            ModuleBody::ModuleBlock(self.parse_module_block()?)
        };
        Ok(ModuleDeclaration {
            kind: SyntaxKind::ModuleDeclaration,
            flags,
            modifiers,
            name: ModuleName::Identifier(name),
            body: Some(body),
        })
    }

    /// `declare global { ... }`
    fn parse_global_augmentation(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_global_augmentation");
        let modifiers = self.parse_declaration_modifiers(AMBIENT_MODIFIERS)?;
        self.expect_token(SyntaxKind::GlobalKeyword)?;
        let body = self.parse_module_block()?;
        Ok(Statement::ModuleDeclaration(ModuleDeclaration {
            kind: SyntaxKind::ModuleDeclaration,
            flags: NodeFlags::GLOBAL_AUGMENTATION,
            modifiers,
            name: ModuleName::Identifier(Identifier::new("global")),
            body: Some(ModuleBody::ModuleBlock(body)),
        }))
    }

    fn parse_module_block(&mut self) -> ParseResult<ModuleBlock> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let statements = self.parse_statements_until(SyntaxKind::CloseBraceToken)?;
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(ModuleBlock {
            kind: SyntaxKind::ModuleBlock,
            statements,
        })
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    /// `import "m";`, `import d from "m";`, `import * as n from "m";`,
    /// `import [type] d, { a, b as c } from "m";`
    fn parse_import_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_import_declaration");
        self.expect_token(SyntaxKind::ImportKeyword)?;

        if self.current_token() == SyntaxKind::StringLiteral {
            let module_specifier = self.parse_string_literal()?;
            self.parse_semicolon()?;
            return Ok(Statement::ImportDeclaration(ImportDeclaration {
                kind: SyntaxKind::ImportDeclaration,
                import_clause: None,
                module_specifier,
            }));
        }

        let is_type_only = self.current_token() == SyntaxKind::TypeKeyword && self.next_token_starts_import_clause();
        if is_type_only {
            self.next_token();
        }

        let name = if self.is_identifier() && self.current_token() != SyntaxKind::FromKeyword {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let named_bindings = if name.is_none() || self.optional_token(SyntaxKind::CommaToken).is_some() {
            Some(self.parse_named_import_bindings()?)
        } else {
            None
        };

        self.expect_token(SyntaxKind::FromKeyword)?;
        let module_specifier = self.parse_string_literal()?;
        self.parse_semicolon()?;

        Ok(Statement::ImportDeclaration(ImportDeclaration {
            kind: SyntaxKind::ImportDeclaration,
            import_clause: Some(ImportClause {
                kind: SyntaxKind::ImportClause,
                is_type_only,
                name,
                named_bindings,
            }),
            module_specifier,
        }))
    }

    /// Whether the token after `type` continues an import clause, making
    /// `type` a modifier rather than the default import's name.
    fn next_token_starts_import_clause(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            match p.current_token() {
                SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken => true,
                SyntaxKind::FromKeyword => false,
                _ => p.is_identifier(),
            }
        })
    }

    fn parse_named_import_bindings(&mut self) -> ParseResult<NamedImportBindings> {
        if self.optional_token(SyntaxKind::AsteriskToken).is_some() {
            self.expect_token(SyntaxKind::AsKeyword)?;
            let name = self.parse_identifier()?;
            return Ok(NamedImportBindings::NamespaceImport(NamespaceImport {
                kind: SyntaxKind::NamespaceImport,
                name,
            }));
        }

        let elements = self
            .parse_specifier_list()?
            .into_iter()
            .map(|(is_type_only, property_name, name)| ImportSpecifier {
                kind: SyntaxKind::ImportSpecifier,
                is_type_only,
                property_name,
                name,
            })
            .collect();
        Ok(NamedImportBindings::NamedImports(NamedImports {
            kind: SyntaxKind::NamedImports,
            elements,
        }))
    }

    /// `{ [type] a, b as c }`, possibly empty. Each entry is
    /// `(is_type_only, property_name, name)`.
    fn parse_specifier_list(&mut self) -> ParseResult<Vec<(bool, Option<Identifier>, Identifier)>> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        if self.optional_token(SyntaxKind::CloseBraceToken).is_some() {
            return Ok(Vec::new());
        }
        let specifiers = self.parse_delimited_list(SyntaxKind::CloseBraceToken, true, |p| {
            let is_type_only = p.current_token() == SyntaxKind::TypeKeyword
                && p.look_ahead(|p| {
                    p.next_token();
                    p.is_identifier_name() && p.current_token() != SyntaxKind::AsKeyword
                });
            if is_type_only {
                p.next_token();
            }
            let name = p.parse_identifier_name()?;
            if p.optional_token(SyntaxKind::AsKeyword).is_some() {
                let alias = p.parse_identifier_name()?;
                Ok((is_type_only, Some(name), alias))
            } else {
                Ok((is_type_only, None, name))
            }
        })?;
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(specifiers)
    }

    /// `export [type] { a, b as c } [from "m"];` or `export [type] * from "m";`
    fn parse_export_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_export_declaration");
        self.expect_token(SyntaxKind::ExportKeyword)?;
        let is_type_only = self.current_token() == SyntaxKind::TypeKeyword
            && self.look_ahead(|p| {
                matches!(p.next_token(), SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken)
            });
        if is_type_only {
            self.next_token();
        }

        let (export_clause, module_specifier) = if self.optional_token(SyntaxKind::AsteriskToken).is_some() {
            self.expect_token(SyntaxKind::FromKeyword)?;
            (None, Some(self.parse_string_literal()?))
        } else {
            let elements = self
                .parse_specifier_list()?
                .into_iter()
                .map(|(is_type_only, property_name, name)| ExportSpecifier {
                    kind: SyntaxKind::ExportSpecifier,
                    is_type_only,
                    property_name,
                    name,
                })
                .collect();
            let module_specifier = if self.optional_token(SyntaxKind::FromKeyword).is_some() {
                Some(self.parse_string_literal()?)
            } else {
                None
            };
            let clause = NamedExports {
                kind: SyntaxKind::NamedExports,
                elements,
            };
            (Some(clause), module_specifier)
        };
        self.parse_semicolon()?;

        Ok(Statement::ExportDeclaration(ExportDeclaration {
            kind: SyntaxKind::ExportDeclaration,
            is_type_only,
            export_clause,
            module_specifier,
        }))
    }

    /// `export = A.B;` or `export default A;`
    fn parse_export_assignment(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_export_assignment");
        self.expect_token(SyntaxKind::ExportKeyword)?;
        let is_export_equals = match self.current_token() {
            SyntaxKind::EqualsToken => true,
            SyntaxKind::DefaultKeyword => false,
            _ => return Err(self.error_at_current(&messages::_0_EXPECTED, &["="])),
        };
        self.next_token();
        let expression = self.parse_entity_name()?;
        self.parse_semicolon()?;
        Ok(Statement::ExportAssignment(ExportAssignment {
            kind: SyntaxKind::ExportAssignment,
            is_export_equals,
            expression,
        }))
    }

    /// `export as namespace N;`
    fn parse_namespace_export_declaration(&mut self) -> ParseResult<Statement> {
        trace!(pos = self.token_pos(), "parse_namespace_export_declaration");
        self.expect_token(SyntaxKind::ExportKeyword)?;
        self.expect_token(SyntaxKind::AsKeyword)?;
        self.expect_token(SyntaxKind::NamespaceKeyword)?;
        let name = self.parse_identifier()?;
        self.parse_semicolon()?;
        Ok(Statement::NamespaceExportDeclaration(NamespaceExportDeclaration {
            kind: SyntaxKind::NamespaceExportDeclaration,
            name,
        }))
    }
}
