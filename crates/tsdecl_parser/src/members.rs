//! Member grammar: interface and type-literal members, class members,
//! parameters, type parameters, heritage clauses and modifier lists.

use tracing::trace;
use tsdecl_ast::node::*;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_diagnostics::{messages, ParseError};

use crate::parser::{ParseResult, Parser, Rule};

const CLASS_MEMBER_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PublicKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::AbstractKeyword,
    SyntaxKind::OverrideKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::AccessorKeyword,
];

const TYPE_MEMBER_MODIFIERS: &[SyntaxKind] = &[SyntaxKind::ReadonlyKeyword];

const PARAMETER_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PublicKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::OverrideKeyword,
];

impl<'src> Parser<'src> {
    // ========================================================================
    // Modifiers
    // ========================================================================

    /// Parse the modifiers in `allowed`, in source order. A keyword only
    /// counts as a modifier when a name or declaration can follow it, so
    /// `readonly: boolean` is a property called `readonly`.
    pub(crate) fn parse_modifiers(&mut self, allowed: &[SyntaxKind]) -> ParseResult<Option<Vec<Modifier>>> {
        let mut modifiers: Vec<Modifier> = Vec::new();
        while allowed.contains(&self.current_token()) && self.next_token_can_follow_modifier() {
            let kind = self.current_token();
            if modifiers.iter().any(|modifier| modifier.kind == kind) {
                let text = kind.keyword_text().unwrap_or_default();
                return Err(self.error_at_current(&messages::_0_MODIFIER_ALREADY_SEEN, &[text]));
            }
            modifiers.push(Token::new(kind));
            self.next_token();
        }
        Ok((!modifiers.is_empty()).then_some(modifiers))
    }

    /// Whether the current keyword is followed by something a modifier can
    /// precede.
    pub(crate) fn next_token_can_follow_modifier(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            matches!(
                p.current_token(),
                SyntaxKind::OpenBracketToken
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::AsteriskToken
                    | SyntaxKind::DotDotDotToken
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
            ) || p.is_identifier_name()
        })
    }

    fn parse_type_member_modifiers(&mut self) -> ParseResult<Option<Vec<Modifier>>> {
        let modifiers = self.parse_modifiers(TYPE_MEMBER_MODIFIERS)?;
        let token = self.current_token();
        if token.is_modifier_kind() && self.next_token_can_follow_modifier() {
            let text = token.keyword_text().unwrap_or_default();
            return Err(self.error_at_current(&messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_MEMBER, &[text]));
        }
        Ok(modifiers)
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// A member name: an identifier or keyword (which carries `comment`), or
    /// a string or numeric literal.
    pub(crate) fn parse_property_name(&mut self, comment: Option<String>) -> ParseResult<PropertyName> {
        if self.is_identifier_name() {
            return self
                .parse_identifier_name()
                .map(|id| PropertyName::Identifier(id.with_comment(comment)));
        }
        if self.scanner.token_error().is_none() {
            match self.current_token() {
                SyntaxKind::StringLiteral => {
                    let literal = StringLiteral::new(self.token_value());
                    self.next_token();
                    return Ok(PropertyName::StringLiteral(literal));
                }
                SyntaxKind::NumericLiteral => {
                    let literal = NumericLiteral::new(self.token_value());
                    self.next_token();
                    return Ok(PropertyName::NumericLiteral(literal));
                }
                _ => {}
            }
        }
        Err(self.error_at_current(&messages::IDENTIFIER_EXPECTED, &[]))
    }

    // ========================================================================
    // Signatures
    // ========================================================================

    /// `<T, U extends C = D>`, or `None` when no `<` follows.
    pub(crate) fn parse_type_parameters(&mut self) -> ParseResult<Option<Vec<TypeParameterDeclaration>>> {
        if self.current_token() != SyntaxKind::LessThanToken {
            return Ok(None);
        }
        self.next_token();
        if self.current_token() == SyntaxKind::GreaterThanToken {
            return Err(self.error_at_current(&messages::TYPE_PARAMETER_DECLARATION_EXPECTED, &[]));
        }
        let parameters =
            self.parse_delimited_list(SyntaxKind::GreaterThanToken, true, |p| p.parse_type_parameter())?;
        self.expect_token(SyntaxKind::GreaterThanToken)?;
        Ok(Some(parameters))
    }

    fn parse_type_parameter(&mut self) -> ParseResult<TypeParameterDeclaration> {
        if !self.is_identifier() {
            return Err(self.error_at_current(&messages::TYPE_PARAMETER_DECLARATION_EXPECTED, &[]));
        }
        let name = self.parse_identifier()?;
        let constraint = if self.optional_token(SyntaxKind::ExtendsKeyword).is_some() {
            Some(self.parse_boxed_type()?)
        } else {
            None
        };
        let default = if self.optional_token(SyntaxKind::EqualsToken).is_some() {
            Some(self.parse_boxed_type()?)
        } else {
            None
        };
        Ok(TypeParameterDeclaration {
            constraint,
            default,
            ..TypeParameterDeclaration::new(name)
        })
    }

    /// `(a: A, b?: B, ...rest: R[])`. An empty list yields `None`.
    pub(crate) fn parse_parameters(&mut self) -> ParseResult<Option<Vec<ParameterDeclaration>>> {
        self.expect_token(SyntaxKind::OpenParenToken)?;
        if self.optional_token(SyntaxKind::CloseParenToken).is_some() {
            return Ok(None);
        }

        let mut parameters = Vec::new();
        loop {
            let start = self.token_pos();
            let parameter = self.parse_parameter()?;
            let is_rest = parameter.dot_dot_dot_token.is_some();
            parameters.push(parameter);
            if self.current_token() == SyntaxKind::CloseParenToken {
                break;
            }
            if is_rest {
                return Err(ParseError::new(start, &messages::A_REST_PARAMETER_MUST_BE_LAST, &[]));
            }
            self.expect_token(SyntaxKind::CommaToken)?;
            if self.current_token() == SyntaxKind::CloseParenToken {
                break;
            }
        }
        self.expect_token(SyntaxKind::CloseParenToken)?;
        Ok(Some(parameters))
    }

    fn parse_parameter(&mut self) -> ParseResult<ParameterDeclaration> {
        let modifiers = self.parse_modifiers(PARAMETER_MODIFIERS)?;
        let dot_dot_dot_token = self.optional_token(SyntaxKind::DotDotDotToken);

        let name = if self.current_token() == SyntaxKind::ThisKeyword {
            self.next_token();
            Identifier::new("this")
        } else if self.is_identifier() {
            self.parse_identifier()?
        } else {
            return Err(self.error_at_current(&messages::PARAMETER_DECLARATION_EXPECTED, &[]));
        };

        let question_pos = self.token_pos();
        let question_token = self.optional_token(SyntaxKind::QuestionToken);
        if dot_dot_dot_token.is_some() && question_token.is_some() {
            return Err(ParseError::new(question_pos, &messages::A_REST_PARAMETER_CANNOT_BE_OPTIONAL, &[]));
        }

        self.expect_token(SyntaxKind::ColonToken)?;
        let type_node = self.parse_boxed_type()?;
        Ok(ParameterDeclaration {
            kind: SyntaxKind::Parameter,
            modifiers,
            dot_dot_dot_token,
            name,
            question_token,
            type_node,
        })
    }

    /// `: R` after a parameter list.
    fn parse_type_annotation_return(&mut self) -> ParseResult<Box<TypeNode>> {
        self.expect_token(SyntaxKind::ColonToken)?;
        self.parse_return_type()
    }

    /// `[key: K]: V`
    fn parse_index_signature(&mut self, modifiers: Option<Vec<Modifier>>) -> ParseResult<IndexSignatureNode> {
        self.expect_token(SyntaxKind::OpenBracketToken)?;
        let name = self.parse_identifier()?;
        if self.current_token() != SyntaxKind::ColonToken {
            return Err(self.error_at_current(
                &messages::AN_INDEX_SIGNATURE_PARAMETER_MUST_HAVE_A_TYPE_ANNOTATION,
                &[],
            ));
        }
        self.next_token();
        let key_type = self.parse_boxed_type()?;
        self.expect_token(SyntaxKind::CloseBracketToken)?;
        if self.current_token() != SyntaxKind::ColonToken {
            return Err(self.error_at_current(&messages::AN_INDEX_SIGNATURE_MUST_HAVE_A_TYPE_ANNOTATION, &[]));
        }
        self.next_token();
        let type_node = self.parse_boxed_type()?;

        let parameter = ParameterDeclaration {
            kind: SyntaxKind::Parameter,
            modifiers: None,
            dot_dot_dot_token: None,
            name,
            question_token: None,
            type_node: key_type,
        };
        Ok(IndexSignatureNode {
            kind: SyntaxKind::IndexSignature,
            modifiers,
            parameters: vec![parameter],
            type_node,
        })
    }

    // ========================================================================
    // Heritage
    // ========================================================================

    /// `extends A, B<T>` / `implements C`. Every listed name lands in a
    /// single clause, whichever keyword introduced it.
    pub(crate) fn parse_heritage_clauses(&mut self) -> ParseResult<Option<Vec<HeritageClause>>> {
        let mut types = Vec::new();
        while matches!(
            self.current_token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            self.next_token();
            let listed = self.parse_delimited_list(SyntaxKind::OpenBraceToken, false, |p| {
                p.parse_expression_with_type_arguments()
            })?;
            types.extend(listed);
        }
        if types.is_empty() {
            return Ok(None);
        }
        Ok(Some(vec![HeritageClause {
            kind: SyntaxKind::HeritageClause,
            types,
        }]))
    }

    fn parse_expression_with_type_arguments(&mut self) -> ParseResult<ExpressionWithTypeArgumentsNode> {
        let expression = self.parse_entity_name()?;
        let type_arguments = if self.current_token() == SyntaxKind::LessThanToken {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        Ok(ExpressionWithTypeArgumentsNode {
            kind: SyntaxKind::ExpressionWithTypeArguments,
            expression,
            type_arguments,
        })
    }

    // ========================================================================
    // Interface and type-literal members
    // ========================================================================

    /// `{ member* }`
    pub(crate) fn parse_type_members(&mut self) -> ParseResult<Vec<TypeElement>> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !matches!(
            self.current_token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            members.push(self.parse_type_member()?);
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(members)
    }

    pub(crate) fn parse_type_member(&mut self) -> ParseResult<TypeElement> {
        trace!(pos = self.token_pos(), "parse_type_member");
        let token = self.current_token();
        if token.is_modifier_kind() && token != SyntaxKind::ReadonlyKeyword && self.next_token_can_follow_modifier() {
            let text = token.keyword_text().unwrap_or_default();
            return Err(self.error_at_current(&messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_MEMBER, &[text]));
        }
        let rules: [Rule<'src, TypeElement>; 5] = [
            Self::parse_index_signature_member,
            Self::parse_call_signature,
            Self::parse_construct_signature,
            Self::parse_property_signature,
            Self::parse_method_signature,
        ];
        self.alternatives(&rules, &messages::PROPERTY_OR_SIGNATURE_EXPECTED)
    }

    /// `;`, `,`, or nothing before a line break or `}`.
    fn parse_type_member_separator(&mut self) -> ParseResult<()> {
        if self.optional_token(SyntaxKind::CommaToken).is_some() {
            return Ok(());
        }
        self.parse_semicolon()
    }

    fn parse_index_signature_member(&mut self) -> ParseResult<TypeElement> {
        let modifiers = self.parse_type_member_modifiers()?;
        let signature = self.parse_index_signature(modifiers)?;
        self.parse_type_member_separator()?;
        Ok(TypeElement::IndexSignature(signature))
    }

    fn parse_call_signature(&mut self) -> ParseResult<TypeElement> {
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_type_annotation_return()?;
        self.parse_type_member_separator()?;
        Ok(TypeElement::CallSignature(CallSignatureNode {
            kind: SyntaxKind::CallSignature,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    fn parse_construct_signature(&mut self) -> ParseResult<TypeElement> {
        self.expect_token(SyntaxKind::NewKeyword)?;
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_type_annotation_return()?;
        self.parse_type_member_separator()?;
        Ok(TypeElement::ConstructSignature(ConstructSignatureNode {
            kind: SyntaxKind::ConstructSignature,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    fn parse_property_signature(&mut self) -> ParseResult<TypeElement> {
        let comment = self.doc_comment();
        let modifiers = self.parse_type_member_modifiers()?;
        let name = self.parse_property_name(comment)?;
        let question_token = self.optional_token(SyntaxKind::QuestionToken);
        self.expect_token(SyntaxKind::ColonToken)?;
        let type_node = self.parse_boxed_type()?;
        self.parse_type_member_separator()?;
        Ok(TypeElement::PropertySignature(PropertySignatureNode {
            kind: SyntaxKind::PropertySignature,
            modifiers,
            name,
            question_token,
            type_node,
        }))
    }

    fn parse_method_signature(&mut self) -> ParseResult<TypeElement> {
        let comment = self.doc_comment();
        let name = self.parse_property_name(comment)?;
        let question_token = self.optional_token(SyntaxKind::QuestionToken);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_type_annotation_return()?;
        self.parse_type_member_separator()?;
        Ok(TypeElement::MethodSignature(MethodSignatureNode {
            kind: SyntaxKind::MethodSignature,
            name,
            question_token,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    // ========================================================================
    // Class members
    // ========================================================================

    /// `{ member* }`, skipping stray semicolons.
    pub(crate) fn parse_class_members(&mut self) -> ParseResult<Vec<ClassElement>> {
        self.expect_token(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        loop {
            while self.optional_token(SyntaxKind::SemicolonToken).is_some() {}
            if matches!(
                self.current_token(),
                SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
            ) {
                break;
            }
            members.push(self.parse_class_member()?);
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;
        Ok(members)
    }

    pub(crate) fn parse_class_member(&mut self) -> ParseResult<ClassElement> {
        trace!(pos = self.token_pos(), "parse_class_member");
        let rules: [Rule<'src, ClassElement>; 4] = [
            Self::parse_constructor_declaration,
            Self::parse_class_index_signature,
            Self::parse_property_declaration,
            Self::parse_method_declaration,
        ];
        self.alternatives(
            &rules,
            &messages::UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED,
        )
    }

    fn parse_constructor_declaration(&mut self) -> ParseResult<ClassElement> {
        let comment = self.doc_comment();
        let modifiers = self.parse_modifiers(CLASS_MEMBER_MODIFIERS)?;
        self.expect_token(SyntaxKind::ConstructorKeyword)?;
        let parameters = self.parse_parameters()?;
        self.parse_semicolon()?;
        Ok(ClassElement::Constructor(ConstructorDeclaration {
            kind: SyntaxKind::Constructor,
            comment,
            modifiers,
            parameters,
        }))
    }

    fn parse_class_index_signature(&mut self) -> ParseResult<ClassElement> {
        let modifiers = self.parse_modifiers(CLASS_MEMBER_MODIFIERS)?;
        let signature = self.parse_index_signature(modifiers)?;
        self.parse_semicolon()?;
        Ok(ClassElement::IndexSignature(signature))
    }

    fn parse_property_declaration(&mut self) -> ParseResult<ClassElement> {
        let comment = self.doc_comment();
        let modifiers = self.parse_modifiers(CLASS_MEMBER_MODIFIERS)?;
        let name = self.parse_property_name(comment)?;
        let question_token = self.optional_token(SyntaxKind::QuestionToken);
        if question_token.is_none() {
            // Definite assignment `x!: T` carries no meaning in a declaration.
            self.optional_token(SyntaxKind::ExclamationToken);
        }
        self.expect_token(SyntaxKind::ColonToken)?;
        let type_node = self.parse_boxed_type()?;
        self.parse_semicolon()?;
        Ok(ClassElement::PropertyDeclaration(PropertyDeclarationNode {
            kind: SyntaxKind::PropertyDeclaration,
            modifiers,
            name,
            question_token,
            type_node,
        }))
    }

    fn parse_method_declaration(&mut self) -> ParseResult<ClassElement> {
        let comment = self.doc_comment();
        let modifiers = self.parse_modifiers(CLASS_MEMBER_MODIFIERS)?;
        let name = self.parse_property_name(comment)?;
        let question_token = self.optional_token(SyntaxKind::QuestionToken);
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        let return_type = self.parse_type_annotation_return()?;
        self.parse_semicolon()?;
        Ok(ClassElement::MethodDeclaration(MethodDeclarationNode {
            kind: SyntaxKind::MethodDeclaration,
            modifiers,
            name,
            question_token,
            type_parameters,
            parameters,
            return_type,
        }))
    }
}
