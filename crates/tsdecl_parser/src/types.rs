//! Type-expression grammar.
//!
//! ```text
//! Type             := ['|'] Intersection ('|' Intersection)*
//! Intersection     := ['&'] TypeOperator ('&' TypeOperator)*
//! TypeOperator     := ('keyof' | 'unique' | 'readonly') TypeOperator | Postfix
//! Postfix          := Primary ('[' ']' | '[' Type ']')*
//! ```
//!
//! `&` binds tighter than `|`. Union and intersection nodes are only built
//! for two or more terms.

use tracing::trace;
use tsdecl_ast::node::*;
use tsdecl_ast::syntax_kind::SyntaxKind;
use tsdecl_diagnostics::messages;

use crate::parser::{ParseResult, Parser, Rule};

impl<'src> Parser<'src> {
    pub(crate) fn parse_type(&mut self) -> ParseResult<TypeNode> {
        self.nested(|p| p.parse_union_type())
    }

    pub(crate) fn parse_boxed_type(&mut self) -> ParseResult<Box<TypeNode>> {
        self.parse_type().map(Box::new)
    }

    fn parse_union_type(&mut self) -> ParseResult<TypeNode> {
        self.optional_token(SyntaxKind::BarToken);
        let first = self.parse_intersection_type()?;
        if self.current_token() != SyntaxKind::BarToken {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.optional_token(SyntaxKind::BarToken).is_some() {
            types.push(self.parse_intersection_type()?);
        }
        Ok(TypeNode::UnionType(UnionTypeNode {
            kind: SyntaxKind::UnionType,
            types,
        }))
    }

    fn parse_intersection_type(&mut self) -> ParseResult<TypeNode> {
        self.optional_token(SyntaxKind::AmpersandToken);
        let first = self.parse_type_operator()?;
        if self.current_token() != SyntaxKind::AmpersandToken {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.optional_token(SyntaxKind::AmpersandToken).is_some() {
            types.push(self.parse_type_operator()?);
        }
        Ok(TypeNode::IntersectionType(IntersectionTypeNode {
            kind: SyntaxKind::IntersectionType,
            types,
        }))
    }

    fn parse_type_operator(&mut self) -> ParseResult<TypeNode> {
        let operator = self.current_token();
        match operator {
            SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => {
                self.next_token();
                let operand = self.nested(|p| p.parse_type_operator())?;
                Ok(TypeNode::TypeOperator(TypeOperatorNode {
                    kind: SyntaxKind::TypeOperator,
                    operator,
                    type_node: Box::new(operand),
                }))
            }
            _ => self.parse_postfix_type(),
        }
    }

    fn parse_postfix_type(&mut self) -> ParseResult<TypeNode> {
        let mut ty = self.parse_primary_type()?;

        // `T[]` and `T[K]`, only on the same line as `T`. Each suffix wraps
        // the type so far one level deeper.
        self.with_levels(|p| {
            while p.current_token() == SyntaxKind::OpenBracketToken && !p.scanner.has_preceding_line_break() {
                p.enter_level()?;
                p.next_token();
                if p.optional_token(SyntaxKind::CloseBracketToken).is_some() {
                    ty = TypeNode::ArrayType(ArrayTypeNode {
                        kind: SyntaxKind::ArrayType,
                        element_type: Box::new(ty),
                    });
                } else {
                    let index_type = p.parse_boxed_type()?;
                    p.expect_token(SyntaxKind::CloseBracketToken)?;
                    ty = TypeNode::IndexedAccessType(IndexedAccessTypeNode {
                        kind: SyntaxKind::IndexedAccessType,
                        object_type: Box::new(ty),
                        index_type,
                    });
                }
            }
            Ok(ty)
        })
    }

    fn parse_primary_type(&mut self) -> ParseResult<TypeNode> {
        let token = self.current_token();
        match token {
            _ if token.is_keyword_type() && !self.next_token_is_dot() => {
                self.next_token();
                Ok(TypeNode::KeywordType(KeywordTypeNode::new(token)))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Ok(TypeNode::ThisType(ThisTypeNode {
                    kind: SyntaxKind::ThisType,
                }))
            }
            SyntaxKind::OpenParenToken => {
                let rules: [Rule<'src, TypeNode>; 2] =
                    [Self::parse_function_type, Self::parse_parenthesized_type];
                self.alternatives(&rules, &messages::TYPE_EXPECTED)
            }
            SyntaxKind::LessThanToken => self.parse_function_type(),
            SyntaxKind::NewKeyword => self.parse_constructor_type(),
            SyntaxKind::AbstractKeyword if self.next_token_is(SyntaxKind::NewKeyword) => {
                self.parse_constructor_type()
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenBraceToken => {
                if self.is_start_of_mapped_type() {
                    self.parse_mapped_type()
                } else {
                    self.parse_type_literal()
                }
            }
            SyntaxKind::TypeOfKeyword => self.parse_type_query(),
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword => self.parse_literal_type(),
            _ if self.is_identifier() => self.parse_type_reference(),
            _ => Err(self.error_at_current(&messages::TYPE_EXPECTED, &[])),
        }
    }

    /// A return type position, where `x is T`, `asserts x` and
    /// `asserts x is T` are also accepted.
    pub(crate) fn parse_return_type(&mut self) -> ParseResult<Box<TypeNode>> {
        trace!(pos = self.token_pos(), "parse_return_type");
        let asserts = self.current_token() == SyntaxKind::AssertsKeyword
            && self.look_ahead(|p| {
                p.next_token();
                (p.is_identifier() || p.current_token() == SyntaxKind::ThisKeyword)
                    && !p.scanner.has_preceding_line_break()
            });
        if asserts {
            self.next_token();
            let parameter_name = self.parse_type_predicate_subject()?;
            let type_node = if self.optional_token(SyntaxKind::IsKeyword).is_some() {
                Some(self.parse_boxed_type()?)
            } else {
                None
            };
            return Ok(Box::new(TypeNode::TypePredicate(TypePredicateNode {
                kind: SyntaxKind::TypePredicate,
                asserts_modifier: Some(Token::new(SyntaxKind::AssertsKeyword)),
                parameter_name,
                type_node,
            })));
        }

        let predicate = (self.is_identifier() || self.current_token() == SyntaxKind::ThisKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.current_token() == SyntaxKind::IsKeyword && !p.scanner.has_preceding_line_break()
            });
        if predicate {
            let parameter_name = self.parse_type_predicate_subject()?;
            self.expect_token(SyntaxKind::IsKeyword)?;
            let type_node = self.parse_boxed_type()?;
            return Ok(Box::new(TypeNode::TypePredicate(TypePredicateNode {
                kind: SyntaxKind::TypePredicate,
                asserts_modifier: None,
                parameter_name,
                type_node: Some(type_node),
            })));
        }

        self.parse_boxed_type()
    }

    fn parse_type_predicate_subject(&mut self) -> ParseResult<TypePredicateParameterName> {
        if self.optional_token(SyntaxKind::ThisKeyword).is_some() {
            return Ok(TypePredicateParameterName::ThisType(ThisTypeNode {
                kind: SyntaxKind::ThisType,
            }));
        }
        self.parse_identifier().map(TypePredicateParameterName::Identifier)
    }

    fn parse_type_reference(&mut self) -> ParseResult<TypeNode> {
        let type_name = self.parse_entity_name()?;
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TypeNode::TypeReference(TypeReferenceNode {
            kind: SyntaxKind::TypeReference,
            type_name,
            type_arguments,
        }))
    }

    /// `<A, B>` directly after a name.
    fn parse_type_arguments_on_same_line(&mut self) -> ParseResult<Option<Vec<TypeNode>>> {
        if self.current_token() != SyntaxKind::LessThanToken || self.scanner.has_preceding_line_break() {
            return Ok(None);
        }
        self.parse_type_arguments().map(Some)
    }

    pub(crate) fn parse_type_arguments(&mut self) -> ParseResult<Vec<TypeNode>> {
        self.expect_token(SyntaxKind::LessThanToken)?;
        if self.current_token() == SyntaxKind::GreaterThanToken {
            return Err(self.error_at_current(&messages::TYPE_ARGUMENT_EXPECTED, &[]));
        }
        let arguments =
            self.parse_delimited_list(SyntaxKind::GreaterThanToken, false, |p| p.parse_type())?;
        self.expect_token(SyntaxKind::GreaterThanToken)?;
        Ok(arguments)
    }

    /// `[<T>](a: A) => R`. Commits only once `=>` is seen.
    fn parse_function_type(&mut self) -> ParseResult<TypeNode> {
        trace!(pos = self.token_pos(), "parse_function_type");
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        self.expect_token(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_return_type()?;
        Ok(TypeNode::FunctionType(FunctionTypeNode {
            kind: SyntaxKind::FunctionType,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    fn parse_parenthesized_type(&mut self) -> ParseResult<TypeNode> {
        self.expect_token(SyntaxKind::OpenParenToken)?;
        let type_node = self.parse_boxed_type()?;
        self.expect_token(SyntaxKind::CloseParenToken)?;
        Ok(TypeNode::ParenthesizedType(ParenthesizedTypeNode {
            kind: SyntaxKind::ParenthesizedType,
            type_node,
        }))
    }

    /// `[abstract] new [<T>](a: A) => R`
    fn parse_constructor_type(&mut self) -> ParseResult<TypeNode> {
        let modifiers = self
            .optional_token(SyntaxKind::AbstractKeyword)
            .map(|modifier| vec![modifier]);
        self.expect_token(SyntaxKind::NewKeyword)?;
        let type_parameters = self.parse_type_parameters()?;
        let parameters = self.parse_parameters()?;
        self.expect_token(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_return_type()?;
        Ok(TypeNode::ConstructorType(ConstructorTypeNode {
            kind: SyntaxKind::ConstructorType,
            modifiers,
            type_parameters,
            parameters,
            return_type,
        }))
    }

    fn parse_tuple_type(&mut self) -> ParseResult<TypeNode> {
        self.expect_token(SyntaxKind::OpenBracketToken)?;
        let elements = if self.current_token() == SyntaxKind::CloseBracketToken {
            Vec::new()
        } else {
            self.parse_delimited_list(SyntaxKind::CloseBracketToken, true, |p| {
                p.parse_tuple_element()
            })?
        };
        self.expect_token(SyntaxKind::CloseBracketToken)?;
        Ok(TypeNode::TupleType(TupleTypeNode {
            kind: SyntaxKind::TupleType,
            elements,
        }))
    }

    /// `T`, `T?`, `...T`, or a labelled `name?: T` / `...name: T`.
    fn parse_tuple_element(&mut self) -> ParseResult<TypeNode> {
        if self.is_named_tuple_member() {
            let dot_dot_dot_token = self.optional_token(SyntaxKind::DotDotDotToken);
            let name = self.parse_identifier_name()?;
            let question_token = self.optional_token(SyntaxKind::QuestionToken);
            self.expect_token(SyntaxKind::ColonToken)?;
            let type_node = self.parse_boxed_type()?;
            return Ok(TypeNode::NamedTupleMember(NamedTupleMemberNode {
                kind: SyntaxKind::NamedTupleMember,
                dot_dot_dot_token,
                name,
                question_token,
                type_node,
            }));
        }

        if self.optional_token(SyntaxKind::DotDotDotToken).is_some() {
            let type_node = self.parse_boxed_type()?;
            return Ok(TypeNode::RestType(RestTypeNode {
                kind: SyntaxKind::RestType,
                type_node,
            }));
        }

        let element = self.parse_type()?;
        if self.optional_token(SyntaxKind::QuestionToken).is_some() {
            return Ok(TypeNode::OptionalType(OptionalTypeNode {
                kind: SyntaxKind::OptionalType,
                type_node: Box::new(element),
            }));
        }
        Ok(element)
    }

    fn is_named_tuple_member(&mut self) -> bool {
        self.look_ahead(|p| {
            p.optional_token(SyntaxKind::DotDotDotToken);
            if !p.is_identifier_name() {
                return false;
            }
            p.next_token();
            p.optional_token(SyntaxKind::QuestionToken);
            p.current_token() == SyntaxKind::ColonToken
        })
    }

    /// `{ members }`
    fn parse_type_literal(&mut self) -> ParseResult<TypeNode> {
        let members = self.parse_type_members()?;
        Ok(TypeNode::TypeLiteral(TypeLiteralNode {
            kind: SyntaxKind::TypeLiteral,
            members,
        }))
    }

    /// `{ [+|-]readonly [K in T as N][+|-]?: V }`
    fn is_start_of_mapped_type(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if matches!(p.current_token(), SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
                p.next_token();
                if p.current_token() != SyntaxKind::ReadonlyKeyword {
                    return false;
                }
            }
            p.optional_token(SyntaxKind::ReadonlyKeyword);
            if p.optional_token(SyntaxKind::OpenBracketToken).is_none() || !p.is_identifier() {
                return false;
            }
            p.next_token();
            p.current_token() == SyntaxKind::InKeyword
        })
    }

    fn parse_mapped_type(&mut self) -> ParseResult<TypeNode> {
        trace!(pos = self.token_pos(), "parse_mapped_type");
        self.expect_token(SyntaxKind::OpenBraceToken)?;

        let readonly_token = match self.current_token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let sign = Token::new(self.current_token());
                self.next_token();
                self.expect_token(SyntaxKind::ReadonlyKeyword)?;
                Some(sign)
            }
            _ => self.optional_token(SyntaxKind::ReadonlyKeyword),
        };

        self.expect_token(SyntaxKind::OpenBracketToken)?;
        let name = self.parse_identifier()?;
        self.expect_token(SyntaxKind::InKeyword)?;
        let constraint = self.parse_boxed_type()?;
        let type_parameter = TypeParameterDeclaration {
            constraint: Some(constraint),
            ..TypeParameterDeclaration::new(name)
        };
        let name_type = if self.optional_token(SyntaxKind::AsKeyword).is_some() {
            Some(self.parse_boxed_type()?)
        } else {
            None
        };
        self.expect_token(SyntaxKind::CloseBracketToken)?;

        let question_token = match self.current_token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let sign = Token::new(self.current_token());
                self.next_token();
                self.expect_token(SyntaxKind::QuestionToken)?;
                Some(sign)
            }
            _ => self.optional_token(SyntaxKind::QuestionToken),
        };

        let type_node = if self.optional_token(SyntaxKind::ColonToken).is_some() {
            Some(self.parse_boxed_type()?)
        } else {
            None
        };
        if self.optional_token(SyntaxKind::SemicolonToken).is_none() {
            self.optional_token(SyntaxKind::CommaToken);
        }
        self.expect_token(SyntaxKind::CloseBraceToken)?;

        Ok(TypeNode::MappedType(MappedTypeNode {
            kind: SyntaxKind::MappedType,
            readonly_token,
            type_parameter: Box::new(type_parameter),
            name_type,
            question_token,
            type_node,
        }))
    }

    /// `typeof a.b<T>`
    fn parse_type_query(&mut self) -> ParseResult<TypeNode> {
        self.expect_token(SyntaxKind::TypeOfKeyword)?;
        let expr_name = self.parse_entity_name()?;
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TypeNode::TypeQuery(TypeQueryNode {
            kind: SyntaxKind::TypeQuery,
            expr_name,
            type_arguments,
        }))
    }

    fn parse_literal_type(&mut self) -> ParseResult<TypeNode> {
        if self.scanner.token_error().is_some() {
            return Err(self.error_at_current(&messages::TYPE_EXPECTED, &[]));
        }
        let literal = match self.current_token() {
            SyntaxKind::StringLiteral => LiteralExpression::StringLiteral(StringLiteral::new(self.token_value())),
            SyntaxKind::NumericLiteral => {
                LiteralExpression::NumericLiteral(NumericLiteral::new(self.token_value()))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                LiteralExpression::BooleanLiteral(Token::new(self.current_token()))
            }
            _ => return Err(self.error_at_current(&messages::TYPE_EXPECTED, &[])),
        };
        self.next_token();
        Ok(TypeNode::LiteralType(LiteralTypeNode {
            kind: SyntaxKind::LiteralType,
            literal,
        }))
    }

    fn next_token_is(&mut self, kind: SyntaxKind) -> bool {
        self.look_ahead(|p| p.next_token() == kind)
    }

    fn next_token_is_dot(&mut self) -> bool {
        self.next_token_is(SyntaxKind::DotToken)
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_type_str, ParserOptions};
    use tsdecl_ast::node::*;
    use tsdecl_ast::syntax_kind::SyntaxKind;

    fn parse(text: &str) -> TypeNode {
        parse_type_str(text).unwrap_or_else(|err| panic!("{text}: {err}"))
    }

    #[test]
    fn test_keyword_followed_by_dot_is_a_reference() {
        let TypeNode::TypeReference(reference) = parse("symbol.iterator") else {
            panic!("expected a type reference");
        };
        assert_eq!(reference.type_name.text(), "symbol.iterator");
    }

    #[test]
    fn test_array_needs_same_line() {
        assert!(matches!(parse("string[][]"), TypeNode::ArrayType(_)));
        assert!(parse_type_str("string\n[]").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let options = ParserOptions { max_depth: Some(3), ..Default::default() };
        let deep = "Array<Array<Array<Array<string>>>>";
        let err = crate::Parser::new(deep, options)
            .parse_entire(|p| p.parse_type())
            .unwrap_err();
        assert_eq!(err.code, tsdecl_diagnostics::messages::TYPE_EXPECTED.code);
        assert!(parse_type_str(deep).is_ok());
    }

    #[test]
    fn test_array_suffixes_count_toward_depth() {
        let options = ParserOptions { max_depth: Some(3), ..Default::default() };
        let parse_with = |text: &str| crate::Parser::new(text, options.clone()).parse_entire(|p| p.parse_type());

        assert!(parse_with("string[][]").is_ok());
        let err = parse_with("string[][][]").unwrap_err();
        assert_eq!(err.code, tsdecl_diagnostics::messages::TYPE_EXPECTED.code);
        assert_eq!(err.pos, 10);

        let many = format!("string{}", "[]".repeat(500));
        assert!(parse_with(&many).is_err());
        assert!(parse_type_str(&many).is_err());
        assert!(parse_type_str(&format!("string{}", "[]".repeat(150))).is_ok());
    }

    #[test]
    fn test_unique_symbol() {
        let TypeNode::TypeOperator(op) = parse("unique symbol") else {
            panic!("expected a type operator");
        };
        assert_eq!(op.operator, SyntaxKind::UniqueKeyword);
        assert_eq!(*op.type_node, TypeNode::KeywordType(KeywordTypeNode::new(SyntaxKind::SymbolKeyword)));
    }
}
