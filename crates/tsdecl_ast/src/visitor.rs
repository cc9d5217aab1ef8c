//! AST visitor trait for traversing the syntax tree.
//!
//! Default method implementations walk into every child, so an implementor
//! only overrides the nodes it cares about.

use crate::node::*;

/// A visitor that traverses the AST. Implement this trait to perform
/// operations on each node kind. Default implementations walk into children.
pub trait AstVisitor {
    fn visit_source_file(&mut self, node: &SourceFile) {
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VariableStatement(n) => self.visit_variable_statement(n),
            Statement::FunctionDeclaration(n) => self.visit_function_declaration(n),
            Statement::ClassDeclaration(n) => self.visit_class_declaration(n),
            Statement::InterfaceDeclaration(n) => self.visit_interface_declaration(n),
            Statement::TypeAliasDeclaration(n) => self.visit_type_alias_declaration(n),
            Statement::EnumDeclaration(n) => self.visit_enum_declaration(n),
            Statement::ModuleDeclaration(n) => self.visit_module_declaration(n),
            Statement::ImportDeclaration(n) => self.visit_import_declaration(n),
            Statement::ExportDeclaration(n) => self.visit_export_declaration(n),
            Statement::ExportAssignment(n) => self.visit_export_assignment(n),
            Statement::NamespaceExportDeclaration(n) => self.visit_identifier(&n.name),
        }
    }

    // -- Statements --

    fn visit_variable_statement(&mut self, node: &VariableStatement) {
        for decl in node.declaration_list.declarations.iter() {
            self.visit_identifier(&decl.name);
            self.visit_type_node(&decl.type_node);
        }
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        self.visit_identifier(&node.name);
        self.visit_signature(
            node.type_parameters.as_deref(),
            node.parameters.as_deref(),
            Some(&node.return_type),
        );
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration) {
        self.visit_identifier(&node.name);
        self.visit_type_parameters(node.type_parameters.as_deref());
        self.visit_heritage_clauses(node.heritage_clauses.as_deref());
        for member in node.members.iter() {
            self.visit_class_element(member);
        }
    }

    fn visit_interface_declaration(&mut self, node: &InterfaceDeclaration) {
        self.visit_identifier(&node.name);
        self.visit_type_parameters(node.type_parameters.as_deref());
        self.visit_heritage_clauses(node.heritage_clauses.as_deref());
        for member in node.members.iter() {
            self.visit_type_element(member);
        }
    }

    fn visit_type_alias_declaration(&mut self, node: &TypeAliasDeclaration) {
        self.visit_identifier(&node.name);
        self.visit_type_parameters(node.type_parameters.as_deref());
        self.visit_type_node(&node.type_node);
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration) {
        self.visit_identifier(&node.name);
        for member in node.members.iter() {
            self.visit_enum_member(member);
        }
    }

    fn visit_enum_member(&mut self, node: &EnumMember) {
        self.visit_property_name(&node.name);
    }

    fn visit_module_declaration(&mut self, node: &ModuleDeclaration) {
        if let ModuleName::Identifier(id) = &node.name {
            self.visit_identifier(id);
        }
        match &node.body {
            Some(ModuleBody::ModuleBlock(block)) => {
                for stmt in block.statements.iter() {
                    self.visit_statement(stmt);
                }
            }
            Some(ModuleBody::ModuleDeclaration(inner)) => self.visit_module_declaration(inner),
            None => {}
        }
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration) {
        let Some(clause) = &node.import_clause else {
            return;
        };
        if let Some(name) = &clause.name {
            self.visit_identifier(name);
        }
        match &clause.named_bindings {
            Some(NamedImportBindings::NamespaceImport(ns)) => self.visit_identifier(&ns.name),
            Some(NamedImportBindings::NamedImports(named)) => {
                for spec in named.elements.iter() {
                    self.visit_identifier(&spec.name);
                }
            }
            None => {}
        }
    }

    fn visit_export_declaration(&mut self, node: &ExportDeclaration) {
        if let Some(clause) = &node.export_clause {
            for spec in clause.elements.iter() {
                self.visit_identifier(&spec.name);
            }
        }
    }

    fn visit_export_assignment(&mut self, node: &ExportAssignment) {
        self.visit_entity_name(&node.expression);
    }

    // -- Members --

    fn visit_type_element(&mut self, member: &TypeElement) {
        match member {
            TypeElement::PropertySignature(n) => {
                self.visit_property_name(&n.name);
                self.visit_type_node(&n.type_node);
            }
            TypeElement::MethodSignature(n) => {
                self.visit_property_name(&n.name);
                self.visit_signature(
                    n.type_parameters.as_deref(),
                    n.parameters.as_deref(),
                    Some(&n.return_type),
                );
            }
            TypeElement::CallSignature(n) => self.visit_signature(
                n.type_parameters.as_deref(),
                n.parameters.as_deref(),
                Some(&n.return_type),
            ),
            TypeElement::ConstructSignature(n) => self.visit_signature(
                n.type_parameters.as_deref(),
                n.parameters.as_deref(),
                Some(&n.return_type),
            ),
            TypeElement::IndexSignature(n) => self.visit_index_signature(n),
        }
    }

    fn visit_class_element(&mut self, member: &ClassElement) {
        match member {
            ClassElement::PropertyDeclaration(n) => {
                self.visit_property_name(&n.name);
                self.visit_type_node(&n.type_node);
            }
            ClassElement::MethodDeclaration(n) => {
                self.visit_property_name(&n.name);
                self.visit_signature(
                    n.type_parameters.as_deref(),
                    n.parameters.as_deref(),
                    Some(&n.return_type),
                );
            }
            ClassElement::Constructor(n) => self.visit_signature(None, n.parameters.as_deref(), None),
            ClassElement::IndexSignature(n) => self.visit_index_signature(n),
        }
    }

    fn visit_index_signature(&mut self, node: &IndexSignatureNode) {
        for param in node.parameters.iter() {
            self.visit_parameter(param);
        }
        self.visit_type_node(&node.type_node);
    }

    // -- Signature elements --

    fn visit_signature(
        &mut self,
        type_parameters: Option<&[TypeParameterDeclaration]>,
        parameters: Option<&[ParameterDeclaration]>,
        return_type: Option<&TypeNode>,
    ) {
        self.visit_type_parameters(type_parameters);
        for param in parameters.unwrap_or_default() {
            self.visit_parameter(param);
        }
        if let Some(ret) = return_type {
            self.visit_type_node(ret);
        }
    }

    fn visit_type_parameters(&mut self, type_parameters: Option<&[TypeParameterDeclaration]>) {
        for tp in type_parameters.unwrap_or_default() {
            self.visit_type_parameter(tp);
        }
    }

    fn visit_type_parameter(&mut self, node: &TypeParameterDeclaration) {
        self.visit_identifier(&node.name);
        if let Some(constraint) = &node.constraint {
            self.visit_type_node(constraint);
        }
        if let Some(default) = &node.default {
            self.visit_type_node(default);
        }
    }

    fn visit_parameter(&mut self, node: &ParameterDeclaration) {
        self.visit_identifier(&node.name);
        self.visit_type_node(&node.type_node);
    }

    fn visit_heritage_clauses(&mut self, clauses: Option<&[HeritageClause]>) {
        for clause in clauses.unwrap_or_default() {
            for ty in clause.types.iter() {
                self.visit_entity_name(&ty.expression);
                self.visit_type_arguments(ty.type_arguments.as_deref());
            }
        }
    }

    fn visit_type_arguments(&mut self, args: Option<&[TypeNode]>) {
        for arg in args.unwrap_or_default() {
            self.visit_type_node(arg);
        }
    }

    // -- Types --

    fn visit_type_node(&mut self, ty: &TypeNode) {
        match ty {
            TypeNode::KeywordType(_) | TypeNode::ThisType(_) | TypeNode::LiteralType(_) => {}
            TypeNode::TypeReference(n) => {
                self.visit_entity_name(&n.type_name);
                self.visit_type_arguments(n.type_arguments.as_deref());
            }
            TypeNode::TypePredicate(n) => {
                if let TypePredicateParameterName::Identifier(id) = &n.parameter_name {
                    self.visit_identifier(id);
                }
                if let Some(ty) = &n.type_node {
                    self.visit_type_node(ty);
                }
            }
            TypeNode::FunctionType(n) => self.visit_signature(
                n.type_parameters.as_deref(),
                n.parameters.as_deref(),
                Some(&n.return_type),
            ),
            TypeNode::ConstructorType(n) => self.visit_signature(
                n.type_parameters.as_deref(),
                n.parameters.as_deref(),
                Some(&n.return_type),
            ),
            TypeNode::TypeQuery(n) => {
                self.visit_entity_name(&n.expr_name);
                self.visit_type_arguments(n.type_arguments.as_deref());
            }
            TypeNode::TypeLiteral(n) => {
                for member in n.members.iter() {
                    self.visit_type_element(member);
                }
            }
            TypeNode::ArrayType(n) => self.visit_type_node(&n.element_type),
            TypeNode::TupleType(n) => {
                for element in n.elements.iter() {
                    self.visit_type_node(element);
                }
            }
            TypeNode::OptionalType(n) => self.visit_type_node(&n.type_node),
            TypeNode::RestType(n) => self.visit_type_node(&n.type_node),
            TypeNode::NamedTupleMember(n) => {
                self.visit_identifier(&n.name);
                self.visit_type_node(&n.type_node);
            }
            TypeNode::UnionType(n) => {
                for t in n.types.iter() {
                    self.visit_type_node(t);
                }
            }
            TypeNode::IntersectionType(n) => {
                for t in n.types.iter() {
                    self.visit_type_node(t);
                }
            }
            TypeNode::ParenthesizedType(n) => self.visit_type_node(&n.type_node),
            TypeNode::TypeOperator(n) => self.visit_type_node(&n.type_node),
            TypeNode::IndexedAccessType(n) => {
                self.visit_type_node(&n.object_type);
                self.visit_type_node(&n.index_type);
            }
            TypeNode::MappedType(n) => {
                self.visit_type_parameter(&n.type_parameter);
                if let Some(name_type) = &n.name_type {
                    self.visit_type_node(name_type);
                }
                if let Some(ty) = &n.type_node {
                    self.visit_type_node(ty);
                }
            }
        }
    }

    // -- Names --

    fn visit_entity_name(&mut self, name: &EntityName) {
        match name {
            EntityName::Identifier(id) => self.visit_identifier(id),
            EntityName::QualifiedName(qn) => {
                self.visit_entity_name(&qn.left);
                self.visit_identifier(&qn.right);
            }
        }
    }

    fn visit_property_name(&mut self, name: &PropertyName) {
        if let PropertyName::Identifier(id) = name {
            self.visit_identifier(id);
        }
    }

    fn visit_identifier(&mut self, _node: &Identifier) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax_kind::SyntaxKind;

    struct IdentifierCollector(Vec<String>);

    impl AstVisitor for IdentifierCollector {
        fn visit_identifier(&mut self, node: &Identifier) {
            self.0.push(node.text.clone());
        }
    }

    #[test]
    fn test_visits_nested_identifiers() {
        let alias = TypeAliasDeclaration {
            kind: SyntaxKind::TypeAliasDeclaration,
            modifiers: None,
            name: Identifier::new("Pair"),
            type_parameters: Some(vec![TypeParameterDeclaration::new(Identifier::new("T"))]),
            type_node: Box::new(TypeNode::TupleType(TupleTypeNode {
                kind: SyntaxKind::TupleType,
                elements: vec![TypeNode::TypeReference(TypeReferenceNode {
                    kind: SyntaxKind::TypeReference,
                    type_name: EntityName::Identifier(Identifier::new("T")),
                    type_arguments: None,
                })],
            })),
        };
        let file = SourceFile::new(vec![Statement::TypeAliasDeclaration(alias)]);

        let mut collector = IdentifierCollector(Vec::new());
        collector.visit_source_file(&file);
        assert_eq!(collector.0, vec!["Pair", "T", "T"]);
    }
}
