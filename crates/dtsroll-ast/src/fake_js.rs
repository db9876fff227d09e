//! Shallow AST model over *bundled* fake-JS (spec §4.5, §9 "AST dependency").
//!
//! Only the shapes the reverse transform actually reconstructs declarations
//! from are modelled: imports/exports, namespace-synthesis calls, and
//! variable declarators whose initialiser is an array, identifier, member
//! expression, or call expression.

use dtsroll_common::Span;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ArrayExpressionElement, Argument, Expression, ModuleExportName, Program, Statement,
};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::AstError;

#[derive(Debug, Clone)]
pub struct FakeJsStatement {
    pub span: Span,
    pub kind: FakeJsStatementKind,
}

#[derive(Debug, Clone)]
pub enum FakeJsStatementKind {
    Import { source: String, namespace_local: Option<String> },
    ExportAll { source: String, exported_name: Option<String> },
    ReExport { source: Option<String>, specifiers: Vec<(String, String)> },
    NamespaceSynthesis(NamespaceSynthesisInfo),
    VariableArray { name: String, elements: Vec<ArrayElement> },
    VariableIdentifier { name: String, value: String },
    VariableMember { name: String, object: String, path: Vec<MemberKey> },
    VariableCall { name: String, callee: String, args: Vec<CallArgument> },
    Other,
}

#[derive(Debug, Clone)]
pub struct NamespaceSynthesisInfo {
    pub local: String,
    /// `(property key, referenced identifier)` for every property whose
    /// value is an arrow expression with a bare identifier body.
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub enum ArrayElement {
    Str(String),
    Ident(String),
    Template(Vec<TemplatePart>),
}

#[derive(Debug, Clone)]
pub enum TemplatePart {
    Text(String),
    Expr(String),
}

#[derive(Debug, Clone)]
pub enum MemberKey {
    Identifier(String),
    String(String),
}

#[derive(Debug, Clone)]
pub enum CallArgument {
    Str(String),
    Number(String),
    Ident(String),
    Member { object: String, path: Vec<MemberKey> },
}

pub fn parse_fake_js_module(file: &str, source: &str) -> Result<Vec<FakeJsStatement>, AstError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let details = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AstError::Parse {
            file: file.to_string(),
            details,
        });
    }
    Ok(classify_program(&ret.program))
}

fn classify_program(program: &Program<'_>) -> Vec<FakeJsStatement> {
    program
        .body
        .iter()
        .map(|stmt| {
            let s = stmt.span();
            FakeJsStatement {
                span: Span::new(s.start, s.end),
                kind: classify_statement(stmt),
            }
        })
        .collect()
}

fn classify_statement(stmt: &Statement<'_>) -> FakeJsStatementKind {
    match stmt {
        Statement::ImportDeclaration(import) => {
            let namespace_local = import.specifiers.as_ref().and_then(|specs| {
                specs.iter().find_map(|s| match s {
                    oxc_ast::ast::ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns) => {
                        Some(ns.local.name.to_string())
                    }
                    _ => None,
                })
            });
            FakeJsStatementKind::Import {
                source: import.source.value.to_string(),
                namespace_local,
            }
        }
        Statement::ExportAllDeclaration(export_all) => FakeJsStatementKind::ExportAll {
            source: export_all.source.value.to_string(),
            exported_name: export_all.exported.as_ref().map(module_export_name),
        },
        Statement::ExportNamedDeclaration(export_named) if export_named.declaration.is_none() => {
            FakeJsStatementKind::ReExport {
                source: export_named.source.as_ref().map(|s| s.value.to_string()),
                specifiers: export_named
                    .specifiers
                    .iter()
                    .map(|spec| (module_export_name(&spec.local), module_export_name(&spec.exported)))
                    .collect(),
            }
        }
        Statement::ExpressionStatement(expr_stmt) => {
            classify_namespace_synthesis(&expr_stmt.expression).unwrap_or(FakeJsStatementKind::Other)
        }
        Statement::VariableDeclaration(var_decl) => {
            if var_decl.declarations.len() != 1 {
                return FakeJsStatementKind::Other;
            }
            let declarator = &var_decl.declarations[0];
            let name = match declarator.id.get_identifier() {
                Some(name) => name.to_string(),
                None => return FakeJsStatementKind::Other,
            };
            match declarator.init.as_ref() {
                Some(Expression::ArrayExpression(array)) => FakeJsStatementKind::VariableArray {
                    name,
                    elements: array
                        .elements
                        .iter()
                        .filter_map(classify_array_element)
                        .collect(),
                },
                Some(Expression::Identifier(ident)) => FakeJsStatementKind::VariableIdentifier {
                    name,
                    value: ident.name.to_string(),
                },
                Some(expr @ Expression::StaticMemberExpression(_))
                | Some(expr @ Expression::ComputedMemberExpression(_)) => {
                    match member_chain(expr) {
                        Some((object, path)) => FakeJsStatementKind::VariableMember { name, object, path },
                        None => FakeJsStatementKind::Other,
                    }
                }
                Some(Expression::CallExpression(call)) => {
                    let callee = match identifier_name(&call.callee) {
                        Some(name) => name,
                        None => return FakeJsStatementKind::Other,
                    };
                    let args = call.arguments.iter().filter_map(classify_call_argument).collect();
                    FakeJsStatementKind::VariableCall { name, callee, args }
                }
                _ => FakeJsStatementKind::Other,
            }
        }
        _ => FakeJsStatementKind::Other,
    }
}

fn classify_namespace_synthesis(expr: &Expression<'_>) -> Option<FakeJsStatementKind> {
    let call = match expr {
        Expression::CallExpression(call) => call,
        _ => return None,
    };
    if call.arguments.len() != 2 {
        return None;
    }
    let local = match call.arguments.first() {
        Some(Argument::Identifier(ident)) => ident.name.to_string(),
        _ => return None,
    };
    let object = match call.arguments.get(1) {
        Some(Argument::ObjectExpression(obj)) => obj,
        _ => return None,
    };
    let mut properties = Vec::new();
    for prop in &object.properties {
        let oxc_ast::ast::ObjectPropertyKind::ObjectProperty(prop) = prop else {
            continue;
        };
        let key = match &prop.key {
            oxc_ast::ast::PropertyKey::StaticIdentifier(id) => id.name.to_string(),
            _ => continue,
        };
        if let Expression::ArrowFunctionExpression(arrow) = &prop.value {
            if arrow.expression {
                if let Some(Statement::ExpressionStatement(inner)) = arrow.body.statements.first() {
                    if let Expression::Identifier(ident) = &inner.expression {
                        properties.push((key, ident.name.to_string()));
                    }
                }
            }
        }
    }
    Some(FakeJsStatementKind::NamespaceSynthesis(NamespaceSynthesisInfo {
        local,
        properties,
    }))
}

fn classify_array_element(el: &ArrayExpressionElement<'_>) -> Option<ArrayElement> {
    match el {
        ArrayExpressionElement::StringLiteral(lit) => Some(ArrayElement::Str(lit.value.to_string())),
        ArrayExpressionElement::Identifier(ident) => Some(ArrayElement::Ident(ident.name.to_string())),
        ArrayExpressionElement::TemplateLiteral(tpl) => {
            let mut parts = Vec::new();
            let mut expr_iter = tpl.expressions.iter();
            for quasi in &tpl.quasis {
                let text = quasi.value.cooked.as_deref().unwrap_or(quasi.value.raw.as_str());
                if !text.is_empty() {
                    parts.push(TemplatePart::Text(text.to_string()));
                }
                if !quasi.tail {
                    if let Some(expr) = expr_iter.next() {
                        if let Some(name) = identifier_name(expr) {
                            parts.push(TemplatePart::Expr(name));
                        }
                    }
                }
            }
            Some(ArrayElement::Template(parts))
        }
        _ => None,
    }
}

fn classify_call_argument(arg: &Argument<'_>) -> Option<CallArgument> {
    match arg {
        Argument::StringLiteral(lit) => Some(CallArgument::Str(lit.value.to_string())),
        Argument::NumericLiteral(lit) => Some(CallArgument::Number(lit.raw.map(|r| r.to_string()).unwrap_or_else(|| lit.value.to_string()))),
        Argument::Identifier(ident) => Some(CallArgument::Ident(ident.name.to_string())),
        Argument::StaticMemberExpression(member) => {
            member_chain_static(member).map(|(object, path)| CallArgument::Member { object, path })
        }
        Argument::ComputedMemberExpression(member) => {
            member_chain_computed(member).map(|(object, path)| CallArgument::Member { object, path })
        }
        _ => None,
    }
}

fn member_chain(expr: &Expression<'_>) -> Option<(String, Vec<MemberKey>)> {
    match expr {
        Expression::Identifier(ident) => Some((ident.name.to_string(), Vec::new())),
        Expression::StaticMemberExpression(member) => member_chain_static(member),
        Expression::ComputedMemberExpression(member) => member_chain_computed(member),
        _ => None,
    }
}

fn member_chain_static(
    member: &oxc_ast::ast::StaticMemberExpression<'_>,
) -> Option<(String, Vec<MemberKey>)> {
    let (object, mut path) = member_chain(&member.object)?;
    path.push(MemberKey::Identifier(member.property.name.to_string()));
    Some((object, path))
}

fn member_chain_computed(
    member: &oxc_ast::ast::ComputedMemberExpression<'_>,
) -> Option<(String, Vec<MemberKey>)> {
    let (object, mut path) = member_chain(&member.object)?;
    let key = match &member.expression {
        Expression::StringLiteral(lit) => MemberKey::String(lit.value.to_string()),
        other => MemberKey::String(identifier_name(other).unwrap_or_default()),
    };
    path.push(key);
    Some((object, path))
}

fn identifier_name(expr: &Expression<'_>) -> Option<String> {
    match expr {
        Expression::Identifier(ident) => Some(ident.name.to_string()),
        _ => None,
    }
}

fn module_export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_variable_array() {
        let src = r#"var var0 = ["interface User { id: number; }"];"#;
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        assert!(matches!(stmts[0].kind, FakeJsStatementKind::VariableArray { .. }));
    }

    #[test]
    fn classifies_variable_identifier() {
        let src = "var X = Y;";
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        match &stmts[0].kind {
            FakeJsStatementKind::VariableIdentifier { name, value } => {
                assert_eq!(name, "X");
                assert_eq!(value, "Y");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn classifies_namespace_synthesis_call() {
        let src = "NS(ns, { a: () => a, b: () => b });";
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        match &stmts[0].kind {
            FakeJsStatementKind::NamespaceSynthesis(info) => {
                assert_eq!(info.local, "ns");
                assert_eq!(info.properties.len(), 2);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn classifies_import_and_export_all() {
        let src = "import * as schema from './s.js';\nexport * from './t.js';";
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        assert!(matches!(stmts[0].kind, FakeJsStatementKind::Import { .. }));
        assert!(matches!(stmts[1].kind, FakeJsStatementKind::ExportAll { .. }));
    }
}
