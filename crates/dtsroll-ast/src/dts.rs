//! Top-level statement model and syntactic predicates for a declaration
//! file (spec §4.2). This is the AST surface the forward transform walks.

use dtsroll_common::Span;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Declaration, ExportDefaultDeclarationKind, ModuleExportName, Program, Statement,
};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::comments::leading_comments;
use crate::error::AstError;

/// One top-level statement of a declaration file, classified, with its
/// byte span into the original source so callers can slice the raw text.
#[derive(Debug, Clone)]
pub struct DtsStatement {
    pub span: Span,
    pub kind: DtsStatementKind,
    pub leading_comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum DtsStatementKind {
    Import(ImportInfo),
    ExportAll(ExportAllInfo),
    ReExport(ReExportInfo),
    ExportDefault(ExportDefaultInfo),
    Declaration(DeclarationInfo),
}

#[derive(Debug, Clone)]
pub struct ImportInfo {
    pub source: String,
    pub is_side_effect: bool,
    pub is_type_only: bool,
    /// Local binding names introduced by this import: default, named, and
    /// namespace specifiers alike. Seeds the forward transform's
    /// referenced-names set.
    pub locals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ExportAllInfo {
    pub source: String,
    pub exported_name: Option<String>,
    pub is_type_only: bool,
}

#[derive(Debug, Clone)]
pub struct ExportSpecifierPair {
    pub local: String,
    pub exported: String,
}

#[derive(Debug, Clone)]
pub struct ReExportInfo {
    pub source: Option<String>,
    pub is_type_only: bool,
    pub specifiers: Vec<ExportSpecifierPair>,
}

#[derive(Debug, Clone)]
pub enum DefaultExportKind {
    UnnamedFunction,
    UnnamedClass,
    Named(String),
    IdentifierReExport(String),
    Other,
}

#[derive(Debug, Clone)]
pub struct ExportDefaultInfo {
    pub kind: DefaultExportKind,
}

#[derive(Debug, Clone)]
pub struct DeclarationInfo {
    pub name: Option<String>,
    pub has_export_modifier: bool,
}

/// Parse `source` (one declaration file's text) into its classified
/// top-level statements, in source order.
pub fn parse_declaration_module(file: &str, source: &str) -> Result<Vec<DtsStatement>, AstError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(file).unwrap_or_else(|_| SourceType::ts());
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
    Ok(classify_program(&ret.program, source))
}

fn classify_program(program: &Program<'_>, source: &str) -> Vec<DtsStatement> {
    let mut out = Vec::with_capacity(program.body.len());
    let mut prev_end = 0u32;
    for stmt in &program.body {
        let span = span_of(stmt);
        let comments = leading_comments(source, prev_end, span.start);
        let kind = classify_statement(stmt);
        out.push(DtsStatement {
            span,
            kind,
            leading_comments: comments,
        });
        prev_end = span.end;
    }
    out
}

fn span_of(stmt: &Statement<'_>) -> Span {
    let s = stmt.span();
    Span::new(s.start, s.end)
}

fn classify_statement(stmt: &Statement<'_>) -> DtsStatementKind {
    match stmt {
        Statement::ImportDeclaration(import) => {
            let is_side_effect = import
                .specifiers
                .as_ref()
                .map(|specs| specs.is_empty())
                .unwrap_or(true);
            let locals = import
                .specifiers
                .as_ref()
                .map(|specs| specs.iter().map(import_specifier_local).collect())
                .unwrap_or_default();
            DtsStatementKind::Import(ImportInfo {
                source: import.source.value.to_string(),
                is_side_effect,
                is_type_only: import.import_kind.is_type(),
                locals,
            })
        }
        Statement::ExportAllDeclaration(export_all) => DtsStatementKind::ExportAll(ExportAllInfo {
            source: export_all.source.value.to_string(),
            exported_name: export_all.exported.as_ref().map(module_export_name),
            is_type_only: export_all.export_kind.is_type(),
        }),
        Statement::ExportNamedDeclaration(export_named) => {
            if let Some(decl) = &export_named.declaration {
                DtsStatementKind::Declaration(DeclarationInfo {
                    name: declaration_name(decl),
                    has_export_modifier: true,
                })
            } else {
                let specifiers = export_named
                    .specifiers
                    .iter()
                    .map(|spec| ExportSpecifierPair {
                        local: module_export_name(&spec.local),
                        exported: module_export_name(&spec.exported),
                    })
                    .collect();
                DtsStatementKind::ReExport(ReExportInfo {
                    source: export_named.source.as_ref().map(|s| s.value.to_string()),
                    is_type_only: export_named.export_kind.is_type(),
                    specifiers,
                })
            }
        }
        Statement::ExportDefaultDeclaration(export_default) => {
            let kind = match &export_default.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => match &func.id {
                    Some(id) => DefaultExportKind::Named(id.name.to_string()),
                    None => DefaultExportKind::UnnamedFunction,
                },
                ExportDefaultDeclarationKind::ClassDeclaration(class) => match &class.id {
                    Some(id) => DefaultExportKind::Named(id.name.to_string()),
                    None => DefaultExportKind::UnnamedClass,
                },
                ExportDefaultDeclarationKind::TSInterfaceDeclaration(iface) => {
                    DefaultExportKind::Named(iface.id.name.to_string())
                }
                _ => {
                    if let Some(ident) = export_default.declaration.as_expression().and_then(|e| e.get_identifier_reference()) {
                        DefaultExportKind::IdentifierReExport(ident.name.to_string())
                    } else {
                        DefaultExportKind::Other
                    }
                }
            };
            DtsStatementKind::ExportDefault(ExportDefaultInfo { kind })
        }
        other => DtsStatementKind::Declaration(DeclarationInfo {
            name: bare_declaration_name(other),
            has_export_modifier: false,
        }),
    }
}

fn import_specifier_local(spec: &oxc_ast::ast::ImportDeclarationSpecifier<'_>) -> String {
    use oxc_ast::ast::ImportDeclarationSpecifier;
    match spec {
        ImportDeclarationSpecifier::ImportSpecifier(s) => s.local.name.to_string(),
        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => s.local.name.to_string(),
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => s.local.name.to_string(),
    }
}

fn module_export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

fn declaration_name(decl: &Declaration<'_>) -> Option<String> {
    match decl {
        Declaration::FunctionDeclaration(f) => f.id.as_ref().map(|id| id.name.to_string()),
        Declaration::ClassDeclaration(c) => c.id.as_ref().map(|id| id.name.to_string()),
        Declaration::TSInterfaceDeclaration(i) => Some(i.id.name.to_string()),
        Declaration::TSTypeAliasDeclaration(t) => Some(t.id.name.to_string()),
        Declaration::TSEnumDeclaration(e) => Some(e.id.name.to_string()),
        Declaration::TSModuleDeclaration(m) => Some(m.id.to_string()),
        Declaration::VariableDeclaration(v) => single_variable_name(v),
        _ => None,
    }
}

fn bare_declaration_name(stmt: &Statement<'_>) -> Option<String> {
    match stmt {
        Statement::FunctionDeclaration(f) => f.id.as_ref().map(|id| id.name.to_string()),
        Statement::ClassDeclaration(c) => c.id.as_ref().map(|id| id.name.to_string()),
        Statement::TSInterfaceDeclaration(i) => Some(i.id.name.to_string()),
        Statement::TSTypeAliasDeclaration(t) => Some(t.id.name.to_string()),
        Statement::TSEnumDeclaration(e) => Some(e.id.name.to_string()),
        Statement::TSModuleDeclaration(m) => Some(m.id.to_string()),
        Statement::VariableDeclaration(v) => single_variable_name(v),
        _ => None,
    }
}

fn single_variable_name(
    decl: &oxc_ast::ast::VariableDeclaration<'_>,
) -> Option<String> {
    if decl.declarations.len() != 1 {
        return None;
    }
    let declarator = &decl.declarations[0];
    declarator.id.get_identifier().map(|name| name.to_string())
}

/// `isImport` (spec §4.2).
pub fn is_import(stmt: &DtsStatement) -> bool {
    matches!(stmt.kind, DtsStatementKind::Import(_))
}

/// `isExportAll`.
pub fn is_export_all(stmt: &DtsStatement) -> bool {
    matches!(stmt.kind, DtsStatementKind::ExportAll(_))
}

/// `isReExport`: a named export with no local declaration.
pub fn is_re_export(stmt: &DtsStatement) -> bool {
    matches!(stmt.kind, DtsStatementKind::ReExport(_))
}

/// `isSideEffectImport`: an import with no specifiers.
pub fn is_side_effect_import(stmt: &DtsStatement) -> bool {
    matches!(
        &stmt.kind,
        DtsStatementKind::Import(ImportInfo {
            is_side_effect: true,
            ..
        })
    )
}

/// `hasExportModifier`.
pub fn has_export_modifier(stmt: &DtsStatement) -> bool {
    match &stmt.kind {
        DtsStatementKind::Declaration(info) => info.has_export_modifier,
        DtsStatementKind::ExportDefault(_) | DtsStatementKind::ExportAll(_) | DtsStatementKind::ReExport(_) => true,
        DtsStatementKind::Import(_) => false,
    }
}

/// `hasDefaultExportModifier`.
pub fn has_default_export_modifier(stmt: &DtsStatement) -> bool {
    matches!(stmt.kind, DtsStatementKind::ExportDefault(_))
}

/// `isUnnamedDefaultExport`: default export whose declaration is a
/// function/class with no name.
pub fn is_unnamed_default_export(stmt: &DtsStatement) -> bool {
    matches!(
        &stmt.kind,
        DtsStatementKind::ExportDefault(ExportDefaultInfo {
            kind: DefaultExportKind::UnnamedFunction | DefaultExportKind::UnnamedClass
        })
    )
}

/// `isDefaultReExport`: default export of a plain identifier reference.
pub fn is_default_re_export(stmt: &DtsStatement) -> bool {
    matches!(
        &stmt.kind,
        DtsStatementKind::ExportDefault(ExportDefaultInfo {
            kind: DefaultExportKind::IdentifierReExport(_)
        })
    )
}

/// `getName`: the single declared identifier, when the statement has one
/// obvious name.
pub fn get_name(stmt: &DtsStatement) -> Option<&str> {
    match &stmt.kind {
        DtsStatementKind::Declaration(info) => info.name.as_deref(),
        DtsStatementKind::ExportDefault(ExportDefaultInfo {
            kind: DefaultExportKind::Named(name),
        }) => Some(name),
        _ => None,
    }
}

/// Strip a leading `export default` or `export` keyword prefix from
/// statement text (export-syntax removal, spec §4.2 final paragraph).
pub fn strip_export_prefix(text: &str) -> &str {
    let trimmed = text.trim_start();
    for prefix in ["export default ", "export default", "export "] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest;
        }
    }
    if trimmed == "export" {
        return "";
    }
    trimmed
}

/// Insert `name` into an unnamed `export default function(...)` /
/// `export default class {...}` so the default binding becomes tokenisable.
pub fn name_unnamed_default(text: &str, name: &str) -> String {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix("function") {
        return format!("function {name}{rest}");
    }
    if let Some(rest) = trimmed.strip_prefix("class") {
        return format!("class {name}{rest}");
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_interface_declaration() {
        let src = "export interface User { id: number; name: string }";
        let stmts = parse_declaration_module("test.d.ts", src).unwrap();
        assert_eq!(stmts.len(), 1);
        assert!(has_export_modifier(&stmts[0]));
        assert_eq!(get_name(&stmts[0]), Some("User"));
    }

    #[test]
    fn classifies_side_effect_import() {
        let src = "import './polyfill';";
        let stmts = parse_declaration_module("test.d.ts", src).unwrap();
        assert!(is_import(&stmts[0]));
        assert!(is_side_effect_import(&stmts[0]));
    }

    #[test]
    fn classifies_export_all() {
        let src = "export * from './other';";
        let stmts = parse_declaration_module("test.d.ts", src).unwrap();
        assert!(is_export_all(&stmts[0]));
    }

    #[test]
    fn classifies_re_export() {
        let src = "export { A, B as C } from './m';";
        let stmts = parse_declaration_module("test.d.ts", src).unwrap();
        assert!(is_re_export(&stmts[0]));
    }

    #[test]
    fn classifies_unnamed_default_function() {
        let src = "export default function(): number;";
        let stmts = parse_declaration_module("test.d.ts", src).unwrap();
        assert!(is_unnamed_default_export(&stmts[0]));
    }

    #[test]
    fn strip_export_prefix_removes_keyword() {
        assert_eq!(strip_export_prefix("export interface Foo {}"), "interface Foo {}");
        assert_eq!(strip_export_prefix("export default function() {}"), "function() {}");
    }

    #[test]
    fn names_unnamed_default_function() {
        let renamed = name_unnamed_default("function(): number", "var0");
        assert_eq!(renamed, "function var0(): number");
    }
}
