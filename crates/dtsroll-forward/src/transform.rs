//! Per-file forward transform: declaration text -> fake-JS text (spec §4.4).

use dtsroll_ast::comments::serialize_leading_comments;
use dtsroll_ast::dts::{self, DefaultExportKind, DtsStatementKind};
use dtsroll_ast::regex_rules::{strip_specifier_type_modifiers, EXPORT_TYPE, IMPORT_TYPE};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::dynamic_import::DynamicImportExpander;
use crate::error::ForwardError;
use crate::tokenizer::{self, Token};

/// Turn one declaration file into a fake-JS module string.
pub fn forward_transform(file: &str, source: &str) -> Result<String, ForwardError> {
    debug!(file, "running forward transform");

    let statements = dts::parse_declaration_module(file, source)
        .map_err(|source| ForwardError::Ast { file: file.to_string(), source })?;

    let mut referenced_names: FxHashSet<String> = FxHashSet::default();
    for stmt in &statements {
        if let DtsStatementKind::Import(info) = &stmt.kind {
            referenced_names.extend(info.locals.iter().cloned());
        }
    }

    let mut exported_names: FxHashSet<String> = FxHashSet::default();
    let mut expander = DynamicImportExpander::new();
    let mut out = Vec::new();
    let mut synthetic_index = 0usize;

    for stmt in &statements {
        let raw = stmt.span.slice(source);
        match &stmt.kind {
            DtsStatementKind::Import(info) => {
                if info.is_side_effect {
                    continue;
                }
                out.push(jsify_module_statement(raw));
            }
            DtsStatementKind::ExportAll(_) | DtsStatementKind::ReExport(_) => {
                out.push(jsify_module_statement(raw));
            }
            DtsStatementKind::ExportDefault(info) => emit_default_export(
                file,
                raw,
                &info.kind,
                stmt,
                &mut referenced_names,
                &mut expander,
                &mut synthetic_index,
                &mut out,
            )?,
            DtsStatementKind::Declaration(info) => {
                let name = info.name.clone().unwrap_or_else(|| {
                    let n = format!("var{synthetic_index}");
                    synthetic_index += 1;
                    n
                });
                referenced_names.insert(name.clone());

                let body = if info.has_export_modifier {
                    dts::strip_export_prefix(raw)
                } else {
                    raw
                };
                let prepared = format!("{}{body}", serialize_leading_comments(&stmt.leading_comments));

                let (pre, tokens) = tokenizer::tokenize(file, &prepared, &referenced_names, &mut expander)?;
                out.extend(pre);
                out.push(render_var_statement(&name, &tokens));

                if info.has_export_modifier && !exported_names.contains(&name) {
                    out.push(format!("export {{ {name} }};"));
                    exported_names.insert(name);
                }
            }
        }
    }

    Ok(out.join("\n"))
}

#[allow(clippy::too_many_arguments)]
fn emit_default_export(
    file: &str,
    raw: &str,
    kind: &DefaultExportKind,
    stmt: &dts::DtsStatement,
    referenced_names: &mut FxHashSet<String>,
    expander: &mut DynamicImportExpander,
    synthetic_index: &mut usize,
    out: &mut Vec<String>,
) -> Result<(), ForwardError> {
    if let DefaultExportKind::IdentifierReExport(ident) = kind {
        out.push(format!("export {{ {ident} as default }};"));
        return Ok(());
    }

    let name = match kind {
        DefaultExportKind::Named(name) => name.clone(),
        _ => {
            let n = format!("var{synthetic_index}");
            *synthetic_index += 1;
            n
        }
    };
    referenced_names.insert(name.clone());

    let body = dts::strip_export_prefix(raw);
    let body = match kind {
        DefaultExportKind::UnnamedFunction | DefaultExportKind::UnnamedClass => {
            dts::name_unnamed_default(body, &name)
        }
        _ => body.to_string(),
    };
    let prepared = format!("{}{body}", serialize_leading_comments(&stmt.leading_comments));

    let (pre, tokens) = tokenizer::tokenize(file, &prepared, referenced_names, expander)?;
    out.extend(pre);
    out.push(render_var_statement(&name, &tokens));
    out.push(format!("export {{ {name} as default }};"));
    Ok(())
}

fn render_var_statement(name: &str, tokens: &[Token]) -> String {
    format!("var {name} = [{}];", tokenizer::render_tokens(tokens))
}

/// Strip `import type` / `export type` and per-specifier `type ` modifiers,
/// emitting the resulting statement verbatim (spec §4.4 step 5).
fn jsify_module_statement(text: &str) -> String {
    let stripped = IMPORT_TYPE.replace(text, "import ");
    let stripped = EXPORT_TYPE.replace(&stripped, "export ");
    strip_specifier_type_modifiers(&stripped)
}
