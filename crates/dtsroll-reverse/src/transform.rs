//! Per-bundle reverse transform: bundled fake-JS -> declaration text (spec §4.5).

use dtsroll_ast::fake_js::{self, FakeJsStatementKind};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::alias_map::{self, is_synthesized_namespace_local};
use crate::error::ReverseError;
use crate::extension::strip_js_extension;
use crate::reconstruct::{reconstruct_array, render_call, render_member_path};

/// Reconstruct one `.d.ts` module from a single bundled fake-JS module.
pub fn reverse_transform(file: &str, source: &str) -> Result<String, ReverseError> {
    debug!(file, "running reverse transform");

    let statements = fake_js::parse_fake_js_module(file, source)
        .map_err(|source| ReverseError::Ast { file: file.to_string(), source })?;
    let aliases = alias_map::build(&statements);

    let mut out = Vec::new();
    for stmt in &statements {
        let raw = stmt.span.slice(source);
        match &stmt.kind {
            FakeJsStatementKind::Import { .. } => {
                out.push(strip_js_extension(raw));
            }
            FakeJsStatementKind::ExportAll { .. } => {
                out.push(strip_js_extension(raw));
            }
            FakeJsStatementKind::ReExport { source: src, specifiers } => {
                let rendered_specifiers = specifiers
                    .iter()
                    .map(|(local, exported)| render_re_export_specifier(local, exported, &aliases))
                    .collect::<Vec<_>>()
                    .join(", ");
                let from_clause = src
                    .as_ref()
                    .map(|s| format!(" from '{}'", strip_js_extension(s)))
                    .unwrap_or_default();
                out.push(format!("export {{ {rendered_specifiers} }}{from_clause};"));
            }
            FakeJsStatementKind::NamespaceSynthesis(info) => {
                if info.properties.is_empty() {
                    continue;
                }
                let specifiers = info
                    .properties
                    .iter()
                    .map(|(key, value)| {
                        if key == value {
                            key.clone()
                        } else {
                            format!("{value} as {key}")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                let name = aliases.get(&info.local).cloned().unwrap_or_else(|| info.local.clone());
                out.push(format!("declare namespace {name} {{\n  export {{ {specifiers} }};\n}}"));
            }
            FakeJsStatementKind::VariableArray { elements, .. } => {
                out.push(reconstruct_array(elements, &aliases));
            }
            FakeJsStatementKind::VariableIdentifier { name, value } => {
                let value = aliases.get(value).cloned().unwrap_or_else(|| value.clone());
                out.push(format!("type {name} = {value};"));
            }
            FakeJsStatementKind::VariableMember { name, object, path } => {
                out.push(format!("type {name} = {};", render_member_path(object, path, &aliases)));
            }
            FakeJsStatementKind::VariableCall { name, callee, args } => {
                out.push(format!("type {name} = {};", render_call(callee, args, &aliases)));
            }
            FakeJsStatementKind::Other => {}
        }
    }

    Ok(out.join("\n"))
}

fn render_re_export_specifier(local: &str, exported: &str, aliases: &FxHashMap<String, String>) -> String {
    if is_synthesized_namespace_local(local) {
        let resolved = aliases.get(local).cloned().unwrap_or_else(|| local.to_string());
        if resolved == exported {
            exported.to_string()
        } else {
            format!("{resolved} as {exported}")
        }
    } else if local == exported {
        local.to_string()
    } else {
        format!("{local} as {exported}")
    }
}
