//! Variable-declarator reconstruction (spec §4.5 point 4).

use dtsroll_ast::fake_js::{ArrayElement, CallArgument, MemberKey, TemplatePart};
use rustc_hash::FxHashMap;

fn resolve<'a>(alias_map: &'a FxHashMap<String, String>, name: &'a str) -> &'a str {
    alias_map.get(name).map(|s| s.as_str()).unwrap_or(name)
}

/// Array-initialiser reconstruction: concatenate string (codec-unescaped),
/// identifier (alias-remapped), and template-literal elements in order.
pub fn reconstruct_array(elements: &[ArrayElement], alias_map: &FxHashMap<String, String>) -> String {
    let mut out = String::new();
    for element in elements {
        match element {
            ArrayElement::Str(s) => out.push_str(&dtsroll_codec::unescape(s)),
            ArrayElement::Ident(name) => out.push_str(resolve(alias_map, name)),
            ArrayElement::Template(parts) => {
                for part in parts {
                    match part {
                        TemplatePart::Text(text) => out.push_str(&dtsroll_codec::unescape(text)),
                        TemplatePart::Expr(name) => out.push_str(resolve(alias_map, name)),
                    }
                }
            }
        }
    }
    out
}

/// Conservative computed-access rendering: `A.B['c']` and `A['B']['c']`
/// both render as `A['B']['c']` (spec §4.5 point 4, member-expression form).
pub fn render_member_path(object: &str, path: &[MemberKey], alias_map: &FxHashMap<String, String>) -> String {
    let mut out = resolve(alias_map, object).to_string();
    for key in path {
        let text = match key {
            MemberKey::Identifier(s) | MemberKey::String(s) => s,
        };
        out.push_str("['");
        out.push_str(text);
        out.push_str("']");
    }
    out
}

/// Call-expression rendering: `f(args)` with the member/string/number/
/// identifier argument subset the spec accepts.
pub fn render_call(callee: &str, args: &[CallArgument], alias_map: &FxHashMap<String, String>) -> String {
    let callee = resolve(alias_map, callee);
    let rendered_args = args
        .iter()
        .map(|arg| render_call_argument(arg, alias_map))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{callee}({rendered_args})")
}

fn render_call_argument(arg: &CallArgument, alias_map: &FxHashMap<String, String>) -> String {
    match arg {
        CallArgument::Str(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        CallArgument::Number(n) => n.clone(),
        CallArgument::Ident(name) => resolve(alias_map, name).to_string(),
        CallArgument::Member { object, path } => render_member_path(object, path, alias_map),
    }
}
