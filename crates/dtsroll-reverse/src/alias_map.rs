//! Namespace alias map construction (spec §4.5 preprocessing pass).

use dtsroll_ast::fake_js::{FakeJsStatement, FakeJsStatementKind};
use rustc_hash::FxHashMap;

/// Name pattern the bundler uses for a synthesised namespace local.
pub fn is_synthesized_namespace_local(name: &str) -> bool {
    name.starts_with("exports_")
}

/// Build the mapping from synthetic local (`exports_*` or a renamed
/// variant) to the user-facing namespace name.
pub fn build(statements: &[FakeJsStatement]) -> FxHashMap<String, String> {
    let mut map = FxHashMap::default();

    for stmt in statements {
        if let FakeJsStatementKind::Import {
            namespace_local: Some(local),
            ..
        } = &stmt.kind
        {
            map.insert(local.clone(), local.clone());
        }
    }

    for stmt in statements {
        if let FakeJsStatementKind::ReExport { specifiers, .. } = &stmt.kind {
            for (local, exported) in specifiers {
                if is_synthesized_namespace_local(local) {
                    map.insert(local.clone(), exported.clone());
                }
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtsroll_ast::fake_js::parse_fake_js_module;

    #[test]
    fn records_namespace_import_identity() {
        let src = "import * as schema from './s.js';";
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        let map = build(&stmts);
        assert_eq!(map.get("schema"), Some(&"schema".to_string()));
    }

    #[test]
    fn remaps_synthesized_export_to_user_facing_name() {
        let src = "export { exports_0 as schema } from './s.js';";
        let stmts = parse_fake_js_module("bundle.js", src).unwrap();
        let map = build(&stmts);
        assert_eq!(map.get("exports_0"), Some(&"schema".to_string()));
    }
}
