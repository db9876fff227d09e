use dtsroll_reverse::reverse_transform;

#[test]
fn scenario_namespace_synthesis_reconstructs_declare_namespace() {
    let src = "import * as schema from './s.js';\nNS(schema, { a: () => a, b: () => b });";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert!(out.contains("declare namespace schema {"));
    assert!(out.contains("export { a, b };"));
}

#[test]
fn differing_property_and_value_names_use_as_clause() {
    let src = "NS(ns, { renamed: () => original });";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert!(out.contains("export { original as renamed };"));
}

#[test]
fn namespace_synthesis_with_no_eligible_properties_is_dropped() {
    let src = "NS(ns, {});";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert_eq!(out, "");
}

#[test]
fn synthesized_export_specifier_collapses_to_user_facing_name() {
    let src = "export { exports_0 as schema2 } from './s.js';";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert!(out.contains("export { schema2 } from './s';"));
}
