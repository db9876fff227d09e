use dtsroll_reverse::reverse_transform;

#[test]
fn scenario_single_interface_round_trips() {
    let src = r#"var User = ["interface User { id: number; name: string; }"];
export { User };"#;
    let out = reverse_transform("bundle.js", src).unwrap();
    assert!(out.contains("interface User { id: number; name: string; }"));
    assert!(out.contains("export { User };"));
}

#[test]
fn import_and_export_all_strip_js_extension() {
    let src = "import { A } from './a.mjs';\nexport * from './all.cjs';";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert!(out.contains("from './a';"));
    assert!(out.contains("from './all';"));
}

#[test]
fn variable_member_reconstructs_conservative_access() {
    let src = "var X = A.B['c'];";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert_eq!(out, "type X = A['B']['c'];");
}

#[test]
fn variable_call_reconstructs_type_alias() {
    let src = "var X = Pick(T, \"k\");";
    let out = reverse_transform("bundle.js", src).unwrap();
    assert_eq!(out, "type X = Pick(T, \"k\");");
}
