use dtsroll_forward::forward_transform;

#[test]
fn scenario_dynamic_import_with_named_access() {
    let src = "export type U = import('./m').User;";
    let out = forward_transform("f.d.ts", src).unwrap();
    assert!(out.contains("import { User as User_"));
    assert!(out.contains("var U = ["));
}

#[test]
fn scenario_dynamic_import_without_access() {
    let src = "export type B = import('node:buffer').Buffer;";
    let out = forward_transform("f.d.ts", src).unwrap();
    assert!(out.contains("import { Buffer as Buffer_"));
}

#[test]
fn dynamic_import_namespace_form_has_no_access_chain() {
    let src = "export type M = import('./m');";
    let out = forward_transform("f.d.ts", src).unwrap();
    assert!(out.contains("import * as NS_"));
}
