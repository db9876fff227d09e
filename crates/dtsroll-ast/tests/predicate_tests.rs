use dtsroll_ast::dts::{
    get_name, has_default_export_modifier, has_export_modifier, is_default_re_export,
    is_export_all, is_import, is_re_export, is_side_effect_import, is_unnamed_default_export,
    parse_declaration_module,
};

#[test]
fn classifies_a_mixed_declaration_file() {
    let src = r#"
import './side-effect';
import type { A } from './a';
export interface User { id: number; name: string }
export default function(): number;
export default identity;
export * from './all';
export { X, Y as Z } from './named';
"#;
    let stmts = parse_declaration_module("test.d.ts", src).unwrap();

    assert!(is_side_effect_import(&stmts[0]));
    assert!(is_import(&stmts[1]));
    assert!(!is_side_effect_import(&stmts[1]));

    assert_eq!(get_name(&stmts[2]), Some("User"));
    assert!(has_export_modifier(&stmts[2]));

    assert!(has_default_export_modifier(&stmts[3]));
    assert!(is_unnamed_default_export(&stmts[3]));

    assert!(has_default_export_modifier(&stmts[4]));
    assert!(is_default_re_export(&stmts[4]));

    assert!(is_export_all(&stmts[5]));
    assert!(is_re_export(&stmts[6]));
}
