use dtsroll_core::{declaration_extension_for, declaration_path_for};

#[test]
fn js_entry_at_nested_path_maps_to_dts_alongside() {
    assert_eq!(declaration_path_for("dist/index.js"), "dist/index.d.ts");
}

#[test]
fn mjs_chunk_maps_to_dmts() {
    assert_eq!(declaration_path_for("dist/chunks/chunk-abc123.mjs"), "dist/chunks/chunk-abc123.d.mts");
}

#[test]
fn cjs_entry_maps_to_dcts() {
    assert_eq!(declaration_extension_for("dist/index.cjs"), ".d.cts");
}

#[test]
fn unknown_extension_defaults_to_dts() {
    assert_eq!(declaration_extension_for("dist/index"), ".d.ts");
}
