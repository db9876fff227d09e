//! Output path/extension metadata (spec §4.11 "Output extension derivation",
//! §6 Result shape). A pure function shared by the driver and the CLI.

use dtsroll_common::OutputKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub kind: OutputKind,
    pub path: String,
    pub stem: String,
    pub extension: &'static str,
    pub text: String,
}

/// `.js -> .d.ts`, `.mjs -> .d.mts`, `.cjs -> .d.cts`.
pub fn declaration_extension_for(js_path: &str) -> &'static str {
    let ext = Path::new(js_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("js");
    match ext {
        "mjs" => ".d.mts",
        "cjs" => ".d.cts",
        _ => ".d.ts",
    }
}

pub fn declaration_path_for(js_path: &str) -> String {
    let ext = declaration_extension_for(js_path);
    let stem = Path::new(js_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(js_path);
    let parent = Path::new(js_path).parent().filter(|p| !p.as_os_str().is_empty());
    match parent {
        Some(parent) => format!("{}/{stem}{ext}", parent.display()),
        None => format!("{stem}{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_maps_to_dts() {
        assert_eq!(declaration_extension_for("index.js"), ".d.ts");
    }

    #[test]
    fn mjs_maps_to_dmts() {
        assert_eq!(declaration_extension_for("index.mjs"), ".d.mts");
    }

    #[test]
    fn cjs_maps_to_dcts() {
        assert_eq!(declaration_extension_for("index.cjs"), ".d.cts");
    }

    #[test]
    fn declaration_path_preserves_directory() {
        assert_eq!(declaration_path_for("dist/chunks/a.mjs"), "dist/chunks/a.d.mts");
    }
}
