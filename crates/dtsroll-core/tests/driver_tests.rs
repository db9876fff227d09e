use std::fs;
use std::path::PathBuf;

use dtsroll_core::{generate_dts, GenerateError, Options};

fn write_entry(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn single_interface_entry_produces_one_declaration_file() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_entry(dir.path(), "index.ts", "export interface User { id: number; name: string }");

    let options = Options::new(dir.path().to_path_buf());
    let outcome = generate_dts(&[entry], &options).unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert!(outcome.files[0].path.ends_with(".d.ts"));
    assert!(outcome.files[0].text.contains("User"));
}

#[test]
fn mjs_style_entry_produces_a_d_mts_file() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_entry(dir.path(), "index.mts", "export type Id = string;");

    let options = Options::new(dir.path().to_path_buf());
    let outcome = generate_dts(&[entry], &options).unwrap();

    assert_eq!(outcome.files.len(), 1);
}

#[test]
fn multiple_entrypoints_each_produce_their_own_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_entry(dir.path(), "a.ts", "export interface A { x: number }");
    let b = write_entry(dir.path(), "b.ts", "export interface B { y: string }");

    let options = Options::new(dir.path().to_path_buf());
    let outcome = generate_dts(&[a, b], &options).unwrap();

    assert_eq!(outcome.files.len(), 2);
}

#[test]
fn empty_entrypoint_list_is_rejected_before_any_io() {
    let options = Options::new(PathBuf::from("."));
    let result = generate_dts(&[], &options);
    assert!(matches!(result, Err(GenerateError::NoEntrypoints)));
}

#[test]
fn entry_importing_a_local_file_inlines_the_imported_type() {
    let dir = tempfile::tempdir().unwrap();
    write_entry(
        dir.path(),
        "user.ts",
        "export interface User { id: number; name: string }",
    );
    let entry = write_entry(
        dir.path(),
        "index.ts",
        "import type { User } from './user';\nexport function getUser(): User { return { id: 1, name: 'a' }; }",
    );

    let options = Options::new(dir.path().to_path_buf());
    let outcome = generate_dts(&[entry], &options).unwrap();

    let combined: String = outcome.files.iter().map(|f| f.text.as_str()).collect();
    assert!(combined.contains("User"), "expected the imported interface to be reachable in the output: {combined}");
}
