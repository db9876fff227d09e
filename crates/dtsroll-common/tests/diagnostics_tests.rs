use dtsroll_common::{Diagnostic, DiagnosticCategory, Span};

#[test]
fn diagnostics_carry_the_source_file() {
    let d = Diagnostic::error("src/index.ts", Span::new(0, 5), "unexpected token");
    assert_eq!(d.category, DiagnosticCategory::Error);
    assert_eq!(d.file, "src/index.ts");
}
