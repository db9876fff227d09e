//! Declaration pre-production (spec §4.6): turn one source file's text into
//! a declaration string, either via the per-file isolated-declaration
//! transformer or a pre-emitted shadow declaration tree.

use std::path::{Path, PathBuf};

use dtsroll_common::{Diagnostic, Span};
use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_diagnostics::OxcDiagnostic;
use oxc_isolated_declarations::{IsolatedDeclarations, IsolatedDeclarationsOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

fn to_diagnostic(file: &str, error: &OxcDiagnostic) -> Diagnostic {
    Diagnostic::error(file, Span::default(), error.to_string())
}

/// One file's pre-produced declaration text plus any non-fatal diagnostics.
pub struct DeclarationResult {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Emit a declaration string for `source_text` at `file_path` using the
/// per-file isolated-declaration transformer. Used both for the initial
/// per-source-file pre-production pass and for the post-bundle tree-shake
/// re-run (spec §4.6 final paragraph).
///
/// `source_type` is taken from the caller rather than derived from
/// `file_path` here: the tree-shake re-run parses reconstructed declaration
/// text under a bundled chunk's `.js`/`.mjs`/`.cjs` name, and that name must
/// not be used to pick the grammar (it would select JavaScript, not
/// TypeScript, for source that is entirely declaration syntax).
pub fn emit_isolated_declaration(
    file_path: &Path,
    source_text: &str,
    source_type: SourceType,
) -> DeclarationResult {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source_text, source_type).parse();

    let options = IsolatedDeclarationsOptions { strip_internal: true };
    let result = IsolatedDeclarations::new(&allocator, options).build(&parsed.program);

    let file = file_path.display().to_string();
    let mut diagnostics: Vec<Diagnostic> = parsed
        .errors
        .iter()
        .map(|e| to_diagnostic(&file, e))
        .collect();
    diagnostics.extend(result.errors.iter().map(|e| to_diagnostic(&file, e)));

    let text = Codegen::new().build(&result.program).code;
    DeclarationResult { text, diagnostics }
}

/// A whole-program checker that pre-emits a shadow declaration tree,
/// supporting cross-file inference the isolated transformer can't do
/// (spec §4.6). The checker executable itself is an external collaborator;
/// this trait is the seam the driver needs.
pub trait WholeProgramCheckerDeclarations {
    /// Pre-emit declarations for every source file reachable from
    /// `entrypoints` into `out_dir`, returning the path each source file's
    /// declaration landed at.
    fn pre_emit(
        &self,
        entrypoints: &[PathBuf],
        out_dir: &Path,
    ) -> Result<Vec<(PathBuf, PathBuf)>, PreEmitError>;
}

#[derive(Debug, thiserror::Error)]
#[error("whole-program declaration pre-emission failed: {0}")]
pub struct PreEmitError(pub String);
