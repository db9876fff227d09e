//! `generate_dts` orchestration (spec §4.6, §6).
//!
//! 1. Sanity-check that every entrypoint at least produces a non-empty
//!    isolated declaration on its own, before spending a bundler pass on it.
//! 2. Hand the entrypoints to [`crate::bundler::run_bundle`], which drives a
//!    real `rolldown::Bundler` with `DtsRollPlugin` registered: the bundler's
//!    own module graph walk is what resolves, forward-transforms and inlines
//!    every transitively-imported first-party file, `node_modules` package
//!    and builtin module (spec §4.11), not this function.
//! 3. Reverse-transform each bundled output chunk back into a declaration.
//! 4. Re-run isolated-declarations over each chunk as a tree-shake /
//!    normalisation pass, dropping chunks that end up empty.

use std::path::{Path, PathBuf};

use dtsroll_common::{Diagnostic, OutputKind, Span};
use oxc_span::SourceType;
use tracing::{debug, info, warn};

use crate::bundler::{pre_emit_declaration, run_bundle};
use crate::declaration_source::emit_isolated_declaration;
use crate::error::GenerateError;
use crate::options::Options;
use crate::output::{declaration_path_for, OutputFile};
use crate::resolver::{DeclarationResolver, ResolvedKind};

pub struct GenerateDtsOutcome {
    pub files: Vec<OutputFile>,
    pub errors: Vec<Diagnostic>,
}

pub fn generate_dts(entrypoints: &[PathBuf], options: &Options) -> Result<GenerateDtsOutcome, GenerateError> {
    if entrypoints.is_empty() {
        return Err(GenerateError::NoEntrypoints);
    }
    if options.infer_types && options.preferred_tsconfig.is_none() {
        return Err(GenerateError::InferTypesRequiresConfig {
            cwd: options.cwd.display().to_string(),
        });
    }

    let resolver = DeclarationResolver::new(&options.cwd);
    let mut errors = Vec::new();

    info!(count = entrypoints.len(), "validating entrypoints before bundling");
    validate_entrypoints(entrypoints, &resolver, &mut errors)?;

    info!(count = entrypoints.len(), "invoking bundler");
    let bundled = run_bundle(entrypoints, &options.cwd, options.resolve.clone())?;

    let mut files = Vec::with_capacity(bundled.chunks.len());
    for (name, code) in bundled.chunks {
        debug!(chunk = %name, "reverse-transforming bundled chunk");
        let declaration = dtsroll_reverse::reverse_transform(&name, &code)?;

        let source_type = declaration_source_type(&name);
        let shaken = emit_isolated_declaration(Path::new(&name), &declaration, source_type);
        if shaken.text.trim().is_empty() && !shaken.diagnostics.is_empty() {
            warn!(chunk = %name, "tree-shake pass produced no output with diagnostics present");
            return Err(GenerateError::TreeShakeFailed {
                entry: name,
                diagnostics: shaken.diagnostics,
            });
        }
        if shaken.text.trim().is_empty() {
            debug!(chunk = %name, "chunk tree-shook to nothing, dropping");
            continue;
        }

        let text = if options.minify {
            minify_declaration(&shaken.text, source_type)
        } else {
            shaken.text
        };

        let kind = if entrypoints
            .iter()
            .any(|e| e.file_stem().and_then(|s| s.to_str()) == Path::new(&name).file_stem().and_then(|s| s.to_str()))
        {
            OutputKind::EntryPoint
        } else {
            OutputKind::Chunk
        };

        let path = declaration_path_for(&name);
        let stem = Path::new(&path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&path)
            .to_string();
        let extension = crate::output::declaration_extension_for(&name);

        files.push(OutputFile {
            kind,
            path,
            stem,
            extension,
            text,
        });
        errors.extend(shaken.diagnostics);
    }

    Ok(GenerateDtsOutcome { files, errors })
}

/// Confirms every literal entrypoint produces a non-empty declaration on its
/// own, ahead of the (much more expensive) bundler pass. This does not walk
/// imports: that traversal happens inside the bundler's own module graph,
/// driven by `DtsRollPlugin`'s `resolve_id`/`load` hooks against the same
/// [`DeclarationResolver`] (`crate::bundler`).
fn validate_entrypoints(
    entrypoints: &[PathBuf],
    resolver: &DeclarationResolver,
    errors: &mut Vec<Diagnostic>,
) -> Result<(), GenerateError> {
    for entry in entrypoints {
        let declaration = pre_emit_declaration(resolver, ResolvedKind::FirstParty, entry)
            .map_err(|e| GenerateError::Bundle(e.to_string()))?;
        if declaration.trim().is_empty() {
            errors.push(Diagnostic::warning(
                entry.display().to_string(),
                Span::default(),
                "entry produced an empty declaration",
            ));
        }
    }
    Ok(())
}

/// The bundler hands back chunk names shaped like `.js`/`.mjs`/`.cjs`, but
/// the text at those names is reconstructed declaration syntax. Map the
/// chunk's JS-flavoured extension to its matching TS one before asking
/// `oxc_span` to pick a grammar, rather than feeding it the chunk name
/// directly (which would select the JavaScript grammar for what is in fact
/// `interface`/`declare namespace`/type-alias syntax).
fn declaration_source_type(chunk_name: &str) -> SourceType {
    let synthetic_path = match Path::new(chunk_name).extension().and_then(|e| e.to_str()) {
        Some("mjs") => "chunk.mts",
        Some("cjs") => "chunk.cts",
        _ => "chunk.ts",
    };
    SourceType::from_path(synthetic_path).unwrap_or_else(|_| SourceType::ts())
}

fn minify_declaration(text: &str, source_type: SourceType) -> String {
    let allocator = oxc_allocator::Allocator::default();
    let parsed = oxc_parser::Parser::new(&allocator, text, source_type).parse();
    let mut program = parsed.program;
    oxc_minifier::Minifier::new(oxc_minifier::MinifierOptions::default()).build(&allocator, &mut program);
    oxc_codegen::Codegen::new().build(&program).code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_entrypoints_is_an_error() {
        let options = Options::new(PathBuf::from("."));
        let result = generate_dts(&[], &options);
        assert!(matches!(result, Err(GenerateError::NoEntrypoints)));
    }

    #[test]
    fn infer_types_without_config_is_an_error() {
        let mut options = Options::new(PathBuf::from("."));
        options.infer_types = true;
        let result = generate_dts(&[PathBuf::from("a.ts")], &options);
        assert!(matches!(result, Err(GenerateError::InferTypesRequiresConfig { .. })));
    }

    #[test]
    fn single_entrypoint_round_trips_into_one_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("index.ts");
        std::fs::File::create(&entry)
            .unwrap()
            .write_all(b"export interface User { id: number }")
            .unwrap();

        let options = Options::new(dir.path().to_path_buf());
        let outcome = generate_dts(&[entry], &options).unwrap();
        assert_eq!(outcome.files.len(), 1);
        assert!(outcome.files[0].text.contains("User"));
    }
}
