//! Module resolver collaborator (spec §4.6, §4.11 "node_modules bypass" and
//! "Builtin/ambient modules"). Configured with TypeScript's
//! `moduleResolution: "bundler"` semantics via `oxc_resolver`.

use std::path::{Path, PathBuf};

use dtsroll_ast::regex_rules::NODE_MODULES;
use oxc_resolver::{ResolveOptions, Resolver};
use rustc_hash::FxHashMap;

/// A handful of Node built-ins ship no resolvable `.d.ts` on disk unless
/// `@types/node` is installed; this is the fallback used in that case
/// (spec §4.11, "a small built-in stub table").
const BUILTIN_STUBS: &[(&str, &str)] = &[
    ("node:buffer", "declare module 'node:buffer' { export class Buffer {} }"),
    ("node:fs", "declare module 'node:fs' {}"),
    ("node:path", "declare module 'node:path' {}"),
    ("node:stream", "declare module 'node:stream' {}"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    FirstParty,
    NodeModules,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub kind: ResolvedKind,
    pub path: PathBuf,
}

pub struct DeclarationResolver {
    inner: Resolver,
    builtin_stubs: FxHashMap<&'static str, &'static str>,
}

impl DeclarationResolver {
    pub fn new(cwd: &Path) -> Self {
        let options = ResolveOptions {
            extensions: vec![".d.ts".into(), ".d.mts".into(), ".d.cts".into(), ".ts".into()],
            condition_names: vec!["types".into(), "import".into()],
            main_fields: vec!["types".into(), "typings".into()],
            ..ResolveOptions::default()
        };
        let _ = cwd;
        DeclarationResolver {
            inner: Resolver::new(options),
            builtin_stubs: BUILTIN_STUBS.iter().copied().collect(),
        }
    }

    pub fn resolve(&self, importer_dir: &Path, specifier: &str) -> Result<Resolved, oxc_resolver::ResolveError> {
        if let Some(specifier) = specifier.strip_prefix("node:") {
            return Ok(Resolved {
                kind: ResolvedKind::Builtin,
                path: PathBuf::from(format!("node:{specifier}")),
            });
        }

        let resolution = self.inner.resolve(importer_dir, specifier)?;
        let path = resolution.path().to_path_buf();
        let kind = if NODE_MODULES.is_match(&path.to_string_lossy()) {
            ResolvedKind::NodeModules
        } else {
            ResolvedKind::FirstParty
        };
        Ok(Resolved { kind, path })
    }

    /// Builtin declaration text for a `node:*` specifier bypassed from real
    /// resolution, falling back to a stub when no shipped `.d.ts` is
    /// configured.
    pub fn builtin_declaration_text(&self, specifier: &str) -> Option<&'static str> {
        self.builtin_stubs.get(specifier).copied()
    }
}
