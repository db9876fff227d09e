//! Driver-level errors (spec §7).

use dtsroll_common::Diagnostic;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("no entrypoint resolved to a TypeScript source file")]
    NoEntrypoints,

    #[error("inferTypes requires a project configuration, none was found at {cwd}")]
    InferTypesRequiresConfig { cwd: String },

    #[error(transparent)]
    Forward(#[from] dtsroll_forward::ForwardError),

    #[error(transparent)]
    Reverse(#[from] dtsroll_reverse::ReverseError),

    #[error("module resolution failed for '{specifier}' from {importer}: {source}")]
    Resolve {
        specifier: String,
        importer: String,
        #[source]
        source: oxc_resolver::ResolveError,
    },

    #[error("bundling failed: {0}")]
    Bundle(String),

    #[error("tree-shake pass for entry '{entry}' produced errors with no output: {diagnostics:?}")]
    TreeShakeFailed {
        entry: String,
        diagnostics: Vec<Diagnostic>,
    },
}
