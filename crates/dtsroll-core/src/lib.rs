//! Orchestration crate wiring the forward transform, bundler plugin, and
//! reverse transform into the single `generate_dts` entry point (spec §4.6).

pub mod bundler;
pub mod declaration_source;
pub mod error;
pub mod options;
pub mod output;
pub mod resolver;

mod driver;

pub use declaration_source::{DeclarationResult, PreEmitError, WholeProgramCheckerDeclarations};
pub use driver::{generate_dts, GenerateDtsOutcome};
pub use error::GenerateError;
pub use options::{NamingOptions, Options, ResolvePolicy};
pub use output::{declaration_extension_for, declaration_path_for, OutputFile};
pub use resolver::{DeclarationResolver, Resolved, ResolvedKind};
