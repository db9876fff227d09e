//! Common types and utilities for the dtsroll declaration bundler.
//!
//! This crate provides foundational types used across all dtsroll crates:
//! - Source spans (`Span`) for byte-offset tracking within a declaration file
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`) surfaced from per-file emission
//! - The output taxonomy (`OutputKind`, `DeclExtension`) shared by the driver and CLI

pub mod diagnostics;
pub mod extension;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticCategory};
pub use extension::DeclExtension;
pub use span::Span;

/// Whether a bundler output chunk corresponds to a requested entry point
/// or to a shared chunk synthesised by code-splitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    EntryPoint,
    Chunk,
}
