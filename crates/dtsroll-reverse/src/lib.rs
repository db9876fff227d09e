//! Reverse transform: bundled fake-JS module text -> declaration text (spec §4.5).

pub mod alias_map;
pub mod error;
pub mod extension;
pub mod reconstruct;
mod transform;

pub use error::ReverseError;
pub use transform::reverse_transform;
