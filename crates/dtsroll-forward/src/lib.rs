//! Forward transform: declaration file text -> fake-JS module text (spec §4.4).

pub mod dynamic_import;
pub mod error;
pub mod tokenizer;
mod transform;

pub use error::ForwardError;
pub use transform::forward_transform;
