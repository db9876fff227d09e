//! Syntactic AST helpers (spec §4.2) and the lexical regex rule set
//! (spec §4.3) shared by the forward and reverse transforms.
//!
//! No semantic analysis happens here: statements are classified by shape,
//! not by type-checked meaning.

pub mod comments;
pub mod dts;
pub mod error;
pub mod fake_js;
pub mod regex_rules;

pub use error::AstError;
