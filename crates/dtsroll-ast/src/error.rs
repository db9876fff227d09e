//! Errors raised while parsing declaration or fake-JS module text.

#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("{file}: failed to parse as a module: {details}")]
    Parse { file: String, details: String },
}
