//! Errors raised by the reverse transform.

#[derive(Debug, thiserror::Error)]
pub enum ReverseError {
    #[error("{file}: {source}")]
    Ast {
        file: String,
        #[source]
        source: dtsroll_ast::AstError,
    },
}
