//! Errors raised by the forward transform (spec §4.4, §7 "Forward-transform invariants").

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("{file}: {source}")]
    Ast {
        file: String,
        #[source]
        source: dtsroll_ast::AstError,
    },

    #[error("{file}: invalid dynamic type-import surface: {surface}")]
    InvalidDynamicImport { file: String, surface: String },
}
