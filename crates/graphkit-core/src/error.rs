use thiserror::Error;

/// Errors shared by every `graphkit-*` crate.
///
/// Variants split along how they surface, not along which crate raised
/// them: `Input*` variants are returned synchronously to the immediate
/// caller; there is no "runtime skip" variant here because those surface
/// as `tracing::warn!` events instead of `Err` (see the executor and
/// validator modules).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid IRI {0:?}: IRIs must not contain whitespace")]
    InvalidIri(String),

    #[error("literal cannot have both a datatype and a language tag")]
    LiteralDatatypeLanguageConflict,

    #[error("unknown prefix {0:?}")]
    UnknownPrefix(String),

    #[error("unexpected token {found:?}, expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(String),

    #[error("unsupported query form: {0}")]
    UnsupportedQueryForm(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
