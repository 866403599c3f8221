use crate::SpanKind;
use thiserror::Error;

/// Conditions raised while turning named parameters into positional values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A parameter of the statement has no value bound.
    #[error("no value bound to parameter `{0}`")]
    MissingBinding(String),

    /// Only raised by strict validation, the scanner itself tolerates it.
    #[error("unterminated {kind} starting at byte {offset}")]
    MalformedInput { kind: SpanKind, offset: usize },
}
