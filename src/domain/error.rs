//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the algebraic rules.
/// These are independent of parsing, configuration and I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("division by zero polynomial")]
    DivisionByZero,

    #[error("leading coefficient {dividend} is not divisible by {divisor} in the coefficient ring")]
    InexactDivision { dividend: String, divisor: String },

    #[error("different moduli in the factor ring during {operation}")]
    ModulusMismatch { operation: &'static str },

    #[error("the inverse element does not exist in this factor ring: {element}")]
    NotInvertible { element: String },

    #[error("malformed navigation entry at {path}: {message}")]
    MalformedNavEntry { path: String, message: String },

    #[error("malformed navigation script: {message}")]
    MalformedNavScript { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
