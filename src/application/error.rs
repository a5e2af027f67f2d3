//! Application-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot parse polynomial '{input}': {message}")]
    Parse { input: String, message: String },

    #[error("modulus {0} is not a supported prime")]
    UnsupportedModulus(u32),

    #[error("{poly} is reducible over Z{prime}; the factor ring modulus must be irreducible")]
    ReducibleModulus { poly: String, prime: u32 },

    #[error("irreducibility search needs {candidates} trial divisors, limit is {limit}")]
    SearchTooLarge { candidates: u64, limit: u64 },

    #[error("result degree {degree} exceeds the maximum of {max}")]
    DegreeTooLarge { degree: u64, max: usize },

    #[error("ring element has {given} coefficients, at most {max} allowed")]
    ElementTooLarge { given: usize, max: usize },

    #[error("output file exists (use --force to overwrite): {}", path.display())]
    OutputExists { path: PathBuf },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
