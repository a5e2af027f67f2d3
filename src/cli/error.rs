//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Parse { .. }
                    | ApplicationError::ReducibleModulus { .. }
                    | ApplicationError::DegreeTooLarge { .. }
                    | ApplicationError::ElementTooLarge { .. } => crate::exitcode::DATAERR,
                    ApplicationError::UnsupportedModulus(_) => crate::exitcode::USAGE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OutputExists { .. } => crate::exitcode::CANTCREAT,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                    ApplicationError::SearchTooLarge { .. } => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Domain(domain) => match domain {
                        DomainError::ModulusMismatch { .. } => crate::exitcode::SOFTWARE,
                        DomainError::DivisionByZero
                        | DomainError::InexactDivision { .. }
                        | DomainError::NotInvertible { .. }
                        | DomainError::MalformedNavEntry { .. }
                        | DomainError::MalformedNavScript { .. } => crate::exitcode::DATAERR,
                    },
                },
            },
        }
    }
}
