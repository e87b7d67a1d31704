use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unsupported operation: method '{0}' does not exist")]
    #[diagnostic(code(livestream::unsupported_operation))]
    UnsupportedOperation(String),

    #[error("Setter '{0}' expects exactly one argument")]
    #[diagnostic(code(livestream::setter_arity))]
    SetterArity(String),

    #[error("Invalid timestamp: '{0}'")]
    #[diagnostic(code(livestream::invalid_timestamp))]
    InvalidTimestamp(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(livestream::serialization))]
    Serialization(String),
}

// Surface body-encoding failures as our own serialization error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ApiResult<T> = Result<T, Error>;

/// Helper to create unsupported operation errors
pub fn unsupported_operation(method: &str) -> Error {
    Error::UnsupportedOperation(method.to_string())
}

/// Helper to create invalid timestamp errors
pub fn invalid_timestamp(input: &str) -> Error {
    Error::InvalidTimestamp(input.to_string())
}
