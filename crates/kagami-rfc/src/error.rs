use thiserror::Error;

/// Crate-level error wrapper.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    Parse(#[from] crate::rfc::syntax::ParseError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    CoreError(#[from] kagami_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
