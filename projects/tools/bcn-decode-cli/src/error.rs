use bcn_decode_api::{BcnDecodeError, DecodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] BcnDecodeError),
    #[error("Memory mapping failed for {path}: {message}")]
    MmapError { path: String, message: String },
    #[error("Path is not valid UTF-8: {0}")]
    InvalidPath(String),
}

impl From<DecodeError> for CliError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error.into())
    }
}
