//! Error types for the high level decode API.

use bcn_decode::DecodeError;
use bcn_decode_common::allocate::AllocateError;
use thiserror::Error;

/// Errors that can occur when decoding through [`BcnDecodeBuilder`].
///
/// [`BcnDecodeBuilder`]: crate::BcnDecodeBuilder
#[derive(Debug, Error)]
pub enum BcnDecodeError {
    /// The decode was rejected: bad dimensions, buffers too small, or an unsupported format.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Memory allocation failed.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}
