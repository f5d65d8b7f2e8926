//! Error types for decode operations.

use crate::format::EncodeFormat;
use thiserror::Error;

/// Errors that can occur while decoding a texture.
///
/// All of these are detected before any byte of the destination is written, with the
/// exception of errors surfaced by [`decode_block`] for callers driving blocks manually.
/// On any error the destination contents must be treated as undefined.
///
/// [`decode_block`]: crate::block::decode_block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Width or height is zero, or the image is too large to address.
    #[error("Invalid image dimensions: {width}x{height}. Width and height must be positive and the image must fit in memory.")]
    InvalidDimensions {
        /// The requested width in texels
        width: u32,
        /// The requested height in texels
        height: u32,
    },

    /// The source buffer holds fewer bytes than the image needs.
    #[error("Source buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    SourceBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The destination buffer cannot hold `width * height * 4` bytes.
    #[error("Destination buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    DestinationBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// BC6H, BC7 or an unrecognised format tag.
    #[error("Unsupported encode format (tag {tag}). Only Raw and BC1-BC5 can be decoded.")]
    UnsupportedFormat {
        /// Numeric tag of the rejected format
        tag: u32,
    },

    /// An unrecognised destination channel order tag.
    #[error("Unknown destination format (tag {tag}). Expected 1 (RGBA), 2 (BGRA), 3 (ARGB) or 4 (ABGR).")]
    UnknownDestinationFormat {
        /// Numeric tag of the rejected destination format
        tag: u32,
    },

    /// A compressed block slice does not match the size its format prescribes.
    #[error("Invalid block size for {format:?}: need {needed} bytes, got {actual} bytes.")]
    InvalidBlockSize {
        /// Format of the block
        format: EncodeFormat,
        /// The size the format prescribes
        needed: usize,
        /// The size of the slice that was passed
        actual: usize,
    },

    /// Block level decoding was requested for a format that is not block compressed.
    #[error("{0:?} is not a block compressed format.")]
    NotBlockCompressed(EncodeFormat),
}

impl DecodeError {
    /// Creates an [`DecodeError::UnsupportedFormat`] for a known format.
    #[inline]
    pub const fn unsupported(format: EncodeFormat) -> Self {
        Self::UnsupportedFormat { tag: format.tag() }
    }
}
