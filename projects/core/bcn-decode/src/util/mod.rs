//! Single block decoders for each supported format, and the palette helpers they share.

pub mod alpha;
pub mod bc1_decode;
pub mod bc2_decode;
pub mod bc3_decode;
pub mod bc4_decode;
pub mod bc5_decode;
pub mod color_block;

pub use bc1_decode::{decode_bc1_block, decode_bc1_block_from_slice};
pub use bc2_decode::{decode_bc2_block, decode_bc2_block_from_slice};
pub use bc3_decode::{decode_bc3_block, decode_bc3_block_from_slice};
pub use bc4_decode::{decode_bc4_block, decode_bc4_block_from_slice};
pub use bc5_decode::{decode_bc5_block, decode_bc5_block_from_slice};

/// Splits a 16 byte block into its leading and trailing 8 byte halves.
#[inline(always)]
pub(crate) fn split_block(src: &[u8; 16]) -> ([u8; 8], [u8; 8]) {
    (
        core::array::from_fn(|x| src[x]),
        core::array::from_fn(|x| src[x + 8]),
    )
}
