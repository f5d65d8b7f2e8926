//! BC1 (DXT1) decoding.
//!
//! A block is a single 8 byte colour block. When `c0 <= c1` the fourth palette entry
//! is transparent black, giving BC1 its 1-bit alpha.

use super::color_block::decode_color_block;
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC1 block into 16 texels.
///
/// # Example
///
/// ```
/// use bcn_decode::util::decode_bc1_block;
///
/// // c0 = c1 = white, every index 3: transparent black
/// let block = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
/// let decoded = decode_bc1_block(&block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// ```
#[inline(always)]
pub fn decode_bc1_block(src: &[u8; 8]) -> Decoded4x4Block {
    decode_color_block(src, true)
}

/// Slice wrapper around [`decode_bc1_block`].
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 8 bytes.
#[inline(always)]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 8] = src.get(..8)?.try_into().ok()?;
    Some(decode_bc1_block(block))
}
