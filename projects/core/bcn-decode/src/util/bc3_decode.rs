//! BC3 (DXT4/DXT5) decoding.
//!
//! Bytes 0..8 hold an interpolated alpha block, bytes 8..16 a colour block that always
//! uses the four colour palette.

use super::{alpha::decode_interpolated_alpha, color_block::decode_color_block, split_block};
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC3 block into 16 texels.
#[inline(always)]
pub fn decode_bc3_block(src: &[u8; 16]) -> Decoded4x4Block {
    let (alpha_src, color_src) = split_block(src);
    let alpha = decode_interpolated_alpha(&alpha_src);
    let mut block = decode_color_block(&color_src, false);
    for (pixel, alpha) in block.pixels.iter_mut().zip(alpha) {
        pixel.a = alpha;
    }
    block
}

/// Slice wrapper around [`decode_bc3_block`].
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 16 bytes.
#[inline(always)]
pub fn decode_bc3_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 16] = src.get(..16)?.try_into().ok()?;
    Some(decode_bc3_block(block))
}
