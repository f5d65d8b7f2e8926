//! BC5 (ATI2) decoding: two independent interpolated channels.
//!
//! Bytes 0..8 decode to red, bytes 8..16 to green. Blue is written as 0 and alpha as 255.

use super::{alpha::decode_interpolated_alpha, split_block};
use bcn_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC5 block into 16 texels.
#[inline(always)]
pub fn decode_bc5_block(src: &[u8; 16]) -> Decoded4x4Block {
    let (red_src, green_src) = split_block(src);
    let red = decode_interpolated_alpha(&red_src);
    let green = decode_interpolated_alpha(&green_src);
    Decoded4x4Block::from_fn(|texel| Color8888::new(red[texel], green[texel], 0, 255))
}

/// Slice wrapper around [`decode_bc5_block`].
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 16 bytes.
#[inline(always)]
pub fn decode_bc5_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 16] = src.get(..16)?.try_into().ok()?;
    Some(decode_bc5_block(block))
}
