//! BC4 (ATI1) decoding: one interpolated channel, replicated to R, G and B.

use super::alpha::decode_interpolated_alpha;
use bcn_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC4 block into 16 grey, fully opaque texels.
#[inline(always)]
pub fn decode_bc4_block(src: &[u8; 8]) -> Decoded4x4Block {
    let values = decode_interpolated_alpha(src);
    Decoded4x4Block::from_fn(|texel| {
        let value = values[texel];
        Color8888::new(value, value, value, 255)
    })
}

/// Slice wrapper around [`decode_bc4_block`].
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 8 bytes.
#[inline(always)]
pub fn decode_bc4_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 8] = src.get(..8)?.try_into().ok()?;
    Some(decode_bc4_block(block))
}
