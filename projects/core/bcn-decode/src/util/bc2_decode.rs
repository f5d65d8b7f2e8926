//! BC2 (DXT2/DXT3) decoding.
//!
//! Bytes 0..8 hold explicit 4-bit alpha, bytes 8..16 a colour block that always uses
//! the four colour palette.

use super::{alpha::decode_explicit_alpha, color_block::decode_color_block, split_block};
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC2 block into 16 texels.
#[inline(always)]
pub fn decode_bc2_block(src: &[u8; 16]) -> Decoded4x4Block {
    let (alpha_src, color_src) = split_block(src);
    let alpha = decode_explicit_alpha(&alpha_src);
    let mut block = decode_color_block(&color_src, false);
    for (pixel, alpha) in block.pixels.iter_mut().zip(alpha) {
        pixel.a = alpha;
    }
    block
}

/// Slice wrapper around [`decode_bc2_block`].
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than 16 bytes.
#[inline(always)]
pub fn decode_bc2_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; 16] = src.get(..16)?.try_into().ok()?;
    Some(decode_bc2_block(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn can_decode_bc2_block() {
        let block = [
            // Alpha: texel 0 = 0x0, texel 1 = 0xF, remainder 0x8
            0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88,
            // Colour: c0 = red, c1 = blue, all indices 0
            0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let decoded = decode_bc2_block(&block);
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(255, 0, 0, 0));
        assert_eq!(decoded.get_pixel(1, 0), Color8888::new(255, 0, 0, 255));
        assert_eq!(decoded.get_pixel(3, 3), Color8888::new(255, 0, 0, 136));
    }

    #[test]
    fn colour_never_uses_punch_through() {
        // c0 = black <= c1 = white, all indices 3
        let mut block = [0xFFu8; 16];
        block[8..12].copy_from_slice(&[0x00, 0x00, 0xFF, 0xFF]);
        let decoded = decode_bc2_block(&block);
        assert!(decoded
            .pixels
            .iter()
            .all(|&pixel| pixel == Color8888::new(170, 170, 170, 255)));
    }

    #[test]
    fn from_slice_rejects_short_input() {
        assert!(decode_bc2_block_from_slice(&[0u8; 15]).is_none());
        assert!(decode_bc2_block_from_slice(&[0u8; 16]).is_some());
    }
}
