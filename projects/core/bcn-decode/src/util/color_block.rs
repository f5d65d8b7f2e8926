//! The 8 byte colour block shared by BC1, BC2 and BC3.
//!
//! Layout: two little endian RGB565 endpoints `c0`, `c1`, followed by a little endian
//! `u32` holding sixteen 2-bit palette indices, texel 0 in the lowest bits.
//!
//! Endpoints are expanded to 8 bits per channel by bit replication before the
//! intermediate palette entries are computed with truncating integer division.

use bcn_decode_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Builds the 4 entry palette of a colour block.
///
/// If `allow_punch_through` is set and `c0 <= c1` (compared as raw `u16`), the palette
/// is `c0`, `c1`, their midpoint and transparent black. Otherwise the two remaining
/// entries are the 1/3 and 2/3 interpolants. All opaque entries have alpha 255.
#[inline(always)]
pub fn color_palette(c0: Color565, c1: Color565, allow_punch_through: bool) -> [Color8888; 4] {
    let (r0, g0, b0) = c0.expand();
    let (r1, g1, b1) = c1.expand();
    let (r0, g0, b0) = (r0 as u32, g0 as u32, b0 as u32);
    let (r1, g1, b1) = (r1 as u32, g1 as u32, b1 as u32);

    let mut palette = [Color8888::TRANSPARENT_BLACK; 4];
    palette[0] = c0.to_color_8888();
    palette[1] = c1.to_color_8888();

    if allow_punch_through && !c0.greater_than(&c1) {
        palette[2] = Color8888::new(
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        );
        // palette[3] stays transparent black
    } else {
        palette[2] = Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        );
        palette[3] = Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        );
    }

    palette
}

/// Decodes an 8 byte colour block into 16 texels.
///
/// BC1 passes `allow_punch_through = true`; BC2 and BC3 always use the four colour palette.
#[inline(always)]
pub fn decode_color_block(src: &[u8; 8], allow_punch_through: bool) -> Decoded4x4Block {
    let c0 = Color565::from_le_bytes(&src[0..2]);
    let c1 = Color565::from_le_bytes(&src[2..4]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);
    let palette = color_palette(c0, c1, allow_punch_through);

    Decoded4x4Block::from_fn(|texel| palette[((indices >> (texel * 2)) & 0b11) as usize])
}
