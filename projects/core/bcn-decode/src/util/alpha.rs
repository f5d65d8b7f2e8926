//! Single channel blocks: the explicit 4-bit alpha of BC2 and the interpolated
//! 8-bit channel used by BC3 alpha, BC4 and both halves of BC5.

use bcn_decode_common::expand::expand_4;

/// Decodes BC2's explicit alpha: sixteen 4-bit values, texel `n` stored in byte `n / 2`,
/// low nibble first. Each value is expanded to 8 bits by bit replication (`x * 17`).
#[inline(always)]
pub fn decode_explicit_alpha(src: &[u8; 8]) -> [u8; 16] {
    core::array::from_fn(|texel| {
        expand_4(src[texel / 2] >> ((texel % 2) * 4))
    })
}

/// Builds the 8 entry lookup table of an interpolated channel from its two endpoints.
///
/// - `a0 > a1`: entries 2..=7 are `((8 - i) * a0 + (i - 1) * a1) / 7`.
/// - `a0 <= a1`: entries 2..=5 are `((6 - i) * a0 + (i - 1) * a1) / 5`, entry 6 is 0
///   and entry 7 is 255.
#[inline(always)]
pub fn interpolated_alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let (a0w, a1w) = (a0 as u32, a1 as u32);
    let mut palette = [0u8; 8];
    palette[0] = a0;
    palette[1] = a1;

    if a0 > a1 {
        for i in 2..8u32 {
            palette[i as usize] = (((8 - i) * a0w + (i - 1) * a1w) / 7) as u8;
        }
    } else {
        for i in 2..6u32 {
            palette[i as usize] = (((6 - i) * a0w + (i - 1) * a1w) / 5) as u8;
        }
        palette[6] = 0;
        palette[7] = 255;
    }

    palette
}

/// Decodes an 8 byte interpolated channel block into 16 values, row-major.
///
/// Bytes 0 and 1 are the endpoints; bytes 2..8 form a 48-bit little endian integer
/// holding sixteen 3-bit indices, texel 0 in the lowest bits.
#[inline(always)]
pub fn decode_interpolated_alpha(src: &[u8; 8]) -> [u8; 16] {
    let palette = interpolated_alpha_palette(src[0], src[1]);
    let indices = u64::from_le_bytes([src[2], src[3], src[4], src[5], src[6], src[7], 0, 0]);

    core::array::from_fn(|texel| palette[((indices >> (texel * 3)) & 0b111) as usize])
}
