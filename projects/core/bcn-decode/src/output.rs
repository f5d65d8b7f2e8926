//! Writing decoded texels into the destination image.

use crate::format::DestinationFormat;
use bcn_decode_common::color_8888::Color8888;

/// Returns the 4 bytes of `pixel` in the byte order of `format`.
#[inline(always)]
pub fn arrange(pixel: Color8888, format: DestinationFormat) -> [u8; 4] {
    let Color8888 { r, g, b, a } = pixel;
    match format {
        DestinationFormat::Rgba => [r, g, b, a],
        DestinationFormat::Bgra => [b, g, r, a],
        DestinationFormat::Argb => [a, r, g, b],
        DestinationFormat::Abgr => [a, b, g, r],
    }
}

/// Writes one texel to the first 4 bytes of `dst`, in the byte order of `format`.
///
/// # Panics
///
/// If `dst` is shorter than 4 bytes.
#[inline(always)]
pub fn write_texel(dst: &mut [u8], pixel: Color8888, format: DestinationFormat) {
    dst[..4].copy_from_slice(&arrange(pixel, format));
}

/// Writes `texels` left to right into the start of `row`, in the byte order of `format`.
///
/// Only `min(texels.len(), row.len() / 4)` texels are written; the remainder are clipped.
#[inline(always)]
pub fn write_texels(row: &mut [u8], texels: &[Color8888], format: DestinationFormat) {
    for (dst, &pixel) in row.chunks_exact_mut(4).zip(texels) {
        write_texel(dst, pixel, format);
    }
}

/// Maps image row `y` to the row it is stored at in the destination.
#[inline(always)]
pub fn destination_row(y: usize, height: usize, flip_vertically: bool) -> usize {
    if flip_vertically {
        height - 1 - y
    } else {
        y
    }
}
