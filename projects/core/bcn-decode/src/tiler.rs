//! Scatters decoded blocks (or raw rows) across the destination image.
//!
//! The destination is split into bands of whole output rows, one band per block row
//! (or per texel row for raw input). Bands are disjoint, so with the `rayon` feature
//! they are filled on multiple threads; otherwise they are filled in order. Both paths
//! produce identical output.
//!
//! When flipping, bands are taken from the end of the destination, so the first block
//! row lands in the last output rows.

use crate::error::DecodeError;
use crate::format::{DecodeSettings, EncodeFormat, ImageDescriptor, BLOCK_DIMENSION};
use crate::output::{destination_row, write_texel, write_texels};
use crate::util::{
    decode_bc1_block, decode_bc2_block, decode_bc3_block, decode_bc4_block, decode_bc5_block,
};
use bcn_decode_common::color_8888::Color8888;
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes an image of any supported format into `dst`.
///
/// `dst` must be exactly [`ImageDescriptor::destination_size`] bytes, and `src` exactly
/// [`ImageDescriptor::source_size`] bytes for `format`.
///
/// # Errors
///
/// [`DecodeError::UnsupportedFormat`] for BC6 and BC7, before anything is written.
pub(crate) fn decode_image(
    dst: &mut [u8],
    src: &[u8],
    image: &ImageDescriptor,
    format: EncodeFormat,
    settings: DecodeSettings,
) -> Result<(), DecodeError> {
    match format {
        EncodeFormat::Raw => copy_raw(dst, src, image, settings),
        EncodeFormat::Bc1 => decode_blocks(dst, src, image, settings, decode_bc1_block),
        EncodeFormat::Bc2 => decode_blocks(dst, src, image, settings, decode_bc2_block),
        EncodeFormat::Bc3 => decode_blocks(dst, src, image, settings, decode_bc3_block),
        EncodeFormat::Bc4 => decode_blocks(dst, src, image, settings, decode_bc4_block),
        EncodeFormat::Bc5 => decode_blocks(dst, src, image, settings, decode_bc5_block),
        EncodeFormat::Bc6 | EncodeFormat::Bc7 => return Err(DecodeError::unsupported(format)),
    }
    Ok(())
}

/// Decodes every `N` byte block of `src` with `decode_block` and places it on the grid.
fn decode_blocks<const N: usize>(
    dst: &mut [u8],
    src: &[u8],
    image: &ImageDescriptor,
    settings: DecodeSettings,
    decode_block: fn(&[u8; N]) -> Decoded4x4Block,
) {
    let row_bytes = image.row_bytes();
    let band_bytes = row_bytes * BLOCK_DIMENSION;
    let src_row_bytes = image.blocks_wide() * N;

    for_each_band(
        dst,
        band_bytes,
        src,
        src_row_bytes,
        settings.flip_vertically,
        |band, blocks| {
            let rows_in_band = band.len() / row_bytes;
            for (block_x, block_src) in blocks.chunks_exact(N).enumerate() {
                let block_src: [u8; N] = core::array::from_fn(|i| block_src[i]);
                let block = decode_block(&block_src);
                let x_offset = block_x * BLOCK_DIMENSION * 4;
                for y in 0..rows_in_band {
                    let row = destination_row(y, rows_in_band, settings.flip_vertically);
                    let start = row * row_bytes + x_offset;
                    let end = (row + 1) * row_bytes;
                    write_texels(
                        &mut band[start..end],
                        block.row(y),
                        settings.destination_format,
                    );
                }
            }
        },
    );
}

/// Copies uncompressed RGBA8 rows, reordering channels and flipping as requested.
///
/// `dst` and `src` must both be exactly [`ImageDescriptor::destination_size`] bytes.
fn copy_raw(dst: &mut [u8], src: &[u8], image: &ImageDescriptor, settings: DecodeSettings) {
    let row_bytes = image.row_bytes();
    for_each_band(
        dst,
        row_bytes,
        src,
        row_bytes,
        settings.flip_vertically,
        |dst_row, src_row| {
            for (dst, src) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                let pixel = Color8888::from_rgba_bytes([src[0], src[1], src[2], src[3]]);
                write_texel(dst, pixel, settings.destination_format);
            }
        },
    );
}

/// Pairs each destination band with its source band and runs `f` on every pair.
///
/// With `flip`, destination bands are taken from the end. The last destination band
/// may be shorter than `band_bytes`.
#[cfg(not(feature = "rayon"))]
fn for_each_band<F>(
    dst: &mut [u8],
    band_bytes: usize,
    src: &[u8],
    src_band_bytes: usize,
    flip: bool,
    f: F,
) where
    F: Fn(&mut [u8], &[u8]),
{
    let src_bands = src.chunks_exact(src_band_bytes);
    if flip {
        dst.rchunks_mut(band_bytes)
            .zip(src_bands)
            .for_each(|(band, src)| f(band, src));
    } else {
        dst.chunks_mut(band_bytes)
            .zip(src_bands)
            .for_each(|(band, src)| f(band, src));
    }
}

#[cfg(feature = "rayon")]
fn for_each_band<F>(
    dst: &mut [u8],
    band_bytes: usize,
    src: &[u8],
    src_band_bytes: usize,
    flip: bool,
    f: F,
) where
    F: Fn(&mut [u8], &[u8]) + Sync + Send,
{
    use rayon::prelude::*;

    let src_bands = src.par_chunks_exact(src_band_bytes);
    if flip {
        dst.par_rchunks_mut(band_bytes)
            .zip(src_bands)
            .for_each(|(band, src)| f(band, src));
    } else {
        dst.par_chunks_mut(band_bytes)
            .zip(src_bands)
            .for_each(|(band, src)| f(band, src));
    }
}
