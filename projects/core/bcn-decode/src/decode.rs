//! Whole image decoding entry points.

use crate::error::DecodeError;
use crate::format::{DecodeSettings, DestinationFormat, EncodeFormat, ImageDescriptor};
use crate::tiler::decode_image;
use tracing::{debug, trace};

/// Number of source bytes needed to decode a `width` x `height` image of `format`.
///
/// Block compressed formats need `ceil(width / 4) * ceil(height / 4) * block_size` bytes;
/// [`EncodeFormat::Raw`] needs `width * height * 4`.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] for BC6 and BC7.
/// - [`DecodeError::InvalidDimensions`] if either dimension is zero or the size overflows.
pub fn required_source_size(
    width: u32,
    height: u32,
    format: EncodeFormat,
) -> Result<usize, DecodeError> {
    if !format.is_supported() {
        return Err(DecodeError::unsupported(format));
    }
    ImageDescriptor::new(width, height)?.source_size(format)
}

/// Number of destination bytes a decoded `width` x `height` image occupies
/// (`width * height * 4`).
///
/// # Errors
///
/// [`DecodeError::InvalidDimensions`] if either dimension is zero or the size overflows.
pub fn required_destination_size(width: u32, height: u32) -> Result<usize, DecodeError> {
    Ok(ImageDescriptor::new(width, height)?.destination_size())
}

/// Decodes `src`, a `width` x `height` image encoded as `format`, into `dst`.
///
/// Texels are written row by row as 4 bytes each, in the channel order of
/// `settings.destination_format`, top to bottom unless `settings.flip_vertically` is set.
/// Only the first `width * height * 4` bytes of `dst` are written; any bytes past that
/// are left untouched. Extra trailing bytes in `src` are ignored.
///
/// # Returns
///
/// The number of bytes written to `dst`.
///
/// # Errors
///
/// Checked in this order, before anything is written:
///
/// 1. [`DecodeError::UnsupportedFormat`] if `format` is BC6 or BC7.
/// 2. [`DecodeError::InvalidDimensions`] if `width` or `height` is zero.
/// 3. [`DecodeError::SourceBufferTooSmall`] if `src` is shorter than
///    [`required_source_size`].
/// 4. [`DecodeError::DestinationBufferTooSmall`] if `dst` is shorter than
///    [`required_destination_size`].
pub fn decode(
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    format: EncodeFormat,
    settings: DecodeSettings,
) -> Result<usize, DecodeError> {
    let image = validate(dst.len(), src.len(), width, height, format).inspect_err(|error| {
        debug!(%error, ?format, width, height, "rejected decode request");
    })?;

    let source_size = image.source_size(format)?;
    let destination_size = image.destination_size();
    let dst = &mut dst[..destination_size];
    let src = &src[..source_size];

    decode_image(dst, src, &image, format, settings)?;

    trace!(
        ?format,
        width,
        height,
        destination_format = ?settings.destination_format,
        flip_vertically = settings.flip_vertically,
        written = destination_size,
        "decoded image"
    );
    Ok(destination_size)
}

/// Variant of [`decode`] taking numeric format tags, for callers crossing an FFI or
/// file format boundary.
///
/// `format_tag` follows [`EncodeFormat`]'s discriminants and `destination_format_tag`
/// follows [`DestinationFormat`]'s.
///
/// # Errors
///
/// [`DecodeError::UnsupportedFormat`] for an unknown, BC6 or BC7 `format_tag`, and
/// [`DecodeError::UnknownDestinationFormat`] for an unknown `destination_format_tag`.
/// The format tag is checked first. Otherwise, as [`decode`].
pub fn decode_with_format_tags(
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    format_tag: u32,
    destination_format_tag: u32,
    flip_vertically: bool,
) -> Result<usize, DecodeError> {
    let format = EncodeFormat::try_from(format_tag)
        .and_then(|format| {
            if format.is_supported() {
                Ok(format)
            } else {
                Err(DecodeError::unsupported(format))
            }
        })
        .inspect_err(|error| {
            debug!(%error, format_tag, "rejected decode request");
        })?;
    let destination_format =
        DestinationFormat::try_from(destination_format_tag).inspect_err(|error| {
            debug!(%error, destination_format_tag, "rejected decode request");
        })?;

    decode(
        dst,
        src,
        width,
        height,
        format,
        DecodeSettings {
            destination_format,
            flip_vertically,
        },
    )
}

fn validate(
    dst_len: usize,
    src_len: usize,
    width: u32,
    height: u32,
    format: EncodeFormat,
) -> Result<ImageDescriptor, DecodeError> {
    if !format.is_supported() {
        return Err(DecodeError::unsupported(format));
    }

    let image = ImageDescriptor::new(width, height)?;

    let needed = image.source_size(format)?;
    if src_len < needed {
        return Err(DecodeError::SourceBufferTooSmall {
            needed,
            actual: src_len,
        });
    }

    let needed = image.destination_size();
    if dst_len < needed {
        return Err(DecodeError::DestinationBufferTooSmall {
            needed,
            actual: dst_len,
        });
    }

    Ok(image)
}
