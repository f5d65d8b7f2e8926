//! Builder for configuring and running texture decodes.

use crate::{decoded_image::DecodedImage, error::BcnDecodeError};
use bcn_decode::{
    decode, required_destination_size, required_source_size, DecodeError, DecodeSettings,
    DestinationFormat, EncodeFormat,
};
use bcn_decode_common::allocate::allocate_zeroed_align_64;
use tracing::debug;

/// Decode configuration builder.
///
/// Holds the channel order and row order of the output. Unset options fall back to
/// [`DecodeSettings::default`]: RGBA, top row first.
#[derive(Debug, Clone, Copy)]
pub struct BcnDecodeBuilder {
    destination_format: Option<DestinationFormat>,
    flip_vertically: Option<bool>,
}

impl BcnDecodeBuilder {
    /// Create a new decode builder.
    pub fn new() -> Self {
        Self {
            destination_format: None,
            flip_vertically: None,
        }
    }

    /// Set the byte order decoded texels are written in.
    pub fn destination_format(mut self, format: DestinationFormat) -> Self {
        self.destination_format = Some(format);
        self
    }

    /// Set whether rows are written bottom to top.
    ///
    /// Useful for APIs such as OpenGL that expect the first row in memory to be the
    /// bottom of the image.
    pub fn flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = Some(flip);
        self
    }

    /// The settings this builder decodes with.
    pub fn settings(&self) -> DecodeSettings {
        let defaults = DecodeSettings::default();
        DecodeSettings {
            destination_format: self
                .destination_format
                .unwrap_or(defaults.destination_format),
            flip_vertically: self.flip_vertically.unwrap_or(defaults.flip_vertically),
        }
    }

    /// Decode `src` into a caller provided buffer.
    ///
    /// # Parameters
    /// - `src`: The encoded texture data
    /// - `width`, `height`: Dimensions of the image in texels
    /// - `format`: Encoding of `src`
    /// - `output`: Buffer of at least `width * height * 4` bytes
    ///
    /// # Returns
    /// The number of bytes written to `output`.
    ///
    /// # Errors
    /// Returns [`BcnDecodeError::Decode`] if validation fails; `output` is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_decode_api::{BcnDecodeBuilder, EncodeFormat};
    ///
    /// let src = [0u8; 8]; // 1 BC4 block
    /// let mut output = [0u8; 4 * 4 * 4];
    /// let written = BcnDecodeBuilder::new().decode(&src, 4, 4, EncodeFormat::Bc4, &mut output)?;
    /// assert_eq!(written, 64);
    /// # Ok::<(), bcn_decode_api::BcnDecodeError>(())
    /// ```
    pub fn decode(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        format: EncodeFormat,
        output: &mut [u8],
    ) -> Result<usize, BcnDecodeError> {
        Ok(decode(output, src, width, height, format, self.settings())?)
    }

    /// Decode `src` into a newly allocated, 64 byte aligned buffer.
    ///
    /// # Errors
    /// - [`BcnDecodeError::Decode`] if validation fails. Nothing is allocated.
    /// - [`BcnDecodeError::AllocationFailed`] if the output buffer cannot be allocated.
    pub fn decode_allocating(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        format: EncodeFormat,
    ) -> Result<DecodedImage, BcnDecodeError> {
        // Same checks, in the same order, as the decode itself; before the allocation.
        let needed = required_source_size(width, height, format)?;
        if src.len() < needed {
            return Err(DecodeError::SourceBufferTooSmall {
                needed,
                actual: src.len(),
            }
            .into());
        }
        let size = required_destination_size(width, height)?;

        let mut pixels = allocate_zeroed_align_64(size).inspect_err(|error| {
            debug!(%error, size, "failed to allocate decode output");
        })?;
        let settings = self.settings();
        decode(pixels.as_mut_slice(), src, width, height, format, settings)?;

        Ok(DecodedImage::new(
            width,
            height,
            settings.destination_format,
            pixels,
        ))
    }
}

impl Default for BcnDecodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    const RED_BC1: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];

    #[test]
    fn defaults_match_core_defaults() {
        assert_eq!(BcnDecodeBuilder::new().settings(), DecodeSettings::default());
        assert_eq!(BcnDecodeBuilder::default().settings(), DecodeSettings::default());
    }

    #[rstest]
    #[case(DestinationFormat::Rgba, false)]
    #[case(DestinationFormat::Abgr, true)]
    fn setters_are_reflected_in_settings(
        #[case] destination_format: DestinationFormat,
        #[case] flip: bool,
    ) {
        let settings = BcnDecodeBuilder::new()
            .destination_format(destination_format)
            .flip_vertically(flip)
            .settings();
        assert_eq!(settings.destination_format, destination_format);
        assert_eq!(settings.flip_vertically, flip);
    }

    #[test]
    fn decode_into_caller_buffer() {
        let mut output = [0u8; 64];
        let written = BcnDecodeBuilder::new()
            .destination_format(DestinationFormat::Argb)
            .decode(&RED_BC1, 4, 4, EncodeFormat::Bc1, &mut output)
            .unwrap();
        assert_eq!(written, 64);
        assert!(output.chunks_exact(4).all(|texel| texel == [255, 255, 0, 0]));
    }

    #[test]
    fn decode_reports_core_errors() {
        let mut output = [0u8; 63];
        let result = BcnDecodeBuilder::new().decode(&RED_BC1, 4, 4, EncodeFormat::Bc1, &mut output);
        assert!(matches!(
            result,
            Err(BcnDecodeError::Decode(DecodeError::DestinationBufferTooSmall {
                needed: 64,
                actual: 63
            }))
        ));
    }

    #[test]
    fn decode_allocating_returns_image() {
        let image = BcnDecodeBuilder::new()
            .decode_allocating(&RED_BC1, 3, 2, EncodeFormat::Bc1)
            .unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.destination_format(), DestinationFormat::Rgba);
        assert_eq!(image.len(), 24);
        assert!(image
            .as_slice()
            .chunks_exact(4)
            .all(|texel| texel == [255, 0, 0, 255]));
    }

    #[rstest]
    #[case(EncodeFormat::Bc7, DecodeError::UnsupportedFormat { tag: 7 })]
    #[case(EncodeFormat::Bc3, DecodeError::SourceBufferTooSmall { needed: 16, actual: 8 })]
    fn decode_allocating_validates_first(#[case] format: EncodeFormat, #[case] expected: DecodeError) {
        let result = BcnDecodeBuilder::new().decode_allocating(&RED_BC1, 4, 4, format);
        assert!(matches!(result, Err(BcnDecodeError::Decode(error)) if error == expected));
    }

    #[test]
    fn decode_allocating_rejects_zero_dimensions() {
        let result = BcnDecodeBuilder::new().decode_allocating(&RED_BC1, 0, 4, EncodeFormat::Bc1);
        assert!(matches!(
            result,
            Err(BcnDecodeError::Decode(DecodeError::InvalidDimensions { width: 0, height: 4 }))
        ));
    }
}
