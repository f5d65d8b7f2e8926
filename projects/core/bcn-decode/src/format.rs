//! Format tags, decode settings and image geometry.

use crate::error::DecodeError;
use derive_enum_all_values::AllValues;

/// Number of bytes per texel of [`EncodeFormat::Raw`] input, and of every decoded output.
pub const BYTES_PER_TEXEL: usize = 4;

/// Width and height of a compressed block, in texels.
pub const BLOCK_DIMENSION: usize = 4;

/// The encoding of the source texture data.
///
/// The numeric values are the format tags accepted by
/// [`decode_with_format_tags`](crate::decode::decode_with_format_tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum EncodeFormat {
    /// Uncompressed RGBA8: 4 bytes per texel, in R, G, B, A order, rows top to bottom.
    Raw = 0,
    /// BC1 (DXT1): 565 colour, optional 1-bit alpha. 8 bytes per block.
    Bc1 = 1,
    /// BC2 (DXT3): 565 colour, explicit 4-bit alpha. 16 bytes per block.
    Bc2 = 2,
    /// BC3 (DXT5): 565 colour, interpolated 8-bit alpha. 16 bytes per block.
    Bc3 = 3,
    /// BC4 (ATI1): single interpolated 8-bit channel. 8 bytes per block.
    Bc4 = 4,
    /// BC5 (ATI2): two interpolated 8-bit channels. 16 bytes per block.
    Bc5 = 5,
    /// BC6H: HDR colour. Not supported.
    Bc6 = 6,
    /// BC7: high quality colour + alpha. Not supported.
    Bc7 = 7,
}

impl EncodeFormat {
    /// Returns the numeric tag of this format.
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Size in bytes of one compressed 4x4 block, or [`None`] for [`EncodeFormat::Raw`].
    #[inline]
    pub const fn block_size(self) -> Option<usize> {
        match self {
            EncodeFormat::Raw => None,
            EncodeFormat::Bc1 | EncodeFormat::Bc4 => Some(8),
            EncodeFormat::Bc2
            | EncodeFormat::Bc3
            | EncodeFormat::Bc5
            | EncodeFormat::Bc6
            | EncodeFormat::Bc7 => Some(16),
        }
    }

    /// Number of meaningful channels stored by this format.
    #[inline]
    pub const fn channel_count(self) -> usize {
        match self {
            EncodeFormat::Bc4 => 1,
            EncodeFormat::Bc5 => 2,
            EncodeFormat::Bc6 => 3,
            EncodeFormat::Raw
            | EncodeFormat::Bc1
            | EncodeFormat::Bc2
            | EncodeFormat::Bc3
            | EncodeFormat::Bc7 => 4,
        }
    }

    /// Whether the format stores data in 4x4 compressed blocks.
    #[inline]
    pub const fn is_block_compressed(self) -> bool {
        self.block_size().is_some()
    }

    /// Whether this crate can decode the format.
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, EncodeFormat::Bc6 | EncodeFormat::Bc7)
    }

    /// Looks up a format by its common name (case insensitive).
    ///
    /// Accepts `raw`, `bc1`..`bc7`, and the legacy names `dxt1`, `dxt3`, `dxt5`,
    /// `ati1`, `ati2`.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, EncodeFormat); 13] = [
            ("raw", EncodeFormat::Raw),
            ("bc1", EncodeFormat::Bc1),
            ("dxt1", EncodeFormat::Bc1),
            ("bc2", EncodeFormat::Bc2),
            ("dxt3", EncodeFormat::Bc2),
            ("bc3", EncodeFormat::Bc3),
            ("dxt5", EncodeFormat::Bc3),
            ("bc4", EncodeFormat::Bc4),
            ("ati1", EncodeFormat::Bc4),
            ("bc5", EncodeFormat::Bc5),
            ("ati2", EncodeFormat::Bc5),
            ("bc6", EncodeFormat::Bc6),
            ("bc7", EncodeFormat::Bc7),
        ];
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, format)| format)
    }
}

impl TryFrom<u32> for EncodeFormat {
    type Error = DecodeError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        EncodeFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.tag() == tag)
            .ok_or(DecodeError::UnsupportedFormat { tag })
    }
}

/// The byte order decoded texels are written in.
///
/// The numeric values are the tags accepted by
/// [`decode_with_format_tags`](crate::decode::decode_with_format_tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
#[repr(u32)]
pub enum DestinationFormat {
    /// Red, green, blue, alpha.
    #[default]
    Rgba = 1,
    /// Blue, green, red, alpha.
    Bgra = 2,
    /// Alpha, red, green, blue.
    Argb = 3,
    /// Alpha, blue, green, red.
    Abgr = 4,
}

impl DestinationFormat {
    /// Returns the numeric tag of this destination format.
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Looks up a destination format by name (case insensitive), e.g. `bgra`.
    pub fn from_name(name: &str) -> Option<Self> {
        DestinationFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name of the channel order.
    pub const fn name(self) -> &'static str {
        match self {
            DestinationFormat::Rgba => "rgba",
            DestinationFormat::Bgra => "bgra",
            DestinationFormat::Argb => "argb",
            DestinationFormat::Abgr => "abgr",
        }
    }
}

impl TryFrom<u32> for DestinationFormat {
    type Error = DecodeError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        DestinationFormat::all_values()
            .iter()
            .copied()
            .find(|format| format.tag() == tag)
            .ok_or(DecodeError::UnknownDestinationFormat { tag })
    }
}

/// Settings controlling how decoded texels are written to the destination.
///
/// Neither setting affects decoding itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecodeSettings {
    /// Byte order of each written texel.
    pub destination_format: DestinationFormat,

    /// Write rows bottom to top instead of top to bottom.
    pub flip_vertically: bool,
}

/// Dimensions of an image, and of the grid of 4x4 blocks covering it.
///
/// Construction validates that both dimensions are positive, and that the
/// decoded image size fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    width: usize,
    height: usize,
}

impl ImageDescriptor {
    /// Creates a descriptor for a `width` x `height` texel image.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidDimensions`] if either dimension is zero, or if
    /// `width * height * 4` overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, DecodeError> {
        let invalid = DecodeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let descriptor = Self {
            width: width as usize,
            height: height as usize,
        };

        // Every size derived later is bounded by these two.
        descriptor
            .width
            .checked_mul(descriptor.height)
            .and_then(|texels| texels.checked_mul(BYTES_PER_TEXEL))
            .ok_or(invalid)?;
        descriptor
            .blocks_wide()
            .checked_mul(descriptor.blocks_high())
            .and_then(|blocks| blocks.checked_mul(16))
            .ok_or(invalid)?;

        Ok(descriptor)
    }

    /// Width of the image in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of block columns, `ceil(width / 4)`.
    #[inline]
    pub fn blocks_wide(&self) -> usize {
        self.width.div_ceil(BLOCK_DIMENSION)
    }

    /// Number of block rows, `ceil(height / 4)`.
    #[inline]
    pub fn blocks_high(&self) -> usize {
        self.height.div_ceil(BLOCK_DIMENSION)
    }

    /// Total number of blocks covering the image.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks_wide() * self.blocks_high()
    }

    /// Bytes in one decoded row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * BYTES_PER_TEXEL
    }

    /// Bytes in the whole decoded image, `width * height * 4`.
    #[inline]
    pub fn destination_size(&self) -> usize {
        self.row_bytes() * self.height
    }

    /// Bytes of source data `format` needs to cover this image.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnsupportedFormat`] for BC6 and BC7.
    pub fn source_size(&self, format: EncodeFormat) -> Result<usize, DecodeError> {
        if !format.is_supported() {
            return Err(DecodeError::unsupported(format));
        }

        Ok(match format.block_size() {
            Some(block_size) => self.block_count() * block_size,
            None => self.destination_size(),
        })
    }
}
