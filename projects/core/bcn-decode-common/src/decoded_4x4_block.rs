//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 texel blocks produced by the BCn block decoders.
//!
//! ## Overview
//!
//! BC (Block Compression) formats compress textures by dividing them into 4x4 texel blocks.
//! Each compressed block, regardless of format, decodes to exactly 16 [`Color8888`] texels
//! which are then scattered into the destination image.
//!
//! ## Usage
//!
//! ```
//! use bcn_decode_common::color_8888::Color8888;
//! use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//!
//! // Check if all pixels are identical
//! assert!(block.has_identical_pixels());
//! assert_eq!(block.get_pixel(3, 3), red_pixel);
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_decode_common::color_8888::Color8888;
    /// use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    #[inline]
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Builds a block by calling `f` with each texel index (`0..16`, row-major).
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> Color8888) -> Self {
        Self {
            pixels: core::array::from_fn(f),
        }
    }

    /// Gets the pixel at the specified coordinates.
    ///
    /// # Panics
    ///
    /// If `x >= 4` or `y >= 4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "texel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Returns one row of the block (4 texels, left to right).
    ///
    /// # Panics
    ///
    /// If `y >= 4`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Color8888] {
        &self.pixels[y * 4..y * 4 + 4]
    }

    /// Checks if all pixels in the block have the same color values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }

    /// Checks if all pixels in the block have the same alpha values
    #[inline]
    pub fn has_identical_alpha(&self) -> bool {
        let first_pixel_alpha = self.pixels[0].a;
        self.pixels.iter().all(|pixel| pixel.a == first_pixel_alpha)
    }
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::TRANSPARENT_BLACK)
    }
}
