//! Owned result of an allocating decode.

use bcn_decode::DestinationFormat;
use core::fmt;
use safe_allocator_api::RawAlloc;

/// A decoded image in a 64 byte aligned buffer.
///
/// Holds `width * height` texels of 4 bytes each, rows stored contiguously in the row order
/// and channel order the decode was configured with.
pub struct DecodedImage {
    width: u32,
    height: u32,
    destination_format: DestinationFormat,
    pixels: RawAlloc,
}

impl DecodedImage {
    /// Wraps a buffer of exactly `width * height * 4` decoded bytes.
    pub(crate) fn new(
        width: u32,
        height: u32,
        destination_format: DestinationFormat,
        pixels: RawAlloc,
    ) -> Self {
        Self {
            width,
            height,
            destination_format,
            pixels,
        }
    }

    /// Width of the image in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel order of each texel.
    pub fn destination_format(&self) -> DestinationFormat {
        self.destination_format
    }

    /// Number of bytes in a single row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// All decoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        self.pixels.as_slice()
    }

    /// All decoded bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.pixels.as_mut_slice()
    }

    /// The bytes of row `y`, as stored in memory (row 0 is the bottom of the image
    /// if the decode was flipped).
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} is outside of a {} row image", self.height);
        let row_bytes = self.row_bytes();
        let start = y as usize * row_bytes;
        &self.as_slice()[start..start + row_bytes]
    }

    /// Total size in bytes, `width * height * 4`.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always `false`; images have at least one texel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("destination_format", &self.destination_format)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    // 8x8, blocks: red, green / blue, white
    fn quad_image(flip: bool) -> DecodedImage {
        let src = [
            [0x00, 0xF8, 0, 0, 0, 0, 0, 0],
            [0xE0, 0x07, 0, 0, 0, 0, 0, 0],
            [0x1F, 0x00, 0, 0, 0, 0, 0, 0],
            [0xFF, 0xFF, 0, 0, 0, 0, 0, 0],
        ]
        .concat();
        BcnDecodeBuilder::new()
            .flip_vertically(flip)
            .decode_allocating(&src, 8, 8, EncodeFormat::Bc1)
            .unwrap()
    }

    #[rstest]
    #[case(false, 0, [255, 0, 0, 255], [0, 255, 0, 255])]
    #[case(false, 7, [0, 0, 255, 255], [255, 255, 255, 255])]
    #[case(true, 0, [0, 0, 255, 255], [255, 255, 255, 255])]
    #[case(true, 7, [255, 0, 0, 255], [0, 255, 0, 255])]
    fn rows_follow_storage_order(
        #[case] flip: bool,
        #[case] y: u32,
        #[case] left: [u8; 4],
        #[case] right: [u8; 4],
    ) {
        let image = quad_image(flip);
        let row = image.row(y);
        assert_eq!(row.len(), 32);
        assert_eq!(row[..4], left);
        assert_eq!(row[28..], right);
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds_panics() {
        quad_image(false).row(8);
    }

    #[test]
    fn pixels_are_mutable() {
        let mut image = quad_image(false);
        image.as_mut_slice()[0] = 7;
        assert_eq!(image.as_slice()[0], 7);
        assert!(!image.is_empty());
        assert_eq!(image.row_bytes(), 32);
    }
}
