use crate::color_8888::Color8888;
use crate::expand::{expand_5, expand_6};

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour section of BC1, BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Reads a little endian [`Color565`] from the first two bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 2 bytes.
    #[inline]
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::from_raw(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Creates a new [`Color565`] from separate RGB components, truncating the low bits
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    // NOTE: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/
    // BC1 as written in the D3D11 functional spec first expands the endpoint values from 5 or 6 bits
    // to 8 bits by replicating the top bits; all three vendors appear to do this or something equivalent.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        expand_5(self.value >> 11)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        expand_6(self.value >> 5)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        expand_5(self.value)
    }

    /// Unpacks all three channels at once, as `(red, green, blue)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_decode_common::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_raw(0xFFFF).expand(), (255, 255, 255));
    /// assert_eq!(Color565::from_raw(0xF800).expand(), (255, 0, 0));
    /// assert_eq!(Color565::from_raw(0x0000).expand(), (0, 0, 0));
    /// ```
    #[inline]
    pub fn expand(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Compares two [`Color565`] values by their raw 16-bit representation.
    ///
    /// BC1 uses this ordering of the two endpoints to pick between the
    /// four-colour and the three-colour + transparent palette.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_decode_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_decode_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888_with_alpha(128);
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.a, 128);
    /// ```
    #[inline]
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        let (r, g, b) = self.expand();
        Color8888::new(r, g, b, alpha)
    }
}

/// Unpacks a 5:6:5 packed colour into 8-bit `(red, green, blue)` using bit replication.
///
/// Shorthand for [`Color565::from_raw`] followed by [`Color565::expand`].
#[inline]
pub fn expand_565(value: u16) -> (u8, u8, u8) {
    Color565::from_raw(value).expand()
}
