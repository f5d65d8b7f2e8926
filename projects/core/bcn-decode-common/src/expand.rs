//! # Channel Expansion
//!
//! Lookup tables for widening narrow colour channels to 8 bits.
//!
//! Every table uses bit replication: the field is shifted into the high bits and its own top
//! bits are copied into the vacated low bits. This is what the D3D functional spec prescribes,
//! and it maps the minimum and maximum of every field width exactly onto `0` and `255`.
//!
//! ```text
//! 4-bit:  abcd   -> abcdabcd
//! 5-bit:  abcde  -> abcdeabc
//! 6-bit:  abcdef -> abcdefab
//! ```
//!
//! The tables are built at compile time, so a lookup is one indexed load.

/// Expands 4-bit values (`0..16`) to 8 bits. Used by explicit (BC2) alpha.
pub const EXPAND_4: [u8; 16] = build_table::<16>(4);

/// Expands 5-bit values (`0..32`) to 8 bits. Used by the red and blue channels of [`Color565`].
///
/// [`Color565`]: crate::color_565::Color565
pub const EXPAND_5: [u8; 32] = build_table::<32>(5);

/// Expands 6-bit values (`0..64`) to 8 bits. Used by the green channel of [`Color565`].
///
/// [`Color565`]: crate::color_565::Color565
pub const EXPAND_6: [u8; 64] = build_table::<64>(6);

const fn build_table<const N: usize>(bits: u32) -> [u8; N] {
    // A single replication step fills the low bits for any field of 4 bits or more.
    let mut table = [0u8; N];
    let mut value = 0;
    while value < N {
        let v = value as u32;
        table[value] = ((v << (8 - bits)) | (v >> (2 * bits - 8))) as u8;
        value += 1;
    }
    table
}

/// Expands a 4-bit value to 8 bits. Only the low 4 bits of `value` are used.
#[inline(always)]
pub fn expand_4(value: u8) -> u8 {
    EXPAND_4[(value & 0x0F) as usize]
}

/// Expands a 5-bit value to 8 bits. Only the low 5 bits of `value` are used.
#[inline(always)]
pub fn expand_5(value: u16) -> u8 {
    EXPAND_5[(value & 0x1F) as usize]
}

/// Expands a 6-bit value to 8 bits. Only the low 6 bits of `value` are used.
#[inline(always)]
pub fn expand_6(value: u16) -> u8 {
    EXPAND_6[(value & 0x3F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0b00001, 0b00001_000)]
    #[case(0b10000, 0b10000_100)]
    #[case(0b01111, 0b01111_011)]
    #[case(0b11110, 0b11110_111)]
    fn expands_5_bit_by_replication(#[case] value: u16, #[case] expected: u8) {
        assert_eq!(expand_5(value), expected);
    }

    #[rstest]
    #[case(0b000001, 0b000001_00)]
    #[case(0b100000, 0b100000_10)]
    #[case(0b011111, 0b011111_01)]
    #[case(0b111110, 0b111110_11)]
    fn expands_6_bit_by_replication(#[case] value: u16, #[case] expected: u8) {
        assert_eq!(expand_6(value), expected);
    }

    #[test]
    fn ignores_bits_above_field_width() {
        assert_eq!(expand_4(0xF3), expand_4(0x03));
        assert_eq!(expand_5(0xFFE1), expand_5(0x01));
        assert_eq!(expand_6(0xFFC1), expand_6(0x01));
    }

    #[test]
    fn extremes_map_to_full_range() {
        assert_eq!(expand_4(0), 0);
        assert_eq!(expand_4(0x0F), 255);
        assert_eq!(expand_5(0), 0);
        assert_eq!(expand_5(0x1F), 255);
        assert_eq!(expand_6(0), 0);
        assert_eq!(expand_6(0x3F), 255);
    }

    #[test]
    fn four_bit_expansion_is_multiply_by_17() {
        for value in 0..16u8 {
            assert_eq!(expand_4(value), value * 17);
        }
    }

    #[test]
    fn tables_are_monotonic() {
        assert!(EXPAND_4.windows(2).all(|w| w[0] < w[1]));
        assert!(EXPAND_5.windows(2).all(|w| w[0] < w[1]));
        assert!(EXPAND_6.windows(2).all(|w| w[0] < w[1]));
    }
}
