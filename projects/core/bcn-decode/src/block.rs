//! Format dispatch for decoding a single compressed block.

use crate::error::DecodeError;
use crate::format::EncodeFormat;
use crate::util::{
    decode_bc1_block, decode_bc2_block, decode_bc3_block, decode_bc4_block, decode_bc5_block,
};
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes one compressed block of `format` into 16 texels.
///
/// `src` must be exactly [`EncodeFormat::block_size`] bytes long.
///
/// # Errors
///
/// - [`DecodeError::NotBlockCompressed`] for [`EncodeFormat::Raw`].
/// - [`DecodeError::UnsupportedFormat`] for BC6 and BC7.
/// - [`DecodeError::InvalidBlockSize`] if `src` has the wrong length.
pub fn decode_block(format: EncodeFormat, src: &[u8]) -> Result<Decoded4x4Block, DecodeError> {
    match format {
        EncodeFormat::Raw => Err(DecodeError::NotBlockCompressed(format)),
        EncodeFormat::Bc6 | EncodeFormat::Bc7 => Err(DecodeError::unsupported(format)),
        EncodeFormat::Bc1 => block_bytes(format, src).map(decode_bc1_block),
        EncodeFormat::Bc2 => block_bytes(format, src).map(decode_bc2_block),
        EncodeFormat::Bc3 => block_bytes(format, src).map(decode_bc3_block),
        EncodeFormat::Bc4 => block_bytes(format, src).map(decode_bc4_block),
        EncodeFormat::Bc5 => block_bytes(format, src).map(decode_bc5_block),
    }
}

fn block_bytes<const N: usize>(format: EncodeFormat, src: &[u8]) -> Result<&[u8; N], DecodeError> {
    src.try_into().map_err(|_| DecodeError::InvalidBlockSize {
        format,
        needed: N,
        actual: src.len(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(EncodeFormat::Bc1, 8)]
    #[case(EncodeFormat::Bc2, 16)]
    #[case(EncodeFormat::Bc3, 16)]
    #[case(EncodeFormat::Bc4, 8)]
    #[case(EncodeFormat::Bc5, 16)]
    fn decodes_exact_block_sizes(#[case] format: EncodeFormat, #[case] size: usize) {
        let src = [0u8; 16];
        assert!(decode_block(format, &src[..size]).is_ok());
    }

    #[rstest]
    #[case(EncodeFormat::Bc1, 9)]
    #[case(EncodeFormat::Bc3, 8)]
    #[case(EncodeFormat::Bc4, 16)]
    fn rejects_wrong_block_size(#[case] format: EncodeFormat, #[case] len: usize) {
        let src = [0u8; 32];
        assert_eq!(
            decode_block(format, &src[..len]),
            Err(DecodeError::InvalidBlockSize {
                format,
                needed: format.block_size().unwrap(),
                actual: len,
            })
        );
    }

    #[test]
    fn rejects_raw_and_unsupported() {
        assert_eq!(
            decode_block(EncodeFormat::Raw, &[0u8; 4]),
            Err(DecodeError::NotBlockCompressed(EncodeFormat::Raw))
        );
        assert_eq!(
            decode_block(EncodeFormat::Bc7, &[0u8; 16]),
            Err(DecodeError::UnsupportedFormat { tag: 7 })
        );
    }

    #[test]
    fn unsupported_formats_win_over_size_errors() {
        assert_eq!(
            decode_block(EncodeFormat::Bc6, &[0u8; 3]),
            Err(DecodeError::UnsupportedFormat { tag: 6 })
        );
        assert_eq!(
            decode_block(EncodeFormat::Raw, &[]),
            Err(DecodeError::NotBlockCompressed(EncodeFormat::Raw))
        );
    }

    #[test]
    fn matches_format_specific_decoder() {
        let src = [0x00, 0xF8, 0x1F, 0x00, 0x1B, 0xE4, 0x1B, 0xE4];
        assert_eq!(decode_block(EncodeFormat::Bc1, &src), Ok(decode_bc1_block(&src)));
    }
}
