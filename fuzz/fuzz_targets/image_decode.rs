#![no_main]

// Decodes arbitrary images with arbitrary buffer sizes, checking that validation
// never lets a decode run out of bounds and that flipping only reorders rows.

use bcn_decode::{decode_with_format_tags, required_destination_size, required_source_size};
use bcn_decode::{DecodeError, EncodeFormat};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub format_tag: u8,
    pub destination_format_tag: u8,
    pub dst_len: u16,
    pub src: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let (width, height) = (input.width as u32, input.height as u32);
    let (format_tag, destination_format_tag) = (
        input.format_tag as u32 % 9,
        input.destination_format_tag as u32 % 6,
    );

    let mut dst = vec![0u8; input.dst_len as usize];
    let result = decode_with_format_tags(
        &mut dst,
        &input.src,
        width,
        height,
        format_tag,
        destination_format_tag,
        false,
    );

    let Ok(written) = result else {
        return;
    };

    let format = EncodeFormat::try_from(format_tag).unwrap();
    assert_eq!(written, required_destination_size(width, height).unwrap());
    assert!(input.src.len() >= required_source_size(width, height, format).unwrap());

    let mut flipped = vec![0u8; written];
    let flipped_result = decode_with_format_tags(
        &mut flipped,
        &input.src,
        width,
        height,
        format_tag,
        destination_format_tag,
        true,
    );
    assert_eq!(flipped_result, Ok::<usize, DecodeError>(written));

    let row_bytes = width as usize * 4;
    for (upright, flipped) in dst[..written]
        .chunks_exact(row_bytes)
        .zip(flipped.chunks_exact(row_bytes).rev())
    {
        assert_eq!(upright, flipped);
    }
});
