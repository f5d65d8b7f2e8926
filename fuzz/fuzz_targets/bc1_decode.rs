#![no_main]

// Compares our BC1 decoder against rgbcx-sys using the Ideal method.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use bcn_decode::util::decode_bc1_block;
use bcn_decode_common::color_8888::Color8888;
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let ours = decode_bc1_block(&block.bytes);
    let reference = rgbcx_decode_bc1(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1(block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    to_block(&rgba)
}

fn to_block(rgba: &[u8; 64]) -> Decoded4x4Block {
    Decoded4x4Block::from_fn(|x| {
        Color8888::from_rgba_bytes([rgba[x * 4], rgba[x * 4 + 1], rgba[x * 4 + 2], rgba[x * 4 + 3]])
    })
}
