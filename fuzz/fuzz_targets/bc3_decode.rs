#![no_main]

// Compares our BC3 decoder against rgbcx-sys using the Ideal method.

use bcn_decode::util::decode_bc3_block;
use bcn_decode_common::color_565::Color565;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc3Block| {
    // Three colour mode is not used by BC3; skip inputs where rgbcx might disagree.
    let c0 = Color565::from_le_bytes(&block.bytes[8..10]);
    let c1 = Color565::from_le_bytes(&block.bytes[10..12]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc3_block(&block.bytes);
    let reference = rgbcx_decode_bc3(&block.bytes);
    for (x, pixel) in ours.pixels.iter().enumerate() {
        assert_eq!(pixel.to_rgba_bytes(), reference[x], "texel {x} doesn't match");
    }
});

fn rgbcx_decode_bc3(block: &[u8; 16]) -> [[u8; 4]; 16] {
    let mut rgba = [[0u8; 4]; 16];
    unsafe {
        rgbcx::unpack_bc3(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    rgba
}
