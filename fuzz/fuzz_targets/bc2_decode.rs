#![no_main]

// Compares our BC2 decoder against rgbcx-sys for colours and bcdec_rs for alpha.

use bcn_decode::util::decode_bc2_block;
use bcn_decode_common::color_565::Color565;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc2Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc2Block| {
    // rgbcx's BC1 path would use the three colour palette here; BC2 never does.
    let c0 = Color565::from_le_bytes(&block.bytes[8..10]);
    let c1 = Color565::from_le_bytes(&block.bytes[10..12]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc2_block(&block.bytes);

    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            block.bytes.as_ptr().add(8) as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    let mut bcdec = [0u8; 4 * 16];
    bcdec_rs::bc2(&block.bytes, &mut bcdec, 4 * 4);

    for (x, pixel) in ours.pixels.iter().enumerate() {
        let expected = [rgba[x * 4], rgba[x * 4 + 1], rgba[x * 4 + 2], bcdec[x * 4 + 3]];
        assert_eq!(pixel.to_rgba_bytes(), expected, "texel {x} doesn't match");
    }
});
