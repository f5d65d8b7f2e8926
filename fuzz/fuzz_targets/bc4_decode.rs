#![no_main]

// Compares our BC4 decoder against the alpha channel of rgbcx-sys's BC3 decoder,
// which stores alpha in the same 8 byte layout.

use bcn_decode::util::decode_bc4_block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc4Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc4Block| {
    let ours = decode_bc4_block(&block.bytes);
    let reference = rgbcx_decode_channel(&block.bytes);
    for (x, pixel) in ours.pixels.iter().enumerate() {
        assert_eq!(
            pixel.to_rgba_bytes(),
            [reference[x], reference[x], reference[x], 255],
            "texel {x} doesn't match"
        );
    }
});

fn rgbcx_decode_channel(channel: &[u8; 8]) -> [u8; 16] {
    let mut bc3 = [0u8; 16];
    bc3[..8].copy_from_slice(channel);
    bc3[8] = 0xFF; // c0 > c1 keeps the colour half in four colour mode

    let mut rgba = [[0u8; 4]; 16];
    unsafe {
        rgbcx::unpack_bc3(
            bc3.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    core::array::from_fn(|x| rgba[x][3])
}
