#![no_main]

// Compares our BC5 decoder against the alpha channel of rgbcx-sys's BC3 decoder,
// once per half.

use bcn_decode::util::decode_bc5_block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc5Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc5Block| {
    let ours = decode_bc5_block(&block.bytes);
    let red = rgbcx_decode_channel(&block.bytes[..8]);
    let green = rgbcx_decode_channel(&block.bytes[8..]);
    for (x, pixel) in ours.pixels.iter().enumerate() {
        assert_eq!(
            pixel.to_rgba_bytes(),
            [red[x], green[x], 0, 255],
            "texel {x} doesn't match"
        );
    }
});

fn rgbcx_decode_channel(channel: &[u8]) -> [u8; 16] {
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
