use crate::color_565::Color565;
use crate::color_8888::Color8888;
use crate::decoded_4x4_block::Decoded4x4Block;

#[test]
fn can_convert_color_565_to_8888() {
    // Test with pure colors
    let red_565 = Color565::from_rgb(255, 0, 0);
    let green_565 = Color565::from_rgb(0, 255, 0);
    let blue_565 = Color565::from_rgb(0, 0, 255);

    assert_eq!(red_565.to_color_8888(), Color8888::new(255, 0, 0, 255));
    assert_eq!(green_565.to_color_8888(), Color8888::new(0, 255, 0, 255));
    assert_eq!(blue_565.to_color_8888(), Color8888::new(0, 0, 255, 255));
}

#[test]
fn rgba_bytes_keep_canonical_order() {
    let texel = Color8888::from_rgba_bytes([1, 2, 3, 4]);
    assert_eq!(texel, Color8888::new(1, 2, 3, 4));
    assert_eq!(texel.to_rgba_bytes(), [1, 2, 3, 4]);
}

#[test]
fn block_pixels_are_row_major() {
    let block = Decoded4x4Block::from_fn(|i| Color8888::new(i as u8, 0, 0, 255));
    assert_eq!(block.get_pixel(0, 0).r, 0);
    assert_eq!(block.get_pixel(3, 0).r, 3);
    assert_eq!(block.get_pixel(0, 1).r, 4);
    assert_eq!(block.get_pixel(3, 3).r, 15);
    assert_eq!(block.row(2)[1].r, 9);
    assert!(!block.has_identical_pixels());
    assert!(block.has_identical_alpha());
}

#[test]
#[should_panic]
fn get_pixel_outside_block_panics() {
    let block = Decoded4x4Block::default();
    let _ = block.get_pixel(4, 0);
}
