#![allow(dead_code)]

use magickwand::{MagickWand, PixelWand};

pub fn init() {
    magickwand::logging::init();
}

/// Wand holding one `width` x `height` image filled with `color`
pub fn solid(width: usize, height: usize, color: &str) -> MagickWand {
    let mut wand = MagickWand::new().unwrap();
    let background = PixelWand::from_color(color).unwrap();
    wand.new_image(width, height, &background).unwrap();
    wand
}

/// Wand holding one image per color
pub fn sequence(width: usize, height: usize, colors: &[&str]) -> MagickWand {
    let mut wand = MagickWand::new().unwrap();
    for color in colors {
        let background = PixelWand::from_color(color).unwrap();
        wand.new_image(width, height, &background).unwrap();
    }
    wand.reset_iterator();
    wand
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "{actual} is not close to {expected}"
    );
}
