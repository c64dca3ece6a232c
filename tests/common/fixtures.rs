//! Test images.

use depth_dither::{Rgba8, RgbaImage};

/// Horizontal gray ramp with a vertical alpha ramp.
pub fn gradient(width: usize, height: usize) -> RgbaImage {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let v = (x * 255 / (width - 1).max(1)) as u8;
                let a = (y * 255 / (height - 1).max(1)) as u8;
                Rgba8::new(v, v / 2, 255 - v, a)
            })
        })
        .collect();
    RgbaImage::new(pixels, width, height).unwrap()
}

/// Black and white stripes three pixels wide, fully opaque.
pub fn stripes(width: usize, height: usize) -> RgbaImage {
    let pixels = (0..width * height)
        .map(|i| {
            if (i % width / 3) % 2 == 0 {
                Rgba8::BLACK
            } else {
                Rgba8::WHITE
            }
        })
        .collect();
    RgbaImage::new(pixels, width, height).unwrap()
}

pub fn uniform(width: usize, height: usize, pixel: Rgba8) -> RgbaImage {
    RgbaImage::filled(width, height, pixel)
}
