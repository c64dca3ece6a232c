//! Floyd-Steinberg error diffusion dithering.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbours. It is the only kernel this crate ships.

use super::{diffuse, Dither, DitherStats};
use crate::buffer::RgbaImage;
use crate::quantize::Quantizer;

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 east, 3/16 south-west, 5/16 south, 1/16 south-east.
/// Each share is computed in floating point and truncated toward zero
/// before it is added, so small residuals may vanish entirely.
///
/// # Example
///
/// ```
/// use depth_dither::{BitDepth, Dither, FloydSteinberg, Quantizer, RgbaImage, Rgba8};
///
/// let mut image = RgbaImage::filled(4, 4, Rgba8::gray(100, 255));
/// let quantizer = Quantizer::new(BitDepth::new(2).unwrap());
/// let stats = FloydSteinberg.dither(&mut image, &quantizer);
///
/// assert_eq!(stats.pixels, 16);
/// assert!(image.pixels().iter().all(|&p| quantizer.is_on_palette(p)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &mut RgbaImage, quantizer: &Quantizer) -> DitherStats {
        let (width, height) = (image.width(), image.height());
        diffuse(image.pixels_mut(), width, height, quantizer)
    }
}
