//! Per-channel quantizer with a precomputed lookup table.

use super::BitDepth;
use crate::pixel::Rgba8;

/// Snap `value` to the nearest multiple of `step`.
///
/// `f32::round` rounds half away from zero. Banker's rounding would move
/// exact midpoints to the even neighbour and change the output.
#[inline]
fn round_to_step(value: f32, step: f32) -> f32 {
    step * (value / step).round()
}

/// Maps display channels onto the uniform palette of a [`BitDepth`].
///
/// The mapping for all 256 input values is computed once at construction,
/// so [`quantize`](Quantizer::quantize) is a table lookup per channel.
///
/// # Example
/// ```
/// use depth_dither::{BitDepth, Quantizer, Rgba8};
///
/// let q = Quantizer::new(BitDepth::new(1).unwrap());
/// assert_eq!(q.quantize(Rgba8::new(128, 128, 128, 255)), Rgba8::new(127, 127, 127, 255));
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    bits: BitDepth,
    lut: [u8; 256],
}

impl Quantizer {
    /// Build the quantizer for `bits`.
    pub fn new(bits: BitDepth) -> Self {
        let step = bits.step();
        let mut lut = [0u8; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            // round() is at most 2^b, so the product never exceeds 255 and
            // the truncating cast needs no clamp.
            *slot = round_to_step(value as f32, step) as u8;
        }
        Self { bits, lut }
    }

    /// The depth this quantizer was built for.
    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        self.bits
    }

    /// Quantize a single channel value.
    #[inline]
    pub fn quantize_channel(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }

    /// Quantize all four channels of a pixel, alpha included.
    #[inline]
    pub fn quantize(&self, pixel: Rgba8) -> Rgba8 {
        pixel.map(|c| self.quantize_channel(c))
    }

    /// True if every channel of `pixel` is already a palette value.
    #[inline]
    pub fn is_on_palette(&self, pixel: Rgba8) -> bool {
        self.quantize(pixel) == pixel
    }
}

impl From<BitDepth> for Quantizer {
    fn from(bits: BitDepth) -> Self {
        Self::new(bits)
    }
}
