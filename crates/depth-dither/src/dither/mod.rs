//! Error diffusion engine.
//!
//! One raster sweep, top to bottom and left to right, over the buffer. Each
//! pixel is quantized in place and its residual is pushed onto unvisited
//! neighbours through the [`FLOYD_STEINBERG`] kernel.
//!
//! # Ordering
//!
//! The sweep is strictly sequential. Every neighbour write at pixel `C`
//! must land before that neighbour is read, so the buffer is mutated in
//! place and no second copy is kept. Serpentine scanning or any other
//! visiting order produces a different image.
//!
//! # Boundaries
//!
//! - last row: the pixel is quantized, nothing is diffused (not even east)
//! - `x == 0`: no south-west share
//! - `x == width - 1`: no east or south-east share
//!
//! # Example
//!
//! ```
//! use depth_dither::{BitDepth, Dither, FloydSteinberg, Quantizer, RgbaImage, Rgba8};
//!
//! let mut image = RgbaImage::filled(2, 2, Rgba8::gray(200, 255));
//! let quantizer = Quantizer::new(BitDepth::new(1).unwrap());
//! FloydSteinberg.dither(&mut image, &quantizer);
//!
//! assert_eq!(image.get(0, 0), Some(Rgba8::gray(255, 255)));
//! assert_eq!(image.get(1, 0), Some(Rgba8::gray(127, 255)));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::RgbaImage;
use crate::pixel::{saturating_combine, Rgba8, RgbaI32};
use crate::quantize::Quantizer;

/// An in-place dithering pass over an [`RgbaImage`].
pub trait Dither {
    /// Quantize every pixel of `image`, diffusing residuals as the
    /// algorithm prescribes. Dimensions are left untouched.
    fn dither(&self, image: &mut RgbaImage, quantizer: &Quantizer) -> DitherStats;
}

/// Counters gathered during one sweep.
///
/// Observational only: collecting them does not change the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DitherStats {
    /// Pixels quantized.
    pub pixels: usize,
    /// Pixels whose residual was non-zero and was spread to neighbours.
    pub diffused: usize,
    /// Neighbour updates whose pre-clamp sum left `0..=255`.
    pub clamped_writes: usize,
}

/// Floyd-Steinberg sweep over a raw row-major buffer.
///
/// `pixels.len()` must equal `width * height`. [`RgbaImage`] guarantees
/// this; prefer [`Dither::dither`] unless you already hold a raw slice.
///
/// # Panics
///
/// Panics if `pixels.len()` is not exactly `width * height`.
pub fn diffuse(
    pixels: &mut [Rgba8],
    width: usize,
    height: usize,
    quantizer: &Quantizer,
) -> DitherStats {
    diffuse_with_kernel(pixels, width, height, quantizer, &FLOYD_STEINBERG)
}

/// Core sweep parameterized by kernel.
pub(crate) fn diffuse_with_kernel(
    pixels: &mut [Rgba8],
    width: usize,
    height: usize,
    quantizer: &Quantizer,
    kernel: &Kernel,
) -> DitherStats {
    assert!(
        width.checked_mul(height) == Some(pixels.len()),
        "buffer length ({}) must match width * height ({}x{})",
        pixels.len(),
        width,
        height,
    );

    let mut stats = DitherStats::default();

    for y in 0..height {
        let last_row = y + 1 == height;

        for x in 0..width {
            let idx = y * width + x;

            let old = pixels[idx];
            let new = quantizer.quantize(old);
            pixels[idx] = new;
            stats.pixels += 1;

            if last_row {
                continue;
            }

            let error = RgbaI32::residual(old, new);
            if error.is_zero() {
                continue;
            }
            stats.diffused += 1;

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                if nx < 0 || nx >= width as i64 {
                    continue;
                }
                let ny = y + dy as usize;
                if ny >= height {
                    continue;
                }

                let n = ny * width + nx as usize;
                let share = error.scale(kernel.fraction(weight));
                let target = pixels[n];
                let updated = saturating_combine(target, share);
                if target.widen().add(share).exceeds_display_range() {
                    stats.clamped_writes += 1;
                }
                pixels[n] = updated;
            }
        }
    }

    stats
}
