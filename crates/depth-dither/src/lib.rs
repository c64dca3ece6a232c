//! depth-dither: bit-depth reduction for RGBA rasters
//!
//! This library quantizes every channel of an 8-bit RGBA image onto a
//! uniform palette of `2^b + 1` levels and hides the banding with
//! Floyd-Steinberg error diffusion.
//!
//! # Quick Start
//!
//! ```
//! use depth_dither::{BitDepth, Dither, FloydSteinberg, Quantizer, RgbaImage, Rgba8};
//!
//! let mut image = RgbaImage::filled(4, 4, Rgba8::gray(100, 255));
//! let quantizer = Quantizer::new(BitDepth::new(2).unwrap());
//!
//! FloydSteinberg.dither(&mut image, &quantizer);
//!
//! let levels = BitDepth::new(2).unwrap().levels();
//! assert!(image.pixels().iter().all(|p| levels.contains(&p.r)));
//! ```
//!
//! # Pixel Domains
//!
//! Two pixel types keep arithmetic honest:
//!
//! | Type | Channels | Used For |
//! |------|----------|----------|
//! | [`Rgba8`] | `u8` | buffer storage, codec interchange |
//! | [`RgbaI32`] | `i32` | residuals and neighbour sums during diffusion |
//!
//! Widening is zero extension; narrowing goes through
//! [`saturating_combine`] and clamps to `0..=255`. Nothing wraps.
//!
//! # Quantization
//!
//! For bit depth `b` the step is `s = 255 / 2^b`. A channel `v` maps to
//! `trunc(s * round(v / s))`, with `round` going half away from zero. The
//! top level is exactly 255 for every `b`, so black and white are always
//! fixed points.
//!
//! # Numeric Semantics
//!
//! Each neighbour share is `trunc(residual * weight)` computed in `f32`.
//! Shares are added to the live buffer and clamped immediately; whatever
//! the clamp discards is lost, which is the canonical behaviour and means
//! the pass is not exactly energy preserving near black and white.

pub mod api;
pub mod buffer;
pub mod dither;
pub mod pixel;
pub mod quantize;


pub use api::DitherError;
pub use buffer::RgbaImage;
pub use dither::{diffuse, Dither, DitherStats, FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use pixel::{pixels_from_bytes, pixels_to_bytes, saturating_combine, Rgba8, RgbaI32};
pub use quantize::{BitDepth, Quantizer};
