//! Pixel types and the arithmetic primitives used during diffusion.
//!
//! - [`Rgba8`]: display pixel, the storage form of the buffer
//! - [`RgbaI32`]: work pixel, the domain error is computed in
//! - [`saturating_combine`]: the single entry point for diffused error

mod rgba;

pub use rgba::{pixels_from_bytes, pixels_to_bytes, saturating_combine, Rgba8, RgbaI32, CHANNELS};
