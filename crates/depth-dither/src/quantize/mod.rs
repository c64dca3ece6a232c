//! Uniform quantization of 8-bit channels.
//!
//! A [`BitDepth`] `b` induces the step `s = 255 / 2^b`; the [`Quantizer`]
//! maps each channel to the nearest multiple of `s`, truncated back into
//! the display domain. The resulting palette has `2^b + 1` levels.

mod bit_depth;
mod quantizer;

pub use bit_depth::BitDepth;
pub use quantizer::Quantizer;
