//! The single-owner pixel buffer passed from decode, through the
//! diffusion pass, to encode.

mod rgba_image;

pub use rgba_image::RgbaImage;
