//! Bitdither
//!
//! Reduces the bit depth of RGBA PNG images with Floyd-Steinberg error
//! diffusion. The dithering itself lives in the `depth-dither` crate; this
//! crate adds the PNG codec adapter, the command line and the run pipeline.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
