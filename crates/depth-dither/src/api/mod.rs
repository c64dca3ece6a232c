//! Public error type for the depth-dither crate.

mod error;

pub use error::DitherError;
