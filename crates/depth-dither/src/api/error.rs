//! Unified error type for the depth-dither public API.
//!
//! The diffusion pass itself cannot fail. Every variant here is a rejected
//! input: a bit depth outside the supported range, or a buffer whose length
//! does not agree with its dimensions.

use std::fmt;

/// Unified error type for the depth-dither public API.
///
/// # Example
///
/// ```
/// use depth_dither::{BitDepth, DitherError};
///
/// let err = BitDepth::new(9).unwrap_err();
/// assert_eq!(err, DitherError::InvalidBitDepth(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// Bits per channel outside `1..=7`
    InvalidBitDepth(u8),
    /// Bits per channel string that is not an integer
    InvalidBitDepthString(String),
    /// Pixel count does not equal `width * height`
    DimensionMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// Flat RGBA byte buffer whose length is not a multiple of 4
    ByteLength(usize),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::InvalidBitDepth(bits) => {
                write!(f, "bits per channel must be in 1..=7, got {}", bits)
            }
            DitherError::InvalidBitDepthString(s) => {
                write!(f, "invalid bits per channel: {:?}", s)
            }
            DitherError::DimensionMismatch { len, width, height } => {
                match width.checked_mul(*height) {
                    Some(needed) => write!(
                        f,
                        "buffer holds {} pixels but {}x{} needs {}",
                        len, width, height, needed
                    ),
                    None => write!(
                        f,
                        "buffer holds {} pixels but {}x{} overflows",
                        len, width, height
                    ),
                }
            }
            DitherError::ByteLength(len) => {
                write!(f, "RGBA byte buffer length {} is not a multiple of 4", len)
            }
        }
    }
}

impl std::error::Error for DitherError {}
