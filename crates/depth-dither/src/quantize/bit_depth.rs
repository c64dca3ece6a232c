//! Validated bits-per-channel parameter.

use std::fmt;
use std::str::FromStr;

use crate::api::DitherError;

/// Target bits per channel, guaranteed to lie in `1..=7`.
///
/// `8` is excluded: its step is just under one and the pass would be an
/// expensive identity up to rounding.
///
/// # Example
/// ```
/// use depth_dither::BitDepth;
///
/// let bits: BitDepth = "3".parse().unwrap();
/// assert_eq!(bits.get(), 3);
/// assert_eq!(bits.step(), 255.0 / 8.0);
/// assert!(BitDepth::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitDepth(u8);

impl BitDepth {
    /// Smallest supported depth.
    pub const MIN: BitDepth = BitDepth(1);
    /// Largest supported depth.
    pub const MAX: BitDepth = BitDepth(7);
    /// Depth used when none is configured.
    pub const DEFAULT: BitDepth = BitDepth(2);

    /// Validate `bits` and wrap it.
    pub fn new(bits: u8) -> Result<Self, DitherError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(DitherError::InvalidBitDepth(bits))
        }
    }

    /// The raw number of bits.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Quantization step `255 / 2^b`.
    ///
    /// Exact in `f32` for every supported depth.
    #[inline]
    pub fn step(self) -> f32 {
        255.0 / (1u32 << self.0) as f32
    }

    /// Number of distinct channel values after quantization, `2^b + 1`.
    #[inline]
    pub fn level_count(self) -> usize {
        (1usize << self.0) + 1
    }

    /// The palette: `trunc(k * step)` for `k = 0..=2^b`, ascending.
    pub fn levels(self) -> Vec<u8> {
        let step = self.step();
        (0..=(1u32 << self.0))
            .map(|k| (k as f32 * step) as u8)
            .collect()
    }

    /// Every supported depth, ascending.
    pub fn all() -> impl Iterator<Item = BitDepth> {
        (Self::MIN.0..=Self::MAX.0).map(BitDepth)
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = DitherError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl FromStr for BitDepth {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits: u8 = s
            .trim()
            .parse()
            .map_err(|_| DitherError::InvalidBitDepthString(s.to_string()))?;
        Self::new(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
