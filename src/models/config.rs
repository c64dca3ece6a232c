use std::path::PathBuf;

use depth_dither::{BitDepth, Quantizer};

/// Default file to read when `-i` is not given.
pub const DEFAULT_INPUT: &str = "input.png";
/// Default file to write when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Settings for one run, built by the CLI and handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitherConfig {
    /// PNG file to decode
    pub input: PathBuf,

    /// PNG file to encode
    pub output: PathBuf,

    /// Target bits per channel
    pub bits: BitDepth,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            bits: BitDepth::DEFAULT,
        }
    }
}

impl DitherConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, bits: BitDepth) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            bits,
        }
    }

    /// Quantizer for the configured bit depth.
    pub fn quantizer(&self) -> Quantizer {
        Quantizer::new(self.bits)
    }
}
