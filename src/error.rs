use std::path::PathBuf;

use depth_dither::DitherError;
use thiserror::Error;

/// Failure inside the PNG codec adapter.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {color_type:?} at {bit_depth:?}")]
    UnsupportedLayout {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Pixel buffer error: {0}")]
    Pixels(#[from] DitherError),
}

/// Terminal failure of a run, as reported to the user.
///
/// The message names the file and carries the codec's own description on
/// the next line.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error decoding file {}:\n{source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("Error encoding file {}:\n{source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

impl RunError {
    /// Path of the file the failing step was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RunError::Decode { path, .. } | RunError::Encode { path, .. } => path,
        }
    }
}
