use std::time::Instant;

use depth_dither::{BitDepth, Dither, DitherStats, FloydSteinberg, Quantizer, RgbaImage};

use crate::error::RunError;
use crate::models::DitherConfig;
use crate::rendering::png_codec;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub bits: BitDepth,
    pub stats: DitherStats,
}

/// Pipeline that orchestrates decode → dither → encode
///
/// Each stage runs to completion before the next starts; the decoded
/// buffer is the only image held in memory and is dithered in place.
pub struct DitherPipeline {
    config: DitherConfig,
    quantizer: Quantizer,
}

impl DitherPipeline {
    pub fn new(config: DitherConfig) -> Self {
        let quantizer = config.quantizer();
        Self { config, quantizer }
    }

    pub fn config(&self) -> &DitherConfig {
        &self.config
    }

    /// Run the whole pipeline against the configured files.
    ///
    /// Nothing is written if decoding fails.
    pub fn run(&self) -> Result<RunSummary, RunError> {
        let started = Instant::now();

        let mut image = png_codec::decode(&self.config.input).map_err(|source| RunError::Decode {
            path: self.config.input.clone(),
            source,
        })?;

        tracing::debug!(
            input = %self.config.input.display(),
            width = image.width(),
            height = image.height(),
            "Image decoded"
        );

        let stats = self.process(&mut image);

        png_codec::encode(&self.config.output, &image).map_err(|source| RunError::Encode {
            path: self.config.output.clone(),
            source,
        })?;

        tracing::info!(
            input = %self.config.input.display(),
            output = %self.config.output.display(),
            width = image.width(),
            height = image.height(),
            bits = self.config.bits.get(),
            clamped_writes = stats.clamped_writes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dithered image written"
        );

        Ok(RunSummary {
            width: image.width(),
            height: image.height(),
            bits: self.config.bits,
            stats,
        })
    }

    /// Dither an already decoded image in place.
    pub fn process(&self, image: &mut RgbaImage) -> DitherStats {
        let stats = FloydSteinberg.dither(image, &self.quantizer);
        tracing::debug!(
            pixels = stats.pixels,
            diffused = stats.diffused,
            clamped_writes = stats.clamped_writes,
            levels = self.config.bits.level_count(),
            "Error diffusion complete"
        );
        stats
    }

    /// Decode, dither and re-encode an in-memory PNG.
    pub fn process_png_bytes(&self, png: &[u8]) -> Result<Vec<u8>, crate::error::CodecError> {
        let mut image = png_codec::decode_bytes(png)?;
        self.process(&mut image);
        png_codec::encode_bytes(&image)
    }
}
