//! PNG codec adapter.
//!
//! Decodes any PNG the `png` crate understands into an 8-bit RGBA
//! [`RgbaImage`], and writes an [`RgbaImage`] back out as RGBA8 PNG.
//! Palette, grayscale, sub-byte and 16-bit inputs are all normalised on the
//! way in; a missing alpha channel becomes fully opaque.

use std::io::Cursor;
use std::path::Path;

use depth_dither::{Rgba8, RgbaImage};

use crate::error::CodecError;

/// Decode the PNG file at `path`.
pub fn decode(path: &Path) -> Result<RgbaImage, CodecError> {
    let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(path = %path.display(), size = bytes.len(), "Read PNG file");
    decode_bytes(&bytes)
}

/// Decode an in-memory PNG.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage, CodecError> {
    let mut decoder = png::Decoder::new(bytes);
    // Expand palette and low bit depths, strip 16-bit down to 8, turn tRNS
    // into an alpha channel. What remains is one of four 8-bit layouts.
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let height = info.height as usize;

    let pixels = expand_to_rgba(data, info.color_type, info.bit_depth)?;

    tracing::debug!(
        width,
        height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage::new(pixels, width, height)?)
}

/// Convert one decoded frame into RGBA display pixels.
fn expand_to_rgba(
    data: &[u8],
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
) -> Result<Vec<Rgba8>, CodecError> {
    if bit_depth != png::BitDepth::Eight {
        return Err(CodecError::UnsupportedLayout {
            color_type,
            bit_depth,
        });
    }

    let pixels = match color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|c| Rgba8::new(c[0], c[1], c[2], 255))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|c| Rgba8::gray(c[0], c[1]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgba8::gray(v, 255)).collect(),
        png::ColorType::Indexed => {
            return Err(CodecError::UnsupportedLayout {
                color_type,
                bit_depth,
            })
        }
    };

    Ok(pixels)
}

/// Encode `image` as an RGBA8 PNG at `path`.
///
/// The file is only created once encoding has succeeded in memory.
pub fn encode(path: &Path, image: &RgbaImage) -> Result<(), CodecError> {
    let bytes = encode_bytes(image)?;
    std::fs::write(path, &bytes).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(path = %path.display(), size = bytes.len(), "Wrote PNG file");
    Ok(())
}

/// Encode `image` as an in-memory RGBA8 PNG.
pub fn encode_bytes(image: &RgbaImage) -> Result<Vec<u8>, CodecError> {
    let unsupported = || CodecError::UnsupportedDimensions {
        width: image.width(),
        height: image.height(),
    };
    if image.is_empty() {
        return Err(unsupported());
    }
    let width = u32::try_from(image.width()).map_err(|_| unsupported())?;
    let height = u32::try_from(image.height()).map_err(|_| unsupported())?;

    let mut buf = Cursor::new(Vec::with_capacity(image.byte_len()));
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_rgba_bytes())?;
        writer.finish()?;
    }

    tracing::debug!(width, height, size = buf.get_ref().len(), "Encoded PNG");
    Ok(buf.into_inner())
}
