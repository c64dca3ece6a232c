//! [`RgbaImage`]: display pixels plus their dimensions.

use crate::api::DitherError;
use crate::pixel::{pixels_from_bytes, pixels_to_bytes, Rgba8, CHANNELS};

/// An RGBA raster in row-major order, `x` as the fast axis.
///
/// The pixel count always equals `width * height`; constructors reject
/// anything else. Dimensions never change after construction.
///
/// # Example
///
/// ```
/// use depth_dither::{RgbaImage, Rgba8};
///
/// let image = RgbaImage::new(vec![Rgba8::BLACK; 6], 3, 2).unwrap();
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.get(2, 1), Some(Rgba8::BLACK));
///
/// assert!(RgbaImage::new(vec![Rgba8::BLACK; 5], 3, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pixels: Vec<Rgba8>,
    width: usize,
    height: usize,
}

impl RgbaImage {
    /// Wrap `pixels` as a `width` x `height` image.
    pub fn new(pixels: Vec<Rgba8>, width: usize, height: usize) -> Result<Self, DitherError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(DitherError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// An image with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba8) -> Self {
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Build from flat `RGBA RGBA ...` bytes.
    pub fn from_rgba_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, DitherError> {
        let pixels = pixels_from_bytes(bytes)?;
        Self::new(pixels, width, height)
    }

    /// Flatten into `RGBA RGBA ...` bytes, `4 * width * height` long.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        pixels_to_bytes(&self.pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a zero-area image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Size of the flat RGBA representation in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * CHANNELS
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Mutable pixel access. The slice length is fixed, so dimensions stay
    /// consistent.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[Rgba8]> {
        if y < self.height {
            let start = y * self.width;
            Some(&self.pixels[start..start + self.width])
        } else {
            None
        }
    }
}
