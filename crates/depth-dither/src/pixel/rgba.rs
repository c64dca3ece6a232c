//! Display and work pixel types
//!
//! The two types are deliberately distinct: [`Rgba8`] is what lives in the
//! image buffer, [`RgbaI32`] is what error arithmetic is done in. There is no
//! arithmetic on `Rgba8` itself, so the display form can never wrap around.

use crate::api::DitherError;

/// Number of channels in one pixel.
pub const CHANNELS: usize = 4;

/// A display pixel: four 8-bit channels in R, G, B, A order.
///
/// This is the storage form of the image buffer and what the codec
/// exchanges with the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0..=255, 255 = opaque)
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    /// Create a display pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A grey pixel with the given value in all colour channels.
    #[inline]
    pub const fn gray(value: u8, alpha: u8) -> Self {
        Self::new(value, value, value, alpha)
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    ///
    /// # Example
    /// ```
    /// use depth_dither::Rgba8;
    /// let p = Rgba8::from_bytes([1, 2, 3, 4]);
    /// assert_eq!(p.b, 3);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; CHANNELS]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b, self.a]
    }

    /// Zero-extend into the work domain.
    #[inline]
    pub fn widen(self) -> RgbaI32 {
        RgbaI32::new(
            i32::from(self.r),
            i32::from(self.g),
            i32::from(self.b),
            i32::from(self.a),
        )
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }
}

impl From<[u8; CHANNELS]> for Rgba8 {
    fn from(bytes: [u8; CHANNELS]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba8> for [u8; CHANNELS] {
    fn from(pixel: Rgba8) -> Self {
        pixel.to_bytes()
    }
}

/// A work pixel: four signed channels wide enough for accumulated error.
///
/// Residuals live in `[-255, 255]` and a neighbour plus its share of a
/// residual in `[-255, 510]`; `i32` covers both with room to spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbaI32 {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl RgbaI32 {
    /// The zero residual.
    pub const ZERO: RgbaI32 = RgbaI32::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel `old - new`, computed in the work domain.
    #[inline]
    pub fn residual(old: Rgba8, new: Rgba8) -> Self {
        let (old, new) = (old.widen(), new.widen());
        Self::new(old.r - new.r, old.g - new.g, old.b - new.b, old.a - new.a)
    }

    /// Multiply every channel by `weight` in floating point and truncate
    /// the product toward zero.
    #[inline]
    pub fn scale(self, weight: f32) -> Self {
        let mul = |c: i32| (c as f32 * weight) as i32;
        Self::new(mul(self.r), mul(self.g), mul(self.b), mul(self.a))
    }

    /// Per-channel sum.
    #[inline]
    pub fn add(self, other: RgbaI32) -> Self {
        Self::new(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a + other.a,
        )
    }

    /// Narrow to the display domain, clamping each channel to `0..=255`.
    #[inline]
    pub fn saturate(self) -> Rgba8 {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Rgba8::new(clamp(self.r), clamp(self.g), clamp(self.b), clamp(self.a))
    }

    /// True if any channel lies outside `0..=255`.
    #[inline]
    pub fn exceeds_display_range(self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .any(|c| !(0..=255).contains(c))
    }

    /// True if every channel is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Add `delta` to `pixel` and clamp each channel to `0..=255`.
///
/// This is the only point where diffused error enters the buffer. Excess
/// beyond the display range is discarded, never wrapped.
///
/// # Example
/// ```
/// use depth_dither::{saturating_combine, Rgba8, RgbaI32};
///
/// let p = Rgba8::new(250, 5, 100, 255);
/// let out = saturating_combine(p, RgbaI32::new(10, -10, 3, 0));
/// assert_eq!(out, Rgba8::new(255, 0, 103, 255));
/// ```
#[inline]
pub fn saturating_combine(pixel: Rgba8, delta: RgbaI32) -> Rgba8 {
    pixel.widen().add(delta).saturate()
}

/// Split a flat `RGBA RGBA ...` byte slice into display pixels.
///
/// Fails with [`DitherError::ByteLength`] if the slice length is not a
/// multiple of four.
pub fn pixels_from_bytes(bytes: &[u8]) -> Result<Vec<Rgba8>, DitherError> {
    if bytes.len() % CHANNELS != 0 {
        return Err(DitherError::ByteLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(CHANNELS)
        .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Flatten display pixels into `RGBA RGBA ...` bytes.
pub fn pixels_to_bytes(pixels: &[Rgba8]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_bytes()).collect()
}
