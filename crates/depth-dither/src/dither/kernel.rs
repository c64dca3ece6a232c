//! Error diffusion kernel definition.
//!
//! A kernel lists the not-yet-visited neighbours that receive a share of a
//! pixel's quantization residual, and how large each share is.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; a neighbour receives
/// `residual * weight / divisor`. Entries only ever point forward in scan
/// order (`dy > 0`, or `dy == 0` and `dx > 0`), so every target is still
/// unvisited when it is written.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = east)
    /// - `dy`: vertical offset (0 = current row, 1 = next row)
    /// - `weight`: numerator of the share, over `divisor`
    pub entries: &'static [(i32, i32, u8)],

    /// Common denominator of all weights.
    pub divisor: u8,
}

impl Kernel {
    /// Weight of an entry as a float fraction.
    #[inline]
    pub fn fraction(&self, weight: u8) -> f32 {
        weight as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbours with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // south-west
        (0, 1, 5),  // south
        (1, 1, 1),  // south-east
    ],
    divisor: 16,
};
