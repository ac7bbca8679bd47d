//! The interface every packed color space implements.

use std::fmt::Debug;
use std::hash::Hash;

use crate::codec;
use crate::oklab::Oklab;

/// A color stored as one `u32` in a specific color space.
///
/// Every method is total: any 32-bit pattern is a valid input and produces
/// some valid output.
pub trait PackedColor: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The "nothing parsed" sentinel: zero alpha.
    const TRANSPARENT: Self;

    /// At or below this [`saturation`](Self::saturation), a color sorts with
    /// the grays.
    const GRAYSCALE_THRESHOLD: f32;

    fn from_bits(bits: u32) -> Self;
    fn to_bits(self) -> u32;

    /// Converts from RGBA8888 (red in the most significant byte).
    fn from_rgba8888(rgba: u32) -> Self;
    /// Converts to RGBA8888 (red in the most significant byte).
    fn to_rgba8888(self) -> u32;

    /// Moves the lightness channel toward its maximum by `change` in `[0, 1]`.
    fn lighten(self, change: f32) -> Self;
    /// Moves the lightness channel toward zero by `change` in `[0, 1]`.
    fn darken(self, change: f32) -> Self;
    /// Scales chroma up by `1 + change` and limits the result to the gamut.
    fn enrich(self, change: f32) -> Self;
    /// Scales chroma down by `1 - change`.
    fn dullen(self, change: f32) -> Self;

    /// Whether the color reconstructs to displayable RGB.
    fn in_gamut(self) -> bool;
    /// Returns `self` if in gamut, otherwise the least gray-ward contraction
    /// of it that is.
    fn limit_to_gamut(self) -> Self;

    /// Hue in turns, `[0, 1)`.
    fn hue(self) -> f32;
    /// The space's own colorfulness metric.
    fn saturation(self) -> f32;
    /// The space's own lightness metric, `[0, 1]`.
    fn lightness(self) -> f32;

    /// Alpha in `[0, 1]`.
    fn alpha(self) -> f32 {
        codec::alpha_byte(self.to_bits()) as f32 / 254.0
    }

    fn is_transparent(self) -> bool {
        codec::alpha_byte(self.to_bits()) == 0
    }

    /// Per-byte interpolation toward `end`, alpha included.
    fn lerp(self, end: Self, change: f32) -> Self {
        Self::from_bits(codec::lerp(self.to_bits(), end.to_bits(), change))
    }

    /// Moves alpha toward opaque.
    fn blot(self, change: f32) -> Self {
        Self::from_bits(codec::blot(self.to_bits(), change))
    }

    /// Moves alpha toward transparent.
    fn fade(self, change: f32) -> Self {
        Self::from_bits(codec::fade(self.to_bits(), change))
    }

    /// The same color in Oklab, for perceptual distances.
    fn to_oklab(self) -> Oklab {
        Oklab::from_rgba8888(self.to_rgba8888())
    }
}
