//! Oklab packed colors and the sRGB <-> Oklab transform.
//!
//! Channel 1 holds L in `[0, 1]`; channels 2 and 3 hold A and B, stored
//! around 127.5. Gamma is approximated by squaring, so the forward transform
//! is `square -> LMS -> cbrt -> Lab` and the inverse runs the same steps
//! backward with a square root at the end.

use std::f32::consts::TAU;
use std::fmt;

use crate::codec::{self, CH1, CH2, CH3};
use crate::color::PackedColor;
use crate::gamut;

/// Lightness of the gray that out-of-gamut colors are contracted toward.
pub const GRAY_LIGHTNESS: f32 = 0.63;

/// sRGB floats to `[L, A, B]`.
pub fn srgb_to_lab(r: f32, g: f32, b: f32) -> [f32; 3] {
    let (r, g, b) = (r * r, g * g, b * b);
    let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();
    [
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    ]
}

/// `[L, A, B]` to linear (squared) RGB, unclamped.
pub fn lab_to_linear(l: f32, a: f32, b: f32) -> [f32; 3] {
    let lp = cube(l + 0.3963377774 * a + 0.2158037573 * b);
    let mp = cube(l - 0.1055613458 * a - 0.0638541728 * b);
    let sp = cube(l - 0.0894841775 * a - 1.2914855480 * b);
    [
        4.0767245293 * lp - 3.3072168827 * mp + 0.2307590544 * sp,
        -1.2681437731 * lp + 2.6093323231 * mp - 0.3411344290 * sp,
        -0.0041119885 * lp - 0.7034763098 * mp + 1.7068625689 * sp,
    ]
}

/// `[L, A, B]` to sRGB floats clamped to `[0, 1]`.
pub fn lab_to_srgb(l: f32, a: f32, b: f32) -> [f32; 3] {
    lab_to_linear(l, a, b).map(|c| c.clamp(0.0, 1.0).sqrt())
}

/// Whether `[L, A, B]` reconstructs to displayable RGB.
pub fn lab_in_gamut(l: f32, a: f32, b: f32) -> bool {
    gamut::channels_in_gamut(lab_to_linear(l, a, b))
}

/// Float-only gamut limiting, for callers that never pack the result.
pub fn limit_lab(l: f32, a: f32, b: f32) -> (f32, f32, f32) {
    if lab_in_gamut(l, a, b) {
        return (l, a, b);
    }
    gamut::contract(
        (l, a, b),
        GRAY_LIGHTNESS,
        |l, a, b| (l, a, b),
        |&(l, a, b)| lab_in_gamut(l, a, b),
    )
}

#[inline]
fn cube(x: f32) -> f32 {
    x * x * x
}

/// A packed Oklab color.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Oklab(u32);

impl Oklab {
    /// Zero L, neutral A and B, zero alpha.
    pub const TRANSPARENT: Oklab = Oklab(0x007F_7F00);

    pub const fn from_bits(bits: u32) -> Self {
        Oklab(bits & codec::STORED_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Packs raw channels in `[0, 1]`; A and B are neutral at 0.5.
    pub fn new(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Oklab(codec::encode(l, a, b, alpha))
    }

    /// Packs Lab floats, with A and B neutral at 0.
    pub fn from_lab(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Oklab(Self::pack_lab(l, a, b) | (codec::encode(0.0, 0.0, 0.0, alpha) & codec::ALPHA_MASK))
    }

    fn pack_lab(l: f32, a: f32, b: f32) -> u32 {
        codec::unit_byte(l) | codec::uncentered(a) << CH2 | codec::uncentered(b) << CH3
    }

    /// Lightness in `[0, 1]`.
    pub fn l(self) -> f32 {
        codec::byte(self.0, CH1) as f32 / 255.0
    }

    /// Green-red opponent channel, roughly `[-1, 1]`.
    pub fn a(self) -> f32 {
        codec::centered(codec::byte(self.0, CH2))
    }

    /// Blue-yellow opponent channel, roughly `[-1, 1]`.
    pub fn b(self) -> f32 {
        codec::centered(codec::byte(self.0, CH3))
    }

    pub fn lab(self) -> (f32, f32, f32) {
        (self.l(), self.a(), self.b())
    }

    /// Euclidean distance of A and B from neutral.
    pub fn chroma(self) -> f32 {
        let (a, b) = (self.a(), self.b());
        (a * a + b * b).sqrt()
    }

    /// Sum of squared differences of the three stored channels, each read
    /// as `byte / 255`.
    pub fn distance_squared(self, other: Oklab) -> f32 {
        [CH1, CH2, CH3]
            .iter()
            .map(|&shift| {
                let d = codec::byte(self.0, shift) as f32 - codec::byte(other.0, shift) as f32;
                d * d
            })
            .sum::<f32>()
            / (255.0 * 255.0)
    }

    pub fn a_up(self, change: f32) -> Self {
        Oklab(codec::raise(self.0, CH2, change))
    }

    pub fn a_down(self, change: f32) -> Self {
        Oklab(codec::lower(self.0, CH2, change))
    }

    pub fn b_up(self, change: f32) -> Self {
        Oklab(codec::raise(self.0, CH3, change))
    }

    pub fn b_down(self, change: f32) -> Self {
        Oklab(codec::lower(self.0, CH3, change))
    }

    fn scale_chroma(self, factor: f32) -> Self {
        let alpha = self.0 & codec::ALPHA_MASK;
        Oklab(Self::pack_lab(self.l(), self.a() * factor, self.b() * factor) | alpha)
    }

    fn has_neutral_chroma(self) -> bool {
        let neutral = |byte: u32| byte == 0x7F || byte == 0x80;
        neutral(codec::byte(self.0, CH2)) && neutral(codec::byte(self.0, CH3))
    }
}

impl PackedColor for Oklab {
    const TRANSPARENT: Self = Oklab::TRANSPARENT;
    const GRAYSCALE_THRESHOLD: f32 = 1.0 / 64.0;

    fn from_bits(bits: u32) -> Self {
        Oklab::from_bits(bits)
    }

    fn to_bits(self) -> u32 {
        self.0
    }

    fn from_rgba8888(rgba: u32) -> Self {
        let channel = |shift: u32| (rgba >> shift & 0xFF) as f32 / 255.0;
        let [l, a, b] = srgb_to_lab(channel(24), channel(16), channel(8));
        Oklab(Self::pack_lab(l, a, b) | (rgba & codec::OPAQUE) << 24)
    }

    fn to_rgba8888(self) -> u32 {
        let [r, g, b] = lab_to_srgb(self.l(), self.a(), self.b());
        let alpha = codec::alpha_byte(self.0);
        codec::unit_byte(r) << 24
            | codec::unit_byte(g) << 16
            | codec::unit_byte(b) << 8
            | alpha
            | alpha >> 7
    }

    fn lighten(self, change: f32) -> Self {
        Oklab(codec::raise(self.0, CH1, change))
    }

    fn darken(self, change: f32) -> Self {
        Oklab(codec::lower(self.0, CH1, change))
    }

    fn enrich(self, change: f32) -> Self {
        self.scale_chroma(1.0 + change).limit_to_gamut()
    }

    fn dullen(self, change: f32) -> Self {
        self.scale_chroma((1.0 - change).max(0.0))
    }

    fn in_gamut(self) -> bool {
        lab_in_gamut(self.l(), self.a(), self.b())
    }

    fn limit_to_gamut(self) -> Self {
        if self.in_gamut() {
            return self;
        }
        let alpha = self.0 & codec::ALPHA_MASK;
        gamut::contract(
            self.lab(),
            GRAY_LIGHTNESS,
            |l, a, b| Oklab(Self::pack_lab(l, a, b) | alpha),
            |candidate| candidate.in_gamut(),
        )
    }

    /// Angle of `(A, B)` in turns; 0 for neutral colors.
    fn hue(self) -> f32 {
        if self.has_neutral_chroma() {
            return 0.0;
        }
        let turns = self.b().atan2(self.a()) / TAU;
        let wrapped = if turns < 0.0 { turns + 1.0 } else { turns };
        if wrapped >= 1.0 { 0.0 } else { wrapped }
    }

    fn saturation(self) -> f32 {
        self.chroma()
    }

    fn lightness(self) -> f32 {
        self.l()
    }

    fn to_oklab(self) -> Oklab {
        self
    }
}

impl fmt::Debug for Oklab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oklab({:#010x})", self.0)
    }
}
