//! IPT packed colors.
//!
//! Channel 1 is intensity, channel 2 protan (green to red), channel 3 tritan
//! (blue to yellow). The transform is linear: an LMS response matrix followed
//! by the LMS -> IPT matrix, with no power-function step.

use std::fmt;

use crate::codec::{self, CH1, CH2, CH3};
use crate::color::PackedColor;
use crate::gamut;
use crate::rgb::{self, Rgb};

/// Intensity of the gray that out-of-gamut colors are contracted toward.
pub const GRAY_INTENSITY: f32 = 0.5;

/// Neutral gray at half intensity, fully opaque.
const GRAY: u32 = 0xFE80_8080;

/// sRGB floats to `[I, P, T]`, P and T centered on zero.
pub fn srgb_to_ipt(r: f32, g: f32, b: f32) -> [f32; 3] {
    let l = 0.313921 * r + 0.639468 * g + 0.0465970 * b;
    let m = 0.151693 * r + 0.748209 * g + 0.1000044 * b;
    let s = 0.017700 * r + 0.109400 * g + 0.8729000 * b;
    [
        0.4000 * l + 0.4000 * m + 0.2000 * s,
        4.4550 * l - 4.8510 * m + 0.3960 * s,
        0.8056 * l + 0.3572 * m - 1.1628 * s,
    ]
}

/// `[I, P, T]` to RGB floats, unclamped.
pub fn ipt_to_linear(i: f32, p: f32, t: f32) -> [f32; 3] {
    let l = i + 0.097569 * p + 0.205226 * t;
    let m = i - 0.11388 * p + 0.133217 * t;
    let s = i + 0.032615 * p - 0.67689 * t;
    [
        5.432622 * l - 4.679100 * m + 0.246257 * s,
        -1.10517 * l + 2.311198 * m - 0.205880 * s,
        0.028104 * l - 0.194660 * m + 1.166325 * s,
    ]
}

/// `[I, P, T]` to RGB floats clamped to `[0, 1]`.
pub fn ipt_to_srgb(i: f32, p: f32, t: f32) -> [f32; 3] {
    ipt_to_linear(i, p, t).map(|c| c.clamp(0.0, 1.0))
}

/// A packed IPT color.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ipt(u32);

impl Ipt {
    /// Zero intensity, neutral chroma, zero alpha.
    pub const TRANSPARENT: Ipt = Ipt(0x007F_7F00);

    pub const fn from_bits(bits: u32) -> Self {
        Ipt(bits & codec::STORED_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Packs raw channels in `[0, 1]`; P and T are neutral at 0.5.
    pub fn new(intensity: f32, protan: f32, tritan: f32, alpha: f32) -> Self {
        Ipt(codec::encode(intensity, protan, tritan, alpha))
    }

    /// Converts sRGB floats in `[0, 1]`.
    pub fn from_srgb(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let [i, p, t] = srgb_to_ipt(r, g, b);
        let chroma = |v: f32| ((v * 127.5 + 127.5) as i32).clamp(0, 255) as u32;
        let alpha = codec::encode(0.0, 0.0, 0.0, alpha) & codec::ALPHA_MASK;
        Ipt(((i * 255.0 + 0.5) as i32).clamp(0, 255) as u32
            | chroma(p) << CH2
            | chroma(t) << CH3
            | alpha)
    }

    /// Creates a color from HSL values, hue in turns.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        if lightness <= 0.001 {
            return Ipt(codec::encode(0.0, 0.0, 0.0, alpha) & codec::ALPHA_MASK | 0x007F_7F00);
        }
        let (r, g, b) = rgb::hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.min(1.0));
        Self::from_srgb(r, g, b, alpha)
    }

    pub fn intensity(self) -> f32 {
        codec::byte(self.0, CH1) as f32 / 255.0
    }

    /// Protan as stored, `(byte - 127.5) / 127.5`.
    pub fn protan(self) -> f32 {
        codec::centered(codec::byte(self.0, CH2))
    }

    /// Tritan as stored, `(byte - 127.5) / 127.5`.
    pub fn tritan(self) -> f32 {
        codec::centered(codec::byte(self.0, CH3))
    }

    pub fn ipt(self) -> (f32, f32, f32) {
        (self.intensity(), self.protan(), self.tritan())
    }

    /// Reconstructed sRGB, clamped.
    pub fn srgb(self) -> [f32; 3] {
        ipt_to_srgb(self.intensity(), self.protan(), self.tritan())
    }

    pub fn protan_up(self, change: f32) -> Self {
        Ipt(codec::raise(self.0, CH2, change))
    }

    pub fn protan_down(self, change: f32) -> Self {
        Ipt(codec::lower(self.0, CH2, change))
    }

    pub fn tritan_up(self, change: f32) -> Self {
        Ipt(codec::raise(self.0, CH3, change))
    }

    pub fn tritan_down(self, change: f32) -> Self {
        Ipt(codec::lower(self.0, CH3, change))
    }

    /// Pulls every channel, alpha included, toward opaque neutral gray.
    ///
    /// `fraction` is how much of `self` is kept: 1 returns it unchanged,
    /// 0 returns gray.
    pub fn lessen_change(self, fraction: f32) -> Self {
        Ipt(codec::lerp(GRAY, self.0, fraction))
    }

    /// Keeps chroma and alpha but flips intensity to contrast with
    /// `contrasting`: a dark background gets a light result and the
    /// reverse. Colors whose chroma is already far from `contrasting`'s
    /// come back unchanged.
    pub fn inverse_intensity(self, contrasting: Ipt) -> Self {
        let dp = codec::byte(self.0, CH2) as i32 - codec::byte(contrasting.0, CH2) as i32;
        let dt = codec::byte(self.0, CH3) as i32 - codec::byte(contrasting.0, CH3) as i32;
        if dp * dp + dt * dt >= 0x10000 {
            return self;
        }
        let i = codec::byte(self.0, CH1) as f32;
        let intensity = if codec::byte(contrasting.0, CH1) < 128 {
            i * (0.45 / 255.0) + 0.55
        } else {
            0.5 - i * (0.45 / 255.0)
        };
        Ipt(codec::with_byte(self.0, CH1, codec::unit_byte(intensity)))
    }

    /// Shifts hue, saturation, intensity and opacity by additive amounts.
    ///
    /// Hue wraps; the other three clamp to `[0, 1]`.
    pub fn edited(self, hue: f32, saturation: f32, value: f32, opacity: f32) -> Self {
        let i = (value + self.intensity()).clamp(0.0, 1.0);
        let alpha = (opacity + codec::alpha_byte(self.0) as f32 / 254.0).clamp(0.0, 1.0);
        if i <= 0.001 {
            return Ipt(codec::encode(0.0, 0.0, 0.0, alpha) & codec::ALPHA_MASK | 0x0080_8000);
        }
        let [r, g, b] = ipt_to_srgb(i, self.protan(), self.tritan());
        let (h, s, _) = rgb::rgb_to_hsl(r, g, b);
        let (r, g, b) = rgb::hsl_to_rgb(h + hue, (s + saturation).clamp(0.0, 1.0), i);
        Self::from_srgb(r, g, b, alpha)
    }

    fn scale_chroma(self, factor: f32) -> Self {
        Ipt(Self::pack_ipt(self.intensity(), self.protan() * factor, self.tritan() * factor)
            | self.0 & codec::ALPHA_MASK)
    }

    fn pack_ipt(i: f32, p: f32, t: f32) -> u32 {
        codec::unit_byte(i) | codec::uncentered(p) << CH2 | codec::uncentered(t) << CH3
    }

    /// Max and min of the reconstructed, clamped RGB channels.
    fn extremes(self) -> (f32, f32) {
        let [r, g, b] = self.srgb();
        (r.max(g).max(b), r.min(g).min(b))
    }
}

impl PackedColor for Ipt {
    const TRANSPARENT: Self = Ipt::TRANSPARENT;
    const GRAYSCALE_THRESHOLD: f32 = 0.05;

    fn from_bits(bits: u32) -> Self {
        Ipt::from_bits(bits)
    }

    fn to_bits(self) -> u32 {
        self.0
    }

    fn from_rgba8888(rgba: u32) -> Self {
        let channel = |shift: u32| (rgba >> shift & 0xFF) as f32 / 255.0;
        let alpha = (rgba & codec::OPAQUE) as f32 / 254.0;
        Self::from_srgb(channel(24), channel(16), channel(8), alpha)
    }

    fn to_rgba8888(self) -> u32 {
        let [r, g, b] = self.srgb();
        let alpha = codec::alpha_byte(self.0);
        codec::unit_byte(r) << 24
            | codec::unit_byte(g) << 16
            | codec::unit_byte(b) << 8
            | alpha
            | alpha >> 7
    }

    fn lighten(self, change: f32) -> Self {
        Ipt(codec::raise(self.0, CH1, change))
    }

    fn darken(self, change: f32) -> Self {
        Ipt(codec::lower(self.0, CH1, change))
    }

    fn enrich(self, change: f32) -> Self {
        self.scale_chroma(1.0 + change).limit_to_gamut()
    }

    fn dullen(self, change: f32) -> Self {
        self.scale_chroma((1.0 - change).max(0.0))
    }

    fn in_gamut(self) -> bool {
        gamut::channels_in_gamut(ipt_to_linear(self.intensity(), self.protan(), self.tritan()))
    }

    fn limit_to_gamut(self) -> Self {
        if self.in_gamut() {
            return self;
        }
        let alpha = self.0 & codec::ALPHA_MASK;
        gamut::contract(
            self.ipt(),
            GRAY_INTENSITY,
            |i, p, t| Ipt(Self::pack_ipt(i, p, t) | alpha),
            |candidate| candidate.in_gamut(),
        )
    }

    fn hue(self) -> f32 {
        let [r, g, b] = self.srgb();
        rgb::rgb_to_hsl(r, g, b).0
    }

    /// Spread between the brightest and darkest reconstructed channel.
    /// Near-black and near-white intensities report 0.
    fn saturation(self) -> f32 {
        if (self.intensity() - 0.5).abs() > 0.495 {
            return 0.0;
        }
        let (max, min) = self.extremes();
        max - min
    }

    fn lightness(self) -> f32 {
        let (max, min) = self.extremes();
        let d = max - min;
        max * (1.0 - 0.5 * d / (max + 1e-10))
    }
}

impl From<Rgb> for Ipt {
    fn from(color: Rgb) -> Self {
        Ipt::from_rgba8888(color.to_rgba8888())
    }
}

impl fmt::Debug for Ipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipt({:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== CONVERSION TESTS ====================

    #[test]
    fn white_is_full_intensity_and_neutral() {
        let white = Ipt::from_rgba8888(0xFFFF_FFFF);
        assert_eq!(codec::byte(white.bits(), CH1), 255);
        assert!(white.protan().abs() < 0.01);
        assert!(white.tritan().abs() < 0.01);
        assert_eq!(white.bits() >> 24, 0xFE);
    }

    #[test]
    fn srgb_round_trip_is_close() {
        for (r, g, b) in [(1.0, 0.0, 0.0), (0.2, 0.7, 0.4), (0.5, 0.5, 0.5), (0.1, 0.2, 0.9)] {
            let [i, p, t] = srgb_to_ipt(r, g, b);
            let [r2, g2, b2] = ipt_to_linear(i, p, t);
            assert!((r - r2).abs() < 0.01, "red {r} vs {r2}");
            assert!((g - g2).abs() < 0.01, "green {g} vs {g2}");
            assert!((b - b2).abs() < 0.01, "blue {b} vs {b2}");
        }
    }

    #[test]
    fn rgba8888_round_trip_is_close() {
        for rgba in [0xFF00_00FFu32, 0x20C0_40FF, 0x8080_80FF, 0x1020_F0FF] {
            let back = Ipt::from_rgba8888(rgba).to_rgba8888();
            for shift in [8, 16, 24] {
                let diff = (rgba >> shift & 0xFF) as i32 - (back >> shift & 0xFF) as i32;
                assert!(diff.abs() <= 4, "{rgba:#010x} -> {back:#010x}");
            }
        }
    }

    // ==================== DESCRIPTOR TESTS ====================

    #[test]
    fn gray_has_low_saturation() {
        let gray = Ipt::from_rgba8888(0x8080_80FF);
        assert!(gray.saturation() < 0.05);
        let red = Ipt::from_rgba8888(0xFF00_00FF);
        assert!(red.saturation() > 0.8);
    }

    #[test]
    fn extreme_intensity_reports_no_saturation() {
        assert_eq!(Ipt::from_bits(0xFE80_80FF).saturation(), 0.0);
        assert_eq!(Ipt::from_bits(0xFE80_8000).saturation(), 0.0);
    }

    #[test]
    fn lightness_tracks_intensity() {
        let dark = Ipt::from_rgba8888(0x4040_40FF);
        let light = Ipt::from_rgba8888(0xC0C0_C0FF);
        assert!(dark.lightness() < light.lightness());
    }

    #[test]
    fn hue_of_primaries() {
        let red = Ipt::from_rgba8888(0xFF00_00FF).hue();
        assert!(red < 0.05 || red > 0.95, "{red}");
        let blue = Ipt::from_rgba8888(0x0000_FFFF).hue();
        assert!((blue - 2.0 / 3.0).abs() < 0.05, "{blue}");
    }

    // ==================== EDIT TESTS ====================

    #[test]
    fn channel_nudges_keep_other_bytes() {
        let c = Ipt::from_bits(0xFE40_8060);
        assert_eq!(c.protan_up(1.0).bits(), 0xFE40_FF60);
        assert_eq!(c.protan_down(1.0).bits(), 0xFE40_0060);
        assert_eq!(c.tritan_up(1.0).bits(), 0xFEFF_8060);
        assert_eq!(c.tritan_down(1.0).bits(), 0xFE00_8060);
        assert_eq!(c.lighten(1.0).bits(), 0xFE40_80FF);
        assert_eq!(c.darken(1.0).bits(), 0xFE40_8000);
    }

    #[test]
    fn lessen_change_endpoints() {
        let c = Ipt::from_bits(0x8040_C020);
        assert_eq!(c.lessen_change(1.0), c);
        assert_eq!(c.lessen_change(0.0).bits(), GRAY);
    }

    #[test]
    fn inverse_intensity_contrasts() {
        let dark_bg = Ipt::from_bits(0xFE80_8010);
        let light_bg = Ipt::from_bits(0xFE80_80F0);
        let text = Ipt::from_bits(0xFE70_9040);
        assert!(text.inverse_intensity(dark_bg).intensity() > 0.5);
        assert!(text.inverse_intensity(light_bg).intensity() < 0.5);
        assert_eq!(text.inverse_intensity(dark_bg).bits() & 0xFFFF_FF00, 0xFE70_9000);
    }

    #[test]
    fn inverse_intensity_skips_distant_chroma() {
        let bg = Ipt::from_bits(0xFE00_0010);
        let far = Ipt::from_bits(0xFEFF_FF40);
        assert_eq!(far.inverse_intensity(bg), far);
        // 255 apart on one channel only stays under the cutoff
        let near = Ipt::from_bits(0xFE00_FF40);
        assert_ne!(near.inverse_intensity(bg), near);
        assert!(near.inverse_intensity(bg).intensity() > 0.5);
    }

    #[test]
    fn edited_with_no_change_is_close() {
        let c = Ipt::from_rgba8888(0x3080_C0FF);
        let same = c.edited(0.0, 0.0, 0.0, 0.0);
        assert!((same.intensity() - c.intensity()).abs() < 0.05);
        assert_eq!(same.bits() >> 24, 0xFE);
    }

    #[test]
    fn edited_to_black_and_transparent() {
        let c = Ipt::from_rgba8888(0x3080_C0FF);
        let black = c.edited(0.0, 0.0, -1.0, -1.0);
        assert_eq!(black.bits(), 0x0080_8000);
    }

    #[test]
    fn enrich_then_dullen() {
        let c = Ipt::from_rgba8888(0x6080_A0FF);
        assert!(c.enrich(0.5).saturation() > c.saturation());
        assert!(c.dullen(0.5).saturation() < c.saturation());
        assert!(c.enrich(4.0).in_gamut());
    }

    // ==================== GAMUT TESTS ====================

    #[test]
    fn converted_primaries_limit_nearby() {
        for rgba in [0xFF00_00FFu32, 0x00FF_00FF, 0x0000_FFFF, 0xFFFF_FFFF, 0x0000_00FF] {
            let c = Ipt::from_rgba8888(rgba);
            let limited = c.limit_to_gamut();
            assert!(limited.in_gamut(), "{rgba:#010x}");
            assert!((limited.intensity() - c.intensity()).abs() < 0.05, "{rgba:#010x}");
        }
        let gray = Ipt::from_rgba8888(0x8080_80FF);
        assert!(gray.in_gamut());
        assert_eq!(gray.limit_to_gamut(), gray);
    }

    #[test]
    fn wild_chroma_is_pulled_in() {
        let wild = Ipt::from_bits(0xFE00_FF80);
        assert!(!wild.in_gamut());
        let limited = wild.limit_to_gamut();
        let linear = ipt_to_linear(limited.intensity(), limited.protan(), limited.tritan());
        assert!(linear.iter().all(|c| (-1e-3..=1.0 + 1e-3).contains(c)), "{linear:?}");
    }
}
