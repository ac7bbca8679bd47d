//! Plain RGB packed colors.
//!
//! Channel 1 is red, 2 is green, 3 is blue, so the packed word reads as ABGR
//! when printed in hex. Hue, saturation and lightness are the usual HSL
//! quantities.

use std::fmt;
use std::str::FromStr;

use crate::codec::{self, CH1, CH2, CH3};
use crate::color::PackedColor;
use crate::error::ColorParseError;
use crate::oklab;

/// A packed RGB color.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    pub const TRANSPARENT: Rgb = Rgb(0);
    pub const BLACK: Rgb = Rgb(0xFE00_0000);
    pub const WHITE: Rgb = Rgb(0xFEFF_FFFF);

    /// Wraps raw packed bits. The low bit of the alpha byte is dropped.
    pub const fn from_bits(bits: u32) -> Self {
        Rgb(bits & codec::STORED_MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Packs float channels in `[0, 1]`.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Rgb(codec::encode(red, green, blue, alpha))
    }

    /// Packs byte channels. Alpha keeps its top seven bits.
    pub const fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Rgb(((alpha as u32) << 24 | (blue as u32) << 16 | (green as u32) << 8 | red as u32)
            & codec::STORED_MASK)
    }

    pub const fn red(self) -> u8 {
        codec::byte(self.0, CH1) as u8
    }

    pub const fn green(self) -> u8 {
        codec::byte(self.0, CH2) as u8
    }

    pub const fn blue(self) -> u8 {
        codec::byte(self.0, CH3) as u8
    }

    pub const fn alpha_byte(self) -> u8 {
        codec::alpha_byte(self.0) as u8
    }

    /// Red, green and blue as floats in `[0, 1]`.
    pub fn channels(self) -> [f32; 3] {
        let [r, g, b, _] = codec::decode(self.0);
        [r, g, b]
    }

    /// Hue in `[0, 1)`, saturation and lightness in `[0, 1]`.
    pub fn hsl(self) -> (f32, f32, f32) {
        let [r, g, b] = self.channels();
        rgb_to_hsl(r, g, b)
    }

    /// Creates a color from HSL values, hue in turns.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        Self::from_floats_rounded(r, g, b, alpha)
    }

    /// Packs floats, rounding rather than truncating each channel.
    pub(crate) fn from_floats_rounded(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let round = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_bytes(round(r), round(g), round(b), round(alpha))
    }

    /// Parses a hex literal.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the `#` is
    /// optional. Without an alpha component the color is opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed::Rgb;
    ///
    /// let red = Rgb::from_hex("#ff0000").unwrap();
    /// assert_eq!(red.bits(), 0xFE0000FF);
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = input.strip_prefix('#').unwrap_or(input);
        let digits = hex
            .chars()
            .map(|c| parse_hex_digit(c).ok_or_else(|| ColorParseError::InvalidHex(input.to_string())))
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            // #RGB
            [r, g, b] => Ok(Self::from_bytes(r * 17, g * 17, b * 17, 0xFE)),
            // #RGBA
            [r, g, b, a] => Ok(Self::from_bytes(r * 17, g * 17, b * 17, a * 17)),
            // #RRGGBB
            [r1, r2, g1, g2, b1, b2] => Ok(Self::from_bytes(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                0xFE,
            )),
            // #RRGGBBAA
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::from_bytes(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(ColorParseError::InvalidLength(digits.len())),
        }
    }

    /// Formats as `#rrggbbaa`, alpha widened back to a full byte.
    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.to_rgba8888())
    }

    fn scale_chroma(self, factor: f32, limit: bool) -> Self {
        let [r, g, b, alpha] = codec::decode(self.0);
        let [l, a, bb] = oklab::srgb_to_lab(r, g, b);
        let (l, a, bb) = if limit {
            oklab::limit_lab(l, a * factor, bb * factor)
        } else {
            (l, a * factor, bb * factor)
        };
        let [r, g, b] = oklab::lab_to_srgb(l, a, bb);
        Rgb(codec::unit_byte(r) | codec::unit_byte(g) << CH2 | codec::unit_byte(b) << CH3)
            .with_alpha_of(alpha)
    }

    fn with_alpha_of(self, alpha: f32) -> Self {
        Rgb(self.0 & codec::CHANNEL_MASK | ((alpha * 254.0).round() as u32 & codec::OPAQUE) << 24)
    }
}

impl PackedColor for Rgb {
    const TRANSPARENT: Self = Rgb::TRANSPARENT;
    const GRAYSCALE_THRESHOLD: f32 = 0.05;

    fn from_bits(bits: u32) -> Self {
        Rgb::from_bits(bits)
    }

    fn to_bits(self) -> u32 {
        self.0
    }

    fn from_rgba8888(rgba: u32) -> Self {
        Self::from_bytes(
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        )
    }

    fn to_rgba8888(self) -> u32 {
        let alpha = codec::alpha_byte(self.0);
        (self.red() as u32) << 24
            | (self.green() as u32) << 16
            | (self.blue() as u32) << 8
            | alpha
            | alpha >> 7
    }

    fn lighten(self, change: f32) -> Self {
        let bits = codec::raise(self.0, CH1, change);
        let bits = codec::raise(bits, CH2, change);
        Rgb(codec::raise(bits, CH3, change))
    }

    fn darken(self, change: f32) -> Self {
        let bits = codec::lower(self.0, CH1, change);
        let bits = codec::lower(bits, CH2, change);
        Rgb(codec::lower(bits, CH3, change))
    }

    /// Scales Oklab chroma up, then pulls the result back into gamut.
    fn enrich(self, change: f32) -> Self {
        self.scale_chroma(1.0 + change, true)
    }

    fn dullen(self, change: f32) -> Self {
        self.scale_chroma((1.0 - change).max(0.0), false)
    }

    fn in_gamut(self) -> bool {
        true
    }

    fn limit_to_gamut(self) -> Self {
        self
    }

    fn hue(self) -> f32 {
        self.hsl().0
    }

    fn saturation(self) -> f32 {
        self.hsl().1
    }

    fn lightness(self) -> f32 {
        self.hsl().2
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({:#010x})", self.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// RGB floats to HSL, hue in turns.
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + (if g < b { 6.0 } else { 0.0 })
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = h / 6.0;
    (if h >= 1.0 { h - 1.0 } else { h }, s, l)
}

/// HSL to RGB floats, hue in turns.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }
    let h = h - h.floor();
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
