//! Bit layout shared by every packed color.
//!
//! A packed color holds four 8-bit channels in one `u32`, laid out as
//! `[alpha:8][ch3:8][ch2:8][ch1:8]` with channel 1 in the lowest byte. The
//! meaning of the three color channels depends on the space (red/green/blue,
//! intensity/protan/tritan, or lightness/a/b), but the byte arithmetic here
//! does not.
//!
//! Alpha keeps only the top seven bits of its byte, so a stored alpha byte is
//! always even and fully opaque is `0xFE`.

/// Bits of the alpha byte that survive packing.
pub const ALPHA_MASK: u32 = 0xFE00_0000;

/// The three color channels.
pub const CHANNEL_MASK: u32 = 0x00FF_FFFF;

/// Every bit a well-formed packed color may have set.
pub const STORED_MASK: u32 = ALPHA_MASK | CHANNEL_MASK;

/// Opaque alpha byte.
pub const OPAQUE: u32 = 0xFE;

/// Shift of channel 1 (red, intensity, lightness).
pub const CH1: u32 = 0;
/// Shift of channel 2 (green, protan, A).
pub const CH2: u32 = 8;
/// Shift of channel 3 (blue, tritan, B).
pub const CH3: u32 = 16;
/// Shift of the alpha byte.
pub const ALPHA: u32 = 24;

/// Converts a float to a byte the way a packing cast does: scale, truncate
/// toward zero, keep the low eight bits.
#[inline]
fn scaled_byte(value: f32, scale: f32) -> u32 {
    // `as i32` saturates out-of-range floats and maps NaN to 0.
    (value * scale) as i32 as u32 & 0xFF
}

/// Packs four channels in `[0, 1]` into one word.
///
/// Out-of-range inputs wrap within their byte rather than clamping.
pub fn encode(c1: f32, c2: f32, c3: f32, alpha: f32) -> u32 {
    (scaled_byte(alpha, 255.0) << ALPHA) & ALPHA_MASK
        | scaled_byte(c3, 255.0) << CH3
        | scaled_byte(c2, 255.0) << CH2
        | scaled_byte(c1, 255.0)
}

/// Unpacks a word into `[c1, c2, c3, alpha]`, each in `[0, 1]`.
pub fn decode(bits: u32) -> [f32; 4] {
    [
        byte(bits, CH1) as f32 / 255.0,
        byte(bits, CH2) as f32 / 255.0,
        byte(bits, CH3) as f32 / 255.0,
        alpha_byte(bits) as f32 / 254.0,
    ]
}

/// Reads the byte at `shift`.
#[inline]
pub const fn byte(bits: u32, shift: u32) -> u32 {
    bits >> shift & 0xFF
}

/// Reads the alpha byte with its low bit cleared.
#[inline]
pub const fn alpha_byte(bits: u32) -> u32 {
    bits >> ALPHA & OPAQUE
}

/// Replaces the byte at `shift`, keeping the stored-bit mask intact.
#[inline]
pub const fn with_byte(bits: u32, shift: u32, value: u32) -> u32 {
    (bits & !(0xFF << shift) | (value & 0xFF) << shift) & STORED_MASK
}

/// Decodes a chromatic byte stored around 127.5 into roughly `[-1, 1]`.
#[inline]
pub fn centered(byte: u32) -> f32 {
    (byte as f32 - 127.5) / 127.5
}

/// Encodes a chromatic value in `[-1, 1]` so that [`centered`] returns the
/// same byte. Clamped to `0..=255`.
#[inline]
pub fn uncentered(value: f32) -> u32 {
    ((value * 127.999 + 128.0) as i32).clamp(0, 255) as u32
}

/// Encodes a value in `[0, 1]` so that dividing by 255 returns the same byte.
/// Clamped to `0..=255`.
#[inline]
pub fn unit_byte(value: f32) -> u32 {
    ((value * 255.999) as i32).clamp(0, 255) as u32
}

/// Moves the byte at `shift` toward 255 by `change`.
pub fn raise(bits: u32, shift: u32, change: f32) -> u32 {
    let v = byte(bits, shift);
    with_byte(bits, shift, (v as f32 + (255 - v) as f32 * change) as i32 as u32)
}

/// Moves the byte at `shift` toward 0 by `change`.
pub fn lower(bits: u32, shift: u32, change: f32) -> u32 {
    let v = byte(bits, shift);
    with_byte(bits, shift, (v as f32 * (1.0 - change)) as i32 as u32)
}

/// Moves alpha toward fully opaque by `change`.
pub fn blot(bits: u32, change: f32) -> u32 {
    let opacity = alpha_byte(bits);
    let raised = (opacity as f32 + (OPAQUE - opacity) as f32 * change) as i32 as u32 & OPAQUE;
    bits & CHANNEL_MASK | raised << ALPHA
}

/// Moves alpha toward fully transparent by `change`.
pub fn fade(bits: u32, change: f32) -> u32 {
    let opacity = alpha_byte(bits);
    let lowered = (opacity as f32 * (1.0 - change)) as i32 as u32 & OPAQUE;
    bits & CHANNEL_MASK | lowered << ALPHA
}

/// Interpolates every byte, alpha included, from `start` toward `end`.
///
/// `change` of 0 keeps `start`, 1 reaches `end`.
pub fn lerp(start: u32, end: u32, change: f32) -> u32 {
    let step = |shift: u32| {
        let s = byte(start, shift) as f32;
        let e = byte(end, shift) as f32;
        (s + change * (e - s)) as i32 as u32 & 0xFF
    };
    (step(ALPHA) & OPAQUE) << ALPHA | step(CH3) << CH3 | step(CH2) << CH2 | step(CH1)
}
