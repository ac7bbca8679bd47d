//! Gray-ward contraction of out-of-gamut perceptual colors.
//!
//! Both perceptual spaces store a lightness-like channel and two opponent
//! channels centered on zero. When editing pushes a color outside the sRGB
//! cube, [`contract`] walks it toward a neutral gray of fixed lightness in 32
//! steps, least contracted first, and keeps the first candidate the space
//! accepts.

/// Float error allowed on either side of `[0, 1]` for a reconstructed linear
/// channel. Far below one 8-bit step, so colors quantized from 8-bit RGB
/// near the cube's faces can fall outside and get contracted.
pub const GAMUT_EPSILON: f32 = 1.0e-3;

/// Number of contraction steps tried.
pub const ATTEMPTS: u32 = 32;

/// Whether every reconstructed linear channel is displayable.
#[inline]
pub fn channels_in_gamut(rgb: [f32; 3]) -> bool {
    rgb.iter()
        .all(|&c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&c))
}

/// Walks `(l, a, b)` toward `(gray, 0, 0)`.
///
/// Each candidate keeps `attempt / 32` of the distance from gray, for
/// `attempt` from 31 down to 0. `build` turns a candidate into the output
/// value and `accept` decides whether it is in gamut; the first accepted
/// value is returned. If nothing is accepted the fully gray candidate is
/// returned anyway.
///
/// The caller is responsible for checking the unmodified color first, so
/// that in-gamut input comes back bit-for-bit.
pub fn contract<T>(
    (l, a, b): (f32, f32, f32),
    gray: f32,
    mut build: impl FnMut(f32, f32, f32) -> T,
    mut accept: impl FnMut(&T) -> bool,
) -> T {
    let mut attempt = ATTEMPTS - 1;
    loop {
        let progress = attempt as f32 / ATTEMPTS as f32;
        let candidate = build(gray + (l - gray) * progress, a * progress, b * progress);
        if attempt == 0 || accept(&candidate) {
            return candidate;
        }
        attempt -= 1;
    }
}
