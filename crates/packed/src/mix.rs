//! Blending several packed colors into one.
//!
//! Both mixes fold left with [`PackedColor::lerp`], so they work byte by
//! byte in whatever space the colors are stored in.

use crate::color::PackedColor;

/// Mixes colors with equal weight.
///
/// The i-th color (from zero) contributes `1 / (i + 1)` of the blend at its
/// step. No colors gives [`PackedColor::TRANSPARENT`].
pub fn mix<C: PackedColor>(colors: &[C]) -> C {
    let Some((&first, rest)) = colors.split_first() else {
        return C::TRANSPARENT;
    };
    rest.iter()
        .zip(2u32..)
        .fold(first, |result, (&color, denom)| result.lerp(color, 1.0 / denom as f32))
}

/// Mixes `(color, weight)` pairs, heavier entries pulling harder.
///
/// Keeps a running weight; each entry moves the result
/// `weight / (running + weight)` of the way toward itself. Entries that
/// would leave the running weight at or below zero are skipped.
pub fn uneven_mix<C: PackedColor>(pairs: &[(C, f32)]) -> C {
    let Some((&(first, first_weight), rest)) = pairs.split_first() else {
        return C::TRANSPARENT;
    };
    let (mixed, _) = rest
        .iter()
        .fold((first, first_weight), |(running, total), &(color, weight)| {
            let next = total + weight;
            if next <= 0.0 {
                (running, total)
            } else {
                (running.lerp(color, weight / next), next)
            }
        });
    mixed
}
