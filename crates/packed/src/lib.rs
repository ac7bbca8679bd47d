//! Bit-packed colors in RGB, IPT and Oklab.
//!
//! Every color here is a single `u32` holding three 8-bit channels and a
//! 7-bit alpha, laid out as `[alpha:8][ch3:8][ch2:8][ch1:8]`. The spaces
//! differ in what the channels mean:
//!
//! | Type | ch1 | ch2 | ch3 |
//! |------|-----|-----|-----|
//! | [`Rgb`] | red | green | blue |
//! | [`Ipt`] | intensity | protan | tritan |
//! | [`Oklab`] | L | A | B |
//!
//! The perceptual spaces store their opponent channels around 127.5, so
//! `0x7F`/`0x80` is neutral.
//!
//! # Editing
//!
//! All three implement [`PackedColor`], which provides lightness and
//! chroma edits, gamut limiting, per-byte interpolation and the space's
//! hue/saturation/lightness descriptors. Nothing in this crate fails: every
//! bit pattern is a color.
//!
//! ```
//! use packed::{Oklab, PackedColor, Rgb};
//!
//! let red = Oklab::from_rgba8888(0xFF0000FF);
//! let deeper = red.darken(0.25).enrich(0.4);
//! assert!(deeper.in_gamut());
//!
//! let purple = packed::mix(&[Rgb::from_bits(0xFE0000FF), Rgb::from_bits(0xFEFF0000)]);
//! assert_eq!(purple.bits(), 0xFE7F007F);
//! ```

pub mod codec;
pub mod color;
pub mod error;
pub mod gamut;
pub mod ipt;
pub mod mix;
pub mod oklab;
pub mod rgb;

// Re-export main types at crate root
pub use color::PackedColor;
pub use error::ColorParseError;
pub use ipt::Ipt;
pub use mix::{mix, uneven_mix};
pub use oklab::Oklab;
pub use rgb::Rgb;
