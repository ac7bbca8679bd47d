//! Packed perceptual colors and a color description language.
//!
//! This crate re-exports the two workspace members:
//!
//! - [`packed`]: bit-packed RGB, IPT and Oklab colors, conversions, gamut
//!   limiting and mixing.
//! - [`describe`]: named palettes, the description parser and best-match
//!   search.
//!
//! ```
//! use colorful_rs::{Describe, Oklab, Rgb};
//!
//! let teal = Rgb::parse_description("darker rich teal");
//! let again = Oklab::parse_description("darker rich teal");
//! assert_ne!(teal, Rgb::TRANSPARENT);
//! assert_ne!(again, Oklab::TRANSPARENT);
//! ```

pub use describe;
pub use packed;

pub use describe::{
    BestMatch, BestMatchResult, Describe, DescriptionParser, Grammar, GrammarFeatures,
    NamedColorTable, PaletteError, best_match, palettes, parse_description, parse_ipt,
    parse_oklab, parse_rgb,
};
pub use packed::{ColorParseError, Ipt, Oklab, PackedColor, Rgb, mix, uneven_mix};
