//! Named palettes and a small language for describing colors.
//!
//! A description is a run of adjectives, color names and (in the extended
//! grammar) mix weights:
//!
//! - `"red"` - a palette color
//! - `"red blue"` - an even mix
//! - `"red^3 blue"` - three parts red to one part blue
//! - `"darker rich mint sage"` - a mix, two levels darker, one level richer
//!
//! Parsing never fails. Unknown names mix in as transparent, and a
//! description with no names at all is transparent.
//!
//! # Usage
//!
//! ```
//! use describe::{Describe, parse_rgb};
//! use packed::{Oklab, Rgb};
//!
//! assert_eq!(parse_rgb("red blue").bits(), 0xFE7F007F);
//!
//! let sage = Oklab::parse_description("dark sage");
//! assert!(packed::PackedColor::in_gamut(sage));
//!
//! let found = Rgb::from_bits(0xFE7F007F).best_match(2);
//! assert_eq!(parse_rgb(&found.description), found.color);
//! ```
//!
//! The built-in tables live in [`palettes`]; other tables can be built with
//! [`NamedColorTable::builder`] or loaded from text with
//! [`palette_file::load_palette_str`].

pub mod best_match;
pub mod error;
pub mod grammar;
pub mod log_init;
pub mod palette_file;
pub mod palettes;
pub mod parser;
pub mod table;

use packed::{Ipt, Oklab, PackedColor, Rgb};

// Re-export main types at crate root
pub use best_match::{BestMatch, BestMatchResult};
pub use error::{LogInitError, PaletteError};
pub use grammar::{Adjustment, Grammar, GrammarFeatures, Word};
pub use log_init::init_logger;
pub use palette_file::{load_palette_file, load_palette_str};
pub use parser::DescriptionParser;
pub use table::{NamedColorTable, NamedColorTableBuilder};

/// A color space with a built-in palette and grammar.
pub trait Describe: PackedColor {
    fn palette() -> &'static NamedColorTable<Self>;

    fn grammar() -> Grammar;

    fn parser() -> DescriptionParser<'static, Self> {
        DescriptionParser::new(Self::palette(), Self::grammar())
    }

    /// Evaluates `description` against the built-in palette.
    fn parse_description(description: &str) -> Self {
        Self::parser().parse(description)
    }

    /// Searches the built-in palette for the closest description of `self`.
    fn best_match(self, mix_count: u32) -> BestMatchResult<Self> {
        BestMatch::new(Self::palette(), Self::grammar())
            .mix_count(mix_count)
            .run(self)
    }
}

impl Describe for Rgb {
    fn palette() -> &'static NamedColorTable<Self> {
        palettes::rgb()
    }

    fn grammar() -> Grammar {
        Grammar::extended()
    }
}

impl Describe for Oklab {
    fn palette() -> &'static NamedColorTable<Self> {
        palettes::oklab()
    }

    fn grammar() -> Grammar {
        Grammar::basic()
    }
}

impl Describe for Ipt {
    fn palette() -> &'static NamedColorTable<Self> {
        palettes::ipt()
    }

    fn grammar() -> Grammar {
        Grammar::basic()
    }
}

/// Parses a description in any built-in space.
pub fn parse_description<C: Describe>(description: &str) -> C {
    C::parse_description(description)
}

/// The closest description of `color` that mixes `mix_count` names,
/// repeats allowed.
pub fn best_match<C: Describe>(color: C, mix_count: u32) -> String {
    color.best_match(mix_count).description
}

pub fn parse_rgb(description: &str) -> Rgb {
    Rgb::parse_description(description)
}

pub fn parse_oklab(description: &str) -> Oklab {
    Oklab::parse_description(description)
}

pub fn parse_ipt(description: &str) -> Ipt {
    Ipt::parse_description(description)
}
