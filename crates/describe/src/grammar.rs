//! Grammar configuration for color descriptions.
//!
//! A [`Grammar`] decides which characters make up a token, which adjectives
//! are recognized, how far each adjective level moves lightness and
//! saturation, and whether numbers set mix weights. The two presets mirror
//! the two vocabularies in use: [`Grammar::extended`] for RGB and
//! [`Grammar::basic`] for the perceptual spaces.

use std::ops::{AddAssign, Neg};

use bitflags::bitflags;
use packed::PackedColor;

bitflags! {
    /// Optional parts of the description language.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GrammarFeatures: u8 {
        /// `bright`, `pale`, `deep` and `weak`.
        const COMPOUNDS = 1 << 0;
        /// Digits and `_` are token characters; digit-led tokens set weights.
        const WEIGHTS = 1 << 1;
        /// `.` is a token character, for decimal weights.
        const DECIMALS = 1 << 2;
    }
}

/// An adjective recognized by its first letter and one more character.
///
/// The token's length then selects an intensity level; lengths not listed
/// in `levels` leave the token to be looked up as a color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjective {
    pub word: &'static str,
    /// Lowercase first letter.
    pub initial: u8,
    /// `(index, lowercase byte)` that must also match.
    pub check: (usize, u8),
    /// `(token length, level)` pairs.
    pub levels: &'static [(usize, u8)],
    /// Sign of the lightness change per level: -1, 0 or 1.
    pub lightness: i8,
    /// Sign of the saturation change per level: -1, 0 or 1.
    pub saturation: i8,
    /// Needs [`GrammarFeatures::COMPOUNDS`].
    pub compound: bool,
}

const FOUR_LETTER_LEVELS: &[(usize, u8)] = &[(4, 1), (6, 2), (7, 3), (8, 4)];

/// Every adjective, in matching order.
pub static ADJECTIVES: [Adjective; 8] = [
    Adjective {
        word: "light",
        initial: b'l',
        check: (2, b'g'),
        levels: &[(5, 1), (7, 2), (8, 3), (9, 4)],
        lightness: 1,
        saturation: 0,
        compound: false,
    },
    Adjective {
        word: "bright",
        initial: b'b',
        check: (3, b'g'),
        levels: &[(6, 1), (8, 2), (9, 3), (10, 4)],
        lightness: 1,
        saturation: 1,
        compound: true,
    },
    Adjective {
        word: "pale",
        initial: b'p',
        check: (2, b'l'),
        levels: &[(4, 1), (5, 2), (6, 3), (7, 4), (8, 4)],
        lightness: 1,
        saturation: -1,
        compound: true,
    },
    Adjective {
        word: "weak",
        initial: b'w',
        check: (3, b'k'),
        levels: FOUR_LETTER_LEVELS,
        lightness: -1,
        saturation: -1,
        compound: true,
    },
    Adjective {
        word: "rich",
        initial: b'r',
        check: (1, b'i'),
        levels: FOUR_LETTER_LEVELS,
        lightness: 0,
        saturation: 1,
        compound: false,
    },
    Adjective {
        word: "dark",
        initial: b'd',
        check: (1, b'a'),
        levels: FOUR_LETTER_LEVELS,
        lightness: -1,
        saturation: 0,
        compound: false,
    },
    Adjective {
        word: "dull",
        initial: b'd',
        check: (1, b'u'),
        levels: FOUR_LETTER_LEVELS,
        lightness: 0,
        saturation: -1,
        compound: false,
    },
    Adjective {
        word: "deep",
        initial: b'd',
        check: (3, b'p'),
        levels: FOUR_LETTER_LEVELS,
        lightness: -1,
        saturation: 1,
        compound: true,
    },
];

impl Adjective {
    fn claims(&self, token: &[u8]) -> bool {
        let (index, expected) = self.check;
        token.first().map(u8::to_ascii_lowercase) == Some(self.initial)
            && token.get(index).map(u8::to_ascii_lowercase) == Some(expected)
    }

    fn level(&self, length: usize) -> Option<u8> {
        self.levels
            .iter()
            .find(|&&(len, _)| len == length)
            .map(|&(_, level)| level)
    }
}

/// Accumulated lightness and saturation change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub lightness: f32,
    pub saturation: f32,
}

impl Adjustment {
    pub const NONE: Adjustment = Adjustment {
        lightness: 0.0,
        saturation: 0.0,
    };

    pub fn new(lightness: f32, saturation: f32) -> Self {
        Self {
            lightness,
            saturation,
        }
    }

    /// Applies lightness first, then saturation. Each magnitude is capped
    /// at 1; a zero component leaves the color alone.
    pub fn apply<C: PackedColor>(self, color: C) -> C {
        let color = if self.lightness > 0.0 {
            color.lighten(self.lightness.min(1.0))
        } else if self.lightness < 0.0 {
            color.darken((-self.lightness).min(1.0))
        } else {
            color
        };
        if self.saturation > 0.0 {
            color.enrich(self.saturation.min(1.0))
        } else if self.saturation < 0.0 {
            color.dullen((-self.saturation).min(1.0))
        } else {
            color
        }
    }
}

impl AddAssign for Adjustment {
    fn add_assign(&mut self, rhs: Self) {
        self.lightness += rhs.lightness;
        self.saturation += rhs.saturation;
    }
}

impl Neg for Adjustment {
    type Output = Adjustment;

    fn neg(self) -> Self::Output {
        Adjustment::new(-self.lightness, -self.saturation)
    }
}

/// What one token means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Word<'a> {
    Adjective(Adjustment),
    Weight(f32),
    Name(&'a str),
}

/// Grammar settings for one color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grammar {
    features: GrammarFeatures,
    lightness_step: f32,
    saturation_step: f32,
}

impl Grammar {
    /// Compounds, weights and decimals; both steps 0.20.
    pub const fn extended() -> Self {
        Self {
            features: GrammarFeatures::all(),
            lightness_step: 0.20,
            saturation_step: 0.20,
        }
    }

    /// Only light, dark, rich and dull; lightness step 0.125, saturation
    /// step 0.20.
    pub const fn basic() -> Self {
        Self {
            features: GrammarFeatures::empty(),
            lightness_step: 0.125,
            saturation_step: 0.20,
        }
    }

    pub const fn with_features(mut self, features: GrammarFeatures) -> Self {
        self.features = features;
        self
    }

    pub const fn with_steps(mut self, lightness_step: f32, saturation_step: f32) -> Self {
        self.lightness_step = lightness_step;
        self.saturation_step = saturation_step;
        self
    }

    pub const fn features(&self) -> GrammarFeatures {
        self.features
    }

    pub const fn lightness_step(&self) -> f32 {
        self.lightness_step
    }

    pub const fn saturation_step(&self) -> f32 {
        self.saturation_step
    }

    /// Whether `c` belongs inside a token rather than separating tokens.
    pub fn is_token_char(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
            || (self.features.contains(GrammarFeatures::WEIGHTS) && (c.is_ascii_digit() || c == '_'))
            || (self.features.contains(GrammarFeatures::DECIMALS) && c == '.')
    }

    /// Adjectives this grammar recognizes, in matching order.
    pub fn adjectives(&self) -> impl Iterator<Item = &'static Adjective> + '_ {
        let compounds = self.features.contains(GrammarFeatures::COMPOUNDS);
        ADJECTIVES.iter().filter(move |adj| compounds || !adj.compound)
    }

    /// The adjustment for `level` steps of lightness and saturation, either
    /// of which may be negative.
    pub fn steps(&self, lightness_levels: i32, saturation_levels: i32) -> Adjustment {
        Adjustment::new(
            self.lightness_step * lightness_levels as f32,
            self.saturation_step * saturation_levels as f32,
        )
    }

    /// Classifies one token.
    pub fn classify<'a>(&self, token: &'a str) -> Word<'a> {
        let bytes = token.as_bytes();
        if self.features.contains(GrammarFeatures::WEIGHTS)
            && bytes.first().is_some_and(u8::is_ascii_digit)
        {
            return Word::Weight(token.parse().unwrap_or(1.0));
        }
        if let Some(adjective) = self.adjectives().find(|adj| adj.claims(bytes)) {
            if let Some(level) = adjective.level(bytes.len()) {
                let level = level as i32;
                return Word::Adjective(self.steps(
                    adjective.lightness as i32 * level,
                    adjective.saturation as i32 * level,
                ));
            }
        }
        Word::Name(token)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::extended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjustment(word: Word<'_>) -> Adjustment {
        match word {
            Word::Adjective(adj) => adj,
            other => panic!("expected adjective, got {other:?}"),
        }
    }

    // ==================== LEVEL TESTS ====================

    #[test]
    fn light_levels() {
        let g = Grammar::extended();
        let levels: Vec<f32> = ["light", "lighter", "lightest", "lightmost"]
            .iter()
            .map(|w| adjustment(g.classify(w)).lightness)
            .collect();
        assert_eq!(levels, vec![0.2, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn basic_steps_are_smaller() {
        let g = Grammar::basic();
        assert_eq!(adjustment(g.classify("dark")), Adjustment::new(-0.125, 0.0));
        assert_eq!(adjustment(g.classify("darkest")), Adjustment::new(-0.375, 0.0));
        assert_eq!(adjustment(g.classify("richmost")), Adjustment::new(0.0, 0.8));
    }

    #[test]
    fn compounds_move_both() {
        let g = Grammar::extended();
        assert_eq!(adjustment(g.classify("bright")), Adjustment::new(0.2, 0.2));
        assert_eq!(adjustment(g.classify("paler")), Adjustment::new(0.4, -0.4));
        assert_eq!(adjustment(g.classify("deepest")), Adjustment::new(-0.6, 0.6));
        assert_eq!(adjustment(g.classify("weakmost")), Adjustment::new(-0.8, -0.8));
    }

    #[test]
    fn pale_has_two_spellings_at_top_level() {
        let g = Grammar::extended();
        assert_eq!(g.classify("palerer"), g.classify("palemost"));
    }

    #[test]
    fn first_letter_is_case_insensitive() {
        let g = Grammar::extended();
        assert_eq!(g.classify("Dark"), g.classify("dark"));
        assert_eq!(g.classify("LIGHTER"), g.classify("lighter"));
    }

    // ==================== FALL-THROUGH TESTS ====================

    #[test]
    fn odd_lengths_are_names() {
        let g = Grammar::extended();
        // "light" stem, length 6
        assert_eq!(g.classify("lights"), Word::Name("lights"));
        assert_eq!(g.classify("darks"), Word::Name("darks"));
    }

    #[test]
    fn color_names_are_not_adjectives() {
        let g = Grammar::extended();
        for name in ["lime", "blue", "brown", "pink", "plum", "white", "red", "denim", "lavender"] {
            assert_eq!(g.classify(name), Word::Name(name));
        }
    }

    #[test]
    fn basic_grammar_ignores_compounds() {
        assert_eq!(Grammar::basic().classify("bright"), Word::Name("bright"));
        assert_eq!(Grammar::basic().classify("weak"), Word::Name("weak"));
    }

    // ==================== WEIGHT TESTS ====================

    #[test]
    fn weights() {
        let g = Grammar::extended();
        assert_eq!(g.classify("3"), Word::Weight(3.0));
        assert_eq!(g.classify("0.5"), Word::Weight(0.5));
        assert_eq!(g.classify("2x"), Word::Weight(1.0));
    }

    #[test]
    fn token_chars() {
        let extended = Grammar::extended();
        assert!(extended.is_token_char('_'));
        assert!(extended.is_token_char('.'));
        assert!(extended.is_token_char('7'));
        assert!(!extended.is_token_char('^'));
        let basic = Grammar::basic();
        assert!(!basic.is_token_char('7'));
        assert!(!basic.is_token_char('.'));
        assert!(basic.is_token_char('Q'));
    }

    // ==================== ADJUSTMENT TESTS ====================

    #[test]
    fn adjustments_accumulate() {
        let g = Grammar::extended();
        let mut total = Adjustment::NONE;
        total += g.steps(1, 0);
        total += g.steps(2, -1);
        assert!((total.lightness - 0.6).abs() < 1e-6);
        assert!((total.saturation + 0.2).abs() < 1e-6);
        assert_eq!(-g.steps(1, 1), g.steps(-1, -1));
    }
}
