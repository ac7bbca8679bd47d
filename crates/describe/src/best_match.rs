//! Finds the description that best reproduces a color.
//!
//! The search is exhaustive over a small space: every way to mix
//! `mix_count` palette names (with repetition), each at nine lightness and
//! nine saturation levels. Candidates are built exactly as the parser would
//! build them, so the returned description parses back to the returned
//! color.

use log::debug;
use packed::{PackedColor, mix};
use smallvec::SmallVec;

use crate::grammar::{Grammar, GrammarFeatures};
use crate::table::NamedColorTable;

/// Lightness words from four levels darker to four levels lighter.
pub const LIGHTNESS_WORDS: [&str; 9] = [
    "darkmost", "darkest", "darker", "dark", "", "light", "lighter", "lightest", "lightmost",
];

/// Saturation words from four levels duller to four levels richer.
pub const SATURATION_WORDS: [&str; 9] = [
    "dullmost", "dullest", "duller", "dull", "", "rich", "richer", "richest", "richmost",
];

const WEAK_WORDS: [&str; 4] = ["weak", "weaker", "weakest", "weakmost"];
const PALE_WORDS: [&str; 4] = ["pale", "paler", "palest", "palemost"];
const DEEP_WORDS: [&str; 4] = ["deep", "deeper", "deepest", "deepmost"];
const BRIGHT_WORDS: [&str; 4] = ["bright", "brighter", "brightest", "brightmost"];

/// Levels on each axis: four down, none, four up.
const LEVELS: u64 = 9;

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatchResult<C> {
    /// Adjectives then names, single-space separated. Empty when the
    /// palette is.
    pub description: String,
    /// What `description` evaluates to.
    pub color: C,
    /// [`Oklab::distance_squared`](packed::Oklab::distance_squared) to the
    /// target.
    pub distance: f32,
}

/// Search settings.
///
/// # Examples
///
/// ```
/// use describe::{BestMatch, Grammar, palettes};
///
/// let red = palettes::rgb().lookup("red");
/// let found = BestMatch::new(palettes::rgb(), Grammar::extended()).run(red);
/// assert_eq!(found.description, "red");
/// assert_eq!(found.distance, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BestMatch<'t, C> {
    table: &'t NamedColorTable<C>,
    grammar: Grammar,
    mix_count: u32,
    max_candidates: Option<u64>,
}

impl<'t, C: PackedColor> BestMatch<'t, C> {
    /// One name per candidate, no candidate cap.
    pub fn new(table: &'t NamedColorTable<C>, grammar: Grammar) -> Self {
        Self {
            table,
            grammar,
            mix_count: 1,
            max_candidates: None,
        }
    }

    /// How many names each candidate mixes; at least one.
    pub fn mix_count(mut self, mix_count: u32) -> Self {
        self.mix_count = mix_count.max(1);
        self
    }

    /// Stop after this many candidates.
    pub fn max_candidates(mut self, max_candidates: impl Into<Option<u64>>) -> Self {
        self.max_candidates = max_candidates.into();
        self
    }

    pub fn run(&self, target: C) -> BestMatchResult<C> {
        let palette: Vec<(&str, C)> = self.table.colors_by_hue().collect();
        let mut best = BestMatchResult {
            description: String::new(),
            color: C::TRANSPARENT,
            distance: f32::INFINITY,
        };
        if palette.is_empty() {
            return best;
        }

        let size = palette.len() as u64;
        let tries = size.saturating_pow(self.mix_count);
        let total = tries.saturating_mul(LEVELS * LEVELS);
        let limit = self.max_candidates.map_or(total, |cap| cap.min(total));
        let target_lab = target.to_oklab();

        let mut best_indices: SmallVec<[usize; 4]> = SmallVec::new();
        let mut best_levels = (0, 0);
        let mut indices: SmallVec<[usize; 4]> = SmallVec::new();
        let mut colors: SmallVec<[C; 4]> = SmallVec::new();

        for c in 0..limit {
            indices.clear();
            colors.clear();
            // digits of c, lowest first: one name per mixed color, then
            // lightness, then saturation
            let mut rest = c;
            for _ in 0..self.mix_count {
                let index = (rest % size) as usize;
                rest /= size;
                indices.push(index);
                colors.push(palette[index].1);
            }
            let lit = (rest % LEVELS) as i32 - 4;
            let sat = (rest / LEVELS % LEVELS) as i32 - 4;

            let candidate = self.grammar.steps(lit, sat).apply(mix(&colors)).limit_to_gamut();
            let distance = candidate.to_oklab().distance_squared(target_lab);
            if distance < best.distance {
                best.distance = distance;
                best.color = candidate;
                best_levels = (lit, sat);
                best_indices.clone_from(&indices);
            }
        }

        let (lit, sat) = best_levels;
        let names = best_indices.iter().map(|&i| palette[i].0);
        best.description = adjective_words(self.grammar, lit, sat)
            .into_iter()
            .chain(names)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        debug!(
            "best match for {:?}: {:?} at distance {} after {} of {} candidates",
            target, best.description, best.distance, limit, total
        );
        best
    }
}

/// Words for `lightness` and `saturation` levels in `-4..=4`. Matching
/// magnitudes collapse to one compound word when the grammar has them.
pub fn adjective_words(grammar: Grammar, lightness: i32, saturation: i32) -> [&'static str; 2] {
    let lightness = lightness.clamp(-4, 4);
    let saturation = saturation.clamp(-4, 4);
    if grammar.features().contains(GrammarFeatures::COMPOUNDS)
        && lightness != 0
        && lightness.abs() == saturation.abs()
    {
        let words = match (lightness > 0, saturation > 0) {
            (false, false) => &WEAK_WORDS,
            (true, false) => &PALE_WORDS,
            (false, true) => &DEEP_WORDS,
            (true, true) => &BRIGHT_WORDS,
        };
        return [words[lightness.unsigned_abs() as usize - 1], ""];
    }
    [
        LIGHTNESS_WORDS[(lightness + 4) as usize],
        SATURATION_WORDS[(saturation + 4) as usize],
    ]
}
