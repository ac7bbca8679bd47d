//! Turns a description like `"darker rich mint sage"` into one color.
//!
//! Parsing is a single pass over the tokens:
//!
//! - adjectives add to a running lightness/saturation adjustment,
//! - numbers (where the grammar allows them) set the weight of the most
//!   recent color,
//! - anything else is a color name, appended to the mix with weight 1.
//!
//! The mix is then blended with [`uneven_mix`], the adjustment applied
//! (lightness first), and the result limited to the gamut. Unknown names mix
//! in as transparent, and nothing recognizable at all gives transparent.

use log::trace;
use packed::{PackedColor, uneven_mix};
use smallvec::SmallVec;

use super::lexer::Lexer;
use crate::grammar::{Adjustment, Grammar, Word};
use crate::table::NamedColorTable;

/// Parses descriptions against one table with one grammar.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionParser<'t, C> {
    table: &'t NamedColorTable<C>,
    grammar: Grammar,
}

impl<'t, C: PackedColor> DescriptionParser<'t, C> {
    pub fn new(table: &'t NamedColorTable<C>, grammar: Grammar) -> Self {
        Self { table, grammar }
    }

    pub fn table(&self) -> &'t NamedColorTable<C> {
        self.table
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Parses a whole description.
    ///
    /// # Examples
    ///
    /// ```
    /// use describe::{DescriptionParser, Grammar, palettes};
    ///
    /// let parser = DescriptionParser::new(palettes::rgb(), Grammar::extended());
    /// assert_eq!(parser.parse("red blue").bits(), 0xFE7F007F);
    /// assert_eq!(parser.parse("xyzzy"), packed::Rgb::TRANSPARENT);
    /// ```
    pub fn parse(&self, description: &str) -> C {
        let mut mixing: SmallVec<[(C, f32); 4]> = SmallVec::new();
        let mut adjustment = Adjustment::NONE;

        for token in Lexer::new(description, self.grammar) {
            let word = self.grammar.classify(token.text);
            trace!("token {:?} at {}: {:?}", token.text, token.offset, word);
            match word {
                Word::Adjective(delta) => adjustment += delta,
                Word::Weight(weight) => {
                    if let Some(last) = mixing.last_mut() {
                        last.1 = weight;
                    }
                }
                Word::Name(name) => mixing.push((self.table.lookup(name), 1.0)),
            }
        }

        if mixing.is_empty() {
            return C::TRANSPARENT;
        }
        let mixed = uneven_mix(&mixing);
        if mixed == C::TRANSPARENT {
            return mixed;
        }
        adjustment.apply(mixed).limit_to_gamut()
    }

    /// Parses `len` bytes of `description` starting at byte `start`; `None`
    /// runs to the end.
    ///
    /// The range is clamped to the input and shrunk to char boundaries, so
    /// any range is accepted.
    pub fn parse_range(&self, description: &str, start: usize, len: Option<usize>) -> C {
        let start = snap_forward(description, start.min(description.len()));
        let end = len.map_or(description.len(), |len| {
            start.saturating_add(len).min(description.len())
        });
        let end = snap_back(description, end).max(start);
        self.parse(&description[start..end])
    }
}

fn snap_forward(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

fn snap_back(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
