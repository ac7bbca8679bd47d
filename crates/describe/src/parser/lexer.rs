//! Lexer for color descriptions.
//!
//! Splits a description into the maximal runs of token characters the
//! grammar allows; everything else separates tokens.

use crate::grammar::Grammar;

/// A token and its byte offset in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Lexer for color descriptions.
///
/// # Examples
///
/// ```
/// use describe::Grammar;
/// use describe::parser::Lexer;
///
/// let words: Vec<_> = Lexer::new("darker rich^2, mint", Grammar::extended())
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(words, ["darker", "rich", "2", "mint"]);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    grammar: Grammar,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, grammar: Grammar) -> Self {
        Self {
            input,
            pos: 0,
            grammar,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Skip characters while `pred` holds.
    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        let end = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.input.len(), |(i, _)| self.pos + i);
        self.pos = end;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let grammar = self.grammar;
        self.skip_while(|c| !grammar.is_token_char(c));
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        self.skip_while(|c| grammar.is_token_char(c));
        Some(Token {
            text: &self.input[start..self.pos],
            offset: start,
        })
    }
}
