//! Parser for color descriptions.
//!
//! This module contains the lexer and the description parser.

mod description;
mod lexer;

pub use description::DescriptionParser;
pub use lexer::{Lexer, Token};
