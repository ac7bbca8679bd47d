//! Palette text format.
//!
//! One entry per line:
//!
//! ```text
//! // comments run to the end of the line
//! red     #ff0000
//! glass   #ffffff40
//! scarlet = red
//! ```
//!
//! Hex literals are RGBA (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and are
//! converted into the table's space with [`PackedColor::from_rgba8888`].
//! Aliases may refer to names defined later in the file.

use std::fs;
use std::path::Path;

use log::warn;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{alpha1, char, hex_digit1, space0, space1},
    combinator::{all_consuming, map, recognize},
    sequence::{delimited, pair, preceded, separated_pair, tuple},
};
use packed::{ColorParseError, PackedColor, Rgb};

use crate::error::PaletteError;
use crate::table::NamedColorTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Entry { name: &'a str, hex: &'a str },
    Alias { alias: &'a str, target: &'a str },
}

/// A name: a letter, then letters, digits or `_`.
fn parse_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alpha1,
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// `name #hex`
fn parse_entry(input: &str) -> IResult<&str, Line<'_>> {
    map(
        separated_pair(parse_name, space1, recognize(preceded(char('#'), hex_digit1))),
        |(name, hex)| Line::Entry { name, hex },
    )(input)
}

/// `alias = target`
fn parse_alias(input: &str) -> IResult<&str, Line<'_>> {
    map(
        separated_pair(parse_name, tuple((space0, char('='), space0)), parse_name),
        |(alias, target)| Line::Alias { alias, target },
    )(input)
}

fn parse_line(input: &str) -> IResult<&str, Line<'_>> {
    all_consuming(delimited(space0, alt((parse_alias, parse_entry)), space0))(input)
}

fn strip_comment(line: &str) -> &str {
    line.split_once("//").map_or(line, |(before, _)| before)
}

/// Reads every meaningful line, in order, with its 1-based line number.
fn lines(text: &str) -> impl Iterator<Item = (usize, &str, Result<Line<'_>, ()>)> {
    text.lines().enumerate().filter_map(|(index, raw)| {
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            return None;
        }
        let parsed = parse_line(content).map(|(_, line)| line).map_err(|_| ());
        Some((index + 1, content, parsed))
    })
}

fn entry_color<C: PackedColor>(hex: &str) -> Result<C, ColorParseError> {
    Rgb::from_hex(hex).map(|rgb| C::from_rgba8888(rgb.to_rgba8888()))
}

/// Parses palette text, failing on the first bad line, duplicate name or
/// dangling alias.
pub fn load_palette_str<C: PackedColor>(text: &str) -> Result<NamedColorTable<C>, PaletteError> {
    let mut builder = NamedColorTable::builder();
    for (line, content, parsed) in lines(text) {
        let parsed = parsed.map_err(|()| PaletteError::InvalidLine {
            line,
            content: content.to_string(),
        })?;
        builder = match parsed {
            Line::Entry { name, hex } => builder.insert(name, entry_color(hex)?),
            Line::Alias { alias, target } => builder.alias(alias, target),
        };
    }
    builder.try_build()
}

/// Parses palette text, skipping bad lines with a warning. Later entries
/// replace earlier ones and dangling aliases are dropped.
pub fn load_palette_str_lenient<C: PackedColor>(text: &str) -> NamedColorTable<C> {
    let mut builder = NamedColorTable::builder();
    for (line, content, parsed) in lines(text) {
        let Ok(parsed) = parsed else {
            warn!("palette line {line}: cannot parse {content:?}, skipped");
            continue;
        };
        builder = match parsed {
            Line::Entry { name, hex } => match entry_color(hex) {
                Ok(color) => builder.insert(name, color),
                Err(err) => {
                    warn!("palette line {line}: {err}, skipped");
                    builder
                }
            },
            Line::Alias { alias, target } => builder.alias(alias, target),
        };
    }
    builder.build()
}

/// Reads and strictly parses a palette file.
pub fn load_palette_file<C: PackedColor>(
    path: impl AsRef<Path>,
) -> Result<NamedColorTable<C>, PaletteError> {
    let text = fs::read_to_string(path)?;
    load_palette_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packed::Oklab;

    const SAMPLE: &str = "\
// primaries
red    #ff0000
blue   #0000ff   // trailing comment
glass  #ffffff40

scarlet = red
navy_2 #000080
";

    #[test]
    fn loads_entries_and_aliases() {
        let table: NamedColorTable<Rgb> = load_palette_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("red"), Some(Rgb::from_bits(0xFE00_00FF)));
        assert_eq!(table.get("scarlet"), table.get("red"));
        assert_eq!(table.get("glass").map(Rgb::alpha_byte), Some(0x40));
        assert!(table.contains("navy_2"));
    }

    #[test]
    fn converts_into_the_table_space() {
        let table: NamedColorTable<Oklab> = load_palette_str(SAMPLE).unwrap();
        let red = Oklab::from_rgba8888(0xFF00_00FF);
        assert_eq!(table.get("red"), Some(red));
    }

    #[test]
    fn alias_before_target() {
        let table: NamedColorTable<Rgb> = load_palette_str("grey = gray\ngray #808080").unwrap();
        assert_eq!(table.get("grey"), table.get("gray"));
    }

    #[test]
    fn line_parser() {
        assert_eq!(
            parse_line("red #f00").map(|(_, l)| l),
            Ok(Line::Entry { name: "red", hex: "#f00" })
        );
        assert_eq!(
            parse_line("a=b").map(|(_, l)| l),
            Ok(Line::Alias { alias: "a", target: "b" })
        );
        assert!(parse_line("red").is_err());
        assert!(parse_line("red #ff0000 extra").is_err());
        assert!(parse_line("1red #ff0000").is_err());
    }

    #[test]
    fn strict_errors() {
        let err = load_palette_str::<Rgb>("red #ff0000\n\nwhat is this").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidLine { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: cannot parse \"what is this\"");

        let err = load_palette_str::<Rgb>("red #ff00f").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(_)));

        let err = load_palette_str::<Rgb>("red #ff0000\nred #00ff00").unwrap_err();
        assert!(matches!(err, PaletteError::DuplicateName(name) if name == "red"));

        let err = load_palette_str::<Rgb>("coral = salmon").unwrap_err();
        assert!(matches!(err, PaletteError::UnknownAlias { .. }));
    }

    #[test]
    fn lenient_skips_bad_lines() {
        let table: NamedColorTable<Rgb> =
            load_palette_str_lenient("red #ff0000\n???\nbad #12345\nred #00ff00\ncoral = salmon");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("red"), Some(Rgb::from_bits(0xFE00_FF00)));
        assert!(!table.contains("coral"));
    }

    #[test]
    fn missing_file() {
        let err = load_palette_file::<Rgb>("/nonexistent/palette.txt").unwrap_err();
        assert!(matches!(err, PaletteError::Io(_)));
    }
}
