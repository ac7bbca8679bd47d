//! Built-in palettes for each color space.
//!
//! Each table is built on first use and never changes afterwards.

mod data;

use once_cell::sync::Lazy;
use packed::{Ipt, Oklab, PackedColor, Rgb};

use crate::table::{NamedColorTable, NamedColorTableBuilder};

pub use data::{ALIASES, OKLAB_NAMED, RGB_NAMED};

static RGB: Lazy<NamedColorTable<Rgb>> = Lazy::new(|| from_map(&RGB_NAMED, Rgb::from_bits));

static OKLAB: Lazy<NamedColorTable<Oklab>> =
    Lazy::new(|| from_map(&OKLAB_NAMED, Oklab::from_bits));

static IPT: Lazy<NamedColorTable<Ipt>> =
    Lazy::new(|| from_map(&RGB_NAMED, |bits| Ipt::from(Rgb::from_bits(bits))));

/// The fifty standard names as RGB.
pub fn rgb() -> &'static NamedColorTable<Rgb> {
    &RGB
}

/// The fifty standard names as Oklab.
pub fn oklab() -> &'static NamedColorTable<Oklab> {
    &OKLAB
}

/// The fifty standard names, converted from RGB to IPT.
pub fn ipt() -> &'static NamedColorTable<Ipt> {
    &IPT
}

fn from_map<C: PackedColor>(
    map: &phf::Map<&'static str, u32>,
    convert: impl Fn(u32) -> C,
) -> NamedColorTable<C> {
    let builder = map
        .entries()
        .fold(NamedColorTableBuilder::new(), |builder, (&name, &bits)| {
            builder.insert(name, convert(bits))
        });
    ALIASES
        .entries()
        .fold(builder, |builder, (&alias, &target)| builder.alias(alias, target))
        .build()
}
