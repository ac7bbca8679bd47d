//! Named color tables.
//!
//! A [`NamedColorTable`] maps names (and aliases) to packed colors and keeps
//! three sorted name views. Tables are immutable once built, so one table can
//! be shared by any number of parsers and searches.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use packed::PackedColor;

use crate::error::PaletteError;

/// Read-only mapping from names to colors of one space.
#[derive(Debug, Clone)]
pub struct NamedColorTable<C> {
    colors: HashMap<String, C>,
    names: Vec<String>,
    by_hue: Vec<String>,
    by_lightness: Vec<String>,
}

impl<C: PackedColor> NamedColorTable<C> {
    pub fn builder() -> NamedColorTableBuilder<C> {
        NamedColorTableBuilder::new()
    }

    /// Exact, case-sensitive lookup of a name or alias.
    pub fn get(&self, name: &str) -> Option<C> {
        self.colors.get(name).copied()
    }

    /// Like [`get`](Self::get), but a miss yields
    /// [`PackedColor::TRANSPARENT`].
    pub fn lookup(&self, name: &str) -> C {
        self.get(name).unwrap_or(C::TRANSPARENT)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Number of primary names; aliases are not counted.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Primary names in alphabetical order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Primary names with visible alpha, grays first (dark to light), then
    /// chromatic colors by hue and lightness.
    pub fn names_by_hue(&self) -> &[String] {
        &self.by_hue
    }

    /// Every primary name, dark to light.
    pub fn names_by_lightness(&self) -> &[String] {
        &self.by_lightness
    }

    /// `(name, color)` pairs in hue order.
    pub fn colors_by_hue(&self) -> impl Iterator<Item = (&str, C)> + '_ {
        self.by_hue
            .iter()
            .map(|name| (name.as_str(), self.lookup(name)))
    }
}

/// Collects entries and aliases for a [`NamedColorTable`].
#[derive(Debug, Clone)]
pub struct NamedColorTableBuilder<C> {
    entries: Vec<(String, C)>,
    aliases: Vec<(String, String)>,
}

impl<C: PackedColor> Default for NamedColorTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PackedColor> NamedColorTableBuilder<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn insert(mut self, name: impl Into<String>, color: C) -> Self {
        self.entries.push((name.into(), color));
        self
    }

    /// Adds a name that resolves to `target`'s color but is left out of the
    /// sorted views.
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Builds the table, rejecting duplicate names and dangling aliases.
    pub fn try_build(self) -> Result<NamedColorTable<C>, PaletteError> {
        let mut colors = HashMap::with_capacity(self.entries.len() + self.aliases.len());
        for (name, color) in &self.entries {
            if colors.insert(name.clone(), *color).is_some() {
                return Err(PaletteError::DuplicateName(name.clone()));
            }
        }
        let names: Vec<String> = self.entries.into_iter().map(|(name, _)| name).collect();
        for (alias, target) in self.aliases {
            let Some(&color) = colors.get(&target) else {
                return Err(PaletteError::UnknownAlias { alias, target });
            };
            if colors.contains_key(&alias) {
                return Err(PaletteError::DuplicateName(alias));
            }
            colors.insert(alias, color);
        }
        Ok(Self::finish(colors, names))
    }

    /// Builds the table, letting later entries win and dropping dangling
    /// aliases.
    pub fn build(self) -> NamedColorTable<C> {
        let mut colors = HashMap::with_capacity(self.entries.len() + self.aliases.len());
        let mut names = Vec::with_capacity(self.entries.len());
        for (name, color) in self.entries {
            if colors.insert(name.clone(), color).is_none() {
                names.push(name);
            }
        }
        for (alias, target) in self.aliases {
            match colors.get(&target).copied() {
                Some(color) if !names.contains(&alias) => {
                    colors.insert(alias, color);
                }
                Some(_) => debug!("alias {alias:?} shadows a color name, skipped"),
                None => debug!("alias {alias:?} refers to unknown color {target:?}, skipped"),
            }
        }
        Self::finish(colors, names)
    }

    fn finish(colors: HashMap<String, C>, mut names: Vec<String>) -> NamedColorTable<C> {
        names.sort();

        let color_of = |name: &String| colors.get(name).copied().unwrap_or(C::TRANSPARENT);

        let mut by_hue: Vec<String> = names
            .iter()
            .filter(|name| !color_of(name).is_transparent())
            .cloned()
            .collect();
        by_hue.sort_by(|a, b| hue_order(color_of(a), color_of(b)).then_with(|| a.cmp(b)));

        let mut by_lightness = names.clone();
        by_lightness.sort_by(|a, b| {
            color_of(a)
                .lightness()
                .total_cmp(&color_of(b).lightness())
                .then_with(|| a.cmp(b))
        });

        debug!(
            "built color table: {} names, {} aliases, {} by hue",
            names.len(),
            colors.len() - names.len(),
            by_hue.len()
        );

        NamedColorTable {
            colors,
            names,
            by_hue,
            by_lightness,
        }
    }
}

/// Grays before chromatic colors; grays by lightness, the rest by hue and
/// then lightness.
fn hue_order<C: PackedColor>(a: C, b: C) -> Ordering {
    let gray_a = a.saturation() <= C::GRAYSCALE_THRESHOLD;
    let gray_b = b.saturation() <= C::GRAYSCALE_THRESHOLD;
    match (gray_a, gray_b) {
        (true, true) => a.lightness().total_cmp(&b.lightness()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .hue()
            .total_cmp(&b.hue())
            .then_with(|| a.lightness().total_cmp(&b.lightness())),
    }
}
