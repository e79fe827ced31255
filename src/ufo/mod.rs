//! The output font object.
//!
//! A minimal, typed UFO model: enough surface for the conversion to write
//! into and for a UFO serializer to read back out. Layer handling, data
//! stores and on-disk structure are a serializer's concern, not ours.

pub mod fontinfo;
pub mod glyph;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::shared_types::Plist;
use crate::Name;

pub use fontinfo::FontInfo;
pub use glyph::Glyph;

/// A map of group name to a list of glyph names.
///
/// We use a [`BTreeMap`] because we need sorting for serialization.
pub type Groups = BTreeMap<String, Vec<Name>>;

/// A map of kerning pairs.
///
/// This is represented as a map of first half of a kerning pair (glyph name
/// or group name) to the second half of a pair, which maps to the kerning
/// value (high-level view: (first, second) => value).
///
/// We use a [`BTreeMap`] because we need sorting for serialization.
pub type Kerning = BTreeMap<String, BTreeMap<String, f64>>;

/// A Unified Font Object.
///
/// One `Ufo` is built per master; see [`to_ufos`](crate::to_ufos).
#[derive(Debug, Clone, Default)]
pub struct Ufo {
    /// fontinfo.plist data.
    pub font_info: FontInfo,
    /// lib.plist data.
    pub lib: Plist,
    /// groups.plist data.
    pub groups: Groups,
    /// kerning.plist data.
    pub kerning: Kerning,
    /// features.fea file data.
    pub features: String,
    glyphs: IndexMap<Name, Glyph>,
}

impl Ufo {
    /// Returns a new, empty font object.
    pub fn new() -> Self {
        Ufo::default()
    }

    /// Returns a reference to the glyph named `name`, if it exists.
    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    /// Returns a mutable reference to the glyph named `name`, if it exists.
    pub fn glyph_mut(&mut self, name: &str) -> Option<&mut Glyph> {
        self.glyphs.get_mut(name)
    }

    /// Adds `glyph` to the font, after all existing glyphs.
    ///
    /// A glyph of the same name is replaced in place.
    pub fn insert_glyph(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.name().clone(), glyph);
    }

    /// Returns an iterator over the font's glyphs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    /// Returns the number of glyphs in the font.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the font contains no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
