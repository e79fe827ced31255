//! Glyph name properties.
//!
//! Glyphs.app identifies glyphs by "nice names" and derives Unicode values,
//! categories and production (PostScript) names from a bundled database.
//! This module carries a compact subset of that data: a sorted table of
//! records for names whose properties cannot be derived from the name
//! itself, plus the deterministic fallbacks Glyphs applies to everything
//! else (suffix stripping, underscore ligatures, `comb` marks).

/// The category of a glyph, as assigned by the Glyphs glyph database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A letter or syllable.
    Letter,
    /// A combining or spacing mark.
    Mark,
}

/// The subcategory of a glyph, as assigned by the Glyphs glyph database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCategory {
    /// A ligature of two or more glyphs.
    Ligature,
    /// A nonspacing combining mark (Unicode category Mn).
    Nonspacing,
    /// A spacing combining mark (Unicode category Mc).
    SpacingCombining,
}

/// Properties looked up for a glyph name.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphInfo {
    /// The glyph's category, if known.
    pub category: Option<Category>,
    /// The glyph's subcategory, if known.
    pub sub_category: Option<SubCategory>,
    /// The glyph's primary Unicode value, if known.
    pub codepoint: Option<u32>,
    production: Option<&'static str>,
}

// (name, codepoint, category, subcategory, production name when it is not
// derived from the codepoint). Sorted by name for binary search.
#[rustfmt::skip]
static ENTRIES: &[(&str, u32, Category, Option<SubCategory>, Option<&str>)] = &[
    ("C-fraktur", 0x212D, Category::Letter, None, None),
    ("H-fraktur", 0x210C, Category::Letter, None, None),
    ("I-fraktur", 0x2111, Category::Letter, None, None),
    ("R-fraktur", 0x211C, Category::Letter, None, None),
    ("Z-fraktur", 0x2128, Category::Letter, None, None),
    ("aaMatra-deva", 0x093E, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("aaMatra-gurmukhi", 0x0A3E, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("anusvara-deva", 0x0902, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("candrabindu-deva", 0x0901, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("eMatra-deva", 0x0947, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("eeMatra-gurmukhi", 0x0A47, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("f_f", 0xFB00, Category::Letter, Some(SubCategory::Ligature), None),
    ("f_f_i", 0xFB03, Category::Letter, Some(SubCategory::Ligature), None),
    ("f_f_l", 0xFB04, Category::Letter, Some(SubCategory::Ligature), None),
    ("fi", 0xFB01, Category::Letter, Some(SubCategory::Ligature), Some("fi")),
    ("fl", 0xFB02, Category::Letter, Some(SubCategory::Ligature), Some("fl")),
    ("iMatra-deva", 0x093F, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("iMatra-gurmukhi", 0x0A3F, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("iiMatra-deva", 0x0940, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("iiMatra-gurmukhi", 0x0A40, Category::Mark, Some(SubCategory::SpacingCombining), None),
    ("ooMatra-gurmukhi", 0x0A4B, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("uMatra-deva", 0x0941, Category::Mark, Some(SubCategory::Nonspacing), None),
    ("uuMatra-deva", 0x0942, Category::Mark, Some(SubCategory::Nonspacing), None),
];

fn find(name: &str) -> Option<GlyphInfo> {
    ENTRIES.binary_search_by_key(&name, |entry| entry.0).ok().map(|idx| {
        let (_, codepoint, category, sub_category, production) = ENTRIES[idx];
        GlyphInfo {
            category: Some(category),
            sub_category,
            codepoint: Some(codepoint),
            production,
        }
    })
}

/// Looks up the properties of a glyph name.
///
/// Unlisted names fall back to the rules Glyphs itself applies: the part
/// before the first `.` is looked up in place of the full name, names
/// joining parts with `_` are ligatures, and names ending in `comb` are
/// nonspacing marks. Anything else comes back empty.
pub fn glyph_info(name: &str) -> GlyphInfo {
    if let Some(info) = find(name) {
        return info;
    }
    let base = match name.split_once('.') {
        Some((base, _)) => base,
        None => name,
    };
    if let Some(info) = find(base) {
        return info;
    }
    if base.contains('_') {
        return GlyphInfo {
            category: Some(Category::Letter),
            sub_category: Some(SubCategory::Ligature),
            ..Default::default()
        };
    }
    if base.ends_with("comb") {
        return GlyphInfo {
            category: Some(Category::Mark),
            sub_category: Some(SubCategory::Nonspacing),
            ..Default::default()
        };
    }
    GlyphInfo::default()
}

/// Returns the production (PostScript) name for a glyph name, when it
/// differs from the name itself.
///
/// A `.`-suffix carries over: the suffixed name's production name is the
/// base name's production name with the suffix re-attached.
pub fn production_name(name: &str) -> Option<String> {
    let (info, suffix) = match find(name) {
        Some(info) => (Some(info), None),
        None => match name.split_once('.') {
            Some((base, suffix)) => (find(base), Some(suffix)),
            None => (None, None),
        },
    };
    let info = info?;
    let mut production = match (info.production, info.codepoint) {
        (Some(production), _) => production.to_string(),
        (None, Some(codepoint)) if codepoint > 0xFFFF => format!("u{codepoint:05X}"),
        (None, Some(codepoint)) => format!("uni{codepoint:04X}"),
        (None, None) => return None,
    };
    if let Some(suffix) = suffix {
        production = format!("{production}.{suffix}");
    }
    Some(production).filter(|production| production != name)
}
