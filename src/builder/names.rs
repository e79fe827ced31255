//! Style names, style-map names and the metadata derived from them.

use plist::Value;

use crate::glyphs::AlignmentZone;
use crate::shared_types::GLYPHS_PREFIX;
use crate::ufo::Ufo;

// OS/2 weight and width classes for the style names Glyphs knows about.
// "Regular" is the implicit default on both axes.
static WEIGHT_CODES: &[(&str, i32)] = &[
    ("Thin", 250),
    ("Light", 300),
    ("SemiLight", 350),
    ("Regular", 400),
    ("Medium", 500),
    ("DemiBold", 600),
    ("SemiBold", 600),
    ("Bold", 700),
    ("UltraBold", 800),
    ("ExtraBold", 800),
    ("Black", 900),
    ("Heavy", 900),
];

static WIDTH_CODES: &[(&str, i32)] = &[
    ("Ultra Condensed", 1),
    ("Extra Condensed", 2),
    ("Condensed", 3),
    ("SemiCondensed", 4),
    ("Medium (normal)", 5),
    ("Semi Expanded", 6),
    ("Expanded", 7),
    ("Extra Expanded", 8),
    ("Ultra Expanded", 9),
];

const REGULAR_WEIGHT_CLASS: i32 = 400;
const NORMAL_WIDTH_CLASS: i32 = 5;

/// Builds a style name from a master's or instance's naming fields.
///
/// Tokens appear in the fixed order custom, width, weight, "Italic".
/// "Regular" width and weight are the implicit defaults and never rendered;
/// when nothing else remains, the result is "Regular" (or "Italic" alone).
pub fn build_style_name(
    width: Option<&str>,
    weight: Option<&str>,
    custom: Option<&str>,
    italic: bool,
) -> String {
    let mut parts = Vec::new();
    if let Some(custom) = custom.filter(|token| !token.is_empty()) {
        parts.push(custom);
    }
    if let Some(width) = width.filter(|token| !token.is_empty() && *token != "Regular") {
        parts.push(width);
    }
    if let Some(weight) = weight.filter(|token| !token.is_empty() && *token != "Regular") {
        parts.push(weight);
    }
    if italic {
        parts.push("Italic");
    }
    if parts.is_empty() {
        "Regular".into()
    } else {
        parts.join(" ")
    }
}

/// Sets redundant metadata in a UFO, e.g. data based on other data.
///
/// From the style name: OS/2 weight and width classes, the style-map
/// family/style name pair, and lib records of the exact non-default weight
/// and width strings (the numeric classes alone are lossy).
pub fn set_redundant_data(ufo: &mut Ufo) {
    let style_name = ufo.font_info.style_name.clone().unwrap_or_default();
    let width = find_attribute(&style_name, WIDTH_CODES);
    let weight = find_attribute(&style_name, WEIGHT_CODES);

    ufo.font_info.open_type_os2_weight_class =
        Some(weight.map_or(REGULAR_WEIGHT_CLASS, |(_, code)| code));
    ufo.font_info.open_type_os2_width_class =
        Some(width.map_or(NORMAL_WIDTH_CLASS, |(_, code)| code));

    if let Some((weight, _)) = weight.filter(|(name, _)| *name != "Regular") {
        ufo.lib.insert(format!("{GLYPHS_PREFIX}weight"), Value::String(weight.into()));
    }
    if let Some((width, _)) = width {
        ufo.lib.insert(format!("{GLYPHS_PREFIX}width"), Value::String(width.into()));
    }

    // the style map vocabulary is {regular, bold, italic, bold italic};
    // width and weight tokens outside it move over to the family name
    let family_name = ufo.font_info.family_name.clone().unwrap_or_default();
    let mut map_family = family_name;
    let (mut bold, mut italic) = (false, false);
    for token in style_name.split_whitespace() {
        if token.eq_ignore_ascii_case("bold") {
            bold = true;
        } else if token.eq_ignore_ascii_case("italic") {
            italic = true;
        } else if token.eq_ignore_ascii_case("regular") {
            // the implicit default; never part of either map name
        } else {
            if !map_family.is_empty() {
                map_family.push(' ');
            }
            map_family.push_str(token);
        }
    }
    let map_style = match (bold, italic) {
        (true, true) => "bold italic",
        (true, false) => "bold",
        (false, true) => "italic",
        (false, false) => "regular",
    };
    ufo.font_info.style_map_family_name = Some(map_family);
    ufo.font_info.style_map_style_name = Some(map_style.into());
}

/// Finds the longest entry of `codes` appearing as a whole token run in
/// `style_name`.
fn find_attribute(style_name: &str, codes: &'static [(&str, i32)]) -> Option<(&'static str, i32)> {
    let mut candidates: Vec<(&str, i32)> = codes.to_vec();
    candidates.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
    candidates.into_iter().find(|(name, _)| contains_token(style_name, name))
}

fn contains_token(haystack: &str, needle: &str) -> bool {
    let mut search_from = 0;
    while let Some(position) = haystack[search_from..].find(needle) {
        let start = search_from + position;
        let end = start + needle.len();
        let boundary_before = start == 0 || haystack[..start].ends_with(' ');
        let boundary_after = end == haystack.len() || haystack[end..].starts_with(' ');
        if boundary_before && boundary_after {
            return true;
        }
        search_from = end;
    }
    false
}

/// Sets PostScript blue values from a master's alignment zones.
///
/// The zone anchored at the baseline and all zones extending upward form
/// the blue values list; zones extending downward away from the baseline
/// form the other blues list.
pub(crate) fn set_blue_values(ufo: &mut Ufo, alignment_zones: &[AlignmentZone]) {
    let mut zones: Vec<AlignmentZone> = alignment_zones.to_vec();
    zones.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut blue_values = Vec::new();
    let mut other_blues = Vec::new();
    for zone in zones {
        let (low, high) = zone.bounds();
        let values = if zone.position == 0.0 || zone.size >= 0.0 {
            &mut blue_values
        } else {
            &mut other_blues
        };
        values.push(low);
        values.push(high);
    }

    if !blue_values.is_empty() {
        ufo.font_info.postscript_blue_values = Some(blue_values);
    }
    if !other_blues.is_empty() {
        ufo.font_info.postscript_other_blues = Some(other_blues);
    }
}
