//! GDEF glyph classification and ligature caret computation.

use crate::glyphdata::{self, Category, SubCategory};
use crate::ufo::Ufo;

/// Builds the `table GDEF` feature fragment for a font.
///
/// Classification combines the glyph database with each glyph's (post
/// propagation) anchors: ligatures and bases require at least one attaching
/// (non-`_`) anchor, marks are recognized from the database alone. Caret
/// positions come from `caret_<k>` anchors, rounded half away from zero.
///
/// Returns the empty string when nothing classifies and no glyph carries
/// caret anchors.
pub(crate) fn build_gdef(ufo: &Ufo) -> String {
    let mut bases = Vec::new();
    let mut ligatures = Vec::new();
    let mut marks = Vec::new();
    let mut carets = Vec::new();

    for glyph in ufo.iter() {
        let name = glyph.name();
        let mut has_attaching_anchor = false;
        let mut glyph_carets: Vec<(u32, i64)> = Vec::new();
        for anchor in &glyph.anchors {
            if !anchor.is_mark_attachment() {
                has_attaching_anchor = true;
            }
            if let Some(index) =
                anchor.name.strip_prefix("caret_").and_then(|k| k.parse::<u32>().ok())
            {
                glyph_carets.push((index, anchor.x.round() as i64));
            }
        }
        if !glyph_carets.is_empty() {
            glyph_carets.sort_by_key(|(index, _)| *index);
            carets.push((name, glyph_carets));
        }

        let info = glyphdata::glyph_info(name);
        if info.sub_category == Some(SubCategory::Ligature) {
            // no caret data can be produced without an attaching anchor
            if has_attaching_anchor {
                ligatures.push(name);
            }
        } else if info.category == Some(Category::Mark)
            && matches!(
                info.sub_category,
                Some(SubCategory::Nonspacing) | Some(SubCategory::SpacingCombining)
            )
        {
            marks.push(name);
        } else if has_attaching_anchor {
            bases.push(name);
        }
    }

    if bases.is_empty() && ligatures.is_empty() && marks.is_empty() && carets.is_empty() {
        return String::new();
    }

    let mut lines = vec!["table GDEF {".to_string(), "  # automatic".to_string()];
    if !(bases.is_empty() && ligatures.is_empty() && marks.is_empty()) {
        lines.push("  GlyphClassDef".to_string());
        for (class, label) in [(&bases, "Base"), (&ligatures, "Liga"), (&marks, "Mark")] {
            if !class.is_empty() {
                let names: Vec<&str> = class.iter().map(|name| name.as_str()).collect();
                lines.push(format!("    [{}], # {label}", names.join(" ")));
            }
        }
        lines.push("    ;".to_string());
    }
    for (name, positions) in carets {
        let positions: Vec<String> =
            positions.into_iter().map(|(_, x)| x.to_string()).collect();
        lines.push(format!("  LigatureCaretByPos {name} {};", positions.join(" ")));
    }
    lines.push("} GDEF;".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ufo::glyph::{Anchor, Glyph};
    use crate::Name;

    fn glyph_with_anchors(name: &str, anchors: &[(&str, f64, f64)]) -> Glyph {
        let mut glyph = Glyph::new(name);
        for (anchor_name, x, y) in anchors {
            glyph.anchors.push(Anchor::new(Name::new_raw(anchor_name), *x, *y));
        }
        glyph
    }

    #[test]
    fn empty_font_produces_no_text() {
        assert_eq!(build_gdef(&Ufo::new()), "");
    }

    #[test]
    fn nonattaching_anchor_alone_produces_no_text() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors("A.alt", &[("_top", 400., 1000.)]));
        assert_eq!(build_gdef(&ufo), "");
    }

    #[test]
    fn base_with_attaching_anchor() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors("A.alt", &[("top", 400., 1000.)]));
        assert!(build_gdef(&ufo).contains("[A.alt], # Base"));
    }

    #[test]
    fn ligature_needs_attaching_anchor() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors("fi", &[("top", 400., 1000.)]));
        assert!(build_gdef(&ufo).contains("[fi], # Liga"));

        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors("fi", &[("_top", 400., 1000.)]));
        assert_eq!(build_gdef(&ufo), "");
    }

    #[test]
    fn mark_comes_from_the_glyph_database() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(Glyph::new("eeMatra-gurmukhi"));
        assert!(build_gdef(&ufo).contains("[eeMatra-gurmukhi], # Mark"));
    }

    #[test]
    fn fractional_caret_positions_round_to_integers() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors("fi", &[("caret_1", 499.9876, 0.)]));
        assert!(build_gdef(&ufo).contains("LigatureCaretByPos fi 500;"));
    }

    #[test]
    fn carets_are_ordered_by_index() {
        let mut ufo = Ufo::new();
        ufo.insert_glyph(glyph_with_anchors(
            "t_e_s_t",
            &[("caret_2", 400., 0.), ("caret_1", 200., 0.), ("caret_3", 600., 0.)],
        ));
        assert!(build_gdef(&ufo).contains("LigatureCaretByPos t_e_s_t 200 400 600;"));
    }
}
