//! Turning a Glyphs source into one UFO per master.

mod anchors;
mod custom_params;
mod gdef;
mod kerning;
mod names;
mod outline;

use plist::Value;

use crate::diagnostics::Diagnostics;
use crate::error::BuildError;
use crate::glyphdata;
use crate::glyphs::{Font, Glyph, Master, STABLE_APP_VERSION};
use crate::pen::PointPen;
use crate::shared_types::{Plist, GLYPH_ORDER_KEY, POSTSCRIPT_NAMES_KEY};
use crate::ufo::{self, Ufo};

pub use anchors::propagate_anchors;
pub use custom_params::{normalize_custom_param_name, set_custom_params, set_default_params};
pub use names::{build_style_name, set_redundant_data};
pub use outline::draw_paths;

use kerning::{KERN1_PREFIX, KERN2_PREFIX};

/// Converts a Glyphs font source into one [`Ufo`] per master.
///
/// Warnings go to the `log` facade; use [`to_ufos_with`] to capture them.
pub fn to_ufos(font: &Font) -> Result<Vec<Ufo>, BuildError> {
    let mut diagnostics = Diagnostics::new();
    to_ufos_with(font, &mut diagnostics)
}

/// Converts a Glyphs font source into one [`Ufo`] per master, recording
/// warnings in `diagnostics`.
pub fn to_ufos_with(font: &Font, diagnostics: &mut Diagnostics) -> Result<Vec<Ufo>, BuildError> {
    if font.app_version.parse::<i64>().unwrap_or(0) < STABLE_APP_VERSION {
        diagnostics.warn(
            "This Glyphs source was generated with an outdated version of Glyphs. \
             The resulting UFOs may be incorrect.",
        );
    }
    convert_masters(font, diagnostics)
}

#[cfg(not(feature = "rayon"))]
fn convert_masters(font: &Font, diagnostics: &mut Diagnostics) -> Result<Vec<Ufo>, BuildError> {
    font.masters.iter().map(|master| build_master(font, master, diagnostics)).collect()
}

// masters share no mutable state, so they convert in parallel; each gets its
// own warning sink, merged back in master order
#[cfg(feature = "rayon")]
fn convert_masters(font: &Font, diagnostics: &mut Diagnostics) -> Result<Vec<Ufo>, BuildError> {
    use rayon::prelude::*;

    let results: Vec<Result<(Ufo, Diagnostics), BuildError>> = font
        .masters
        .par_iter()
        .map(|master| {
            let mut sink = Diagnostics::new();
            build_master(font, master, &mut sink).map(|ufo| (ufo, sink))
        })
        .collect();

    let mut ufos = Vec::with_capacity(results.len());
    for result in results {
        let (ufo, sink) = result?;
        diagnostics.merge(sink);
        ufos.push(ufo);
    }
    Ok(ufos)
}

/// Builds the UFO for a single master.
fn build_master(font: &Font, master: &Master, diagnostics: &mut Diagnostics) -> Result<Ufo, BuildError> {
    let mut ufo = Ufo::new();

    let info = &mut ufo.font_info;
    info.family_name = Some(font.family_name.clone());
    info.units_per_em = Some(font.units_per_em);
    info.version_major = Some(font.version_major);
    info.version_minor = Some(font.version_minor);
    info.open_type_head_created = font.date.clone();
    info.ascender = Some(master.ascender);
    info.cap_height = Some(master.cap_height);
    info.descender = Some(master.descender);
    info.x_height = Some(master.x_height);
    let italic = master.italic_angle != 0.0;
    if italic {
        // Glyphs angles are clockwise from vertical, UFO angles the reverse
        info.italic_angle = Some(-master.italic_angle);
    }
    info.style_name = Some(build_style_name(
        master.width.as_deref(),
        master.weight.as_deref(),
        master.custom.as_deref(),
        italic,
    ));
    set_redundant_data(&mut ufo);

    for glyph in font.glyphs.values() {
        register_kerning_groups(&mut ufo, glyph);
        let layer = match glyph.layer_for_master(&master.id) {
            Some(layer) => layer,
            None => {
                diagnostics.warn(format!(
                    "glyph '{}' has no layer for master '{}'",
                    glyph.name, master.id
                ));
                continue;
            }
        };
        let mut ufo_glyph = ufo::Glyph::new_impl(glyph.name.clone());
        ufo_glyph.width = layer.width;
        for anchor in &layer.anchors {
            ufo_glyph.anchors.push(ufo::glyph::Anchor::new(anchor.name.clone(), anchor.x, anchor.y));
        }
        let mut pen = ufo_glyph.point_pen();
        draw_paths(&mut pen, &layer.paths);
        for component in &layer.components {
            pen.add_component(component.base.clone(), component.transform);
        }
        ufo.insert_glyph(ufo_glyph);
    }

    set_postscript_names(&mut ufo, font);
    propagate_anchors(&mut ufo)?;
    ufo.features = gdef::build_gdef(&ufo);

    names::set_blue_values(&mut ufo, &master.alignment_zones);
    set_custom_params(&mut ufo, &font.custom_parameters);
    set_custom_params(&mut ufo, &master.custom_parameters);
    set_default_params(&mut ufo);

    // the glyph order merge wins over a raw glyphOrder parameter value
    set_glyph_order(&mut ufo, font);

    if let Some(kerning) = font.kerning.get(&master.id) {
        kerning::load_kerning(&mut ufo, kerning, diagnostics);
    }

    Ok(ufo)
}

/// Registers the glyph's kerning group memberships.
///
/// A glyph's right side groups it as the *first* element of a pair, its
/// left side as the *second*.
fn register_kerning_groups(ufo: &mut Ufo, glyph: &Glyph) {
    if let Some(group) = &glyph.right_kerning_group {
        ufo.groups.entry(format!("{KERN1_PREFIX}{group}")).or_default().push(glyph.name.clone());
    }
    if let Some(group) = &glyph.left_kerning_group {
        ufo.groups.entry(format!("{KERN2_PREFIX}{group}")).or_default().push(glyph.name.clone());
    }
}

/// Records production (PostScript) names that differ from the nice names.
fn set_postscript_names(ufo: &mut Ufo, font: &Font) {
    let mut postscript_names = Plist::new();
    for glyph in font.glyphs.values() {
        let production = match &glyph.production {
            Some(production) => Some(production.clone()),
            None => glyphdata::production_name(&glyph.name),
        };
        if let Some(production) = production.filter(|production| *production != glyph.name.as_str())
        {
            postscript_names.insert(glyph.name.to_string(), Value::String(production));
        }
    }
    if !postscript_names.is_empty() {
        ufo.lib.insert(POSTSCRIPT_NAMES_KEY.into(), Value::Dictionary(postscript_names));
    }
}

/// Stores the output glyph order: source declaration order, unless a
/// `glyphOrder` custom parameter reorders it, in which case unlisted glyphs
/// are appended in declaration order.
fn set_glyph_order(ufo: &mut Ufo, font: &Font) {
    let mut order: Vec<String> = match font.custom_parameter("glyphOrder") {
        Some(Value::Array(values)) => {
            values.iter().filter_map(|value| value.as_string().map(String::from)).collect()
        }
        _ => Vec::new(),
    };
    for name in font.glyphs.keys() {
        if !order.iter().any(|ordered| ordered == name.as_str()) {
            order.push(name.to_string());
        }
    }
    ufo.lib.insert(GLYPH_ORDER_KEY.into(), Value::Array(order.into_iter().map(Value::String).collect()));
}
