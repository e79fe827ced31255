//! Applying Glyphs custom parameters onto the output font.

use plist::Value;

use crate::glyphs::CustomParameter;
use crate::shared_types::{GLYPHS_PREFIX, GLYPH_ORDER_KEY};
use crate::ufo::Ufo;

/// Normalizes a custom parameter name for use as a lib key.
///
/// Glyphs is happy to autocorrect parameter names into typographic curly
/// quotes; those are folded back to straight quotes here.
pub fn normalize_custom_param_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Sets Glyphs custom parameters in UFO info or lib, where appropriate.
///
/// Typed parameters land on the corresponding `fontinfo` field, overriding
/// any value derived earlier from other data; everything unrecognized is
/// stored under a [`GLYPHS_PREFIX`]ed lib key. Font-wide parameters should
/// be applied before master ones, so the master wins.
pub fn set_custom_params(ufo: &mut Ufo, parameters: &[CustomParameter]) {
    for parameter in parameters {
        let name = normalize_custom_param_name(&parameter.name);
        apply_param(ufo, &name, &parameter.value);
    }
}

fn apply_param(ufo: &mut Ufo, name: &str, value: &Value) {
    let info = &mut ufo.font_info;
    match name {
        "glyphOrder" => {
            ufo.lib.insert(GLYPH_ORDER_KEY.into(), value.clone());
            return;
        }
        // fsSelection bits accumulate in application order
        "Use Typo Metrics" => {
            add_selection_bit(ufo, 7, value);
            return;
        }
        "Has WWS Names" => {
            add_selection_bit(ufo, 8, value);
            return;
        }
        "weightClass" => {
            if let Some(class) = int_value(value) {
                info.open_type_os2_weight_class = Some(class);
                return;
            }
        }
        "widthClass" => {
            if let Some(class) = int_value(value) {
                info.open_type_os2_width_class = Some(class);
                return;
            }
        }
        "underlinePosition" => {
            if let Some(position) = float_value(value) {
                info.postscript_underline_position = Some(position);
                return;
            }
        }
        "underlineThickness" => {
            if let Some(thickness) = float_value(value) {
                info.postscript_underline_thickness = Some(thickness);
                return;
            }
        }
        "fsType" => {
            if let Some(bits) = bit_list(value) {
                info.open_type_os2_type = Some(bits);
                return;
            }
        }
        "typoAscender" => {
            if let Some(v) = int_value(value) {
                info.open_type_os2_typo_ascender = Some(v);
                return;
            }
        }
        "typoDescender" => {
            if let Some(v) = int_value(value) {
                info.open_type_os2_typo_descender = Some(v);
                return;
            }
        }
        "typoLineGap" => {
            if let Some(v) = int_value(value) {
                info.open_type_os2_typo_line_gap = Some(v);
                return;
            }
        }
        // the UFO spec wants win ascent/descent positive
        "winAscent" => {
            if let Some(v) = int_value(value) {
                info.open_type_os2_win_ascent = Some(v.abs());
                return;
            }
        }
        "winDescent" => {
            if let Some(v) = int_value(value) {
                info.open_type_os2_win_descent = Some(v.abs());
                return;
            }
        }
        "hheaAscender" => {
            if let Some(v) = int_value(value) {
                info.open_type_hhea_ascender = Some(v);
                return;
            }
        }
        "hheaDescender" => {
            if let Some(v) = int_value(value) {
                info.open_type_hhea_descender = Some(v);
                return;
            }
        }
        "hheaLineGap" => {
            if let Some(v) = int_value(value) {
                info.open_type_hhea_line_gap = Some(v);
                return;
            }
        }
        "description" => {
            if let Value::String(text) = value {
                info.open_type_name_description = Some(text.clone());
                return;
            }
        }
        _ => (),
    }
    // unrecognized parameters (and recognized ones with an unusable value)
    // survive in the lib for round-tripping
    ufo.lib.insert(format!("{GLYPHS_PREFIX}{name}"), value.clone());
}

/// Sets Glyphs.app's default parameters where nothing else set a value.
pub fn set_default_params(ufo: &mut Ufo) {
    let info = &mut ufo.font_info;
    // Glyphs defaults to fsType bit 3, "editable embedding"
    if info.open_type_os2_type.is_none() {
        info.open_type_os2_type = Some(vec![3]);
    }
    if info.postscript_underline_position.is_none() {
        info.postscript_underline_position = Some(-100.);
    }
    if info.postscript_underline_thickness.is_none() {
        info.postscript_underline_thickness = Some(50.);
    }
}

fn add_selection_bit(ufo: &mut Ufo, bit: i32, value: &Value) {
    if truthy(value) {
        ufo.font_info.open_type_os2_selection.get_or_insert_with(Vec::new).push(bit);
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => i.as_signed().is_some_and(|i| i != 0),
        _ => false,
    }
}

fn int_value(value: &Value) -> Option<i32> {
    match value {
        Value::Integer(i) => i.as_signed().map(|i| i as i32),
        Value::Real(f) => Some(*f as i32),
        _ => None,
    }
}

fn float_value(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => i.as_signed().map(|i| i as f64),
        Value::Real(f) => Some(*f),
        _ => None,
    }
}

fn bit_list(value: &Value) -> Option<Vec<i32>> {
    match value {
        Value::Array(values) => values.iter().map(int_value).collect(),
        _ => int_value(value).map(|bit| vec![bit]),
    }
}
