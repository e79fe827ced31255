//! End-to-end tests of the master conversion pipeline.

use expect_test::expect;
use indexmap::IndexMap;
use plist::Value;
use pretty_assertions::assert_eq;

use glyphs2ufo::glyphs::{
    Anchor, AlignmentZone, Component, CustomParameter, Font, Glyph, KerningTable, Layer, Master,
};
use glyphs2ufo::{
    to_ufos, to_ufos_with, AffineTransform, Diagnostics, GLYPH_ORDER_KEY, POSTSCRIPT_NAMES_KEY,
};

fn minimal_font() -> Font {
    let mut font = Font::new("MyFont");
    font.date = Some("2016/08/05 12:34:56".into());
    font.masters.push(Master::new("id"));
    font
}

fn add_glyph(font: &mut Font, name: &str) {
    let mut glyph = Glyph::new(name);
    glyph.layers.push(Layer::new("id"));
    font.add_glyph(glyph);
}

fn add_anchor(font: &mut Font, glyph: &str, anchor: &str, x: f64, y: f64) {
    let glyph = font.glyphs.get_mut(glyph).unwrap();
    for layer in &mut glyph.layers {
        layer.anchors.push(Anchor::new(anchor, x, y));
    }
}

fn add_component(font: &mut Font, glyph: &str, base: &str, dx: f64, dy: f64) {
    let glyph = font.glyphs.get_mut(glyph).unwrap();
    for layer in &mut glyph.layers {
        layer.components.push(Component::new(base, AffineTransform::translate(dx, dy)));
    }
}

fn glyph_order(ufo: &glyphs2ufo::Ufo) -> Vec<String> {
    match ufo.lib.get(GLYPH_ORDER_KEY) {
        Some(Value::Array(names)) => {
            names.iter().filter_map(|name| name.as_string().map(String::from)).collect()
        }
        _ => panic!("no glyph order in lib"),
    }
}

#[test]
fn minimal_data() {
    let font = minimal_font();
    let ufos = to_ufos(&font).unwrap();
    assert_eq!(ufos.len(), 1);

    let ufo = &ufos[0];
    assert_eq!(ufo.len(), 0);
    assert_eq!(ufo.font_info.family_name.as_deref(), Some("MyFont"));
    assert_eq!(ufo.font_info.version_major, Some(1));
    assert_eq!(ufo.font_info.version_minor, Some(0));
    assert_eq!(ufo.font_info.open_type_head_created.as_deref(), Some("2016/08/05 12:34:56"));
}

#[test]
fn warn_no_version() {
    let mut font = minimal_font();
    font.app_version = "0".into();
    let mut diagnostics = Diagnostics::new();
    to_ufos_with(&font, &mut diagnostics).unwrap();
    let outdated: Vec<_> = diagnostics
        .warnings()
        .iter()
        .filter(|warning| warning.contains("outdated version"))
        .collect();
    assert_eq!(outdated.len(), 1);
}

#[test]
fn missing_date() {
    let mut font = minimal_font();
    font.date = None;
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_head_created, None);
}

/// Kerning conflicts resolve in favor of the rule stored last.
#[test]
fn load_kerning() {
    let mut font = minimal_font();

    // classes 'A': [A, a] and 'V': [V, v], on both sides
    for name in ["A", "a", "V", "v"] {
        add_glyph(&mut font, name);
        let glyph = font.glyphs.get_mut(name).unwrap();
        glyph.right_kerning_group = Some(name.to_uppercase());
        glyph.left_kerning_group = Some(name.to_uppercase());
    }

    // classes are referenced in Glyphs kerning using old MMK names
    let mut table: KerningTable = IndexMap::new();
    table.insert(
        "@MMK_L_A".into(),
        IndexMap::from([("@MMK_R_V".to_string(), -250.), ("v".to_string(), -100.)]),
    );
    table.insert("a".into(), IndexMap::from([("@MMK_R_V".to_string(), 100.)]));
    font.kerning.insert("id".into(), table);

    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];

    // these rules should be obvious
    assert_eq!(ufo.kerning["public.kern1.A"]["public.kern2.V"], -250.);
    assert_eq!(ufo.kerning["a"]["public.kern2.V"], 100.);

    // this rule results from breaking up (kern1.A, v, -100)
    // due to conflict with (a, kern2.V, 100)
    assert_eq!(ufo.kerning["A"]["v"], -100.);
    assert!(ufo.kerning.get("public.kern1.A").and_then(|seconds| seconds.get("v")).is_none());
}

/// Anchor propagation for some relatively complicated cases.
#[test]
fn propagate_anchors() {
    let mut font = minimal_font();

    let glyphs: &[(&str, &[(&str, f64, f64)], &[(&str, f64, f64)])] = &[
        ("sad", &[], &[("bottom", 50., -50.), ("top", 50., 150.)]),
        ("dotabove", &[], &[("top", 0., 150.), ("_top", 0., 100.)]),
        ("dotbelow", &[], &[("bottom", 0., -50.), ("_bottom", 0., 0.)]),
        ("dad", &[("sad", 0., 0.), ("dotabove", 50., 50.)], &[]),
        ("dadDotbelow", &[("dad", 0., 0.), ("dotbelow", 50., -50.)], &[]),
        ("yod", &[], &[("bottom", 50., -50.)]),
        ("yodyod", &[("yod", 0., 0.), ("yod", 100., 0.)], &[]),
    ];
    for (name, components, anchors) in glyphs {
        add_glyph(&mut font, name);
        for (anchor, x, y) in *anchors {
            add_anchor(&mut font, name, anchor, *x, *y);
        }
        for (base, dx, dy) in *components {
            add_component(&mut font, name, base, *dx, *dy);
        }
    }

    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];

    let glyph = ufo.glyph("dadDotbelow").unwrap();
    assert_eq!(glyph.anchors.len(), 2);
    for anchor in &glyph.anchors {
        assert_eq!(anchor.x, 50.);
        match anchor.name.as_str() {
            "bottom" => assert_eq!(anchor.y, -100.),
            "top" => assert_eq!(anchor.y, 200.),
            other => panic!("unexpected anchor {other}"),
        }
    }

    let glyph = ufo.glyph("yodyod").unwrap();
    assert_eq!(glyph.anchors.len(), 2);
    for anchor in &glyph.anchors {
        assert_eq!(anchor.y, -50.);
        match anchor.name.as_str() {
            "bottom_1" => assert_eq!(anchor.x, 50.),
            "bottom_2" => assert_eq!(anchor.x, 150.),
            other => panic!("unexpected anchor {other}"),
        }
    }
}

#[test]
fn propagation_is_idempotent() {
    let mut font = minimal_font();
    add_glyph(&mut font, "yod");
    add_anchor(&mut font, "yod", "bottom", 50., -50.);
    add_glyph(&mut font, "yodyod");
    add_component(&mut font, "yodyod", "yod", 0., 0.);
    add_component(&mut font, "yodyod", "yod", 100., 0.);

    let mut ufos = to_ufos(&font).unwrap();
    let ufo = &mut ufos[0];
    let before = ufo.glyph("yodyod").unwrap().anchors.clone();
    glyphs2ufo::propagate_anchors(ufo).unwrap();
    assert_eq!(ufo.glyph("yodyod").unwrap().anchors, before);
}

#[test]
fn postscript_name_from_data() {
    let mut font = minimal_font();
    add_glyph(&mut font, "foo");
    font.glyphs.get_mut("foo").unwrap().production = Some("f_o_o.alt1".into());
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    let names = ufo.lib.get(POSTSCRIPT_NAMES_KEY).and_then(Value::as_dictionary).unwrap();
    assert_eq!(names.get("foo").and_then(Value::as_string), Some("f_o_o.alt1"));
}

#[test]
fn postscript_name_from_glyph_name() {
    let mut font = minimal_font();
    add_glyph(&mut font, "C-fraktur");
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    let names = ufo.lib.get(POSTSCRIPT_NAMES_KEY).and_then(Value::as_dictionary).unwrap();
    assert_eq!(names.get("C-fraktur").and_then(Value::as_string), Some("uni212D"));
}

#[test]
fn weight_class_default() {
    let font = minimal_font();
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_weight_class, Some(400));
}

#[test]
fn weight_class_from_weight() {
    let mut font = minimal_font();
    font.masters[0].weight = Some("Bold".into());
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_weight_class, Some(700));
}

/// An explicit weightClass parameter overrides the weight name.
#[test]
fn weight_class_from_custom_parameter() {
    let mut font = minimal_font();
    font.masters[0].weight = Some("Bold".into()); // 700
    font.masters[0].custom_parameters.push(CustomParameter::new("weightClass", 698));
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_weight_class, Some(698));
}

#[test]
fn width_class_default() {
    let font = minimal_font();
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_width_class, Some(5));
}

#[test]
fn width_class_from_width() {
    let mut font = minimal_font();
    font.masters[0].width = Some("Extra Condensed".into());
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_width_class, Some(2));
}

/// An explicit widthClass parameter overrides the width name.
#[test]
fn width_class_from_custom_parameter() {
    let mut font = minimal_font();
    font.masters[0].width = Some("Extra Condensed".into()); // 2
    font.masters[0].custom_parameters.push(CustomParameter::new("widthClass", 7));
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.font_info.open_type_os2_width_class, Some(7));
}

#[test]
fn gdef() {
    let mut font = minimal_font();
    for name in [
        "space",
        "A",
        "A.alt",
        "wigglylinebelowcomb",
        "wigglylinebelowcomb.alt",
        "fi",
        "fi.alt",
        "t_e_s_t",
        "t_e_s_t.alt",
    ] {
        add_glyph(&mut font, name);
    }
    add_anchor(&mut font, "A", "bottom", 300., -10.);
    add_anchor(&mut font, "wigglylinebelowcomb", "_bottom", 100., 40.);
    add_anchor(&mut font, "fi", "caret_1", 150., 0.);
    add_anchor(&mut font, "t_e_s_t.alt", "caret_1", 200., 0.);
    add_anchor(&mut font, "t_e_s_t.alt", "caret_2", 400., 0.);
    add_anchor(&mut font, "t_e_s_t.alt", "caret_3", 600., 0.);

    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    expect![[r#"
        table GDEF {
          # automatic
          GlyphClassDef
            [A], # Base
            [fi t_e_s_t.alt], # Liga
            [wigglylinebelowcomb wigglylinebelowcomb.alt], # Mark
            ;
          LigatureCaretByPos fi 150;
          LigatureCaretByPos t_e_s_t.alt 200 400 600;
        } GDEF;"#]]
    .assert_eq(&ufo.features);
}

#[test]
fn gdef_nonattaching_anchor_produces_no_text() {
    let mut font = minimal_font();
    add_glyph(&mut font, "A.alt");
    add_anchor(&mut font, "A.alt", "_top", 400., 1000.);
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(ufo.features, "");
}

/// Blue values are set correctly from alignment zones.
#[test]
fn set_blue_values() {
    let zones: Vec<AlignmentZone> =
        [(500., 15.), (400., -15.), (0., -15.), (-200., 15.), (-300., -15.)]
            .into_iter()
            .map(|(position, size)| AlignmentZone { position, size })
            .collect();
    let mut font = minimal_font();
    font.masters[0].alignment_zones = zones;

    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(
        ufo.font_info.postscript_blue_values,
        Some(vec![-200., -185., -15., 0., 500., 515.])
    );
    assert_eq!(ufo.font_info.postscript_other_blues, Some(vec![-315., -300., 385., 400.]));
}

#[test]
fn glyph_order_no_custom_parameter() {
    let mut font = minimal_font();
    for name in ["C", "B", "A", "Z"] {
        add_glyph(&mut font, name);
    }
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(glyph_order(ufo), ["C", "B", "A", "Z"]);
}

#[test]
fn glyph_order_with_custom_parameter() {
    let mut font = minimal_font();
    font.custom_parameters.push(CustomParameter::new(
        "glyphOrder",
        Value::Array(vec!["A".into(), "B".into(), "C".into()]),
    ));
    for name in ["C", "B", "A"] {
        add_glyph(&mut font, name);
    }
    // glyphs outside glyphOrder are appended at the end
    add_glyph(&mut font, "Z");
    let ufos = to_ufos(&font).unwrap();
    let ufo = &ufos[0];
    assert_eq!(glyph_order(ufo), ["A", "B", "C", "Z"]);
}
