use serde::Serialize;

/// The subset of [`fontinfo.plist`][fi] attributes written by the converter.
///
/// Field names serialize to the exact key names the UFO specification uses,
/// so a plist serializer consumes this struct directly. Unset attributes are
/// omitted from the output.
///
/// [fi]: http://unifiedfontobject.org/versions/ufo3/fontinfo.plist/
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    // INFO: Keep this struct sorted alphabetically, serde serializes it in the order you see
    // here and Plist files should be sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascender: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descender: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_type_head_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_type_hhea_ascender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_type_hhea_descender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_type_hhea_line_gap: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_type_name_description: Option<String>,
    #[serde(rename = "openTypeOS2Selection", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_selection: Option<Vec<i32>>,
    #[serde(rename = "openTypeOS2Type", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_type: Option<Vec<i32>>,
    #[serde(rename = "openTypeOS2TypoAscender", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_typo_ascender: Option<i32>,
    #[serde(rename = "openTypeOS2TypoDescender", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_typo_descender: Option<i32>,
    #[serde(rename = "openTypeOS2TypoLineGap", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_typo_line_gap: Option<i32>,
    #[serde(rename = "openTypeOS2WeightClass", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_weight_class: Option<i32>,
    #[serde(rename = "openTypeOS2WidthClass", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_width_class: Option<i32>,
    #[serde(rename = "openTypeOS2WinAscent", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_win_ascent: Option<i32>,
    #[serde(rename = "openTypeOS2WinDescent", skip_serializing_if = "Option::is_none")]
    pub open_type_os2_win_descent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postscript_blue_values: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postscript_other_blues: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postscript_underline_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postscript_underline_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_map_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_map_style_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_per_em: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_major: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_minor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_height: Option<f64>,
}
