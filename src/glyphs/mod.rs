//! Data model for a Glyphs.app font source.
//!
//! The types here mirror what a `.glyphs` file describes once it has been
//! parsed: a font with masters, instances, glyphs and per-master kerning.
//! They are populated by a loader and treated as read-only input by the
//! [`builder`](crate::builder) module.

mod glyph;

use indexmap::IndexMap;

pub use glyph::{Anchor, Component, Glyph, Layer, Node, NodeType, Path};

use crate::Name;

/// The Glyphs application build everything at or above is considered current.
///
/// Sources written by older builds convert with a warning; see
/// [`to_ufos`](crate::to_ufos).
pub const STABLE_APP_VERSION: i64 = 895;

/// A per-master kerning table: left key to right key to value, in authoring
/// order. Keys are glyph names or kerning group references.
pub type KerningTable = IndexMap<String, IndexMap<String, f64>>;

/// A Glyphs font source.
///
/// Owns the masters, instances and glyphs of one `.glyphs` file. Glyph order
/// is significant; it defines the default output glyph order.
#[derive(Debug, Clone)]
pub struct Font {
    /// Family name.
    pub family_name: String,
    /// The version of the Glyphs application that wrote the source, as a
    /// build number string.
    pub app_version: String,
    /// Creation date, formatted `"%Y/%m/%d %H:%M:%S"`.
    pub date: Option<String>,
    /// Units per em.
    pub units_per_em: f64,
    /// Major version number.
    pub version_major: i32,
    /// Minor version number.
    pub version_minor: u32,
    /// The font's masters. Each master becomes one output font.
    pub masters: Vec<Master>,
    /// The font's instances.
    pub instances: Vec<Instance>,
    /// The font's glyphs, unique by name, in declaration order.
    pub glyphs: IndexMap<Name, Glyph>,
    /// Kerning tables, keyed by master id.
    pub kerning: IndexMap<String, KerningTable>,
    /// Font-wide custom parameters.
    pub custom_parameters: Vec<CustomParameter>,
}

impl Font {
    /// Returns a new font with the given family name and no content.
    pub fn new(family_name: impl Into<String>) -> Self {
        Font {
            family_name: family_name.into(),
            app_version: STABLE_APP_VERSION.to_string(),
            date: None,
            units_per_em: 1000.,
            version_major: 1,
            version_minor: 0,
            masters: Vec::new(),
            instances: Vec::new(),
            glyphs: IndexMap::new(),
            kerning: IndexMap::new(),
            custom_parameters: Vec::new(),
        }
    }

    /// Returns a reference to the glyph named `name`, if it exists.
    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    /// Adds `glyph` to the font, after all existing glyphs.
    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.name.clone(), glyph);
    }

    /// Returns the value of the font-wide custom parameter named `name`.
    pub fn custom_parameter(&self, name: &str) -> Option<&plist::Value> {
        find_custom_parameter(&self.custom_parameters, name)
    }
}

pub(crate) fn find_custom_parameter<'a>(
    parameters: &'a [CustomParameter],
    name: &str,
) -> Option<&'a plist::Value> {
    parameters.iter().find(|parameter| parameter.name == name).map(|parameter| &parameter.value)
}

/// One design variant of a [`Font`], e.g. a weight/width extreme.
///
/// Masters own outlines (through each glyph's layers) and vertical metrics.
#[derive(Debug, Clone)]
pub struct Master {
    /// The master's identifier; glyph layers reference it.
    pub id: String,
    /// Ascender height.
    pub ascender: f64,
    /// Cap height.
    pub cap_height: f64,
    /// Descender depth (negative below the baseline).
    pub descender: f64,
    /// x-height.
    pub x_height: f64,
    /// Italic angle, in degrees clockwise from vertical.
    pub italic_angle: f64,
    /// Weight name, e.g. "Bold". The implicit default is "Regular".
    pub weight: Option<String>,
    /// Width name, e.g. "Condensed". The implicit default is "Regular".
    pub width: Option<String>,
    /// Free-form style text appended before width and weight.
    pub custom: Option<String>,
    /// Alignment zones, used to derive PostScript blue values.
    pub alignment_zones: Vec<AlignmentZone>,
    /// Master-level custom parameters. These override font-wide ones.
    pub custom_parameters: Vec<CustomParameter>,
}

impl Master {
    /// Returns a new master with the given id and zeroed metrics.
    pub fn new(id: impl Into<String>) -> Self {
        Master {
            id: id.into(),
            ascender: 0.,
            cap_height: 0.,
            descender: 0.,
            x_height: 0.,
            italic_angle: 0.,
            weight: None,
            width: None,
            custom: None,
            alignment_zones: Vec::new(),
            custom_parameters: Vec::new(),
        }
    }

    /// Returns the value of the master-level custom parameter named `name`.
    pub fn custom_parameter(&self, name: &str) -> Option<&plist::Value> {
        find_custom_parameter(&self.custom_parameters, name)
    }
}

/// A named style point, typically interpolated between masters.
///
/// Instances do not own outlines; they only carry naming and parameters.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The instance's name.
    pub name: String,
    /// Weight name, e.g. "Thin".
    pub weight: Option<String>,
    /// Width name, e.g. "Condensed".
    pub width: Option<String>,
    /// Free-form style text appended before width and weight.
    pub custom: Option<String>,
    /// Whether this instance is italic.
    pub is_italic: bool,
    /// Instance-level custom parameters.
    pub custom_parameters: Vec<CustomParameter>,
}

impl Instance {
    /// Returns a new upright instance with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Instance {
            name: name.into(),
            weight: None,
            width: None,
            custom: None,
            is_italic: false,
            custom_parameters: Vec::new(),
        }
    }

    /// Returns the style name this instance describes.
    pub fn style_name(&self) -> String {
        crate::builder::build_style_name(
            self.width.as_deref(),
            self.weight.as_deref(),
            self.custom.as_deref(),
            self.is_italic,
        )
    }
}

/// An alignment zone: a `position` and a `size` extending above (positive)
/// or below (negative) it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentZone {
    /// The zone's flat edge.
    pub position: f64,
    /// The zone's extent; the sign gives the direction.
    pub size: f64,
}

impl AlignmentZone {
    /// Returns the zone's bounds with the smaller value first.
    pub fn bounds(&self) -> (f64, f64) {
        let far = self.position + self.size;
        if far < self.position {
            (far, self.position)
        } else {
            (self.position, far)
        }
    }
}

/// A named custom parameter attached to a font, master or instance.
///
/// Parameter names authored in Glyphs may contain typographic curly quotes;
/// they are normalized before use as lib keys, see
/// [`normalize_custom_param_name`](crate::builder::normalize_custom_param_name).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomParameter {
    /// The parameter's name.
    pub name: String,
    /// The parameter's value.
    pub value: plist::Value,
}

impl CustomParameter {
    /// Returns a new custom parameter.
    pub fn new(name: impl Into<String>, value: impl Into<plist::Value>) -> Self {
        CustomParameter { name: name.into(), value: value.into() }
    }
}
