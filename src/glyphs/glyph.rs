//! Glyphs, layers and outlines of a Glyphs source.

use std::str::FromStr;

use crate::error::UnknownNodeType;
use crate::{AffineTransform, Name};

/// A glyph in a Glyphs source.
///
/// A glyph owns one [`Layer`] per master, matched by master id. Glyph names
/// are unique within a font.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// The name of the glyph.
    pub name: Name,
    /// The production (PostScript) name, when it differs from the nice name
    /// derived by the glyph database.
    pub production: Option<String>,
    /// The kerning group for this glyph's left side (the right element of a
    /// kerning pair).
    pub left_kerning_group: Option<String>,
    /// The kerning group for this glyph's right side (the left element of a
    /// kerning pair).
    pub right_kerning_group: Option<String>,
    /// The glyph's layers, one per master.
    pub layers: Vec<Layer>,
}

impl Glyph {
    /// Returns a new, empty glyph with the given `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains control characters.
    pub fn new(name: &str) -> Self {
        Glyph {
            name: Name::new_raw(name),
            production: None,
            left_kerning_group: None,
            right_kerning_group: None,
            layers: Vec::new(),
        }
    }

    /// Returns the layer belonging to the master with `master_id`.
    pub fn layer_for_master(&self, master_id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.layer_id == master_id)
    }
}

/// One master's outlines and anchors for a glyph.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// The id of the master this layer belongs to.
    pub layer_id: String,
    /// Advance width.
    pub width: f64,
    /// The layer's paths.
    pub paths: Vec<Path>,
    /// The layer's components.
    pub components: Vec<Component>,
    /// The layer's anchors.
    pub anchors: Vec<Anchor>,
}

impl Layer {
    /// Returns a new, empty layer for the master with `layer_id`.
    pub fn new(layer_id: impl Into<String>) -> Self {
        Layer { layer_id: layer_id.into(), ..Default::default() }
    }
}

/// An ordered list of nodes, open or closed.
///
/// Closed paths store their starting node at the *end* of the list; the
/// outline adapter restores pen order when drawing.
#[derive(Debug, Clone, Default)]
pub struct Path {
    /// The path's nodes.
    pub nodes: Vec<Node>,
    /// Whether the path is closed.
    pub closed: bool,
}

impl Path {
    /// Returns a new path.
    pub fn new(nodes: Vec<Node>, closed: bool) -> Self {
        Path { nodes, closed }
    }
}

/// A single node in a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node x coordinate value.
    pub x: f64,
    /// Node y coordinate value.
    pub y: f64,
    /// Node type.
    pub node_type: NodeType,
    /// Whether a smooth curvature should be maintained at this node.
    pub smooth: bool,
}

impl Node {
    /// Returns a new node without the smooth flag.
    pub fn new(x: f64, y: f64, node_type: NodeType) -> Self {
        Node { x, y, node_type, smooth: false }
    }

    /// Returns a new smooth node.
    pub fn smooth(x: f64, y: f64, node_type: NodeType) -> Self {
        Node { x, y, node_type, smooth: true }
    }
}

/// Possible types of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Draw a straight line from the previous node to this node.
    Line,
    /// Draw a cubic bezier curve from the last on-curve node to this node,
    /// using the preceding off-curve nodes as controls.
    Curve,
    /// A control node of a curve or qcurve segment.
    OffCurve,
    /// Like curve, but quadratic, using the TrueType "implied on-curve
    /// points" principle.
    QCurve,
}

/// FromStr trait implementation for [`NodeType`].
impl FromStr for NodeType {
    type Err = UnknownNodeType;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Glyphs writes node types in upper case; accept both spellings.
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(NodeType::Line),
            "curve" => Ok(NodeType::Curve),
            "offcurve" => Ok(NodeType::OffCurve),
            "qcurve" => Ok(NodeType::QCurve),
            _other => Err(UnknownNodeType(s.into())),
        }
    }
}

/// Display trait implementation for [`NodeType`].
impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Line => write!(f, "line"),
            NodeType::Curve => write!(f, "curve"),
            NodeType::OffCurve => write!(f, "offcurve"),
            NodeType::QCurve => write!(f, "qcurve"),
        }
    }
}

/// A placed reference to another glyph, plus an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// The name of the referenced glyph.
    pub base: Name,
    /// The transform placing the referenced glyph's outline.
    pub transform: AffineTransform,
}

impl Component {
    /// Returns a new component referencing the glyph named `base`.
    pub fn new(base: &str, transform: AffineTransform) -> Self {
        Component { base: Name::new_raw(base), transform }
    }
}

/// A named reference position on a [`Layer`].
///
/// A leading underscore marks an attachment point belonging to a mark glyph
/// (`"_top"`) rather than an attachment point on a base (`"top"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// The name of the anchor.
    pub name: Name,
    /// Anchor x coordinate value.
    pub x: f64,
    /// Anchor y coordinate value.
    pub y: f64,
}

impl Anchor {
    /// Returns a new anchor.
    pub fn new(name: &str, x: f64, y: f64) -> Self {
        Anchor { name: Name::new_raw(name), x, y }
    }
}
