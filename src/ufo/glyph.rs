//! Data related to individual output glyphs.

use crate::pen::GlyphPointPen;
use crate::shared_types::Plist;
use crate::{AffineTransform, Name};

/// A glyph in an output font.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// The name of the glyph.
    pub(crate) name: Name,
    /// Glyph width.
    pub width: f64,
    /// A collection of glyph anchors.
    pub anchors: Vec<Anchor>,
    /// A collection of glyph components.
    pub components: Vec<Component>,
    /// A collection of glyph contours.
    pub contours: Vec<Contour>,
    /// Glyph library data.
    pub lib: Plist,
}

impl Glyph {
    /// Returns a new, "empty" [`Glyph`] with the given `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains control characters.
    pub fn new(name: &str) -> Self {
        Glyph::new_impl(Name::new_raw(name))
    }

    // this impl lets the crate pass an explicit `Name`, which is shared with
    // the source glyph and with components referencing it
    pub(crate) fn new_impl(name: Name) -> Self {
        Glyph {
            name,
            width: 0.0,
            anchors: Vec::new(),
            components: Vec::new(),
            contours: Vec::new(),
            lib: Plist::new(),
        }
    }

    /// Returns the name of the glyph.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns true if the glyph contains one or more [`Component`]s.
    pub fn has_component(&self) -> bool {
        !self.components.is_empty()
    }

    /// Returns a pen that draws into this glyph.
    pub fn point_pen(&mut self) -> GlyphPointPen<'_> {
        GlyphPointPen::new(self)
    }
}

/// A reference position in a glyph, such as for attaching accents.
///
/// See the [Anchor section] of the UFO spec for more information.
///
/// [Anchor section]: https://unifiedfontobject.org/versions/ufo3/glyphs/glif/#anchor
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
    /// Returns a new [`Anchor`] given a name and `x` and `y` coordinate values.
    pub fn new(name: Name, x: f64, y: f64) -> Self {
        Anchor { name, x, y }
    }

    /// Returns true if this anchor is an attachment point belonging to a
    /// mark glyph (its name starts with an underscore).
    pub fn is_mark_attachment(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// A reference to another glyph, to be included in this glyph's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// The name of the base glyph used in the component.
    pub base: Name,
    /// Component affine transformation definition.
    pub transform: AffineTransform,
}

impl Component {
    /// Returns a new [`Component`] given a base glyph name and affine transformation definition.
    ///
    /// The 'base' argument should be taken from an existing glyph in the same font.
    pub fn new(base: Name, transform: AffineTransform) -> Self {
        Component { base, transform }
    }
}

/// A single open or closed bezier path segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    /// A collection of contour points.
    pub points: Vec<ContourPoint>,
}

impl Contour {
    /// Returns a new [`Contour`] given a vector of contour points.
    pub fn new(points: Vec<ContourPoint>) -> Self {
        Contour { points }
    }

    /// Whether the contour is closed.
    pub fn is_closed(&self) -> bool {
        self.points.first().map_or(true, |point| point.typ != PointType::Move)
    }

    /// Converts the `Contour` to a [`kurbo::BezPath`].
    #[cfg(feature = "kurbo")]
    pub fn to_kurbo(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let mut offs = std::collections::VecDeque::new();
        let mut points = if self.is_closed() {
            // Add end-of-contour offcurves to queue
            let rotate = self
                .points
                .iter()
                .rev()
                .position(|pt| pt.typ != PointType::OffCurve)
                .map(|idx| self.points.len() - 1 - idx);
            self.points.iter().cycle().skip(rotate.unwrap_or(0)).take(self.points.len() + 1)
        } else {
            #[allow(clippy::iter_skip_zero)]
            self.points.iter().cycle().skip(0).take(self.points.len())
        };
        if let Some(start) = points.next() {
            path.move_to((start.x, start.y));
        }
        for pt in points {
            let kurbo_point = kurbo::Point::new(pt.x, pt.y);
            match pt.typ {
                PointType::Move => path.move_to(kurbo_point),
                PointType::Line => path.line_to(kurbo_point),
                PointType::OffCurve => offs.push_back(kurbo_point),
                PointType::Curve => {
                    match offs.make_contiguous() {
                        [] => path.line_to(kurbo_point),
                        [p1] => path.quad_to(*p1, kurbo_point),
                        [p1, p2] => path.curve_to(*p1, *p2, kurbo_point),
                        _ => (),
                    };
                    offs.clear();
                }
                PointType::QCurve => {
                    while let Some(pt) = offs.pop_front() {
                        if let Some(next) = offs.front() {
                            let implied_point = pt.midpoint(*next);
                            path.quad_to(pt, implied_point);
                        } else {
                            path.quad_to(pt, kurbo_point);
                        }
                    }
                    offs.clear();
                }
            }
        }
        path
    }
}

/// A single point in a [`Contour`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPoint {
    /// Contour point x coordinate value.
    pub x: f64,
    /// Contour point y coordinate value.
    pub y: f64,
    /// Contour point type.
    pub typ: PointType,
    /// Whether a smooth curvature should be maintained at this point. Must not be set for off-curve points.
    pub smooth: bool,
}

impl ContourPoint {
    /// Returns a new [`ContourPoint`] given an `x` coordinate value,
    /// `y` coordinate value, point type, and smooth definition.
    pub fn new(x: f64, y: f64, typ: PointType, smooth: bool) -> Self {
        ContourPoint { x, y, typ, smooth }
    }
}

/// Possible types of points that can exist in a [`Contour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    /// A point of this type must be the first in a contour. The reverse is not true:
    /// a contour does not necessarily start with a move point. When a contour
    /// does start with a move point, it signifies the beginning of an open contour.
    /// A closed contour does not start with a move and is defined as a cyclic
    /// list of points, with no predominant start point.
    Move,
    /// Draw a straight line from the previous point to this point.
    Line,
    /// This point is part of a curve segment that goes up to the next point
    /// that is either a curve or a qcurve.
    OffCurve,
    /// Draw a cubic bezier curve from the last non-offcurve point to this point.
    /// The number of offcurve points can be zero, one or two.
    Curve,
    /// Similar to curve, but uses quadratic curves, using the TrueType
    /// “implied on-curve points” principle.
    QCurve,
}
