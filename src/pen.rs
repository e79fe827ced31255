//! The point-pen protocol outlines are drawn through.

use crate::ufo::glyph::{Component, Contour, ContourPoint, Glyph, PointType};
use crate::{AffineTransform, Name};

/// A receiver for outline drawing operations.
///
/// This mirrors the point-pen protocol of UFO tooling: a contour is
/// bracketed by [`begin_path`]/[`end_path`] calls with one [`add_point`]
/// call per point, and components are added separately. Off-curve points
/// are passed with a point type of `None`; it is the receiver's
/// responsibility to interpret runs of off-curve points as cubic or
/// quadratic segments.
///
/// [`begin_path`]: PointPen::begin_path
/// [`end_path`]: PointPen::end_path
/// [`add_point`]: PointPen::add_point
pub trait PointPen {
    /// Starts a new contour.
    fn begin_path(&mut self);
    /// Adds a point to the current contour. `typ` is `None` for off-curve
    /// points.
    fn add_point(&mut self, x: f64, y: f64, typ: Option<PointType>, smooth: bool);
    /// Finishes the current contour.
    fn end_path(&mut self);
    /// Adds a reference to another glyph, placed by `transform`.
    fn add_component(&mut self, base: Name, transform: AffineTransform);
}

/// A [`PointPen`] that writes contours and components into a [`Glyph`].
#[derive(Debug)]
pub struct GlyphPointPen<'a> {
    glyph: &'a mut Glyph,
    contour: Option<Contour>,
}

impl<'a> GlyphPointPen<'a> {
    /// Returns a new pen drawing into `glyph`.
    pub fn new(glyph: &'a mut Glyph) -> Self {
        GlyphPointPen { glyph, contour: None }
    }
}

impl PointPen for GlyphPointPen<'_> {
    fn begin_path(&mut self) {
        debug_assert!(self.contour.is_none(), "begin_path while a contour is open");
        self.contour = Some(Contour::default());
    }

    fn add_point(&mut self, x: f64, y: f64, typ: Option<PointType>, smooth: bool) {
        debug_assert!(self.contour.is_some(), "add_point without begin_path");
        if let Some(contour) = self.contour.as_mut() {
            let typ = typ.unwrap_or(PointType::OffCurve);
            contour.points.push(ContourPoint::new(x, y, typ, smooth));
        }
    }

    fn end_path(&mut self) {
        if let Some(contour) = self.contour.take() {
            if !contour.points.is_empty() {
                self.glyph.contours.push(contour);
            }
        }
    }

    fn add_component(&mut self, base: Name, transform: AffineTransform) {
        self.glyph.components.push(Component::new(base, transform));
    }
}
