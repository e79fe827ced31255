//! 2D affine transformations.

/// Taken together in order, these fields represent an affine transformation
/// matrix `[x_scale xy_scale yx_scale y_scale x_offset y_offset]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// x-scale value.
    pub x_scale: f64,
    /// xy-scale value.
    pub xy_scale: f64,
    /// yx-scale value.
    pub yx_scale: f64,
    /// y-scale value.
    pub y_scale: f64,
    /// x-offset value.
    pub x_offset: f64,
    /// y-offset value.
    pub y_offset: f64,
}

impl AffineTransform {
    ///  [1 0 0 1 0 0]; the identity transformation.
    fn identity() -> Self {
        AffineTransform {
            x_scale: 1.0,
            xy_scale: 0.,
            yx_scale: 0.,
            y_scale: 1.0,
            x_offset: 0.,
            y_offset: 0.,
        }
    }

    /// Returns a transformation from the six matrix values, in the order
    /// they appear in a Glyphs component definition.
    pub fn new(
        x_scale: f64,
        xy_scale: f64,
        yx_scale: f64,
        y_scale: f64,
        x_offset: f64,
        y_offset: f64,
    ) -> Self {
        AffineTransform { x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset }
    }

    /// Returns a transformation that only translates by `(dx, dy)`.
    pub fn translate(dx: f64, dy: f64) -> Self {
        AffineTransform { x_offset: dx, y_offset: dy, ..Self::identity() }
    }

    /// Applies the transformation to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.x_scale * x + self.yx_scale * y + self.x_offset,
            self.xy_scale * x + self.y_scale * y + self.y_offset,
        )
    }
}

impl std::default::Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(feature = "kurbo")]
impl From<AffineTransform> for kurbo::Affine {
    fn from(src: AffineTransform) -> kurbo::Affine {
        kurbo::Affine::new([
            src.x_scale,
            src.xy_scale,
            src.yx_scale,
            src.y_scale,
            src.x_offset,
            src.y_offset,
        ])
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Affine> for AffineTransform {
    fn from(src: kurbo::Affine) -> AffineTransform {
        let coeffs = src.as_coeffs();
        AffineTransform {
            x_scale: coeffs[0],
            xy_scale: coeffs[1],
            yx_scale: coeffs[2],
            y_scale: coeffs[3],
            x_offset: coeffs[4],
            y_offset: coeffs[5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_default() {
        let transform = AffineTransform::default();
        assert_eq!(transform.x_scale, 1.0);
        assert_eq!(transform.apply(12.0, -7.5), (12.0, -7.5));
    }

    #[test]
    fn translation() {
        let transform = AffineTransform::translate(100.0, -50.0);
        assert_eq!(transform.apply(50.0, -50.0), (150.0, -100.0));
    }

    #[test]
    fn scale_and_offset() {
        let transform = AffineTransform::new(2.0, 0.0, 0.0, 0.5, 10.0, 20.0);
        assert_eq!(transform.apply(3.0, 4.0), (16.0, 22.0));
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_round_trip() {
        let transform = AffineTransform::new(1.0, 0.0, 0.0, 1.0, 5.0, 6.0);
        let affine: kurbo::Affine = transform.into();
        assert_eq!(AffineTransform::from(affine), transform);
    }
}
