use crate::foundation::error::{StrokeError, StrokeResult};

pub use kurbo::{Affine, Point, Vec2};

/// Height of the square coordinate frame used by hanzi stroke data.
pub const FRAME_HEIGHT: f64 = 900.0;

/// Axis-aligned affine transform (scale + translate, no shear or rotation).
///
/// The linear part is always diagonal, so `H`/`V` commands and arcs map onto
/// commands of the same kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransform {
    affine: Affine,
}

impl FrameTransform {
    /// Build from axis scales and a translation, applied as `scale * (p + translate)`.
    ///
    /// This is the composition order of an SVG transform list
    /// `scale(sx, sy) translate(tx, ty)`.
    pub fn new(sx: f64, sy: f64, tx: f64, ty: f64) -> StrokeResult<Self> {
        if ![sx, sy, tx, ty].iter().all(|v| v.is_finite()) {
            return Err(StrokeError::validation(
                "frame transform components must be finite",
            ));
        }
        if sx == 0.0 || sy == 0.0 {
            return Err(StrokeError::validation(
                "frame transform scales must be non-zero",
            ));
        }
        let affine = Affine::scale_non_uniform(sx, sy) * Affine::translate(Vec2::new(tx, ty));
        Ok(Self { affine })
    }

    /// `scaleY(-1) translateY(-height)`: mirrors across the x axis and shifts the
    /// mirrored outline back into a `height`-tall frame, i.e. `(x, y) -> (x, height - y)`.
    pub fn flip_y(height: f64) -> StrokeResult<Self> {
        Self::new(1.0, -1.0, 0.0, -height)
    }

    /// The transform expected by the stroke renderer (900-unit frame).
    pub fn renderer() -> Self {
        Self {
            affine: Affine::FLIP_Y * Affine::translate(Vec2::new(0.0, -FRAME_HEIGHT)),
        }
    }

    /// Horizontal scale factor.
    pub fn sx(&self) -> f64 {
        self.affine.as_coeffs()[0]
    }

    /// Vertical scale factor.
    pub fn sy(&self) -> f64 {
        self.affine.as_coeffs()[3]
    }

    /// True when the transform mirrors the plane (negative determinant).
    pub fn is_reflection(&self) -> bool {
        self.affine.determinant() < 0.0
    }

    /// Map an absolute point.
    #[inline]
    pub fn point(&self, p: Point) -> Point {
        self.affine * p
    }

    /// Map a relative displacement (linear part only).
    #[inline]
    pub fn vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.sx() * v.x, self.sy() * v.y)
    }

    /// Map an absolute x coordinate.
    #[inline]
    pub fn x(&self, x: f64) -> f64 {
        self.point(Point::new(x, 0.0)).x
    }

    /// Map an absolute y coordinate.
    #[inline]
    pub fn y(&self, y: f64) -> f64 {
        self.point(Point::new(0.0, y)).y
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::renderer()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
