//! In-place helpers on `Vector2<f64>` that nalgebra does not name directly.
//!
//! Arithmetic (`+`, `-`, `*`, `+=`), `norm()` and value semantics come from
//! nalgebra. This trait only adds the bounding folds, the two-scalar scale
//! and the unguarded normalisation. The 2D determinant is the free `cross`,
//! since nalgebra's own `Matrix::cross` (3D) shadows any trait method of
//! that name.

use nalgebra::Vector2;

/// Extension operations on 2D vectors.
pub trait Vec2Ext {
    /// Scale each component by its own factor, in place.
    fn scale_xy(&mut self, sx: f64, sy: f64);
    /// Divide by the magnitude, in place.
    ///
    /// Not guarded: a zero vector yields non-finite components. Callers check
    /// for the zero direction themselves.
    fn normalise(&mut self);
    /// Component-wise min with `other`, in place.
    fn lower_left(&mut self, other: Vector2<f64>);
    /// Component-wise max with `other`, in place.
    fn upper_right(&mut self, other: Vector2<f64>);
}

impl Vec2Ext for Vector2<f64> {
    #[inline]
    fn scale_xy(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
    }

    #[inline]
    fn normalise(&mut self) {
        let mag = self.norm();
        self.x /= mag;
        self.y /= mag;
    }

    #[inline]
    fn lower_left(&mut self, other: Vector2<f64>) {
        self.x = self.x.min(other.x);
        self.y = self.y.min(other.y);
    }

    #[inline]
    fn upper_right(&mut self, other: Vector2<f64>) {
        self.x = self.x.max(other.x);
        self.y = self.y.max(other.y);
    }
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
