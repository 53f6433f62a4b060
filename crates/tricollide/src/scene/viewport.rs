//! Display-space remap for render sinks.
//!
//! Maps the nominal play area `[-1, 1]²` onto `[0, width] × [0, height]`.
//! The scale is non-uniform for non-square windows, so nothing in the
//! collision path may consume these coordinates.

use nalgebra::Vector2;

use crate::geom2::Vec2Ext;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

impl Viewport {
    /// `(p + (1, 1)) * (width / 2, height / 2)`.
    #[inline]
    pub fn to_screen(&self, p: Vector2<f64>) -> Vector2<f64> {
        let mut s = p + Vector2::new(1.0, 1.0);
        s.scale_xy(self.width * 0.5, self.height * 0.5);
        s
    }

    pub fn triangle_to_screen(&self, points: [Vector2<f64>; 3]) -> [Vector2<f64>; 3] {
        points.map(|p| self.to_screen(p))
    }
}
