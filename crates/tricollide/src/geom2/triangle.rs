//! Rigid triangle: fixed local points plus a mutable pose (position, angle).
//!
//! World-space vertices are derived on demand: rotate the local point by
//! `angle` about the local origin, then translate by `position`. No viewport
//! remap happens here; see `scene::viewport` for the display-only transform.

use nalgebra::{matrix, Matrix2, Vector2};

use super::vec2::cross;

/// Vertex ordering of a triangle, read off the sign of its double area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero area (collinear or coincident points).
    Degenerate,
}

impl Winding {
    /// `+1`, `-1` or `0`, for multiplying orientation determinants.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
            Winding::Degenerate => 0.0,
        }
    }
}

/// Triangle with local geometry fixed at construction.
///
/// Invariants
/// - `local` never changes after construction, so `double_area` stays valid.
/// - Rotation is a proper rotation, so the world-space winding equals the
///   local winding for every pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    local: [Vector2<f64>; 3],
    pub position: Vector2<f64>,
    /// Radians; unbounded (never wrapped into [0, 2π)).
    pub angle: f64,
    double_area: f64,
}

impl Triangle {
    /// Triangle at the origin with zero rotation.
    pub fn new(local: [Vector2<f64>; 3]) -> Self {
        Self::with_pose(local, Vector2::zeros(), 0.0)
    }

    pub fn with_pose(local: [Vector2<f64>; 3], position: Vector2<f64>, angle: f64) -> Self {
        let double_area = double_area(&local);
        Self {
            local,
            position,
            angle,
            double_area,
        }
    }

    #[inline]
    pub fn local_points(&self) -> &[Vector2<f64>; 3] {
        &self.local
    }

    /// Signed double area of the local triangle (positive for CCW).
    #[inline]
    pub fn double_area(&self) -> f64 {
        self.double_area
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        if self.double_area > 0.0 {
            Winding::CounterClockwise
        } else if self.double_area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    #[inline]
    fn rotation(&self) -> Matrix2<f64> {
        let (s, c) = self.angle.sin_cos();
        matrix![c, -s; s, c]
    }

    /// World-space vertex `index` (0, 1 or 2).
    ///
    /// Panics if `index > 2`.
    #[inline]
    pub fn world_point(&self, index: usize) -> Vector2<f64> {
        self.rotation() * self.local[index] + self.position
    }

    /// All three world-space vertices, sharing one rotation evaluation.
    pub fn world_points(&self) -> [Vector2<f64>; 3] {
        let r = self.rotation();
        self.local.map(|p| r * p + self.position)
    }

    /// World-space edges `(v_i, v_{(i+1) mod 3})`.
    pub fn edges(&self) -> [(Vector2<f64>, Vector2<f64>); 3] {
        let v = self.world_points();
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    }

    /// Shift the position by `dir`. No clamping.
    #[inline]
    pub fn translate(&mut self, dir: Vector2<f64>) {
        self.position += dir;
    }

    /// Add `delta` radians to the angle.
    #[inline]
    pub fn rotate(&mut self, delta: f64) {
        self.angle += delta;
    }
}

/// `(p1-p0) × (p2-p0)`.
#[inline]
pub fn double_area(p: &[Vector2<f64>; 3]) -> f64 {
    cross(p[1] - p[0], p[2] - p[0])
}
