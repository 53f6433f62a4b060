//! Full-containment test for triangles whose edges do not cross.
//!
//! Orientation determinants are multiplied by the winding sign of the
//! enclosing triangle, so either vertex order works. A degenerate enclosing
//! triangle contains nothing.
//!
//! `triangle_inside_other` is a heuristic: it tests one vertex of the
//! smaller triangle (by `|double_area|`) against the larger one. It detects
//! full containment of the smaller triangle, nothing more.

use nalgebra::Vector2;

use super::{
    triangle::{Triangle, Winding},
    vec2::cross,
};

/// Strict interior test of `p` against triangle `q` with the given winding.
/// Points on an edge are outside.
pub fn point_inside(p: Vector2<f64>, q: &[Vector2<f64>; 3], winding: Winding) -> bool {
    let s = winding.sign();
    if s == 0.0 {
        return false;
    }
    let d1 = cross(q[1] - q[0], p - q[0]) * s;
    let d2 = cross(q[2] - q[1], p - q[1]) * s;
    let d3 = cross(q[0] - q[2], p - q[2]) * s;
    d1 > 0.0 && d2 > 0.0 && d3 > 0.0
}

/// Is vertex 0 of the smaller triangle strictly inside the larger one?
/// Equal magnitudes test `a` against `b`.
pub fn triangle_inside_other(a: &Triangle, b: &Triangle) -> bool {
    let (inner, outer) = if a.double_area().abs() <= b.double_area().abs() {
        (a, b)
    } else {
        (b, a)
    };
    point_inside(
        inner.world_point(0),
        &outer.world_points(),
        outer.winding(),
    )
}
