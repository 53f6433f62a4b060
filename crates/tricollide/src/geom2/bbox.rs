//! Axis-aligned bounding boxes for the broad phase.

use nalgebra::Vector2;

use super::{triangle::Triangle, vec2::Vec2Ext};

/// Closed axis-aligned box `[lo.x, hi.x] × [lo.y, hi.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub lo: Vector2<f64>,
    pub hi: Vector2<f64>,
}

impl Aabb2 {
    /// Fold three points into a box, starting from the first.
    pub fn from_points(points: &[Vector2<f64>; 3]) -> Self {
        let mut lo = points[0];
        let mut hi = points[0];
        for p in &points[1..] {
            lo.lower_left(*p);
            hi.upper_right(*p);
        }
        Self { lo, hi }
    }

    /// World-space box of a triangle at its current pose.
    #[inline]
    pub fn of_triangle(t: &Triangle) -> Self {
        Self::from_points(&t.world_points())
    }

    /// Boxes overlap unless one lies strictly beyond the other on some axis.
    /// Touching boxes overlap.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        if self.lo.x > other.hi.x {
            return false;
        }
        if self.hi.x < other.lo.x {
            return false;
        }
        if self.lo.y > other.hi.y {
            return false;
        }
        if self.hi.y < other.lo.y {
            return false;
        }
        true
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.lo.x && p.x <= self.hi.x && p.y >= self.lo.y && p.y <= self.hi.y
    }
}

/// Broad-phase filter. A `false` is a proof of separation; a `true` proves
/// nothing.
#[inline]
pub fn bounding_boxes_overlap(a: &Triangle, b: &Triangle) -> bool {
    Aabb2::of_triangle(a).overlaps(&Aabb2::of_triangle(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn fold_covers_all_points() {
        let pts = [vector![0.5, -1.0], vector![-2.0, 3.0], vector![1.0, 0.0]];
        let b = Aabb2::from_points(&pts);
        assert_eq!(b.lo, vector![-2.0, -1.0]);
        assert_eq!(b.hi, vector![1.0, 3.0]);
        assert!(pts.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn each_axis_rejects_independently() {
        let unit = Aabb2 {
            lo: vector![0.0, 0.0],
            hi: vector![1.0, 1.0],
        };
        let shifted = |dx: f64, dy: f64| Aabb2 {
            lo: unit.lo + vector![dx, dy],
            hi: unit.hi + vector![dx, dy],
        };
        assert!(!unit.overlaps(&shifted(1.5, 0.0)));
        assert!(!unit.overlaps(&shifted(-1.5, 0.0)));
        assert!(!unit.overlaps(&shifted(0.0, 1.5)));
        assert!(!unit.overlaps(&shifted(0.0, -1.5)));
        // Diagonal overlap on both axes.
        assert!(unit.overlaps(&shifted(0.5, 0.5)));
        // Shared edge counts.
        assert!(unit.overlaps(&shifted(1.0, 0.0)));
    }
}
