//! Parametric line-segment intersection.
//!
//! For segments `p1→p2` and `p3→p4`:
//! `denom = (p4.y-p3.y)(p2.x-p1.x) - (p4.x-p3.x)(p2.y-p1.y)`,
//! `ua = ((p4.x-p3.x)(p1.y-p3.y) - (p4.y-p3.y)(p1.x-p3.x)) / denom`,
//! `ub = ((p2.x-p1.x)(p1.y-p3.y) - (p2.y-p1.y)(p1.x-p3.x)) / denom`.
//! The segments meet iff `denom != 0` and `ua, ub ∈ [0, 1]`.
//!
//! Known limitation: `denom == 0` (parallel, including collinear overlap)
//! always reports no intersection. Exact zero only; no epsilon.

use nalgebra::Vector2;

/// Where two segments cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    /// Parameter along `p1→p2`.
    pub ua: f64,
    /// Parameter along `p3→p4`.
    pub ub: f64,
    pub point: Vector2<f64>,
}

/// Intersection of the closed segments `p1p2` and `p3p4`, if any.
pub fn segment_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> Option<SegmentHit> {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return None;
    }
    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(SegmentHit {
            ua,
            ub,
            point: p1 + (p2 - p1) * ua,
        })
    } else {
        None
    }
}

/// Endpoint contact counts as intersecting.
#[inline]
pub fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> bool {
    segment_intersection(p1, p2, p3, p4).is_some()
}
