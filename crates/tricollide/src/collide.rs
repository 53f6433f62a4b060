//! Triangle-pair collision verdict: broad phase, edge crossings, containment.
//!
//! Order of tests (first decisive one wins):
//! 1. Bounding boxes apart → separated.
//! 2. Any of the 3×3 cyclic edge pairs intersects → colliding.
//! 3. Smaller triangle's vertex strictly inside the larger → colliding.
//! 4. Otherwise separated (boxes overlapped, shapes missed).
//!
//! Limitations carried from the predicates: collinear overlapping edges are
//! not detected by step 2, and step 3 only covers full nesting.

use crate::geom2::{bounding_boxes_overlap, segments_intersect, triangle_inside_other, Triangle};

/// Which phase decided the verdict for a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Rejected by the broad phase.
    Separated,
    /// Boxes overlap but neither narrow-phase test fired.
    BoxesOnly,
    /// First intersecting edge pair in scan order; edge `i` runs from
    /// vertex `i` to vertex `(i+1) % 3`.
    EdgeCrossing { a_edge: usize, b_edge: usize },
    /// One triangle lies inside the other.
    Contained,
}

impl Contact {
    #[inline]
    pub fn is_colliding(self) -> bool {
        matches!(self, Contact::EdgeCrossing { .. } | Contact::Contained)
    }
}

/// Full classification of the pair `(a, b)`.
pub fn classify(a: &Triangle, b: &Triangle) -> Contact {
    if !bounding_boxes_overlap(a, b) {
        return Contact::Separated;
    }
    let ea = a.edges();
    let eb = b.edges();
    for (i, &(p1, p2)) in ea.iter().enumerate() {
        for (j, &(p3, p4)) in eb.iter().enumerate() {
            if segments_intersect(p1, p2, p3, p4) {
                return Contact::EdgeCrossing {
                    a_edge: i,
                    b_edge: j,
                };
            }
        }
    }
    if triangle_inside_other(a, b) {
        return Contact::Contained;
    }
    Contact::BoxesOnly
}

/// Do `a` and `b` overlap?
#[inline]
pub fn triangles_collide(a: &Triangle, b: &Triangle) -> bool {
    classify(a, b).is_colliding()
}
