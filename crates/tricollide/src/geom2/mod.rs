//! 2D triangle geometry and the collision predicates built on it.
//!
//! Purpose
//! - `Triangle`: fixed local points with a rigid pose; world vertices on demand.
//! - Broad phase: `Aabb2` / `bounding_boxes_overlap`.
//! - Narrow phase: `segments_intersect` on edges, `triangle_inside_other` for
//!   fully nested pairs.
//!
//! Conventions
//! - All predicates run in world space. Display remaps never enter here.
//! - Exact floating-point comparisons, no epsilons: touching counts as
//!   overlapping, exactly parallel edges never intersect.
//! - Code cross-refs: `crate::collide` composes these into a verdict.

mod bbox;
mod contain;
mod segment;
mod triangle;
mod vec2;

pub use bbox::{bounding_boxes_overlap, Aabb2};
pub use contain::{point_inside, triangle_inside_other};
pub use segment::{segment_intersection, segments_intersect, SegmentHit};
pub use triangle::{double_area, Triangle, Winding};
pub use vec2::{cross, Vec2Ext};
