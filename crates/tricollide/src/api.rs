//! Flat re-export surface for binaries and benches.
//!
//! Mirrors the module tree without the nesting; no items are defined here.

pub use crate::collide::{classify, triangles_collide, Contact};
pub use crate::geom2::{
    bounding_boxes_overlap, cross, double_area, point_inside, segment_intersection,
    segments_intersect, triangle_inside_other, Aabb2, SegmentHit, Triangle, Vec2Ext, Winding,
};
pub use crate::motion::{InputFlags, Motion};
pub use crate::scene::generate::{
    demo_scene, draw_field, FieldCfg, ObstacleCount, MAX_HALF_EXTENT, OBSTACLE_LOCAL,
    PLAYER_LOCAL,
};
pub use crate::scene::viewport::Viewport;
pub use crate::scene::{
    frame_capacity, Body, Frame, InputSource, NullSink, RecordingSink, RenderSink, Rgb, Scene,
    ScriptedInput, Style,
};
