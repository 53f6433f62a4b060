//! Triangle-vs-triangle overlap detection for a small frame-stepped 2D scene.
//!
//! Layers
//! - `geom2`: triangles with rigid poses, bounding boxes, segment and
//!   containment predicates.
//! - `collide`: composes the predicates into a per-pair verdict.
//! - `motion`: input flags and per-shape speeds.
//! - `scene`: tick loop over a player and obstacles, render/input seams,
//!   seeded demo setup, display remap.
//!
//! Everything is single-threaded and allocation-light; a tick is a pure
//! function of the previous poses and the input read for that tick.

pub mod api;
pub mod collide;
pub mod geom2;
pub mod motion;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collide::{classify, triangles_collide, Contact};
    pub use crate::geom2::{bounding_boxes_overlap, Aabb2, Triangle, Vec2Ext, Winding};
    pub use crate::motion::{InputFlags, Motion};
    pub use crate::scene::{
        generate::demo_scene, viewport::Viewport, Body, Frame, InputSource, RenderSink, Rgb,
        Scene, ScriptedInput, Style,
    };
    pub use nalgebra::Vector2 as Vec2;
}
