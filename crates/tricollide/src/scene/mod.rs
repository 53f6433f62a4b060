//! Frame-stepped world: one controllable player, a set of obstacles.
//!
//! Tick order: read input once → move the player → spin obstacles →
//! evaluate every obstacle against the updated player → hand the fresh
//! `Frame` to rendering. Verdicts are never stored on the bodies; each tick
//! produces a new `Frame`.
//!
//! Collaborators are traits: `InputSource` supplies flags, `RenderSink`
//! receives world-space vertices and a color.

pub mod generate;
pub mod viewport;

use nalgebra::Vector2;

use crate::collide::{classify, Contact};
use crate::geom2::Triangle;
use crate::motion::{InputFlags, Motion};

/// Linear RGB in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Colors for the two verdicts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub highlight: Rgb,
    pub base: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            highlight: Rgb::RED,
            base: Rgb::WHITE,
        }
    }
}

impl Style {
    #[inline]
    pub fn pick(&self, colliding: bool) -> Rgb {
        if colliding {
            self.highlight
        } else {
            self.base
        }
    }
}

/// A triangle plus everything the loop needs to drive and draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub triangle: Triangle,
    pub style: Style,
    pub motion: Motion,
    /// Constant rotation applied every tick (radians).
    pub spin: f64,
}

impl Body {
    pub fn new(triangle: Triangle) -> Self {
        Self {
            triangle,
            style: Style::default(),
            motion: Motion::default(),
            spin: 0.0,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }
}

/// Source of one `InputFlags` read per tick.
pub trait InputSource {
    fn read(&mut self) -> InputFlags;
}

/// Sink for one draw call per body per tick.
pub trait RenderSink {
    fn draw(&mut self, points: [Vector2<f64>; 3], color: Rgb);
}

/// Replays recorded flags, then idles.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFlags>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFlags>) -> Self {
        Self { frames, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.next)
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self) -> InputFlags {
        let flags = self.frames.get(self.next).copied().unwrap_or_default();
        self.next = self.next.saturating_add(1);
        flags
    }
}

/// Discards every draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _points: [Vector2<f64>; 3], _color: Rgb) {}
}

/// Keeps every draw call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<([Vector2<f64>; 3], Rgb)>,
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, points: [Vector2<f64>; 3], color: Rgb) {
        self.calls.push((points, color));
    }
}

/// Upfront reservation for `ticks` per-tick records. Capped; longer runs
/// grow the buffer as they go.
#[inline]
pub fn frame_capacity(ticks: u64) -> usize {
    usize::try_from(ticks).map_or(MAX_RESERVED_FRAMES, |n| n.min(MAX_RESERVED_FRAMES))
}

const MAX_RESERVED_FRAMES: usize = 1 << 16;

/// Collision outcome of one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick: u64,
    /// True if any obstacle touches the player.
    pub player_hit: bool,
    /// One entry per obstacle, in scene order.
    pub contacts: Vec<Contact>,
}

impl Frame {
    pub fn obstacle_hits(&self) -> impl Iterator<Item = bool> + '_ {
        self.contacts.iter().map(|c| c.is_colliding())
    }

    pub fn hit_count(&self) -> usize {
        self.obstacle_hits().filter(|&h| h).count()
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub player: Body,
    pub obstacles: Vec<Body>,
    tick: u64,
}

impl Scene {
    pub fn new(player: Body, obstacles: Vec<Body>) -> Self {
        Self {
            player,
            obstacles,
            tick: 0,
        }
    }

    /// Number of completed ticks.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one tick and report the verdicts.
    pub fn step<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Frame {
        let flags = input.read();
        let player = &mut self.player;
        player.motion.apply(&mut player.triangle, flags);
        for ob in &mut self.obstacles {
            if ob.spin != 0.0 {
                ob.triangle.rotate(ob.spin);
            }
        }
        let contacts: Vec<Contact> = self
            .obstacles
            .iter()
            .map(|ob| classify(&self.player.triangle, &ob.triangle))
            .collect();
        let player_hit = contacts.iter().any(|c| c.is_colliding());
        self.tick += 1;
        let frame = Frame {
            tick: self.tick,
            player_hit,
            contacts,
        };
        tracing::trace!(
            tick = frame.tick,
            idle = flags.is_idle(),
            hits = frame.hit_count(),
            "scene_step"
        );
        frame
    }

    /// Draw obstacles in order, then the player, colored by `frame`.
    pub fn render<S: RenderSink + ?Sized>(&self, frame: &Frame, sink: &mut S) {
        for (ob, hit) in self.obstacles.iter().zip(frame.obstacle_hits()) {
            sink.draw(ob.triangle.world_points(), ob.style.pick(hit));
        }
        sink.draw(
            self.player.triangle.world_points(),
            self.player.style.pick(frame.player_hit),
        );
    }

    /// Step and render `ticks` times; returns every frame.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S, ticks: u64) -> Vec<Frame>
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let mut frames = Vec::with_capacity(frame_capacity(ticks));
        for _ in 0..ticks {
            let frame = self.step(input);
            self.render(&frame, sink);
            frames.push(frame);
        }
        tracing::debug!(
            ticks,
            obstacles = self.obstacles.len(),
            hit_frames = frames.iter().filter(|f| f.player_hit).count(),
            "scene_run"
        );
        frames
    }
}

#[cfg(test)]
mod tests;
