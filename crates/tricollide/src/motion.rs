//! Directional input and per-shape speeds.

use nalgebra::Vector2;

use crate::geom2::{Triangle, Vec2Ext};

/// One tick's worth of held controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl InputFlags {
    /// Unnormalised direction: each axis in {-1, 0, 1}. Opposite flags cancel.
    pub fn direction(&self) -> Vector2<f64> {
        let axis = |neg: bool, pos: bool| f64::from(u8::from(pos)) - f64::from(u8::from(neg));
        Vector2::new(axis(self.left, self.right), axis(self.down, self.up))
    }

    /// Net rotation sign: +1 counter-clockwise, -1 clockwise, 0 otherwise.
    pub fn turn(&self) -> f64 {
        f64::from(u8::from(self.rotate_left)) - f64::from(u8::from(self.rotate_right))
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-tick step sizes for a controllable shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Distance per tick along the normalised input direction.
    pub move_speed: f64,
    /// Radians per tick.
    pub rotate_speed: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: 0.0005,
            rotate_speed: 0.001,
        }
    }
}

impl Motion {
    /// Move and rotate `tri` according to `flags`.
    ///
    /// A zero direction (nothing held, or opposite keys held together) skips
    /// translation; it is never normalised.
    pub fn apply(&self, tri: &mut Triangle, flags: InputFlags) {
        let mut dir = flags.direction();
        if dir != Vector2::zeros() {
            dir.normalise();
            tri.translate(dir * self.move_speed);
        }
        let turn = flags.turn();
        if turn != 0.0 {
            tri.rotate(turn * self.rotate_speed);
        }
    }
}
