//! Seeded obstacle fields and the default demo scene.
//!
//! Model
//! - Draw an obstacle count, then for each obstacle a position uniform in the
//!   configured square and a whole-number angle in `[0, angle_max)` radians.
//! - All obstacles share one local triangle; the player uses a small one.
//! - Determinism: the seed is mixed into a single `StdRng`, so the same seed
//!   reproduces the same field.

use nalgebra::{vector, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Body, Rgb, Scene, Style};
use crate::geom2::Triangle;

/// Local points of the player triangle in the demo.
pub const PLAYER_LOCAL: [Vector2<f64>; 3] = [
    Vector2::new(-0.05, -0.05),
    Vector2::new(0.05, -0.05),
    Vector2::new(0.0, 0.05),
];

/// Local points shared by generated obstacles.
pub const OBSTACLE_LOCAL: [Vector2<f64>; 3] = [
    Vector2::new(-0.1, -0.2),
    Vector2::new(0.3, -0.4),
    Vector2::new(0.0, 0.5),
];

/// Largest usable `half_extent`; wider squares would overflow the sampler's
/// range width. `draw_field` clamps to it.
pub const MAX_HALF_EXTENT: f64 = 1e300;

/// Obstacle count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl ObstacleCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ObstacleCount::Fixed(n) => n,
            ObstacleCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Obstacle field configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCfg {
    pub count: ObstacleCount,
    pub local: [Vector2<f64>; 3],
    /// Positions are drawn from `[-half_extent, half_extent]²`. Clamped to
    /// `MAX_HALF_EXTENT`; NaN reads as zero.
    pub half_extent: f64,
    /// Angles are whole radians in `0..angle_max`.
    pub angle_max: u32,
    pub style: Style,
    /// Per-tick spins assigned to the first obstacles, in order.
    pub spins: [f64; 2],
}

impl Default for FieldCfg {
    fn default() -> Self {
        Self {
            count: ObstacleCount::Uniform { min: 4, max: 8 },
            local: OBSTACLE_LOCAL,
            half_extent: 1.0,
            angle_max: 180,
            style: Style {
                highlight: Rgb::RED,
                base: Rgb::GREEN,
            },
            spins: [0.001, -0.002],
        }
    }
}

#[inline]
fn seeded_rng(seed: u64) -> StdRng {
    // SplitMix64 finaliser so nearby seeds give unrelated streams.
    let mut x = seed.wrapping_add(0x9e3779b97f4a7c15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    StdRng::seed_from_u64(x ^ (x >> 31))
}

/// Draw the obstacle bodies for `cfg`.
pub fn draw_field(cfg: &FieldCfg, seed: u64) -> Vec<Body> {
    let mut rng = seeded_rng(seed);
    let n = cfg.count.sample(&mut rng);
    let h = cfg.half_extent.abs();
    let h = if h.is_nan() { 0.0 } else { h.min(MAX_HALF_EXTENT) };
    let coord = |rng: &mut StdRng| {
        if h > 0.0 {
            rng.gen_range(-h..=h)
        } else {
            0.0
        }
    };
    let bodies: Vec<Body> = (0..n)
        .map(|i| {
            let position = vector![coord(&mut rng), coord(&mut rng)];
            let angle = if cfg.angle_max > 0 {
                f64::from(rng.gen_range(0..cfg.angle_max))
            } else {
                0.0
            };
            let spin = cfg.spins.get(i).copied().unwrap_or(0.0);
            Body::new(Triangle::with_pose(cfg.local, position, angle))
                .with_style(cfg.style)
                .with_spin(spin)
        })
        .collect();
    tracing::debug!(seed, obstacles = bodies.len(), "draw_field");
    bodies
}

/// Player at the origin plus a default field.
pub fn demo_scene(seed: u64) -> Scene {
    Scene::new(
        Body::new(Triangle::new(PLAYER_LOCAL)),
        draw_field(&FieldCfg::default(), seed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let cfg = FieldCfg::default();
        assert_eq!(draw_field(&cfg, 7), draw_field(&cfg, 7));
    }

    #[test]
    fn field_respects_bounds() {
        let cfg = FieldCfg::default();
        for seed in 0..32 {
            let field = draw_field(&cfg, seed);
            assert!((4..=8).contains(&field.len()));
            for b in &field {
                let p = b.triangle.position;
                assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0);
                assert_eq!(b.triangle.angle.fract(), 0.0);
                assert!(b.triangle.angle < 180.0);
            }
            assert_eq!(field[0].spin, 0.001);
            assert_eq!(field[1].spin, -0.002);
            assert!(field[2..].iter().all(|b| b.spin == 0.0));
        }
    }

    #[test]
    fn fixed_count_and_degenerate_ranges() {
        let cfg = FieldCfg {
            count: ObstacleCount::Fixed(3),
            half_extent: 0.0,
            angle_max: 0,
            ..FieldCfg::default()
        };
        let field = draw_field(&cfg, 1);
        assert_eq!(field.len(), 3);
        assert!(field
            .iter()
            .all(|b| b.triangle.position == Vector2::zeros() && b.triangle.angle == 0.0));
    }

    #[test]
    fn huge_half_extent_is_clamped() {
        for half_extent in [1e308, f64::INFINITY, f64::NAN] {
            let cfg = FieldCfg {
                count: ObstacleCount::Fixed(4),
                half_extent,
                ..FieldCfg::default()
            };
            let field = draw_field(&cfg, 9);
            assert_eq!(field.len(), 4);
            for b in &field {
                let p = b.triangle.position;
                assert!(p.x.abs() <= MAX_HALF_EXTENT && p.y.abs() <= MAX_HALF_EXTENT);
            }
        }
    }

    #[test]
    fn demo_player_starts_at_origin() {
        let s = demo_scene(3);
        assert_eq!(s.player.triangle.position, Vector2::zeros());
        assert_eq!(s.player.style, Style::default());
        assert_eq!(s.tick(), 0);
    }
}
