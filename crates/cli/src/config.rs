//! JSON scene files.
//!
//! Every field is optional; omitted parts fall back to the demo setup
//! (small player at the origin, seeded obstacle field).
//!
//! ```json
//! {
//!   "seed": 7,
//!   "player": { "position": [-0.8, 0.0], "move_speed": 0.01 },
//!   "obstacles": [
//!     { "local": [[-1, -1], [1, -1], [0, 1]], "spin": 0.001 }
//!   ]
//! }
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tricollide::api::{
    draw_field, Body, FieldCfg, Motion, ObstacleCount, Rgb, Scene, Style, Triangle,
    MAX_HALF_EXTENT, PLAYER_LOCAL,
};
use tricollide::Vec2;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    pub seed: Option<u64>,
    #[serde(default)]
    pub player: BodyFile,
    /// Explicit obstacles; when absent a field is generated from `seed`.
    pub obstacles: Option<Vec<BodyFile>>,
    #[serde(default)]
    pub field: FieldFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyFile {
    pub local: Option<[[f64; 2]; 3]>,
    pub position: Option<[f64; 2]>,
    pub angle: Option<f64>,
    pub move_speed: Option<f64>,
    pub rotate_speed: Option<f64>,
    pub spin: Option<f64>,
    pub highlight: Option<[f64; 3]>,
    pub base: Option<[f64; 3]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldFile {
    pub count_min: Option<usize>,
    pub count_max: Option<usize>,
    pub half_extent: Option<f64>,
}

fn finite(name: &str, vals: &[f64]) -> Result<()> {
    if vals.iter().any(|v| !v.is_finite()) {
        bail!("{name}: values must be finite, got {vals:?}");
    }
    Ok(())
}

fn rgb(c: [f64; 3]) -> Rgb {
    Rgb::new(c[0], c[1], c[2])
}

impl BodyFile {
    fn into_body(self, name: &str, default_local: [Vec2<f64>; 3], default_style: Style) -> Result<Body> {
        let local = match self.local {
            Some(pts) => {
                finite(name, &pts.concat())?;
                pts.map(|[x, y]| Vec2::new(x, y))
            }
            None => default_local,
        };
        let position = self.position.unwrap_or([0.0, 0.0]);
        finite(name, &position)?;
        let angle = self.angle.unwrap_or(0.0);
        let defaults = Motion::default();
        let motion = Motion {
            move_speed: self.move_speed.unwrap_or(defaults.move_speed),
            rotate_speed: self.rotate_speed.unwrap_or(defaults.rotate_speed),
        };
        let spin = self.spin.unwrap_or(0.0);
        finite(name, &[angle, motion.move_speed, motion.rotate_speed, spin])?;
        let style = Style {
            highlight: self.highlight.map(rgb).unwrap_or(default_style.highlight),
            base: self.base.map(rgb).unwrap_or(default_style.base),
        };
        let triangle = Triangle::with_pose(local, Vec2::new(position[0], position[1]), angle);
        if triangle.double_area() == 0.0 {
            tracing::warn!(body = name, "degenerate triangle; containment never fires for it");
        }
        Ok(Body::new(triangle)
            .with_style(style)
            .with_motion(motion)
            .with_spin(spin))
    }
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Build the scene; `seed_override` wins over the file's seed.
    pub fn into_scene(self, seed_override: Option<u64>) -> Result<(Scene, u64)> {
        let seed = seed_override.or(self.seed).unwrap_or(0);
        let player = self
            .player
            .into_body("player", PLAYER_LOCAL, Style::default())?;
        let mut field = FieldCfg::default();
        let obstacles = match self.obstacles {
            Some(list) => list
                .into_iter()
                .enumerate()
                .map(|(i, b)| b.into_body(&format!("obstacles[{i}]"), field.local, field.style))
                .collect::<Result<Vec<_>>>()?,
            None => {
                let min = self.field.count_min.unwrap_or(4);
                let max = self.field.count_max.unwrap_or(8);
                if min > max {
                    bail!("field: count_min {min} exceeds count_max {max}");
                }
                field.count = ObstacleCount::Uniform { min, max };
                if let Some(h) = self.field.half_extent {
                    finite("field.half_extent", &[h])?;
                    if h.abs() > MAX_HALF_EXTENT {
                        bail!("field.half_extent {h} exceeds {MAX_HALF_EXTENT}");
                    }
                    field.half_extent = h;
                }
                draw_field(&field, seed)
            }
        };
        Ok((Scene::new(player, obstacles), seed))
    }
}
