//! Sweep the player across a seeded demo field and print contacts.
//!
//! Usage:
//!   cargo run -p tricollide --example sweep -- [seed]
//!
//! Prints one line per tick where the player's verdict changes, with the
//! player's first vertex in 640×480 screen coordinates.

use tricollide::prelude::*;

struct ScreenSink {
    viewport: Viewport,
    last_player: Option<[Vec2<f64>; 3]>,
}

impl RenderSink for ScreenSink {
    fn draw(&mut self, points: [Vec2<f64>; 3], _color: Rgb) {
        self.last_player = Some(self.viewport.triangle_to_screen(points));
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let mut scene = demo_scene(seed);
    scene.player.triangle.translate(Vec2::new(-1.0, 0.0));
    scene.player.motion.move_speed = 0.01;
    let mut input = ScriptedInput::new(vec![
        InputFlags {
            right: true,
            ..Default::default()
        };
        200
    ]);
    let mut sink = ScreenSink {
        viewport: Viewport::default(),
        last_player: None,
    };
    let mut was_hit = false;
    for _ in 0..200 {
        let frame = scene.step(&mut input);
        scene.render(&frame, &mut sink);
        if frame.player_hit != was_hit {
            let p = sink.last_player.map(|v| v[0]).unwrap_or_else(Vec2::zeros);
            println!(
                "tick {:>3}: hit={} obstacles_hit={} screen=({:.1}, {:.1})",
                frame.tick,
                frame.player_hit,
                frame.hit_count(),
                p.x,
                p.y
            );
            was_hit = frame.player_hit;
        }
    }
}
