//! JSON shapes written by `run` and printed by `check`.

use serde::Serialize;
use tricollide::api::{Contact, Frame, Triangle};

#[derive(Debug, Serialize)]
pub struct ContactJson {
    pub phase: &'static str,
    pub colliding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<[usize; 2]>,
}

impl From<Contact> for ContactJson {
    fn from(c: Contact) -> Self {
        let (phase, edges) = match c {
            Contact::Separated => ("separated", None),
            Contact::BoxesOnly => ("boxes_only", None),
            Contact::EdgeCrossing { a_edge, b_edge } => ("edge_crossing", Some([a_edge, b_edge])),
            Contact::Contained => ("contained", None),
        };
        Self {
            phase,
            colliding: c.is_colliding(),
            edges,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameRow {
    pub tick: u64,
    pub player_hit: bool,
    pub obstacle_hits: Vec<bool>,
    pub player: [[f64; 2]; 3],
}

impl FrameRow {
    pub fn new(frame: &Frame, player: &Triangle) -> Self {
        Self {
            tick: frame.tick,
            player_hit: frame.player_hit,
            obstacle_hits: frame.obstacle_hits().collect(),
            player: player.world_points().map(|p| [p.x, p.y]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub ticks: u64,
    pub obstacles: usize,
    pub hit_frames: usize,
    /// Ticks where the player's verdict flipped.
    pub transitions: Vec<u64>,
    pub frames: Vec<FrameRow>,
}

impl RunReport {
    pub fn new(seed: u64, obstacles: usize, frames: Vec<FrameRow>) -> Self {
        let mut transitions = Vec::new();
        let mut prev = false;
        for f in &frames {
            if f.player_hit != prev {
                transitions.push(f.tick);
                prev = f.player_hit;
            }
        }
        Self {
            seed,
            ticks: frames.len() as u64,
            obstacles,
            hit_frames: frames.iter().filter(|f| f.player_hit).count(),
            transitions,
            frames,
        }
    }
}
