mod config;
mod input;
mod provenance;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tricollide::api::{
    bounding_boxes_overlap, classify, frame_capacity, InputFlags, NullSink, ScriptedInput,
    Triangle,
};
use tricollide::Vec2;

use config::SceneFile;
use provenance::Payload;
use report::{ContactJson, FrameRow, RunReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangle collision scenes: simulate, check pairs, report")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Simulate a scene and write per-tick verdicts as JSON
    Run {
        #[arg(long, default_value_t = 1000)]
        ticks: u64,
        /// Obstacle field seed (overrides the scene file)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON scene file; defaults to the demo setup
        #[arg(long)]
        scene: Option<PathBuf>,
        /// CSV of per-tick controls; the player idles once it runs out
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Classify one triangle pair, e.g. --a "-1,-1 1,-1 0,1" --b "0,0 0.1,0 0,0.1@0.5,0,1.2"
    Check {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            ticks,
            seed,
            scene,
            input,
            out,
        } => run(ticks, seed, scene.as_deref(), input.as_deref(), &out),
        Action::Check { a, b } => check(&a, &b),
        Action::Report => report(),
    }
}

fn run(
    ticks: u64,
    seed: Option<u64>,
    scene_path: Option<&Path>,
    input_path: Option<&Path>,
    out: &Path,
) -> Result<()> {
    tracing::info!(ticks, seed = ?seed, scene = ?scene_path, input = ?input_path, out = %out.display(), "run");
    let file = match scene_path {
        Some(p) => SceneFile::load(p)?,
        None => SceneFile::default(),
    };
    let (mut scene, seed) = file.into_scene(seed)?;
    let frames: Vec<InputFlags> = match input_path {
        Some(p) => input::read_input_csv(p)?,
        None => Vec::new(),
    };
    let mut source = ScriptedInput::new(frames);

    let mut rows = Vec::with_capacity(frame_capacity(ticks));
    for _ in 0..ticks {
        let frame = scene.step(&mut source);
        scene.render(&frame, &mut NullSink);
        rows.push(FrameRow::new(&frame, &scene.player.triangle));
    }
    let report = RunReport::new(seed, scene.obstacles.len(), rows);
    tracing::info!(
        seed,
        obstacles = report.obstacles,
        hit_frames = report.hit_frames,
        transitions = report.transitions.len(),
        "run_done"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload {
        command: "run",
        params: serde_json::json!({
            "ticks": ticks,
            "seed": seed,
            "scene": scene_path.map(|p| p.display().to_string()),
            "input": input_path.map(|p| p.display().to_string()),
        }),
    };
    provenance::write_sidecar(out, &payload)?;
    Ok(())
}

/// `"x,y x,y x,y"` with an optional `"@px,py"` or `"@px,py,angle"` pose.
fn parse_triangle(s: &str) -> Result<Triangle> {
    let (pts, pose) = match s.split_once('@') {
        Some((p, q)) => (p, Some(q)),
        None => (s, None),
    };
    let nums = |part: &str| -> Result<Vec<f64>> {
        part.split(',')
            .map(|t| {
                t.trim()
                    .parse::<f64>()
                    .with_context(|| format!("bad number {t:?} in {s:?}"))
            })
            .collect()
    };
    let mut local = [Vec2::zeros(); 3];
    let parts: Vec<&str> = pts.split_whitespace().collect();
    if parts.len() != 3 {
        bail!("expected three points in {s:?}, got {}", parts.len());
    }
    for (slot, part) in local.iter_mut().zip(&parts) {
        match nums(part)?[..] {
            [x, y] => *slot = Vec2::new(x, y),
            _ => bail!("point {part:?} in {s:?} must be x,y"),
        }
    }
    let (position, angle) = match pose.map(nums).transpose()?.as_deref() {
        None => (Vec2::zeros(), 0.0),
        Some([x, y]) => (Vec2::new(*x, *y), 0.0),
        Some([x, y, a]) => (Vec2::new(*x, *y), *a),
        Some(_) => bail!("pose in {s:?} must be px,py or px,py,angle"),
    };
    Ok(Triangle::with_pose(local, position, angle))
}

fn check(a: &str, b: &str) -> Result<()> {
    let ta = parse_triangle(a)?;
    let tb = parse_triangle(b)?;
    let contact = classify(&ta, &tb);
    tracing::info!(?contact, "check");
    let out = serde_json::json!({
        "contact": ContactJson::from(contact),
        "boxes_overlap": bounding_boxes_overlap(&ta, &tb),
        "double_area": [ta.double_area(), tb.double_area()],
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(
        &Payload {
            command: "report",
            params: serde_json::json!({}),
        },
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_triangle_with_and_without_pose() {
        let t = parse_triangle("-1,-1 1,-1 0,1").unwrap();
        assert_eq!(t.double_area(), 4.0);
        assert_eq!(t.position, Vec2::zeros());
        let u = parse_triangle("0,0 0.1,0 0,0.1@0.5,-0.25,1.5").unwrap();
        assert_eq!(u.position, Vec2::new(0.5, -0.25));
        assert_eq!(u.angle, 1.5);
        assert!(parse_triangle("0,0 1,0").is_err());
        assert!(parse_triangle("0,0 1,0 0,x").is_err());
        assert!(parse_triangle("0,0 1,0 0,1@1").is_err());
    }

    #[test]
    fn run_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("in.csv");
        std::fs::write(&csv, "right\n1\n1\n1\n").unwrap();
        let out = dir.path().join("runs").join("demo.json");
        run(10, Some(4), None, Some(csv.as_path()), &out).unwrap();
        let v: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["ticks"], 10);
        assert_eq!(v["seed"], 4);
        assert_eq!(v["frames"].as_array().map(Vec::len), Some(10));
        assert!(dir.path().join("runs").join("demo.provenance.json").exists());
    }
}
