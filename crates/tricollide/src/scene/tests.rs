use super::generate::PLAYER_LOCAL;
use super::*;
use nalgebra::vector;

fn right() -> InputFlags {
    InputFlags {
        right: true,
        ..Default::default()
    }
}

fn left() -> InputFlags {
    InputFlags {
        left: true,
        ..Default::default()
    }
}

fn one_on_one() -> Scene {
    let player = Body::new(Triangle::with_pose(PLAYER_LOCAL, vector![-0.3, 0.0], 0.0)).with_motion(
        Motion {
            move_speed: 0.3,
            rotate_speed: 0.0,
        },
    );
    let obstacle = Body::new(Triangle::new(PLAYER_LOCAL)).with_style(Style {
        highlight: Rgb::RED,
        base: Rgb::GREEN,
    });
    Scene::new(player, vec![obstacle])
}

#[test]
fn collision_uses_updated_player_pose() {
    let mut scene = one_on_one();
    let mut input = ScriptedInput::new(vec![right(), left()]);
    let f1 = scene.step(&mut input);
    assert_eq!(f1.tick, 1);
    assert!(f1.player_hit);
    assert_eq!(f1.obstacle_hits().collect::<Vec<_>>(), vec![true]);
    let f2 = scene.step(&mut input);
    assert!(!f2.player_hit);
    assert_eq!(f2.contacts, vec![Contact::Separated]);
    assert_eq!(scene.tick(), 2);
}

#[test]
fn scripted_input_idles_when_exhausted() {
    let mut input = ScriptedInput::new(vec![right()]);
    assert_eq!(input.remaining(), 1);
    assert_eq!(input.read(), right());
    assert_eq!(input.remaining(), 0);
    assert!(input.read().is_idle());
    assert!(input.read().is_idle());
}

#[test]
fn render_colors_follow_frame() {
    let mut scene = one_on_one();
    let mut sink = RecordingSink::default();
    let frames = scene.run(&mut ScriptedInput::new(vec![right(), left()]), &mut sink, 2);
    assert_eq!(frames.len(), 2);
    assert_eq!(sink.calls.len(), 4);
    // Obstacle first, player last.
    assert_eq!(sink.calls[0].1, Rgb::RED);
    assert_eq!(sink.calls[1].1, Rgb::RED);
    assert_eq!(sink.calls[2].1, Rgb::GREEN);
    assert_eq!(sink.calls[3].1, Rgb::WHITE);
    assert_eq!(sink.calls[3].0, scene.player.triangle.world_points());
}

#[test]
fn obstacles_spin_each_tick() {
    let player = Body::new(Triangle::with_pose(PLAYER_LOCAL, vector![5.0, 5.0], 0.0));
    let spinner = Body::new(Triangle::new(PLAYER_LOCAL)).with_spin(0.25);
    let still = Body::new(Triangle::with_pose(PLAYER_LOCAL, vector![1.0, 0.0], 0.5));
    let mut scene = Scene::new(player, vec![spinner, still]);
    let frames = scene.run(&mut ScriptedInput::default(), &mut NullSink, 4);
    assert!(frames.iter().all(|f| !f.player_hit && f.hit_count() == 0));
    assert!((scene.obstacles[0].triangle.angle - 1.0).abs() < 1e-12);
    assert_eq!(scene.obstacles[1].triangle.angle, 0.5);
}

#[test]
fn player_hit_is_any_obstacle() {
    let player = Body::new(Triangle::new(PLAYER_LOCAL));
    let far = Body::new(Triangle::with_pose(PLAYER_LOCAL, vector![10.0, 10.0], 0.0));
    let big = Body::new(Triangle::new([
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![0.0, 1.0],
    ]));
    let mut scene = Scene::new(player, vec![far, big]);
    let f = scene.step(&mut ScriptedInput::default());
    assert!(f.player_hit);
    assert_eq!(f.contacts, vec![Contact::Separated, Contact::Contained]);
    assert_eq!(f.hit_count(), 1);
}

#[test]
fn demo_scene_runs_deterministically() {
    let script: Vec<InputFlags> = (0..200)
        .map(|i| if i % 50 < 25 { right() } else { left() })
        .collect();
    let mut a = generate::demo_scene(11);
    let mut b = generate::demo_scene(11);
    let fa = a.run(&mut ScriptedInput::new(script.clone()), &mut NullSink, 200);
    let fb = b.run(&mut ScriptedInput::new(script), &mut NullSink, 200);
    assert_eq!(fa, fb);
    assert_eq!(fa.last().map(|f| f.tick), Some(200));
}

#[test]
fn frame_capacity_is_bounded() {
    assert_eq!(frame_capacity(0), 0);
    assert_eq!(frame_capacity(200), 200);
    assert_eq!(frame_capacity(u64::MAX), frame_capacity(1 << 40));
    assert!(frame_capacity(u64::MAX) <= 1 << 16);
}
