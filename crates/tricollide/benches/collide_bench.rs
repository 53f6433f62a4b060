//! Criterion benchmarks for the triangle-pair predicate.
//! Cases: far apart (broad-phase reject), overlapping boxes with a miss,
//! edge crossing, full containment; plus a full demo-scene tick.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tricollide::api::{
    demo_scene, triangles_collide, InputFlags, NullSink, ScriptedInput, Triangle, PLAYER_LOCAL,
};

fn cases() -> Vec<(&'static str, Triangle, Triangle)> {
    let big = [vector![-1.0, -1.0], vector![1.0, -1.0], vector![0.0, 1.0]];
    vec![
        (
            "separated",
            Triangle::new(PLAYER_LOCAL),
            Triangle::with_pose(PLAYER_LOCAL, vector![10.0, 10.0], 0.0),
        ),
        (
            "boxes_only",
            Triangle::new([vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]]),
            Triangle::with_pose(
                [vector![0.1, 0.0], vector![0.1, 0.1], vector![0.0, 0.1]],
                vector![0.9, 0.9],
                0.0,
            ),
        ),
        (
            "edge_crossing",
            Triangle::new(big),
            Triangle::with_pose(big, vector![1.0, 0.0], 0.3),
        ),
        ("contained", Triangle::new(big), Triangle::new(PLAYER_LOCAL)),
    ]
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangles_collide");
    for (name, a, b) in cases() {
        group.bench_with_input(BenchmarkId::new("pair", name), &(a, b), |bch, (a, b)| {
            bch.iter(|| triangles_collide(a, b))
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(45);
    let script: Vec<InputFlags> = (0..256)
        .map(|_| InputFlags {
            left: rng.gen(),
            right: rng.gen(),
            up: rng.gen(),
            down: rng.gen(),
            rotate_left: rng.gen(),
            rotate_right: rng.gen(),
        })
        .collect();
    c.bench_function("demo_scene_256_ticks", |b| {
        b.iter_batched(
            || (demo_scene(2025), ScriptedInput::new(script.clone())),
            |(mut scene, mut input)| scene.run(&mut input, &mut NullSink, 256),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_pairs, bench_scene);
criterion_main!(benches);
