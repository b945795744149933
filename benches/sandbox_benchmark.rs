/*
 * Sandbox Benchmark
 *
 * Measures the per-frame cost of the simulation loop as the box count grows:
 * one fixed physics step plus the pose refresh, and recording a full frame
 * of draw calls.
 */

use box_sandbox::{CommandList, PointerState, RandomGenerator, Sandbox, SandboxParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;

// Build a sandbox holding `n` boxes spread over the upper half of the window
fn populated(n: usize) -> Sandbox {
    let mut sandbox = Sandbox::with_generator(SandboxParams::default(), RandomGenerator::from_seed(1))
        .expect("default params are valid");
    for i in 0..n {
        let x = 40.0 + (i % 25) as f32 * 22.0;
        let y = 20.0 + (i / 25 % 10) as f32 * 22.0;
        sandbox
            .spawn_box(PointerState::held_at(vec2(x, y)))
            .expect("no box limit by default");
    }
    // Let the pile form so the benchmark sees resting contacts
    for _ in 0..120 {
        sandbox.step();
    }
    sandbox
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_boxes in [10, 100, 250, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            let mut sandbox = populated(n);
            b.iter(|| {
                sandbox.step();
                black_box(sandbox.steps());
            });
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for num_boxes in [100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            let sandbox = populated(n);
            b.iter(|| {
                let mut canvas = CommandList::default();
                sandbox.draw(&mut canvas);
                black_box(canvas.commands.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_draw);
criterion_main!(benches);
