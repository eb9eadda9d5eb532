//! Benchmarks for the per-event and per-frame hot paths.
#![allow(missing_docs)]

use arcview::camera::Camera;
use arcview::input::{project, InputEvent, MouseButton, TrackballMapper};
use arcview::math::Quaternion;
use arcview::mesh::Mesh;
use arcview::options::{CameraOptions, Options, TrackballOptions};
use arcview::ViewEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn projection_benchmark(c: &mut Criterion) {
    c.bench_function("sphere_project", |b| {
        b.iter(|| black_box(project(black_box(0.3), black_box(-0.4))))
    });
}

fn quaternion_benchmark(c: &mut Criterion) {
    let q = Quaternion::new(0.5, Vec3::new(0.5, -0.5, 0.5));
    c.bench_function("rotate_by_angle_axis", |b| {
        b.iter(|| {
            black_box(q.rotate_by_angle_axis(black_box(0.3), Vec3::Y))
        })
    });
}

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trackball_drag");

    for samples in [10, 100, 1000].iter() {
        let path: Vec<(f32, f32)> = (0..*samples)
            .map(|i| {
                let t = i as f32 / *samples as f32;
                (1.2 * t - 0.6, 0.4 * (6.0 * t).sin())
            })
            .collect();

        group.bench_function(format!("{}_samples", samples), |b| {
            b.iter(|| {
                let mut tb = TrackballMapper::new(&TrackballOptions::default());
                tb.pointer_down();
                for &(x, z) in &path {
                    let _ = black_box(tb.pointer_move(x, z));
                }
                black_box(tb.orientation())
            })
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let options = CameraOptions::default();
    c.bench_function("camera_rebuild", |b| {
        b.iter(|| black_box(Camera::from_options(black_box(&options))))
    });

    let Ok(mut engine) = ViewEngine::new(Options::default(), Mesh::default())
    else {
        return;
    };
    let _ = engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    c.bench_function("handle_move_and_frame", |b| {
        let mut x = 0.0_f32;
        b.iter(|| {
            x = if x > 0.5 { -0.5 } else { x + 0.01 };
            let _ = engine.handle_input(InputEvent::CursorMoved { x, y: 0.1 });
            black_box((engine.frame_uniforms(), engine.lighting_uniforms()))
        })
    });
}

criterion_group!(
    benches,
    projection_benchmark,
    quaternion_benchmark,
    drag_benchmark,
    frame_benchmark
);
criterion_main!(benches);
