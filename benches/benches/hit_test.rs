// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_geometry::{ObjectId, SceneObject, hit_test};
use kurbo::{Point, Rect, Vec2};

/// A grid of rotated, scaled squares, roughly what a busy board looks like.
fn scene(len: usize) -> Vec<SceneObject> {
    let side = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| {
            let x = (i % side) as f64 * 60.0;
            let y = (i / side) as f64 * 60.0;
            let bounds = Rect::new(x, y, x + 50.0, y + 50.0);
            SceneObject::new(ObjectId::from_raw(i as u64), bounds, i as i32)
                .with_rotation((i * 17 % 360) as f64)
                .with_scale(0.8 + (i % 5) as f64 * 0.1)
                .with_translation(Vec2::new(3.0, -2.0))
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/hit_test");

    // Hit testing is a linear scan; this tracks the per-object inverse-mapping cost.
    for len in [8usize, 64, 512, 4_096] {
        let objects = scene(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hit_center", len), &objects, |b, objects| {
            b.iter(|| black_box(hit_test(black_box(Point::new(28.0, 23.0)), objects)));
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &objects, |b, objects| {
            b.iter(|| black_box(hit_test(black_box(Point::new(-500.0, -500.0)), objects)));
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let objects = scene(512);
    c.bench_function("geometry/compose_object_transform", |b| {
        b.iter(|| {
            for obj in &objects {
                black_box(obj.transform());
            }
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_compose);
criterion_main!(benches);
