// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use easel_geometry::ObjectLimits;
use easel_scene::{DemoLayout, EditorSurface, SceneAction, SceneStore, SurfaceConfig};
use kurbo::{Point, Size, Vec2};

fn store(count: usize) -> SceneStore {
    let layout = DemoLayout {
        count,
        ..DemoLayout::default()
    };
    SceneStore::demo(&layout, ObjectLimits::default())
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/dispatch");

    // Each published snapshot clones the object list; this tracks that cost.
    for count in [5usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("tap_toggle", count), &count, |b, &count| {
            b.iter_batched(
                || store(count),
                |mut store| {
                    black_box(store.dispatch(SceneAction::Tap(Point::new(10.0, 10.0))));
                    black_box(store.dispatch(SceneAction::Tap(Point::new(-10.0, -10.0))));
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("manipulate", count), &count, |b, &count| {
            let mut store = store(count);
            store.dispatch(SceneAction::Tap(Point::new(10.0, 10.0)));
            b.iter(|| {
                let step = SceneAction::manipulate(Vec2::new(0.5, 0.0), 1.001, 0.1);
                black_box(store.dispatch(step));
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut surface = EditorSurface::new(store(100), SurfaceConfig::default());
    surface.set_layout(Size::new(1080.0, 1920.0), Size::new(1080.0, 1200.0));
    surface.tap(Point::new(10.0, 10.0));
    c.bench_function("scene/frame_100", |b| b.iter(|| black_box(surface.frame())));
}

criterion_group!(benches, bench_dispatch, bench_frame);
criterion_main!(benches);
