// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use scene_lens::ui::preview_panel::{clamped_position, clamped_size, AspectRatio};
use std::hint::black_box;

fn geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let ratio = AspectRatio::from_viewport(1920.0, 1080.0);
    let container = Size::new(1920.0, 1080.0);

    group.bench_function("clamped_size", |b| {
        b.iter(|| {
            let _ = black_box(clamped_size(
                black_box(Size::new(333.3, 333.3)),
                container,
                ratio,
                250.0,
            ));
        });
    });

    group.bench_function("clamped_position", |b| {
        b.iter(|| {
            let _ = black_box(clamped_position(
                black_box(Point::new(-40.0, 2000.0)),
                Point::ORIGIN,
                container,
                Size::new(300.0, 168.0),
                2.0,
            ));
        });
    });

    group.finish();
}

criterion_group!(benches, geometry_benchmark);
criterion_main!(benches);
