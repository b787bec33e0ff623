use criterion::{Criterion, criterion_group, criterion_main};
use lifewheel::api::{WheelStyle, build_wheel_frame};
use lifewheel::core::{LevelVector, Viewport, WheelGeometry};
use lifewheel::interaction::resolve_click;
use lifewheel::summary::Summary;
use std::hint::black_box;

fn bench_hit_resolution(c: &mut Criterion) {
    let geometry = WheelGeometry::new(400.0, 400.0, 320.0).expect("valid geometry");

    c.bench_function("hit_resolution", |b| {
        b.iter(|| {
            let _ = resolve_click(black_box(geometry), black_box(523.7), black_box(291.4));
        })
    });
}

fn bench_wheel_frame_build(c: &mut Criterion) {
    let viewport = Viewport::new(800, 800);
    let geometry = WheelGeometry::fit_viewport(viewport, 80.0).expect("valid geometry");
    let levels = LevelVector::from_values([3, 9, 7, 2, 10, 5, 6, 4]).expect("valid levels");
    let style = WheelStyle::default();

    c.bench_function("wheel_frame_build", |b| {
        b.iter(|| {
            let _ = build_wheel_frame(
                black_box(viewport),
                black_box(geometry),
                black_box(&levels),
                black_box(None),
                black_box(&style),
            )
            .expect("build frame");
        })
    });
}

fn bench_summary_derivation(c: &mut Criterion) {
    let levels = LevelVector::from_values([3, 9, 7, 2, 10, 5, 6, 4]).expect("valid levels");

    c.bench_function("summary_derivation", |b| {
        b.iter(|| {
            let _ = Summary::from_levels(black_box(&levels));
        })
    });
}

criterion_group!(
    benches,
    bench_hit_resolution,
    bench_wheel_frame_build,
    bench_summary_derivation
);
criterion_main!(benches);
