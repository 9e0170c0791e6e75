// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use scalable_view::{FlingConfig, GestureEvent, Momentum, ScalableView};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn magnified_view() -> ScalableView {
    let mut view = ScalableView::new();
    view.handle(GestureEvent::Resize(Size::new(1080.0, 1920.0)));
    view.attach(Size::new(1200.0, 1200.0));
    view.handle(GestureEvent::DoubleTap);
    while view.advance(FRAME) {}
    view
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalable_view");
    group.sample_size(50);

    group.bench_function("toggle_animation_to_rest", |b| {
        b.iter_batched(
            magnified_view,
            |mut view| {
                view.handle(GestureEvent::DoubleTap);
                while view.advance(FRAME) {
                    black_box(view.current_transform());
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fling_to_rest", |b| {
        b.iter_batched(
            magnified_view,
            |mut view| {
                view.handle(GestureEvent::FlingRelease(Vec2::new(6000.0, -4000.0)));
                while view.advance(FRAME) {
                    black_box(view.current_transform());
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    for &drags in &[64_usize, 1_024] {
        group.bench_function(format!("drag_sequence(n={drags})"), |b| {
            b.iter_batched(
                || (magnified_view(), Lcg::new(0x5CA1_AB1E_0000_0001)),
                |(mut view, mut rng)| {
                    for _ in 0..drags {
                        let delta = Vec2::new(
                            (rng.next_f64() - 0.5) * 300.0,
                            (rng.next_f64() - 0.5) * 300.0,
                        );
                        view.handle(GestureEvent::DragDelta(delta));
                    }
                    black_box(view.pan_offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("momentum_step", |b| {
        let bounds = Rect::new(-1.0e6, -1.0e6, 1.0e6, 1.0e6);
        b.iter(|| {
            let mut fling = Momentum::new(
                Point::ZERO,
                Vec2::new(8000.0, 8000.0),
                bounds,
                FlingConfig::default(),
            )
            .expect("default fling tuning is valid");
            while fling.step(1.0 / 60.0) {}
            black_box(fling.position())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_interaction);
criterion_main!(benches);
