// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_snackbar::application::animation::{Geometry, Plan, SafeAreaPolicy};
use iced_snackbar::domain::layout::ConstraintSet;
use iced_snackbar::domain::snackbar::{AnimationType, DisplayDuration, EdgeInsets, Margins};
use iced_snackbar::infrastructure::HeadlessHost;
use iced_snackbar::ui::snackbar::Banner;
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

fn geometry() -> Geometry {
    Geometry {
        height: 44.0,
        host_width: 375.0,
        margins: Margins::default(),
        safe_area: EdgeInsets::new(44.0, 0.0, 34.0, 0.0),
    }
}

fn plan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_plans");
    let geometry = geometry();
    let policy = SafeAreaPolicy::default();

    group.bench_function("plan_all_types", |b| {
        b.iter(|| {
            let mut constraints = ConstraintSet::new();
            for kind in AnimationType::ALL {
                let entrance = Plan::entrance(black_box(kind), &geometry);
                let exit = Plan::exit(kind, &geometry, &policy);
                entrance.after.write_to(&mut constraints);
                exit.after.write_to(&mut constraints);
            }
            black_box(constraints)
        });
    });

    group.finish();
}

fn lifecycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_lifecycle");

    group.bench_function("show_and_expire_short", |b| {
        b.iter(|| {
            let host = Rc::new(HeadlessHost::new(375.0));
            let mut banner = Banner::with_message("Saved", DisplayDuration::Short);
            banner.show(host.clone());
            host.advance_and_pump(Duration::from_millis(1300), &mut banner);
            black_box(banner.phase())
        });
    });

    group.finish();
}

criterion_group!(benches, plan_benchmark, lifecycle_benchmark);
criterion_main!(benches);
