//! Criterion benchmarks for palm-engine.
//!
//! Covers the full calculation per scope, trend generation alone, and the
//! partner risk scan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use palm_core::models::{Polarity, Scope};
use palm_core::symbols::Branch;
use palm_engine::chart::SubjectChart;
use palm_engine::target::TargetDate;
use palm_engine::{hierarchy, trend, FortuneEngine};
use test_fixtures::{FixtureCalendar, RequestBuilder};

fn bench_calculate_per_scope(c: &mut Criterion) {
    let calendar = FixtureCalendar::new();
    let engine = FortuneEngine::with_defaults(&calendar);
    for scope in Scope::ALL {
        let request = RequestBuilder::new("1990-05-20", "子")
            .scope(scope)
            .target(2024, 3, 10)
            .target_hour("寅")
            .build();
        c.bench_function(&format!("calculate_{scope}"), |bench| {
            bench.iter(|| engine.calculate(black_box(&request)))
        });
    }
}

fn bench_trend_generate_day(c: &mut Criterion) {
    let calendar = FixtureCalendar::new();
    let chart = SubjectChart::from_pillars(
        Polarity::Forward,
        Branch::Wu,
        Branch::You,
        Branch::Chen,
        Branch::Chen,
    );
    let target = TargetDate {
        lunar_year: 2024,
        lunar_month: 3,
        lunar_day: 10,
        hour: Branch::Yin,
    };
    let h = match hierarchy::resolve(&chart, 35, &target) {
        Ok(h) => h,
        Err(e) => panic!("hierarchy: {e}"),
    };
    c.bench_function("trend_generate_day", |bench| {
        bench.iter(|| trend::generate(black_box(&chart), &h, &target, Scope::Day, &calendar))
    });
}

fn bench_scan_partner(c: &mut Criterion) {
    let calendar = FixtureCalendar::new();
    let engine = FortuneEngine::with_defaults(&calendar);
    let partner = RequestBuilder::new("1990-05-20", "子").partner();
    c.bench_function("scan_partner", |bench| {
        bench.iter(|| engine.scan_partner(black_box(&partner)))
    });
}

criterion_group!(
    benches,
    bench_calculate_per_scope,
    bench_trend_generate_day,
    bench_scan_partner,
);
criterion_main!(benches);
