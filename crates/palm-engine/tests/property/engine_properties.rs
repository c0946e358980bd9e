use palm_core::models::{Hierarchy, Polarity, Relation, Scope};
use palm_core::symbols::{Branch, Element};
use palm_engine::chart::SubjectChart;
use palm_engine::hierarchy::{decade_stage, resolve};
use palm_engine::ring::{advance, advance_branch};
use palm_engine::target::TargetDate;
use palm_engine::{relation, trend, FortuneEngine};
use proptest::prelude::*;
use test_fixtures::{FixtureCalendar, RequestBuilder};

fn branch() -> impl Strategy<Value = Branch> {
    (0usize..12).prop_map(Branch::from_index)
}

fn polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Forward), Just(Polarity::Reverse)]
}

fn chart() -> impl Strategy<Value = SubjectChart> {
    (polarity(), branch(), branch(), branch(), branch())
        .prop_map(|(p, y, m, d, h)| SubjectChart::from_pillars(p, y, m, d, h))
}

fn scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::Year),
        Just(Scope::Month),
        Just(Scope::Day),
        Just(Scope::Hour)
    ]
}

fn target() -> impl Strategy<Value = TargetDate> {
    (1950i32..2090, 1u32..=12, 1u32..=30, branch()).prop_map(|(y, m, d, hour)| TargetDate {
        lunar_year: y,
        lunar_month: m,
        lunar_day: d,
        hour,
    })
}

proptest! {
    #[test]
    fn advance_stays_on_ring(start in 0usize..12, steps in -1000i64..1000, dir in prop_oneof![Just(1i64), Just(-1i64)]) {
        prop_assert!(advance(start, steps, dir) < 12);
    }

    #[test]
    fn advance_is_invertible(start in 0usize..12, steps in -1000i64..1000, dir in prop_oneof![Just(1i64), Just(-1i64)]) {
        let there = advance(start, steps, dir);
        prop_assert_eq!(advance(there, steps, -dir), start);
    }

    #[test]
    fn advance_composes(start in 0usize..12, a in -100i64..100, b in -100i64..100) {
        prop_assert_eq!(advance(advance(start, a, 1), b, 1), advance(start, a + b, 1));
    }

    #[test]
    fn relation_is_total(host in 0usize..5, guest in 0usize..5) {
        let r = relation::resolve(Element::ALL[host], Element::ALL[guest]);
        prop_assert_ne!(r, Relation::Indeterminate);
        prop_assert!([80, 75, 60, 35, 20].contains(&r.score()));
    }

    #[test]
    fn decade_stage_steps_every_seven_years(chart in chart(), age in 1i32..100) {
        let now = decade_stage(&chart, age).unwrap();
        let later = decade_stage(&chart, age + 7).unwrap();
        prop_assert_eq!(later, advance_branch(now, 1, chart.direction()));
    }

    #[test]
    fn hierarchy_layers_chain(chart in chart(), age in 1i32..100, t in target()) {
        let h: Hierarchy = resolve(&chart, age, &t).unwrap();
        let dir = chart.direction();
        prop_assert_eq!(h.month, advance_branch(h.year, i64::from(t.lunar_month) - 1, dir));
        prop_assert_eq!(h.day, advance_branch(h.month, i64::from(t.lunar_day) - 1, dir));
        prop_assert_eq!(h.hour, advance_branch(h.day, t.hour.index() as i64, dir));
    }

    #[test]
    fn trend_target_lands_on_hierarchy(chart in chart(), age in 1i32..100, t in target(), scope in scope()) {
        let calendar = FixtureCalendar::new();
        let h = resolve(&chart, age, &t).unwrap();
        let trend = trend::generate(&chart, &h, &t, scope, &calendar);

        let expected_len = match scope {
            Scope::Year => 13,
            Scope::Month | Scope::Hour => 12,
            Scope::Day => FixtureCalendar::month_days(t.lunar_month) as usize,
        };
        prop_assert_eq!(trend.points.len(), expected_len);
        if let Some(point) = trend.target_point() {
            prop_assert_eq!(point.layer, h.get(scope.layer()));
        } else {
            prop_assert_eq!(scope, Scope::Day);
            prop_assert!(t.lunar_day as usize > expected_len);
        }
        for point in &trend.points {
            prop_assert_eq!(point.readings.len(), 12);
        }
    }

    #[test]
    fn every_axis_point_offsets_from_the_resolved_layer(chart in chart(), age in 1i32..100, t in target(), scope in scope()) {
        let calendar = FixtureCalendar::new();
        let h = resolve(&chart, age, &t).unwrap();
        let trend = trend::generate(&chart, &h, &t, scope, &calendar);
        let dir = chart.direction();

        // (layer the axis steps from, offset of the first point)
        let (base, first) = match scope {
            Scope::Year => (h.year, -6),
            Scope::Month => (h.year, 0),
            Scope::Day => (h.month, 0),
            Scope::Hour => (h.day, 0),
        };
        for (i, point) in trend.points.iter().enumerate() {
            prop_assert_eq!(point.layer, advance_branch(base, first + i as i64, dir), "point {}", i);
        }
    }

    #[test]
    fn any_reachable_birth_calculates(
        year in 1950i32..2000,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in branch(),
        flag in 0i64..2,
        years_later in 0i32..80,
        scope in scope(),
    ) {
        let calendar = FixtureCalendar::new();
        let engine = FortuneEngine::with_defaults(&calendar);
        let request = RequestBuilder::new(&format!("{year:04}-{month:02}-{day:02}"), hour.label())
            .polarity_flag(flag)
            .scope(scope)
            .target(year + years_later + 1, 6, 1)
            .build();
        let report = engine.calculate(&request).unwrap();
        prop_assert!(report.age >= 1);
        prop_assert_eq!(report.base_pillars.len(), 4);
        prop_assert_eq!(report.hierarchy.len(), 5);
        prop_assert_eq!(report.aspects_at_target.len(), 12);
    }
}
