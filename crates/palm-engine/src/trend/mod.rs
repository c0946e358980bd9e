//! Trend series generator.
//!
//! Builds the axis for a scope, scores every aspect at every point, and
//! lays the result out column-wise for charting.

pub mod axis;
pub mod scoring;

use palm_core::models::{AspectReading, AspectSeries, Hierarchy, Scope, TrendSeries};
use palm_core::symbols::{Aspect, Branch};
use palm_core::traits::CalendarNormalizer;

use crate::chart::SubjectChart;
use crate::target::TargetDate;

/// One scored point on the axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub label: String,
    pub layer: Branch,
    pub readings: Vec<AspectReading>,
    pub compatibility: i32,
}

/// Row-wise trend: one entry per axis point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub scope: Scope,
    pub points: Vec<TrendPoint>,
    pub target_index: Option<usize>,
}

impl Trend {
    /// Point matching the requested target, if it lies on the axis.
    pub fn target_point(&self) -> Option<&TrendPoint> {
        self.target_index.and_then(|i| self.points.get(i))
    }

    /// Transpose into per-aspect columns.
    pub fn into_series(self, include_compatibility: bool) -> TrendSeries {
        let mut per_aspect: Vec<AspectSeries> = Aspect::ALL
            .into_iter()
            .map(|aspect| AspectSeries {
                aspect,
                name: aspect.name().to_string(),
                scores: Vec::with_capacity(self.points.len()),
                modifiers: Vec::with_capacity(self.points.len()),
                annotations: Vec::with_capacity(self.points.len()),
                relations: Vec::with_capacity(self.points.len()),
            })
            .collect();

        let mut axis_labels = Vec::with_capacity(self.points.len());
        let mut layer_positions = Vec::with_capacity(self.points.len());
        let mut compatibility_overlay = Vec::new();

        for point in self.points {
            axis_labels.push(point.label);
            layer_positions.push(point.layer);
            if include_compatibility {
                compatibility_overlay.push(point.compatibility);
            }
            for (series, reading) in per_aspect.iter_mut().zip(point.readings) {
                series.scores.push(reading.score);
                series.modifiers.push(reading.modifier);
                series.relations.push(reading.relation);
                series.annotations.push(reading.annotation);
            }
        }

        TrendSeries {
            scope: self.scope,
            axis_labels,
            layer_positions,
            per_aspect,
            compatibility_overlay,
            target_index: self.target_index,
        }
    }
}

/// Generate the trend for `scope` around `target`.
pub fn generate(
    chart: &SubjectChart,
    hierarchy: &Hierarchy,
    target: &TargetDate,
    scope: Scope,
    calendar: &dyn CalendarNormalizer,
) -> Trend {
    let axis = axis::build(scope, hierarchy, target, chart.direction(), calendar);
    let _span = palm_core::trend_span!(scope, axis.points.len()).entered();
    tracing::debug!(target_index = ?axis.target_index, "built axis");

    let points = axis
        .points
        .into_iter()
        .map(|point| {
            let readings = scoring::score_point(chart, hierarchy, scope, &point.label, point.layer);
            TrendPoint {
                compatibility: point.layer.star().compatibility(),
                label: point.label,
                layer: point.layer,
                readings,
            }
        })
        .collect();

    Trend {
        scope,
        points,
        target_index: axis.target_index,
    }
}
