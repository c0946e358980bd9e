use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::chart::{Pillar, Placement};
use super::hierarchy::Layer;
use super::relation::Relation;
use super::request::Scope;
use crate::symbols::{Aspect, Branch, Element, Star};

/// Complete output of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FortuneReport {
    pub lunar_birth_summary: String,
    pub age: i32,
    pub base_pillars: Vec<PillarEntry>,
    pub hierarchy: Vec<LayerEntry>,
    pub target_display: String,
    pub aspects_at_target: Vec<AspectReading>,
    pub trend: TrendSeries,
    pub patterns: Vec<PatternMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PillarEntry {
    pub pillar: Pillar,
    pub name: String,
    pub palace: String,
    #[serde(flatten)]
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LayerEntry {
    pub layer: Layer,
    pub name: String,
    #[serde(flatten)]
    pub placement: Placement,
}

/// One aspect scored at one axis point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AspectReading {
    pub aspect: Aspect,
    pub name: String,
    pub branch: Branch,
    pub star: Star,
    pub element: Element,
    /// Display name of the host side of the relation.
    pub host: String,
    /// Display name of the guest side of the relation.
    pub guest: String,
    pub relation: Relation,
    pub score: i32,
    /// Tier modifier plus rooted bonus.
    pub modifier: i32,
    pub is_alert: bool,
    pub annotation: String,
}

/// Trend dataset for one scope, laid out column-wise for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    pub scope: Scope,
    pub axis_labels: Vec<String>,
    /// Time-layer position at each axis point.
    pub layer_positions: Vec<Branch>,
    /// One series per aspect, in slot order.
    pub per_aspect: Vec<AspectSeries>,
    /// Empty when the overlay is disabled in config.
    pub compatibility_overlay: Vec<i32>,
    /// Axis point matching the requested target, if it lies on the axis.
    pub target_index: Option<usize>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.axis_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis_labels.is_empty()
    }

    pub fn series(&self, aspect: Aspect) -> Option<&AspectSeries> {
        self.per_aspect.iter().find(|s| s.aspect == aspect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AspectSeries {
    pub aspect: Aspect,
    pub name: String,
    pub scores: Vec<i32>,
    pub modifiers: Vec<i32>,
    pub annotations: Vec<String>,
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternMatch {
    pub name: String,
    pub description: String,
}
