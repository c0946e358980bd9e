use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::symbols::Branch;

/// One of the five nested time layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    DecadeStage,
    Year,
    Month,
    Day,
    Hour,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::DecadeStage,
        Layer::Year,
        Layer::Month,
        Layer::Day,
        Layer::Hour,
    ];

    /// Prefix used when naming a star by the layer it sits on.
    pub fn prefix(self) -> &'static str {
        match self {
            Layer::DecadeStage => "大運",
            Layer::Year => "流年",
            Layer::Month => "流月",
            Layer::Day => "流日",
            Layer::Hour => "流時",
        }
    }
}

/// Request-scoped chain of layer positions for one target date.
///
/// Each layer is derived from the one before it; see the hierarchy resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hierarchy {
    pub decade_stage: Branch,
    pub year: Branch,
    pub month: Branch,
    pub day: Branch,
    pub hour: Branch,
}

impl Hierarchy {
    pub fn get(&self, layer: Layer) -> Branch {
        match layer {
            Layer::DecadeStage => self.decade_stage,
            Layer::Year => self.year,
            Layer::Month => self.month,
            Layer::Day => self.day,
            Layer::Hour => self.hour,
        }
    }

    /// Layers in derivation order with their positions.
    pub fn layers(&self) -> [(Layer, Branch); 5] {
        Layer::ALL.map(|layer| (layer, self.get(layer)))
    }

    /// Display name of the star on `layer`, e.g. `流年天貴星`.
    pub fn star_label(&self, layer: Layer) -> String {
        format!("{}{}", layer.prefix(), self.get(layer).star().name())
    }
}
