use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::RING_SIZE;

/// One of the 12 life-aspect slots, in projection order.
///
/// Slot 0 ([`Aspect::OverallDestiny`]) is the aggregate aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    OverallDestiny,
    Image,
    Happiness,
    Career,
    Change,
    Vitality,
    Love,
    Leadership,
    Confidants,
    Foundation,
    Friends,
    Wealth,
}

impl Aspect {
    pub const ALL: [Aspect; RING_SIZE] = [
        Aspect::OverallDestiny,
        Aspect::Image,
        Aspect::Happiness,
        Aspect::Career,
        Aspect::Change,
        Aspect::Vitality,
        Aspect::Love,
        Aspect::Leadership,
        Aspect::Confidants,
        Aspect::Foundation,
        Aspect::Friends,
        Aspect::Wealth,
    ];

    /// Offset from the anchor position.
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn is_aggregate(self) -> bool {
        self == Aspect::OverallDestiny
    }

    pub fn name(self) -> &'static str {
        match self {
            Aspect::OverallDestiny => "總命運",
            Aspect::Image => "形象",
            Aspect::Happiness => "幸福",
            Aspect::Career => "事業",
            Aspect::Change => "變動",
            Aspect::Vitality => "健慾",
            Aspect::Love => "愛情",
            Aspect::Leadership => "領導",
            Aspect::Confidants => "親信",
            Aspect::Foundation => "根基",
            Aspect::Friends => "朋友",
            Aspect::Wealth => "錢財",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
