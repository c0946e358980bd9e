use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::symbols::{Branch, Element, Realm, Star};

/// The four foundational pillars of a subject chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [Pillar::Year, Pillar::Month, Pillar::Day, Pillar::Hour];

    pub fn name(self) -> &'static str {
        match self {
            Pillar::Year => "年柱",
            Pillar::Month => "月柱",
            Pillar::Day => "日柱",
            Pillar::Hour => "時柱",
        }
    }

    /// Palace traditionally read from this pillar.
    pub fn palace(self) -> &'static str {
        match self {
            Pillar::Year => "父母宮",
            Pillar::Month => "事業宮",
            Pillar::Day => "夫妻宮",
            Pillar::Hour => "命宮",
        }
    }
}

/// Everything the tables say about one ring position, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Placement {
    pub branch: Branch,
    pub branch_label: String,
    pub star: Star,
    pub star_name: String,
    pub element: Element,
    pub element_label: String,
    pub realm: Realm,
    pub realm_label: String,
}

impl From<Branch> for Placement {
    fn from(branch: Branch) -> Self {
        let star = branch.star();
        let element = branch.element();
        let realm = branch.realm();
        Self {
            branch,
            branch_label: branch.label().to_string(),
            star,
            star_name: star.name().to_string(),
            element,
            element_label: element.label().to_string(),
            realm,
            realm_label: realm.label().to_string(),
        }
    }
}
