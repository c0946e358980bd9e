use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One of the five elements.
///
/// Production cycle: water → wood → fire → earth → metal → water.
/// Control cycle: water → fire → metal → wood → earth → water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Water,
    Wood,
    Fire,
    Earth,
    Metal,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Water,
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
    ];

    /// The element this one produces.
    pub fn produces(self) -> Element {
        match self {
            Element::Water => Element::Wood,
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
        }
    }

    /// The element this one controls.
    pub fn controls(self) -> Element {
        match self {
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
        }
    }

    /// Single-character display label.
    pub fn label(self) -> &'static str {
        match self {
            Element::Water => "水",
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
