use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::element::Element;
use super::star::Star;
use crate::constants::RING_SIZE;

/// One of the 12 fixed positions on the ring.
///
/// The discriminant is the ring index. Element, star and realm are
/// fixed per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi = 0,
    Chou = 1,
    Yin = 2,
    Mao = 3,
    Chen = 4,
    Si = 5,
    Wu = 6,
    Wei = 7,
    Shen = 8,
    You = 9,
    Xu = 10,
    Hai = 11,
}

/// Realm label carried by each branch. Reported, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Realm {
    Buddha,
    Ghost,
    Human,
    Beast,
    Asura,
    Immortal,
}

impl Realm {
    pub fn label(self) -> &'static str {
        match self {
            Realm::Buddha => "佛道",
            Realm::Ghost => "鬼道",
            Realm::Human => "人道",
            Realm::Beast => "畜道",
            Realm::Asura => "修羅",
            Realm::Immortal => "仙道",
        }
    }
}

impl Branch {
    pub const ALL: [Branch; RING_SIZE] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Ring index in `[0, 12)`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at `index mod 12`.
    pub fn from_index(index: usize) -> Branch {
        Self::ALL[index % RING_SIZE]
    }

    /// Parse a branch from its character (`"子"`) or romanization (`"zi"`,
    /// case-insensitive). Surrounding whitespace and a trailing `時` are ignored.
    pub fn from_label(label: &str) -> Option<Branch> {
        let trimmed = label.trim();
        let trimmed = trimmed.strip_suffix('時').unwrap_or(trimmed);
        Self::ALL.into_iter().find(|b| {
            b.label() == trimmed || b.romanization().eq_ignore_ascii_case(trimmed)
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    pub fn romanization(self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    /// The star bound 1:1 to this branch.
    pub fn star(self) -> Star {
        Star::ALL[self.index()]
    }

    pub fn realm(self) -> Realm {
        match self.index() % 6 {
            0 => Realm::Buddha,
            1 => Realm::Ghost,
            2 => Realm::Human,
            3 => Realm::Beast,
            4 => Realm::Asura,
            _ => Realm::Immortal,
        }
    }

    /// Civil two-hour window covered by this branch as an hour branch.
    /// 子 straddles midnight: 23:00–01:00.
    pub fn hour_window(self) -> String {
        let start = (self.index() * 2 + 23) % 24;
        let end = (start + 2) % 24;
        format!("{start:02}:00–{end:02}:00")
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
