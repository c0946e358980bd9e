use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::branch::Branch;
use crate::constants::RING_SIZE;

/// One of the 12 stars, bound 1:1 to the branches in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Star {
    TianGui,
    TianE,
    TianQuan,
    TianPo,
    TianJian,
    TianWen,
    TianFu,
    TianYi,
    TianGu,
    TianRen,
    TianYiArt,
    TianShou,
}

/// Favorability tier of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StarTier {
    Favorable,
    Neutral,
    Unfavorable,
}

impl StarTier {
    /// Modifier applied to an aspect sitting on a star of this tier.
    pub fn modifier(self) -> i32 {
        match self {
            StarTier::Favorable => 30,
            StarTier::Neutral => 10,
            StarTier::Unfavorable => -20,
        }
    }
}

impl Star {
    pub const ALL: [Star; RING_SIZE] = [
        Star::TianGui,
        Star::TianE,
        Star::TianQuan,
        Star::TianPo,
        Star::TianJian,
        Star::TianWen,
        Star::TianFu,
        Star::TianYi,
        Star::TianGu,
        Star::TianRen,
        Star::TianYiArt,
        Star::TianShou,
    ];

    /// The branch this star is bound to.
    pub fn branch(self) -> Branch {
        Branch::from_index(self as usize)
    }

    pub fn name(self) -> &'static str {
        match self {
            Star::TianGui => "天貴星",
            Star::TianE => "天厄星",
            Star::TianQuan => "天權星",
            Star::TianPo => "天破星",
            Star::TianJian => "天奸星",
            Star::TianWen => "天文星",
            Star::TianFu => "天福星",
            Star::TianYi => "天驛星",
            Star::TianGu => "天孤星",
            Star::TianRen => "天刃星",
            Star::TianYiArt => "天藝星",
            Star::TianShou => "天壽星",
        }
    }

    pub fn tier(self) -> StarTier {
        match self {
            Star::TianGui | Star::TianQuan | Star::TianFu | Star::TianShou => StarTier::Favorable,
            Star::TianE | Star::TianPo | Star::TianJian | Star::TianGu => StarTier::Unfavorable,
            Star::TianWen | Star::TianYi | Star::TianRen | Star::TianYiArt => StarTier::Neutral,
        }
    }

    /// Small overlay score for a time layer sitting on this star.
    pub fn compatibility(self) -> i32 {
        match self {
            Star::TianGui | Star::TianFu => 10,
            Star::TianQuan | Star::TianShou => 5,
            Star::TianE | Star::TianJian => -10,
            Star::TianPo | Star::TianGu => -5,
            Star::TianWen | Star::TianYi | Star::TianRen | Star::TianYiArt => 0,
        }
    }

    pub fn is_favorable(self) -> bool {
        self.tier() == StarTier::Favorable
    }

    pub fn is_unfavorable(self) -> bool {
        self.tier() == StarTier::Unfavorable
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_bind_one_to_one_with_branches() {
        for b in Branch::ALL {
            assert_eq!(b.star().branch(), b);
        }
    }

    #[test]
    fn four_stars_per_tier() {
        for tier in [StarTier::Favorable, StarTier::Neutral, StarTier::Unfavorable] {
            assert_eq!(Star::ALL.iter().filter(|s| s.tier() == tier).count(), 4);
        }
    }

    #[test]
    fn compatibility_sign_follows_tier() {
        for s in Star::ALL {
            match s.tier() {
                StarTier::Favorable => assert!(s.compatibility() > 0),
                StarTier::Neutral => assert_eq!(s.compatibility(), 0),
                StarTier::Unfavorable => assert!(s.compatibility() < 0),
            }
        }
    }
}
