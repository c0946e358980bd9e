//! Pattern detector over the four origin pillars.

use rustc_hash::FxHashMap;

use palm_core::constants::TRIPLE_PATTERN_MIN;
use palm_core::models::PatternMatch;
use palm_core::symbols::Star;

use crate::chart::SubjectChart;

/// Stars that form a named pattern when they appear at least three times.
const TRIPLE_PATTERNS: [(Star, &str, &str); 7] = [
    (Star::TianGui, "三貴星格", "天貴星三現以上，貴人提攜，名望清高"),
    (Star::TianFu, "三福星格", "天福星三現以上，福祿深厚，衣食無憂"),
    (Star::TianQuan, "三權星格", "天權星三現以上，掌權主事，具領導才能"),
    (Star::TianE, "三厄星格", "天厄星三現以上，多逢困阻，宜守不宜攻"),
    (Star::TianPo, "三破星格", "天破星三現以上，易有破耗變動，理財宜保守"),
    (Star::TianGu, "三孤星格", "天孤星三現以上，性情孤高，六親緣薄"),
    (Star::TianRen, "三刃星格", "天刃星三現以上，個性剛烈，行事果決但易衝動"),
];

/// The one star whose exact duplication reads as favorable.
const DOUBLE_PATTERN: (Star, &str, &str) =
    (Star::TianWen, "雙文星格", "天文星兩現，文采出眾，利於學業與考試");

const ALL_FAVORABLE: (&str, &str) = ("四柱皆吉", "四柱皆坐吉星，根基穩固，貴人運強");
const ALL_UNFAVORABLE: (&str, &str) = ("四柱皆凶", "四柱皆坐凶星，宜修身守成，遇事多加謹慎");

/// Detect every pattern present in the chart. Checks are independent, so
/// several patterns may match at once.
pub fn detect(chart: &SubjectChart) -> Vec<PatternMatch> {
    let stars = chart.pillars().map(|b| b.star());
    let mut counts: FxHashMap<Star, usize> = FxHashMap::default();
    for star in stars {
        *counts.entry(star).or_insert(0) += 1;
    }
    let count = |star: Star| counts.get(&star).copied().unwrap_or(0);

    let mut matches = Vec::new();
    if stars.iter().all(|s| s.is_favorable()) {
        matches.push(pattern(ALL_FAVORABLE.0, ALL_FAVORABLE.1));
    }
    if stars.iter().all(|s| s.is_unfavorable()) {
        matches.push(pattern(ALL_UNFAVORABLE.0, ALL_UNFAVORABLE.1));
    }
    for (star, name, description) in TRIPLE_PATTERNS {
        if count(star) >= TRIPLE_PATTERN_MIN {
            matches.push(pattern(name, description));
        }
    }
    let (star, name, description) = DOUBLE_PATTERN;
    if count(star) == 2 {
        matches.push(pattern(name, description));
    }
    matches
}

fn pattern(name: &str, description: &str) -> PatternMatch {
    PatternMatch {
        name: name.to_string(),
        description: description.to_string(),
    }
}
