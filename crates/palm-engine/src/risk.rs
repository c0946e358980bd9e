//! Risk scanner for a third party's origin-hour pillar.

use palm_core::models::Pillar;
use palm_core::symbols::Star;

use crate::chart::SubjectChart;

/// Stars that flag a risk when they sit on the origin-hour pillar.
const RISK_STARS: [(Star, &str); 3] = [
    (Star::TianE, "易招災厄，合作宜多觀察"),
    (Star::TianPo, "易有破耗，財務往來需謹慎"),
    (Star::TianJian, "心思難測，承諾宜白紙黑字"),
];

/// One risk string per match on the hour pillar.
///
/// Only the base chart is consulted; no hierarchy is resolved.
pub fn scan(chart: &SubjectChart) -> Vec<String> {
    let star = chart.pillar(Pillar::Hour).star();
    RISK_STARS
        .iter()
        .filter(|(risk, _)| *risk == star)
        .map(|(risk, note)| format!("{}坐{}：{}", Pillar::Hour.name(), risk.name(), note))
        .collect()
}
