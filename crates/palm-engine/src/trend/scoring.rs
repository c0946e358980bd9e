//! Per-aspect scoring at one axis point.

use palm_core::constants::ROOTED_BONUS;
use palm_core::models::{AspectReading, Hierarchy, Scope};
use palm_core::symbols::{Aspect, Branch};

use crate::aspects;
use crate::chart::SubjectChart;
use crate::relation;

/// One side of a host/guest relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub branch: Branch,
    pub name: String,
}

/// Host and guest for `aspect` at a point whose time layer is `layer`.
///
/// Every aspect but the aggregate pits the time layer (host) against the
/// aspect's branch (guest). The aggregate pits the enclosing layer (host)
/// against the time layer (guest).
pub fn parties(
    aspect: Aspect,
    aspect_branch: Branch,
    layer: Branch,
    scope: Scope,
    hierarchy: &Hierarchy,
) -> (Party, Party) {
    let time_party = Party {
        branch: layer,
        name: format!("{}{}", scope.layer().prefix(), layer.star().name()),
    };
    if aspect.is_aggregate() {
        let parent = scope.parent_layer();
        let host = Party {
            branch: hierarchy.get(parent),
            name: hierarchy.star_label(parent),
        };
        (host, time_party)
    } else {
        let guest = Party {
            branch: aspect_branch,
            name: aspect_branch.star().name().to_string(),
        };
        (time_party, guest)
    }
}

/// Tier modifier of the aspect's own star plus the rooted bonus.
pub fn modifier(chart: &SubjectChart, aspect_branch: Branch) -> i32 {
    let tier = aspect_branch.star().tier().modifier();
    if chart.is_rooted(aspect_branch) {
        tier + ROOTED_BONUS
    } else {
        tier
    }
}

/// Score all 12 aspects at one point.
///
/// Aspects are anchored on the origin-hour pillar, so only the time layer
/// varies from point to point.
pub fn score_point(
    chart: &SubjectChart,
    hierarchy: &Hierarchy,
    scope: Scope,
    label: &str,
    layer: Branch,
) -> Vec<AspectReading> {
    aspects::project(chart.hour())
        .into_iter()
        .map(|(aspect, aspect_branch)| {
            let (host, guest) = parties(aspect, aspect_branch, layer, scope, hierarchy);
            let relation = relation::resolve(host.branch.element(), guest.branch.element());
            let modifier = modifier(chart, aspect_branch);
            let star = aspect_branch.star();
            AspectReading {
                aspect,
                name: aspect.name().to_string(),
                branch: aspect_branch,
                star,
                element: aspect_branch.element(),
                annotation: format!(
                    "{label}: {}對{} ({relation}) | 坐{star} ({modifier:+})",
                    guest.name, host.name
                ),
                host: host.name,
                guest: guest.name,
                relation,
                score: relation.score(),
                modifier,
                is_alert: relation.is_alert(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use palm_core::models::{Polarity, Relation};

    // Origin hour on 巳 (fire); parent year layer on 寅 (wood).
    fn chart() -> SubjectChart {
        SubjectChart::from_pillars(
            Polarity::Forward,
            Branch::Yin,
            Branch::Mao,
            Branch::Chen,
            Branch::Si,
        )
    }

    fn hierarchy() -> Hierarchy {
        Hierarchy {
            decade_stage: Branch::Wu,
            year: Branch::Yin,
            month: Branch::Zi,
            day: Branch::Zi,
            hour: Branch::Zi,
        }
    }

    #[test]
    fn aggregate_substitution_changes_the_category() {
        let chart = chart();
        let h = hierarchy();
        // Month layer on 子 (water), aggregate aspect branch is 巳 (fire).
        let layer = Branch::Zi;
        let aspect_branch = aspects::branch_for(chart.hour(), Aspect::OverallDestiny);
        assert_eq!(aspect_branch, Branch::Si);

        // Plain rule: water host against fire guest.
        let plain = relation::resolve(layer.element(), aspect_branch.element());
        assert_eq!(plain, Relation::HostStrains);

        // Substituted: wood year host against water month guest.
        let readings = score_point(&chart, &h, Scope::Month, "11月", layer);
        assert_eq!(readings[0].relation, Relation::NourishesHost);
        assert_eq!(readings[0].score, 80);
        assert_eq!(readings[0].host, "流年天權星");
        assert_eq!(readings[0].guest, "流月天貴星");
    }

    #[test]
    fn other_slots_use_plain_rule() {
        let chart = chart();
        let readings = score_point(&chart, &hierarchy(), Scope::Month, "11月", Branch::Zi);
        assert_eq!(readings.len(), 12);
        // Slot 1 sits on 午 (fire): water host strains fire guest.
        assert_eq!(readings[1].branch, Branch::Wu);
        assert_eq!(readings[1].relation, Relation::HostStrains);
        assert!(readings[1].is_alert);
        assert_eq!(readings[1].host, "流月天貴星");
        assert_eq!(readings[1].guest, "天福星");
    }

    #[test]
    fn modifier_adds_rooted_bonus() {
        let chart = chart();
        // 巳 天文星 neutral, rooted on the hour pillar.
        assert_eq!(modifier(&chart, Branch::Si), 20);
        // 午 天福星 favorable, not rooted.
        assert_eq!(modifier(&chart, Branch::Wu), 30);
        // 辰 天奸星 unfavorable, rooted on the day pillar.
        assert_eq!(modifier(&chart, Branch::Chen), -10);
        // 丑 天厄星 unfavorable, not rooted.
        assert_eq!(modifier(&chart, Branch::Chou), -20);
    }

    #[test]
    fn annotation_names_both_parties() {
        let readings = score_point(&chart(), &hierarchy(), Scope::Month, "11月", Branch::Zi);
        let note = &readings[1].annotation;
        assert!(note.starts_with("11月: "));
        assert!(note.contains("天福星對流月天貴星"));
        assert!(note.contains("我剋"));
        assert!(note.contains("+30"));
    }
}
