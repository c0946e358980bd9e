//! Base chart constructor: the four origin pillars.

use palm_core::models::{Pillar, PillarEntry, Placement, Polarity};
use palm_core::symbols::Branch;

use crate::ring::advance_branch;

/// Birth data already normalized into chart inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthPillars {
    pub polarity: Polarity,
    pub year_branch: Branch,
    /// Lunar month ordinal after the leap-month carry.
    pub month: u32,
    pub day: u32,
    pub hour_branch: Branch,
}

/// A subject's four origin pillars and traversal direction.
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectChart {
    polarity: Polarity,
    year: Branch,
    month: Branch,
    day: Branch,
    hour: Branch,
}

impl SubjectChart {
    /// Chain the pillars: each one advances from the previous.
    pub fn new(birth: BirthPillars) -> Self {
        let direction = birth.polarity.direction();
        let year = birth.year_branch;
        let month = advance_branch(year, i64::from(birth.month) - 1, direction);
        let day = advance_branch(month, i64::from(birth.day) - 1, direction);
        let hour = advance_branch(day, birth.hour_branch.index() as i64, direction);
        Self {
            polarity: birth.polarity,
            year,
            month,
            day,
            hour,
        }
    }

    /// Build directly from pillar positions.
    pub fn from_pillars(polarity: Polarity, year: Branch, month: Branch, day: Branch, hour: Branch) -> Self {
        Self {
            polarity,
            year,
            month,
            day,
            hour,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn direction(&self) -> i64 {
        self.polarity.direction()
    }

    pub fn pillar(&self, pillar: Pillar) -> Branch {
        match pillar {
            Pillar::Year => self.year,
            Pillar::Month => self.month,
            Pillar::Day => self.day,
            Pillar::Hour => self.hour,
        }
    }

    pub fn year(&self) -> Branch {
        self.year
    }

    pub fn month(&self) -> Branch {
        self.month
    }

    pub fn day(&self) -> Branch {
        self.day
    }

    pub fn hour(&self) -> Branch {
        self.hour
    }

    /// Pillar positions in year, month, day, hour order.
    pub fn pillars(&self) -> [Branch; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// True when `branch` is one of the four pillars.
    pub fn is_rooted(&self, branch: Branch) -> bool {
        self.pillars().contains(&branch)
    }

    pub fn entries(&self) -> Vec<PillarEntry> {
        Pillar::ALL
            .into_iter()
            .map(|pillar| PillarEntry {
                pillar,
                name: pillar.name().to_string(),
                palace: pillar.palace().to_string(),
                placement: Placement::from(self.pillar(pillar)),
            })
            .collect()
    }
}
