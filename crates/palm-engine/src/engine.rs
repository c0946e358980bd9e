//! FortuneEngine: the host-facing service that runs a full calculation.
//!
//! Pipeline: normalize birth → base chart → normalize target → hierarchy
//! → trend → aspects at target → patterns.

use std::path::Path;

use palm_core::config::PalmConfig;
use palm_core::errors::EngineResult;
use palm_core::models::{
    FortuneReport, FortuneRequest, LayerEntry, LunarDate, PartnerRequest, Placement, Polarity,
};
use palm_core::traits::CalendarNormalizer;
use tracing::{debug, info};

use crate::chart::{BirthPillars, SubjectChart};
use crate::hierarchy;
use crate::patterns;
use crate::ring::BranchResolver;
use crate::risk;
use crate::target;
use crate::trend::{self, scoring};

/// The calculation service. Holds only injected, read-only collaborators,
/// so one instance can serve any number of threads.
pub struct FortuneEngine<'a> {
    calendar: &'a dyn CalendarNormalizer,
    config: PalmConfig,
    branches: BranchResolver,
}

impl<'a> FortuneEngine<'a> {
    pub fn new(calendar: &'a dyn CalendarNormalizer, config: PalmConfig) -> Self {
        let branches = if config.engine.effective_strict_branches() {
            BranchResolver::strict()
        } else {
            BranchResolver::permissive()
        };
        Self {
            calendar,
            config,
            branches,
        }
    }

    /// Engine with compiled-default configuration.
    pub fn with_defaults(calendar: &'a dyn CalendarNormalizer) -> Self {
        Self::new(calendar, PalmConfig::default())
    }

    /// Engine with configuration resolved under `root`: user file, then
    /// `palm.toml`, then `PALM_*` variables.
    pub fn load(calendar: &'a dyn CalendarNormalizer, root: &Path) -> EngineResult<Self> {
        let config = PalmConfig::load(root)?;
        Ok(Self::new(calendar, config))
    }

    pub fn config(&self) -> &PalmConfig {
        &self.config
    }

    /// Normalize birth data and build the subject's base chart.
    pub fn build_chart(
        &self,
        polarity_flag: i64,
        birth_date: &str,
        birth_hour: &str,
    ) -> EngineResult<(LunarDate, SubjectChart)> {
        let lunar = target::normalize_birth(self.calendar, birth_date)?;
        let hour_branch = self.branches.resolve("birth_hour", birth_hour)?;
        let chart = SubjectChart::new(BirthPillars {
            polarity: Polarity::from_flag(polarity_flag),
            year_branch: hierarchy::year_branch(i64::from(lunar.year)),
            month: lunar.chart_month(),
            day: lunar.day,
            hour_branch,
        });
        debug!(?lunar, ?chart, "built subject chart");
        Ok((lunar, chart))
    }

    /// Run a full calculation.
    pub fn calculate(&self, request: &FortuneRequest) -> EngineResult<FortuneReport> {
        let scope = request
            .target_scope
            .unwrap_or_else(|| self.config.engine.effective_default_scope());
        let calendar_kind = request
            .target_calendar
            .unwrap_or_else(|| self.config.engine.effective_default_target_calendar());
        let _span = palm_core::calculation_span!(scope, request.target_year).entered();

        let (birth, chart) =
            self.build_chart(request.polarity_flag, &request.birth_date, &request.birth_hour)?;

        let target_hour = self.branches.resolve("target_hour", &request.target_hour)?;
        let resolved = target::resolve_target(
            self.calendar,
            calendar_kind,
            request.target_year,
            request.target_month,
            request.target_day,
            target_hour,
        );

        let age = hierarchy::age_at(birth.year, resolved.date.lunar_year)?;
        let hierarchy = hierarchy::resolve(&chart, age, &resolved.date)?;

        let trend = trend::generate(&chart, &hierarchy, &resolved.date, scope, self.calendar);
        let aspects_at_target = match trend.target_point() {
            Some(point) => point.readings.clone(),
            None => scoring::score_point(
                &chart,
                &hierarchy,
                scope,
                &resolved.display,
                hierarchy.get(scope.layer()),
            ),
        };

        let patterns = if self.config.patterns.effective_enabled() {
            patterns::detect(&chart)
        } else {
            Vec::new()
        };

        let layers = hierarchy
            .layers()
            .into_iter()
            .map(|(layer, branch)| LayerEntry {
                layer,
                name: layer.prefix().to_string(),
                placement: Placement::from(branch),
            })
            .collect();

        let trend = trend.into_series(self.config.trend.effective_include_compatibility());
        info!(
            age,
            points = trend.len(),
            patterns = patterns.len(),
            "calculation complete"
        );

        Ok(FortuneReport {
            lunar_birth_summary: birth.summary(),
            age,
            base_pillars: chart.entries(),
            hierarchy: layers,
            target_display: resolved.display,
            aspects_at_target,
            trend,
            patterns,
        })
    }

    /// Scan a third party's hour pillar for risk stars.
    ///
    /// Returns an empty list when the scanner is disabled.
    pub fn scan_partner(&self, partner: &PartnerRequest) -> EngineResult<Vec<String>> {
        if !self.config.risk.effective_enabled() {
            debug!("risk scanner disabled");
            return Ok(Vec::new());
        }
        let _span = palm_core::risk_span!(partner.birth_date).entered();
        let (_, chart) =
            self.build_chart(partner.polarity_flag, &partner.birth_date, &partner.birth_hour)?;
        let risks = risk::scan(&chart);
        info!(risks = risks.len(), "partner scan complete");
        Ok(risks)
    }
}
