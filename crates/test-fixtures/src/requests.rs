//! Builder for calculation requests.

use palm_core::models::{CalendarKind, FortuneRequest, PartnerRequest, Scope};

/// Fluent builder over [`FortuneRequest`], starting from a forward-polarity
/// subject and a lunar month-scope target of 2024-1-1 子.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: FortuneRequest,
}

impl RequestBuilder {
    pub fn new(birth_date: &str, birth_hour: &str) -> Self {
        Self {
            request: FortuneRequest {
                polarity_flag: 1,
                birth_date: birth_date.to_string(),
                birth_hour: birth_hour.to_string(),
                target_calendar: Some(CalendarKind::Lunar),
                target_scope: Some(Scope::Month),
                target_year: 2024,
                target_month: 1,
                target_day: 1,
                target_hour: "子".to_string(),
            },
        }
    }

    pub fn polarity_flag(mut self, flag: i64) -> Self {
        self.request.polarity_flag = flag;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.request.target_scope = Some(scope);
        self
    }

    /// Leave scope unset so the configured default applies.
    pub fn default_scope(mut self) -> Self {
        self.request.target_scope = None;
        self
    }

    pub fn calendar(mut self, kind: CalendarKind) -> Self {
        self.request.target_calendar = Some(kind);
        self
    }

    pub fn target(mut self, year: i32, month: u32, day: u32) -> Self {
        self.request.target_year = year;
        self.request.target_month = month;
        self.request.target_day = day;
        self
    }

    pub fn target_hour(mut self, hour: &str) -> Self {
        self.request.target_hour = hour.to_string();
        self
    }

    pub fn build(self) -> FortuneRequest {
        self.request
    }

    /// The same subject as a risk-scan request.
    pub fn partner(&self) -> PartnerRequest {
        PartnerRequest {
            polarity_flag: self.request.polarity_flag,
            birth_date: self.request.birth_date.clone(),
            birth_hour: self.request.birth_hour.clone(),
        }
    }
}
