use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use super::hierarchy::Layer;
use crate::errors::RequestError;

/// Traversal direction of a subject's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Forward,
    Reverse,
}

impl Polarity {
    /// Flag `1` is forward; every other value is reverse.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Polarity::Forward
        } else {
            Polarity::Reverse
        }
    }

    /// `+1` or `-1`.
    pub fn direction(self) -> i64 {
        match self {
            Polarity::Forward => 1,
            Polarity::Reverse => -1,
        }
    }
}

/// Granularity of a trend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Year,
    Month,
    Day,
    Hour,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Scope::Year, Scope::Month, Scope::Day, Scope::Hour];

    /// The hierarchy layer this scope varies along the axis.
    pub fn layer(self) -> Layer {
        match self {
            Scope::Year => Layer::Year,
            Scope::Month => Layer::Month,
            Scope::Day => Layer::Day,
            Scope::Hour => Layer::Hour,
        }
    }

    /// The enclosing layer one level above [`Scope::layer`].
    pub fn parent_layer(self) -> Layer {
        match self {
            Scope::Year => Layer::DecadeStage,
            Scope::Month => Layer::Year,
            Scope::Day => Layer::Month,
            Scope::Hour => Layer::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Year => "year",
            Scope::Month => "month",
            Scope::Day => "day",
            Scope::Hour => "hour",
        }
    }
}

impl FromStr for Scope {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Scope::Year),
            "month" => Ok(Scope::Month),
            "day" => Ok(Scope::Day),
            "hour" => Ok(Scope::Hour),
            _ => Err(RequestError::InvalidScope {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar in which the target date is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    #[serde(alias = "civil")]
    Solar,
    Lunar,
}

impl CalendarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarKind::Solar => "solar",
            CalendarKind::Lunar => "lunar",
        }
    }
}

impl FromStr for CalendarKind {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "civil" => Ok(CalendarKind::Solar),
            "lunar" => Ok(CalendarKind::Lunar),
            _ => Err(RequestError::InvalidCalendarKind {
                value: s.to_string(),
            }),
        }
    }
}

/// A full calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FortuneRequest {
    /// `1` for forward traversal, anything else for reverse.
    pub polarity_flag: i64,
    /// Civil birth date, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Birth hour branch label.
    pub birth_hour: String,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub target_calendar: Option<CalendarKind>,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub target_scope: Option<Scope>,
    pub target_year: i32,
    #[serde(default = "default_target_month")]
    pub target_month: u32,
    #[serde(default = "default_target_day")]
    pub target_day: u32,
    #[serde(default = "default_target_hour")]
    pub target_hour: String,
}

fn default_target_month() -> u32 {
    1
}

fn default_target_day() -> u32 {
    1
}

fn default_target_hour() -> String {
    "子".to_string()
}

/// Third-party birth data for a risk scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartnerRequest {
    pub polarity_flag: i64,
    pub birth_date: String,
    pub birth_hour: String,
}
