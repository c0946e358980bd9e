use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Classification of a host/guest element interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    /// Guest produces host.
    NourishesHost,
    /// Same element.
    Peer,
    /// Host produces guest.
    HostExerts,
    /// Host controls guest.
    HostStrains,
    /// Guest controls host.
    HostAfflicted,
    Indeterminate,
}

impl Relation {
    pub fn score(self) -> i32 {
        match self {
            Relation::NourishesHost => 80,
            Relation::Peer => 75,
            Relation::HostExerts => 60,
            Relation::HostStrains => 35,
            Relation::HostAfflicted => 20,
            Relation::Indeterminate => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Relation::NourishesHost => "生我",
            Relation::Peer => "比旺",
            Relation::HostExerts => "我生",
            Relation::HostStrains => "我剋",
            Relation::HostAfflicted => "剋我",
            Relation::Indeterminate => "未知",
        }
    }

    /// Control relations in either direction are flagged for attention.
    pub fn is_alert(self) -> bool {
        matches!(self, Relation::HostStrains | Relation::HostAfflicted)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
