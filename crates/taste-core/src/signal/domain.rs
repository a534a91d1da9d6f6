use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TasteError;

/// The closed set of taste domains shared by scoring, decay, and trajectory analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Domain {
    // Core (6)
    Design,
    Character,
    Service,
    Food,
    Location,
    Wellness,
    // Extended (2)
    Rhythm,
    CulturalEngagement,
}

impl Domain {
    /// Total number of domains.
    pub const COUNT: usize = 8;

    /// All variants for iteration.
    pub const ALL: [Domain; 8] = [
        Self::Design,
        Self::Character,
        Self::Service,
        Self::Food,
        Self::Location,
        Self::Wellness,
        Self::Rhythm,
        Self::CulturalEngagement,
    ];

    /// Domains that always appear in a place breakdown.
    pub const CORE: [Domain; 6] = [
        Self::Design,
        Self::Character,
        Self::Service,
        Self::Food,
        Self::Location,
        Self::Wellness,
    ];

    /// Canonical name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Character => "Character",
            Self::Service => "Service",
            Self::Food => "Food",
            Self::Location => "Location",
            Self::Wellness => "Wellness",
            Self::Rhythm => "Rhythm",
            Self::CulturalEngagement => "CulturalEngagement",
        }
    }

    pub fn is_core(self) -> bool {
        Self::CORE.contains(&self)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = TasteError;

    /// Case-insensitive parse of a canonical domain name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| TasteError::UnknownDomain {
                name: s.to_string(),
            })
    }
}
