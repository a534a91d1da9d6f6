use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Confidence, Domain};

/// An atomic taste observation.
///
/// `extracted_at` is fixed at observation time; decay is always derived from it
/// against an explicit "now" and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signal {
    pub domain: Domain,
    /// Short label for the specific preference, e.g. `artisan_ceramics`.
    pub tag: String,
    pub confidence: Confidence,
    pub extracted_at: DateTime<Utc>,
    /// An independent source reinforced the same tag.
    #[serde(default)]
    pub corroborated: bool,
}

impl Signal {
    pub fn new(
        domain: Domain,
        tag: impl Into<String>,
        confidence: f64,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            domain,
            tag: tag.into(),
            confidence: Confidence::new(confidence),
            extracted_at,
            corroborated: false,
        }
    }

    pub fn corroborated(mut self) -> Self {
        self.corroborated = true;
        self
    }
}

/// Negative evidence for a domain: something that works against a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AntiSignal {
    pub domain: Domain,
    pub tag: String,
    pub confidence: Confidence,
    pub extracted_at: DateTime<Utc>,
    #[serde(default)]
    pub corroborated: bool,
}

impl AntiSignal {
    pub fn new(
        domain: Domain,
        tag: impl Into<String>,
        confidence: f64,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            domain,
            tag: tag.into(),
            confidence: Confidence::new(confidence),
            extracted_at,
            corroborated: false,
        }
    }
}
