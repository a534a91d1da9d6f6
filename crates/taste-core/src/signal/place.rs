use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{AntiSignal, Signal};

/// Per-place evidence as produced by the enrichment pipeline.
///
/// `dimension` is a raw taste-dimension label (e.g. "Scale & Intimacy") that the
/// scorer resolves onto a [`Domain`](super::Domain) through its dimension table.
/// The same shape carries both signals and anti-signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlaceSignal {
    pub dimension: String,
    pub tag: String,
    pub confidence: f64,
    #[serde(default)]
    pub corroborated: bool,
}

impl PlaceSignal {
    pub fn new(dimension: impl Into<String>, tag: impl Into<String>, confidence: f64) -> Self {
        Self {
            dimension: dimension.into(),
            tag: tag.into(),
            confidence,
            corroborated: false,
        }
    }

    pub fn corroborated(mut self) -> Self {
        self.corroborated = true;
        self
    }
}

impl From<&Signal> for PlaceSignal {
    fn from(s: &Signal) -> Self {
        Self {
            dimension: s.domain.as_str().to_string(),
            tag: s.tag.clone(),
            confidence: s.confidence.value(),
            corroborated: s.corroborated,
        }
    }
}

impl From<&AntiSignal> for PlaceSignal {
    fn from(s: &AntiSignal) -> Self {
        Self {
            dimension: s.domain.as_str().to_string(),
            tag: s.tag.clone(),
            confidence: s.confidence.value(),
            corroborated: s.corroborated,
        }
    }
}
