use std::collections::BTreeMap;

use taste_core::config::ScoringConfig;
use taste_core::errors::TasteResult;
use taste_core::models::{DomainBreakdown, DomainScoreDetail, ScoredPlace, UserDomainProfile};
use taste_core::traits::IMatchScorer;
use taste_core::{Domain, PlaceSignal};
use taste_observability::{events, scoring_span};

use crate::dimension_table::DimensionTable;
use crate::domain_score;

/// Evidence gathered for one domain before scoring.
#[derive(Debug, Default)]
struct DomainBucket {
    effective_confidences: Vec<f64>,
    penalties: Vec<u32>,
}

/// Scores a place's per-domain evidence against a user's domain weights.
///
/// Core domains always appear in the breakdown; an extended domain appears
/// only when some evidence maps onto it. Never fails: unmapped dimensions are
/// dropped and logged, empty input yields neutral scores.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    table: DimensionTable,
    config: ScoringConfig,
}

impl MatchScorer {
    /// Create a scorer with the default dimension table and scoring constants.
    pub fn new() -> Self {
        Self {
            table: DimensionTable::default(),
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            table: DimensionTable::default(),
            config,
        }
    }

    /// Replace the dimension vocabulary.
    pub fn with_table(mut self, table: DimensionTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &DimensionTable {
        &self.table
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a place, returning only the breakdown.
    pub fn score(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> DomainBreakdown {
        self.score_detailed(signals, anti_signals, profile).breakdown
    }

    /// Score a place with a per-domain audit trail.
    pub fn score_detailed(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> ScoredPlace {
        let _span = scoring_span!(signals.len(), anti_signals.len()).entered();

        let mut buckets: BTreeMap<Domain, DomainBucket> = Domain::CORE
            .into_iter()
            .map(|d| (d, DomainBucket::default()))
            .collect();
        let mut dropped = 0;

        for signal in signals {
            match self.table.resolve(&signal.dimension) {
                Some(domain) => buckets
                    .entry(domain)
                    .or_default()
                    .effective_confidences
                    .push(domain_score::effective_confidence(
                        signal.confidence,
                        signal.corroborated,
                        self.config.corroboration_bonus,
                    )),
                None => {
                    dropped += 1;
                    events::dimension_dropped(&signal.dimension, &signal.tag);
                }
            }
        }

        for anti in anti_signals {
            match self.table.resolve(&anti.dimension) {
                Some(domain) => buckets.entry(domain).or_default().penalties.push(
                    domain_score::anti_signal_penalty(
                        anti.confidence,
                        self.config.anti_signal_penalty_scale,
                    ),
                ),
                None => {
                    dropped += 1;
                    events::dimension_dropped(&anti.dimension, &anti.tag);
                }
            }
        }

        let details: Vec<DomainScoreDetail> = buckets
            .into_iter()
            .map(|(domain, bucket)| self.score_domain(domain, bucket))
            .collect();

        let domains: BTreeMap<Domain, u8> =
            details.iter().map(|d| (d.domain, d.final_score)).collect();
        let overall = domain_score::weighted_overall(
            domains.iter().map(|(domain, score)| {
                (*score, profile.weight_or(*domain, self.config.default_weight))
            }),
            self.config.neutral_score,
        );

        events::place_scored(overall, domains.len(), dropped);

        ScoredPlace {
            breakdown: DomainBreakdown { domains, overall },
            details,
            dropped,
        }
    }

    fn score_domain(&self, domain: Domain, bucket: DomainBucket) -> DomainScoreDetail {
        let signal_count = bucket.effective_confidences.len();
        let (avg_confidence, density, base_score) = if signal_count == 0 {
            (0.0, 0.0, self.config.neutral_score)
        } else {
            let avg = domain_score::mean_confidence(&bucket.effective_confidences);
            let density = domain_score::density(signal_count, self.config.density_saturation);
            (avg, density, domain_score::base_score(avg, density, &self.config))
        };
        let penalty = domain_score::total_penalty(&bucket.penalties);

        DomainScoreDetail {
            domain,
            signal_count,
            anti_signal_count: bucket.penalties.len(),
            avg_confidence,
            density,
            base_score,
            penalty,
            final_score: domain_score::apply_penalty(base_score, penalty),
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl IMatchScorer for MatchScorer {
    fn score(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> TasteResult<DomainBreakdown> {
        Ok(MatchScorer::score(self, signals, anti_signals, profile))
    }
}
