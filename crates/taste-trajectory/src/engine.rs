use chrono::{DateTime, Utc};
use taste_core::config::{TasteConfig, TrajectoryConfig};
use taste_core::errors::TasteResult;
use taste_core::models::TrajectoryAnalysis;
use taste_core::traits::ITrajectoryDetector;
use taste_core::{Domain, Signal};
use taste_observability::{events, trajectory_span};

use crate::clustering::cluster_signals;
use crate::description::describe;
use crate::direction::classify_direction;
use crate::shifts::detect_shifts;
use crate::windows::{partition_windows, SignalWindows};

/// Trajectory detector: compares two signal windows per domain and classifies
/// the overall direction of change.
///
/// Stateless apart from configuration. Shifts are returned as candidates;
/// persisting them is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryDetector {
    config: TrajectoryConfig,
}

impl TrajectoryDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrajectoryConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &TasteConfig) -> Self {
        Self::with_config(config.trajectory.clone())
    }

    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Split one signal history into the configured recent and historical windows.
    pub fn partition(&self, signals: &[Signal], now: DateTime<Utc>) -> SignalWindows {
        partition_windows(
            signals,
            now,
            self.config.recent_window_days,
            self.config.historical_window_days,
        )
    }

    /// Compare `current` against `historical` over `domains`.
    ///
    /// Signals outside `domains` take no part in shift detection but still
    /// count toward the assessment confidence. Every shift carries `now` as
    /// its detection time.
    pub fn analyze_trajectory(
        &self,
        current: &[Signal],
        historical: &[Signal],
        domains: &[Domain],
        now: DateTime<Utc>,
    ) -> TrajectoryAnalysis {
        let _span = trajectory_span!(current.len(), historical.len()).entered();

        let current_clusters = cluster_signals(&in_domains(current, domains), self.config.top_tags);
        let historical_clusters =
            cluster_signals(&in_domains(historical, domains), self.config.top_tags);

        let shifts = detect_shifts(
            &current_clusters,
            &historical_clusters,
            domains,
            &self.config,
            now,
        );
        let direction = classify_direction(
            &shifts,
            &current_clusters,
            &historical_clusters,
            domains,
            &self.config,
        );
        let confidence = self.assessment_confidence(current.len() + historical.len());

        events::trajectory_detected(direction, shifts.len(), confidence);

        TrajectoryAnalysis {
            direction,
            description: describe(direction, shifts.len()),
            shifts,
            confidence,
        }
    }

    fn assessment_confidence(&self, total_signals: usize) -> f64 {
        (total_signals as f64 / self.config.saturation_count.max(1) as f64).min(1.0)
    }
}

fn in_domains(signals: &[Signal], domains: &[Domain]) -> Vec<Signal> {
    signals
        .iter()
        .filter(|s| domains.contains(&s.domain))
        .cloned()
        .collect()
}

impl ITrajectoryDetector for TrajectoryDetector {
    fn analyze(
        &self,
        current: &[Signal],
        historical: &[Signal],
        domains: &[Domain],
        now: DateTime<Utc>,
    ) -> TasteResult<TrajectoryAnalysis> {
        Ok(self.analyze_trajectory(current, historical, domains, now))
    }
}
