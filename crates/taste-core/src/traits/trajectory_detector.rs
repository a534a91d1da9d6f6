use chrono::{DateTime, Utc};

use crate::errors::TasteResult;
use crate::models::TrajectoryAnalysis;
use crate::signal::{Domain, Signal};

/// Compares two already-partitioned signal windows.
pub trait ITrajectoryDetector: Send + Sync {
    fn analyze(
        &self,
        current: &[Signal],
        historical: &[Signal],
        domains: &[Domain],
        now: DateTime<Utc>,
    ) -> TasteResult<TrajectoryAnalysis>;
}
