//! Split one signal history into the recent and historical windows.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use taste_core::Signal;

/// Signals partitioned by age.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalWindows {
    /// Age below `recent_days` (signals dated in the future land here too).
    pub current: Vec<Signal>,
    /// Age in `[recent_days, historical_days)`.
    pub historical: Vec<Signal>,
    /// Signals older than the historical window.
    pub expired: usize,
}

/// Partition signals by age relative to `now`. Input order is preserved.
pub fn partition_windows(
    signals: &[Signal],
    now: DateTime<Utc>,
    recent_days: i64,
    historical_days: i64,
) -> SignalWindows {
    let recent_cutoff = now - Duration::days(recent_days);
    let historical_cutoff = now - Duration::days(historical_days);

    let mut windows = SignalWindows::default();
    for signal in signals {
        if signal.extracted_at > recent_cutoff {
            windows.current.push(signal.clone());
        } else if signal.extracted_at > historical_cutoff {
            windows.historical.push(signal.clone());
        } else {
            windows.expired += 1;
        }
    }
    windows
}
