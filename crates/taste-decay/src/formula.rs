//! Half-life decay formula.
//!
//! ```text
//! decayed = original × 0.5^(ageInDays / halfLifeDays)
//! ```
//!
//! Age is continuous (nanosecond resolution). When `now <= extractedAt` the
//! original value is returned untouched; any later `now` strictly lowers a
//! positive confidence.

use chrono::{DateTime, Utc};
use taste_core::config::defaults::DEFAULT_HALF_LIFE_DAYS;
use taste_core::constants::{AGED_OUT_FLOOR, SECONDS_PER_DAY};
use taste_core::models::DecayBreakdown;

/// Decay a confidence value from `extracted_at` to `now`.
///
/// `original` is clamped to [0, 1] first. A non-positive or non-finite
/// half-life falls back to the 180-day default.
pub fn decay_confidence(
    original: f64,
    extracted_at: DateTime<Utc>,
    half_life_days: f64,
    now: DateTime<Utc>,
) -> f64 {
    compute_breakdown(original, extracted_at, half_life_days, now).final_confidence
}

/// Whole days since extraction, floored at 0. For display and bucketing only.
pub fn compute_signal_age(extracted_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - extracted_at).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// True once the decayed confidence drops below the fixed 0.05 floor.
pub fn is_aged_out(
    original: f64,
    extracted_at: DateTime<Utc>,
    half_life_days: f64,
    now: DateTime<Utc>,
) -> bool {
    decay_confidence(original, extracted_at, half_life_days, now) < AGED_OUT_FLOOR
}

/// Compute decay with each intermediate value exposed.
pub fn compute_breakdown(
    original: f64,
    extracted_at: DateTime<Utc>,
    half_life_days: f64,
    now: DateTime<Utc>,
) -> DecayBreakdown {
    let original = clamp_unit(original);
    let half_life = effective_half_life(half_life_days);

    if now <= extracted_at {
        return DecayBreakdown {
            original_confidence: original,
            age_days: 0.0,
            half_life_days: half_life,
            decay_factor: 1.0,
            final_confidence: original,
        };
    }

    let age_days = continuous_age_days(extracted_at, now);
    let decay_factor = 0.5_f64.powf(age_days / half_life);

    DecayBreakdown {
        original_confidence: original,
        age_days,
        half_life_days: half_life,
        decay_factor,
        final_confidence: strictly_decayed(original, decay_factor),
    }
}

/// `original × factor`, kept strictly below a positive `original`.
///
/// Ages of a few nanoseconds give a factor that rounds to 1.0; the result then
/// steps down to the next representable value.
fn strictly_decayed(original: f64, decay_factor: f64) -> f64 {
    let decayed = (original * decay_factor).clamp(0.0, original);
    if decayed >= original && original > 0.0 {
        f64::from_bits(original.to_bits() - 1)
    } else {
        decayed
    }
}

/// Fractional days between two instants.
pub fn continuous_age_days(extracted_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now - extracted_at;
    let seconds = elapsed.num_seconds() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
    seconds / SECONDS_PER_DAY
}

fn effective_half_life(half_life_days: f64) -> f64 {
    if half_life_days.is_finite() && half_life_days > 0.0 {
        half_life_days
    } else {
        DEFAULT_HALF_LIFE_DAYS
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
