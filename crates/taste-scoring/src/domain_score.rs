//! Per-domain score arithmetic.
//!
//! ```text
//! effective   = min(confidence + (corroborated ? bonus : 0), 1.0)
//! density     = min(count / saturation, 1.0)
//! domainScore = round((mean(effective) × 0.6 + density × 0.4) × 100)
//! penalty     = Σ round(antiConfidence × 5)
//! overall     = round(Σ score·w / Σ w)
//! ```

use taste_core::config::ScoringConfig;

/// Confidence of one signal after the corroboration bonus, in [0, 1].
pub fn effective_confidence(confidence: f64, corroborated: bool, bonus: f64) -> f64 {
    let base = clamp_unit(confidence);
    if corroborated {
        (base + bonus).min(1.0)
    } else {
        base
    }
}

/// Mean of effective confidences. 0.0 for an empty slice.
///
/// Values are summed in sorted order so a shuffled input yields identical bits.
pub fn mean_confidence(effective: &[f64]) -> f64 {
    if effective.is_empty() {
        return 0.0;
    }
    let mut sorted = effective.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().sum::<f64>() / sorted.len() as f64
}

/// Coverage term: more independent observations, capped at saturation.
pub fn density(count: usize, saturation: usize) -> f64 {
    if saturation == 0 {
        return 1.0;
    }
    (count as f64 / saturation as f64).min(1.0)
}

/// Score of a domain with at least one signal, before penalties.
pub fn base_score(avg_confidence: f64, density: f64, config: &ScoringConfig) -> u8 {
    to_score(avg_confidence * config.confidence_weight + density * config.density_weight)
}

/// Points one anti-signal removes from its domain.
pub fn anti_signal_penalty(confidence: f64, scale: f64) -> u32 {
    (clamp_unit(confidence) * scale).round().max(0.0) as u32
}

/// Sum of per-anti-signal penalties, saturating at `u32::MAX`.
pub fn total_penalty(penalties: &[u32]) -> u32 {
    penalties.iter().fold(0, |total, p| total.saturating_add(*p))
}

/// Apply a cumulative penalty, flooring at 0.
pub fn apply_penalty(score: u8, penalty: u32) -> u8 {
    let remaining = i64::from(score) - i64::from(penalty);
    remaining.max(0) as u8
}

/// Weighted mean of `(score, weight)` pairs, or `neutral` when the weights sum to zero.
pub fn weighted_overall<I>(scores: I, neutral: u8) -> u8
where
    I: IntoIterator<Item = (u8, f64)>,
{
    let (weighted, total_weight) = scores
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(sum, total), (score, weight)| {
            (sum + f64::from(score) * weight, total + weight)
        });
    if total_weight <= 0.0 {
        return neutral;
    }
    (weighted / total_weight).round().clamp(0.0, 100.0) as u8
}

fn to_score(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
