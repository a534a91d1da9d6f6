use taste_core::models::ReprofilingUrgency;

/// Urgency from the number of fired triggers and weak domains.
///
/// High: 3+ triggers or 3+ weak domains. Medium: 2+ triggers. Otherwise Low.
pub fn classify(trigger_count: usize, weak_domain_count: usize) -> ReprofilingUrgency {
    if trigger_count >= 3 || weak_domain_count >= 3 {
        ReprofilingUrgency::High
    } else if trigger_count >= 2 {
        ReprofilingUrgency::Medium
    } else {
        ReprofilingUrgency::Low
    }
}
