use crate::errors::TasteResult;
use crate::models::{DomainBreakdown, UserDomainProfile};
use crate::signal::PlaceSignal;

/// Place-to-user match scoring.
pub trait IMatchScorer: Send + Sync {
    /// Score a place's evidence against a user's domain weights.
    fn score(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> TasteResult<DomainBreakdown>;
}
