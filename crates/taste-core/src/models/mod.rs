pub mod decayed_signal;
pub mod domain_breakdown;
pub mod domain_cluster;
pub mod reprofiling;
pub mod trajectory;
pub mod user_profile;

pub use decayed_signal::{DecayBreakdown, DecayedSignal};
pub use domain_breakdown::{DomainBreakdown, DomainScoreDetail, ScoredPlace};
pub use domain_cluster::DomainCluster;
pub use reprofiling::{ReprofilingAssessment, ReprofilingInput, ReprofilingPhase, ReprofilingUrgency};
pub use trajectory::{TrajectoryAnalysis, TrajectoryDirection, TrajectoryShift};
pub use user_profile::UserDomainProfile;
