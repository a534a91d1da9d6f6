pub mod decay_engine;
pub mod match_scorer;
pub mod trajectory_detector;

pub use decay_engine::IDecayEngine;
pub use match_scorer::IMatchScorer;
pub use trajectory_detector::ITrajectoryDetector;
