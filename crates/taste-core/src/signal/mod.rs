pub mod base;
pub mod confidence;
pub mod domain;
pub mod place;

pub use base::{AntiSignal, Signal};
pub use confidence::Confidence;
pub use domain::Domain;
pub use place::PlaceSignal;
