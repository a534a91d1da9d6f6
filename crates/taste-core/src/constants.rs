/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decayed confidence below which a signal is considered aged out.
///
/// Fixed across the system so every caller sees the same verdict.
pub const AGED_OUT_FLOOR: f64 = 0.05;

/// Seconds in one day, used for continuous signal age.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days counted as one month by the reprofiling staleness rule.
pub const DAYS_PER_MONTH: i64 = 30;

/// Pattern sentinel for a domain with no historical signals.
pub const PATTERN_NONE: &str = "(none)";

/// Pattern sentinel for a domain that went quiet in the recent window.
pub const PATTERN_DORMANT: &str = "(dormant)";

/// Separator used when joining top tags into a pattern string.
pub const PATTERN_SEPARATOR: &str = ", ";
