// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_NEUTRAL_SCORE: u8 = 50;
pub const DEFAULT_CORROBORATION_BONUS: f64 = 0.05;
pub const DEFAULT_DENSITY_SATURATION: usize = 20;
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.6;
pub const DEFAULT_DENSITY_WEIGHT: f64 = 0.4;
pub const DEFAULT_ANTI_SIGNAL_PENALTY_SCALE: f64 = 5.0;
pub const DEFAULT_DOMAIN_WEIGHT: f64 = 0.5;

// --- User profile weights ---
pub const DEFAULT_WEIGHT_DESIGN: f64 = 0.85;
pub const DEFAULT_WEIGHT_CHARACTER: f64 = 0.80;
pub const DEFAULT_WEIGHT_SERVICE: f64 = 0.60;
pub const DEFAULT_WEIGHT_FOOD: f64 = 0.75;
pub const DEFAULT_WEIGHT_LOCATION: f64 = 0.70;
pub const DEFAULT_WEIGHT_WELLNESS: f64 = 0.40;

// --- Decay ---
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 180.0;

// --- Reprofiling ---
pub const DEFAULT_STALE_AFTER_MONTHS: i64 = 6;
pub const DEFAULT_BEHAVIORAL_EVENT_THRESHOLD: u32 = 3;
pub const DEFAULT_WEAK_DOMAIN_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CONTRADICTION_THRESHOLD: f64 = 0.3;

// --- Trajectory ---
pub const DEFAULT_TOP_TAGS: usize = 3;
pub const DEFAULT_MIN_SIGNALS: usize = 2;
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CONFIDENCE_DELTA: f64 = 0.1;
pub const DEFAULT_SATURATION_COUNT: usize = 20;
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 90;
pub const DEFAULT_HISTORICAL_WINDOW_DAYS: i64 = 270;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
