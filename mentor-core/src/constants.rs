/// Mentor system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Review intervals never drop below one day.
pub const MIN_INTERVAL_DAYS: u32 = 1;

/// Feature flags.
pub const FEATURE_QUIZ_GENERATION: bool = true;
pub const FEATURE_SPACED_REPETITION: bool = true;
