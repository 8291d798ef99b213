//! Default values referenced by the config structs.

/// Final context chunks returned per query.
pub const DEFAULT_TOP_K: usize = 4;

/// Over-fetch factor: the candidate pool is `top_k * multiplier` so
/// MMR has enough slack to trade relevance for diversity.
pub const DEFAULT_POOL_MULTIPLIER: usize = 4;

/// MMR relevance/diversity balance. 1.0 is pure relevance.
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 0.7;

/// Review interval for a freshly scheduled topic.
pub const DEFAULT_INITIAL_INTERVAL_DAYS: u32 = 1;

/// Starting ease factor for a freshly scheduled topic.
pub const DEFAULT_INITIAL_EASE: f64 = 2.5;

/// Ease gained on a fully correct answer.
pub const DEFAULT_EASE_REWARD: f64 = 0.1;

/// Ease lost on an incorrect answer.
pub const DEFAULT_EASE_PENALTY: f64 = 0.2;

/// Interval growth on a partially correct answer.
pub const DEFAULT_PARTIAL_GROWTH: f64 = 1.2;
