// crates/usecase/src/dto.rs
use usage_trends_domain::History;

/// Result of one history update run.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub history: History,
    /// Commits resolved from the cache.
    pub cache_hits: usize,
    /// Commits counted against the repository this run.
    pub cache_misses: usize,
}
