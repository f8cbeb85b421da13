use std::time::Duration;

/// Blocks whose DAA score is at least this far above the current level are evicted from the seen cache
pub const DEFAULT_PRUNING_WINDOW: u64 = 36_000;

/// Minimal time between two progress reports
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalConfig {
    pub pruning_window: u64,
    pub report_interval: Duration,
}

impl TraversalConfig {
    pub fn new(pruning_window: u64, report_interval: Duration) -> Self {
        Self { pruning_window, report_interval }
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRUNING_WINDOW, DEFAULT_REPORT_INTERVAL)
    }
}
