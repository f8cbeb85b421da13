use crate::stats::{FinalStats, ProgressSnapshot, TraversalProgress};
use kaspa_archival_core::info;
use std::time::{Duration, Instant};

/// Emits periodic progress summaries and the final report through the logger
pub struct ProgressReporter {
    start: Instant,
    last_report: Instant,
    interval: Duration,
}

impl ProgressReporter {
    pub fn new(start: Instant, interval: Duration) -> Self {
        Self { start, last_report: start, interval }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Reports `progress` if at least the configured interval passed since the previous report
    pub fn maybe_report(&mut self, now: Instant, progress: &TraversalProgress) -> Option<ProgressSnapshot> {
        if now.saturating_duration_since(self.last_report) < self.interval {
            return None;
        }
        self.last_report = now;
        let snapshot = ProgressSnapshot { elapsed: self.elapsed(now), progress: progress.clone() };
        Self::log_snapshot(&snapshot);
        Some(snapshot)
    }

    fn log_snapshot(snapshot: &ProgressSnapshot) {
        let progress = &snapshot.progress;
        info!("========== SUMMARY ==========");
        info!("Runtime: {:.2} seconds", snapshot.elapsed.as_secs_f64());
        info!("Depth: {}", progress.depth);
        info!("Blocks processed: {}", progress.blocks_processed);
        info!("Unique blocks seen: {}", progress.unique_seen);
        info!("Missing blocks: {}", progress.missing);
        if let Some(daa_score) = progress.current_daa_score {
            info!("Current DAA score: {}", daa_score);
        }
        info!("=============================");
    }

    pub fn final_report(&self, stats: &FinalStats) {
        let progress = &stats.progress;
        info!("===== FINAL REPORT =====");
        info!("Depth: {}", progress.depth);
        info!("Blocks seen: {}", progress.blocks_processed);
        info!("Unique blocks: {}", progress.unique_seen);
        info!("Missing blocks: {}", progress.missing);
        if let Some(daa_score) = progress.current_daa_score {
            info!("Last DAA score: {}", daa_score);
        }
        info!("Peak cache size: {} ({} evicted)", stats.peak_cache_len, stats.evicted);
        if !stats.missing_blocks.is_empty() {
            info!("Missing block details:");
            for missing in stats.missing_blocks.iter() {
                match missing.discoverer {
                    Some(child) => info!("Missing: {} -> added by {}", missing.hash, child),
                    None => info!("Missing: {} -> no known discoverer", missing.hash),
                }
            }
        }
        info!("Total runtime: {:.2} seconds", stats.elapsed.as_secs_f64());
        info!("========================");
    }
}
