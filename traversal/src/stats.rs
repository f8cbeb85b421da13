use kaspa_hashes::Hash;
use std::time::Duration;

/// Counters of a running traversal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalProgress {
    /// Number of fully drained levels
    pub depth: u64,
    /// Blocks dequeued and fetched, counting re-visits of evicted blocks
    pub blocks_processed: u64,
    /// Current size of the seen set
    pub unique_seen: usize,
    pub missing: usize,
    /// DAA score of the most recently fetched block
    pub current_daa_score: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub elapsed: Duration,
    pub progress: TraversalProgress,
}

/// A block which could not be fetched, along with the child which led to it (if still known)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingBlock {
    pub hash: Hash,
    pub discoverer: Option<Hash>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalStats {
    pub elapsed: Duration,
    pub progress: TraversalProgress,
    /// Sorted by hash
    pub missing_blocks: Vec<MissingBlock>,
    /// Largest size reached by the windowed cache
    pub peak_cache_len: usize,
    pub evicted: u64,
}

impl FinalStats {
    /// Whether every reached ancestor could be fetched
    pub fn is_complete(&self) -> bool {
        self.missing_blocks.is_empty()
    }
}
