use crate::errors::SourceError;
use kaspa_hashes::Hash;

/// A visited block's identity and DAA score, kept in visiting order by the windowed cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRecord {
    pub hash: Hash,
    pub daa_score: u64,
}

impl BlockRecord {
    pub fn new(hash: Hash, daa_score: u64) -> Self {
        Self { hash, daa_score }
    }
}

/// The part of a block header the walker relies upon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DagBlock {
    pub hash: Hash,
    pub daa_score: u64,
    pub parents_by_level: Vec<Vec<Hash>>,
}

impl DagBlock {
    pub fn new(hash: Hash, daa_score: u64, parents_by_level: Vec<Vec<Hash>>) -> Self {
        Self { hash, daa_score, parents_by_level }
    }

    /// Parents at level zero. Empty for genesis.
    pub fn direct_parents(&self) -> &[Hash] {
        self.parents_by_level.first().map(|parents| parents.as_slice()).unwrap_or(&[])
    }
}

/// Global DAG metadata. Only the pruning point drives the traversal, the rest is informative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DagInfo {
    pub network: String,
    pub pruning_point_hash: Hash,
    pub block_count: u64,
    pub header_count: u64,
    pub virtual_daa_score: u64,
}

/// Outcome of a single block fetch
#[derive(Clone, Debug)]
pub enum FetchResult {
    Fetched(DagBlock),
    Failed(SourceError),
}

impl FetchResult {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchResult::Fetched(_))
    }
}

impl From<Result<DagBlock, SourceError>> for FetchResult {
    fn from(result: Result<DagBlock, SourceError>) -> Self {
        match result {
            Ok(block) => FetchResult::Fetched(block),
            Err(err) => FetchResult::Failed(err),
        }
    }
}
