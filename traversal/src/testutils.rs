//! In-memory block source for exercising the walker without a node.

use crate::{
    errors::SourceError,
    model::{DagBlock, DagInfo, FetchResult},
    source::BlockSource,
};
use async_trait::async_trait;
use kaspa_consensus_core::{BlockHashMap, BlockHashSet};
use kaspa_hashes::Hash;
use parking_lot::Mutex;

/// A DAG held in memory. Unknown hashes and hashes registered with [`MockBlockSource::fail`]
/// fail to fetch. Every `get_block` call is counted per hash.
#[derive(Default)]
pub struct MockBlockSource {
    blocks: BlockHashMap<DagBlock>,
    failing: BlockHashSet,
    pruning_point: Option<Hash>,
    fetches: Mutex<BlockHashMap<usize>>,
}

impl MockBlockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block with the given direct parents
    pub fn add(mut self, hash: Hash, daa_score: u64, parents: &[Hash]) -> Self {
        let parents_by_level = if parents.is_empty() { vec![] } else { vec![parents.to_vec()] };
        self.blocks.insert(hash, DagBlock::new(hash, daa_score, parents_by_level));
        self
    }

    pub fn add_block(mut self, block: DagBlock) -> Self {
        self.blocks.insert(block.hash, block);
        self
    }

    /// Makes fetching `hash` fail even if the block is known
    pub fn fail(mut self, hash: Hash) -> Self {
        self.failing.insert(hash);
        self
    }

    pub fn with_pruning_point(mut self, hash: Hash) -> Self {
        self.pruning_point = Some(hash);
        self
    }

    pub fn fetch_count(&self, hash: &Hash) -> usize {
        self.fetches.lock().get(hash).copied().unwrap_or_default()
    }

    pub fn total_fetches(&self) -> usize {
        self.fetches.lock().values().sum()
    }
}

#[async_trait]
impl BlockSource for MockBlockSource {
    async fn get_dag_info(&self) -> Result<DagInfo, SourceError> {
        let pruning_point_hash = self.pruning_point.ok_or_else(|| SourceError::from("no pruning point"))?;
        Ok(DagInfo {
            network: "kaspa-simnet".to_string(),
            pruning_point_hash,
            block_count: self.blocks.len() as u64,
            header_count: self.blocks.len() as u64,
            virtual_daa_score: self.blocks.values().map(|b| b.daa_score).max().unwrap_or_default(),
        })
    }

    async fn get_block(&self, hash: Hash) -> FetchResult {
        *self.fetches.lock().entry(hash).or_default() += 1;
        if self.failing.contains(&hash) {
            return FetchResult::Failed(SourceError::General(format!("block {} is unavailable", hash)));
        }
        match self.blocks.get(&hash) {
            Some(block) => FetchResult::Fetched(block.clone()),
            None => FetchResult::Failed(SourceError::General(format!("block {} not found", hash))),
        }
    }
}

/// Builds a chain of `len` blocks, numbered from `1` (genesis) to `len` (tip), where block
/// `i` has DAA score `i - 1`. Returns the source and the tip hash.
pub fn chain(len: u64) -> (MockBlockSource, Hash) {
    let mut source = MockBlockSource::new().add(Hash::from_u64_word(1), 0, &[]);
    for i in 2..=len {
        source = source.add(Hash::from_u64_word(i), i - 1, &[Hash::from_u64_word(i - 1)]);
    }
    (source, Hash::from_u64_word(len))
}
