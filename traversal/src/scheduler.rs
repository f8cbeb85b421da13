use crate::{
    cache::WindowedCache,
    config::TraversalConfig,
    errors::{TraversalError, TraversalResult},
    model::{BlockRecord, FetchResult},
    reporter::ProgressReporter,
    source::BlockSource,
    stats::{FinalStats, MissingBlock, TraversalProgress},
    tracker::AncestryTracker,
};
use kaspa_archival_core::{debug, info, trace};
use kaspa_hashes::Hash;
use std::{mem, time::Instant};

/// Mutable state of a single run. Created empty by [`FrontierScheduler::run`] and dropped with it.
struct TraversalState {
    tracker: AncestryTracker,
    cache: WindowedCache,
    depth: u64,
    blocks_processed: u64,
    current_daa_score: Option<u64>,
    peak_cache_len: usize,
    evicted: u64,
}

impl TraversalState {
    fn new(window: u64) -> Self {
        Self {
            tracker: AncestryTracker::new(),
            cache: WindowedCache::new(window),
            depth: 0,
            blocks_processed: 0,
            current_daa_score: None,
            peak_cache_len: 0,
            evicted: 0,
        }
    }

    fn progress(&self) -> TraversalProgress {
        TraversalProgress {
            depth: self.depth,
            blocks_processed: self.blocks_processed,
            unique_seen: self.tracker.seen_count(),
            missing: self.tracker.missing_count(),
            current_daa_score: self.current_daa_score,
        }
    }

    fn missing_blocks(&self) -> Vec<MissingBlock> {
        let mut missing = self
            .tracker
            .missing()
            .map(|hash| MissingBlock { hash, discoverer: self.tracker.discoverer_of(&hash) })
            .collect::<Vec<_>>();
        missing.sort_by_key(|x| x.hash);
        missing
    }
}

/// Drives the breadth-first walk from a starting block toward genesis.
///
/// Levels are drained one at a time and blocks are fetched strictly sequentially, so the
/// traversal state is never shared and needs no locking.
pub struct FrontierScheduler<S: BlockSource> {
    source: S,
    config: TraversalConfig,
}

impl<S: BlockSource> FrontierScheduler<S> {
    pub fn new(source: S, config: TraversalConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Queries the block source for the current pruning point.
    ///
    /// Failing here is fatal: without a starting hash there is nothing to walk.
    pub async fn starting_hash(&self) -> TraversalResult<Hash> {
        let dag_info = self.source.get_dag_info().await.map_err(TraversalError::DagInfo)?;
        info!(
            "Network {}: {} blocks, {} headers, virtual DAA score {}",
            dag_info.network, dag_info.block_count, dag_info.header_count, dag_info.virtual_daa_score
        );
        info!("Starting from pruning point {}", dag_info.pruning_point_hash);
        Ok(dag_info.pruning_point_hash)
    }

    /// Resolves the pruning point and walks from it
    pub async fn run_from_pruning_point(&self) -> TraversalResult<FinalStats> {
        let starting_hash = self.starting_hash().await?;
        Ok(self.run(starting_hash).await)
    }

    /// Walks the ancestry of `starting_hash` until no new parents are discovered.
    ///
    /// Blocks which fail to fetch are reported in the returned stats rather than as an error.
    pub async fn run(&self, starting_hash: Hash) -> FinalStats {
        let start = Instant::now();
        let mut reporter = ProgressReporter::new(start, self.config.report_interval);
        let mut state = TraversalState::new(self.config.pruning_window);

        let mut current = Vec::new();
        let mut next = vec![starting_hash];
        while !next.is_empty() {
            mem::swap(&mut current, &mut next);
            let level_max_daa_score = self.drain_level(&mut state, &mut current, &mut next).await;

            state.peak_cache_len = state.peak_cache_len.max(state.cache.len());
            let evicted = state.cache.prune(level_max_daa_score, &mut state.tracker);
            state.evicted += evicted as u64;
            state.depth += 1;
            trace!(
                "Level {} drained: max DAA score {}, {} parents queued, {} cached, {} evicted",
                state.depth,
                level_max_daa_score,
                next.len(),
                state.cache.len(),
                evicted
            );

            reporter.maybe_report(Instant::now(), &state.progress());
        }

        let stats = FinalStats {
            elapsed: reporter.elapsed(Instant::now()),
            progress: state.progress(),
            missing_blocks: state.missing_blocks(),
            peak_cache_len: state.peak_cache_len,
            evicted: state.evicted,
        };
        reporter.final_report(&stats);
        stats
    }

    /// Visits every hash of `current`, queueing discovered parents into `next`.
    /// Returns the maximal DAA score fetched in this level, or zero if none was.
    async fn drain_level(&self, state: &mut TraversalState, current: &mut Vec<Hash>, next: &mut Vec<Hash>) -> u64 {
        let mut level_max_daa_score = 0;
        while let Some(hash) = current.pop() {
            if !state.tracker.mark_seen(hash) {
                continue;
            }
            state.blocks_processed += 1;

            match self.source.get_block(hash).await {
                FetchResult::Fetched(block) => {
                    state.current_daa_score = Some(block.daa_score);
                    level_max_daa_score = level_max_daa_score.max(block.daa_score);
                    state.cache.push(BlockRecord::new(hash, block.daa_score));
                    for &parent in block.direct_parents() {
                        next.push(parent);
                        state.tracker.record_provenance(parent, hash);
                    }
                }
                FetchResult::Failed(err) => {
                    debug!("Block {} is missing: {}", hash, err);
                    state.tracker.mark_missing(hash);
                }
            }
        }
        level_max_daa_score
    }
}
