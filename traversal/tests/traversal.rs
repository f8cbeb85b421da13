use kaspa_archival_traversal::{
    FrontierScheduler, MissingBlock, TraversalConfig, TraversalError,
    config::DEFAULT_PRUNING_WINDOW,
    testutils::{MockBlockSource, chain},
};
use kaspa_hashes::Hash;
use std::{sync::Arc, time::Duration};

fn h(word: u64) -> Hash {
    Hash::from_u64_word(word)
}

fn config(pruning_window: u64) -> TraversalConfig {
    TraversalConfig::new(pruning_window, Duration::from_secs(30))
}

#[tokio::test]
async fn test_genesis_start() {
    let source = Arc::new(MockBlockSource::new().add(h(1), 0, &[]));
    let scheduler = FrontierScheduler::new(source.clone(), TraversalConfig::default());

    let stats = scheduler.run(h(1)).await;

    assert_eq!(stats.progress.depth, 1);
    assert_eq!(stats.progress.blocks_processed, 1);
    assert_eq!(stats.progress.unique_seen, 1);
    assert_eq!(stats.progress.current_daa_score, Some(0));
    assert!(stats.is_complete());
    assert_eq!(source.total_fetches(), 1);
}

#[tokio::test]
async fn test_diamond_fetches_shared_ancestor_once() {
    // tip -> {a, b} -> g -> root
    let (tip, a, b, g, root) = (h(5), h(4), h(3), h(2), h(1));
    let source = Arc::new(
        MockBlockSource::new().add(tip, 3, &[a, b]).add(a, 2, &[g]).add(b, 2, &[g]).add(g, 1, &[root]).add(root, 0, &[]),
    );
    let scheduler = FrontierScheduler::new(source.clone(), TraversalConfig::default());

    let stats = scheduler.run(tip).await;

    assert_eq!(source.fetch_count(&g), 1);
    assert_eq!(source.total_fetches(), 5);
    assert_eq!(stats.progress.blocks_processed, 5);
    assert_eq!(stats.progress.unique_seen, 5);
    assert_eq!(stats.progress.depth, 4);
    assert!(stats.is_complete());
}

#[tokio::test]
async fn test_missing_block_is_reported_with_discoverer() {
    // tip -> hole -> parent -> genesis, where hole cannot be fetched
    let (tip, hole, parent, genesis) = (h(4), h(3), h(2), h(1));
    let source = Arc::new(
        MockBlockSource::new().add(tip, 3, &[hole]).add(hole, 2, &[parent]).add(parent, 1, &[genesis]).add(genesis, 0, &[]).fail(hole),
    );
    let scheduler = FrontierScheduler::new(source.clone(), TraversalConfig::default());

    let stats = scheduler.run(tip).await;

    assert_eq!(stats.missing_blocks, vec![MissingBlock { hash: hole, discoverer: Some(tip) }]);
    assert_eq!(stats.progress.missing, 1);
    assert_eq!(source.fetch_count(&parent), 0);
    assert_eq!(source.fetch_count(&genesis), 0);
    assert_eq!(stats.progress.depth, 2);
    assert_eq!(stats.progress.blocks_processed, 2);
    assert!(!stats.is_complete());
}

#[tokio::test]
async fn test_unfetchable_start_has_no_discoverer() {
    let source = MockBlockSource::new();
    let stats = FrontierScheduler::new(source, TraversalConfig::default()).run(h(9)).await;

    assert_eq!(stats.missing_blocks, vec![MissingBlock { hash: h(9), discoverer: None }]);
    assert_eq!(stats.progress.depth, 1);
    assert_eq!(stats.progress.current_daa_score, None);
}

#[tokio::test]
async fn test_provenance_keeps_most_recent_child() {
    // Within a level: tip's parents are popped in reverse order, so `a` is processed after `b`
    let (tip, a, b, g) = (h(4), h(3), h(2), h(1));
    let source = Arc::new(MockBlockSource::new().add(tip, 3, &[a, b]).add(a, 2, &[g]).add(b, 2, &[g]).fail(g));
    let stats = FrontierScheduler::new(source.clone(), TraversalConfig::default()).run(tip).await;
    assert_eq!(stats.missing_blocks, vec![MissingBlock { hash: g, discoverer: Some(a) }]);
    assert_eq!(source.fetch_count(&g), 1);

    // Across levels: `hole` is first referenced by tip, then again by `a` one level deeper
    let (tip, a, hole) = (h(13), h(12), h(11));
    let source = Arc::new(MockBlockSource::new().add(tip, 3, &[a, hole]).add(a, 2, &[hole]).fail(hole));
    let stats = FrontierScheduler::new(source.clone(), TraversalConfig::default()).run(tip).await;
    assert_eq!(stats.missing_blocks, vec![MissingBlock { hash: hole, discoverer: Some(a) }]);
    // Missing blocks are never retried
    assert_eq!(source.fetch_count(&hole), 1);
    assert_eq!(stats.progress.blocks_processed, 3);
}

#[tokio::test]
async fn test_long_chain_keeps_cache_bounded() {
    const LEN: u64 = 50_000;
    let (source, tip) = chain(LEN);
    let source = Arc::new(source);
    let scheduler = FrontierScheduler::new(source.clone(), config(DEFAULT_PRUNING_WINDOW));

    let stats = scheduler.run(tip).await;

    assert_eq!(stats.progress.depth, LEN);
    assert_eq!(stats.progress.blocks_processed, LEN);
    assert_eq!(source.total_fetches() as u64, LEN);
    assert!(stats.is_complete());

    // The cache never holds more than the window span plus the level being pruned
    assert_eq!(stats.peak_cache_len as u64, DEFAULT_PRUNING_WINDOW + 1);
    assert_eq!(stats.progress.unique_seen as u64, DEFAULT_PRUNING_WINDOW);
    assert_eq!(stats.evicted, LEN - DEFAULT_PRUNING_WINDOW);
}

#[tokio::test]
async fn test_evicted_block_is_visited_again() {
    // The tip references `shortcut` directly, and the same block is reached again at the
    // bottom of a 20 block chain, long after it left a window of 10
    let (tip, shortcut) = (h(1000), h(999));
    let links = (1..=20).map(h).collect::<Vec<_>>();
    let mut source = MockBlockSource::new().add(tip, 101, &[links[0], shortcut]).add(shortcut, 100, &[]);
    for (i, &link) in links.iter().enumerate() {
        let parent = links.get(i + 1).copied().unwrap_or(shortcut);
        source = source.add(link, 99 - i as u64, &[parent]);
    }
    let source = Arc::new(source);

    let stats = FrontierScheduler::new(source.clone(), config(10)).run(tip).await;

    assert_eq!(source.fetch_count(&shortcut), 2);
    assert_eq!(stats.progress.blocks_processed, 23);
    assert_eq!(stats.progress.depth, 22);
    assert!(stats.is_complete());
}

#[tokio::test]
async fn test_run_from_pruning_point() {
    let (source, tip) = chain(10);
    let stats = FrontierScheduler::new(source.with_pruning_point(tip), TraversalConfig::default()).run_from_pruning_point().await.unwrap();
    assert_eq!(stats.progress.depth, 10);
    assert_eq!(stats.progress.current_daa_score, Some(0));
}

#[tokio::test]
async fn test_dag_info_failure_is_fatal() {
    let (source, _) = chain(3);
    let result = FrontierScheduler::new(source, TraversalConfig::default()).run_from_pruning_point().await;
    assert!(matches!(result, Err(TraversalError::DagInfo(_))));
}
