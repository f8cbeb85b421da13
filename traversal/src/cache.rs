use crate::{model::BlockRecord, tracker::AncestryTracker};
use std::collections::VecDeque;

/// Visited blocks in first-visit order, bounded by DAA score distance.
///
/// The walk moves toward lower DAA scores, so the front of the queue holds the highest
/// scores. Once the front falls `window` or more above the maximal score of the level just
/// completed, it is evicted and the tracker forgets it. A later path reaching an evicted
/// block visits it again.
pub struct WindowedCache {
    records: VecDeque<BlockRecord>,
    window: u64,
}

impl WindowedCache {
    pub fn new(window: u64) -> Self {
        Self { records: VecDeque::new(), window }
    }

    pub fn push(&mut self, record: BlockRecord) {
        self.records.push_back(record);
    }

    /// Evicts every front record with `daa_score >= level_max_daa_score + window` and
    /// returns the number of evicted records.
    ///
    /// Only the front is inspected: a record with a qualifying score sitting behind a
    /// younger one is kept until it reaches the front.
    pub fn prune(&mut self, level_max_daa_score: u64, tracker: &mut AncestryTracker) -> usize {
        let threshold = level_max_daa_score.saturating_add(self.window);
        let mut evicted = 0;
        while let Some(front) = self.records.front() {
            if front.daa_score < threshold {
                break;
            }
            tracker.forget(&front.hash);
            self.records.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaspa_hashes::Hash;

    fn seeded(window: u64, scores: &[u64]) -> (WindowedCache, AncestryTracker) {
        let mut cache = WindowedCache::new(window);
        let mut tracker = AncestryTracker::new();
        for (i, &score) in scores.iter().enumerate() {
            let hash = Hash::from_u64_word(i as u64 + 1);
            tracker.mark_seen(hash);
            tracker.record_provenance(hash, Hash::from_u64_word(1000 + i as u64));
            cache.push(BlockRecord::new(hash, score));
        }
        (cache, tracker)
    }

    #[test]
    fn test_prune_evicts_aged_front() {
        let (mut cache, mut tracker) = seeded(100, &[350, 300, 250, 200, 150]);
        // Threshold is 150 + 100 = 250, inclusive
        assert_eq!(cache.prune(150, &mut tracker), 3);
        assert_eq!(cache.iter().map(|r| r.daa_score).collect::<Vec<_>>(), vec![200, 150]);
        assert!(cache.iter().all(|r| r.daa_score < 150 + cache.window()));

        for evicted in 1..=3 {
            let hash = Hash::from_u64_word(evicted);
            assert!(!tracker.is_seen(&hash));
            assert_eq!(tracker.discoverer_of(&hash), None);
        }
        assert_eq!(tracker.seen_count(), 2);
        assert_eq!(tracker.provenance_count(), 2);
    }

    #[test]
    fn test_prune_inspects_front_only() {
        let (mut cache, mut tracker) = seeded(10, &[15, 500, 12]);
        assert_eq!(cache.prune(10, &mut tracker), 0);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_prune_never_touches_missing() {
        let (mut cache, mut tracker) = seeded(10, &[100]);
        let hash = Hash::from_u64_word(1);
        tracker.mark_missing(hash);
        assert_eq!(cache.prune(0, &mut tracker), 1);
        assert!(cache.is_empty());
        assert!(tracker.is_missing(&hash));
    }

    #[test]
    fn test_prune_saturates() {
        let (mut cache, mut tracker) = seeded(u64::MAX, &[u64::MAX, 5]);
        assert_eq!(cache.prune(1, &mut tracker), 1);
        assert_eq!(cache.len(), 1);
    }
}
