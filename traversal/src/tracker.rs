use kaspa_consensus_core::{BlockHashMap, BlockHashSet};
use kaspa_hashes::Hash;

/// Seen, missing and provenance bookkeeping of a single traversal.
///
/// Missing hashes are permanent for the run. Seen hashes and provenance entries may be
/// forgotten by the windowed cache, after which the hash can be visited again.
#[derive(Default)]
pub struct AncestryTracker {
    seen: BlockHashSet,
    missing: BlockHashSet,
    /// parent -> the child which most recently referenced it
    provenance: BlockHashMap<Hash>,
}

impl AncestryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `hash` as seen. Returns `false` if it was already seen.
    pub fn mark_seen(&mut self, hash: Hash) -> bool {
        self.seen.insert(hash)
    }

    pub fn is_seen(&self, hash: &Hash) -> bool {
        self.seen.contains(hash)
    }

    pub fn mark_missing(&mut self, hash: Hash) {
        self.missing.insert(hash);
    }

    pub fn is_missing(&self, hash: &Hash) -> bool {
        self.missing.contains(hash)
    }

    /// Records `child` as the discoverer of `parent`, replacing any previous discoverer
    pub fn record_provenance(&mut self, parent: Hash, child: Hash) {
        self.provenance.insert(parent, child);
    }

    pub fn discoverer_of(&self, hash: &Hash) -> Option<Hash> {
        self.provenance.get(hash).copied()
    }

    /// Drops `hash` from the seen set and the provenance map. Missing hashes are kept.
    pub fn forget(&mut self, hash: &Hash) {
        self.seen.remove(hash);
        self.provenance.remove(hash);
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn provenance_count(&self) -> usize {
        self.provenance.len()
    }

    pub fn missing(&self) -> impl Iterator<Item = Hash> + '_ {
        self.missing.iter().copied()
    }
}
