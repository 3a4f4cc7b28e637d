//! Memoization of resolved rule sets.

use crate::resolve::EffectiveRuleSet;

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Key = (u64, Box<[usize]>);

/// Rule sets keyed by (configuration version, matching override indexes).
///
/// Files matching the same override blocks share one resolved set. Versions
/// below the purge floor are never kept.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: DashMap<Key, Arc<EffectiveRuleSet>>,
    floor: AtomicU64,
}

impl ResolutionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached set for the key, computing it on a miss.
    ///
    /// `compute` runs at most once per key: concurrent callers for the same
    /// key wait on the shard lock and receive the same `Arc`. A version
    /// already purged is computed but not stored.
    pub fn get_or_compute(
        &self,
        version: u64,
        matched: &[usize],
        compute: impl FnOnce() -> EffectiveRuleSet,
    ) -> Arc<EffectiveRuleSet> {
        if version < self.floor.load(Ordering::SeqCst) {
            trace!(version, "stale snapshot, resolving uncached");
            return Arc::new(compute());
        }

        let key: Key = (version, matched.into());
        if let Some(hit) = self.entries.get(&key) {
            trace!(version, ?matched, "resolution cache hit");
            return Arc::clone(hit.value());
        }

        let set = Arc::clone(
            self.entries
                .entry(key.clone())
                .or_insert_with(|| Arc::new(compute()))
                .value(),
        );

        // A purge may have run between the floor check and the insert.
        if version < self.floor.load(Ordering::SeqCst) {
            self.entries.remove(&key);
        }
        set
    }

    /// Raises the floor to `version` and drops every entry below it.
    ///
    /// The floor never moves backwards, so purges may arrive out of order.
    pub fn purge_before(&self, version: u64) {
        let floor = self.floor.fetch_max(version, Ordering::SeqCst).max(version);
        let before = self.entries.len();
        self.entries.retain(|(v, _), _| *v >= floor);
        debug!(
            floor,
            purged = before.saturating_sub(self.entries.len()),
            "purged stale resolution cache entries"
        );
    }

    /// Returns the number of cached sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
