//! LRU (Least-Recently-Used) replacement policy.

use crate::common::{PageId, SlotId};
use crate::trace::memory::MemoryState;
use crate::trace::recency::RecencyTable;

/// LRU eviction policy over a [`MemoryState`].
///
/// Picks the resident page whose last access is oldest. Ties go to the
/// lowest slot index.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    recency: RecencyTable,
}

impl LruReplacer {
    /// Create a replacer with no access history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `page` was referenced at position `index`.
    ///
    /// Called on every reference, hit or fault, after any victim for that
    /// reference has been chosen.
    pub fn record_access(&mut self, page: PageId, index: usize) {
        self.recency.record(page, index);
    }

    /// Select the slot to evict from `memory`.
    ///
    /// Scans slots in order and keeps the first page with the strictly
    /// oldest last use. Pages never recorded count as older than any
    /// recorded page. Returns `None` only if `memory` is empty.
    pub fn victim(&self, memory: &MemoryState) -> Option<SlotId> {
        let mut slots = memory.iter();
        let (mut victim, first) = slots.next()?;
        let mut oldest = self.recency.last_used(first);

        for (slot, page) in slots {
            let last_used = self.recency.last_used(page);
            if last_used < oldest {
                oldest = last_used;
                victim = slot;
            }
        }

        Some(victim)
    }

    /// Access history seen so far.
    pub fn recency(&self) -> &RecencyTable {
        &self.recency
    }
}
