//! Last-use bookkeeping for LRU.

use std::collections::BTreeMap;

use crate::common::PageId;

/// Maps each page to the reference index at which it was last accessed.
///
/// Entries are never removed during a run, so evicted pages keep their
/// history. A page with no entry reports `None`, and `None` orders before
/// every `Some(index)`, which makes a never-seen page the oldest candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecencyTable {
    last_used: BTreeMap<PageId, usize>,
}

impl RecencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an access to `page` at reference index `index`.
    pub fn record(&mut self, page: PageId, index: usize) {
        self.last_used.insert(page, index);
    }

    /// Index of the last access to `page`, or `None` if never recorded.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }

    /// Number of distinct pages seen.
    pub fn len(&self) -> usize {
        self.last_used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_used.is_empty()
    }
}
