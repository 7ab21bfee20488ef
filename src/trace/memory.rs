//! Simulated resident memory.
//!
//! [`MemoryState`] is the list of pages currently held in frame slots.
//! Slots are filled left to right and a replacement overwrites a slot in
//! place, so a page's position is its slot, not its recency.

use crate::common::{PageId, SlotId};

/// Pages resident in a fixed number of frame slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryState {
    /// Resident pages, indexed by slot.
    slots: Vec<PageId>,

    /// Maximum number of slots (immutable after construction).
    capacity: usize,
}

impl MemoryState {
    /// Create empty memory with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Slot holding `page`, if resident.
    pub fn slot_of(&self, page: PageId) -> Option<SlotId> {
        self.slots.iter().position(|&p| p == page).map(SlotId::new)
    }

    /// Page held by `slot`, if that slot has been filled.
    pub fn get(&self, slot: SlotId) -> Option<PageId> {
        self.slots.get(slot.0).copied()
    }

    /// Whether every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Place `page` in the next free slot and return that slot.
    ///
    /// Callers must check [`is_full`](Self::is_full) first.
    pub fn push(&mut self, page: PageId) -> SlotId {
        debug_assert!(!self.is_full(), "push into full memory");
        self.slots.push(page);
        SlotId::new(self.slots.len() - 1)
    }

    /// Overwrite `slot` with `page`, returning the page that was there.
    pub fn replace(&mut self, slot: SlotId, page: PageId) -> PageId {
        std::mem::replace(&mut self.slots[slot.0], page)
    }

    /// Iterate over `(slot, page)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &page)| (SlotId::new(i), page))
    }

    /// Resident pages in slot order.
    pub fn as_slice(&self) -> &[PageId] {
        &self.slots
    }

    /// Owned copy of the current contents, for a step record.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }
}
