//! Frame slot identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a frame slot in simulated memory.
///
/// Slots are numbered from 0 in the order they were first filled, so
/// `memory[slot.0]` is the page held by that slot.
///
/// # Example
/// ```
/// use lrutrace::SlotId;
///
/// let slot = SlotId::new(2);
/// // Can use directly as index: memory[slot.0]
/// assert_eq!(slot.to_string(), "Slot(2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}
