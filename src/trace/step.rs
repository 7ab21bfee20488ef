//! Per-reference step records.

use serde::{Deserialize, Serialize};

use crate::common::{PageId, SlotId};

/// Snapshot of the simulation after processing one reference.
///
/// Serialized with camelCase field names. The incoming/outgoing fields are
/// omitted from the output when they do not apply:
/// - hit: no incoming, no outgoing
/// - fault into a free slot: incoming only
/// - fault with eviction: both, sharing the same slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// Position of this reference in the input (0-based).
    pub step: usize,

    /// Page referenced at this step.
    pub current_page: PageId,

    /// Resident pages by slot, after this step.
    pub memory: Vec<PageId>,

    /// Whether the reference missed.
    pub faulted: bool,

    /// Faults so far, including this step.
    pub fault_count_so_far: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_page: Option<PageId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_slot: Option<SlotId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_page: Option<PageId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_slot: Option<SlotId>,
}

impl StepRecord {
    /// Whether the reference was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.faulted
    }

    /// Whether a page was evicted at this step.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        self.outgoing_page.is_some()
    }

    /// Slot that served a hit, found by scanning memory for the current page.
    pub fn hit_slot(&self) -> Option<SlotId> {
        if self.faulted {
            return None;
        }
        self.memory
            .iter()
            .position(|&p| p == self.current_page)
            .map(SlotId::new)
    }

    /// Short status line for this step.
    pub fn status_message(&self) -> &'static str {
        if self.faulted {
            "Page Fault!"
        } else {
            "Page Hit ✓"
        }
    }
}
