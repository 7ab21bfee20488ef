//! Trace Generator - runs LRU over a whole reference string.
//!
//! [`generate_trace`] is a pure function: all state lives in a private
//! `Simulator` that is created for one call and dropped at the end.

use tracing::{debug, trace};

use crate::common::{Error, PageId, Result, SlotId};
use crate::trace::memory::MemoryState;
use crate::trace::replacer::LruReplacer;
use crate::trace::step::StepRecord;
use crate::trace::Trace;

/// Run LRU over `references` with `capacity` frame slots.
///
/// Produces one [`StepRecord`] per reference. The same inputs always
/// produce the same trace.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
///
/// # Example
/// ```
/// use lrutrace::{generate_trace, PageId, SlotId};
///
/// let trace = generate_trace(&[PageId(7)], 1).unwrap();
/// let step = &trace.steps()[0];
/// assert!(step.faulted);
/// assert_eq!(step.incoming_slot, Some(SlotId(0)));
/// assert_eq!(step.outgoing_page, None);
/// ```
pub fn generate_trace(references: &[PageId], capacity: usize) -> Result<Trace> {
    if capacity < 1 {
        return Err(Error::InvalidCapacity(capacity));
    }

    let mut simulator = Simulator::new(capacity);
    let steps: Vec<StepRecord> = references
        .iter()
        .enumerate()
        .map(|(index, &page)| simulator.access(index, page))
        .collect();

    debug!(
        references = references.len(),
        capacity,
        faults = simulator.fault_count,
        "generated LRU trace"
    );

    Ok(Trace::new(references.to_vec(), capacity, steps))
}

/// What happened to memory on one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Residency {
    /// Page was already resident.
    Hit,

    /// Page went into a free slot.
    Loaded { slot: SlotId },

    /// Page replaced `evicted` in `slot`.
    Replaced { slot: SlotId, evicted: PageId },
}

/// Mutable state of one simulation run.
struct Simulator {
    /// Resident pages by slot.
    memory: MemoryState,

    /// Eviction policy (owns the recency table).
    replacer: LruReplacer,

    /// Faults so far.
    fault_count: usize,
}

impl Simulator {
    fn new(capacity: usize) -> Self {
        Self {
            memory: MemoryState::with_capacity(capacity),
            replacer: LruReplacer::new(),
            fault_count: 0,
        }
    }

    /// Process the reference to `page` at position `index`.
    fn access(&mut self, index: usize, page: PageId) -> StepRecord {
        let residency = if self.memory.contains(page) {
            Residency::Hit
        } else {
            self.handle_fault(page)
        };

        // Only after victim selection, so the page cannot evict itself
        self.replacer.record_access(page, index);

        trace!(step = index, page = page.0, ?residency, "processed reference");
        self.record(index, page, residency)
    }

    /// Bring `page` into memory, evicting if no slot is free.
    fn handle_fault(&mut self, page: PageId) -> Residency {
        self.fault_count += 1;

        if !self.memory.is_full() {
            return Residency::Loaded {
                slot: self.memory.push(page),
            };
        }

        // generate_trace rejects capacity 0, so full memory is never empty.
        let victim = self.replacer.victim(&self.memory);
        debug_assert!(victim.is_some(), "full memory yielded no victim");
        let slot = victim.unwrap_or(SlotId::new(0));
        let evicted = self.memory.replace(slot, page);
        Residency::Replaced { slot, evicted }
    }

    fn record(&self, index: usize, page: PageId, residency: Residency) -> StepRecord {
        let (incoming_slot, outgoing) = match residency {
            Residency::Hit => (None, None),
            Residency::Loaded { slot } => (Some(slot), None),
            Residency::Replaced { slot, evicted } => (Some(slot), Some((evicted, slot))),
        };

        StepRecord {
            step: index,
            current_page: page,
            memory: self.memory.snapshot(),
            faulted: residency != Residency::Hit,
            fault_count_so_far: self.fault_count,
            incoming_page: incoming_slot.map(|_| page),
            incoming_slot,
            outgoing_page: outgoing.map(|(evicted, _)| evicted),
            outgoing_slot: outgoing.map(|(_, slot)| slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn memory(ids: &[i64]) -> Vec<PageId> {
        refs(ids)
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = generate_trace(&refs(&[1, 2]), 0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_empty_references() {
        let trace = generate_trace(&[], 3).unwrap();
        assert!(trace.is_empty());
        assert_eq!(trace.total_faults(), 0);
    }

    #[test]
    fn test_fill_without_eviction() {
        let trace = generate_trace(&refs(&[1, 2, 3]), 3).unwrap();

        for (i, step) in trace.steps().iter().enumerate() {
            assert!(step.faulted);
            assert_eq!(step.incoming_slot, Some(SlotId(i)));
            assert_eq!(step.incoming_page, Some(step.current_page));
            assert_eq!(step.outgoing_page, None);
            assert_eq!(step.outgoing_slot, None);
        }
        assert_eq!(trace.steps()[2].memory, memory(&[1, 2, 3]));
        assert_eq!(trace.total_faults(), 3);
    }

    #[test]
    fn test_hit_leaves_memory_alone() {
        let trace = generate_trace(&refs(&[1, 2, 1]), 2).unwrap();
        let hit = &trace.steps()[2];

        assert!(!hit.faulted);
        assert_eq!(hit.fault_count_so_far, 2);
        assert_eq!(hit.memory, memory(&[1, 2]));
        assert_eq!(hit.incoming_page, None);
        assert_eq!(hit.incoming_slot, None);
        assert_eq!(hit.outgoing_page, None);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        // 1 is refreshed at step 2, so 2 is the LRU page at step 3
        let trace = generate_trace(&refs(&[1, 2, 1, 3]), 2).unwrap();
        let step = &trace.steps()[3];

        assert!(step.faulted);
        assert_eq!(step.outgoing_page, Some(PageId(2)));
        assert_eq!(step.outgoing_slot, Some(SlotId(1)));
        assert_eq!(step.incoming_page, Some(PageId(3)));
        assert_eq!(step.incoming_slot, Some(SlotId(1)));
        assert_eq!(step.memory, memory(&[1, 3]));
    }

    #[test]
    fn test_single_frame_always_replaces_slot_zero() {
        let trace = generate_trace(&refs(&[1, 2, 2, 3]), 1).unwrap();
        let steps = trace.steps();

        assert_eq!(steps[1].outgoing_page, Some(PageId(1)));
        assert_eq!(steps[1].outgoing_slot, Some(SlotId(0)));
        assert!(!steps[2].faulted);
        assert_eq!(steps[3].outgoing_page, Some(PageId(2)));
        assert_eq!(steps[3].memory, memory(&[3]));
        assert_eq!(trace.total_faults(), 3);
    }

    #[test]
    fn test_every_fault_on_full_memory_evicts() {
        let distinct: Vec<PageId> = (0..20).map(PageId::new).collect();
        for capacity in 1..=4 {
            let trace = generate_trace(&distinct, capacity).unwrap();
            for step in &trace.steps()[capacity..] {
                let evicted = step.outgoing_page.unwrap();
                assert_eq!(evicted, PageId::new(step.step as i64 - capacity as i64));
                assert_eq!(step.memory.len(), capacity);
            }
        }
    }

    #[test]
    fn test_textbook_reference_string() {
        let trace = generate_trace(&refs(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]), 3).unwrap();
        let steps = trace.steps();

        let expected_memory: [&[i64]; 12] = [
            &[1],
            &[1, 2],
            &[1, 2, 3],
            &[4, 2, 3],
            &[4, 1, 3],
            &[4, 1, 2],
            &[5, 1, 2],
            &[5, 1, 2],
            &[5, 1, 2],
            &[3, 1, 2],
            &[3, 4, 2],
            &[3, 4, 5],
        ];
        for (step, expected) in steps.iter().zip(expected_memory) {
            assert_eq!(step.memory, memory(expected), "step {}", step.step);
        }

        let hits: Vec<usize> = steps.iter().filter(|s| !s.faulted).map(|s| s.step).collect();
        assert_eq!(hits, vec![7, 8]);
        assert_eq!(trace.total_faults(), 10);
    }

    #[test]
    fn test_negative_and_large_page_ids() {
        let trace = generate_trace(&refs(&[-1, i64::MAX, -1, i64::MIN]), 2).unwrap();
        let last = &trace.steps()[3];
        assert_eq!(last.outgoing_page, Some(PageId(i64::MAX)));
        assert_eq!(last.memory, memory(&[-1, i64::MIN]));
    }

    #[test]
    fn test_fault_count_is_cumulative() {
        let trace = generate_trace(&refs(&[1, 1, 2, 2, 3]), 2).unwrap();
        let counts: Vec<usize> = trace.steps().iter().map(|s| s.fault_count_so_far).collect();
        assert_eq!(counts, vec![1, 1, 2, 2, 3]);
    }
}
