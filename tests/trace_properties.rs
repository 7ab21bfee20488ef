//! Property tests for the trace generator.

use std::collections::HashMap;

use lrutrace::export::{fingerprint, trace_to_json};
use lrutrace::{generate_trace, PageId};
use proptest::prelude::*;

/// Small page alphabet so hits and evictions both happen often.
fn reference_string() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((-3i64..12).prop_map(PageId::new), 0..64)
}

fn capacity() -> impl Strategy<Value = usize> {
    1usize..8
}

/// Straightforward LRU using a recency list (front = least recent).
fn reference_lru_faults(refs: &[PageId], capacity: usize) -> usize {
    let mut order: Vec<PageId> = Vec::new();
    let mut faults = 0;
    for &page in refs {
        if let Some(pos) = order.iter().position(|&p| p == page) {
            order.remove(pos);
        } else {
            faults += 1;
            if order.len() == capacity {
                order.remove(0);
            }
        }
        order.push(page);
    }
    faults
}

proptest! {
    #[test]
    fn prop_fault_count_is_cumulative(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();

        let mut expected = 0;
        for step in trace.steps() {
            if step.faulted {
                expected += 1;
            }
            prop_assert_eq!(step.fault_count_so_far, expected);
        }
        prop_assert_eq!(trace.total_faults(), expected);
    }

    #[test]
    fn prop_memory_never_exceeds_capacity(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();
        for step in trace.steps() {
            prop_assert!(step.memory.len() <= cap);
        }
    }

    #[test]
    fn prop_resident_pages_have_a_source(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();

        let mut before: Vec<PageId> = Vec::new();
        for step in trace.steps() {
            for page in &step.memory {
                prop_assert!(before.contains(page) || *page == step.current_page);
            }
            prop_assert!(step.memory.contains(&step.current_page));
            before = step.memory.clone();
        }
    }

    #[test]
    fn prop_step_fields_are_consistent(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();

        for (i, step) in trace.steps().iter().enumerate() {
            prop_assert_eq!(step.step, i);
            prop_assert_eq!(step.current_page, refs[i]);

            if step.faulted {
                prop_assert_eq!(step.incoming_page, Some(step.current_page));
                let slot = step.incoming_slot.unwrap();
                prop_assert_eq!(step.memory[slot.0], step.current_page);
            } else {
                prop_assert!(step.incoming_page.is_none() && step.incoming_slot.is_none());
            }

            prop_assert_eq!(step.outgoing_page.is_some(), step.outgoing_slot.is_some());
            if step.outgoing_slot.is_some() {
                prop_assert_eq!(step.outgoing_slot, step.incoming_slot);
                prop_assert_ne!(step.outgoing_page, Some(step.current_page));
            }
        }
    }

    #[test]
    fn prop_victim_is_least_recently_used(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();

        let mut last_used: HashMap<PageId, usize> = HashMap::new();
        let mut before: Vec<PageId> = Vec::new();
        for step in trace.steps() {
            if let Some(victim) = step.outgoing_page {
                let victim_time = last_used[&victim];
                for page in &before {
                    prop_assert!(last_used[page] >= victim_time);
                }
            }
            last_used.insert(step.current_page, step.step);
            before = step.memory.clone();
        }
    }

    #[test]
    fn prop_matches_recency_list_lru(refs in reference_string(), cap in capacity()) {
        let trace = generate_trace(&refs, cap).unwrap();
        prop_assert_eq!(trace.total_faults(), reference_lru_faults(&refs, cap));
    }

    #[test]
    fn prop_rerun_is_byte_identical(refs in reference_string(), cap in capacity()) {
        let a = generate_trace(&refs, cap).unwrap();
        let b = generate_trace(&refs, cap).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(trace_to_json(&a).unwrap(), trace_to_json(&b).unwrap());
        prop_assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }
}
