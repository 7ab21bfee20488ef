//! LRU trace generation.
//!
//! The trace is the complete, precomputed history of one LRU run: one
//! [`StepRecord`] per page reference. Everything downstream (sessions,
//! rendering, export) reads it and never changes it.
//!
//! # Components
//! - [`generate_trace`] - The pure LRU simulation
//! - [`Trace`] - The immutable result
//! - [`StepRecord`] - One reference's outcome
//! - [`MemoryState`] / [`RecencyTable`] / [`LruReplacer`] - Simulation state
//! - [`TraceStats`] - Summary totals

mod generator;
mod memory;
mod recency;
mod replacer;
mod stats;
mod step;

pub use generator::generate_trace;
pub use memory::MemoryState;
pub use recency::RecencyTable;
pub use replacer::LruReplacer;
pub use stats::TraceStats;
pub use step::StepRecord;

use crate::common::PageId;

/// The full step-by-step result of one LRU run.
///
/// Holds the inputs it was computed from alongside the steps, so a trace
/// can be displayed or exported on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    references: Vec<PageId>,
    capacity: usize,
    steps: Vec<StepRecord>,
}

impl Trace {
    pub(crate) fn new(references: Vec<PageId>, capacity: usize, steps: Vec<StepRecord>) -> Self {
        Self {
            references,
            capacity,
            steps,
        }
    }

    /// All step records in reference order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Step record at `index`.
    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Frame capacity the trace was computed with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reference string the trace was computed from.
    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    /// Total faults over the whole run.
    pub fn total_faults(&self) -> usize {
        self.steps.last().map_or(0, |s| s.fault_count_so_far)
    }

    /// Summary totals.
    pub fn stats(&self) -> TraceStats {
        TraceStats::collect(&self.steps, self.capacity)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
