//! Summary statistics for a trace.

use std::fmt;

use serde::Serialize;

use crate::trace::step::StepRecord;

/// Totals for one simulation run.
///
/// Computed once from the step records; nothing here is updated
/// incrementally.
///
/// # Example
/// ```
/// use lrutrace::{generate_trace, PageId};
///
/// let refs: Vec<PageId> = [1, 2, 1].into_iter().map(PageId).collect();
/// let stats = generate_trace(&refs, 2).unwrap().stats();
/// assert_eq!(stats.page_faults, 2);
/// assert_eq!(stats.page_hits, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStats {
    pub total_references: usize,
    pub frames: usize,
    pub page_faults: usize,
    pub page_hits: usize,
    pub evictions: usize,
}

impl TraceStats {
    /// Tally `steps` simulated with `frames` slots.
    pub fn collect(steps: &[StepRecord], frames: usize) -> Self {
        let page_faults = steps.iter().filter(|s| s.faulted).count();
        let evictions = steps.iter().filter(|s| s.is_eviction()).count();

        Self {
            total_references: steps.len(),
            frames,
            page_faults,
            page_hits: steps.len() - page_faults,
            evictions,
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.total_references == 0 {
            0.0
        } else {
            self.page_hits as f64 / self.total_references as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.total_references == 0 {
            0.0
        } else {
            self.page_faults as f64 / self.total_references as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, frames: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.total_references,
            self.frames,
            self.page_faults,
            self.page_hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
