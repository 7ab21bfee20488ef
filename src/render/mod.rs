//! Text rendering of trace steps.
//!
//! [`StepView`] draws one step the way the visualizer shows it: a header
//! with progress and fault count, one line per frame slot, and a hit/fault
//! banner. [`StatsTable`] draws the run summary.
//!
//! ```text
//! LRU Page Replacement Simulation
//! Step: 5 / 12
//! Reference Page: 1
//! Page Faults So Far: 5
//!
//! Frames:
//!   [0] Page 4
//!   [1] Page 1    <- in (out: Page 2)
//!   [2] Page 3
//!
//! Page Fault!
//! ```

use std::fmt;

use crate::common::SlotId;
use crate::trace::{StepRecord, TraceStats};

/// Width of the page column in the frame list.
const CELL_WIDTH: usize = 9;

/// Renders one step of a trace.
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    step: &'a StepRecord,
    capacity: usize,
    total_steps: usize,
}

impl<'a> StepView<'a> {
    /// View `step` from a trace of `total_steps` steps over `capacity` slots.
    pub fn new(step: &'a StepRecord, capacity: usize, total_steps: usize) -> Self {
        Self {
            step,
            capacity,
            total_steps,
        }
    }

    /// Marker text for `slot`, if anything happened there this step.
    fn marker(&self, slot: SlotId) -> Option<String> {
        let step = self.step;

        if step.incoming_slot == Some(slot) {
            return Some(match step.outgoing_page {
                Some(out) if step.outgoing_slot == Some(slot) => format!("<- in (out: {})", out),
                _ => "<- in".to_string(),
            });
        }

        if step.hit_slot() == Some(slot) {
            return Some("<- hit".to_string());
        }

        None
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.step;

        writeln!(f, "LRU Page Replacement Simulation")?;
        writeln!(f, "Step: {} / {}", step.step + 1, self.total_steps)?;
        writeln!(f, "Reference Page: {}", step.current_page.0)?;
        writeln!(f, "Page Faults So Far: {}", step.fault_count_so_far)?;
        writeln!(f)?;
        writeln!(f, "Frames:")?;

        for i in 0..self.capacity {
            let slot = SlotId::new(i);
            let cell = step
                .memory
                .get(i)
                .map_or_else(|| "-".to_string(), |page| page.to_string());

            match self.marker(slot) {
                Some(marker) => {
                    writeln!(f, "  [{}] {:<width$} {}", i, cell, marker, width = CELL_WIDTH)?
                }
                None => writeln!(f, "  [{}] {}", i, cell)?,
            }
        }

        writeln!(f)?;
        write!(f, "{}", step.status_message())
    }
}

/// Renders run totals as a small table.
#[derive(Debug, Clone, Copy)]
pub struct StatsTable<'a> {
    stats: &'a TraceStats,
}

impl<'a> StatsTable<'a> {
    pub fn new(stats: &'a TraceStats) -> Self {
        Self { stats }
    }
}

impl fmt::Display for StatsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let rule = "+-------------+--------+-------------+";

        writeln!(f, "{}", rule)?;
        writeln!(f, "| Total Pages | Frames | Page Faults |")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "| {:>11} | {:>6} | {:>11} |",
            s.total_references, s.frames, s.page_faults
        )?;
        writeln!(f, "{}", rule)?;
        write!(
            f,
            "Hits: {}  Evictions: {}  Hit rate: {:.2}%",
            s.page_hits,
            s.evictions,
            s.hit_rate() * 100.0
        )
    }
}

/// Render `step` to a string.
pub fn render_step(step: &StepRecord, capacity: usize, total_steps: usize) -> String {
    StepView::new(step, capacity, total_steps).to_string()
}

/// Render `stats` to a string.
pub fn render_stats(stats: &TraceStats) -> String {
    StatsTable::new(stats).to_string()
}
