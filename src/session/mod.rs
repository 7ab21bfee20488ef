//! Simulation sessions.
//!
//! A [`SimulationSession`] owns one trace, a cursor into it, and a playback
//! clock. Moving the cursor only selects an existing [`StepRecord`]; the
//! trace is never recomputed or modified. Starting a new run replaces the
//! trace wholesale.
//!
//! # Example
//! ```
//! use lrutrace::session::SimulationSession;
//!
//! let mut session = SimulationSession::from_input("1,2,3,1", 2, None).unwrap();
//! assert_eq!(session.position(), 0);
//!
//! session.step_forward();
//! session.step_forward();
//! assert_eq!(session.current().unwrap().fault_count_so_far, 3);
//!
//! session.step_back();
//! assert_eq!(session.position(), 1);
//! ```

mod playback;

pub use playback::{Playback, PlaybackState};

use std::time::Duration;

use tracing::debug;

use crate::common::config::SimulationConfig;
use crate::common::{Error, PageId, Result};
use crate::input::{parse_references, ParseWarning};
use crate::trace::{generate_trace, StepRecord, Trace};

/// One user-facing simulation run.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    trace: Trace,

    /// Index of the step currently shown.
    cursor: usize,

    playback: Playback,

    /// Tokens dropped while parsing the reference string, if it came from text.
    warnings: Vec<ParseWarning>,
}

impl SimulationSession {
    /// Wrap an existing trace. The cursor starts on the first step.
    pub fn new(trace: Trace, playback_period: Duration) -> Self {
        Self {
            trace,
            cursor: 0,
            playback: Playback::new(playback_period),
            warnings: Vec::new(),
        }
    }

    /// Run LRU over `references` and open a session on the result.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `config.capacity` is 0
    pub fn start(references: &[PageId], config: SimulationConfig) -> Result<Self> {
        let trace = generate_trace(references, config.capacity)?;
        debug!(steps = trace.len(), capacity = config.capacity, "session started");
        Ok(Self::new(trace, config.playback_period))
    }

    /// Parse raw user input, correct it, and start a session.
    ///
    /// Bad tokens are dropped (see [`warnings`](Self::warnings)) and a
    /// capacity below 1 becomes the default, so this only fails if the
    /// corrected input is still rejected.
    pub fn from_input(
        reference_text: &str,
        capacity: i64,
        playback_period_ms: Option<u64>,
    ) -> Result<Self> {
        let parsed = parse_references(reference_text);
        let config = SimulationConfig::from_user(capacity, playback_period_ms);

        let mut session = Self::start(&parsed.pages, config)?;
        session.warnings = parsed.warnings;
        Ok(session)
    }

    /// Replace the trace with a fresh run. Playback stops and the cursor
    /// returns to the first step.
    pub fn restart(&mut self, references: &[PageId], capacity: usize) -> Result<()> {
        self.trace = generate_trace(references, capacity)?;
        self.cursor = 0;
        self.warnings.clear();
        self.playback.pause();
        debug!(steps = self.trace.len(), capacity, "session restarted");
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Tokens dropped from the reference string.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Index of the step currently shown.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Step currently shown, or `None` for an empty trace.
    pub fn current(&self) -> Option<&StepRecord> {
        self.trace.get(self.cursor)
    }

    /// Like [`current`](Self::current) but as an error for callers that
    /// need a step.
    pub fn require_current(&self) -> Result<&StepRecord> {
        self.current().ok_or(Error::EmptyTrace)
    }

    /// True when there is no later step to move to.
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.trace.len()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move to the next step and return it, or `None` at the end.
    pub fn step_forward(&mut self) -> Option<&StepRecord> {
        if self.is_at_end() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// Move to the previous step and return it, or `None` at the start.
    pub fn step_back(&mut self) -> Option<&StepRecord> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Jump to `index`.
    ///
    /// # Errors
    /// - `Error::EmptyTrace` if there are no steps
    /// - `Error::StepOutOfRange` if `index` is past the last step
    pub fn seek(&mut self, index: usize) -> Result<&StepRecord> {
        let len = self.trace.len();
        if len == 0 {
            return Err(Error::EmptyTrace);
        }
        if index >= len {
            return Err(Error::StepOutOfRange { index, len });
        }
        self.cursor = index;
        Ok(&self.trace.steps()[index])
    }

    /// Return to the first step.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Start playing. Returns `false` (and stays paused) if there is
    /// nothing left to play.
    pub fn play(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.playback.play();
        true
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Change the playback period. Takes effect immediately while playing.
    pub fn set_period(&mut self, period: Duration) {
        self.playback.set_period(period);
    }

    /// Report elapsed time. Advances the cursor by every period that has
    /// passed and returns how many steps it moved.
    ///
    /// Playback pauses itself once the last step is shown.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let due = self.playback.advance(elapsed);

        let mut advanced = 0;
        for _ in 0..due {
            if self.step_forward().is_none() {
                break;
            }
            advanced += 1;
        }

        if self.is_playing() && self.is_at_end() {
            self.playback.pause();
            debug!(position = self.cursor, "playback reached end of trace");
        }

        advanced
    }
}
