//! Play/pause clock for stepping through a trace.
//!
//! [`Playback`] does not own a timer. The caller reports elapsed time with
//! [`Playback::advance`] and gets back how many whole periods have passed.

use std::time::Duration;

use crate::common::config::{clamp_period, DEFAULT_PLAYBACK_PERIOD};

/// Whether playback is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Cooperative playback clock.
#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,

    /// Time between steps.
    period: Duration,

    /// Time elapsed since the last step, while playing.
    pending: Duration,
}

impl Playback {
    /// Create a paused clock. `period` is clamped to the supported range.
    pub fn new(period: Duration) -> Self {
        Self {
            state: PlaybackState::Paused,
            period: clamp_period(period),
            pending: Duration::ZERO,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start (or keep) playing. Does nothing if already playing.
    pub fn play(&mut self) {
        if !self.is_playing() {
            self.state = PlaybackState::Playing;
            self.pending = Duration::ZERO;
        }
    }

    /// Stop playing and drop any partial period.
    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
        self.pending = Duration::ZERO;
    }

    /// Change the step period, clamped to the supported range.
    ///
    /// While playing, the current partial period is discarded and the new
    /// period starts counting from now.
    pub fn set_period(&mut self, period: Duration) {
        self.period = clamp_period(period);
        self.pending = Duration::ZERO;
    }

    /// Report `elapsed` time and return the number of steps now due.
    ///
    /// Returns 0 while paused. The count saturates at `u32::MAX`; the
    /// remainder of a partial period carries over to the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_playing() {
            return 0;
        }

        let pending = self.pending.saturating_add(elapsed).as_nanos();
        let period = self.period.as_nanos();

        // The remainder is below the period, which is at most a few seconds.
        self.pending = Duration::from_nanos((pending % period) as u64);
        u32::try_from(pending / period).unwrap_or(u32::MAX)
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYBACK_PERIOD)
    }
}
