//! Configuration for lrutrace.
//!
//! Compile-time defaults plus [`SimulationConfig`], the validated form of
//! whatever the user typed in.

use std::time::Duration;

use tracing::warn;

/// Frame count used when the user supplies a value below 1 (or none at all).
pub const DEFAULT_FRAME_CAPACITY: usize = 3;

/// Delay between steps in play mode.
pub const DEFAULT_PLAYBACK_PERIOD: Duration = Duration::from_millis(600);

/// Fastest allowed playback period.
pub const MIN_PLAYBACK_PERIOD: Duration = Duration::from_millis(100);

/// Slowest allowed playback period.
pub const MAX_PLAYBACK_PERIOD: Duration = Duration::from_millis(3000);

/// Separator between page numbers in a reference string.
pub const REFERENCE_DELIMITER: char = ',';

/// Default file name for a JSON trace export.
pub const TRACE_EXPORT_FILE: &str = "LRU_Execution_Trace.json";

/// Default file name for a rendered-step snapshot.
pub const SNAPSHOT_EXPORT_FILE: &str = "LRU_Snapshot.txt";

/// Validated simulation settings.
///
/// Construct with [`SimulationConfig::from_user`] when the values come from
/// a person; it never fails, it corrects.
///
/// # Example
/// ```
/// use lrutrace::common::config::{SimulationConfig, DEFAULT_FRAME_CAPACITY};
///
/// let config = SimulationConfig::from_user(0, None);
/// assert_eq!(config.capacity, DEFAULT_FRAME_CAPACITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of frame slots (always >= 1).
    pub capacity: usize,

    /// Delay between steps in play mode (always within the min/max bounds).
    pub playback_period: Duration,
}

impl SimulationConfig {
    /// Build a config from raw user input.
    ///
    /// A capacity below 1 is replaced with [`DEFAULT_FRAME_CAPACITY`]. A
    /// playback period is clamped to
    /// [`MIN_PLAYBACK_PERIOD`]..=[`MAX_PLAYBACK_PERIOD`].
    pub fn from_user(capacity: i64, playback_period_ms: Option<u64>) -> Self {
        let capacity = match usize::try_from(capacity) {
            Ok(c) if c >= 1 => c,
            _ => {
                warn!(
                    requested = capacity,
                    default = DEFAULT_FRAME_CAPACITY,
                    "frame capacity below 1, using default"
                );
                DEFAULT_FRAME_CAPACITY
            }
        };

        let playback_period = playback_period_ms
            .map(|ms| clamp_period(Duration::from_millis(ms)))
            .unwrap_or(DEFAULT_PLAYBACK_PERIOD);

        Self {
            capacity,
            playback_period,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_FRAME_CAPACITY,
            playback_period: DEFAULT_PLAYBACK_PERIOD,
        }
    }
}

/// Clamp a playback period into the supported range.
pub fn clamp_period(period: Duration) -> Duration {
    period.clamp(MIN_PLAYBACK_PERIOD, MAX_PLAYBACK_PERIOD)
}
