//! Error types for lrutrace.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in lrutrace.
///
/// The trace generator itself can only fail with [`Error::InvalidCapacity`].
/// The remaining variants come from the presentation side (navigation and
/// export).
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity below 1 was handed to the trace generator.
    ///
    /// Callers taking user input should default the capacity first
    /// (see [`crate::common::config::SimulationConfig`]).
    #[error("Invalid frame capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// A session operation needed a step but the trace has none.
    #[error("Trace is empty")]
    EmptyTrace,

    /// Seek target lies outside the trace.
    #[error("Step {index} out of range (trace has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// I/O error while writing an export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
