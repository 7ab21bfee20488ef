//! lrutrace - A step-by-step visualizer for LRU page replacement.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           lrutrace                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Input Layer (input/)                      │   │
//! │  │     "1,2,3,4" → Vec<PageId>  +  capacity defaulting      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Trace Generator (trace/)  [Pure]               │   │
//! │  │   MemoryState + RecencyTable + LruReplacer → Trace       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Presentation (session/, render/, export/)         │   │
//! │  │   cursor + playback clock → text frames, JSON export     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, SlotId, Error, config)
//! - [`input`] - Reference string and frame count parsing
//! - [`trace`] - The LRU simulation and its step records
//! - [`session`] - Cursor and playback over a finished trace
//! - [`render`] - Text rendering of steps and statistics
//! - [`export`] - JSON trace export and text snapshots
//!
//! # Quick Start
//! ```
//! use lrutrace::{generate_trace, PageId};
//!
//! let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2].into_iter().map(PageId).collect();
//! let trace = generate_trace(&refs, 3).unwrap();
//!
//! assert_eq!(trace.len(), 6);
//! assert_eq!(trace.total_faults(), 6);
//! ```

pub mod common;
pub mod export;
pub mod input;
pub mod render;
pub mod session;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, DEFAULT_FRAME_CAPACITY};
pub use common::{Error, PageId, Result, SlotId};

pub use session::SimulationSession;
pub use trace::{generate_trace, StepRecord, Trace, TraceStats};
