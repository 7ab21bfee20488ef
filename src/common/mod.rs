//! Common types and utilities shared across lrutrace.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`config::SimulationConfig`]
//! - Error types
//! - Identifiers (PageId, SlotId)

pub mod config;
pub mod error;
mod page_id;
mod slot_id;

pub use error::{Error, Result};
pub use page_id::PageId;
pub use slot_id::SlotId;
