//! Common types and utilities shared across pagesim.
//!
//! Re-exports the primitives of `pagesim-core` next to the crate's own
//! configuration layer:
//! - Configuration constants and [`SimulationConfig`]
//! - Error types
//! - Identifiers and counters (FrameId, Access, ReplayStats)

pub mod config;

pub use config::{SimulationConfig, DEFAULT_FRAME_COUNT, EMPTY_SLOT, SWEEP_MAX_FRAMES};
pub use pagesim_core::{Access, Error, FrameId, Page, ReplayStats, Result};
