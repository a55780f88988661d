//! Core types and constants for pagesim.
//!
//! This crate provides the fundamental abstractions shared by the policy
//! engine and anything built on top of it:
//!
//! # Types
//! - [`Page`] - Trait for values that can be referenced and cached
//! - [`FrameId`] - Identifier for a slot in the frame table
//! - [`Access`] - Whether a reference hit or faulted
//! - [`ReplayStats`] - Running fault/hit/eviction counters
//!
//! # Constants
//! - [`DEFAULT_FRAME_COUNT`] - Frame count used when none is given (3)
//! - [`SWEEP_MAX_FRAMES`] - Upper bound of the faults-vs-frames sweep (15)
//!
//! # Error Handling
//! - [`Error`] - Unified error type
//! - [`Result<T>`] - Convenient result alias
//!
//! # Example
//! ```
//! use pagesim_core::{Access, FrameId, ReplayStats};
//!
//! let mut stats = ReplayStats::default();
//! stats.record(Access::Fault);
//! stats.record(Access::Hit);
//!
//! assert_eq!(stats.references(), 2);
//! assert_eq!(FrameId::new(1).0, 1);
//! ```

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DEFAULT_FRAME_COUNT, EMPTY_SLOT, SWEEP_MAX_FRAMES};
pub use error::{Error, Result};
pub use types::{Access, FrameId, Page, ReplayStats};
