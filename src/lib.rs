//! pagesim - A step-by-step simulator for page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Batch Layer (engine::sweep/compare)           │   │
//! │  │   frame counts 1..=N  |  all policies, same frame count  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Replay Loop (engine::replay)               │   │
//! │  │   FrameTable + hit/fault accounting → Step trace         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Replacers (policy/)  [Pluggable]             │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  FIFO | LRU | MRU | LFU | MFU | Second Chance   │   │   │
//! │  │   │           Optimal (offline, lookahead)          │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameId, Error, config)
//! - [`engine`] - Replay loop, frame table, trace, sweeps
//! - [`policy`] - Replacement policy implementations
//!
//! # Quick Start
//! ```
//! use pagesim::engine::{parse_reference_string, replay};
//! use pagesim::policy::Policy;
//!
//! let pages = parse_reference_string("7 0 1 2 0 3 0 4 2 3 0 3 2").unwrap();
//! let trace = replay(&pages, 3, Policy::Lru).unwrap();
//!
//! for step in &trace.steps {
//!     println!("{:>2} {} {}", step.page, step.access, step.frames);
//! }
//! println!("hit ratio {:.2}", trace.hit_ratio());
//! ```

pub mod common;
pub mod engine;
pub mod policy;

// Re-export commonly used items at crate root for convenience
pub use common::{Access, Error, FrameId, Page, ReplayStats, Result, SimulationConfig};
pub use engine::{replay, replay_named, Auxiliary, Replay, Simulator, Step};
pub use policy::Policy;
