//! Policy engine.
//!
//! Replays a reference sequence against one replacement policy and records
//! the full step trace.
//!
//! # Components
//! - [`replay`] / [`Simulator`] - One replay, one policy, one frame count
//! - [`FrameTable`] - The slots pages are loaded into
//! - [`Replay`] / [`Step`] / [`Auxiliary`] - The recorded trace
//! - [`sweep`] / [`compare`] - Repeated replays over frame counts or policies

mod batch;
mod frame_table;
mod simulator;
mod trace;

pub use batch::{best_policy, compare, sweep, sweep_default, SweepPoint};
pub use frame_table::{FrameSnapshot, FrameTable};
pub use simulator::{parse_reference_string, replay, replay_named, Simulator};
pub use trace::{Auxiliary, Replay, Step};
