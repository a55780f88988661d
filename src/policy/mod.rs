//! Page replacement policies (replacers).
//!
//! Every policy plugs into the same replay loop through [`Replacer`]. The
//! loop owns the frame table and the hit/fault accounting; a replacer only
//! decides what a hit does to its bookkeeping and which slot a fault into a
//! full table overwrites.
//!
//! Implements:
//! - [`FifoReplacer`] - Rotating fill cursor, blind to hits
//! - [`RecencyReplacer`] - LRU and MRU over a recency stack
//! - [`FrequencyReplacer`] - LFU and MFU over per-page access counts
//! - [`ClockReplacer`] - Second-Chance with one reference bit per slot
//! - [`OptimalReplacer`] - Belady's offline policy over a [`Lookahead`]

mod clock;
mod fifo;
mod frequency;
mod optimal;
mod recency;

use std::fmt;
use std::str::FromStr;

pub use clock::{ClockReplacer, RefBit};
pub use fifo::FifoReplacer;
pub use frequency::FrequencyReplacer;
pub use optimal::{Lookahead, NextUse, OptimalReplacer};
pub use recency::RecencyReplacer;

use crate::common::{Error, FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};

/// Hooks a policy exposes to the replay loop.
///
/// Per reference the loop calls, in order:
/// 1. [`record_access`](Replacer::record_access) for every reference
/// 2. [`record_hit`](Replacer::record_hit) if the page is resident, or
/// 3. [`select_victim`](Replacer::select_victim) +
///    [`record_eviction`](Replacer::record_eviction) when the table is
///    full, then [`record_fill`](Replacer::record_fill) once the page is in
///    its slot
/// 4. [`auxiliary`](Replacer::auxiliary) to capture the step's bookkeeping
///
/// A fault into a table with an empty slot always fills the lowest-index
/// empty slot; replacers only choose among resident pages.
pub trait Replacer<P: Page> {
    /// Called for every reference before hit/fault handling.
    fn record_access(&mut self, _page: &P) {}

    /// The page in `frame_id` was referenced at `position`.
    fn record_hit(&mut self, frames: &mut FrameTable<P>, frame_id: FrameId, position: usize);

    /// Pick the slot to overwrite. Only called on a full table.
    ///
    /// Returns `None` if the policy cannot pick a victim.
    fn select_victim(&mut self, frames: &FrameTable<P>) -> Option<FrameId>;

    /// `victim` was pushed out of `frame_id`.
    fn record_eviction(&mut self, _frame_id: FrameId, _victim: &P) {}

    /// The faulting page referenced at `position` now occupies `frame_id`.
    fn record_fill(&mut self, frames: &mut FrameTable<P>, frame_id: FrameId, position: usize);

    /// Bookkeeping to record in the step trace.
    fn auxiliary(&self, frames: &FrameTable<P>) -> Auxiliary<P>;
}

/// The supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fifo,
    Lru,
    Mru,
    Lfu,
    Mfu,
    SecondChance,
    Optimal,
}

impl Policy {
    /// Every policy, in the order the simulator lists them.
    pub const ALL: [Policy; 7] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Mru,
        Policy::Lfu,
        Policy::Mfu,
        Policy::SecondChance,
        Policy::Optimal,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
            Policy::Lfu => "LFU",
            Policy::Mfu => "MFU",
            Policy::SecondChance => "Second Chance",
            Policy::Optimal => "Optimal",
        }
    }

    /// Build a fresh replacer for one replay of `sequence`.
    ///
    /// Only Optimal reads `sequence`; the others decide from past
    /// references alone.
    pub(crate) fn replacer<'a, P: Page + 'a>(
        self,
        sequence: &[P],
        frame_count: usize,
    ) -> Box<dyn Replacer<P> + 'a> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(frame_count)),
            Policy::Lru => Box::new(RecencyReplacer::lru(frame_count)),
            Policy::Mru => Box::new(RecencyReplacer::mru(frame_count)),
            Policy::Lfu => Box::new(FrequencyReplacer::lfu(frame_count)),
            Policy::Mfu => Box::new(FrequencyReplacer::mfu(frame_count)),
            Policy::SecondChance => Box::new(ClockReplacer::new(frame_count)),
            Policy::Optimal => Box::new(OptimalReplacer::new(
                Lookahead::build(sequence),
                frame_count,
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Accepts the simulator's labels and a few common aliases,
    /// ignoring case, spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "mru" => Ok(Policy::Mru),
            "lfu" => Ok(Policy::Lfu),
            "mfu" => Ok(Policy::Mfu),
            "secondchance" | "clock" => Ok(Policy::SecondChance),
            "optimal" | "opt" | "belady" | "min" => Ok(Policy::Optimal),
            _ => Err(Error::UnsupportedPolicy(s.to_string())),
        }
    }
}
