//! Step trace produced by a replay.

use std::fmt;

use crate::common::{Access, Page, ReplayStats};
use crate::engine::FrameSnapshot;
use crate::policy::{NextUse, Policy, RefBit};

/// Policy-specific bookkeeping captured after a step.
///
/// Each row is indexed like the frame table except [`Auxiliary::Recency`],
/// which lists resident pages by last access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auxiliary<P> {
    /// FIFO keeps nothing beyond its cursor.
    None,

    /// LRU/MRU recency stack, least recently used first.
    Recency(Vec<P>),

    /// LFU/MFU access count of the page in each slot.
    Frequencies(Vec<Option<u64>>),

    /// Second-Chance reference bit of each slot.
    ReferenceBits(Vec<RefBit>),

    /// Optimal's recorded next use of the page in each slot.
    Lookahead(Vec<Option<NextUse>>),
}

impl<P> Auxiliary<P> {
    pub fn is_none(&self) -> bool {
        matches!(self, Auxiliary::None)
    }
}

/// One entry of the trace, recorded after the reference was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<P> {
    /// Index of the reference in the input sequence.
    pub position: usize,

    /// The referenced page.
    pub page: P,

    /// Whether the page was resident before this reference.
    pub access: Access,

    /// Page pushed out to make room, if the fault found the table full.
    pub evicted: Option<P>,

    /// Slot occupancy after the reference.
    pub frames: FrameSnapshot<P>,

    /// Policy bookkeeping after the reference.
    pub auxiliary: Auxiliary<P>,

    /// Counters including this reference.
    pub stats: ReplayStats,
}

impl<P> Step<P> {
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.access.is_fault()
    }
}

/// Result of replaying one sequence under one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay<P> {
    pub policy: Policy,
    pub frame_count: usize,
    pub stats: ReplayStats,
    pub steps: Vec<Step<P>>,
}

impl<P: Page> Replay<P> {
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Hits divided by the sequence length.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_rate()
    }

    /// Slot occupancy after the last reference.
    ///
    /// `None` only for a replay with no steps, which the engine never
    /// produces.
    pub fn final_frames(&self) -> Option<&FrameSnapshot<P>> {
        self.steps.last().map(|step| &step.frames)
    }

    /// Positions of the references that faulted.
    pub fn fault_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter(|step| step.is_fault())
            .map(|step| step.position)
    }
}

impl<P: Page + fmt::Display> fmt::Display for Replay<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} with {} frames", self.policy, self.frame_count)?;
        for step in &self.steps {
            let marker = if step.is_fault() { "*" } else { " " };
            writeln!(f, "{:>4} {}{}", step.page, marker, step.frames)?;
        }
        write!(f, "{}", self.stats)
    }
}
