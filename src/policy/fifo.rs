//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};
use crate::policy::Replacer;

/// Evicts pages in the order they were brought in.
///
/// No per-page age is tracked. A single fill cursor names the slot the
/// next fault overwrites and moves one slot forward on every fault,
/// including the initial fills. Hits never touch it, so the first
/// `frame_count` faults fill slots `0..frame_count` and fault
/// `frame_count + 1` overwrites slot 0 however often its page was hit.
pub struct FifoReplacer {
    /// Slot the next fault writes to.
    cursor: usize,

    frame_count: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer for `frame_count` slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            cursor: 0,
            frame_count,
        }
    }

    /// Slot the next fault overwrites.
    #[inline]
    pub fn cursor(&self) -> FrameId {
        FrameId::new(self.cursor)
    }
}

impl<P: Page> Replacer<P> for FifoReplacer {
    fn record_hit(&mut self, _frames: &mut FrameTable<P>, _frame_id: FrameId, _position: usize) {}

    fn select_victim(&mut self, frames: &FrameTable<P>) -> Option<FrameId> {
        frames.get(self.cursor()).map(|_| self.cursor())
    }

    fn record_fill(&mut self, _frames: &mut FrameTable<P>, _frame_id: FrameId, _position: usize) {
        self.cursor = (self.cursor + 1) % self.frame_count;
    }

    fn auxiliary(&self, _frames: &FrameTable<P>) -> Auxiliary<P> {
        Auxiliary::None
    }
}
