//! Second-Chance (CLOCK) replacement policy.

use std::fmt;

use log::trace;

use crate::common::{FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};
use crate::policy::Replacer;

/// Reference bit of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefBit {
    /// The slot has never been filled.
    #[default]
    Empty,
    /// Passed over by the hand since its last reference.
    Clear,
    /// Referenced since the hand last passed.
    Set,
}

impl fmt::Display for RefBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefBit::Empty => Ok(()),
            RefBit::Clear => write!(f, "0"),
            RefBit::Set => write!(f, "1"),
        }
    }
}

/// Second-Chance replacer.
///
/// A hand rotates over the slots. On a fault it sweeps forward from where
/// it stopped last: a slot whose bit is set gets its bit cleared and is
/// skipped, the first slot with a clear (or empty) bit takes the new page.
/// A hit only sets the bit; the hand stays put.
///
/// ```text
///   hand
///    ↓
/// ┌─────┬─────┬─────┐        ┌─────┬─────┬─────┐
/// │ 1:1 │ 2:1 │ 3:1 │  + 4 → │ 4:1 │ 2:0 │ 3:0 │
/// └─────┴─────┴─────┘        └─────┴─────┴─────┘
///                                     ↑ hand
/// ```
pub struct ClockReplacer {
    bits: Vec<RefBit>,

    /// Next slot the sweep inspects.
    hand: usize,
}

impl ClockReplacer {
    /// Create a new clock with `frame_count` empty slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            bits: vec![RefBit::Empty; frame_count],
            hand: 0,
        }
    }

    #[inline]
    pub fn hand(&self) -> FrameId {
        FrameId::new(self.hand)
    }

    pub fn bits(&self) -> &[RefBit] {
        &self.bits
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.bits.len();
    }
}

impl<P: Page> Replacer<P> for ClockReplacer {
    fn record_hit(&mut self, _frames: &mut FrameTable<P>, frame_id: FrameId, _position: usize) {
        self.bits[frame_id.0] = RefBit::Set;
    }

    fn select_victim(&mut self, _frames: &FrameTable<P>) -> Option<FrameId> {
        // Two full turns: the first clears every set bit at worst.
        for _ in 0..2 * self.bits.len() {
            match self.bits[self.hand] {
                RefBit::Empty | RefBit::Clear => return Some(self.hand()),
                RefBit::Set => {
                    trace!("second chance for {}", self.hand());
                    self.bits[self.hand] = RefBit::Clear;
                    self.advance();
                }
            }
        }
        None
    }

    fn record_fill(&mut self, _frames: &mut FrameTable<P>, frame_id: FrameId, _position: usize) {
        self.bits[frame_id.0] = RefBit::Set;
        self.hand = frame_id.0;
        self.advance();
    }

    fn auxiliary(&self, _frames: &FrameTable<P>) -> Auxiliary<P> {
        Auxiliary::ReferenceBits(self.bits.clone())
    }
}
