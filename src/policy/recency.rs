//! Recency-based replacement: LRU and MRU.
//!
//! Both policies keep the same recency stack and differ only in which end
//! of it they evict from.

use std::collections::VecDeque;

use log::trace;

use crate::common::{FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};
use crate::policy::Replacer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Evict {
    /// Head of the stack (LRU).
    LeastRecent,
    /// Tail of the stack (MRU).
    MostRecent,
}

/// LRU / MRU replacer over a recency stack.
///
/// The stack lists resident pages least recently used first. Every access
/// moves the page to the tail of the stack and its slot behind the other
/// resident pages, so the frame table reads in the same order as the stack.
///
/// # Invariant
/// The stack holds exactly the pages resident in the frame table.
pub struct RecencyReplacer<P> {
    /// Resident pages, least recently used at the front.
    stack: VecDeque<P>,

    evict: Evict,
}

impl<P: Page> RecencyReplacer<P> {
    /// Least Recently Used: evict the head of the stack.
    pub fn lru(frame_count: usize) -> Self {
        Self::with_capacity(frame_count, Evict::LeastRecent)
    }

    /// Most Recently Used: evict the tail of the stack.
    pub fn mru(frame_count: usize) -> Self {
        Self::with_capacity(frame_count, Evict::MostRecent)
    }

    fn with_capacity(frame_count: usize, evict: Evict) -> Self {
        Self {
            stack: VecDeque::with_capacity(frame_count),
            evict,
        }
    }

    /// Resident pages, least recently used first.
    pub fn stack(&self) -> impl Iterator<Item = &P> + '_ {
        self.stack.iter()
    }

    fn remove(&mut self, page: &P) {
        if let Some(pos) = self.stack.iter().position(|p| p == page) {
            self.stack.remove(pos);
        }
    }

    /// Push the page in `frame_id` to the most-recent end of both the
    /// stack and the frame table.
    fn touch(&mut self, frames: &mut FrameTable<P>, frame_id: FrameId) {
        if let Some(page) = frames.get(frame_id).cloned() {
            self.remove(&page);
            self.stack.push_back(page);
            frames.move_to_tail(frame_id);
        }
    }
}

impl<P: Page> Replacer<P> for RecencyReplacer<P> {
    fn record_hit(&mut self, frames: &mut FrameTable<P>, frame_id: FrameId, _position: usize) {
        self.touch(frames, frame_id);
    }

    fn select_victim(&mut self, frames: &FrameTable<P>) -> Option<FrameId> {
        let victim = match self.evict {
            Evict::LeastRecent => self.stack.front(),
            Evict::MostRecent => self.stack.back(),
        }?;
        trace!("recency victim {:?} ({:?})", victim, self.evict);
        frames.find(victim)
    }

    fn record_eviction(&mut self, _frame_id: FrameId, victim: &P) {
        self.remove(victim);
    }

    fn record_fill(&mut self, frames: &mut FrameTable<P>, frame_id: FrameId, _position: usize) {
        self.touch(frames, frame_id);
        debug_assert_eq!(self.stack.len(), frames.resident_count());
    }

    fn auxiliary(&self, _frames: &FrameTable<P>) -> Auxiliary<P> {
        Auxiliary::Recency(self.stack.iter().cloned().collect())
    }
}
