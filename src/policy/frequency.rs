//! Frequency-based replacement: LFU and MFU.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::{FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};
use crate::policy::Replacer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Evict {
    LeastFrequent,
    MostFrequent,
}

/// LFU / MFU replacer over per-page access counts.
///
/// Every reference bumps its page's count before any eviction decision.
/// Evicting a page resets its count to 0 rather than forgetting it, so a
/// page that comes back starts over.
///
/// # Tie-break
/// Pages with equal counts are ordered by how far their slot sits ahead of
/// the fill cursor, `(slot - cursor) mod frame_count`, smallest first. The
/// cursor moves one slot forward on every fault no matter which slot was
/// written, which makes the distance a stand-in for insertion order.
///
/// - LFU evicts the minimum of `(count, distance)`
/// - MFU evicts the maximum of `(count, -distance)`
pub struct FrequencyReplacer<P> {
    counts: HashMap<P, u64>,

    /// Advanced on every fault.
    cursor: usize,

    frame_count: usize,

    evict: Evict,
}

impl<P: Page> FrequencyReplacer<P> {
    /// Least Frequently Used.
    pub fn lfu(frame_count: usize) -> Self {
        Self::with_rule(frame_count, Evict::LeastFrequent)
    }

    /// Most Frequently Used.
    pub fn mfu(frame_count: usize) -> Self {
        Self::with_rule(frame_count, Evict::MostFrequent)
    }

    fn with_rule(frame_count: usize, evict: Evict) -> Self {
        Self {
            counts: HashMap::new(),
            cursor: 0,
            frame_count,
            evict,
        }
    }

    /// Current access count of `page` (0 if never seen or last evicted).
    pub fn count(&self, page: &P) -> u64 {
        self.counts.get(page).copied().unwrap_or(0)
    }

    fn distance(&self, frame_id: FrameId) -> usize {
        frame_id.distance_from(FrameId::new(self.cursor), self.frame_count)
    }
}

impl<P: Page> Replacer<P> for FrequencyReplacer<P> {
    fn record_access(&mut self, page: &P) {
        *self.counts.entry(page.clone()).or_insert(0) += 1;
    }

    fn record_hit(&mut self, _frames: &mut FrameTable<P>, _frame_id: FrameId, _position: usize) {}

    fn select_victim(&mut self, frames: &FrameTable<P>) -> Option<FrameId> {
        let candidates = frames.occupied();
        let victim = match self.evict {
            Evict::LeastFrequent => candidates
                .min_by_key(|&(frame_id, page)| (self.count(page), self.distance(frame_id))),
            Evict::MostFrequent => candidates
                .min_by_key(|&(frame_id, page)| (Reverse(self.count(page)), self.distance(frame_id))),
        };
        victim.map(|(frame_id, _)| frame_id)
    }

    fn record_eviction(&mut self, _frame_id: FrameId, victim: &P) {
        if let Some(count) = self.counts.get_mut(victim) {
            *count = 0;
        }
    }

    fn record_fill(&mut self, _frames: &mut FrameTable<P>, _frame_id: FrameId, _position: usize) {
        self.cursor = (self.cursor + 1) % self.frame_count;
    }

    fn auxiliary(&self, frames: &FrameTable<P>) -> Auxiliary<P> {
        Auxiliary::Frequencies(
            frames
                .slots()
                .iter()
                .map(|slot| slot.as_ref().map(|page| self.count(page)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(
        replacer: &mut FrequencyReplacer<u32>,
        frames: &mut FrameTable<u32>,
        page: u32,
    ) -> Option<u32> {
        replacer.record_access(&page);
        if let Some(frame_id) = frames.find(&page) {
            replacer.record_hit(frames, frame_id, 0);
            return None;
        }
        let (frame_id, evicted) = match frames.first_empty() {
            Some(frame_id) => (frame_id, None),
            None => {
                let victim = replacer.select_victim(frames).unwrap();
                (victim, frames.get(victim).copied())
            }
        };
        if let Some(evicted) = evicted {
            replacer.record_eviction(frame_id, &evicted);
        }
        frames.install(frame_id, page);
        replacer.record_fill(frames, frame_id, 0);
        evicted
    }

    #[test]
    fn test_lfu_evicts_lowest_count() {
        let mut replacer = FrequencyReplacer::lfu(3);
        let mut frames = FrameTable::new(3);

        for page in [1, 2, 3, 1] {
            reference(&mut replacer, &mut frames, page);
        }

        // 2 and 3 tie at 1; cursor sits on slot 0 so slot 1 is closer
        assert_eq!(reference(&mut replacer, &mut frames, 4), Some(2));
        assert_eq!(frames.slots(), &[Some(1), Some(4), Some(3)]);
        assert_eq!(
            replacer.auxiliary(&frames),
            Auxiliary::Frequencies(vec![Some(2), Some(1), Some(1)])
        );
    }

    #[test]
    fn test_lfu_tie_break_follows_cursor() {
        let mut replacer = FrequencyReplacer::lfu(3);
        let mut frames = FrameTable::new(3);

        for page in [1, 2, 3, 1, 4] {
            reference(&mut replacer, &mut frames, page);
        }

        // Cursor is now on slot 1: page 4 (slot 1) beats page 3 (slot 2)
        assert_eq!(reference(&mut replacer, &mut frames, 2), Some(4));
        assert_eq!(frames.slots(), &[Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_eviction_resets_count() {
        let mut replacer = FrequencyReplacer::lfu(1);
        let mut frames = FrameTable::new(1);

        for page in [1, 1, 1, 2] {
            reference(&mut replacer, &mut frames, page);
        }
        assert_eq!(replacer.count(&1), 0);

        reference(&mut replacer, &mut frames, 1);
        assert_eq!(replacer.count(&1), 1);
    }

    #[test]
    fn test_mfu_evicts_highest_count() {
        let mut replacer = FrequencyReplacer::mfu(3);
        let mut frames = FrameTable::new(3);

        for page in [1, 2, 3, 1] {
            reference(&mut replacer, &mut frames, page);
        }

        assert_eq!(reference(&mut replacer, &mut frames, 4), Some(1));
        assert_eq!(frames.slots(), &[Some(4), Some(2), Some(3)]);

        // All counts tie at 1 with the cursor on slot 1
        assert_eq!(reference(&mut replacer, &mut frames, 1), Some(2));
        assert_eq!(frames.slots(), &[Some(4), Some(1), Some(3)]);
    }
}
