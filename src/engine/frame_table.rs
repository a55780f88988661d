//! Frame table - the fixed set of slots pages are loaded into.
//!
//! A [`FrameTable`] holds exactly `frame_count` slots. Each slot is either
//! empty or holds one resident page. A page is "in memory" iff it sits in
//! some slot; which slot only matters to policies that break ties by slot
//! position or rotate a hand over the slots.

use std::fmt;

use crate::common::{FrameId, Page, EMPTY_SLOT};

/// The slots of one replay.
///
/// # Layout
/// ```text
/// ┌─────────┬─────────┬─────────┬─────────┐
/// │ Frame 0 │ Frame 1 │ Frame 2 │ Frame 3 │
/// │ Some(7) │ Some(0) │ Some(1) │  None   │
/// └─────────┴─────────┴─────────┴─────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable<P> {
    slots: Vec<Option<P>>,
}

impl<P: Page> FrameTable<P> {
    /// Create a table of `frame_count` empty slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of slots (immutable after construction).
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot currently holding `page`, if it is resident.
    pub fn find(&self, page: &P) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(page))
            .map(FrameId::new)
    }

    /// Lowest-index empty slot, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Page resident in `frame_id`.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&P> {
        self.slots.get(frame_id.0).and_then(Option::as_ref)
    }

    /// Number of non-empty slots.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over occupied slots in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, &P)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|page| (FrameId::new(i), page)))
    }

    /// All slots in slot order.
    #[inline]
    pub fn slots(&self) -> &[Option<P>] {
        &self.slots
    }

    /// Put `page` into `frame_id`, returning the page it displaced.
    pub fn install(&mut self, frame_id: FrameId, page: P) -> Option<P> {
        self.slots[frame_id.0].replace(page)
    }

    /// Move the page in `frame_id` behind every other resident page.
    ///
    /// Pages after it shift one slot towards the front. With resident pages
    /// packed at the front of the table this keeps them ordered by last
    /// access, oldest first. Returns the slot the page ends up in.
    pub fn move_to_tail(&mut self, frame_id: FrameId) -> FrameId {
        let page = self.slots.remove(frame_id.0);
        let tail = self.first_empty().map_or(self.slots.len(), |id| id.0);
        self.slots.insert(tail, page);
        FrameId::new(tail)
    }

    /// Copy the current occupancy.
    pub fn snapshot(&self) -> FrameSnapshot<P> {
        FrameSnapshot(self.slots.clone())
    }
}

/// Point-in-time copy of a [`FrameTable`].
///
/// Unlike the table this is what ends up in the step trace, so it can be
/// compared, printed and kept around after the replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot<P>(pub Vec<Option<P>>);

impl<P: Page> FrameSnapshot<P> {
    /// Slot contents in slot order.
    #[inline]
    pub fn slots(&self) -> &[Option<P>] {
        &self.0
    }

    /// Resident pages in slot order.
    pub fn pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.0.iter().flatten()
    }

    pub fn contains(&self, page: &P) -> bool {
        self.pages().any(|resident| resident == page)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.0.len()
    }
}

impl<P: fmt::Display> fmt::Display for FrameSnapshot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "{}", EMPTY_SLOT)?,
            }
        }
        write!(f, "]")
    }
}
