//! Optimal (Belady / MIN) replacement policy.
//!
//! The only offline policy: it needs the whole reference sequence before
//! the first reference is replayed. The work is split in two phases:
//!
//! 1. [`Lookahead::build`] walks the sequence backwards once and records,
//!    for every position, where the same page is referenced next.
//! 2. [`OptimalReplacer`] replays forwards and evicts the resident page
//!    whose next reference lies furthest ahead.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

use crate::common::{FrameId, Page};
use crate::engine::{Auxiliary, FrameTable};
use crate::policy::Replacer;

/// Position of a page's next reference.
///
/// `Never` compares greater than every `At`, so "never used again" wins
/// any comparison for the furthest next use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NextUse {
    At(usize),
    Never,
}

impl fmt::Display for NextUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextUse::At(position) => write!(f, "{}", position),
            NextUse::Never => write!(f, "inf"),
        }
    }
}

/// Next-use table of a whole reference sequence.
///
/// # Example
/// ```
/// use pagesim::policy::{Lookahead, NextUse};
///
/// let lookahead = Lookahead::build(&[7, 0, 7, 1]);
/// assert_eq!(lookahead.next_use(0), NextUse::At(2));
/// assert_eq!(lookahead.next_use(1), NextUse::Never);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead {
    next: Vec<NextUse>,
}

impl Lookahead {
    /// Build the table in one backward pass.
    pub fn build<P: Page>(sequence: &[P]) -> Self {
        let mut next = vec![NextUse::Never; sequence.len()];
        let mut last_seen: HashMap<&P, usize> = HashMap::new();

        for (position, page) in sequence.iter().enumerate().rev() {
            if let Some(&later) = last_seen.get(page) {
                next[position] = NextUse::At(later);
            }
            last_seen.insert(page, position);
        }

        Self { next }
    }

    /// Where the page referenced at `position` is referenced next.
    ///
    /// Positions past the end of the sequence have no next use.
    #[inline]
    pub fn next_use(&self, position: usize) -> NextUse {
        self.next.get(position).copied().unwrap_or(NextUse::Never)
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}

/// Belady's replacer.
///
/// Each slot remembers the next use of its page as of the page's latest
/// reference (placement or hit). A fault into a full table evicts the slot
/// with the largest recorded next use, the lowest slot on ties.
pub struct OptimalReplacer {
    lookahead: Lookahead,

    /// Recorded next use per slot, `None` while the slot is empty.
    recorded: Vec<Option<NextUse>>,
}

impl OptimalReplacer {
    pub fn new(lookahead: Lookahead, frame_count: usize) -> Self {
        Self {
            lookahead,
            recorded: vec![None; frame_count],
        }
    }

    fn record(&mut self, frame_id: FrameId, position: usize) {
        self.recorded[frame_id.0] = Some(self.lookahead.next_use(position));
    }
}

impl<P: Page> Replacer<P> for OptimalReplacer {
    fn record_hit(&mut self, _frames: &mut FrameTable<P>, frame_id: FrameId, position: usize) {
        self.record(frame_id, position);
    }

    fn select_victim(&mut self, _frames: &FrameTable<P>) -> Option<FrameId> {
        // min_by_key keeps the first of equal keys
        self.recorded
            .iter()
            .enumerate()
            .filter_map(|(i, next)| next.map(|next| (i, next)))
            .min_by_key(|&(_, next)| Reverse(next))
            .map(|(i, _)| FrameId::new(i))
    }

    fn record_fill(&mut self, _frames: &mut FrameTable<P>, frame_id: FrameId, position: usize) {
        self.record(frame_id, position);
    }

    fn auxiliary(&self, _frames: &FrameTable<P>) -> Auxiliary<P> {
        Auxiliary::Lookahead(self.recorded.clone())
    }
}
