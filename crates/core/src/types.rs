//! Core type definitions for pagesim.

use std::fmt;
use std::hash::Hash;

// ============================================================================
// PAGES
// ============================================================================

/// A value that can appear in a reference sequence.
///
/// Pages are opaque tokens: the policies only ever compare them for
/// equality. `Hash` backs the per-page frequency and last-seen maps, and
/// `Debug` keeps eviction logging readable.
///
/// Implemented for every type with the required bounds, so `u32`, `&str`
/// and `String` all work out of the box.
///
/// # Example
/// ```
/// use pagesim_core::Page;
///
/// fn takes_page<P: Page>(_page: P) {}
///
/// takes_page(7u32);
/// takes_page("7");
/// takes_page(String::from("7"));
/// ```
pub trait Page: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Page for T {}

// ============================================================================
// FRAME IDENTIFIERS
// ============================================================================

/// Identifies a slot in the frame table.
///
/// Using `usize` so it can index the slot vector directly:
/// `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use pagesim_core::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// Distance travelled going forward from `from` to `self` on a ring of
    /// `frame_count` slots.
    #[inline]
    pub fn distance_from(self, from: FrameId, frame_count: usize) -> usize {
        (self.0 + frame_count - from.0 % frame_count) % frame_count
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

// ============================================================================
// ACCESS OUTCOME
// ============================================================================

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The page was resident before the reference.
    Hit,
    /// The page was not resident and had to be brought in.
    Fault,
}

impl Access {
    #[inline]
    pub fn is_fault(self) -> bool {
        self == Access::Fault
    }

    #[inline]
    pub fn is_hit(self) -> bool {
        self == Access::Hit
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Hit => write!(f, "hit"),
            Access::Fault => write!(f, "fault"),
        }
    }
}

// ============================================================================
// REPLAY STATISTICS
// ============================================================================

/// Running counters of a replay.
///
/// Every step of a trace carries a copy, so the counters can be checked at
/// any point of the replay and not only at the end.
///
/// # Example
/// ```
/// use pagesim_core::{Access, ReplayStats};
///
/// let mut stats = ReplayStats::default();
/// for access in [Access::Fault, Access::Hit, Access::Hit, Access::Hit] {
///     stats.record(access);
/// }
/// assert_eq!(stats.hit_rate(), 0.75);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// References to pages that were not resident.
    pub faults: u64,

    /// References to pages that were already resident.
    pub hits: u64,

    /// Faults that had to push a resident page out.
    ///
    /// Always `faults` minus the number of initial fills.
    pub evictions: u64,
}

impl ReplayStats {
    /// Count one reference.
    #[inline]
    pub fn record(&mut self, access: Access) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault => self.faults += 1,
        }
    }

    /// Count one eviction.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of references seen so far.
    #[inline]
    pub fn references(&self) -> u64 {
        self.faults + self.hits
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
