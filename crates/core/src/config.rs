//! Configuration constants for pagesim.

/// Frame count used when the caller does not pick one.
///
/// Matches the default of the interactive tool the engine was built for.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Largest frame count visited by the faults-vs-frames sweep.
///
/// The sweep covers `1..=SWEEP_MAX_FRAMES`. The engine itself has no upper
/// bound on the frame count.
pub const SWEEP_MAX_FRAMES: usize = 15;

/// Rendering of an empty slot in frame snapshots.
pub const EMPTY_SLOT: &str = "-";

/// Policy selected when none is given.
pub const DEFAULT_POLICY_LABEL: &str = "Optimal";
