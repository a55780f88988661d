//! Repeated replays: frame-count sweeps and policy comparisons.
//!
//! Every replay owns its state, so the points of a sweep are independent.
//! A sweep runs them on at most `available_parallelism()` scoped workers
//! that pull frame counts from a shared counter. Only counters are kept
//! per point; results are gathered behind a `parking_lot::Mutex` and
//! sorted afterwards.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;
use parking_lot::Mutex;

use crate::common::{Error, Page, ReplayStats, Result, SWEEP_MAX_FRAMES};
use crate::engine::simulator::{count, run, validate};
use crate::policy::Policy;

/// Counters of one replay within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub frame_count: usize,
    pub stats: ReplayStats,
}

impl SweepPoint {
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

/// Replay `sequence` under `policy` for every frame count in
/// `1..=max_frames`.
///
/// Points come back ordered by frame count.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `sequence` is empty or `max_frames`
///   is 0
///
/// # Example
/// ```
/// use pagesim::engine::sweep;
/// use pagesim::policy::Policy;
///
/// let points = sweep(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], Policy::Fifo, 4).unwrap();
/// let faults: Vec<u64> = points.iter().map(|p| p.faults()).collect();
///
/// // Belady's anomaly: four frames fault more than three
/// assert_eq!(faults, vec![12, 12, 9, 10]);
/// ```
pub fn sweep<P: Page + Sync>(
    sequence: &[P],
    policy: Policy,
    max_frames: usize,
) -> Result<Vec<SweepPoint>> {
    validate(sequence, max_frames)?;

    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(max_frames);
    let next = AtomicUsize::new(1);
    let results: Mutex<Vec<(usize, Result<ReplayStats>)>> = Mutex::new(Vec::new());

    let drain = || loop {
        let frame_count = next.fetch_add(1, Ordering::Relaxed);
        if frame_count > max_frames {
            break;
        }
        let stats = count(sequence, frame_count, policy);
        results.lock().push((frame_count, stats));
    };

    thread::scope(|scope| {
        // The calling thread drains too, so the sweep finishes even if no
        // worker can be started
        for worker in 1..workers {
            let spawned = thread::Builder::new()
                .name(format!("pagesim-sweep-{}", worker))
                .spawn_scoped(scope, &drain);
            if let Err(err) = spawned {
                debug!("sweep worker {} not started: {}", worker, err);
                break;
            }
        }
        drain();
    });

    let mut results = results.into_inner();
    results.sort_by_key(|(frame_count, _)| *frame_count);

    let points = results
        .into_iter()
        .map(|(frame_count, stats)| stats.map(|stats| SweepPoint { frame_count, stats }))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "{} sweep over 1..={} frames done on {} workers",
        policy, max_frames, workers
    );
    Ok(points)
}

/// [`sweep`] up to [`SWEEP_MAX_FRAMES`].
pub fn sweep_default<P: Page + Sync>(sequence: &[P], policy: Policy) -> Result<Vec<SweepPoint>> {
    sweep(sequence, policy, SWEEP_MAX_FRAMES)
}

/// Replay `sequence` under every policy with the same frame count.
///
/// Results follow [`Policy::ALL`].
///
/// # Errors
/// - `Error::InvalidConfiguration` if `frame_count` is 0 or `sequence` is
///   empty
pub fn compare<P: Page>(sequence: &[P], frame_count: usize) -> Result<Vec<(Policy, ReplayStats)>> {
    validate(sequence, frame_count)?;

    Policy::ALL
        .iter()
        .map(|&policy| run(sequence, frame_count, policy).map(|replay| (policy, replay.stats)))
        .collect()
}

/// The policy with the fewest faults, first in [`Policy::ALL`] on ties.
pub fn best_policy<P: Page>(sequence: &[P], frame_count: usize) -> Result<Policy> {
    compare(sequence, frame_count)?
        .into_iter()
        .min_by_key(|(_, stats)| stats.faults)
        .map(|(policy, _)| policy)
        .ok_or_else(|| Error::invalid("no policies to compare"))
}
