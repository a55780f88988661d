//! Replay loop - drives one policy over one reference sequence.
//!
//! The loop is shared by every policy. Per reference it:
//! 1. Looks the page up in the frame table (before touching anything)
//! 2. On a hit, lets the policy update its bookkeeping
//! 3. On a fault, fills the first empty slot or asks the policy for a victim
//! 4. Records a [`Step`] with the occupancy, bookkeeping and counters

use log::{debug, trace};

use crate::common::config::validate_frame_count;
use crate::common::{Access, Error, Page, ReplayStats, Result, SimulationConfig};
use crate::engine::{FrameTable, Replay, Step};
use crate::policy::{Policy, Replacer};

/// Replay `sequence` against `policy` with `frame_count` slots.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `frame_count` is 0 or `sequence` is
///   empty
///
/// # Example
/// ```
/// use pagesim::engine::replay;
/// use pagesim::policy::Policy;
///
/// let replay = replay(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3, Policy::Optimal).unwrap();
/// assert_eq!(replay.faults(), 7);
/// assert_eq!(replay.hits(), 6);
/// ```
pub fn replay<P: Page>(sequence: &[P], frame_count: usize, policy: Policy) -> Result<Replay<P>> {
    validate(sequence, frame_count)?;
    run(sequence, frame_count, policy)
}

/// Like [`replay`], with the policy given by its label (e.g. `"Second Chance"`).
///
/// The label is resolved before anything else is looked at.
///
/// # Errors
/// - `Error::UnsupportedPolicy` if the label names no known policy
/// - `Error::InvalidConfiguration` as for [`replay`]
pub fn replay_named<P: Page>(sequence: &[P], frame_count: usize, policy: &str) -> Result<Replay<P>> {
    let policy: Policy = policy.parse()?;
    replay(sequence, frame_count, policy)
}

/// Split a reference string on whitespace, e.g. `"7 0 1 2 0"`.
///
/// # Errors
/// - `Error::InvalidConfiguration` if the line holds no pages
pub fn parse_reference_string(line: &str) -> Result<Vec<&str>> {
    let pages: Vec<&str> = line.split_whitespace().collect();
    if pages.is_empty() {
        return Err(Error::invalid("reference string is empty"));
    }
    Ok(pages)
}

/// Replays sequences under a fixed [`SimulationConfig`].
///
/// # Usage
/// ```
/// use pagesim::common::SimulationConfig;
/// use pagesim::engine::{parse_reference_string, Simulator};
/// use pagesim::policy::Policy;
///
/// let simulator = Simulator::new(SimulationConfig::new(3, Policy::Fifo).unwrap());
/// let pages = parse_reference_string("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
///
/// let replay = simulator.run(&pages).unwrap();
/// assert_eq!(replay.faults(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Replay `sequence` under the configured policy and frame count.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `sequence` is empty
    pub fn run<P: Page>(&self, sequence: &[P]) -> Result<Replay<P>> {
        replay(sequence, self.config.frame_count(), self.config.policy())
    }
}

// ============================================================================
// Internal
// ============================================================================

pub(crate) fn validate<P>(sequence: &[P], frame_count: usize) -> Result<()> {
    validate_frame_count(frame_count)?;
    if sequence.is_empty() {
        return Err(Error::invalid("reference sequence is empty"));
    }
    Ok(())
}

/// Replay an already validated input.
pub(crate) fn run<P: Page>(sequence: &[P], frame_count: usize, policy: Policy) -> Result<Replay<P>> {
    let mut replacer = policy.replacer(sequence, frame_count);
    let mut frames = FrameTable::new(frame_count);
    let mut stats = ReplayStats::default();
    let mut steps = Vec::with_capacity(sequence.len());

    for (position, page) in sequence.iter().enumerate() {
        let (access, evicted) =
            reference(replacer.as_mut(), &mut frames, &mut stats, policy, position, page)?;
        stats.record(access);
        trace!("{} #{} {:?}: {} {:?}", policy, position, page, access, frames.slots());

        steps.push(Step {
            position,
            page: page.clone(),
            access,
            evicted,
            frames: frames.snapshot(),
            auxiliary: replacer.auxiliary(&frames),
            stats,
        });
    }

    debug!(
        "{} over {} references with {} frames: {}",
        policy,
        sequence.len(),
        frame_count,
        stats
    );

    Ok(Replay {
        policy,
        frame_count,
        stats,
        steps,
    })
}

/// Count faults, hits and evictions of an already validated input without
/// recording a trace.
pub(crate) fn count<P: Page>(sequence: &[P], frame_count: usize, policy: Policy) -> Result<ReplayStats> {
    let mut replacer = policy.replacer(sequence, frame_count);
    let mut frames = FrameTable::new(frame_count);
    let mut stats = ReplayStats::default();

    for (position, page) in sequence.iter().enumerate() {
        let (access, _) =
            reference(replacer.as_mut(), &mut frames, &mut stats, policy, position, page)?;
        stats.record(access);
    }
    Ok(stats)
}

/// Apply one reference. Returns the outcome and the evicted page, if any.
fn reference<P: Page, R: Replacer<P> + ?Sized>(
    replacer: &mut R,
    frames: &mut FrameTable<P>,
    stats: &mut ReplayStats,
    policy: Policy,
    position: usize,
    page: &P,
) -> Result<(Access, Option<P>)> {
    replacer.record_access(page);

    if let Some(frame_id) = frames.find(page) {
        replacer.record_hit(frames, frame_id, position);
        return Ok((Access::Hit, None));
    }

    let frame_id = match frames.first_empty() {
        Some(frame_id) => frame_id,
        None => replacer
            .select_victim(frames)
            .ok_or(Error::NoEvictableFrame(policy.label()))?,
    };

    let evicted = frames.install(frame_id, page.clone());
    if let Some(victim) = &evicted {
        debug!("{} evicted {:?} from {} for {:?}", policy, victim, frame_id, page);
        replacer.record_eviction(frame_id, victim);
        stats.record_eviction();
    }
    replacer.record_fill(frames, frame_id, position);

    Ok((Access::Fault, evicted))
}
