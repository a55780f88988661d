//! Scenario tests for the replacement policies.
//!
//! Each test replays a small, hand-traced reference string and checks
//! counts, final occupancy and the evicted pages.

use pagesim::engine::{compare, parse_reference_string, replay, replay_named, sweep, Auxiliary};
use pagesim::policy::{NextUse, Policy, RefBit};
use pagesim::{Error, Replay};

/// Textbook reference string used throughout.
const CLASSIC: &str = "7 0 1 2 0 3 0 4 2 3 0 3 2";

/// Reference string showing Belady's anomaly under FIFO.
const ANOMALY: &str = "1 2 3 4 1 2 5 1 2 3 4 5";

fn run(line: &str, frames: usize, policy: Policy) -> Replay<u32> {
    let pages: Vec<u32> = parse_reference_string(line)
        .unwrap()
        .into_iter()
        .map(|p| p.parse().unwrap())
        .collect();
    replay(&pages, frames, policy).unwrap()
}

fn final_frames(replay: &Replay<u32>) -> Vec<Option<u32>> {
    replay.final_frames().unwrap().slots().to_vec()
}

fn evictions(replay: &Replay<u32>) -> Vec<u32> {
    replay.steps.iter().filter_map(|s| s.evicted).collect()
}

// ============================================================================
// All distinct pages
// ============================================================================

#[test]
fn test_all_distinct_always_fault() {
    for policy in Policy::ALL {
        let replay = run("1 2 3 4", 3, policy);
        assert_eq!(replay.faults(), 4, "{}", policy);
        assert_eq!(replay.hits(), 0, "{}", policy);
        assert_eq!(replay.hit_ratio(), 0.0, "{}", policy);
    }
}

#[test]
fn test_all_distinct_lru_evicts_first() {
    let replay = run("1 2 3 4", 3, Policy::Lru);
    assert_eq!(final_frames(&replay), vec![Some(2), Some(3), Some(4)]);
    assert_eq!(evictions(&replay), vec![1]);
}

// ============================================================================
// Classic reference string, three frames
// ============================================================================

#[test]
fn test_classic_fifo() {
    let replay = run(CLASSIC, 3, Policy::Fifo);
    assert_eq!(replay.faults(), 10);
    assert_eq!(replay.hits(), 3);
    assert_eq!(evictions(&replay), vec![7, 0, 1, 2, 3, 0, 4]);
    assert_eq!(final_frames(&replay), vec![Some(0), Some(2), Some(3)]);
}

#[test]
fn test_classic_optimal() {
    let replay = run(CLASSIC, 3, Policy::Optimal);
    assert_eq!(replay.faults(), 7);
    assert_eq!(replay.hits(), 6);
    assert_eq!(evictions(&replay), vec![7, 1, 0, 4]);
    assert_eq!(final_frames(&replay), vec![Some(2), Some(0), Some(3)]);
}

#[test]
fn test_classic_lru() {
    let replay = run(CLASSIC, 3, Policy::Lru);
    assert_eq!(replay.faults(), 9);
    assert_eq!(evictions(&replay), vec![7, 1, 2, 3, 0, 4]);

    // Frames read least recently used first
    assert_eq!(final_frames(&replay), vec![Some(0), Some(3), Some(2)]);
    assert_eq!(
        replay.steps.last().unwrap().auxiliary,
        Auxiliary::Recency(vec![0, 3, 2])
    );
}

#[test]
fn test_classic_mru() {
    let replay = run(CLASSIC, 3, Policy::Mru);
    assert_eq!(replay.faults(), 11);
    assert_eq!(replay.hits(), 2);
    // 7 is never touched again and stays resident throughout
    assert!(replay.steps.iter().skip(1).all(|s| s.frames.contains(&7)));
    assert_eq!(final_frames(&replay), vec![Some(7), Some(4), Some(2)]);
}

#[test]
fn test_classic_lfu() {
    let replay = run(CLASSIC, 3, Policy::Lfu);
    assert_eq!(replay.faults(), 7);
    assert_eq!(evictions(&replay), vec![7, 1, 3, 4]);
    assert_eq!(final_frames(&replay), vec![Some(2), Some(0), Some(3)]);
    assert_eq!(
        replay.steps.last().unwrap().auxiliary,
        Auxiliary::Frequencies(vec![Some(3), Some(4), Some(2)])
    );
}

#[test]
fn test_classic_mfu() {
    let replay = run(CLASSIC, 3, Policy::Mfu);
    assert_eq!(replay.faults(), 10);
    // 0 goes out at count 2; after that every count ties and the cursor decides
    assert_eq!(evictions(&replay), vec![7, 0, 1, 2, 3, 0, 4]);
    assert_eq!(final_frames(&replay), vec![Some(0), Some(2), Some(3)]);
}

#[test]
fn test_classic_second_chance() {
    let replay = run(CLASSIC, 3, Policy::SecondChance);
    assert_eq!(replay.faults(), 9);
    assert_eq!(replay.hits(), 4);
    assert_eq!(evictions(&replay), vec![7, 1, 2, 0, 3, 4]);
    assert_eq!(final_frames(&replay), vec![Some(3), Some(2), Some(0)]);
    assert_eq!(
        replay.steps.last().unwrap().auxiliary,
        Auxiliary::ReferenceBits(vec![RefBit::Set; 3])
    );
}

#[test]
fn test_classic_optimal_never_exceeded() {
    let results = compare(&[7u32, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3).unwrap();
    let optimal = results
        .iter()
        .find(|(p, _)| *p == Policy::Optimal)
        .unwrap()
        .1
        .faults;

    for (policy, stats) in &results {
        assert!(stats.faults >= optimal, "{} beat Optimal", policy);
    }
}

// ============================================================================
// Single page, single frame
// ============================================================================

#[test]
fn test_repeated_single_page() {
    for policy in Policy::ALL {
        let replay = run("5 5 5 5", 1, policy);
        assert_eq!(replay.faults(), 1, "{}", policy);
        assert_eq!(replay.hits(), 3, "{}", policy);
        assert_eq!(replay.hit_ratio(), 0.75, "{}", policy);
        assert_eq!(final_frames(&replay), vec![Some(5)]);
    }
}

// ============================================================================
// Second-Chance sweep order
// ============================================================================

#[test]
fn test_second_chance_full_turn() {
    let replay = run("1 2 3 1 4", 3, Policy::SecondChance);

    assert_eq!(replay.faults(), 4);
    assert_eq!(replay.hits(), 1);

    // Before 4 arrives every bit is set
    assert_eq!(
        replay.steps[3].auxiliary,
        Auxiliary::ReferenceBits(vec![RefBit::Set; 3])
    );

    // The hand clears all three bits, comes back to slot 0 and replaces 1
    let last = replay.steps.last().unwrap();
    assert_eq!(last.evicted, Some(1));
    assert_eq!(last.frames.slots(), &[Some(4), Some(2), Some(3)]);
    assert_eq!(
        last.auxiliary,
        Auxiliary::ReferenceBits(vec![RefBit::Set, RefBit::Clear, RefBit::Clear])
    );
}

// ============================================================================
// Frame-count behaviour
// ============================================================================

#[test]
fn test_fifo_belady_anomaly() {
    assert_eq!(run(ANOMALY, 3, Policy::Fifo).faults(), 9);
    assert_eq!(run(ANOMALY, 4, Policy::Fifo).faults(), 10);
}

#[test]
fn test_no_anomaly_for_lru_optimal_second_chance() {
    assert_eq!(run(ANOMALY, 3, Policy::Lru).faults(), 10);
    assert_eq!(run(ANOMALY, 4, Policy::Lru).faults(), 8);

    assert_eq!(run(ANOMALY, 3, Policy::Optimal).faults(), 7);
    assert_eq!(run(ANOMALY, 4, Policy::Optimal).faults(), 6);

    assert_eq!(run(ANOMALY, 3, Policy::SecondChance).faults(), 10);
    assert_eq!(run(ANOMALY, 4, Policy::SecondChance).faults(), 10);
}

#[test]
fn test_sweep_matches_individual_replays() {
    let pages: Vec<u32> = vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    let points = sweep(&pages, Policy::SecondChance, 8).unwrap();

    for point in points {
        let single = replay(&pages, point.frame_count, Policy::SecondChance).unwrap();
        assert_eq!(point.stats, single.stats);
    }
}

#[test]
fn test_sweep_far_past_default_bound() {
    // 97 distinct pages, each seen about four times
    let pages: Vec<u32> = (0..400).map(|i| i * 7919 % 97).collect();
    let points = sweep(&pages, Policy::Optimal, 2000).unwrap();

    assert_eq!(points.len(), 2000);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.frame_count, i + 1);
        assert_eq!(point.stats.references(), 400);
    }

    for frame_count in (1..=100).chain([500, 2000]) {
        let single = replay(&pages, frame_count, Policy::Optimal).unwrap();
        assert_eq!(points[frame_count - 1].stats, single.stats, "{} frames", frame_count);
    }

    // Enough frames for every page: only compulsory faults remain
    assert!(points[96..].iter().all(|p| p.faults() == 97 && p.stats.evictions == 0));
}

// ============================================================================
// String pages and errors
// ============================================================================

#[test]
fn test_string_pages() {
    let pages = parse_reference_string("a b a c b a").unwrap();
    let replay = replay_named(&pages, 2, "optimal").unwrap();

    assert_eq!(replay.faults(), 4);
    assert_eq!(
        replay.steps[0].auxiliary,
        Auxiliary::Lookahead(vec![Some(NextUse::At(2)), None])
    );
}

#[test]
fn test_errors() {
    assert!(matches!(
        replay(&[1u32, 2], 0, Policy::Fifo),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        replay::<u32>(&[], 2, Policy::Fifo),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        replay_named(&[1u32], 1, "random"),
        Err(Error::UnsupportedPolicy(_))
    ));
}
