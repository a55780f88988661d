//! Simulation configuration.

pub use pagesim_core::config::{
    DEFAULT_FRAME_COUNT, DEFAULT_POLICY_LABEL, EMPTY_SLOT, SWEEP_MAX_FRAMES,
};

use crate::common::{Error, Result};
use crate::policy::Policy;

/// What to replay a sequence against.
///
/// Construction validates the frame count, so a `SimulationConfig` can
/// always be replayed.
///
/// # Example
/// ```
/// use pagesim::common::SimulationConfig;
/// use pagesim::policy::Policy;
///
/// let config = SimulationConfig::new(4, Policy::Lru).unwrap();
/// assert_eq!(config.frame_count(), 4);
///
/// let config = SimulationConfig::from_labels("3", "Second Chance").unwrap();
/// assert_eq!(config.policy(), Policy::SecondChance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    frame_count: usize,
    policy: Policy,
}

impl SimulationConfig {
    /// # Errors
    /// - `Error::InvalidConfiguration` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: Policy) -> Result<Self> {
        validate_frame_count(frame_count)?;
        Ok(Self {
            frame_count,
            policy,
        })
    }

    /// Build a config from user-entered text, e.g. `("3", "LRU")`.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if the frame count is not a positive
    ///   integer
    /// - `Error::UnsupportedPolicy` if the policy label is unknown
    pub fn from_labels(frame_count: &str, policy: &str) -> Result<Self> {
        let policy: Policy = policy.parse()?;
        let frame_count = frame_count.trim().parse::<usize>().map_err(|_| {
            Error::invalid(format!(
                "frame count must be a positive integer, got {:?}",
                frame_count
            ))
        })?;
        Self::new(frame_count, policy)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Default for SimulationConfig {
    /// Three frames under Optimal.
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            policy: Policy::Optimal,
        }
    }
}

pub(crate) fn validate_frame_count(frame_count: usize) -> Result<()> {
    if frame_count == 0 {
        return Err(Error::invalid("frame count must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_labels() {
        let config = SimulationConfig::default();
        assert_eq!(config.frame_count(), DEFAULT_FRAME_COUNT);
        assert_eq!(config.policy().label(), DEFAULT_POLICY_LABEL);
    }

    #[test]
    fn test_zero_frames_rejected() {
        assert!(matches!(
            SimulationConfig::new(0, Policy::Fifo),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_labels() {
        let config = SimulationConfig::from_labels(" 5 ", "mfu").unwrap();
        assert_eq!(config.frame_count(), 5);
        assert_eq!(config.policy(), Policy::Mfu);

        assert!(matches!(
            SimulationConfig::from_labels("-1", "LRU"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SimulationConfig::from_labels("0", "LRU"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SimulationConfig::from_labels("3", "random"),
            Err(Error::UnsupportedPolicy(_))
        ));
    }
}
