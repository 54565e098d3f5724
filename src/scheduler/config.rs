//! Scheduler configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a backtracking search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Promote every soft constraint to hard.
    pub treat_soft_as_hard: bool,
    /// Wall-clock budget for the whole search.
    pub timeout: Duration,
    /// Seed for randomized tie-breaking.
    ///
    /// Stored for reproducibility; the current ordering heuristics are
    /// fully deterministic and consume no randomness.
    pub seed: u64,
    /// Maximum number of recursive search calls.
    pub max_iterations: u64,
}

impl SchedulerConfig {
    /// Creates a configuration with the defaults: soft constraints stay
    /// soft, 60 second timeout, 10 000 iterations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether soft constraints block assignments.
    pub fn with_treat_soft_as_hard(mut self, treat_soft_as_hard: bool) -> Self {
        self.treat_soft_as_hard = treat_soft_as_hard;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the tie-breaking seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            treat_soft_as_hard: false,
            timeout: Duration::from_secs(60),
            seed: 0,
            max_iterations: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::new();
        assert!(!config.treat_soft_as_hard);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.seed, 0);
        assert_eq!(config.max_iterations, 10_000);
    }

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::new()
            .with_treat_soft_as_hard(true)
            .with_timeout(Duration::from_millis(500))
            .with_seed(42)
            .with_max_iterations(100);
        assert!(config.treat_soft_as_hard);
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SchedulerConfig::new().with_max_iterations(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_iterations, 7);
        assert_eq!(back.timeout, config.timeout);
    }
}
