//! Engine configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Configuration for [`ParallelBfs`](super::ParallelBfs).
///
/// Passed explicitly at engine construction; nothing is read from the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BfsConfig {
    /// Worker threads; `0` selects the available hardware parallelism.
    pub threads: usize,
    /// Minimum frontier entries handled by one discovery task.
    pub discovery_grain: usize,
    /// Output size at or below which frontier compaction copies on one thread.
    pub scatter_grain: usize,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            discovery_grain: 64,
            scatter_grain: 4096,
        }
    }
}

impl BfsConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker thread count (`0` = hardware parallelism).
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the minimum frontier entries per discovery task.
    #[must_use]
    pub fn with_discovery_grain(mut self, grain: usize) -> Self {
        self.discovery_grain = grain;
        self
    }

    /// Set the sequential cutoff for frontier compaction.
    #[must_use]
    pub fn with_scatter_grain(mut self, grain: usize) -> Self {
        self.scatter_grain = grain;
        self
    }

    /// The worker count the engine will actually start.
    pub fn resolved_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            self.threads
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_resolution() {
        let config = BfsConfig::new().with_threads(3).with_discovery_grain(1).with_scatter_grain(0);
        assert_eq!(config.resolved_threads(), 3);
        assert_eq!(config.discovery_grain, 1);
        assert_eq!(config.scatter_grain, 0);
        assert!(BfsConfig::default().resolved_threads() >= 1);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: BfsConfig = serde_json::from_str(r#"{ "threads": 4 }"#).unwrap();
        assert_eq!(config, BfsConfig::default().with_threads(4));
    }
}
