use std::time::Duration;
use rand::Rng;
use tracing::trace;

use crate::config::LatencyConfig;

/// Bounds of the artificial network delay, in milliseconds.
///
/// Delays are drawn uniformly from `[min_ms, max_ms)`. When the range is
/// empty (`max_ms <= min_ms`) every call waits exactly `min_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// No delay at all. Handy for tests.
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.min_ms == 0 && self.max_ms <= self.min_ms
    }

    /// Picks the delay for one call.
    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::rng())
    }

    /// Same as [`sample`](Self::sample) with a caller-supplied generator.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Duration {
        let millis = if self.max_ms <= self.min_ms {
            self.min_ms
        } else {
            rng.random_range(self.min_ms..self.max_ms)
        };
        trace!("Sampled latency of {}ms", millis);
        Duration::from_millis(millis)
    }
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self::new(100, 600)
    }
}

impl From<&LatencyConfig> for LatencyRange {
    fn from(config: &LatencyConfig) -> Self {
        Self::new(config.min_ms, config.max_ms)
    }
}
