//! Simulated network delay for the in-memory store.

use std::time::Duration;

use rand::Rng;

use heroes_app::config::Config;

/// Source of the delay awaited before every store operation.
#[async_trait::async_trait]
pub trait Latency: Send + Sync {
    /// Delay for the next operation.
    fn next_delay(&self) -> Duration;

    async fn wait(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Uniformly random delay in `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomLatency {
    min_ms: u64,
    max_ms: u64,
}

impl RandomLatency {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms,
            max_ms: max_ms.max(min_ms),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.latency_min_ms, config.latency_max_ms)
    }
}

impl Default for RandomLatency {
    fn default() -> Self {
        Self::new(200, 1000)
    }
}

impl Latency for RandomLatency {
    fn next_delay(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        let ms = rand::thread_rng().gen_range(self.min_ms..self.max_ms);
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency(pub Duration);

impl Latency for FixedLatency {
    fn next_delay(&self) -> Duration {
        self.0
    }
}

/// No delay at all, for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
