//! Politeness delay between fetches
//!
//! The crawl loop waits a uniformly random duration after every iteration,
//! whether the fetch succeeded, was skipped or failed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Draws and sleeps randomized politeness delays
#[derive(Debug)]
pub struct Throttle {
    min_ms: u64,
    max_ms: u64,
    rng: StdRng,
}

impl Throttle {
    /// Creates a throttle over the inclusive range `[min, max]`
    ///
    /// A reversed range is swapped rather than rejected.
    pub fn new(min: Duration, max: Duration, seed: Option<u64>) -> Self {
        let (min_ms, max_ms) = (min.as_millis() as u64, max.as_millis() as u64);
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { min_ms, max_ms, rng }
    }

    /// Draws the next delay without sleeping
    pub fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_ms..=self.max_ms))
    }

    /// Suspends the crawl loop for the next delay
    pub async fn wait(&mut self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        tracing::trace!("Politeness delay: {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}
