use std::time::{Duration, Instant};

use reaktor_actor_core_rs::MonotonicClock;

/// Monotonic clock backed by [`std::time::Instant`].
#[derive(Debug)]
pub struct InstantClock {
  start: Instant,
}

impl InstantClock {
  /// Creates a clock whose epoch is the moment of construction.
  #[must_use]
  pub fn new() -> Self {
    Self { start: Instant::now() }
  }
}

impl Default for InstantClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for InstantClock {
  fn now(&self) -> Duration {
    self.start.elapsed()
  }
}
