use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};

use crate::monotonic_clock::MonotonicClock;

/// Test clock advanced explicitly by the caller.
#[derive(Debug, Default)]
pub struct ManualClock {
  nanos: AtomicU64,
}

impl ManualClock {
  /// Creates a clock at time zero.
  #[must_use]
  pub const fn new() -> Self {
    Self { nanos: AtomicU64::new(0) }
  }

  /// Advances the clock by `delta`.
  pub fn advance(&self, delta: Duration) {
    self.nanos.fetch_add(delta.as_nanos() as u64, Ordering::AcqRel);
  }
}

impl MonotonicClock for ManualClock {
  fn now(&self) -> Duration {
    Duration::from_nanos(self.nanos.load(Ordering::Acquire))
  }
}
