use core::{num::NonZeroUsize, time::Duration};

use crate::poll_tier::PollTier;

/// Tuning knobs for the work-stealing scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
  workers:        usize,
  aggressive:     PollTier,
  moderate:       PollTier,
  relaxed:        PollTier,
  max_throughput: Option<NonZeroUsize>,
}

impl SchedulerConfig {
  /// Creates the default configuration: worker count `0` (resolve to the
  /// hardware parallelism), the standard three-tier ladder, and an
  /// unbounded throughput quantum.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      workers:        0,
      aggressive:     PollTier::new(100, Duration::ZERO),
      moderate:       PollTier::new(500, Duration::from_micros(50)),
      relaxed:        PollTier::new(1_000, Duration::from_millis(10)),
      max_throughput: None,
    }
  }

  /// Overrides the worker count; `0` resolves to the hardware parallelism.
  #[must_use]
  pub const fn with_workers(mut self, workers: usize) -> Self {
    self.workers = workers;
    self
  }

  /// Overrides the aggressive (busy) polling tier.
  #[must_use]
  pub const fn with_aggressive(mut self, tier: PollTier) -> Self {
    self.aggressive = tier;
    self
  }

  /// Overrides the moderate polling tier.
  #[must_use]
  pub const fn with_moderate(mut self, tier: PollTier) -> Self {
    self.moderate = tier;
    self
  }

  /// Overrides the relaxed polling tier.
  #[must_use]
  pub const fn with_relaxed(mut self, tier: PollTier) -> Self {
    self.relaxed = tier;
    self
  }

  /// Bounds how many envelopes one quantum may process.
  #[must_use]
  pub const fn with_max_throughput(mut self, limit: NonZeroUsize) -> Self {
    self.max_throughput = Some(limit);
    self
  }

  /// Returns the configured worker count (`0` = resolve automatically).
  #[must_use]
  pub const fn workers(&self) -> usize {
    self.workers
  }

  /// Returns the aggressive tier.
  #[must_use]
  pub const fn aggressive(&self) -> PollTier {
    self.aggressive
  }

  /// Returns the moderate tier.
  #[must_use]
  pub const fn moderate(&self) -> PollTier {
    self.moderate
  }

  /// Returns the relaxed tier.
  #[must_use]
  pub const fn relaxed(&self) -> PollTier {
    self.relaxed
  }

  /// Returns the throughput quantum; `None` is unbounded.
  #[must_use]
  pub const fn max_throughput(&self) -> Option<NonZeroUsize> {
    self.max_throughput
  }
}

impl Default for SchedulerConfig {
  fn default() -> Self {
    Self::new()
  }
}
