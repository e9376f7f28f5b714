use core::hint::spin_loop;

use portable_atomic::{AtomicUsize, Ordering};


/// Wait group tracking an arbitrary number of in-flight tasks.
///
/// Unlike [`crate::concurrent::CountDownLatch`] the count may grow after
/// creation, so it suits fan-out work where the task count is not known up
/// front.
#[derive(Debug, Default)]
pub struct WaitGroup {
  pending: AtomicUsize,
}

impl WaitGroup {
  /// Creates an empty wait group.
  #[must_use]
  pub const fn new() -> Self {
    Self { pending: AtomicUsize::new(0) }
  }

  /// Registers `count` additional in-flight tasks.
  pub fn add(&self, count: usize) {
    self.pending.fetch_add(count, Ordering::AcqRel);
  }

  /// Marks one task as finished.
  pub fn done(&self) {
    self.pending.fetch_sub(1, Ordering::AcqRel);
  }

  /// Returns the number of in-flight tasks.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.pending.load(Ordering::Acquire)
  }

  /// Spins until every registered task has finished.
  pub fn wait(&self) {
    while self.pending.load(Ordering::Acquire) > 0 {
      spin_loop();
    }
  }
}
