use core::hint::spin_loop;

use portable_atomic::{AtomicUsize, Ordering};


/// Count-down latch synchronisation primitive.
///
/// Waiters spin until the count reaches zero; counting below zero saturates.
#[derive(Debug)]
pub struct CountDownLatch {
  count: AtomicUsize,
}

impl CountDownLatch {
  /// Creates a new latch with the specified count value.
  #[must_use]
  pub const fn new(count: usize) -> Self {
    Self { count: AtomicUsize::new(count) }
  }

  /// Decrements the count by 1, saturating at zero.
  pub fn count_down(&self) {
    let mut current = self.count.load(Ordering::Acquire);
    while current > 0 {
      match self.count.compare_exchange_weak(current, current - 1, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return,
        | Err(observed) => current = observed,
      }
    }
  }

  /// Returns the remaining count.
  #[must_use]
  pub fn count(&self) -> usize {
    self.count.load(Ordering::Acquire)
  }

  /// Spins the calling thread until the count reaches 0.
  pub fn wait(&self) {
    while self.count.load(Ordering::Acquire) > 0 {
      spin_loop();
    }
  }

  /// Polls once; returns `true` when the count has reached 0.
  #[must_use]
  pub fn is_open(&self) -> bool {
    self.count.load(Ordering::Acquire) == 0
  }
}
