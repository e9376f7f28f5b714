use portable_atomic::{AtomicBool, Ordering};


/// Atomic boolean flag with acquire/release semantics.
#[derive(Debug, Default)]
pub struct Flag(AtomicBool);

impl Flag {
  /// Creates a new flag with the provided initial value.
  #[must_use]
  pub const fn new(initial: bool) -> Self {
    Self(AtomicBool::new(initial))
  }

  /// Returns the current value.
  #[must_use]
  pub fn get(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }

  /// Stores a new value.
  pub fn set(&self, value: bool) {
    self.0.store(value, Ordering::Release);
  }

  /// Sets the flag and returns the previous value.
  pub fn swap(&self, value: bool) -> bool {
    self.0.swap(value, Ordering::AcqRel)
  }

  /// Sets the flag to `true` only when it was `false`; returns `true` on success.
  pub fn try_raise(&self) -> bool {
    self.0.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
  }
}
