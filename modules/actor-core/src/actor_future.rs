use core::{hint::spin_loop, time::Duration};

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::monotonic_clock::MonotonicClock;

struct FutureState<T> {
  value:     Option<T>,
  completed: bool,
}

/// Cooperative one-shot future used by the blocking request helpers.
///
/// Completion is sticky: the first value wins, later completions are
/// ignored. Waiting spins, so it is only appropriate while other threads
/// (or the inline scheduler on this thread) make progress.
pub struct ActorFuture<T> {
  state: ArcShared<SpinSyncMutex<FutureState<T>>>,
}

impl<T> ActorFuture<T> {
  /// Creates a pending future.
  #[must_use]
  pub fn pending() -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(FutureState { value: None, completed: false })) }
  }

  /// Completes the future; subsequent completions are ignored.
  pub fn complete(&self, value: T) {
    let mut guard = self.state.lock();
    if guard.completed {
      return;
    }
    guard.value = Some(value);
    guard.completed = true;
  }

  /// Returns `true` when a value has been written.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.state.lock().completed
  }

  /// Attempts to take the value; `None` while pending.
  pub fn try_take(&self) -> Option<T> {
    let mut guard = self.state.lock();
    if guard.completed {
      guard.value.take()
    } else {
      None
    }
  }

  /// Spins until the value is available, then consumes it.
  pub fn wait(self) -> T {
    loop {
      if let Some(value) = self.try_take() {
        return value;
      }
      spin_loop();
    }
  }

  /// Spins until the value is available or `deadline` passes on `clock`.
  pub fn wait_until(self, clock: &dyn MonotonicClock, deadline: Duration) -> Option<T> {
    loop {
      if let Some(value) = self.try_take() {
        return Some(value);
      }
      if clock.now() >= deadline {
        return None;
      }
      spin_loop();
    }
  }
}

impl<T> Clone for ActorFuture<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}

impl<T> Default for ActorFuture<T> {
  fn default() -> Self {
    Self::pending()
  }
}
