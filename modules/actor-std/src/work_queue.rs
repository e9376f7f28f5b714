//! Work-stealing primitives wrapping [`crossbeam_deque`].
//!
//! Three pieces, shared-nothing where possible:
//!
//! - [`WorkQueue`]: per-worker deque; the owner pushes and pops at the
//!   bottom.
//! - [`WorkStealer`]: handle for other workers to steal from the top.
//! - [`InjectorQueue`]: shared queue for external submissions and
//!   overflow.

use crossbeam_deque::{Injector, Steal, Stealer, Worker};
use reaktor_actor_core_rs::ActorCell;
use reaktor_utils_core_rs::sync::ArcShared;

#[cfg(test)]
mod tests;

type Cell = ArcShared<ActorCell>;

/// Per-worker deque of runnable cells.
pub struct WorkQueue {
  worker: Worker<Cell>,
}

/// Handle for stealing from another worker's [`WorkQueue`].
#[derive(Clone)]
pub struct WorkStealer {
  stealer: Stealer<Cell>,
}

/// Shared injector for external submissions.
pub struct InjectorQueue {
  injector: Injector<Cell>,
}

impl WorkQueue {
  /// Creates a deque and its stealer handle.
  #[must_use]
  pub fn new() -> (Self, WorkStealer) {
    let worker = Worker::new_lifo();
    let stealer = WorkStealer { stealer: worker.stealer() };
    (Self { worker }, stealer)
  }

  /// Pushes a cell at the bottom (owner thread only).
  pub fn push(&self, cell: Cell) {
    self.worker.push(cell);
  }

  /// Pops a cell from the bottom (owner thread only).
  #[must_use]
  pub fn pop(&self) -> Option<Cell> {
    self.worker.pop()
  }

  /// Returns `true` when the deque is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.worker.is_empty()
  }

  pub(crate) fn as_inner(&self) -> &Worker<Cell> {
    &self.worker
  }
}

impl WorkStealer {
  /// Steals one cell from the top of the associated deque, retrying
  /// through contention.
  #[must_use]
  pub fn steal(&self) -> Option<Cell> {
    loop {
      match self.stealer.steal() {
        | Steal::Success(cell) => return Some(cell),
        | Steal::Empty => return None,
        | Steal::Retry => {},
      }
    }
  }

  /// Returns `true` when the associated deque is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.stealer.is_empty()
  }
}

impl InjectorQueue {
  /// Creates an empty injector.
  #[must_use]
  pub fn new() -> Self {
    Self { injector: Injector::new() }
  }

  /// Pushes a cell for any worker to claim.
  pub fn push(&self, cell: Cell) {
    self.injector.push(cell);
  }

  /// Steals a batch into `local` and pops one cell, retrying through
  /// contention.
  #[must_use]
  pub fn steal_into(&self, local: &WorkQueue) -> Option<Cell> {
    loop {
      match self.injector.steal_batch_and_pop(local.as_inner()) {
        | Steal::Success(cell) => return Some(cell),
        | Steal::Empty => return None,
        | Steal::Retry => {},
      }
    }
  }

  /// Returns `true` when the injector is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.injector.is_empty()
  }
}

impl Default for InjectorQueue {
  fn default() -> Self {
    Self::new()
  }
}
