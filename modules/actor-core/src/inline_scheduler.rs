use alloc::collections::VecDeque;

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared, Flag};

use crate::{actor_cell::ActorCell, quantum_outcome::QuantumOutcome, scheduler_bridge::SchedulerBridge};

/// Scheduler running every quantum on the thread that triggered it.
///
/// The first caller to schedule work becomes the drainer and keeps running
/// quanta until the ready queue empties; nested scheduling during a quantum
/// only appends to the queue. Deterministic and thread-free, which makes it
/// the scheduler of choice for unit tests and `no_std` hosts. Detached
/// actors degrade to cooperative scheduling here; a threaded runtime is
/// required for truly blocking receive loops.
#[derive(Default)]
pub struct InlineScheduler {
  ready:    SpinSyncMutex<VecDeque<ArcShared<ActorCell>>>,
  draining: Flag,
}

impl InlineScheduler {
  /// Creates an idle inline scheduler.
  #[must_use]
  pub const fn new() -> Self {
    Self { ready: SpinSyncMutex::new(VecDeque::new()), draining: Flag::new(false) }
  }

  fn drain(&self) {
    loop {
      let next = self.ready.lock().pop_front();
      let Some(cell) = next else {
        break;
      };
      let limit = cell.throughput_limit();
      if ActorCell::run_quantum(&cell, limit) == QuantumOutcome::MoreWork {
        self.ready.lock().push_back(cell);
      }
    }
  }
}

impl SchedulerBridge for InlineScheduler {
  fn schedule(&self, cell: ArcShared<ActorCell>) {
    self.ready.lock().push_back(cell);
    if self.draining.try_raise() {
      self.drain();
      self.draining.set(false);
      // Work enqueued between the drain and the flag release is picked up
      // here rather than lost.
      if !self.ready.lock().is_empty() && self.draining.try_raise() {
        self.drain();
        self.draining.set(false);
      }
    }
  }

  fn start_detached(&self, cell: ArcShared<ActorCell>) {
    self.schedule(cell);
  }

  fn shutdown(&self) {
    self.ready.lock().clear();
  }
}
