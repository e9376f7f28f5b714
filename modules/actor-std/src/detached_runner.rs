use std::{
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Condvar, Mutex,
  },
  thread::{Builder, JoinHandle},
};

use reaktor_actor_core_rs::{ActorCell, QuantumOutcome};
use reaktor_utils_core_rs::sync::ArcShared;

struct RunnerShared {
  cell:    ArcShared<ActorCell>,
  wake:    Mutex<bool>,
  condvar: Condvar,
  stop:    AtomicBool,
}

/// Dedicated thread driving a detached actor's receive loop.
///
/// The loop drains the mailbox without a throughput bound, then parks until
/// the scheduler bridge reports new mail. It ends when the actor terminates
/// or the runner is stopped.
pub struct DetachedRunner {
  shared: Arc<RunnerShared>,
  handle: Mutex<Option<JoinHandle<()>>>,
}

impl DetachedRunner {
  /// Spawns the dedicated thread for `cell`.
  #[must_use]
  pub fn spawn(cell: ArcShared<ActorCell>) -> Self {
    let shared = Arc::new(RunnerShared {
      cell,
      wake: Mutex::new(false),
      condvar: Condvar::new(),
      stop: AtomicBool::new(false),
    });
    let thread_shared = shared.clone();
    let name = format!("reaktor-detached-{}", thread_shared.cell.id());
    let handle = Builder::new()
      .name(name)
      .spawn(move || Self::run(&thread_shared))
      .ok();
    Self { shared, handle: Mutex::new(handle) }
  }

  fn run(shared: &RunnerShared) {
    loop {
      if shared.stop.load(Ordering::Acquire) || shared.cell.is_terminated() {
        break;
      }
      if ActorCell::run_quantum(&shared.cell, None) == QuantumOutcome::Terminated {
        break;
      }
      let mut wake = match shared.wake.lock() {
        | Ok(guard) => guard,
        | Err(_) => break,
      };
      while !*wake && !shared.stop.load(Ordering::Acquire) && shared.cell.mailbox().is_empty() {
        wake = match shared.condvar.wait(wake) {
          | Ok(guard) => guard,
          | Err(_) => return,
        };
      }
      *wake = false;
    }
  }

  /// Wakes the runner after new mail arrived.
  pub fn notify(&self) {
    if let Ok(mut wake) = self.shared.wake.lock() {
      *wake = true;
    }
    self.condvar_notify();
  }

  fn condvar_notify(&self) {
    self.shared.condvar.notify_one();
  }

  /// Asks the runner to stop and joins the thread.
  pub fn stop(&self) {
    self.shared.stop.store(true, Ordering::Release);
    self.notify();
    let handle = self.handle.lock().ok().and_then(|mut guard| guard.take());
    if let Some(handle) = handle {
      let _ = handle.join();
    }
  }

  /// Returns the driven actor's identifier serial.
  #[must_use]
  pub fn cell_serial(&self) -> u64 {
    self.shared.cell.id().serial()
  }
}
