use std::{
  collections::HashMap,
  panic::{catch_unwind, AssertUnwindSafe},
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Condvar, Mutex,
  },
  thread::{available_parallelism, Builder, JoinHandle},
};

use rand::Rng;
use reaktor_actor_core_rs::{ActorCell, PollTier, QuantumOutcome, SchedulerBridge, SchedulerConfig};
use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  detached_runner::DetachedRunner,
  work_queue::{InjectorQueue, WorkQueue, WorkStealer},
};


struct PoolShared {
  injector: InjectorQueue,
  stealers: Vec<WorkStealer>,
  config:   SchedulerConfig,
  wake_gen: Mutex<u64>,
  wake:     Condvar,
  stopping: AtomicBool,
}

/// Work-stealing scheduler pool implementing the core's bridge.
///
/// Each worker owns a deque (push and pop at the bottom, steal from the
/// top); external submissions land in a shared injector. An idle worker
/// climbs the three-tier polling ladder (aggressive spins, then moderate
/// and relaxed sleeps) before parking on the wake condvar that every
/// scheduling event signals.
pub struct PoolScheduler {
  shared:   Arc<PoolShared>,
  handles:  Mutex<Vec<JoinHandle<()>>>,
  detached: Mutex<HashMap<u64, DetachedRunner>>,
}

impl PoolScheduler {
  /// Starts `config.workers()` worker threads (hardware parallelism when
  /// zero).
  #[must_use]
  pub fn start(config: SchedulerConfig) -> Self {
    let worker_count = match config.workers() {
      | 0 => available_parallelism().map_or(1, usize::from),
      | configured => configured,
    };

    let mut queues = Vec::with_capacity(worker_count);
    let mut stealers = Vec::with_capacity(worker_count);
    for _ in 0..worker_count {
      let (queue, stealer) = WorkQueue::new();
      queues.push(queue);
      stealers.push(stealer);
    }

    let shared = Arc::new(PoolShared {
      injector: InjectorQueue::new(),
      stealers,
      config,
      wake_gen: Mutex::new(0),
      wake: Condvar::new(),
      stopping: AtomicBool::new(false),
    });

    let mut handles = Vec::with_capacity(worker_count);
    for (index, queue) in queues.into_iter().enumerate() {
      let shared = shared.clone();
      let handle = Builder::new()
        .name(format!("reaktor-worker-{index}"))
        .spawn(move || worker_loop(&shared, &queue, index));
      if let Ok(handle) = handle {
        handles.push(handle);
      }
    }

    Self { shared, handles: Mutex::new(handles), detached: Mutex::new(HashMap::new()) }
  }

  /// Returns the number of worker threads.
  #[must_use]
  pub fn worker_count(&self) -> usize {
    self.shared.stealers.len()
  }

  fn wake_all(&self) {
    wake_all(&self.shared);
  }
}

fn wake_all(shared: &PoolShared) {
  if let Ok(mut generation) = shared.wake_gen.lock() {
    *generation = generation.wrapping_add(1);
  }
  shared.wake.notify_all();
}

impl SchedulerBridge for PoolScheduler {
  fn schedule(&self, cell: ArcShared<ActorCell>) {
    if self.shared.stopping.load(Ordering::Acquire) {
      return;
    }
    if cell.is_detached() {
      if let Ok(runners) = self.detached.lock() {
        if let Some(runner) = runners.get(&cell.id().serial()) {
          runner.notify();
        }
        // A wakeup before registration is covered by the runner's first
        // pass over the mailbox.
      }
      return;
    }
    self.shared.injector.push(cell);
    self.wake_all();
  }

  fn start_detached(&self, cell: ArcShared<ActorCell>) {
    let serial = cell.id().serial();
    let runner = DetachedRunner::spawn(cell);
    if let Ok(mut runners) = self.detached.lock() {
      runners.insert(serial, runner);
    }
  }

  fn shutdown(&self) {
    self.shared.stopping.store(true, Ordering::Release);
    self.wake_all();
    let handles: Vec<JoinHandle<()>> = match self.handles.lock() {
      | Ok(mut guard) => guard.drain(..).collect(),
      | Err(_) => Vec::new(),
    };
    for handle in handles {
      let _ = handle.join();
    }
    let runners: Vec<DetachedRunner> = match self.detached.lock() {
      | Ok(mut guard) => guard.drain().map(|(_, runner)| runner).collect(),
      | Err(_) => Vec::new(),
    };
    for runner in runners {
      runner.stop();
    }
  }
}

fn worker_loop(shared: &Arc<PoolShared>, local: &WorkQueue, index: usize) {
  let mut rng = rand::rng();
  while !shared.stopping.load(Ordering::Acquire) {
    if let Some(cell) = local.pop() {
      run_cell(&cell, local);
      continue;
    }
    if let Some(cell) = shared.injector.steal_into(local) {
      run_cell(&cell, local);
      continue;
    }
    if climb_ladder(shared, local, index, &mut rng) {
      continue;
    }
    park(shared);
  }
}

/// Runs the aggressive, moderate, and relaxed polling tiers; `true` means
/// work was found and executed.
fn climb_ladder(shared: &Arc<PoolShared>, local: &WorkQueue, index: usize, rng: &mut impl Rng) -> bool {
  for tier in [shared.config.aggressive(), shared.config.moderate(), shared.config.relaxed()] {
    if poll_tier(shared, local, index, rng, tier) {
      return true;
    }
  }
  false
}

fn poll_tier(
  shared: &Arc<PoolShared>,
  local: &WorkQueue,
  index: usize,
  rng: &mut impl Rng,
  tier: PollTier,
) -> bool {
  for _ in 0..tier.attempts() {
    if shared.stopping.load(Ordering::Acquire) {
      return false;
    }
    if let Some(cell) = steal_once(shared, local, index, rng) {
      run_cell(&cell, local);
      return true;
    }
    if tier.sleep().is_zero() {
      std::hint::spin_loop();
    } else {
      std::thread::sleep(tier.sleep());
    }
  }
  false
}

fn steal_once(
  shared: &Arc<PoolShared>,
  local: &WorkQueue,
  index: usize,
  rng: &mut impl Rng,
) -> Option<ArcShared<ActorCell>> {
  if let Some(cell) = shared.injector.steal_into(local) {
    return Some(cell);
  }
  let peers = shared.stealers.len();
  if peers <= 1 {
    return None;
  }
  let victim = rng.random_range(0..peers);
  if victim == index {
    return None;
  }
  shared.stealers[victim].steal()
}

fn run_cell(cell: &ArcShared<ActorCell>, local: &WorkQueue) {
  let limit = cell.throughput_limit();
  let outcome = catch_unwind(AssertUnwindSafe(|| ActorCell::run_quantum(cell, limit)));
  match outcome {
    | Ok(QuantumOutcome::MoreWork) => local.push(cell.clone()),
    | Ok(_) => {},
    | Err(_) => ActorCell::fail_from_panic(cell),
  }
}

fn park(shared: &Arc<PoolShared>) {
  let Ok(mut generation) = shared.wake_gen.lock() else {
    return;
  };
  let seen = *generation;
  if !shared.injector.is_empty() || shared.stopping.load(Ordering::Acquire) {
    return;
  }
  while *generation == seen && !shared.stopping.load(Ordering::Acquire) {
    let wait = shared.config.relaxed().sleep().max(core::time::Duration::from_millis(1));
    match shared.wake.wait_timeout(generation, wait) {
      | Ok((guard, timeout)) => {
        generation = guard;
        if timeout.timed_out() {
          break;
        }
      },
      | Err(_) => return,
    }
  }
}
