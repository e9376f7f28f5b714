use std::{
  collections::HashMap,
  sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Condvar, Mutex,
  },
  thread::{Builder, JoinHandle},
  time::Duration,
};

use reaktor_actor_core_rs::{MonotonicClock, TimerAction, TimerDriver};
use reaktor_utils_core_rs::{collections::DeadlineHeap, sync::ArcShared};

struct TimerQueue {
  deadlines: DeadlineHeap,
  actions:   HashMap<u64, TimerAction>,
}

struct TimerShared {
  queue:   Mutex<TimerQueue>,
  condvar: Condvar,
  stop:    AtomicBool,
  clock:   ArcShared<dyn MonotonicClock>,
}

/// Timer thread servicing request deadlines and inactivity windows.
///
/// Armed actions sit in a deadline heap; the thread sleeps until the
/// earliest deadline and wakes early when a nearer one is armed.
pub struct ThreadTimerDriver {
  shared:   Arc<TimerShared>,
  next_key: AtomicU64,
  handle:   Mutex<Option<JoinHandle<()>>>,
}

impl ThreadTimerDriver {
  /// Starts the timer thread against `clock`.
  #[must_use]
  pub fn start(clock: ArcShared<dyn MonotonicClock>) -> Self {
    let shared = Arc::new(TimerShared {
      queue:   Mutex::new(TimerQueue { deadlines: DeadlineHeap::new(), actions: HashMap::new() }),
      condvar: Condvar::new(),
      stop:    AtomicBool::new(false),
      clock,
    });
    let thread_shared = shared.clone();
    let handle = Builder::new().name(String::from("reaktor-timer")).spawn(move || run(&thread_shared)).ok();
    Self { shared, next_key: AtomicU64::new(1), handle: Mutex::new(handle) }
  }

  /// Returns the number of armed, unfired actions.
  #[must_use]
  pub fn armed_len(&self) -> usize {
    self.shared.queue.lock().map_or(0, |queue| queue.actions.len())
  }
}

fn run(shared: &TimerShared) {
  const IDLE_WAIT: Duration = Duration::from_millis(100);
  loop {
    if shared.stop.load(Ordering::Acquire) {
      break;
    }
    let now = shared.clock.now();
    let mut due = Vec::new();
    let wait = {
      let Ok(mut queue) = shared.queue.lock() else {
        break;
      };
      let queue = &mut *queue;
      while let Some(entry) = queue.deadlines.pop_due(now) {
        if let Some(action) = queue.actions.remove(&entry.key()) {
          due.push(action);
        }
      }
      queue.deadlines.next_deadline().map_or(IDLE_WAIT, |deadline| deadline.saturating_sub(now).min(IDLE_WAIT))
    };
    for action in due {
      action.fire();
    }
    let Ok(guard) = shared.queue.lock() else {
      break;
    };
    if shared.stop.load(Ordering::Acquire) {
      break;
    }
    let _ = shared.condvar.wait_timeout(guard, wait.max(Duration::from_millis(1)));
  }
}

impl TimerDriver for ThreadTimerDriver {
  fn arm(&self, deadline: Duration, action: TimerAction) {
    let key = self.next_key.fetch_add(1, Ordering::AcqRel);
    if let Ok(mut queue) = self.shared.queue.lock() {
      queue.deadlines.push(deadline, key);
      queue.actions.insert(key, action);
    }
    self.shared.condvar.notify_one();
  }

  fn shutdown(&self) {
    self.shared.stop.store(true, Ordering::Release);
    self.shared.condvar.notify_all();
    let handle = self.handle.lock().ok().and_then(|mut guard| guard.take());
    if let Some(handle) = handle {
      let _ = handle.join();
    }
  }
}
