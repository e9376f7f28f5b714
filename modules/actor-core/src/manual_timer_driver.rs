use alloc::vec::Vec;
use core::time::Duration;

use reaktor_utils_core_rs::sync::sync_mutex_like::SpinSyncMutex;

use crate::{timer_action::TimerAction, timer_driver::TimerDriver};

/// Test timer driver fired explicitly by advancing time.
///
/// Pairs with [`crate::manual_clock::ManualClock`]: arm deadlines, advance
/// the clock, then call [`ManualTimerDriver::run_due`] with the new time.
#[derive(Default)]
pub struct ManualTimerDriver {
  armed: SpinSyncMutex<Vec<(Duration, TimerAction)>>,
}

impl ManualTimerDriver {
  /// Creates a driver with nothing armed.
  #[must_use]
  pub const fn new() -> Self {
    Self { armed: SpinSyncMutex::new(Vec::new()) }
  }

  /// Fires every action whose deadline is at or before `now`, in deadline
  /// order. Returns how many fired.
  pub fn run_due(&self, now: Duration) -> usize {
    let mut due = {
      let mut armed = self.armed.lock();
      let mut due: Vec<(Duration, TimerAction)> = Vec::new();
      let mut index = 0;
      while index < armed.len() {
        if armed[index].0 <= now {
          due.push(armed.swap_remove(index));
        } else {
          index += 1;
        }
      }
      due
    };
    due.sort_by_key(|(deadline, _)| *deadline);
    let count = due.len();
    for (_, action) in due {
      action.fire();
    }
    count
  }

  /// Returns the number of armed actions.
  #[must_use]
  pub fn armed_len(&self) -> usize {
    self.armed.lock().len()
  }
}

impl TimerDriver for ManualTimerDriver {
  fn arm(&self, deadline: Duration, action: TimerAction) {
    self.armed.lock().push((deadline, action));
  }
}
