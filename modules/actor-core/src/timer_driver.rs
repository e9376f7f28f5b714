use core::time::Duration;

use crate::timer_action::TimerAction;

/// Deadline service the runtime plugs into the core.
///
/// Deadlines are monotonic instants in the system clock's timeline. The
/// driver fires each action at most once, at or after its deadline.
pub trait TimerDriver: Send + Sync {
  /// Arms `action` to fire at `deadline`.
  fn arm(&self, deadline: Duration, action: TimerAction);

  /// Stops the driver; armed actions may be dropped unfired.
  fn shutdown(&self) {}
}
