use reaktor_utils_core_rs::sync::WeakShared;

use crate::{actor_cell::ActorCell, correlation_id::CorrelationId};

/// Deferred work a [`crate::timer_driver::TimerDriver`] performs at a
/// deadline.
///
/// Actions hold weak cell references so an armed timer never keeps an actor
/// alive; firing against a released cell is a no-op.
pub enum TimerAction {
  /// Synthesise a `request_timeout` error response for a pending request.
  RequestTimeout {
    /// The requesting actor.
    cell: WeakShared<ActorCell>,
    /// The correlation id the deadline guards.
    id:   CorrelationId,
  },
  /// Deliver a behavior inactivity marker.
  Inactivity {
    /// The idle actor.
    cell:  WeakShared<ActorCell>,
    /// The mailbox-activity epoch the window was armed under.
    epoch: u64,
  },
}

impl TimerAction {
  /// Performs the action; stale actions fall away silently.
  pub fn fire(self) {
    match self {
      | Self::RequestTimeout { cell, id } => {
        if let Some(cell) = cell.upgrade() {
          ActorCell::deliver_request_timeout(&cell, id);
        }
      },
      | Self::Inactivity { cell, epoch } => {
        if let Some(cell) = cell.upgrade() {
          ActorCell::deliver_inactivity(&cell, epoch);
        }
      },
    }
  }
}

impl core::fmt::Debug for TimerAction {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      | Self::RequestTimeout { id, .. } => f.debug_struct("RequestTimeout").field("id", id).finish(),
      | Self::Inactivity { epoch, .. } => f.debug_struct("Inactivity").field("epoch", epoch).finish(),
    }
  }
}
