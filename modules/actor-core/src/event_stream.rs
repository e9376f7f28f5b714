use alloc::vec::Vec;

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{event_stream_event::EventStreamEvent, event_stream_subscriber::EventStreamSubscriber};

#[cfg(test)]
mod tests;

/// Broadcasts runtime events to registered subscribers.
///
/// Publication snapshots the subscriber list and invokes callbacks outside
/// the lock, so subscribers may publish or subscribe reentrantly.
#[derive(Default)]
pub struct EventStream {
  subscribers: SpinSyncMutex<Vec<ArcShared<dyn EventStreamSubscriber>>>,
}

impl EventStream {
  /// Creates an event stream with no subscribers.
  #[must_use]
  pub const fn new() -> Self {
    Self { subscribers: SpinSyncMutex::new(Vec::new()) }
  }

  /// Registers a subscriber for every subsequent event.
  pub fn subscribe(&self, subscriber: ArcShared<dyn EventStreamSubscriber>) {
    self.subscribers.lock().push(subscriber);
  }

  /// Publishes an event to every registered subscriber.
  pub fn publish(&self, event: &EventStreamEvent) {
    let snapshot: Vec<ArcShared<dyn EventStreamSubscriber>> = self.subscribers.lock().clone();
    for subscriber in snapshot {
      subscriber.on_event(event);
    }
  }

  /// Returns the number of registered subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.subscribers.lock().len()
  }
}
