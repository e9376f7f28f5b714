use crate::event_stream_event::EventStreamEvent;

/// Receives every event published on the event stream.
pub trait EventStreamSubscriber: Send + Sync {
  /// Handles one published event.
  fn on_event(&self, event: &EventStreamEvent);
}
