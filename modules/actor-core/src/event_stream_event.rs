use crate::{dead_letter_entry::DeadLetterEntry, lifecycle_event::LifecycleEvent, log_event::LogEvent};

/// Event selected for publication on the event stream.
#[derive(Clone, Debug)]
pub enum EventStreamEvent {
  /// Actor lifecycle transition notification.
  Lifecycle(LifecycleEvent),
  /// Capture of an undeliverable envelope.
  DeadLetter(DeadLetterEntry),
  /// Structured log event.
  Log(LogEvent),
}
