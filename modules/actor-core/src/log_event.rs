use alloc::string::String;

use crate::{actor_id::ActorId, log_level::LogLevel};

/// Structured log entry published on the event stream.
#[derive(Clone, Debug)]
pub struct LogEvent {
  level:   LogLevel,
  origin:  Option<ActorId>,
  message: String,
}

impl LogEvent {
  /// Creates a log event.
  #[must_use]
  pub const fn new(level: LogLevel, origin: Option<ActorId>, message: String) -> Self {
    Self { level, origin, message }
  }

  /// Returns the severity.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Returns the emitting actor, when the entry came from one.
  #[must_use]
  pub const fn origin(&self) -> Option<ActorId> {
    self.origin
  }

  /// Returns the message text.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}
