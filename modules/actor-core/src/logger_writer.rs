use crate::log_event::LogEvent;

/// Sink a [`crate::logger_subscriber::LoggerSubscriber`] delegates to.
///
/// The core stays output-agnostic; the standard runtime provides a stderr
/// writer and embedders may install their own.
pub trait LoggerWriter: Send + Sync {
  /// Writes one log event.
  fn write(&self, event: &LogEvent);
}
