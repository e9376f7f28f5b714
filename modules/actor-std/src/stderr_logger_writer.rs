use reaktor_actor_core_rs::{LogEvent, LoggerWriter};

/// Log writer printing one line per event to standard error.
#[derive(Debug, Default)]
pub struct StderrLoggerWriter;

impl StderrLoggerWriter {
  /// Creates the writer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl LoggerWriter for StderrLoggerWriter {
  fn write(&self, event: &LogEvent) {
    match event.origin() {
      | Some(origin) => eprintln!("{} [{}] {}", event.level(), origin, event.message()),
      | None => eprintln!("{} [-] {}", event.level(), event.message()),
    }
  }
}
