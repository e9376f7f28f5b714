use core::fmt;

/// Severity of a [`crate::log_event::LogEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  /// Diagnostic chatter.
  Debug,
  /// Routine runtime activity.
  Info,
  /// Unexpected but tolerated conditions.
  Warn,
  /// Failures.
  Error,
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      | Self::Debug => "DEBUG",
      | Self::Info => "INFO",
      | Self::Warn => "WARN",
      | Self::Error => "ERROR",
    };
    f.write_str(label)
  }
}
