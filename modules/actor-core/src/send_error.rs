use core::fmt;

use crate::envelope::Envelope;

/// Failure to hand an envelope to a backend.
///
/// Both variants return the rejected envelope so the caller can reroute it.
#[derive(Debug)]
pub enum SendError {
  /// The target terminated and its mailbox is closed.
  Closed(Envelope),
  /// The target cannot be reached through its transport.
  Unreachable(Envelope),
}

impl SendError {
  /// Recovers the rejected envelope.
  #[must_use]
  pub fn into_envelope(self) -> Envelope {
    match self {
      | Self::Closed(envelope) | Self::Unreachable(envelope) => envelope,
    }
  }
}

impl fmt::Display for SendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Closed(_) => f.write_str("target mailbox is closed"),
      | Self::Unreachable(_) => f.write_str("target is unreachable"),
    }
  }
}
