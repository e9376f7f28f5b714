use crate::{actor_id::ActorId, exit_reason::ExitReason};

/// Failure propagation delivered across a link when a peer terminates.
///
/// The default policy terminates the receiver with the same reason unless an
/// exit handler is installed or the reason is normal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitMessage {
  source: ActorId,
  reason: ExitReason,
}

impl ExitMessage {
  /// Creates an exit message originating at `source`.
  #[must_use]
  pub const fn new(source: ActorId, reason: ExitReason) -> Self {
    Self { source, reason }
  }

  /// Returns the terminated (or killing) actor.
  #[must_use]
  pub const fn source(&self) -> ActorId {
    self.source
  }

  /// Returns the propagated reason.
  #[must_use]
  pub const fn reason(&self) -> &ExitReason {
    &self.reason
  }
}
