use crate::{actor_id::ActorId, exit_reason::ExitReason};

/// Notification delivered to monitors when the observed actor terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownMessage {
  source: ActorId,
  reason: ExitReason,
}

impl DownMessage {
  /// Creates a down notification for `source`.
  #[must_use]
  pub const fn new(source: ActorId, reason: ExitReason) -> Self {
    Self { source, reason }
  }

  /// Returns the terminated actor.
  #[must_use]
  pub const fn source(&self) -> ActorId {
    self.source
  }

  /// Returns the exit reason.
  #[must_use]
  pub const fn reason(&self) -> &ExitReason {
    &self.reason
  }
}
