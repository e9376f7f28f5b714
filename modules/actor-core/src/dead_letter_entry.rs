use crate::{actor_id::ActorId, correlation_id::CorrelationId};

/// Record of an envelope that could not be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadLetterEntry {
  target:      ActorId,
  correlation: CorrelationId,
}

impl DeadLetterEntry {
  /// Creates a dead-letter record.
  #[must_use]
  pub const fn new(target: ActorId, correlation: CorrelationId) -> Self {
    Self { target, correlation }
  }

  /// Returns the unreachable target.
  #[must_use]
  pub const fn target(&self) -> ActorId {
    self.target
  }

  /// Returns the discarded envelope's correlation id.
  #[must_use]
  pub const fn correlation(&self) -> CorrelationId {
    self.correlation
  }
}
