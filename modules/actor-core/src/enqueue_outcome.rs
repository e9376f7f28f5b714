/// Result of a successful mailbox enqueue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnqueueOutcome {
  /// The mailbox already held envelopes.
  Enqueued,
  /// This enqueue transitioned the mailbox from empty to non-empty; the
  /// caller owes the scheduler exactly one scheduling request.
  EnqueuedFirst,
}

impl EnqueueOutcome {
  /// Returns `true` when the enqueue crossed the empty boundary.
  #[must_use]
  pub const fn needs_schedule(&self) -> bool {
    matches!(self, Self::EnqueuedFirst)
  }
}
