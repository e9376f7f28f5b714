/// Result of one scheduling quantum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantumOutcome {
  /// The mailbox drained; the actor parked.
  Idle,
  /// The throughput limit elapsed with envelopes remaining; the scheduler
  /// owes the cell another quantum.
  MoreWork,
  /// The actor terminated during the quantum.
  Terminated,
  /// Another worker already holds the running claim.
  Busy,
}
