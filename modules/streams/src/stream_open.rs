use reaktor_actor_core_rs::ActorRef;

/// Handshake opener sent by the downstream side, carrying its initial
/// credit grant and the handle batches should be delivered to.
#[derive(Clone, Debug)]
pub struct StreamOpen {
  credit:     u64,
  downstream: ActorRef,
}

impl StreamOpen {
  /// Creates an opener granting `credit` elements to the upstream.
  #[must_use]
  pub const fn new(credit: u64, downstream: ActorRef) -> Self {
    Self { credit, downstream }
  }

  /// Returns the initial credit grant.
  #[must_use]
  pub const fn credit(&self) -> u64 {
    self.credit
  }

  /// Returns the downstream delivery handle.
  #[must_use]
  pub const fn downstream(&self) -> &ActorRef {
    &self.downstream
  }
}
