use crate::{
  actor_ref::ActorRef, correlation_id::CorrelationId, envelope::Envelope, error::Error, payload::Payload,
  runtime_error_kind::RuntimeErrorKind,
};

/// Deferred reply to a correlated request.
///
/// Captures the reply path when created inside a handler and guarantees
/// exactly one delivery: fulfil with a value, reject with an error, or,
/// when dropped unresolved, an automatic `request_receiver_down` rejection
/// so the requester never waits forever.
pub struct ResponsePromise {
  target: Option<ActorRef>,
  id:     CorrelationId,
}

impl ResponsePromise {
  pub(crate) const fn new(target: ActorRef, id: CorrelationId) -> Self {
    Self { target: Some(target), id }
  }

  /// Returns the correlation id the promise answers.
  #[must_use]
  pub const fn correlation(&self) -> CorrelationId {
    self.id
  }

  /// Delivers the reply.
  pub fn fulfil(mut self, payload: Payload) {
    self.deliver(payload);
  }

  /// Delivers an error reply.
  pub fn reject(mut self, error: Error) {
    self.deliver(Payload::of1(error));
  }

  fn deliver(&mut self, payload: Payload) {
    if let Some(target) = self.target.take() {
      let _ = target.send(Envelope::response(payload, self.id));
    }
  }
}

impl Drop for ResponsePromise {
  fn drop(&mut self) {
    if self.target.is_some() {
      self.deliver(Payload::of1(RuntimeErrorKind::RequestReceiverDown.into_error()));
    }
  }
}

impl core::fmt::Debug for ResponsePromise {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ResponsePromise").field("id", &self.id).field("resolved", &self.target.is_none()).finish()
  }
}
