use alloc::vec::Vec;

use crate::{
  actor_ref::ActorRef, correlation_id::CorrelationId, envelope_kind::EnvelopeKind, payload::Payload,
  priority::Priority,
};

/// A message in transit.
///
/// Owns a payload and records the sender, the correlation id, the priority
/// band, and the stack of forwarding stages pushed by delegation. Created at
/// send time and destroyed after final delivery.
#[derive(Clone, Debug)]
pub struct Envelope {
  payload:     Payload,
  sender:      Option<ActorRef>,
  correlation: CorrelationId,
  kind:        EnvelopeKind,
  priority:    Priority,
  stages:      Vec<ActorRef>,
}

impl Envelope {
  /// Creates a fire-and-forget envelope on the normal band.
  #[must_use]
  pub fn tell(payload: Payload) -> Self {
    Self {
      payload,
      sender: None,
      correlation: CorrelationId::ZERO,
      kind: EnvelopeKind::Message,
      priority: Priority::Normal,
      stages: Vec::new(),
    }
  }

  /// Creates a request envelope correlated by `id`.
  #[must_use]
  pub fn request(payload: Payload, id: CorrelationId, sender: ActorRef) -> Self {
    Self {
      payload,
      sender: Some(sender),
      correlation: id,
      kind: EnvelopeKind::Request,
      priority: Priority::Normal,
      stages: Vec::new(),
    }
  }

  /// Creates a response envelope answering the request correlated by `id`.
  ///
  /// Responses ride the urgent band so correlation completes ahead of
  /// queued ordinary traffic.
  #[must_use]
  pub fn response(payload: Payload, id: CorrelationId) -> Self {
    Self {
      payload,
      sender: None,
      correlation: id,
      kind: EnvelopeKind::Response,
      priority: Priority::Urgent,
      stages: Vec::new(),
    }
  }

  /// Switches the envelope to the urgent band.
  #[must_use]
  pub fn with_priority(mut self, priority: Priority) -> Self {
    self.priority = priority;
    self
  }

  /// Records the sending actor.
  #[must_use]
  pub fn with_sender(mut self, sender: ActorRef) -> Self {
    self.sender = Some(sender);
    self
  }

  /// Returns the payload.
  #[must_use]
  pub const fn payload(&self) -> &Payload {
    &self.payload
  }

  /// Consumes the envelope and returns its payload.
  #[must_use]
  pub fn into_payload(self) -> Payload {
    self.payload
  }

  /// Returns the sending actor, if recorded.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Returns the correlation id; zero means fire-and-forget.
  #[must_use]
  pub const fn correlation(&self) -> CorrelationId {
    self.correlation
  }

  /// Returns the envelope's protocol role.
  #[must_use]
  pub const fn kind(&self) -> EnvelopeKind {
    self.kind
  }

  /// Returns the priority band.
  #[must_use]
  pub const fn priority(&self) -> Priority {
    self.priority
  }

  /// Pushes a forwarding stage; the stack top is the reply target.
  pub fn push_stage(&mut self, stage: ActorRef) {
    self.stages.push(stage);
  }

  /// Pops the top forwarding stage.
  pub fn pop_stage(&mut self) -> Option<ActorRef> {
    self.stages.pop()
  }

  /// Returns the current reply target: the forwarding stack top when
  /// present, the sender otherwise.
  #[must_use]
  pub fn reply_target(&self) -> Option<&ActorRef> {
    self.stages.last().or(self.sender.as_ref())
  }

  /// Returns the number of forwarding stages.
  #[must_use]
  pub fn stage_count(&self) -> usize {
    self.stages.len()
  }
}
