use core::fmt;

use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  actor_backend::ActorBackend, actor_id::ActorId, envelope::Envelope, error::Error, exit_message::ExitMessage,
  exit_reason::ExitReason, payload::Payload, priority::Priority, send_error::SendError,
  weak_actor_ref::WeakActorRef,
};

/// Strong handle to an actor.
///
/// Shares ownership of the actor's control block and keeps the actor alive;
/// dropping the last strong handle releases it. Equality is by actor
/// identifier.
pub struct ActorRef {
  backend: ArcShared<dyn ActorBackend>,
}

impl ActorRef {
  /// Wraps a backend in a strong handle.
  #[must_use]
  pub fn from_backend(backend: ArcShared<dyn ActorBackend>) -> Self {
    Self { backend }
  }

  /// Returns the actor's identifier.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.backend.id()
  }

  /// Returns `true` once the actor has terminated.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.backend.is_terminated()
  }

  /// Downgrades the handle to a non-owning reference.
  #[must_use]
  pub fn downgrade(&self) -> WeakActorRef {
    WeakActorRef::new(self.id(), self.backend.downgrade())
  }

  /// Sends a fire-and-forget payload on the normal band.
  ///
  /// # Errors
  ///
  /// Returns a [`SendError`] when a transport cannot deliver the envelope.
  pub fn tell(&self, payload: Payload) -> Result<(), SendError> {
    self.backend.enqueue(Envelope::tell(payload))
  }

  /// Sends a fire-and-forget payload on the urgent band.
  ///
  /// # Errors
  ///
  /// Returns a [`SendError`] when a transport cannot deliver the envelope.
  pub fn tell_urgent(&self, payload: Payload) -> Result<(), SendError> {
    self.backend.enqueue(Envelope::tell(payload).with_priority(Priority::Urgent))
  }

  /// Hands a prepared envelope to the actor.
  ///
  /// # Errors
  ///
  /// Returns a [`SendError`] when a transport cannot deliver the envelope.
  pub fn send(&self, envelope: Envelope) -> Result<(), SendError> {
    self.backend.enqueue(envelope)
  }

  /// Delivers an exit message with the given reason, as if a linked peer
  /// had terminated.
  ///
  /// # Errors
  ///
  /// Returns a [`SendError`] when a transport cannot deliver the envelope.
  pub fn kill(&self, reason: ExitReason) -> Result<(), SendError> {
    let exit = ExitMessage::new(self.id(), reason);
    self.backend.enqueue(Envelope::tell(Payload::of1(exit)).with_priority(Priority::Urgent))
  }

  /// Links this actor with `other` (symmetric).
  ///
  /// # Errors
  ///
  /// Propagates the first backend that cannot maintain links.
  pub fn link(&self, other: &ActorRef) -> Result<(), Error> {
    self.backend.add_link(other)?;
    other.backend.add_link(self)
  }

  /// Dissolves a link with `other` (symmetric).
  ///
  /// # Errors
  ///
  /// Propagates the first backend that cannot maintain links.
  pub fn unlink(&self, other: &ActorRef) -> Result<(), Error> {
    self.backend.remove_link(other)?;
    other.backend.remove_link(self)
  }

  /// Registers `observer` for a down notification when this actor
  /// terminates. Repeated registration is idempotent.
  ///
  /// # Errors
  ///
  /// Returns an error when the backend cannot maintain monitors.
  pub fn monitor(&self, observer: &ActorRef) -> Result<(), Error> {
    self.backend.add_monitor(observer)
  }

  /// Cancels a monitor registration.
  ///
  /// # Errors
  ///
  /// Returns an error when the backend cannot maintain monitors.
  pub fn demonitor(&self, observer: &ActorRef) -> Result<(), Error> {
    self.backend.remove_monitor(observer)
  }
}

impl Clone for ActorRef {
  fn clone(&self) -> Self {
    Self { backend: self.backend.clone() }
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.id() == other.id()
  }
}

impl Eq for ActorRef {}

impl fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ActorRef({})", self.id())
  }
}
