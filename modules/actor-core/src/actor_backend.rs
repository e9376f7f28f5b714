use crate::{actor_id::ActorId, actor_ref::ActorRef, envelope::Envelope, error::Error, send_error::SendError};

/// Delivery target behind an [`ActorRef`].
///
/// Local cells implement this directly; the transport layer implements it
/// for proxies so remote actors appear as local handles whose enqueue
/// forwards over the wire.
pub trait ActorBackend: Send + Sync {
  /// Returns the identifier of the represented actor.
  fn id(&self) -> ActorId;

  /// Hands an envelope to the actor.
  ///
  /// # Errors
  ///
  /// Returns [`SendError::Unreachable`] when a transport cannot deliver.
  /// Local cells absorb delivery to terminated actors (dead-letter plus
  /// correlated error synthesis) and report `Ok`.
  fn enqueue(&self, envelope: Envelope) -> Result<(), SendError>;

  /// Returns `true` once the represented actor has terminated.
  fn is_terminated(&self) -> bool;

  /// Adds `peer` to the actor's link set (one direction of a link).
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the backend cannot maintain links
  /// (remote proxies delegate linking to the transport).
  fn add_link(&self, peer: &ActorRef) -> Result<(), Error>;

  /// Removes `peer` from the actor's link set.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the backend cannot maintain links.
  fn remove_link(&self, peer: &ActorRef) -> Result<(), Error>;

  /// Registers `observer` for a down notification on termination.
  /// Registration is idempotent per observer.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the backend cannot maintain monitors.
  fn add_monitor(&self, observer: &ActorRef) -> Result<(), Error>;

  /// Removes `observer` from the monitor set.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the backend cannot maintain monitors.
  fn remove_monitor(&self, observer: &ActorRef) -> Result<(), Error>;
}
