use crate::{
  actor_backend::ActorBackend, actor_future::ActorFuture, actor_id::ActorId, actor_ref::ActorRef,
  envelope::Envelope, error::Error, runtime_error_kind::RuntimeErrorKind, send_error::SendError,
};

/// Backend that resolves an [`ActorFuture`] instead of feeding a mailbox.
///
/// Lets a non-actor caller stand in as a request's sender: the receiver's
/// reply (or the synthesised error when it terminates first) lands in the
/// future the caller is waiting on.
pub(crate) struct FutureReplyBackend {
  id:     ActorId,
  future: ActorFuture<Envelope>,
}

impl FutureReplyBackend {
  pub(crate) const fn new(id: ActorId, future: ActorFuture<Envelope>) -> Self {
    Self { id, future }
  }
}

impl ActorBackend for FutureReplyBackend {
  fn id(&self) -> ActorId {
    self.id
  }

  fn enqueue(&self, envelope: Envelope) -> Result<(), SendError> {
    self.future.complete(envelope);
    Ok(())
  }

  fn is_terminated(&self) -> bool {
    self.future.is_completed()
  }

  fn add_link(&self, _peer: &ActorRef) -> Result<(), Error> {
    Err(RuntimeErrorKind::InvalidArgument.into_error())
  }

  fn remove_link(&self, _peer: &ActorRef) -> Result<(), Error> {
    Err(RuntimeErrorKind::InvalidArgument.into_error())
  }

  fn add_monitor(&self, _observer: &ActorRef) -> Result<(), Error> {
    Err(RuntimeErrorKind::InvalidArgument.into_error())
  }

  fn remove_monitor(&self, _observer: &ActorRef) -> Result<(), Error> {
    Err(RuntimeErrorKind::InvalidArgument.into_error())
  }
}
