//! Seams the external transport layer plugs into.
//!
//! The transport owns its ports, connections, and retries; the core only
//! exposes an outbound forwarding contract, a proxy backend so remote
//! actors appear as local handles, and an inbound routing entry point.

use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  actor_backend::ActorBackend, actor_cell::ActorCell, actor_id::ActorId, actor_ref::ActorRef,
  dead_letter_entry::DeadLetterEntry, envelope::Envelope, error::Error, event_stream_event::EventStreamEvent,
  runtime_error_kind::RuntimeErrorKind, send_error::SendError, system::ActorSystem,
};

/// Outbound half of the transport: carries envelopes to remote nodes.
pub trait RemoteSender: Send + Sync {
  /// Forwards an envelope addressed to `target` on a remote node.
  ///
  /// # Errors
  ///
  /// Returns [`SendError::Unreachable`] when the node cannot be reached.
  fn forward(&self, target: ActorId, envelope: Envelope) -> Result<(), SendError>;
}

/// Proxy backend making a remote actor usable as an ordinary [`ActorRef`].
///
/// Enqueues forward through the transport; supervision edges across nodes
/// are the transport's concern and are rejected here.
pub struct RemoteProxyBackend {
  target: ActorId,
  sender: ArcShared<dyn RemoteSender>,
}

impl RemoteProxyBackend {
  /// Creates a proxy for `target` forwarding through `sender`.
  #[must_use]
  pub const fn new(target: ActorId, sender: ArcShared<dyn RemoteSender>) -> Self {
    Self { target, sender }
  }

  /// Wraps the proxy into a strong handle.
  #[must_use]
  pub fn into_ref(self) -> ActorRef {
    ActorRef::from_backend(ArcShared::new(self).into_dyn(|proxy| proxy as &dyn ActorBackend))
  }
}

impl ActorBackend for RemoteProxyBackend {
  fn id(&self) -> ActorId {
    self.target
  }

  fn enqueue(&self, envelope: Envelope) -> Result<(), SendError> {
    self.sender.forward(self.target, envelope)
  }

  fn is_terminated(&self) -> bool {
    false
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

/// Inbound half of the transport: routes a received envelope to a local
/// actor. Unknown or terminated targets become dead letters.
///
/// Returns `true` when a live local cell accepted the envelope.
pub fn route_inbound(system: &ActorSystem, target: ActorId, envelope: Envelope) -> bool {
  match system.state().find_cell(target.serial()) {
    | Some(cell) => {
      let _ = ActorCell::actor_ref_of(&cell).send(envelope);
      true
    },
    | None => {
      system
        .state()
        .publish(&EventStreamEvent::DeadLetter(DeadLetterEntry::new(target, envelope.correlation())));
      false
    },
  }
}
