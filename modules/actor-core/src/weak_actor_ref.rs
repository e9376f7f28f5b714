use core::fmt;

use reaktor_utils_core_rs::sync::WeakShared;

use crate::{actor_backend::ActorBackend, actor_id::ActorId, actor_ref::ActorRef};

/// Non-owning handle to an actor.
///
/// Resolves to a strong [`ActorRef`] only while the actor is alive. Used by
/// monitor and link sets and by the registry so bookkeeping never keeps an
/// actor alive.
pub struct WeakActorRef {
  id:      ActorId,
  backend: WeakShared<dyn ActorBackend>,
}

impl WeakActorRef {
  /// Creates a weak handle from its parts.
  #[must_use]
  pub const fn new(id: ActorId, backend: WeakShared<dyn ActorBackend>) -> Self {
    Self { id, backend }
  }

  /// Returns the actor's identifier, valid even after termination.
  #[must_use]
  pub const fn id(&self) -> ActorId {
    self.id
  }

  /// Attempts to resolve a strong handle.
  #[must_use]
  pub fn upgrade(&self) -> Option<ActorRef> {
    self.backend.upgrade().map(ActorRef::from_backend)
  }
}

impl Clone for WeakActorRef {
  fn clone(&self) -> Self {
    Self { id: self.id, backend: self.backend.clone() }
  }
}

impl fmt::Debug for WeakActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "WeakActorRef({})", self.id)
  }
}
