use alloc::string::String;

use hashbrown::HashMap;
use reaktor_utils_core_rs::sync::sync_mutex_like::SpinSyncMutex;

use crate::{actor_id::ActorId, spawn_error::SpawnError};

#[cfg(test)]
mod tests;

/// Name to actor-id registry scoped to one actor system.
#[derive(Default)]
pub struct NameRegistry {
  names: SpinSyncMutex<HashMap<String, ActorId>>,
}

impl NameRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { names: SpinSyncMutex::new(HashMap::new()) }
  }

  /// Binds `name` to `id`.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::NameConflict`] when the name is already bound.
  pub fn bind(&self, name: &str, id: ActorId) -> Result<(), SpawnError> {
    let mut names = self.names.lock();
    if names.contains_key(name) {
      return Err(SpawnError::NameConflict(String::from(name)));
    }
    names.insert(String::from(name), id);
    Ok(())
  }

  /// Resolves a bound name.
  #[must_use]
  pub fn resolve(&self, name: &str) -> Option<ActorId> {
    self.names.lock().get(name).copied()
  }

  /// Releases a binding, ignoring unknown names.
  pub fn release(&self, name: &str) {
    self.names.lock().remove(name);
  }
}
