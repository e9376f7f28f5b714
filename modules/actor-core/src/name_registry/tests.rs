use super::NameRegistry;
use crate::{actor_id::ActorId, node_id::NodeId, spawn_error::SpawnError};

#[test]
fn binds_and_resolves_names() {
  let registry = NameRegistry::new();
  let id = ActorId::new(NodeId::LOCAL, 7);

  registry.bind("worker", id).expect("bind");
  assert_eq!(registry.resolve("worker"), Some(id));
  assert_eq!(registry.resolve("unknown"), None);
}

#[test]
fn duplicate_bindings_conflict_until_released() {
  let registry = NameRegistry::new();
  registry.bind("worker", ActorId::new(NodeId::LOCAL, 1)).expect("bind");

  let conflict = registry.bind("worker", ActorId::new(NodeId::LOCAL, 2));
  assert!(matches!(conflict, Err(SpawnError::NameConflict(name)) if name == "worker"));

  registry.release("worker");
  registry.bind("worker", ActorId::new(NodeId::LOCAL, 2)).expect("rebind after release");
}
