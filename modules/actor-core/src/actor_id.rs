use core::fmt;

use crate::node_id::NodeId;

/// Process-local actor identifier paired with its node.
///
/// Serials increase monotonically per node and are never reused, so an
/// `ActorId` stays unique forever within its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId {
  node:   NodeId,
  serial: u64,
}

impl ActorId {
  /// Creates an identifier from its components.
  #[must_use]
  pub const fn new(node: NodeId, serial: u64) -> Self {
    Self { node, serial }
  }

  /// Returns the owning node.
  #[must_use]
  pub const fn node(&self) -> NodeId {
    self.node
  }

  /// Returns the per-node serial.
  #[must_use]
  pub const fn serial(&self) -> u64 {
    self.serial
  }

  /// Returns `true` when the actor lives on the local node.
  #[must_use]
  pub const fn is_local(&self) -> bool {
    self.node.is_local()
  }
}

impl fmt::Display for ActorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.node, self.serial)
  }
}
