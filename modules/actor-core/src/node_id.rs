use core::fmt;

/// Identifies a node within a distributed deployment.
///
/// The local node is `0`; remote nodes receive their identifiers from the
/// transport layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
  /// The local node.
  pub const LOCAL: Self = Self(0);

  /// Creates a node identifier from its numeric value.
  #[must_use]
  pub const fn new(value: u32) -> Self {
    Self(value)
  }

  /// Returns the numeric value.
  #[must_use]
  pub const fn value(&self) -> u32 {
    self.0
  }

  /// Returns `true` for the local node.
  #[must_use]
  pub const fn is_local(&self) -> bool {
    self.0 == 0
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
