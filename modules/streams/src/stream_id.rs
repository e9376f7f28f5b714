use core::fmt;

/// Identifier of one open stream, assigned by the upstream side during the
/// handshake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(u64);

impl StreamId {
  /// Creates an identifier from its numeric value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the numeric value.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for StreamId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "stream-{}", self.0)
  }
}
