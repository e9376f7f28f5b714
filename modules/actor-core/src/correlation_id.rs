use core::fmt;

/// Positive integer linking a request to its response.
///
/// Zero marks fire-and-forget envelopes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorrelationId(u64);

impl CorrelationId {
  /// The fire-and-forget marker.
  pub const ZERO: Self = Self(0);

  /// Creates a correlation identifier from its numeric value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the numeric value.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.0
  }

  /// Returns `true` for correlated (non-zero) identifiers.
  #[must_use]
  pub const fn is_correlated(&self) -> bool {
    self.0 != 0
  }
}

impl fmt::Display for CorrelationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
