use core::fmt;

/// Failure variants surfaced by queue operations.
///
/// Offer-style failures hand the rejected element back to the caller so it
/// can be redirected instead of dropped.
#[derive(Debug)]
pub enum QueueError<T> {
  /// The queue reached its bounded capacity.
  Full(T),
  /// The queue was closed and accepts no further elements.
  Closed(T),
  /// The queue holds no elements.
  Empty,
}

impl<T> QueueError<T> {
  /// Recovers the rejected element, if the variant carries one.
  pub fn into_inner(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::Closed(item) => Some(item),
      | Self::Empty => None,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("queue is full"),
      | Self::Closed(_) => f.write_str("queue is closed"),
      | Self::Empty => f.write_str("queue is empty"),
    }
  }
}
