use crate::stream_id::StreamId;

/// End-of-stream marker emitted by the upstream side after its last batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamClose {
  id: StreamId,
}

impl StreamClose {
  /// Creates a close marker for stream `id`.
  #[must_use]
  pub const fn new(id: StreamId) -> Self {
    Self { id }
  }

  /// Returns the stream identifier.
  #[must_use]
  pub const fn id(&self) -> StreamId {
    self.id
  }
}
