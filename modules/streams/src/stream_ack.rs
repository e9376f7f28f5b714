use crate::stream_id::StreamId;

/// Handshake acknowledgement sent by the upstream side, naming the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamAck {
  id: StreamId,
}

impl StreamAck {
  /// Creates an acknowledgement for the stream `id`.
  #[must_use]
  pub const fn new(id: StreamId) -> Self {
    Self { id }
  }

  /// Returns the assigned stream identifier.
  #[must_use]
  pub const fn id(&self) -> StreamId {
    self.id
  }
}
