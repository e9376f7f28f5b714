use alloc::vec::Vec;

use reaktor_actor_core_rs::Payload;

use crate::stream_id::StreamId;

/// One batch of data elements; emitting it debits the upstream's credit by
/// the batch size.
#[derive(Clone, Debug)]
pub struct StreamBatch {
  id:    StreamId,
  items: Vec<Payload>,
}

impl StreamBatch {
  /// Creates a batch for stream `id`.
  #[must_use]
  pub const fn new(id: StreamId, items: Vec<Payload>) -> Self {
    Self { id, items }
  }

  /// Returns the stream identifier.
  #[must_use]
  pub const fn id(&self) -> StreamId {
    self.id
  }

  /// Returns the batched elements.
  #[must_use]
  pub fn items(&self) -> &[Payload] {
    &self.items
  }

  /// Returns the batch size.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` for an empty batch.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
