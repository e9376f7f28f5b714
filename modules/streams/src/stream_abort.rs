use reaktor_actor_core_rs::Error;

use crate::stream_id::StreamId;

/// Abnormal termination of a stream, propagated in both directions:
/// upstream reads it as cancellation, downstream as end-of-stream with an
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamAbort {
  id:    StreamId,
  error: Error,
}

impl StreamAbort {
  /// Creates an abort for stream `id` carrying `error`.
  #[must_use]
  pub const fn new(id: StreamId, error: Error) -> Self {
    Self { id, error }
  }

  /// Returns the stream identifier.
  #[must_use]
  pub const fn id(&self) -> StreamId {
    self.id
  }

  /// Returns the propagated error.
  #[must_use]
  pub const fn error(&self) -> &Error {
    &self.error
  }
}
