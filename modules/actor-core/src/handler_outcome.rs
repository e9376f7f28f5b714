use crate::payload::Payload;

/// Verdict returned by a behavior clause.
#[derive(Debug)]
pub enum HandlerOutcome {
  /// Reply with a payload; synthesised into a response envelope when the
  /// dispatched envelope carried a request id.
  Reply(Payload),
  /// Handled without a reply.
  NoReply,
  /// Defer the envelope to the stash and retry it after the next
  /// successful match or behavior change.
  Skip,
}

impl HandlerOutcome {
  /// Returns `true` for the skip verdict.
  #[must_use]
  pub const fn is_skip(&self) -> bool {
    matches!(self, Self::Skip)
  }
}
