/// Role of an envelope within the correlation protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeKind {
  /// Fire-and-forget message; the correlation id is zero.
  #[default]
  Message,
  /// Request expecting a correlated response.
  Request,
  /// Response addressed by its correlation id.
  Response,
}

impl EnvelopeKind {
  /// Returns `true` for requests.
  #[must_use]
  pub const fn is_request(&self) -> bool {
    matches!(self, Self::Request)
  }

  /// Returns `true` for responses.
  #[must_use]
  pub const fn is_response(&self) -> bool {
    matches!(self, Self::Response)
  }
}
