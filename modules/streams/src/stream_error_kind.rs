use reaktor_actor_core_rs::{Atom, Error};

/// Category atom shared by the stream protocol's error codes.
pub const STREAM_CATEGORY: Atom = Atom::new("stream");

/// Error codes raised by the stream layer, in the `stream` category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum StreamErrorKind {
  /// The participant cannot accept another upstream.
  CannotAddUpstream = 1,
  /// The named upstream is already connected.
  UpstreamAlreadyExists = 2,
  /// The message does not belong to any connected upstream.
  InvalidUpstream = 3,
  /// The participant cannot accept another downstream.
  CannotAddDownstream = 4,
  /// The named downstream is already connected.
  DownstreamAlreadyExists = 5,
  /// The message does not belong to any connected downstream.
  InvalidDownstream = 6,
  /// A source was driven without any downstream stage.
  NoDownstreamStagesDefined = 7,
  /// The handshake failed before the stream opened.
  StreamInitFailed = 8,
  /// A message arrived in a state that does not accept it.
  InvalidStreamState = 9,
  /// A transform or consumer failed while processing elements.
  UnhandledStreamError = 10,
}

impl StreamErrorKind {
  /// Returns the numeric code within [`STREAM_CATEGORY`].
  #[must_use]
  pub const fn code(self) -> u8 {
    self as u8
  }

  /// Converts the kind into a categorised [`Error`].
  #[must_use]
  pub const fn into_error(self) -> Error {
    Error::new(self as u8, STREAM_CATEGORY)
  }

  /// Returns `true` when `error` carries this kind.
  #[must_use]
  pub fn matches(self, error: &Error) -> bool {
    error.category() == STREAM_CATEGORY && error.code() == self.code()
  }
}

impl From<StreamErrorKind> for Error {
  fn from(kind: StreamErrorKind) -> Self {
    kind.into_error()
  }
}
