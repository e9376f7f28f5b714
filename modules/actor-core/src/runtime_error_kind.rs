use crate::{atom::Atom, error::Error};

/// Category atom shared by the runtime's own error codes.
pub const RUNTIME_CATEGORY: Atom = Atom::new("runtime");

/// Error codes raised by the runtime itself, in the `runtime` category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RuntimeErrorKind {
  /// No behavior clause matched an inbound message.
  UnexpectedMessage = 1,
  /// A response arrived that no pending request claims.
  UnexpectedResponse = 2,
  /// A request deadline elapsed before the response arrived.
  RequestTimeout = 3,
  /// The request target terminated before replying.
  RequestReceiverDown = 4,
  /// The system channel rejected an unknown key.
  UnsupportedSysKey = 5,
  /// The system channel rejected a malformed message.
  UnsupportedSysMessage = 6,
  /// A handler raised an uncaught failure.
  RuntimeError = 7,
  /// An operation received an argument outside its domain.
  InvalidArgument = 8,
  /// A callback slot was invoked without a target.
  BadFunctionCall = 9,
  /// The scheduler could not provide a worker.
  OutOfWorkers = 10,
  /// A typed payload access named a different field type.
  TypeMismatch = 11,
}

impl RuntimeErrorKind {
  /// Returns the numeric code within [`RUNTIME_CATEGORY`].
  #[must_use]
  pub const fn code(self) -> u8 {
    self as u8
  }

  /// Converts the kind into a categorised [`Error`].
  #[must_use]
  pub const fn into_error(self) -> Error {
    Error::new(self as u8, RUNTIME_CATEGORY)
  }

  /// Looks the kind up from a raw code.
  #[must_use]
  pub const fn from_code(code: u8) -> Option<Self> {
    match code {
      | 1 => Some(Self::UnexpectedMessage),
      | 2 => Some(Self::UnexpectedResponse),
      | 3 => Some(Self::RequestTimeout),
      | 4 => Some(Self::RequestReceiverDown),
      | 5 => Some(Self::UnsupportedSysKey),
      | 6 => Some(Self::UnsupportedSysMessage),
      | 7 => Some(Self::RuntimeError),
      | 8 => Some(Self::InvalidArgument),
      | 9 => Some(Self::BadFunctionCall),
      | 10 => Some(Self::OutOfWorkers),
      | 11 => Some(Self::TypeMismatch),
      | _ => None,
    }
  }

  /// Returns `true` when `error` carries this kind.
  #[must_use]
  pub fn matches(self, error: &Error) -> bool {
    error.category() == RUNTIME_CATEGORY && error.code() == self.code()
  }
}

impl From<RuntimeErrorKind> for Error {
  fn from(kind: RuntimeErrorKind) -> Self {
    kind.into_error()
  }
}
