use core::fmt;

use crate::{atom::Atom, payload::Payload};


/// Runtime error value: an 8-bit code scoped by a category atom, with an
/// optional context payload.
///
/// Code `0` means "no error" regardless of category. Equality compares code
/// and category only; the context payload is diagnostic baggage and does not
/// participate.
#[derive(Clone, Debug)]
pub struct Error {
  code:     u8,
  category: Atom,
  context:  Option<Payload>,
}

impl Error {
  /// Creates an error from a code and category.
  #[must_use]
  pub const fn new(code: u8, category: Atom) -> Self {
    Self { code, category, context: None }
  }

  /// The "no error" value.
  #[must_use]
  pub const fn none() -> Self {
    Self { code: 0, category: Atom::EMPTY, context: None }
  }

  /// Attaches a context payload and returns the updated error.
  #[must_use]
  pub fn with_context(mut self, context: Payload) -> Self {
    self.context = Some(context);
    self
  }

  /// Returns the numeric code; `0` means no error.
  #[must_use]
  pub const fn code(&self) -> u8 {
    self.code
  }

  /// Returns the category atom.
  #[must_use]
  pub const fn category(&self) -> Atom {
    self.category
  }

  /// Returns the context payload, if any.
  #[must_use]
  pub const fn context(&self) -> Option<&Payload> {
    self.context.as_ref()
  }

  /// Returns `true` when the code is zero.
  #[must_use]
  pub const fn is_none(&self) -> bool {
    self.code == 0
  }
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.code == other.code && self.category == other.category
  }
}

impl Eq for Error {}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "error({}, {})", self.code, self.category)
  }
}
