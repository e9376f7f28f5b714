use core::fmt;

use crate::{atom::Atom, error::Error};

#[cfg(test)]
mod tests;

/// Category atom for exit reasons.
pub const EXIT_CATEGORY: Atom = Atom::new("exit");

/// Why an actor terminated: an [`Error`] specialised to the `exit` category.
///
/// Code `0` is the normal exit; everything else is treated as a failure by
/// link propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitReason(Error);

impl ExitReason {
  /// Ordinary completion; links do not propagate it.
  #[must_use]
  pub const fn normal() -> Self {
    Self(Error::new(0, EXIT_CATEGORY))
  }

  /// A handler failed and nothing recovered the actor.
  #[must_use]
  pub const fn unhandled_exception() -> Self {
    Self(Error::new(1, EXIT_CATEGORY))
  }

  /// The runtime shut the actor down without a more specific cause.
  #[must_use]
  pub const fn unknown() -> Self {
    Self(Error::new(2, EXIT_CATEGORY))
  }

  /// The scheduler ran out of workers.
  #[must_use]
  pub const fn out_of_workers() -> Self {
    Self(Error::new(3, EXIT_CATEGORY))
  }

  /// The user requested an orderly shutdown.
  #[must_use]
  pub const fn user_shutdown() -> Self {
    Self(Error::new(4, EXIT_CATEGORY))
  }

  /// The actor was killed unconditionally.
  #[must_use]
  pub const fn kill() -> Self {
    Self(Error::new(5, EXIT_CATEGORY))
  }

  /// A remote peer became unreachable.
  #[must_use]
  pub const fn remote_unreachable() -> Self {
    Self(Error::new(6, EXIT_CATEGORY))
  }

  /// The target no longer exists.
  #[must_use]
  pub const fn unreachable() -> Self {
    Self(Error::new(7, EXIT_CATEGORY))
  }

  /// Wraps an arbitrary error as a failure exit reason.
  ///
  /// Errors already in the exit category pass through unchanged; anything
  /// else becomes `unhandled_exception` carrying the original as context.
  #[must_use]
  pub fn from_error(error: Error) -> Self {
    if error.category() == EXIT_CATEGORY {
      Self(error)
    } else {
      Self(Error::new(1, EXIT_CATEGORY).with_context(crate::payload::Payload::of1(error)))
    }
  }

  /// Returns `true` for the normal exit.
  #[must_use]
  pub const fn is_normal(&self) -> bool {
    self.0.is_none()
  }

  /// Returns the underlying error value.
  #[must_use]
  pub const fn as_error(&self) -> &Error {
    &self.0
  }

  /// Consumes the reason and returns the underlying error value.
  #[must_use]
  pub fn into_error(self) -> Error {
    self.0
  }
}

impl fmt::Display for ExitReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self.0.code() {
      | 0 => "normal",
      | 1 => "unhandled_exception",
      | 2 => "unknown",
      | 3 => "out_of_workers",
      | 4 => "user_shutdown",
      | 5 => "kill",
      | 6 => "remote_unreachable",
      | 7 => "unreachable",
      | _ => return write!(f, "{}", self.0),
    };
    f.write_str(label)
  }
}

impl From<Error> for ExitReason {
  fn from(error: Error) -> Self {
    Self::from_error(error)
  }
}
