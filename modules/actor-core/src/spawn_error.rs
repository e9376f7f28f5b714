use alloc::string::String;
use core::fmt;

use crate::error::Error;

/// Failure to create an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
  /// The requested name is already bound in this system.
  NameConflict(String),
  /// The actor's constructor failed.
  InitFailed(Error),
  /// The actor system is tearing down.
  SystemTerminated,
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NameConflict(name) => write!(f, "actor name '{name}' is already bound"),
      | Self::InitFailed(error) => write!(f, "actor constructor failed: {error}"),
      | Self::SystemTerminated => f.write_str("actor system is terminated"),
    }
  }
}
