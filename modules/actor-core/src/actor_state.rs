/// Lifecycle state of an actor cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ActorState {
  /// Spawned and waiting for mail.
  #[default]
  Idle      = 0,
  /// A worker is executing a quantum.
  Running   = 1,
  /// Only correlated responses progress the actor.
  AwaitingResponse = 2,
  /// Parked on the behavior's inactivity window.
  BlockedOnTimeout = 3,
  /// Stopped; the mailbox is closed.
  Terminated = 4,
}

impl ActorState {
  /// Returns the numeric encoding used by the cell's atomic state slot.
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self as u8
  }

  /// Decodes the numeric encoding.
  #[must_use]
  pub const fn from_u8(value: u8) -> Self {
    match value {
      | 1 => Self::Running,
      | 2 => Self::AwaitingResponse,
      | 3 => Self::BlockedOnTimeout,
      | 4 => Self::Terminated,
      | _ => Self::Idle,
    }
  }
}
