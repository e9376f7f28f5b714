use reaktor_utils_core_rs::sync::ArcShared;

use crate::actor_cell::ActorCell;

/// Execution service the runtime plugs into the core.
///
/// The core hands over cells whose mailboxes crossed the empty boundary;
/// the bridge decides where their quanta run.
pub trait SchedulerBridge: Send + Sync {
  /// Requests a quantum for `cell`. Called exactly once per mailbox
  /// empty-to-non-empty transition, and again whenever a quantum ends with
  /// envelopes remaining.
  fn schedule(&self, cell: ArcShared<ActorCell>);

  /// Takes ownership of a detached cell's receive loop.
  fn start_detached(&self, cell: ArcShared<ActorCell>);

  /// Stops accepting work and winds down execution resources.
  fn shutdown(&self);
}
