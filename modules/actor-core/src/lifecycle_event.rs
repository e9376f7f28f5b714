use alloc::string::String;

use crate::{actor_id::ActorId, exit_reason::ExitReason, lifecycle_stage::LifecycleStage};

/// Actor lifecycle transition notification.
#[derive(Clone, Debug)]
pub struct LifecycleEvent {
  id:     ActorId,
  name:   Option<String>,
  stage:  LifecycleStage,
  reason: Option<ExitReason>,
}

impl LifecycleEvent {
  /// Creates a spawn notification.
  #[must_use]
  pub const fn spawned(id: ActorId, name: Option<String>) -> Self {
    Self { id, name, stage: LifecycleStage::Spawned, reason: None }
  }

  /// Creates a stop notification carrying the exit reason.
  #[must_use]
  pub const fn stopped(id: ActorId, name: Option<String>, reason: ExitReason) -> Self {
    Self { id, name, stage: LifecycleStage::Stopped, reason: Some(reason) }
  }

  /// Returns the actor's identifier.
  #[must_use]
  pub const fn id(&self) -> ActorId {
    self.id
  }

  /// Returns the registered name, if the actor had one.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the transition stage.
  #[must_use]
  pub const fn stage(&self) -> LifecycleStage {
    self.stage
  }

  /// Returns the exit reason for stop notifications.
  #[must_use]
  pub const fn reason(&self) -> Option<&ExitReason> {
    self.reason.as_ref()
  }
}
