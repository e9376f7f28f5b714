use alloc::string::String;
use core::time::Duration;

use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  actor_cell::ActorCell, actor_id::ActorId, actor_ref::ActorRef, behavior::Behavior,
  correlation_id::CorrelationId, down_message::DownMessage, default_handler_policy::DefaultHandlerPolicy,
  envelope::Envelope, envelope_kind::EnvelopeKind, error::Error, exit_message::ExitMessage,
  exit_reason::ExitReason, log_level::LogLevel, payload::Payload, props::Props, request_handle::RequestHandle,
  response_promise::ResponsePromise, runtime_error_kind::RuntimeErrorKind, spawn_error::SpawnError,
  system::ActorSystem,
};

/// Execution context handed to handlers while they process one envelope.
///
/// Mutations that would race with the clause currently borrowed from the
/// behavior slot (quitting, becoming a new behavior, delegating) are staged
/// here and applied by the engine after the handler returns.
pub struct ActorContext<'a> {
  cell:          &'a ArcShared<ActorCell>,
  sender:        Option<ActorRef>,
  reply_target:  Option<ActorRef>,
  correlation:   CorrelationId,
  kind:          EnvelopeKind,
  answered:      bool,
  quit:          Option<ExitReason>,
  next_behavior: Option<Behavior>,
  delegate_to:   Option<ActorRef>,
}

impl<'a> ActorContext<'a> {
  pub(crate) fn for_envelope(cell: &'a ArcShared<ActorCell>, envelope: &Envelope) -> Self {
    Self {
      cell,
      sender: envelope.sender().cloned(),
      reply_target: envelope.reply_target().cloned(),
      correlation: envelope.correlation(),
      kind: envelope.kind(),
      answered: false,
      quit: None,
      next_behavior: None,
      delegate_to: None,
    }
  }

  pub(crate) fn internal(cell: &'a ArcShared<ActorCell>) -> Self {
    Self {
      cell,
      sender: None,
      reply_target: None,
      correlation: CorrelationId::ZERO,
      kind: EnvelopeKind::Message,
      answered: false,
      quit: None,
      next_behavior: None,
      delegate_to: None,
    }
  }

  /// Returns the running actor's identifier.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.cell.id()
  }

  /// Returns a strong handle to the running actor.
  #[must_use]
  pub fn self_ref(&self) -> ActorRef {
    ActorCell::actor_ref_of(self.cell)
  }

  /// Returns the owning actor system.
  #[must_use]
  pub fn system(&self) -> ActorSystem {
    ActorSystem::from_state(self.cell.system().clone())
  }

  /// Returns the sender of the envelope being processed.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Returns the correlation id of the envelope being processed.
  #[must_use]
  pub const fn correlation(&self) -> CorrelationId {
    self.correlation
  }

  /// Spawns a new actor in the same system.
  ///
  /// # Errors
  ///
  /// Returns a [`SpawnError`] when the name conflicts, the constructor
  /// fails, or the system is terminating.
  pub fn spawn(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    crate::system::spawn_with_state(self.cell.system(), props)
  }

  /// Spawns a new actor and links it with the running actor.
  ///
  /// # Errors
  ///
  /// Returns a [`SpawnError`] as [`ActorContext::spawn`] does.
  pub fn spawn_linked(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    let child = self.spawn(props)?;
    let _ = self.self_ref().link(&child);
    Ok(child)
  }

  /// Issues a request with the system's default deadline.
  pub fn request(&mut self, target: &ActorRef, payload: Payload) -> RequestHandle {
    let timeout = self.cell.system().config().request_timeout();
    self.request_with_timeout(target, payload, timeout)
  }

  /// Issues a request with an explicit deadline.
  pub fn request_with_timeout(&mut self, target: &ActorRef, payload: Payload, timeout: Duration) -> RequestHandle {
    ActorCell::issue_request(self.cell, target, payload, timeout)
  }

  /// Captures the reply path of the request being processed into a promise,
  /// releasing this handler from synthesising the response.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the current envelope is not an
  /// unanswered request.
  pub fn response_promise(&mut self) -> Result<ResponsePromise, Error> {
    if !self.kind.is_request() || self.answered {
      return Err(RuntimeErrorKind::InvalidArgument.into_error());
    }
    let target = self.reply_target.clone().ok_or_else(|| RuntimeErrorKind::InvalidArgument.into_error())?;
    self.answered = true;
    Ok(ResponsePromise::new(target, self.correlation))
  }

  /// Transfers the duty to reply to `target`: the engine re-enqueues the
  /// current envelope there with the original sender pushed onto its
  /// forwarding stack, and this handler synthesises no reply.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when a reply was already arranged.
  pub fn delegate(&mut self, target: &ActorRef) -> Result<(), Error> {
    if self.answered {
      return Err(RuntimeErrorKind::InvalidArgument.into_error());
    }
    self.answered = true;
    self.delegate_to = Some(target.clone());
    Ok(())
  }

  /// Terminates the actor after the current handler returns.
  pub fn quit(&mut self, reason: ExitReason) {
    self.quit = Some(reason);
  }

  /// Replaces the behavior after the current handler returns; stashed
  /// envelopes are retried against the new behavior.
  pub fn become_behavior(&mut self, behavior: Behavior) {
    self.next_behavior = Some(behavior);
  }

  /// Reinjects stashed envelopes at the head of the normal band.
  pub fn unstash(&self) {
    self.cell.mailbox().unstash_all();
  }

  /// Links the running actor with `target` (symmetric).
  ///
  /// # Errors
  ///
  /// Propagates backends that cannot maintain links.
  pub fn link(&self, target: &ActorRef) -> Result<(), Error> {
    self.self_ref().link(target)
  }

  /// Dissolves a link with `target`.
  ///
  /// # Errors
  ///
  /// Propagates backends that cannot maintain links.
  pub fn unlink(&self, target: &ActorRef) -> Result<(), Error> {
    self.self_ref().unlink(target)
  }

  /// Monitors `target`; the running actor receives one [`DownMessage`]
  /// when it terminates. Repeated calls are idempotent.
  ///
  /// # Errors
  ///
  /// Propagates backends that cannot maintain monitors.
  pub fn monitor(&self, target: &ActorRef) -> Result<(), Error> {
    target.monitor(&self.self_ref())
  }

  /// Cancels a monitor on `target`.
  ///
  /// # Errors
  ///
  /// Propagates backends that cannot maintain monitors.
  pub fn demonitor(&self, target: &ActorRef) -> Result<(), Error> {
    target.demonitor(&self.self_ref())
  }

  /// Overrides the default handling of exit messages.
  pub fn set_exit_handler<F>(&self, handler: F)
  where
    F: FnMut(&mut ActorContext<'_>, &ExitMessage) -> Result<(), Error> + Send + 'static, {
    self.cell.hooks().lock().set_exit(alloc::boxed::Box::new(handler));
  }

  /// Overrides the default handling of down messages.
  pub fn set_down_handler<F>(&self, handler: F)
  where
    F: FnMut(&mut ActorContext<'_>, &DownMessage) -> Result<(), Error> + Send + 'static, {
    self.cell.hooks().lock().set_down(alloc::boxed::Box::new(handler));
  }

  /// Overrides the default terminate-on-error policy.
  pub fn set_error_handler<F>(&self, handler: F)
  where
    F: FnMut(&mut ActorContext<'_>, &Error) -> Result<(), Error> + Send + 'static, {
    self.cell.hooks().lock().set_error(alloc::boxed::Box::new(handler));
  }

  /// Chooses what happens to envelopes no clause matches.
  pub fn set_default_policy(&self, policy: DefaultHandlerPolicy) {
    self.cell.set_default_policy(policy);
  }

  /// Publishes a log event attributed to this actor.
  pub fn log(&self, level: LogLevel, message: impl Into<String>) {
    self.cell.system().log(level, Some(self.id()), message.into());
  }

  pub(crate) fn register_cleanup<F>(&self, hook: F)
  where
    F: FnOnce(&mut ActorContext<'_>) + Send + 'static, {
    self.cell.hooks().lock().push_cleanup(alloc::boxed::Box::new(hook));
  }

  pub(crate) fn take_quit(&mut self) -> Option<ExitReason> {
    self.quit.take()
  }

  pub(crate) fn take_next_behavior(&mut self) -> Option<Behavior> {
    self.next_behavior.take()
  }

  pub(crate) fn take_delegate(&mut self) -> Option<ActorRef> {
    self.delegate_to.take()
  }

  pub(crate) const fn was_answered(&self) -> bool {
    self.answered
  }
}
