use alloc::string::String;
use core::time::Duration;

use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  actor_backend::ActorBackend, actor_cell::ActorCell, actor_context::ActorContext, actor_future::ActorFuture,
  actor_ref::ActorRef, actor_system_config::ActorSystemConfig, atom::Atom, correlation_id::CorrelationId,
  envelope::Envelope, error::Error, error_renderer::ErrorRendererRegistry, event_stream::EventStream,
  event_stream_subscriber::EventStreamSubscriber, exit_reason::ExitReason,
  future_reply_backend::FutureReplyBackend, inline_scheduler::InlineScheduler, log_level::LogLevel,
  manual_clock::ManualClock, manual_timer_driver::ManualTimerDriver, monotonic_clock::MonotonicClock,
  payload::Payload, props::Props, runtime_error_kind::RuntimeErrorKind, scheduler_bridge::SchedulerBridge,
  spawn_error::SpawnError, system_state::SystemState, timer_driver::TimerDriver,
};

#[cfg(test)]
mod tests;

/// An actor system: the owned root of a runtime instance.
///
/// The scheduler, registry, event stream, and renderer table live inside
/// it; multiple systems per process stay fully independent. Cloning shares
/// the same instance.
#[derive(Clone)]
pub struct ActorSystem {
  state: ArcShared<SystemState>,
}

impl ActorSystem {
  /// Creates a system on the deterministic in-core services: the inline
  /// scheduler, a manual timer, and a manual clock. Quanta run on the
  /// threads that send messages, which suits tests and `no_std` hosts; a
  /// threaded runtime wires real services via
  /// [`ActorSystem::with_services`].
  #[must_use]
  pub fn new(config: ActorSystemConfig) -> Self {
    let scheduler: ArcShared<dyn SchedulerBridge> =
      ArcShared::new(InlineScheduler::new()).into_dyn(|scheduler| scheduler as &dyn SchedulerBridge);
    let timer: ArcShared<dyn TimerDriver> =
      ArcShared::new(ManualTimerDriver::new()).into_dyn(|timer| timer as &dyn TimerDriver);
    let clock: ArcShared<dyn MonotonicClock> =
      ArcShared::new(ManualClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
    Self::with_services(config, scheduler, timer, clock)
  }

  /// Creates a system wired to explicit runtime services.
  #[must_use]
  pub fn with_services(
    config: ActorSystemConfig,
    scheduler: ArcShared<dyn SchedulerBridge>,
    timer: ArcShared<dyn TimerDriver>,
    clock: ArcShared<dyn MonotonicClock>,
  ) -> Self {
    Self { state: ArcShared::new(SystemState::new(config, scheduler, timer, clock)) }
  }

  pub(crate) const fn from_state(state: ArcShared<SystemState>) -> Self {
    Self { state }
  }

  /// Returns the shared system state.
  #[must_use]
  pub const fn state(&self) -> &ArcShared<SystemState> {
    &self.state
  }

  /// Returns the merged configuration.
  #[must_use]
  pub fn config(&self) -> &ActorSystemConfig {
    self.state.config()
  }

  /// Returns the event stream.
  #[must_use]
  pub fn events(&self) -> &EventStream {
    self.state.events()
  }

  /// Subscribes to every event published by this system.
  pub fn subscribe(&self, subscriber: ArcShared<dyn EventStreamSubscriber>) {
    self.state.events().subscribe(subscriber);
  }

  /// Returns the error renderer registry.
  #[must_use]
  pub fn renderers(&self) -> &ErrorRendererRegistry {
    self.state.renderers()
  }

  /// Registers a renderer for `category` errors.
  pub fn register_renderer<F>(&self, category: Atom, renderer: F)
  where
    F: Fn(&Error) -> String + Send + Sync + 'static, {
    self.state.renderers().register(category, renderer);
  }

  /// Renders an error through the registered renderer for its category.
  #[must_use]
  pub fn render_error(&self, error: &Error) -> String {
    self.state.renderers().render(error)
  }

  /// Publishes a log event.
  pub fn log(&self, level: LogLevel, origin: Option<crate::actor_id::ActorId>, message: String) {
    self.state.log(level, origin, message);
  }

  /// Spawns an actor from `props`.
  ///
  /// # Errors
  ///
  /// Returns a [`SpawnError`] when the name conflicts, the constructor
  /// fails, or the system is terminating.
  pub fn spawn(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    spawn_with_state(&self.state, props)
  }

  /// Resolves a named actor.
  #[must_use]
  pub fn find_named(&self, name: &str) -> Option<ActorRef> {
    let id = self.state.names().resolve(name)?;
    self.state.find_cell(id.serial()).map(|cell| ActorCell::actor_ref_of(&cell))
  }

  /// Issues a blocking request with the system's default deadline.
  ///
  /// # Errors
  ///
  /// Returns the error reply, `request_timeout` when the deadline elapses,
  /// or `request_receiver_down` when the target cannot accept the request.
  pub fn ask(&self, target: &ActorRef, payload: Payload) -> Result<Payload, Error> {
    self.ask_with_timeout(target, payload, self.state.config().request_timeout())
  }

  /// Issues a blocking request with an explicit deadline.
  ///
  /// Blocks the calling thread, so it belongs outside actors: a handler
  /// calling it on the inline scheduler would wait on work only its own
  /// thread can run.
  ///
  /// # Errors
  ///
  /// Returns the error reply, `request_timeout` when the deadline elapses,
  /// or `request_receiver_down` when the target cannot accept the request.
  pub fn ask_with_timeout(&self, target: &ActorRef, payload: Payload, timeout: Duration) -> Result<Payload, Error> {
    let id = CorrelationId::new(self.state.allocate_ask_id());
    let future: ActorFuture<Envelope> = ActorFuture::pending();
    let backend = ArcShared::new(FutureReplyBackend::new(self.state.allocate_id(), future.clone()))
      .into_dyn(|backend| backend as &dyn ActorBackend);
    let sender = ActorRef::from_backend(backend);

    if target.send(Envelope::request(payload, id, sender)).is_err() {
      return Err(RuntimeErrorKind::RequestReceiverDown.into_error());
    }

    let deadline = self.state.now() + timeout;
    let Some(envelope) = future.wait_until(&**self.state.clock(), deadline) else {
      return Err(RuntimeErrorKind::RequestTimeout.into_error());
    };
    let payload = envelope.into_payload();
    match payload.single::<Error>() {
      | Some(error) => Err(error.clone()),
      | None => Ok(payload),
    }
  }

  /// Returns `true` once teardown has begun.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.state.is_terminated()
  }

  /// Tears the system down: stops the runtime services and terminates every
  /// surviving actor with exit reason `unknown`. In-flight quanta finish.
  pub fn shutdown(&self) {
    self.state.shutdown();
  }
}

impl core::fmt::Debug for ActorSystem {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorSystem").field("node", &self.state.node()).finish()
  }
}

/// Spawns an actor into `state` from `props`.
///
/// # Errors
///
/// Returns a [`SpawnError`] when the name conflicts, the constructor fails,
/// or the system is terminating.
pub(crate) fn spawn_with_state(state: &ArcShared<SystemState>, props: &Props) -> Result<ActorRef, SpawnError> {
  if state.is_terminated() {
    return Err(SpawnError::SystemTerminated);
  }
  let id = state.allocate_id();
  let name = props.name().map(String::from);
  let cell = ActorCell::create(state.clone(), id, name.clone(), props.is_detached());

  if let Some(name) = name.as_deref() {
    state.names().bind(name, id)?;
  }
  state.register_cell(&cell);

  let constructed = {
    let mut ctx = ActorContext::internal(&cell);
    props.build_behavior(&mut ctx).map(|behavior| {
      cell.install_behavior(behavior);
      ctx.take_quit()
    })
  };
  match constructed {
    | Ok(quit) => {
      state.publish(&crate::event_stream_event::EventStreamEvent::Lifecycle(
        crate::lifecycle_event::LifecycleEvent::spawned(id, name),
      ));
      if let Some(reason) = quit {
        ActorCell::terminate(&cell, reason);
      }
      ActorCell::finish_spawn(&cell);
      if cell.is_detached() && !cell.is_terminated() {
        state.scheduler().start_detached(cell.clone());
      }
      Ok(ActorCell::actor_ref_of(&cell))
    },
    | Err(error) => {
      if let Some(name) = name.as_deref() {
        state.names().release(name);
      }
      state.remove_cell(id.serial());
      ActorCell::terminate(&cell, ExitReason::from_error(error.clone()));
      Err(SpawnError::InitFailed(error))
    },
  }
}
