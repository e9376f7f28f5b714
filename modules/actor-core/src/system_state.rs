use alloc::{string::String, vec::Vec};
use core::time::Duration;

use hashbrown::HashMap;
use portable_atomic::{AtomicU64, Ordering};
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared, Flag, WeakShared};

use crate::{
  actor_cell::ActorCell, actor_id::ActorId, actor_system_config::ActorSystemConfig,
  error_renderer::ErrorRendererRegistry, event_stream::EventStream, event_stream_event::EventStreamEvent,
  exit_reason::ExitReason, log_event::LogEvent, log_level::LogLevel, monotonic_clock::MonotonicClock,
  name_registry::NameRegistry, node_id::NodeId, scheduler_bridge::SchedulerBridge, timer_driver::TimerDriver,
};

/// Shared interior of an actor system.
///
/// Owns the registry, the event stream, the renderer table, and the
/// runtime services (scheduler bridge, timer driver, clock). Cells hold a
/// strong handle to it; the registry holds cells weakly so bookkeeping
/// never keeps an actor alive.
pub struct SystemState {
  config:      ActorSystemConfig,
  next_serial: AtomicU64,
  next_ask:    AtomicU64,
  cells:       SpinSyncMutex<HashMap<u64, WeakShared<ActorCell>>>,
  names:       NameRegistry,
  events:      EventStream,
  renderers:   ErrorRendererRegistry,
  scheduler:   ArcShared<dyn SchedulerBridge>,
  timer:       ArcShared<dyn TimerDriver>,
  clock:       ArcShared<dyn MonotonicClock>,
  terminated:  Flag,
}

impl SystemState {
  /// Creates the state with the provided runtime services.
  #[must_use]
  pub fn new(
    config: ActorSystemConfig,
    scheduler: ArcShared<dyn SchedulerBridge>,
    timer: ArcShared<dyn TimerDriver>,
    clock: ArcShared<dyn MonotonicClock>,
  ) -> Self {
    Self {
      config,
      next_serial: AtomicU64::new(1),
      next_ask: AtomicU64::new(1),
      cells: SpinSyncMutex::new(HashMap::new()),
      names: NameRegistry::new(),
      events: EventStream::new(),
      renderers: ErrorRendererRegistry::new(),
      scheduler,
      timer,
      clock,
      terminated: Flag::new(false),
    }
  }

  /// Returns the merged configuration.
  #[must_use]
  pub const fn config(&self) -> &ActorSystemConfig {
    &self.config
  }

  /// Returns this system's node identifier.
  #[must_use]
  pub const fn node(&self) -> NodeId {
    self.config.node()
  }

  /// Allocates a never-reused actor identifier.
  #[must_use]
  pub fn allocate_id(&self) -> ActorId {
    ActorId::new(self.node(), self.next_serial.fetch_add(1, Ordering::AcqRel))
  }

  /// Allocates a correlation id for a blocking request issued outside any
  /// actor.
  #[must_use]
  pub(crate) fn allocate_ask_id(&self) -> u64 {
    self.next_ask.fetch_add(1, Ordering::AcqRel)
  }

  pub(crate) fn register_cell(&self, cell: &ArcShared<ActorCell>) {
    self.cells.lock().insert(cell.id().serial(), cell.downgrade());
  }

  pub(crate) fn remove_cell(&self, serial: u64) {
    self.cells.lock().remove(&serial);
  }

  /// Resolves a live local actor by serial.
  #[must_use]
  pub fn find_cell(&self, serial: u64) -> Option<ArcShared<ActorCell>> {
    self.cells.lock().get(&serial).and_then(WeakShared::upgrade)
  }

  /// Hands a runnable cell to the scheduler bridge.
  pub fn schedule(&self, cell: ArcShared<ActorCell>) {
    if !self.terminated.get() {
      self.scheduler.schedule(cell);
    }
  }

  /// Returns the timer driver.
  #[must_use]
  pub fn timer(&self) -> &dyn TimerDriver {
    &*self.timer
  }

  /// Returns the monotonic clock.
  #[must_use]
  pub fn clock(&self) -> &ArcShared<dyn MonotonicClock> {
    &self.clock
  }

  /// Returns the current monotonic time.
  #[must_use]
  pub fn now(&self) -> Duration {
    self.clock.now()
  }

  /// Returns the name registry.
  #[must_use]
  pub const fn names(&self) -> &NameRegistry {
    &self.names
  }

  /// Returns the event stream.
  #[must_use]
  pub const fn events(&self) -> &EventStream {
    &self.events
  }

  /// Returns the error renderer registry.
  #[must_use]
  pub const fn renderers(&self) -> &ErrorRendererRegistry {
    &self.renderers
  }

  /// Publishes an event on the event stream.
  pub fn publish(&self, event: &EventStreamEvent) {
    self.events.publish(event);
  }

  /// Publishes a log event.
  pub fn log(&self, level: LogLevel, origin: Option<ActorId>, message: String) {
    self.publish(&EventStreamEvent::Log(LogEvent::new(level, origin, message)));
  }

  /// Returns `true` once teardown has begun.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.terminated.get()
  }

  pub(crate) fn scheduler(&self) -> &ArcShared<dyn SchedulerBridge> {
    &self.scheduler
  }

  /// Tears the system down: stops the runtime services, then terminates
  /// every surviving cell with exit reason `unknown`.
  pub fn shutdown(&self) {
    if !self.terminated.try_raise() {
      return;
    }
    self.scheduler.shutdown();
    self.timer.shutdown();
    let survivors: Vec<ArcShared<ActorCell>> =
      self.cells.lock().values().filter_map(WeakShared::upgrade).collect();
    for cell in survivors {
      ActorCell::terminate(&cell, ExitReason::unknown());
    }
    self.cells.lock().clear();
  }
}
