use alloc::{string::String, vec::Vec};
use core::{num::NonZeroUsize, time::Duration};

use portable_atomic::{AtomicU64, AtomicU8, Ordering};
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared, Flag, WeakShared};

use crate::{
  actor_backend::ActorBackend,
  actor_context::ActorContext,
  actor_id::ActorId,
  actor_ref::ActorRef,
  actor_state::ActorState,
  behavior::Behavior,
  correlation_id::CorrelationId,
  dead_letter_entry::DeadLetterEntry,
  default_handler_policy::DefaultHandlerPolicy,
  down_message::DownMessage,
  envelope::Envelope,
  error::Error,
  event_stream_event::EventStreamEvent,
  exit_message::ExitMessage,
  exit_reason::ExitReason,
  handler_outcome::HandlerOutcome,
  inactivity_elapsed::InactivityElapsed,
  lifecycle_event::LifecycleEvent,
  log_level::LogLevel,
  mailbox::Mailbox,
  payload::Payload,
  pending_requests::{PendingRequests, ResponseDisposition},
  priority::Priority,
  quantum_outcome::QuantumOutcome,
  request_handle::RequestHandle,
  request_record::RequestRecord,
  runtime_error_kind::RuntimeErrorKind,
  send_error::SendError,
  system_hooks::SystemHooks,
  system_state::SystemState,
  timer_action::TimerAction,
  weak_actor_ref::WeakActorRef,
};

const EPOCH_NONE: u64 = u64::MAX;

/// Actor control block: identity, mailbox, behavior, supervision sets,
/// correlation table, and scheduling flags.
///
/// All fields except the mailbox and the supervision sets are mutated only
/// by the worker currently holding the running claim; the claim itself is a
/// compare-and-swap, which is what enforces the at-most-one-worker
/// invariant.
pub struct ActorCell {
  id:               ActorId,
  name:             Option<String>,
  system:           ArcShared<SystemState>,
  mailbox:          Mailbox,
  behavior:         SpinSyncMutex<Behavior>,
  hooks:            SpinSyncMutex<SystemHooks>,
  pending:          SpinSyncMutex<PendingRequests>,
  links:            SpinSyncMutex<Vec<WeakActorRef>>,
  monitors:         SpinSyncMutex<Vec<WeakActorRef>>,
  state:            AtomicU8,
  running:          Flag,
  terminating:      Flag,
  detached:         bool,
  default_policy:   SpinSyncMutex<DefaultHandlerPolicy>,
  inactivity_epoch: AtomicU64,
  armed_epoch:      AtomicU64,
  exit_reason:      SpinSyncMutex<Option<ExitReason>>,
  self_weak:        SpinSyncMutex<Option<WeakShared<ActorCell>>>,
}

impl ActorCell {
  /// Creates a cell with the running claim held by the spawner; the
  /// constructor runs under that claim and [`ActorCell::finish_spawn`]
  /// releases it.
  pub(crate) fn create(
    system: ArcShared<SystemState>,
    id: ActorId,
    name: Option<String>,
    detached: bool,
  ) -> ArcShared<Self> {
    let cell = ArcShared::new(Self {
      id,
      name,
      system,
      mailbox: Mailbox::new(),
      behavior: SpinSyncMutex::new(Behavior::new()),
      hooks: SpinSyncMutex::new(SystemHooks::new()),
      pending: SpinSyncMutex::new(PendingRequests::new()),
      links: SpinSyncMutex::new(Vec::new()),
      monitors: SpinSyncMutex::new(Vec::new()),
      state: AtomicU8::new(ActorState::Idle.as_u8()),
      running: Flag::new(true),
      terminating: Flag::new(false),
      detached,
      default_policy: SpinSyncMutex::new(DefaultHandlerPolicy::default()),
      inactivity_epoch: AtomicU64::new(0),
      armed_epoch: AtomicU64::new(EPOCH_NONE),
      exit_reason: SpinSyncMutex::new(None),
      self_weak: SpinSyncMutex::new(None),
    });
    *cell.self_weak.lock() = Some(cell.downgrade());
    cell
  }

  /// Returns the actor's identifier.
  #[must_use]
  pub const fn id(&self) -> ActorId {
    self.id
  }

  /// Returns the registered name, if any.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the owning system state.
  #[must_use]
  pub(crate) const fn system(&self) -> &ArcShared<SystemState> {
    &self.system
  }

  /// Returns the mailbox.
  #[must_use]
  pub fn mailbox(&self) -> &Mailbox {
    &self.mailbox
  }

  pub(crate) const fn hooks(&self) -> &SpinSyncMutex<SystemHooks> {
    &self.hooks
  }

  /// Returns `true` when the actor runs on a dedicated thread.
  #[must_use]
  pub const fn is_detached(&self) -> bool {
    self.detached
  }

  /// Returns the descriptive scheduling state.
  #[must_use]
  pub fn state(&self) -> ActorState {
    ActorState::from_u8(self.state.load(Ordering::Acquire))
  }

  /// Returns `true` once termination has begun.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.terminating.get()
  }

  /// Returns the quantum's envelope budget from the system configuration.
  #[must_use]
  pub fn throughput_limit(&self) -> Option<NonZeroUsize> {
    self.system.config().scheduler().max_throughput()
  }

  /// Builds a strong handle to this cell.
  #[must_use]
  pub fn actor_ref_of(this: &ArcShared<Self>) -> ActorRef {
    ActorRef::from_backend(this.clone().into_dyn(|cell| cell as &dyn ActorBackend))
  }

  pub(crate) fn install_behavior(&self, behavior: Behavior) {
    *self.behavior.lock() = behavior;
  }

  pub(crate) fn set_default_policy(&self, policy: DefaultHandlerPolicy) {
    *self.default_policy.lock() = policy;
  }

  /// Releases the spawn-time running claim and recovers any wakeup that
  /// arrived while the constructor ran.
  pub(crate) fn finish_spawn(this: &ArcShared<Self>) {
    if this.mailbox.is_empty() && !this.is_terminated() {
      if let Some(window) = this.behavior.lock().timeout_window() {
        this.set_state(ActorState::BlockedOnTimeout);
        this.arm_inactivity(this.weak_self(), window);
      }
    }
    this.running.set(false);
    if !this.mailbox.is_empty() && !this.is_terminated() {
      this.system.schedule(this.clone());
    }
  }

  fn schedule_self(&self) {
    let cell = self.self_weak.lock().as_ref().and_then(WeakShared::upgrade);
    if let Some(cell) = cell {
      self.system.schedule(cell);
    }
  }

  fn weak_self(&self) -> Option<WeakShared<ActorCell>> {
    self.self_weak.lock().clone()
  }

  // ---------------------------------------------------------------- sends

  fn handle_undeliverable(&self, envelope: &Envelope) {
    self.system.publish(&EventStreamEvent::DeadLetter(DeadLetterEntry::new(self.id, envelope.correlation())));
    if envelope.kind().is_request() && envelope.correlation().is_correlated() {
      Self::respond_error(envelope, RuntimeErrorKind::RequestReceiverDown.into_error());
    }
  }

  fn respond_error(envelope: &Envelope, error: Error) {
    if let Some(target) = envelope.reply_target() {
      let _ = target.send(Envelope::response(Payload::of1(error), envelope.correlation()));
    }
  }

  fn respond_value(&self, envelope: &Envelope, payload: Payload) {
    match envelope.reply_target() {
      | Some(target) => {
        let _ = target.send(Envelope::response(payload, envelope.correlation()));
      },
      | None => {
        self.system.publish(&EventStreamEvent::DeadLetter(DeadLetterEntry::new(self.id, envelope.correlation())));
      },
    }
  }

  // ------------------------------------------------------------- requests

  pub(crate) fn issue_request(
    this: &ArcShared<Self>,
    target: &ActorRef,
    payload: Payload,
    timeout: Duration,
  ) -> RequestHandle {
    let id = {
      let mut pending = this.pending.lock();
      let id = pending.allocate();
      pending.insert(id);
      id
    };
    let deadline = this.system.now() + timeout;
    this.system.timer().arm(deadline, TimerAction::RequestTimeout { cell: this.downgrade(), id });
    let envelope = Envelope::request(payload, id, Self::actor_ref_of(this));
    if target.send(envelope).is_err() {
      let error = RuntimeErrorKind::RequestReceiverDown.into_error();
      let _ = this.enqueue(Envelope::response(Payload::of1(error), id));
    }
    RequestHandle::new(this.clone(), id)
  }

  pub(crate) fn with_record(&self, id: CorrelationId, apply: impl FnOnce(&mut RequestRecord)) {
    let mut pending = self.pending.lock();
    if let Some(record) = pending.record_mut(id) {
      apply(record);
    }
  }

  pub(crate) fn mark_awaited(&self, id: CorrelationId) {
    self.pending.lock().push_awaited(id);
  }

  /// Synthesises the `request_timeout` error response for a still-pending
  /// request; the ordinary correlation path delivers it.
  pub(crate) fn deliver_request_timeout(this: &ArcShared<Self>, id: CorrelationId) {
    if !this.pending.lock().contains(id) {
      return;
    }
    let error = RuntimeErrorKind::RequestTimeout.into_error();
    let _ = this.enqueue(Envelope::response(Payload::of1(error), id));
  }

  /// Enqueues the inactivity marker for a still-armed window. Bypasses the
  /// activity epoch so the marker does not reset the window it reports.
  pub(crate) fn deliver_inactivity(this: &ArcShared<Self>, epoch: u64) {
    if this.armed_epoch.load(Ordering::Acquire) != epoch || this.is_terminated() {
      return;
    }
    let marker = Envelope::tell(Payload::of1(InactivityElapsed::new(epoch))).with_priority(Priority::Urgent);
    if let Ok(outcome) = this.mailbox.enqueue(marker) {
      if outcome.needs_schedule() {
        this.system.schedule(this.clone());
      }
    }
  }

  // -------------------------------------------------------------- engine

  /// Runs one scheduling quantum: up to `limit` envelopes, honoring
  /// priority, system messages, correlation, and suspension rules.
  pub fn run_quantum(this: &ArcShared<Self>, limit: Option<NonZeroUsize>) -> QuantumOutcome {
    if !this.running.try_raise() {
      return QuantumOutcome::Busy;
    }
    if this.is_terminated() {
      this.running.set(false);
      return QuantumOutcome::Terminated;
    }
    this.set_state(ActorState::Running);

    let mut processed = 0_usize;
    while limit.map_or(true, |limit| processed < limit.get()) {
      if this.is_terminated() {
        break;
      }
      let Some(envelope) = this.mailbox.dequeue() else {
        break;
      };
      processed += 1;
      Self::process_envelope(this, envelope);
    }

    if this.is_terminated() {
      this.running.set(false);
      return QuantumOutcome::Terminated;
    }

    let awaiting = this.pending.lock().is_awaiting();
    if this.mailbox.is_empty() {
      if awaiting {
        this.set_state(ActorState::AwaitingResponse);
      } else if let Some(window) = this.behavior.lock().timeout_window() {
        this.set_state(ActorState::BlockedOnTimeout);
        this.arm_inactivity(this_weak(this), window);
      } else {
        this.set_state(ActorState::Idle);
      }
      this.running.set(false);
      // Recover a wakeup raced away while the claim was still held.
      if !this.mailbox.is_empty() && !this.is_terminated() {
        this.system.schedule(this.clone());
      }
      QuantumOutcome::Idle
    } else {
      this.set_state(if awaiting { ActorState::AwaitingResponse } else { ActorState::Idle });
      this.running.set(false);
      QuantumOutcome::MoreWork
    }
  }

  fn set_state(&self, state: ActorState) {
    self.state.store(state.as_u8(), Ordering::Release);
  }

  fn arm_inactivity(&self, cell: Option<WeakShared<ActorCell>>, window: Duration) {
    let Some(cell) = cell else {
      return;
    };
    let epoch = self.inactivity_epoch.load(Ordering::Acquire);
    if self.armed_epoch.swap(epoch, Ordering::AcqRel) != epoch {
      let deadline = self.system.now() + window;
      self.system.timer().arm(deadline, TimerAction::Inactivity { cell, epoch });
    }
  }

  fn process_envelope(this: &ArcShared<Self>, envelope: Envelope) {
    if envelope.kind().is_response() {
      Self::handle_response(this, envelope);
      return;
    }
    let payload = envelope.payload();
    if let Some(exit) = payload.single::<ExitMessage>() {
      let exit = exit.clone();
      Self::handle_exit(this, &exit);
      return;
    }
    if let Some(down) = payload.single::<DownMessage>() {
      let down = down.clone();
      Self::handle_down(this, &down);
      return;
    }
    if let Some(marker) = payload.single::<InactivityElapsed>() {
      let epoch = marker.epoch();
      Self::handle_inactivity(this, epoch);
      return;
    }
    if let Some(error) = payload.single::<Error>() {
      let error = error.clone();
      Self::handle_error_value(this, error);
      return;
    }
    if this.pending.lock().is_awaiting() {
      // Only correlated responses progress an awaiting actor.
      this.mailbox.stash(envelope);
      return;
    }
    Self::dispatch_behavior(this, envelope);
  }

  fn dispatch_behavior(this: &ArcShared<Self>, envelope: Envelope) {
    let matched = this.behavior.lock().find_match(envelope.payload());
    let Some(index) = matched else {
      Self::apply_default_policy(this, envelope);
      return;
    };

    let mut ctx = ActorContext::for_envelope(this, &envelope);
    let result = {
      let mut behavior = this.behavior.lock();
      behavior.run_clause(index, &mut ctx, envelope.payload())
    };
    let delegate = ctx.take_delegate();
    let answered = ctx.was_answered();

    match result {
      | Ok(HandlerOutcome::Skip) => {
        this.mailbox.stash(envelope);
      },
      | Ok(HandlerOutcome::Reply(reply)) => {
        if let Some(target) = delegate {
          Self::forward_delegated(this, envelope, &target);
        } else if envelope.kind().is_request() && !answered {
          this.respond_value(&envelope, reply);
        }
        this.mailbox.unstash_all();
      },
      | Ok(HandlerOutcome::NoReply) => {
        if let Some(target) = delegate {
          Self::forward_delegated(this, envelope, &target);
        }
        this.mailbox.unstash_all();
      },
      | Err(error) => {
        if envelope.kind().is_request() && !answered {
          Self::respond_error(&envelope, error);
        } else {
          Self::handle_error_value(this, error);
        }
      },
    }
    Self::apply_ctx_effects(this, &mut ctx);
  }

  fn forward_delegated(this: &ArcShared<Self>, mut envelope: Envelope, target: &ActorRef) {
    if envelope.stage_count() == 0 {
      if let Some(original) = envelope.sender().cloned() {
        envelope.push_stage(original);
      }
    }
    let envelope = envelope.with_sender(Self::actor_ref_of(this));
    if let Err(send_error) = target.send(envelope) {
      let envelope = send_error.into_envelope();
      if envelope.kind().is_request() {
        Self::respond_error(&envelope, RuntimeErrorKind::RequestReceiverDown.into_error());
      }
    }
  }

  fn apply_default_policy(this: &ArcShared<Self>, envelope: Envelope) {
    let policy = *this.default_policy.lock();
    match policy {
      | DefaultHandlerPolicy::Skip => this.mailbox.stash(envelope),
      | DefaultHandlerPolicy::Drop => {},
      | DefaultHandlerPolicy::PrintAndDrop => {
        this.system.log(
          LogLevel::Warn,
          Some(this.id),
          alloc::format!("dropped unmatched message with {} field(s)", envelope.payload().len()),
        );
      },
      | DefaultHandlerPolicy::Reflect | DefaultHandlerPolicy::ReflectAndQuit => {
        let error = RuntimeErrorKind::UnexpectedMessage.into_error();
        if envelope.kind().is_request() {
          Self::respond_error(&envelope, error.clone());
        } else if let Some(sender) = envelope.sender() {
          let _ = sender.send(Envelope::tell(envelope.payload().clone()));
        } else {
          this.system.publish(&EventStreamEvent::DeadLetter(DeadLetterEntry::new(this.id, envelope.correlation())));
        }
        if policy == DefaultHandlerPolicy::ReflectAndQuit {
          Self::terminate(this, ExitReason::from_error(error));
        }
      },
    }
  }

  fn handle_response(this: &ArcShared<Self>, envelope: Envelope) {
    let id = envelope.correlation();
    let payload = envelope.into_payload();
    let disposition = this.pending.lock().accept_response(id, payload);
    match disposition {
      | ResponseDisposition::Fire(record, payload) => {
        Self::fire_record(this, record, &payload);
        loop {
          let ready = this.pending.lock().next_ready();
          match ready {
            | Some((record, payload)) => Self::fire_record(this, record, &payload),
            | None => break,
          }
        }
        if !this.pending.lock().is_awaiting() {
          this.mailbox.unstash_all();
        }
      },
      | ResponseDisposition::Parked => {},
      | ResponseDisposition::Unclaimed(_) => {
        this.system.log(LogLevel::Debug, Some(this.id), alloc::format!("dropping uncorrelated response {id}"));
      },
    }
  }

  fn fire_record(this: &ArcShared<Self>, mut record: RequestRecord, payload: &Payload) {
    let mut ctx = ActorContext::internal(this);
    if let Some(error) = payload.single::<Error>() {
      let error = error.clone();
      match record.take_error_handler() {
        | Some(handler) => {
          if let Err(failure) = handler(&mut ctx, &error) {
            Self::handle_error_value(this, failure);
          }
        },
        | None => Self::handle_error_value(this, error),
      }
    } else if let Some(handler) = record.take_response_handler() {
      if let Err(failure) = handler(&mut ctx, payload) {
        Self::handle_error_value(this, failure);
      }
    }
    Self::apply_ctx_effects(this, &mut ctx);
  }

  fn handle_exit(this: &ArcShared<Self>, exit: &ExitMessage) {
    let hook = this.hooks.lock().take_exit();
    match hook {
      | Some(mut hook) => {
        let mut ctx = ActorContext::internal(this);
        let result = hook(&mut ctx, exit);
        this.hooks.lock().restore_exit(hook);
        if let Err(error) = result {
          Self::handle_error_value(this, error);
        }
        Self::apply_ctx_effects(this, &mut ctx);
      },
      | None => {
        if !exit.reason().is_normal() {
          Self::terminate(this, exit.reason().clone());
        }
      },
    }
  }

  fn handle_down(this: &ArcShared<Self>, down: &DownMessage) {
    let hook = this.hooks.lock().take_down();
    if let Some(mut hook) = hook {
      let mut ctx = ActorContext::internal(this);
      let result = hook(&mut ctx, down);
      this.hooks.lock().restore_down(hook);
      if let Err(error) = result {
        Self::handle_error_value(this, error);
      }
      Self::apply_ctx_effects(this, &mut ctx);
    }
  }

  fn handle_inactivity(this: &ArcShared<Self>, epoch: u64) {
    if this.armed_epoch.swap(EPOCH_NONE, Ordering::AcqRel) != epoch {
      return;
    }
    if this.inactivity_epoch.load(Ordering::Acquire) != epoch {
      return;
    }
    let mut ctx = ActorContext::internal(this);
    let result = {
      let mut behavior = this.behavior.lock();
      behavior.run_timeout(&mut ctx)
    };
    // Fresh quiet window after each firing.
    this.inactivity_epoch.fetch_add(1, Ordering::AcqRel);
    if let Err(error) = result {
      Self::handle_error_value(this, error);
    }
    Self::apply_ctx_effects(this, &mut ctx);
  }

  fn handle_error_value(this: &ArcShared<Self>, error: Error) {
    let hook = this.hooks.lock().take_error();
    match hook {
      | Some(mut hook) => {
        let mut ctx = ActorContext::internal(this);
        let result = hook(&mut ctx, &error);
        this.hooks.lock().restore_error(hook);
        if let Err(failure) = result {
          Self::terminate(this, ExitReason::from_error(failure));
        }
        Self::apply_ctx_effects(this, &mut ctx);
      },
      | None => Self::terminate(this, ExitReason::from_error(error)),
    }
  }

  fn apply_ctx_effects(this: &ArcShared<Self>, ctx: &mut ActorContext<'_>) {
    if let Some(next) = ctx.take_next_behavior() {
      this.install_behavior(next);
      this.mailbox.unstash_all();
    }
    if let Some(reason) = ctx.take_quit() {
      Self::terminate(this, reason);
    }
  }

  // --------------------------------------------------------- termination

  /// Terminates the actor: closes the mailbox, fails pending correlated
  /// envelopes, runs cleanup hooks, notifies monitors and links, and
  /// releases the cell from the registry.
  pub(crate) fn terminate(this: &ArcShared<Self>, reason: ExitReason) {
    if !this.terminating.try_raise() {
      return;
    }
    this.set_state(ActorState::Terminated);
    *this.exit_reason.lock() = Some(reason.clone());

    let drained = this.mailbox.close();
    for envelope in &drained {
      if envelope.kind().is_request() && envelope.correlation().is_correlated() {
        Self::respond_error(envelope, RuntimeErrorKind::RequestReceiverDown.into_error());
      }
    }

    let cleanup = this.hooks.lock().take_cleanup();
    if !cleanup.is_empty() {
      let mut ctx = ActorContext::internal(this);
      for hook in cleanup {
        hook(&mut ctx);
      }
    }

    let monitors: Vec<WeakActorRef> = this.monitors.lock().drain(..).collect();
    for observer in monitors {
      if let Some(observer) = observer.upgrade() {
        let down = DownMessage::new(this.id, reason.clone());
        let _ = observer.send(Envelope::tell(Payload::of1(down)).with_priority(Priority::Urgent));
      }
    }

    let links: Vec<WeakActorRef> = this.links.lock().drain(..).collect();
    if !reason.is_normal() {
      for peer in links {
        if peer.id() == this.id {
          continue;
        }
        if let Some(peer) = peer.upgrade() {
          let exit = ExitMessage::new(this.id, reason.clone());
          let _ = peer.send(Envelope::tell(Payload::of1(exit)).with_priority(Priority::Urgent));
        }
      }
    }

    this.system.publish(&EventStreamEvent::Lifecycle(LifecycleEvent::stopped(
      this.id,
      this.name.clone(),
      reason,
    )));
    if let Some(name) = this.name.as_deref() {
      this.system.names().release(name);
    }
    this.system.remove_cell(this.id.serial());

    // Release the state handle: behavior closures own the actor state.
    this.install_behavior(Behavior::new());
    this.hooks.lock().clear();
  }

  /// Converts a quantum that panicked into a `runtime_error` termination.
  ///
  /// Runtimes that catch unwinds call this after the stack has unwound;
  /// the running claim is force-released because the panicking worker
  /// never reached the orderly end of its quantum.
  pub fn fail_from_panic(this: &ArcShared<Self>) {
    this.running.set(false);
    Self::terminate(this, ExitReason::from_error(RuntimeErrorKind::RuntimeError.into_error()));
  }

  fn stored_exit_reason(&self) -> ExitReason {
    self.exit_reason.lock().clone().unwrap_or_else(ExitReason::unreachable)
  }
}

fn this_weak(this: &ArcShared<ActorCell>) -> Option<WeakShared<ActorCell>> {
  this.weak_self()
}

impl ActorBackend for ActorCell {
  fn id(&self) -> ActorId {
    self.id
  }

  fn enqueue(&self, envelope: Envelope) -> Result<(), SendError> {
    if self.is_terminated() {
      self.handle_undeliverable(&envelope);
      return Ok(());
    }
    self.inactivity_epoch.fetch_add(1, Ordering::AcqRel);
    match self.mailbox.enqueue(envelope) {
      | Ok(outcome) => {
        if outcome.needs_schedule() {
          self.schedule_self();
        }
        Ok(())
      },
      | Err(error) => {
        // Lost the race against termination; absorb like any other late
        // delivery.
        self.handle_undeliverable(&error.into_envelope());
        Ok(())
      },
    }
  }

  fn is_terminated(&self) -> bool {
    self.terminating.get()
  }

  fn add_link(&self, peer: &ActorRef) -> Result<(), Error> {
    if self.is_terminated() {
      let exit = ExitMessage::new(self.id, self.stored_exit_reason());
      let _ = peer.send(Envelope::tell(Payload::of1(exit)).with_priority(Priority::Urgent));
      return Ok(());
    }
    let mut links = self.links.lock();
    if links.iter().all(|existing| existing.id() != peer.id()) {
      links.push(peer.downgrade());
    }
    Ok(())
  }

  fn remove_link(&self, peer: &ActorRef) -> Result<(), Error> {
    self.links.lock().retain(|existing| existing.id() != peer.id());
    Ok(())
  }

  fn add_monitor(&self, observer: &ActorRef) -> Result<(), Error> {
    if self.is_terminated() {
      let down = DownMessage::new(self.id, self.stored_exit_reason());
      let _ = observer.send(Envelope::tell(Payload::of1(down)).with_priority(Priority::Urgent));
      return Ok(());
    }
    let mut monitors = self.monitors.lock();
    if monitors.iter().all(|existing| existing.id() != observer.id()) {
      monitors.push(observer.downgrade());
    }
    Ok(())
  }

  fn remove_monitor(&self, observer: &ActorRef) -> Result<(), Error> {
    self.monitors.lock().retain(|existing| existing.id() != observer.id());
    Ok(())
  }
}

impl core::fmt::Debug for ActorCell {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorCell")
      .field("id", &self.id)
      .field("name", &self.name)
      .field("state", &self.state())
      .field("mailbox_len", &self.mailbox.len())
      .finish()
  }
}
