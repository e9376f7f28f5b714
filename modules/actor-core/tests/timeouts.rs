use std::sync::{Arc, Mutex};
use std::time::Duration;

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, Atom, Behavior, HandlerOutcome, InlineScheduler, ManualClock,
  ManualTimerDriver, MonotonicClock, Payload, Props, RuntimeErrorKind, SchedulerBridge, TimerDriver,
};
use reaktor_utils_core_rs::sync::ArcShared;

fn manual_system() -> (ActorSystem, ArcShared<ManualTimerDriver>, ArcShared<ManualClock>) {
  let scheduler = ArcShared::new(InlineScheduler::new());
  let timer = ArcShared::new(ManualTimerDriver::new());
  let clock = ArcShared::new(ManualClock::new());
  let system = ActorSystem::with_services(
    ActorSystemConfig::new(),
    scheduler.into_dyn(|scheduler| scheduler as &dyn SchedulerBridge),
    timer.clone().into_dyn(|timer| timer as &dyn TimerDriver),
    clock.clone().into_dyn(|clock| clock as &dyn MonotonicClock),
  );
  (system, timer, clock)
}

#[test]
fn an_expired_request_deadline_fires_the_error_handler_once() {
  let (system, timer, clock) = manual_system();

  let silent = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(Atom,), _>(|_ctx, (_op,)| Ok(HandlerOutcome::NoReply)))
    }))
    .expect("spawn silent");

  let errors = Arc::new(Mutex::new(Vec::new()));
  let requester = {
    let errors = errors.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let silent = silent.clone();
        let errors = errors.clone();
        Ok(Behavior::new().on::<(Atom,), _>(move |ctx, (_go,)| {
          let errors = errors.clone();
          ctx
            .request_with_timeout(&silent, Payload::of1(Atom::new("ping")), Duration::from_millis(50))
            .then(|_ctx, _payload| panic!("no response can arrive"))
            .on_error(move |_ctx, error| {
              errors.lock().expect("lock").push(error.clone());
              Ok(())
            });
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn requester")
  };

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");
  assert!(errors.lock().expect("lock").is_empty(), "deadline has not elapsed yet");

  clock.advance(Duration::from_millis(60));
  assert_eq!(timer.run_due(clock.now()), 1, "one armed deadline fires");

  let observed = errors.lock().expect("lock").clone();
  assert_eq!(observed.len(), 1);
  assert!(RuntimeErrorKind::RequestTimeout.matches(&observed[0]));

  // A later firing attempt is a no-op: the record is gone.
  clock.advance(Duration::from_millis(60));
  timer.run_due(clock.now());
  assert_eq!(errors.lock().expect("lock").len(), 1, "the handler never fires twice");
}

#[test]
fn behavior_inactivity_windows_fire_exactly_once_per_quiet_period() {
  let (system, timer, clock) = manual_system();

  let fired = Arc::new(Mutex::new(0_usize));
  let actor = {
    let fired = fired.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let fired = fired.clone();
        Ok(
          Behavior::new()
            .on::<(i32,), _>(|_ctx, (_value,)| Ok(HandlerOutcome::NoReply))
            .with_timeout(Duration::from_millis(100), move |_ctx| {
              *fired.lock().expect("lock") += 1;
              Ok(())
            }),
        )
      }))
      .expect("spawn")
  };

  clock.advance(Duration::from_millis(150));
  timer.run_due(clock.now());
  assert_eq!(*fired.lock().expect("lock"), 1, "quiet since spawn, one firing");

  // Mailbox activity rearms a fresh window.
  actor.tell(Payload::of1(5_i32)).expect("tell");
  clock.advance(Duration::from_millis(150));
  timer.run_due(clock.now());
  assert_eq!(*fired.lock().expect("lock"), 2);
}

#[test]
fn arrivals_reset_the_inactivity_window() {
  let (system, timer, clock) = manual_system();

  let fired = Arc::new(Mutex::new(0_usize));
  let actor = {
    let fired = fired.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let fired = fired.clone();
        Ok(
          Behavior::new()
            .on::<(i32,), _>(|_ctx, (_value,)| Ok(HandlerOutcome::NoReply))
            .with_timeout(Duration::from_millis(100), move |_ctx| {
              *fired.lock().expect("lock") += 1;
              Ok(())
            }),
        )
      }))
      .expect("spawn")
  };

  // Traffic lands before the window elapses; the armed marker goes stale.
  clock.advance(Duration::from_millis(50));
  actor.tell(Payload::of1(1_i32)).expect("tell");
  clock.advance(Duration::from_millis(60));
  timer.run_due(clock.now());
  assert_eq!(*fired.lock().expect("lock"), 0, "the stale marker is discarded");

  // A full quiet window after the last activity does fire.
  clock.advance(Duration::from_millis(120));
  timer.run_due(clock.now());
  assert_eq!(*fired.lock().expect("lock"), 1);
}

#[test]
fn blocking_ask_times_out_when_no_response_arrives() {
  let (system, _timer, clock) = manual_system();
  let silent = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(Atom,), _>(|_ctx, (_op,)| Ok(HandlerOutcome::NoReply)))
    }))
    .expect("spawn silent");

  // The manual clock only moves when advanced, so an already-expired
  // deadline is the deterministic way to exercise the timeout path.
  clock.advance(Duration::from_millis(1));
  let error = system.ask_with_timeout(&silent, Payload::of1(Atom::new("ping")), Duration::ZERO).expect_err("timeout");
  assert!(RuntimeErrorKind::RequestTimeout.matches(&error));
}
