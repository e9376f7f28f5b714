use alloc::vec::Vec;

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use super::ActorSystem;
use crate::{
  actor_system_config::ActorSystemConfig, behavior::Behavior, exit_reason::ExitReason,
  handler_outcome::HandlerOutcome, payload::Payload, props::Props, runtime_error_kind::RuntimeErrorKind,
  spawn_error::SpawnError,
};

fn recording_props(log: ArcShared<SpinSyncMutex<Vec<i32>>>) -> Props {
  Props::from_fn(move |_ctx| {
    let log = log.clone();
    Ok(Behavior::new().on::<(i32,), _>(move |_ctx, (value,)| {
      log.lock().push(value);
      Ok(HandlerOutcome::NoReply)
    }))
  })
}

#[test]
fn tell_delivers_through_the_inline_scheduler() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log = ArcShared::new(SpinSyncMutex::new(Vec::new()));
  let actor = system.spawn(&recording_props(log.clone())).expect("spawn");

  actor.tell(Payload::of1(7_i32)).expect("tell");
  actor.tell(Payload::of1(8_i32)).expect("tell");

  assert_eq!(*log.lock(), [7, 8]);
}

#[test]
fn ask_round_trips_a_reply() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let doubler = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|_ctx, (value,)| Ok(HandlerOutcome::Reply(Payload::of1(value * 2)))))
    }))
    .expect("spawn");

  let reply = system.ask(&doubler, Payload::of1(21_i32)).expect("ask");
  assert_eq!(reply.get::<i32>(0), Ok(&42));
}

#[test]
fn ask_to_a_terminated_actor_reports_receiver_down() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let actor = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|ctx, (_value,)| {
        ctx.quit(ExitReason::normal());
        Ok(HandlerOutcome::NoReply)
      }))
    }))
    .expect("spawn");

  actor.tell(Payload::of1(0_i32)).expect("tell");
  assert!(actor.is_terminated());

  let error = system.ask(&actor, Payload::of1(1_i32)).expect_err("dead receiver");
  assert!(RuntimeErrorKind::RequestReceiverDown.matches(&error));
}

#[test]
fn named_spawns_resolve_and_conflict() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log = ArcShared::new(SpinSyncMutex::new(Vec::new()));

  let named = system.spawn(&recording_props(log.clone()).with_name("recorder")).expect("spawn");
  assert_eq!(system.find_named("recorder").map(|actor| actor.id()), Some(named.id()));

  let conflict = system.spawn(&recording_props(log).with_name("recorder"));
  assert!(matches!(conflict, Err(SpawnError::NameConflict(name)) if name == "recorder"));
}

#[test]
fn shutdown_terminates_survivors_with_unknown() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log = ArcShared::new(SpinSyncMutex::new(Vec::new()));
  let actor = system.spawn(&recording_props(log)).expect("spawn");

  system.shutdown();

  assert!(system.is_terminated());
  assert!(actor.is_terminated());
  assert!(matches!(system.spawn(&Props::from_fn(|_ctx| Ok(Behavior::new()))), Err(SpawnError::SystemTerminated)));
}
