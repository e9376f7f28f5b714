use std::sync::{Arc, Mutex};

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, Behavior, DefaultHandlerPolicy, HandlerOutcome, Payload, Props,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Seen {
  Int(i32),
  Float(f64),
}

fn float_behavior(log: Arc<Mutex<Vec<Seen>>>) -> Behavior {
  Behavior::new().on::<(f64,), _>(move |_ctx, (value,)| {
    log.lock().expect("lock").push(Seen::Float(value));
    Ok(HandlerOutcome::NoReply)
  })
}

#[test]
fn stashed_envelope_is_rematched_after_a_behavior_change() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log: Arc<Mutex<Vec<Seen>>> = Arc::new(Mutex::new(Vec::new()));

  let actor = {
    let log = log.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        ctx.set_default_policy(DefaultHandlerPolicy::Skip);
        let log = log.clone();
        Ok(Behavior::new().on::<(i32,), _>(move |ctx, (value,)| {
          log.lock().expect("lock").push(Seen::Int(value));
          ctx.become_behavior(float_behavior(log.clone()));
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn")
  };

  // The float arrives first but nothing matches it yet; the skip policy
  // stashes it. The int matches, installs a float-accepting behavior, and
  // the stashed float is processed next.
  actor.tell(Payload::of1(1.0_f64)).expect("float first");
  actor.tell(Payload::of1(2_i32)).expect("int second");

  assert_eq!(*log.lock().expect("lock"), [Seen::Int(2), Seen::Float(1.0)]);
  assert!(!actor.is_terminated());
}

#[test]
fn skip_verdict_from_a_matching_clause_also_stashes() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));

  let actor = {
    let log = log.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let log = log.clone();
        let mut deferred_once = false;
        Ok(Behavior::new().on::<(i32,), _>(move |_ctx, (value,)| {
          if value < 0 && !deferred_once {
            deferred_once = true;
            return Ok(HandlerOutcome::Skip);
          }
          log.lock().expect("lock").push(value);
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn")
  };

  actor.tell(Payload::of1(-5_i32)).expect("deferred");
  actor.tell(Payload::of1(10_i32)).expect("accepted");

  // The accepted message's successful match rotates the stash back in.
  assert_eq!(*log.lock().expect("lock"), [10, -5]);
}
