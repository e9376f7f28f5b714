use std::sync::{Arc, Mutex};

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, Atom, Behavior, Error, HandlerOutcome, Payload, Props,
};

/// Tag for the arithmetic protocol, packed per the atom contract.
const ADD: Atom = Atom::new("add");
const DIV: Atom = Atom::new("div");

fn arithmetic_props() -> Props {
  Props::from_fn(|_ctx| {
    Ok(
      Behavior::new()
        .on::<(Atom, i32, i32), _>(|_ctx, (op, lhs, rhs)| {
          if op == ADD {
            return Ok(HandlerOutcome::Reply(Payload::of1(lhs + rhs)));
          }
          if op == DIV {
            if rhs == 0 {
              return Err(Error::new(1, Atom::new("math")));
            }
            return Ok(HandlerOutcome::Reply(Payload::of1(lhs / rhs)));
          }
          Ok(HandlerOutcome::NoReply)
        }),
    )
  })
}

#[test]
fn scoped_sender_receives_exactly_the_sum() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let calculator = system.spawn(&arithmetic_props()).expect("spawn calculator");

  let reply = system.ask(&calculator, Payload::of3(ADD, 3_i32, 4_i32)).expect("add reply");

  assert_eq!(reply.len(), 1, "no other fields ride along");
  assert_eq!(reply.get::<i32>(0), Ok(&7));
}

#[test]
fn division_by_zero_reaches_only_the_error_handler() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let calculator = system.spawn(&arithmetic_props()).expect("spawn calculator");

  let observed_error = Arc::new(Mutex::new(None));
  let success_invoked = Arc::new(Mutex::new(false));

  let requester = {
    let observed_error = observed_error.clone();
    let success_invoked = success_invoked.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let calculator = calculator.clone();
        let observed_error = observed_error.clone();
        let success_invoked = success_invoked.clone();
        Ok(Behavior::new().on::<(Atom,), _>(move |ctx, (op,)| {
          assert_eq!(op, Atom::new("go"));
          let observed_error = observed_error.clone();
          let success_invoked = success_invoked.clone();
          ctx
            .request(&calculator, Payload::of3(DIV, 1_i32, 0_i32))
            .then(move |_ctx, _payload| {
              *success_invoked.lock().expect("lock") = true;
              Ok(())
            })
            .on_error(move |_ctx, error| {
              *observed_error.lock().expect("lock") = Some(error.clone());
              Ok(())
            });
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn requester")
  };

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");

  let error = observed_error.lock().expect("lock").clone().expect("error handler observed the failure");
  assert_eq!(error, Error::new(1, Atom::new("math")));
  assert!(!*success_invoked.lock().expect("lock"), "success handler must stay untouched");
}

#[test]
fn division_reply_arrives_for_nonzero_divisors() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let calculator = system.spawn(&arithmetic_props()).expect("spawn calculator");

  let reply = system.ask(&calculator, Payload::of3(DIV, 9_i32, 3_i32)).expect("div reply");
  assert_eq!(reply.get::<i32>(0), Ok(&3));
}
