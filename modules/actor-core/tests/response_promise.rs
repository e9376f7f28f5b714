use std::sync::{Arc, Mutex};

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, Atom, Behavior, Error, HandlerOutcome, Payload, Props, ResponsePromise,
  RuntimeErrorKind,
};

type PromiseSlot = Arc<Mutex<Option<ResponsePromise>>>;

fn deferring_props(slot: PromiseSlot) -> Props {
  Props::from_fn(move |_ctx| {
    let slot = slot.clone();
    Ok(Behavior::new().on::<(Atom,), _>(move |ctx, (_op,)| {
      *slot.lock().expect("lock") = Some(ctx.response_promise()?);
      Ok(HandlerOutcome::NoReply)
    }))
  })
}

fn requester_props(target: reaktor_actor_core_rs::ActorRef, outcome: Arc<Mutex<Vec<Result<i32, Error>>>>) -> Props {
  Props::from_fn(move |_ctx| {
    let target = target.clone();
    let outcome = outcome.clone();
    Ok(Behavior::new().on::<(Atom,), _>(move |ctx, (_go,)| {
      let ok_log = outcome.clone();
      let err_log = outcome.clone();
      ctx
        .request(&target, Payload::of1(Atom::new("defer")))
        .then(move |_ctx, payload| {
          ok_log.lock().expect("lock").push(Ok(*payload.get::<i32>(0)?));
          Ok(())
        })
        .on_error(move |_ctx, error| {
          err_log.lock().expect("lock").push(Err(error.clone()));
          Ok(())
        });
      Ok(HandlerOutcome::NoReply)
    }))
  })
}

#[test]
fn a_fulfilled_promise_delivers_exactly_once() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let slot: PromiseSlot = Arc::new(Mutex::new(None));
  let deferring = system.spawn(&deferring_props(slot.clone())).expect("spawn deferring");

  let outcome = Arc::new(Mutex::new(Vec::new()));
  let requester = system.spawn(&requester_props(deferring, outcome.clone())).expect("spawn requester");

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");
  assert!(outcome.lock().expect("lock").is_empty(), "no reply until the promise resolves");

  let promise = slot.lock().expect("lock").take().expect("handler parked the promise");
  promise.fulfil(Payload::of1(27_i32));

  assert_eq!(*outcome.lock().expect("lock"), [Ok(27)]);
}

#[test]
fn a_rejected_promise_routes_to_the_error_handler() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let slot: PromiseSlot = Arc::new(Mutex::new(None));
  let deferring = system.spawn(&deferring_props(slot.clone())).expect("spawn deferring");

  let outcome = Arc::new(Mutex::new(Vec::new()));
  let requester = system.spawn(&requester_props(deferring, outcome.clone())).expect("spawn requester");

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");
  let promise = slot.lock().expect("lock").take().expect("parked promise");
  promise.reject(Error::new(2, Atom::new("math")));

  assert_eq!(*outcome.lock().expect("lock"), [Err(Error::new(2, Atom::new("math")))]);
}

#[test]
fn dropping_an_unresolved_promise_synthesises_receiver_down() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let slot: PromiseSlot = Arc::new(Mutex::new(None));
  let deferring = system.spawn(&deferring_props(slot.clone())).expect("spawn deferring");

  let outcome = Arc::new(Mutex::new(Vec::new()));
  let requester = system.spawn(&requester_props(deferring, outcome.clone())).expect("spawn requester");

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");
  drop(slot.lock().expect("lock").take());

  let observed = outcome.lock().expect("lock").clone();
  assert_eq!(observed.len(), 1);
  match &observed[0] {
    | Err(error) => assert!(RuntimeErrorKind::RequestReceiverDown.matches(error)),
    | Ok(value) => panic!("expected an error, got {value}"),
  }
}
