use std::sync::{Arc, Mutex};

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, ActorRef, Atom, Behavior, HandlerOutcome, Payload, Props,
};

#[derive(Clone, Copy)]
struct Get;

fn cell_props(value: i32) -> Props {
  Props::from_fn(move |_ctx| {
    Ok(Behavior::new().on::<(Get,), _>(move |_ctx, (_get,)| Ok(HandlerOutcome::Reply(Payload::of1(value)))))
  })
}

fn requester_props(cells: Vec<ActorRef>, order: Arc<Mutex<Vec<i32>>>) -> Props {
  Props::from_fn(move |_ctx| {
    let cells = cells.clone();
    let order = order.clone();
    Ok(Behavior::new().on::<(Atom,), _>(move |ctx, (_go,)| {
      for cell in &cells {
        let order = order.clone();
        ctx.request(cell, Payload::of1(Get)).awaited(move |_ctx, payload| {
          order.lock().expect("lock").push(*payload.get::<i32>(0)?);
          Ok(())
        });
      }
      Ok(HandlerOutcome::NoReply)
    }))
  })
}

#[test]
fn awaited_handlers_fire_in_reverse_send_order() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let cells: Vec<ActorRef> =
    [0_i32, 1, 4].iter().map(|value| system.spawn(&cell_props(*value)).expect("spawn cell")).collect();

  let order: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));
  let requester = system.spawn(&requester_props(cells, order.clone())).expect("spawn requester");

  requester.tell(Payload::of1(Atom::new("go"))).expect("kick off");

  assert_eq!(*order.lock().expect("lock"), [4, 1, 0], "reverse of send order regardless of arrival order");
}

#[test]
fn ordinary_messages_wait_while_awaits_are_outstanding() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

  // An actor that never replies, so the await stays outstanding.
  let silent = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(Get,), _>(|_ctx, (_get,)| Ok(HandlerOutcome::NoReply)))
    }))
    .expect("spawn silent");

  let awaiting = {
    let log = log.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let silent = silent.clone();
        let log = log.clone();
        Ok(
          Behavior::new()
            .on::<(Atom,), _>(move |ctx, (_go,)| {
              let log = log.clone();
              ctx.request(&silent, Payload::of1(Get)).awaited(move |_ctx, _payload| {
                log.lock().expect("lock").push("response");
                Ok(())
              });
              Ok(HandlerOutcome::NoReply)
            })
            .on::<(i32,), _>(move |_ctx, (_value,)| {
              panic!("ordinary traffic must not progress an awaiting actor");
            }),
        )
      }))
      .expect("spawn awaiting")
  };

  awaiting.tell(Payload::of1(Atom::new("go"))).expect("kick off");
  awaiting.tell(Payload::of1(99_i32)).expect("ordinary message");

  assert!(log.lock().expect("lock").is_empty(), "no response, no progress");
}
