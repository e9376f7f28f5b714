use std::sync::{Arc, Mutex};

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, Atom, Behavior, DownMessage, Error, ExitReason, HandlerOutcome, Payload,
  Props,
};

fn failing_props() -> Props {
  Props::from_fn(|_ctx| {
    Ok(Behavior::new().on::<(Atom,), _>(|_ctx, (_op,)| Err(Error::new(7, Atom::new("runtime")))))
  })
}

fn idle_props() -> Props {
  Props::from_fn(|_ctx| Ok(Behavior::new().on::<(i32,), _>(|_ctx, (_v,)| Ok(HandlerOutcome::NoReply))))
}

#[test]
fn non_normal_exit_propagates_across_a_link() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let failing = system.spawn(&failing_props()).expect("spawn failing");
  let peer = system.spawn(&idle_props()).expect("spawn peer");
  failing.link(&peer).expect("link");

  failing.tell(Payload::of1(Atom::new("boom"))).expect("trigger failure");

  assert!(failing.is_terminated(), "the failing actor stops");
  assert!(peer.is_terminated(), "the linked peer observes the exit and stops too");
}

#[test]
fn link_propagation_carries_the_same_reason_to_a_monitor() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let failing = system.spawn(&failing_props()).expect("spawn failing");
  let peer = system.spawn(&idle_props()).expect("spawn peer");
  failing.link(&peer).expect("link");

  let observed: Arc<Mutex<Vec<DownMessage>>> = Arc::new(Mutex::new(Vec::new()));
  let observer = {
    let observed = observed.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        let observed = observed.clone();
        ctx.set_down_handler(move |_ctx, down| {
          observed.lock().expect("lock").push(down.clone());
          Ok(())
        });
        Ok(Behavior::new())
      }))
      .expect("spawn observer")
  };
  peer.monitor(&observer).expect("monitor peer");

  failing.tell(Payload::of1(Atom::new("boom"))).expect("trigger failure");

  let downs = observed.lock().expect("lock").clone();
  assert_eq!(downs.len(), 1, "exactly one down notification");
  assert_eq!(downs[0].source(), peer.id());
  assert_eq!(*downs[0].reason(), ExitReason::unhandled_exception(), "the peer died with the propagated reason");
}

#[test]
fn normal_exit_does_not_propagate_but_monitors_still_fire() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let quitting = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|ctx, (_v,)| {
        ctx.quit(ExitReason::normal());
        Ok(HandlerOutcome::NoReply)
      }))
    }))
    .expect("spawn quitting");
  let peer = system.spawn(&idle_props()).expect("spawn peer");
  quitting.link(&peer).expect("link");

  let observed: Arc<Mutex<Vec<DownMessage>>> = Arc::new(Mutex::new(Vec::new()));
  let observer = {
    let observed = observed.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        let observed = observed.clone();
        ctx.set_down_handler(move |_ctx, down| {
          observed.lock().expect("lock").push(down.clone());
          Ok(())
        });
        Ok(Behavior::new())
      }))
      .expect("spawn observer")
  };
  quitting.monitor(&observer).expect("monitor");

  quitting.tell(Payload::of1(1_i32)).expect("trigger quit");

  assert!(quitting.is_terminated());
  assert!(!peer.is_terminated(), "normal exits never propagate across links");
  let downs = observed.lock().expect("lock").clone();
  assert_eq!(downs.len(), 1);
  assert!(downs[0].reason().is_normal());
}

#[test]
fn monitor_registration_is_idempotent() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let observed: Arc<Mutex<Vec<DownMessage>>> = Arc::new(Mutex::new(Vec::new()));
  let observer = {
    let observed = observed.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        let observed = observed.clone();
        ctx.set_down_handler(move |_ctx, down| {
          observed.lock().expect("lock").push(down.clone());
          Ok(())
        });
        Ok(Behavior::new())
      }))
      .expect("spawn observer")
  };

  let target = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|ctx, (_v,)| {
        ctx.quit(ExitReason::user_shutdown());
        Ok(HandlerOutcome::NoReply)
      }))
    }))
    .expect("spawn target");

  target.monitor(&observer).expect("monitor once");
  target.monitor(&observer).expect("monitor twice");
  target.tell(Payload::of1(0_i32)).expect("trigger");

  assert_eq!(observed.lock().expect("lock").len(), 1, "set semantics: one down per observer");
}

#[test]
fn exit_handlers_intercept_link_failures() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let failing = system.spawn(&failing_props()).expect("spawn failing");

  let intercepted = Arc::new(Mutex::new(None));
  let survivor = {
    let intercepted = intercepted.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        let intercepted = intercepted.clone();
        ctx.set_exit_handler(move |_ctx, exit| {
          *intercepted.lock().expect("lock") = Some(exit.reason().clone());
          Ok(())
        });
        Ok(Behavior::new())
      }))
      .expect("spawn survivor")
  };
  failing.link(&survivor).expect("link");

  failing.tell(Payload::of1(Atom::new("boom"))).expect("trigger failure");

  assert!(!survivor.is_terminated(), "the exit handler kept the actor alive");
  assert_eq!(intercepted.lock().expect("lock").clone(), Some(ExitReason::unhandled_exception()));
}
