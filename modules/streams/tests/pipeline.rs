use std::sync::{
  atomic::{AtomicI64, AtomicUsize, Ordering},
  Arc, Mutex,
};

use reaktor_actor_core_rs::{ActorSystem, ActorSystemConfig, Atom, Error, Payload};
use reaktor_streams_rs::{sink_props, source_props, stage_props, StreamErrorKind};

fn counting_range_source(limit: i64, emitted: Arc<AtomicUsize>) -> reaktor_actor_core_rs::Props {
  let next = Arc::new(AtomicI64::new(0));
  source_props(move || {
    let value = next.fetch_add(1, Ordering::AcqRel);
    if value < limit {
      emitted.fetch_add(1, Ordering::AcqRel);
      Some(Payload::of1(value))
    } else {
      None
    }
  })
}

#[test]
fn ten_integers_through_an_even_filter_reach_the_sink() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let emitted = Arc::new(AtomicUsize::new(0));

  let source = system.spawn(&counting_range_source(10, emitted.clone())).expect("spawn source");
  let stage = system
    .spawn(&stage_props(source, 4, |item| {
      let value = *item.get::<i64>(0)?;
      Ok(if value % 2 == 0 { Some(Payload::of1(value)) } else { None })
    }))
    .expect("spawn stage");

  let received: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
  let finalised: Arc<Mutex<Option<Option<Error>>>> = Arc::new(Mutex::new(None));
  {
    let received = received.clone();
    let finalised = finalised.clone();
    system
      .spawn(&sink_props(
        stage,
        4,
        move |item| {
          received.lock().expect("lock").push(*item.get::<i64>(0)?);
          Ok(())
        },
        move |outcome| {
          *finalised.lock().expect("lock") = Some(outcome);
        },
      ))
      .expect("spawn sink");
  }

  assert_eq!(*received.lock().expect("lock"), [0, 2, 4, 6, 8]);
  assert_eq!(emitted.load(Ordering::Acquire), 10, "the generator ran the stream dry");
  let finalised_outcome = finalised.lock().expect("lock").clone();
  match finalised_outcome {
    | Some(None) => {},
    | other => panic!("the finaliser must fire once without an error, observed {other:?}"),
  }
}

#[test]
fn emission_never_outruns_granted_credit() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let emitted = Arc::new(AtomicUsize::new(0));
  let consumed = Arc::new(AtomicUsize::new(0));

  const STAGE_CAPACITY: usize = 4;
  const SINK_CAPACITY: u64 = 4;
  // Elements in flight can never exceed what both buffers granted.
  const IN_FLIGHT_BOUND: usize = STAGE_CAPACITY + SINK_CAPACITY as usize;

  let source = system.spawn(&counting_range_source(100, emitted.clone())).expect("spawn source");
  let stage = system
    .spawn(&stage_props(source, STAGE_CAPACITY, |item| Ok(Some(item.clone()))))
    .expect("spawn stage");

  let violations = Arc::new(AtomicUsize::new(0));
  {
    let emitted = emitted.clone();
    let consumed = consumed.clone();
    let violations = violations.clone();
    system
      .spawn(&sink_props(
        stage,
        SINK_CAPACITY,
        move |_item| {
          let in_flight = emitted.load(Ordering::Acquire) - consumed.load(Ordering::Acquire);
          if in_flight > IN_FLIGHT_BOUND {
            violations.fetch_add(1, Ordering::AcqRel);
          }
          consumed.fetch_add(1, Ordering::AcqRel);
          Ok(())
        },
        |_outcome| {},
      ))
      .expect("spawn sink");
  }

  assert_eq!(consumed.load(Ordering::Acquire), 100, "every element arrived");
  assert_eq!(violations.load(Ordering::Acquire), 0, "cumulative emission stayed within cumulative credit");
}

#[test]
fn a_failing_stage_aborts_both_directions() {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let emitted = Arc::new(AtomicUsize::new(0));

  let source = system.spawn(&counting_range_source(100, emitted.clone())).expect("spawn source");
  let stage = system
    .spawn(&stage_props(source, 4, |item| {
      let value = *item.get::<i64>(0)?;
      if value >= 3 {
        return Err(Error::new(9, Atom::new("app")));
      }
      Ok(Some(item.clone()))
    }))
    .expect("spawn stage");

  let finalised: Arc<Mutex<Option<Option<Error>>>> = Arc::new(Mutex::new(None));
  {
    let finalised = finalised.clone();
    system
      .spawn(&sink_props(stage, 4, |_item| Ok(()), move |outcome| {
        *finalised.lock().expect("lock") = Some(outcome);
      }))
      .expect("spawn sink");
  }

  match finalised.lock().expect("lock").clone() {
    | Some(Some(error)) => assert_eq!(error, Error::new(9, Atom::new("app"))),
    | other => panic!("the sink must observe the stage failure, observed {other:?}"),
  }
  assert!(emitted.load(Ordering::Acquire) < 100, "the cancelled source stopped early");
}

#[test]
fn a_second_downstream_on_a_busy_source_is_refused() {
  use reaktor_actor_core_rs::{Behavior, HandlerOutcome, Props};
  use reaktor_streams_rs::StreamOpen;

  let system = ActorSystem::new(ActorSystemConfig::new());
  let emitted = Arc::new(AtomicUsize::new(0));
  let source = system.spawn(&counting_range_source(10, emitted)).expect("spawn source");

  // A consumer that never replenishes keeps the stream open indefinitely.
  {
    let source = source.clone();
    system
      .spawn(&Props::from_fn(move |ctx| {
        let _ = source.tell(Payload::of1(StreamOpen::new(1, ctx.self_ref())));
        Ok(Behavior::new().on_any(|_ctx, _payload| Ok(HandlerOutcome::NoReply)))
      }))
      .expect("spawn stalling consumer");
  }

  let second_outcome: Arc<Mutex<Option<Option<Error>>>> = Arc::new(Mutex::new(None));
  {
    let second_outcome = second_outcome.clone();
    system
      .spawn(&sink_props(source, 8, |_item| Ok(()), move |outcome| {
        *second_outcome.lock().expect("lock") = Some(outcome);
      }))
      .expect("spawn second sink");
  }

  let second_outcome_result = second_outcome.lock().expect("lock").clone();
  match second_outcome_result {
    | Some(Some(error)) => assert!(StreamErrorKind::DownstreamAlreadyExists.matches(&error)),
    | other => panic!("the refused sink must fail its finaliser, observed {other:?}"),
  }
}
