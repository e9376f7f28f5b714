use std::{
  sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
  },
  thread,
  time::{Duration, Instant},
};

use reaktor_actor_core_rs::{
  ActorSystemConfig, Behavior, HandlerOutcome, Payload, Props, SchedulerConfig,
};
use reaktor_actor_std_rs::launch;

fn poll_until(deadline: Duration, mut condition: impl FnMut() -> bool) -> bool {
  let started = Instant::now();
  while started.elapsed() < deadline {
    if condition() {
      return true;
    }
    thread::sleep(Duration::from_millis(1));
  }
  condition()
}

fn config(workers: usize) -> ActorSystemConfig {
  ActorSystemConfig::new().with_scheduler(SchedulerConfig::new().with_workers(workers))
}

#[test]
fn messages_from_many_threads_all_arrive() {
  let system = launch(config(4));
  let received = Arc::new(AtomicUsize::new(0));

  let counter = {
    let received = received.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let received = received.clone();
        Ok(Behavior::new().on::<(u64,), _>(move |_ctx, (_value,)| {
          received.fetch_add(1, Ordering::AcqRel);
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn counter")
  };

  let producers: Vec<_> = (0..8)
    .map(|producer| {
      let counter = counter.clone();
      thread::spawn(move || {
        for message in 0..250_u64 {
          counter.tell(Payload::of1(producer * 1_000 + message)).expect("tell");
        }
      })
    })
    .collect();
  for producer in producers {
    producer.join().expect("producer thread");
  }

  assert!(
    poll_until(Duration::from_secs(10), || received.load(Ordering::Acquire) == 2_000),
    "expected 2000 deliveries, saw {}",
    received.load(Ordering::Acquire)
  );
  system.shutdown();
}

#[test]
fn handlers_of_one_actor_never_run_concurrently() {
  let system = launch(config(4));
  let inside = Arc::new(AtomicBool::new(false));
  let violations = Arc::new(AtomicUsize::new(0));
  let processed = Arc::new(AtomicUsize::new(0));

  let actor = {
    let inside = inside.clone();
    let violations = violations.clone();
    let processed = processed.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let inside = inside.clone();
        let violations = violations.clone();
        let processed = processed.clone();
        Ok(Behavior::new().on::<(u64,), _>(move |_ctx, (_value,)| {
          if inside.swap(true, Ordering::AcqRel) {
            violations.fetch_add(1, Ordering::AcqRel);
          }
          // Widen the race window so overlap would actually be caught.
          std::hint::black_box(());
          inside.store(false, Ordering::Release);
          processed.fetch_add(1, Ordering::AcqRel);
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn")
  };

  let producers: Vec<_> = (0..6)
    .map(|_| {
      let actor = actor.clone();
      thread::spawn(move || {
        for value in 0..500_u64 {
          actor.tell(Payload::of1(value)).expect("tell");
        }
      })
    })
    .collect();
  for producer in producers {
    producer.join().expect("producer thread");
  }

  assert!(poll_until(Duration::from_secs(10), || processed.load(Ordering::Acquire) == 3_000));
  assert_eq!(violations.load(Ordering::Acquire), 0, "at most one worker may execute an actor");
  system.shutdown();
}

#[test]
fn ask_round_trips_across_the_pool() {
  let system = launch(config(2));
  let squarer = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|_ctx, (value,)| Ok(HandlerOutcome::Reply(Payload::of1(value * value)))))
    }))
    .expect("spawn");

  let reply = system.ask(&squarer, Payload::of1(12_i32)).expect("reply");
  assert_eq!(reply.get::<i32>(0), Ok(&144));
  system.shutdown();
}

#[test]
fn detached_actors_run_on_their_own_thread() {
  let system = launch(config(2));
  let observed_thread = Arc::new(std::sync::Mutex::new(None));
  let processed = Arc::new(AtomicUsize::new(0));

  let detached = {
    let observed_thread = observed_thread.clone();
    let processed = processed.clone();
    system
      .spawn(
        &Props::from_fn(move |_ctx| {
          let observed_thread = observed_thread.clone();
          let processed = processed.clone();
          Ok(Behavior::new().on::<(i32,), _>(move |_ctx, (_value,)| {
            let name = thread::current().name().map(String::from);
            *observed_thread.lock().expect("lock") = name;
            processed.fetch_add(1, Ordering::AcqRel);
            Ok(HandlerOutcome::NoReply)
          }))
        })
        .detached(),
      )
      .expect("spawn detached")
  };

  detached.tell(Payload::of1(1_i32)).expect("tell");
  assert!(poll_until(Duration::from_secs(10), || processed.load(Ordering::Acquire) == 1));

  let name = observed_thread.lock().expect("lock").clone().unwrap_or_default();
  assert!(name.starts_with("reaktor-detached-"), "ran on {name:?} instead of a dedicated thread");
  system.shutdown();
}

#[test]
fn request_deadlines_fire_on_the_timer_thread() {
  let system = launch(config(2));
  let silent = system
    .spawn(&Props::from_fn(|_ctx| {
      Ok(Behavior::new().on::<(i32,), _>(|_ctx, (_value,)| Ok(HandlerOutcome::NoReply)))
    }))
    .expect("spawn silent");

  let timed_out = Arc::new(AtomicUsize::new(0));
  let requester = {
    let timed_out = timed_out.clone();
    system
      .spawn(&Props::from_fn(move |_ctx| {
        let silent = silent.clone();
        let timed_out = timed_out.clone();
        Ok(Behavior::new().on::<(i32,), _>(move |ctx, (_go,)| {
          let timed_out = timed_out.clone();
          ctx
            .request_with_timeout(&silent, Payload::of1(0_i32), Duration::from_millis(20))
            .on_error(move |_ctx, _error| {
              timed_out.fetch_add(1, Ordering::AcqRel);
              Ok(())
            });
          Ok(HandlerOutcome::NoReply)
        }))
      }))
      .expect("spawn requester")
  };

  requester.tell(Payload::of1(1_i32)).expect("kick off");
  assert!(poll_until(Duration::from_secs(10), || timed_out.load(Ordering::Acquire) == 1));
  system.shutdown();
}
