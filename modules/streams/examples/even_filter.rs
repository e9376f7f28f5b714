//! A source of integers, an even filter, and a printing sink.

use reaktor_actor_core_rs::{ActorSystem, ActorSystemConfig, Payload};
use reaktor_streams_rs::{sink_props, source_props, stage_props};

fn main() {
  let system = ActorSystem::new(ActorSystemConfig::new());

  let mut next = 0_i64;
  let source = system
    .spawn(&source_props(move || {
      if next < 10 {
        let value = next;
        next += 1;
        Some(Payload::of1(value))
      } else {
        None
      }
    }))
    .expect("spawn source");

  let evens = system
    .spawn(&stage_props(source, 4, |item| {
      let value = *item.get::<i64>(0)?;
      Ok(if value % 2 == 0 { Some(Payload::of1(value)) } else { None })
    }))
    .expect("spawn stage");

  system
    .spawn(&sink_props(
      evens,
      4,
      |item| {
        eprintln!("got {}", item.get::<i64>(0)?);
        Ok(())
      },
      |outcome| match outcome {
        None => eprintln!("stream completed"),
        Some(error) => eprintln!("stream failed: {error}"),
      },
    ))
    .expect("spawn sink");

  system.shutdown();
}
