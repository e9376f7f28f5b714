//! Two actors bouncing a counter across the thread pool.

use reaktor_actor_core_rs::{
  ActorRef, ActorSystemConfig, Behavior, HandlerOutcome, Payload, Props, SchedulerConfig,
};
use reaktor_actor_std_rs::launch;

const ROUNDS: u32 = 1_000;

fn player(name: &'static str) -> Props {
  Props::from_fn(move |_ctx| {
    Ok(Behavior::new().on::<(u32, ActorRef), _>(move |ctx, (count, peer)| {
      if count >= ROUNDS {
        ctx.log(reaktor_actor_core_rs::LogLevel::Warn, format!("{name} finished at {count}"));
        return Ok(HandlerOutcome::NoReply);
      }
      let _ = peer.tell(Payload::of2(count + 1, ctx.self_ref()));
      Ok(HandlerOutcome::NoReply)
    }))
  })
}

fn main() {
  let system = launch(ActorSystemConfig::new().with_scheduler(SchedulerConfig::new().with_workers(2)));

  let ping = system.spawn(&player("ping")).expect("spawn ping");
  let pong = system.spawn(&player("pong")).expect("spawn pong");

  ping.tell(Payload::of2(0_u32, pong.clone())).expect("first serve");

  std::thread::sleep(std::time::Duration::from_millis(200));
  system.shutdown();
}
