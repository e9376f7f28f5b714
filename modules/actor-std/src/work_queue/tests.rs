use reaktor_actor_core_rs::{ActorCell, ActorSystem, ActorSystemConfig, Behavior, HandlerOutcome, Props};
use reaktor_utils_core_rs::sync::ArcShared;

use super::{InjectorQueue, WorkQueue};

fn test_cells(count: usize) -> (ActorSystem, Vec<ArcShared<ActorCell>>) {
  let system = ActorSystem::new(ActorSystemConfig::new());
  let cells = (0..count)
    .map(|_| {
      let actor = system
        .spawn(&Props::from_fn(|_ctx| {
          Ok(Behavior::new().on::<(i32,), _>(|_ctx, (_v,)| Ok(HandlerOutcome::NoReply)))
        }))
        .expect("spawn");
      system.state().find_cell(actor.id().serial()).expect("registered cell")
    })
    .collect();
  (system, cells)
}

#[test]
fn owner_pops_newest_first_and_stealers_take_oldest() {
  let (_system, cells) = test_cells(3);
  let (queue, stealer) = WorkQueue::new();
  for cell in &cells {
    queue.push(cell.clone());
  }

  let stolen = stealer.steal().expect("steal");
  assert_eq!(stolen.id(), cells[0].id(), "stealers take from the top (oldest)");

  let popped = queue.pop().expect("pop");
  assert_eq!(popped.id(), cells[2].id(), "the owner pops from the bottom (newest)");
}

#[test]
fn injector_hands_work_to_a_local_queue() {
  let (_system, cells) = test_cells(2);
  let injector = InjectorQueue::new();
  for cell in &cells {
    injector.push(cell.clone());
  }

  let (local, _stealer) = WorkQueue::new();
  let first = injector.steal_into(&local).expect("steal");
  assert_eq!(first.id(), cells[0].id());
  assert!(!injector.is_empty() || !local.is_empty(), "the batch landed locally");
}
