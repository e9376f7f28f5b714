use super::Mailbox;
use crate::{enqueue_outcome::EnqueueOutcome, envelope::Envelope, payload::Payload, priority::Priority};

fn normal(value: i32) -> Envelope {
  Envelope::tell(Payload::of1(value))
}

fn urgent(value: i32) -> Envelope {
  Envelope::tell(Payload::of1(value)).with_priority(Priority::Urgent)
}

fn value_of(envelope: &Envelope) -> i32 {
  *envelope.payload().get::<i32>(0).expect("i32 field")
}

#[test]
fn dequeues_fifo_within_a_band() {
  let mailbox = Mailbox::new();
  for value in 1..=3 {
    mailbox.enqueue(normal(value)).expect("enqueue");
  }

  let drained: alloc::vec::Vec<i32> =
    core::iter::from_fn(|| mailbox.dequeue()).map(|envelope| value_of(&envelope)).collect();
  assert_eq!(drained, [1, 2, 3]);
}

#[test]
fn urgent_envelopes_precede_pending_normal_ones() {
  let mailbox = Mailbox::new();
  mailbox.enqueue(normal(1)).expect("enqueue");
  mailbox.enqueue(normal(2)).expect("enqueue");
  mailbox.enqueue(urgent(9)).expect("enqueue");

  assert_eq!(value_of(&mailbox.dequeue().expect("first")), 9);
  assert_eq!(value_of(&mailbox.dequeue().expect("second")), 1);
  assert_eq!(value_of(&mailbox.dequeue().expect("third")), 2);
}

#[test]
fn exactly_one_transition_signal_per_empty_crossing() {
  let mailbox = Mailbox::new();

  assert_eq!(mailbox.enqueue(normal(1)).expect("enqueue"), EnqueueOutcome::EnqueuedFirst);
  assert_eq!(mailbox.enqueue(normal(2)).expect("enqueue"), EnqueueOutcome::Enqueued);

  mailbox.dequeue().expect("first");
  assert_eq!(mailbox.enqueue(normal(3)).expect("enqueue"), EnqueueOutcome::Enqueued);

  mailbox.dequeue().expect("second");
  mailbox.dequeue().expect("third");
  assert!(mailbox.is_empty());
  assert_eq!(mailbox.enqueue(normal(4)).expect("enqueue"), EnqueueOutcome::EnqueuedFirst);
}

#[test]
fn unstash_reinjects_at_the_head_preserving_order() {
  let mailbox = Mailbox::new();
  mailbox.enqueue(normal(3)).expect("enqueue");
  mailbox.stash(normal(1));
  mailbox.stash(normal(2));

  assert_eq!(mailbox.unstash_all(), 2);

  let drained: alloc::vec::Vec<i32> =
    core::iter::from_fn(|| mailbox.dequeue()).map(|envelope| value_of(&envelope)).collect();
  assert_eq!(drained, [1, 2, 3], "stashed envelopes lead in their original order");
}

#[test]
fn close_rejects_further_enqueues_and_drains_everything() {
  let mailbox = Mailbox::new();
  mailbox.enqueue(normal(1)).expect("enqueue");
  mailbox.enqueue(urgent(2)).expect("enqueue");
  mailbox.stash(normal(3));

  let drained = mailbox.close();
  assert_eq!(drained.len(), 3);
  assert!(mailbox.is_closed());
  assert!(mailbox.enqueue(normal(4)).is_err());
  assert!(mailbox.is_empty());
}
