use alloc::string::String;
use core::time::Duration;

use super::Behavior;
use crate::{handler_outcome::HandlerOutcome, payload::Payload};

fn int_clause() -> Behavior {
  Behavior::new().on::<(i32,), _>(|_ctx, (_value,)| Ok(HandlerOutcome::NoReply))
}

fn float_clause() -> Behavior {
  Behavior::new().on::<(f64,), _>(|_ctx, (_value,)| Ok(HandlerOutcome::NoReply))
}

#[test]
fn first_matching_clause_wins() {
  let behavior = Behavior::new()
    .on::<(i32,), _>(|_ctx, (_a,)| Ok(HandlerOutcome::NoReply))
    .on::<(i32,), _>(|_ctx, (_b,)| Ok(HandlerOutcome::Skip));

  assert_eq!(behavior.find_match(&Payload::of1(5_i32)), Some(0));
}

#[test]
fn matching_is_element_wise_over_field_types() {
  let behavior = Behavior::new().on::<(i32, String), _>(|_ctx, (_n, _s)| Ok(HandlerOutcome::NoReply));

  assert_eq!(behavior.find_match(&Payload::of2(1_i32, String::from("x"))), Some(0));
  assert_eq!(behavior.find_match(&Payload::of2(String::from("x"), 1_i32)), None, "order matters");
  assert_eq!(behavior.find_match(&Payload::of1(1_i32)), None, "arity matters");
}

#[test]
fn or_else_appends_without_reordering() {
  let combined = int_clause().or_else(float_clause());

  assert_eq!(combined.find_match(&Payload::of1(3_i32)), Some(0));
  assert_eq!(combined.find_match(&Payload::of1(2.5_f64)), Some(1));
}

#[test]
fn or_else_keeps_the_left_timeout() {
  let left = int_clause().with_timeout(Duration::from_millis(5), |_ctx| Ok(()));
  let right = float_clause().with_timeout(Duration::from_millis(50), |_ctx| Ok(()));

  assert_eq!(left.or_else(right).timeout_window(), Some(Duration::from_millis(5)));

  let no_left = int_clause();
  let right = float_clause().with_timeout(Duration::from_millis(50), |_ctx| Ok(()));
  assert_eq!(no_left.or_else(right).timeout_window(), Some(Duration::from_millis(50)));
}

#[test]
fn wildcard_clauses_match_any_payload() {
  let behavior = Behavior::new().on_any(|_ctx, _payload| Ok(HandlerOutcome::NoReply));

  assert_eq!(behavior.find_match(&Payload::of1(1_i32)), Some(0));
  assert_eq!(behavior.find_match(&Payload::empty()), Some(0));
}
