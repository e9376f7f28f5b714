use alloc::string::String;

use super::Payload;
use crate::{runtime_error_kind::RuntimeErrorKind, type_tag::TypeTag};

#[test]
fn typed_reads_preserve_field_order() {
  let payload = Payload::of3(1_i32, 2.5_f64, String::from("three"));

  assert_eq!(payload.len(), 3);
  assert_eq!(payload.get::<i32>(0), Ok(&1));
  assert_eq!(payload.get::<f64>(1), Ok(&2.5));
  assert_eq!(payload.get::<String>(2).map(String::as_str), Ok("three"));
}

#[test]
fn reading_the_wrong_type_is_a_type_mismatch() {
  let payload = Payload::of1(7_i32);
  let error = payload.get::<u64>(0).expect_err("wrong type must fail");
  assert!(RuntimeErrorKind::TypeMismatch.matches(&error));
}

#[test]
fn reading_out_of_range_is_an_invalid_argument() {
  let payload = Payload::of1(7_i32);
  let error = payload.get::<i32>(1).expect_err("index out of range must fail");
  assert!(RuntimeErrorKind::InvalidArgument.matches(&error));
}

#[test]
fn clone_shares_storage_without_copying() {
  let original = Payload::of2(1_i32, 2_i32);
  let alias = original.clone();
  assert!(original.shares_storage_with(&alias));
}

#[test]
fn mutation_through_a_clone_does_not_observe_through_the_original() {
  let original = Payload::of2(10_i32, 20_i32);
  let mut copy = original.clone();

  *copy.get_mut::<i32>(0).expect("mutable access") = 99;

  assert_eq!(copy.get::<i32>(0), Ok(&99));
  assert_eq!(original.get::<i32>(0), Ok(&10), "original must stay untouched");
  assert!(!original.shares_storage_with(&copy), "mutation must unshare storage");
}

#[test]
fn mutation_of_an_unshared_payload_copies_nothing() {
  let mut payload = Payload::of1(5_i32);
  let before = payload.clone();
  drop(before);

  *payload.get_mut::<i32>(0).expect("mutable access") = 6;
  assert_eq!(payload.get::<i32>(0), Ok(&6));
}

#[test]
fn unregistered_user_types_carry_the_none_tag() {
  #[derive(Clone)]
  struct Custom;

  let payload = Payload::of1(Custom);
  assert_eq!(payload.type_tag(0), Some(TypeTag::NONE));
}

#[test]
fn single_reads_only_one_field_payloads() {
  assert_eq!(Payload::of1(42_i32).single::<i32>(), Some(&42));
  assert_eq!(Payload::of2(1_i32, 2_i32).single::<i32>(), None);
  assert_eq!(Payload::of1(1_i32).single::<u64>(), None);
}
