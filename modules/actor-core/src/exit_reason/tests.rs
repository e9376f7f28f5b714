use alloc::string::ToString;

use super::{ExitReason, EXIT_CATEGORY};
use crate::{atom::Atom, error::Error};

#[test]
fn normal_is_the_zero_code() {
  assert!(ExitReason::normal().is_normal());
  assert!(!ExitReason::kill().is_normal());
  assert_eq!(ExitReason::normal().as_error().category(), EXIT_CATEGORY);
}

#[test]
fn standard_reasons_render_by_name() {
  assert_eq!(ExitReason::normal().to_string(), "normal");
  assert_eq!(ExitReason::unhandled_exception().to_string(), "unhandled_exception");
  assert_eq!(ExitReason::user_shutdown().to_string(), "user_shutdown");
  assert_eq!(ExitReason::kill().to_string(), "kill");
}

#[test]
fn foreign_errors_wrap_as_unhandled_exception() {
  let cause = Error::new(3, Atom::new("math"));
  let reason = ExitReason::from_error(cause);

  assert_eq!(reason, ExitReason::unhandled_exception());
  assert!(reason.as_error().context().is_some());
}

#[test]
fn exit_category_errors_pass_through() {
  let reason = ExitReason::from_error(ExitReason::kill().into_error());
  assert_eq!(reason, ExitReason::kill());
}
