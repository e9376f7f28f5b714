use alloc::format;

use super::ErrorRendererRegistry;
use crate::{atom::Atom, error::Error};

#[test]
fn unregistered_categories_use_the_default_form() {
  let registry = ErrorRendererRegistry::new();
  let error = Error::new(3, Atom::new("io"));
  assert_eq!(registry.render(&error), "error(3, io)");
}

#[test]
fn registered_renderers_take_precedence() {
  let registry = ErrorRendererRegistry::new();
  registry.register(Atom::new("math"), |error| format!("math failure #{}", error.code()));

  assert_eq!(registry.render(&Error::new(1, Atom::new("math"))), "math failure #1");
  assert_eq!(registry.render(&Error::new(1, Atom::new("other"))), "error(1, other)");
}
