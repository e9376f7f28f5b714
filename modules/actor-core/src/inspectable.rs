use crate::{error::Error, inspector::Inspector};

/// Implemented by types that participate in inspection.
///
/// `inspect` must enumerate fields in a fixed order so a write pass followed
/// by a read pass reconstructs an equal value.
pub trait Inspectable {
  /// Platform-neutral type name used at registration.
  fn type_name() -> &'static str
  where
    Self: Sized;

  /// Visits every field through the inspector, in declaration order.
  ///
  /// # Errors
  ///
  /// Propagates the first inspector failure.
  fn inspect(&mut self, inspector: &mut dyn Inspector) -> Result<(), Error>;
}
