use alloc::boxed::Box;
use core::any::Any;

/// Object-safe view of a payload field value.
///
/// Blanket-implemented for every `Clone + Send + Sync + 'static` type, so
/// any such value can ride in a [`crate::payload::Payload`] field. The
/// clone hook is what lets a shared payload perform its deep copy without
/// knowing the concrete field types.
pub trait PayloadValue: Any + Send + Sync {
  /// Clones the value behind the erasure boundary.
  fn clone_value(&self) -> Box<dyn PayloadValue>;

  /// Upcasts to [`Any`] for typed reads.
  fn as_any(&self) -> &dyn Any;

  /// Upcasts to [`Any`] for typed writes.
  fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> PayloadValue for T
where
  T: Any + Clone + Send + Sync,
{
  fn clone_value(&self) -> Box<dyn PayloadValue> {
    Box::new(self.clone())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}
