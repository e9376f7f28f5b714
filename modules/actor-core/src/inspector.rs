use alloc::{string::String, vec::Vec};

use crate::{error::Error, inspect_annotation::InspectAnnotation};

/// Field visitor driven by [`crate::inspectable::Inspectable`] types.
///
/// A writing inspector reads object state field by field; a reading
/// inspector writes object state in the same fixed order. The same
/// `inspect` implementation serves both directions.
pub trait Inspector {
  /// Returns `true` when the inspector writes state into the object.
  fn is_loading(&self) -> bool;

  /// Applies an annotation to the next field.
  fn annotate(&mut self, annotation: InspectAnnotation) {
    let _ = annotation;
  }

  /// Visits a boolean field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_bool(&mut self, value: &mut bool) -> Result<(), Error>;

  /// Visits an unsigned integral field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_u64(&mut self, value: &mut u64) -> Result<(), Error>;

  /// Visits a signed integral field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_i64(&mut self, value: &mut i64) -> Result<(), Error>;

  /// Visits a floating-point field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_f64(&mut self, value: &mut f64) -> Result<(), Error>;

  /// Visits a text field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_text(&mut self, value: &mut String) -> Result<(), Error>;

  /// Visits a raw byte field.
  ///
  /// # Errors
  ///
  /// Returns an error when the replayed value does not fit the field.
  fn field_bytes(&mut self, value: &mut Vec<u8>) -> Result<(), Error>;
}
