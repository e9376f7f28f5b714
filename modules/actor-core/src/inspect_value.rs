use alloc::{string::String, vec::Vec};

/// Primitive value captured or replayed by the field inspectors.
#[derive(Clone, Debug, PartialEq)]
pub enum InspectValue {
  /// Boolean field.
  Bool(bool),
  /// Unsigned integral field.
  U64(u64),
  /// Signed integral field.
  I64(i64),
  /// Floating-point field.
  F64(f64),
  /// Text field.
  Text(String),
  /// Raw byte field.
  Bytes(Vec<u8>),
}
