use alloc::{vec, vec::Vec};
use core::any::{Any, TypeId};

use crate::payload::Payload;

/// Declared parameter tuple of a behavior clause.
///
/// Implemented for tuples of one to five `Clone` message types. A clause
/// matches when the payload's field types equal the tuple's element types
/// in order; extraction clones the fields into the tuple.
pub trait MessageSignature {
  /// The extracted value tuple.
  type Values;

  /// Element-wise type identifiers of the tuple.
  fn type_ids() -> Vec<TypeId>;

  /// Extracts the tuple from a payload with matching field types.
  fn extract(payload: &Payload) -> Option<Self::Values>;
}

macro_rules! impl_message_signature {
  ($(($($name:ident : $index:tt),+))+) => {
    $(
      impl<$($name,)+> MessageSignature for ($($name,)+)
      where
        $($name: Any + Clone + Send + Sync,)+
      {
        type Values = ($($name,)+);

        fn type_ids() -> Vec<TypeId> {
          vec![$(TypeId::of::<$name>(),)+]
        }

        fn extract(payload: &Payload) -> Option<Self::Values> {
          Some(($(payload.get::<$name>($index).ok()?.clone(),)+))
        }
      }
    )+
  };
}

impl_message_signature! {
  (A: 0)
  (A: 0, B: 1)
  (A: 0, B: 1, C: 2)
  (A: 0, B: 1, C: 2, D: 3)
  (A: 0, B: 1, C: 2, D: 3, E: 4)
}
