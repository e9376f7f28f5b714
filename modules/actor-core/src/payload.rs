use alloc::{boxed::Box, vec::Vec};
use core::any::{Any, TypeId};

use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  error::Error, inspect_registry, payload_value::PayloadValue, runtime_error_kind::RuntimeErrorKind,
  type_tag::TypeTag,
};

#[cfg(test)]
mod tests;

/// One typed field inside a [`Payload`].
pub struct PayloadField {
  tag:     TypeTag,
  type_id: TypeId,
  value:   Box<dyn PayloadValue>,
}

impl PayloadField {
  fn new<T>(value: T) -> Self
  where
    T: Any + Clone + Send + Sync, {
    let type_id = TypeId::of::<T>();
    Self { tag: inspect_registry::registered_tag(type_id), type_id, value: Box::new(value) }
  }

  /// Returns the registration tag; [`TypeTag::NONE`] for user types.
  #[must_use]
  pub const fn tag(&self) -> TypeTag {
    self.tag
  }

  /// Returns the concrete Rust type of the field.
  #[must_use]
  pub const fn type_id(&self) -> TypeId {
    self.type_id
  }
}

impl Clone for PayloadField {
  fn clone(&self) -> Self {
    Self { tag: self.tag, type_id: self.type_id, value: self.value.clone_value() }
  }
}

impl core::fmt::Debug for PayloadField {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PayloadField").field("tag", &self.tag).finish()
  }
}

/// Reference-counted, copy-on-write tuple of typed fields.
///
/// Cloning shares storage in O(1); shared instances are observationally
/// immutable, so concurrent readers need no synchronisation beyond the
/// reference count. Mutable access copies the entire tuple first when the
/// storage is shared; the semantic unit is the whole payload, never an
/// individual field.
#[derive(Clone, Debug)]
pub struct Payload {
  fields: ArcShared<Vec<PayloadField>>,
}

impl Payload {
  /// Creates a payload with no fields.
  #[must_use]
  pub fn empty() -> Self {
    Self { fields: ArcShared::new(Vec::new()) }
  }

  /// Starts an incremental builder.
  #[must_use]
  pub fn builder() -> PayloadBuilder {
    PayloadBuilder::new()
  }

  /// Creates a one-field payload.
  #[must_use]
  pub fn of1<A>(a: A) -> Self
  where
    A: Any + Clone + Send + Sync, {
    Self::builder().with(a).build()
  }

  /// Creates a two-field payload.
  #[must_use]
  pub fn of2<A, B>(a: A, b: B) -> Self
  where
    A: Any + Clone + Send + Sync,
    B: Any + Clone + Send + Sync, {
    Self::builder().with(a).with(b).build()
  }

  /// Creates a three-field payload.
  #[must_use]
  pub fn of3<A, B, C>(a: A, b: B, c: C) -> Self
  where
    A: Any + Clone + Send + Sync,
    B: Any + Clone + Send + Sync,
    C: Any + Clone + Send + Sync, {
    Self::builder().with(a).with(b).with(c).build()
  }

  /// Creates a four-field payload.
  #[must_use]
  pub fn of4<A, B, C, D>(a: A, b: B, c: C, d: D) -> Self
  where
    A: Any + Clone + Send + Sync,
    B: Any + Clone + Send + Sync,
    C: Any + Clone + Send + Sync,
    D: Any + Clone + Send + Sync, {
    Self::builder().with(a).with(b).with(c).with(d).build()
  }

  /// Creates a five-field payload.
  #[must_use]
  pub fn of5<A, B, C, D, E>(a: A, b: B, c: C, d: D, e: E) -> Self
  where
    A: Any + Clone + Send + Sync,
    B: Any + Clone + Send + Sync,
    C: Any + Clone + Send + Sync,
    D: Any + Clone + Send + Sync,
    E: Any + Clone + Send + Sync, {
    Self::builder().with(a).with(b).with(c).with(d).with(e).build()
  }

  /// Returns the number of fields.
  #[must_use]
  pub fn len(&self) -> usize {
    self.fields.len()
  }

  /// Returns `true` when the payload has no fields.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  /// Returns the registration tag of field `index`.
  #[must_use]
  pub fn type_tag(&self, index: usize) -> Option<TypeTag> {
    self.fields.get(index).map(PayloadField::tag)
  }

  /// Returns the concrete Rust type of field `index`.
  #[must_use]
  pub fn type_id(&self, index: usize) -> Option<TypeId> {
    self.fields.get(index).map(PayloadField::type_id)
  }

  /// Reads field `index` as type `T`.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the index is out of range and
  /// `type_mismatch` when the field holds a different type.
  pub fn get<T: Any>(&self, index: usize) -> Result<&T, Error> {
    let field = self.fields.get(index).ok_or_else(|| RuntimeErrorKind::InvalidArgument.into_error())?;
    field.value.as_any().downcast_ref::<T>().ok_or_else(|| RuntimeErrorKind::TypeMismatch.into_error())
  }

  /// Mutably accesses field `index` as type `T`, copying the whole tuple
  /// first when the storage is shared.
  ///
  /// # Errors
  ///
  /// Returns `invalid_argument` when the index is out of range and
  /// `type_mismatch` when the field holds a different type.
  pub fn get_mut<T: Any>(&mut self, index: usize) -> Result<&mut T, Error> {
    if index >= self.fields.len() {
      return Err(RuntimeErrorKind::InvalidArgument.into_error());
    }
    if self.fields.get(index).map(PayloadField::type_id) != Some(TypeId::of::<T>()) {
      return Err(RuntimeErrorKind::TypeMismatch.into_error());
    }
    if self.fields.get_mut().is_none() {
      let copied: Vec<PayloadField> = self.fields.iter().cloned().collect();
      self.fields = ArcShared::new(copied);
    }
    let fields = self.fields.get_mut().ok_or_else(|| RuntimeErrorKind::InvalidArgument.into_error())?;
    let field = fields.get_mut(index).ok_or_else(|| RuntimeErrorKind::InvalidArgument.into_error())?;
    field.value.as_any_mut().downcast_mut::<T>().ok_or_else(|| RuntimeErrorKind::TypeMismatch.into_error())
  }

  /// Returns `true` when both payloads share the same storage.
  #[must_use]
  pub fn shares_storage_with(&self, other: &Self) -> bool {
    self.fields.ptr_eq(&other.fields)
  }

  /// Returns `true` when the field types equal `expected` element-wise.
  #[must_use]
  pub fn types_match(&self, expected: &[TypeId]) -> bool {
    self.fields.len() == expected.len()
      && self.fields.iter().zip(expected.iter()).all(|(field, wanted)| field.type_id() == *wanted)
  }

  /// Reads the sole field of a one-field payload as type `T`.
  #[must_use]
  pub fn single<T: Any>(&self) -> Option<&T> {
    if self.fields.len() == 1 {
      self.get::<T>(0).ok()
    } else {
      None
    }
  }
}

impl Default for Payload {
  fn default() -> Self {
    Self::empty()
  }
}

/// Incremental builder collecting fields for a [`Payload`].
#[derive(Default)]
pub struct PayloadBuilder {
  fields: Vec<PayloadField>,
}

impl PayloadBuilder {
  /// Creates an empty builder.
  #[must_use]
  pub const fn new() -> Self {
    Self { fields: Vec::new() }
  }

  /// Appends a field and returns the builder.
  #[must_use]
  pub fn with<T>(mut self, value: T) -> Self
  where
    T: Any + Clone + Send + Sync, {
    self.fields.push(PayloadField::new(value));
    self
  }

  /// Appends a field in place.
  pub fn push<T>(&mut self, value: T)
  where
    T: Any + Clone + Send + Sync, {
    self.fields.push(PayloadField::new(value));
  }

  /// Finalises the payload.
  #[must_use]
  pub fn build(self) -> Payload {
    Payload { fields: ArcShared::new(self.fields) }
  }
}
