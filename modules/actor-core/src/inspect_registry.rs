use alloc::string::String;
use core::any::TypeId;

use hashbrown::HashMap;
use reaktor_utils_core_rs::sync::sync_mutex_like::SpinSyncMutex;

use crate::{error::Error, runtime_error_kind::RuntimeErrorKind, type_tag::TypeTag};


/// Visibility of a registered type across node boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationMode {
  /// The type may travel between nodes.
  Portable,
  /// The type is accepted for same-node messaging only.
  LocalOnly,
}

#[derive(Clone)]
struct RegisteredType {
  name: String,
  tag:  TypeTag,
  mode: RegistrationMode,
}

#[derive(Default)]
struct RegistryInner {
  by_type: HashMap<TypeId, RegisteredType>,
  by_tag:  HashMap<u16, TypeId>,
  by_name: HashMap<String, TypeId>,
}

static REGISTRY: SpinSyncMutex<Option<RegistryInner>> = SpinSyncMutex::new(None);

fn with_registry<R>(f: impl FnOnce(&mut RegistryInner) -> R) -> R {
  let mut guard = REGISTRY.lock();
  f(guard.get_or_insert_with(RegistryInner::default))
}

/// Registers `T` under a platform-neutral `name` and non-zero `tag`.
///
/// Registration is process-global and must stay bijective: a name, tag, or
/// type may be registered at most once.
///
/// # Errors
///
/// Returns `invalid_argument` when the tag is zero or when the name, tag, or
/// type is already taken.
pub fn register_type<T: 'static>(name: &str, tag: u16, mode: RegistrationMode) -> Result<TypeTag, Error> {
  if tag == 0 {
    return Err(RuntimeErrorKind::InvalidArgument.into_error());
  }
  let type_id = TypeId::of::<T>();
  with_registry(|inner| {
    if inner.by_type.contains_key(&type_id) || inner.by_tag.contains_key(&tag) || inner.by_name.contains_key(name) {
      return Err(RuntimeErrorKind::InvalidArgument.into_error());
    }
    let entry = RegisteredType { name: String::from(name), tag: TypeTag::new(tag), mode };
    inner.by_tag.insert(tag, type_id);
    inner.by_name.insert(String::from(name), type_id);
    inner.by_type.insert(type_id, entry);
    Ok(TypeTag::new(tag))
  })
}

/// Returns the tag registered for `type_id`, or [`TypeTag::NONE`].
#[must_use]
pub fn registered_tag(type_id: TypeId) -> TypeTag {
  with_registry(|inner| inner.by_type.get(&type_id).map_or(TypeTag::NONE, |entry| entry.tag))
}

/// Resolves a registered name to its tag.
#[must_use]
pub fn tag_for_name(name: &str) -> Option<TypeTag> {
  with_registry(|inner| {
    let type_id = inner.by_name.get(name)?;
    inner.by_type.get(type_id).map(|entry| entry.tag)
  })
}

/// Resolves a tag back to its registered name.
#[must_use]
pub fn name_for_tag(tag: TypeTag) -> Option<String> {
  with_registry(|inner| {
    let type_id = inner.by_tag.get(&tag.value())?;
    inner.by_type.get(type_id).map(|entry| entry.name.clone())
  })
}

/// Returns `true` when `type_id` was registered for same-node messaging only.
#[must_use]
pub fn is_local_only(type_id: TypeId) -> bool {
  with_registry(|inner| {
    inner.by_type.get(&type_id).map_or(false, |entry| entry.mode == RegistrationMode::LocalOnly)
  })
}
