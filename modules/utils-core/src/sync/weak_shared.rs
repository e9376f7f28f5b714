use alloc::sync::Weak;

use super::ArcShared;

/// Non-owning counterpart of [`ArcShared`].
///
/// Resolves to a strong handle only while at least one `ArcShared` to the
/// same allocation is alive.
#[repr(transparent)]
pub struct WeakShared<T: ?Sized>(Weak<T>);

impl<T: ?Sized> WeakShared<T> {
  /// Attempts to upgrade to a strong handle.
  #[must_use]
  pub fn upgrade(&self) -> Option<ArcShared<T>> {
    self.0.upgrade().map(ArcShared::from_arc)
  }

  /// Returns the number of strong handles still referencing the allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    self.0.strong_count()
  }

  pub(crate) const fn from_weak(inner: Weak<T>) -> Self {
    Self(inner)
  }
}

impl<T> WeakShared<T> {
  /// Creates a dangling weak handle that never upgrades.
  #[must_use]
  pub const fn dangling() -> Self {
    Self(Weak::new())
  }
}

impl<T: ?Sized> Clone for WeakShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> core::fmt::Debug for WeakShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("WeakShared").finish()
  }
}
