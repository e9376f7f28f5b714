//! Synchronous mutex abstractions.

mod spin_sync_mutex;

pub use spin_sync_mutex::SpinSyncMutex;

/// Minimal lock interface implemented by the mutexes the runtime accepts.
pub trait SyncMutexLike<T>: Send + Sync
where
  T: Send, {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: core::ops::DerefMut<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex protecting `value`.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the protected value.
  fn into_inner(self) -> T;

  /// Acquires the lock, blocking the caller until it is available.
  fn lock(&self) -> Self::Guard<'_>;
}
