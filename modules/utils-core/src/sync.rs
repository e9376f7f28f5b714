//! Shared-ownership handles and mutex abstractions.

mod arc_shared;
mod flag;
/// Synchronous mutex abstractions shared across runtimes.
pub mod sync_mutex_like;
mod weak_shared;

pub use arc_shared::ArcShared;
pub use flag::Flag;
pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike};
pub use weak_shared::WeakShared;
