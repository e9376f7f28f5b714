/// Lifecycle transition reported on the event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStage {
  /// The actor was created and registered.
  Spawned,
  /// The actor terminated and its cell was released.
  Stopped,
}
