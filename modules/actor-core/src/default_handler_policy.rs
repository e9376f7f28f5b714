/// What the engine does with an envelope no behavior clause matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefaultHandlerPolicy {
  /// Send the envelope back to its sender as an `unexpected_message` error.
  Reflect,
  /// Reflect the envelope, then terminate the actor.
  ReflectAndQuit,
  /// Publish a log event describing the envelope, then drop it.
  #[default]
  PrintAndDrop,
  /// Drop the envelope silently.
  Drop,
  /// Move the envelope to the stash for a later behavior.
  Skip,
}
