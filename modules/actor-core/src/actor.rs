use crate::{actor_context::ActorContext, error::Error, handler_outcome::HandlerOutcome, payload::Payload};

/// Class-style actor: private state plus a receive method.
///
/// An implementation and a behavior-returning closure are two constructors
/// for the same control block; pick whichever reads better. Class-style
/// actors dispatch every payload through [`Actor::receive`] and may refine
/// matching themselves, while closure actors lean on
/// [`crate::behavior::Behavior`] clauses.
pub trait Actor: Send {
  /// Runs before the first message; the default does nothing.
  ///
  /// # Errors
  ///
  /// Returning an error fails the spawn.
  fn pre_start(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), Error> {
    let _ = ctx;
    Ok(())
  }

  /// Handles one payload.
  ///
  /// # Errors
  ///
  /// Errors from a correlated request become the error response; errors
  /// from ordinary messages route to the actor's error handler.
  fn receive(&mut self, ctx: &mut ActorContext<'_>, payload: &Payload) -> Result<HandlerOutcome, Error>;

  /// Runs during termination, after the mailbox closed; the default does
  /// nothing.
  ///
  /// # Errors
  ///
  /// Errors are logged and otherwise ignored; the actor is already
  /// stopping.
  fn post_stop(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), Error> {
    let _ = ctx;
    Ok(())
  }
}
