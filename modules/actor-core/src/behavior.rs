use alloc::{boxed::Box, vec::Vec};
use core::{any::TypeId, fmt, time::Duration};

use crate::{
  actor_context::ActorContext, error::Error, handler_outcome::HandlerOutcome, message_signature::MessageSignature,
  payload::Payload, runtime_error_kind::RuntimeErrorKind,
};

#[cfg(test)]
mod tests;

type ClauseFn = Box<dyn FnMut(&mut ActorContext<'_>, &Payload) -> Result<HandlerOutcome, Error> + Send>;
type TimeoutFn = Box<dyn FnMut(&mut ActorContext<'_>) -> Result<(), Error> + Send>;

struct BehaviorClause {
  signature: Option<Vec<TypeId>>,
  handler:   ClauseFn,
}

/// Inactivity window attached to a [`Behavior`].
struct BehaviorTimeout {
  window:  Duration,
  handler: TimeoutFn,
}

/// Ordered set of typed callbacks plus an optional inactivity timeout.
///
/// Dispatch walks the clauses in declaration order; the first clause whose
/// declared parameter types are element-wise equal to the payload's field
/// types wins. Composition with [`Behavior::or_else`] appends without
/// reordering, so the left operand keeps precedence.
#[derive(Default)]
pub struct Behavior {
  clauses: Vec<BehaviorClause>,
  timeout: Option<BehaviorTimeout>,
}

impl Behavior {
  /// Creates a behavior with no clauses.
  #[must_use]
  pub fn new() -> Self {
    Self { clauses: Vec::new(), timeout: None }
  }

  /// Appends a typed clause for the signature `S`.
  #[must_use]
  pub fn on<S, F>(mut self, mut handler: F) -> Self
  where
    S: MessageSignature + 'static,
    F: FnMut(&mut ActorContext<'_>, S::Values) -> Result<HandlerOutcome, Error> + Send + 'static, {
    self.clauses.push(BehaviorClause {
      signature: Some(S::type_ids()),
      handler:   Box::new(move |ctx, payload| match S::extract(payload) {
        | Some(values) => handler(ctx, values),
        | None => Err(RuntimeErrorKind::TypeMismatch.into_error()),
      }),
    });
    self
  }

  /// Appends a wildcard clause matching every payload.
  #[must_use]
  pub fn on_any<F>(mut self, handler: F) -> Self
  where
    F: FnMut(&mut ActorContext<'_>, &Payload) -> Result<HandlerOutcome, Error> + Send + 'static, {
    self.clauses.push(BehaviorClause { signature: None, handler: Box::new(handler) });
    self
  }

  /// Installs an inactivity timeout; the handler runs once whenever the
  /// mailbox stays quiet for `window`.
  #[must_use]
  pub fn with_timeout<F>(mut self, window: Duration, handler: F) -> Self
  where
    F: FnMut(&mut ActorContext<'_>) -> Result<(), Error> + Send + 'static, {
    self.timeout = Some(BehaviorTimeout { window, handler: Box::new(handler) });
    self
  }

  /// Appends every clause of `other` after the clauses of `self`.
  ///
  /// The timeout stays left-biased: `other`'s window applies only when
  /// `self` has none.
  #[must_use]
  pub fn or_else(mut self, other: Self) -> Self {
    self.clauses.extend(other.clauses);
    if self.timeout.is_none() {
      self.timeout = other.timeout;
    }
    self
  }

  /// Returns `true` when the behavior has no clauses.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.clauses.is_empty()
  }

  /// Returns the inactivity window, if one is installed.
  #[must_use]
  pub fn timeout_window(&self) -> Option<Duration> {
    self.timeout.as_ref().map(|timeout| timeout.window)
  }

  /// Finds the first clause matching the payload's field types.
  #[must_use]
  pub(crate) fn find_match(&self, payload: &Payload) -> Option<usize> {
    self.clauses.iter().position(|clause| match &clause.signature {
      | Some(expected) => payload.types_match(expected),
      | None => true,
    })
  }

  /// Runs the clause selected by [`Behavior::find_match`].
  pub(crate) fn run_clause(
    &mut self,
    index: usize,
    ctx: &mut ActorContext<'_>,
    payload: &Payload,
  ) -> Result<HandlerOutcome, Error> {
    match self.clauses.get_mut(index) {
      | Some(clause) => (clause.handler)(ctx, payload),
      | None => Err(RuntimeErrorKind::BadFunctionCall.into_error()),
    }
  }

  /// Runs the timeout handler, if one is installed.
  pub(crate) fn run_timeout(&mut self, ctx: &mut ActorContext<'_>) -> Result<(), Error> {
    match self.timeout.as_mut() {
      | Some(timeout) => (timeout.handler)(ctx),
      | None => Ok(()),
    }
  }
}

impl fmt::Debug for Behavior {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Behavior")
      .field("clauses", &self.clauses.len())
      .field("timeout", &self.timeout.as_ref().map(|timeout| timeout.window))
      .finish()
  }
}
