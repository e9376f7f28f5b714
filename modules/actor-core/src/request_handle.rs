use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  actor_cell::ActorCell, actor_context::ActorContext, correlation_id::CorrelationId, error::Error,
  payload::Payload,
};

/// Handle to an outstanding request, returned by
/// [`ActorContext::request`].
///
/// Install handlers with [`RequestHandle::then`] (multiplexed: fires on
/// arrival) or [`RequestHandle::awaited`] (LIFO: awaited handlers fire in
/// reverse send order), plus [`RequestHandle::on_error`] for the failure
/// path. A request without an error handler routes failures to the actor's
/// error handler.
pub struct RequestHandle {
  cell: ArcShared<ActorCell>,
  id:   CorrelationId,
}

impl RequestHandle {
  pub(crate) const fn new(cell: ArcShared<ActorCell>, id: CorrelationId) -> Self {
    Self { cell, id }
  }

  /// Returns the request's correlation id.
  #[must_use]
  pub const fn correlation(&self) -> CorrelationId {
    self.id
  }

  /// Installs a response handler firing as soon as the response arrives.
  pub fn then<F>(self, handler: F) -> Self
  where
    F: FnOnce(&mut ActorContext<'_>, &Payload) -> Result<(), Error> + Send + 'static, {
    self.cell.with_record(self.id, |record| record.set_response_handler(alloc::boxed::Box::new(handler)));
    self
  }

  /// Installs a response handler honoring the await LIFO discipline:
  /// handlers of awaited requests fire in reverse send order regardless of
  /// arrival order, and only correlated responses progress the actor while
  /// any await is outstanding.
  pub fn awaited<F>(self, handler: F) -> Self
  where
    F: FnOnce(&mut ActorContext<'_>, &Payload) -> Result<(), Error> + Send + 'static, {
    self.cell.with_record(self.id, |record| record.set_response_handler(alloc::boxed::Box::new(handler)));
    self.cell.mark_awaited(self.id);
    self
  }

  /// Installs an error handler for timeouts, receiver failures, and error
  /// replies.
  pub fn on_error<F>(self, handler: F) -> Self
  where
    F: FnOnce(&mut ActorContext<'_>, &Error) -> Result<(), Error> + Send + 'static, {
    self.cell.with_record(self.id, |record| record.set_error_handler(alloc::boxed::Box::new(handler)));
    self
  }
}

impl core::fmt::Debug for RequestHandle {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RequestHandle").field("id", &self.id).finish()
  }
}
