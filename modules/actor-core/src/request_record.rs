use alloc::boxed::Box;

use crate::{actor_context::ActorContext, error::Error, payload::Payload};

pub(crate) type ResponseHandlerFn = Box<dyn FnOnce(&mut ActorContext<'_>, &Payload) -> Result<(), Error> + Send>;
pub(crate) type ErrorHandlerFn = Box<dyn FnOnce(&mut ActorContext<'_>, &Error) -> Result<(), Error> + Send>;

/// Bookkeeping for one outstanding request, stored in the sender's cell
/// until the response, an error, or the deadline resolves it.
pub(crate) struct RequestRecord {
  on_response: Option<ResponseHandlerFn>,
  on_error:    Option<ErrorHandlerFn>,
  awaited:     bool,
}

impl RequestRecord {
  pub(crate) const fn new() -> Self {
    Self { on_response: None, on_error: None, awaited: false }
  }

  pub(crate) fn set_response_handler(&mut self, handler: ResponseHandlerFn) {
    self.on_response = Some(handler);
  }

  pub(crate) fn set_error_handler(&mut self, handler: ErrorHandlerFn) {
    self.on_error = Some(handler);
  }

  pub(crate) fn mark_awaited(&mut self) {
    self.awaited = true;
  }

  pub(crate) const fn is_awaited(&self) -> bool {
    self.awaited
  }

  pub(crate) fn take_response_handler(&mut self) -> Option<ResponseHandlerFn> {
    self.on_response.take()
  }

  pub(crate) fn take_error_handler(&mut self) -> Option<ErrorHandlerFn> {
    self.on_error.take()
  }
}
