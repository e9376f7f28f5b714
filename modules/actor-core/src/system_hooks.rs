use alloc::{boxed::Box, vec::Vec};

use crate::{actor_context::ActorContext, down_message::DownMessage, error::Error, exit_message::ExitMessage};

pub(crate) type ExitHookFn = Box<dyn FnMut(&mut ActorContext<'_>, &ExitMessage) -> Result<(), Error> + Send>;
pub(crate) type DownHookFn = Box<dyn FnMut(&mut ActorContext<'_>, &DownMessage) -> Result<(), Error> + Send>;
pub(crate) type ErrorHookFn = Box<dyn FnMut(&mut ActorContext<'_>, &Error) -> Result<(), Error> + Send>;
pub(crate) type CleanupFn = Box<dyn FnOnce(&mut ActorContext<'_>) + Send>;

/// User-installed overrides for the engine's system message defaults, plus
/// cleanup hooks run at termination.
///
/// Kept apart from the behavior so a running clause may install hooks
/// without touching the behavior slot it is executing from.
#[derive(Default)]
pub(crate) struct SystemHooks {
  exit:    Option<ExitHookFn>,
  down:    Option<DownHookFn>,
  error:   Option<ErrorHookFn>,
  cleanup: Vec<CleanupFn>,
}

impl SystemHooks {
  pub(crate) const fn new() -> Self {
    Self { exit: None, down: None, error: None, cleanup: Vec::new() }
  }

  pub(crate) fn set_exit(&mut self, hook: ExitHookFn) {
    self.exit = Some(hook);
  }

  pub(crate) fn set_down(&mut self, hook: DownHookFn) {
    self.down = Some(hook);
  }

  pub(crate) fn set_error(&mut self, hook: ErrorHookFn) {
    self.error = Some(hook);
  }

  pub(crate) fn take_exit(&mut self) -> Option<ExitHookFn> {
    self.exit.take()
  }

  pub(crate) fn take_down(&mut self) -> Option<DownHookFn> {
    self.down.take()
  }

  pub(crate) fn take_error(&mut self) -> Option<ErrorHookFn> {
    self.error.take()
  }

  /// Reinstalls a hook taken for execution unless the handler replaced it.
  pub(crate) fn restore_exit(&mut self, hook: ExitHookFn) {
    self.exit.get_or_insert(hook);
  }

  pub(crate) fn restore_down(&mut self, hook: DownHookFn) {
    self.down.get_or_insert(hook);
  }

  pub(crate) fn restore_error(&mut self, hook: ErrorHookFn) {
    self.error.get_or_insert(hook);
  }

  pub(crate) fn push_cleanup(&mut self, hook: CleanupFn) {
    self.cleanup.push(hook);
  }

  pub(crate) fn take_cleanup(&mut self) -> Vec<CleanupFn> {
    core::mem::take(&mut self.cleanup)
  }

  pub(crate) fn clear(&mut self) {
    self.exit = None;
    self.down = None;
    self.error = None;
    self.cleanup.clear();
  }
}
