/// Internal marker enqueued by the timer driver when a behavior's
/// inactivity window elapses.
///
/// Carries the epoch the window was armed under; the engine drops stale
/// markers whose epoch no longer matches the cell's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InactivityElapsed {
  epoch: u64,
}

impl InactivityElapsed {
  pub(crate) const fn new(epoch: u64) -> Self {
    Self { epoch }
  }

  pub(crate) const fn epoch(&self) -> u64 {
    self.epoch
  }
}
