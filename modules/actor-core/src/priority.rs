/// Mailbox priority band of an envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
  /// Ordinary band, drained after every urgent envelope.
  #[default]
  Normal,
  /// Preferred band; also carries system messages.
  Urgent,
}

impl Priority {
  /// Returns `true` for the urgent band.
  #[must_use]
  pub const fn is_urgent(&self) -> bool {
    matches!(self, Self::Urgent)
  }
}
