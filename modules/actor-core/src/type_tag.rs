use core::fmt;

/// 16-bit type tag assigned at registration time.
///
/// Tag `0` marks an unregistered user type; such fields are matched by their
/// [`core::any::TypeId`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag(u16);

impl TypeTag {
  /// The tag reserved for unregistered user types.
  pub const NONE: Self = Self(0);

  /// Creates a tag from its numeric value.
  #[must_use]
  pub const fn new(value: u16) -> Self {
    Self(value)
  }

  /// Returns the numeric value.
  #[must_use]
  pub const fn value(&self) -> u16 {
    self.0
  }

  /// Returns `true` for registered (non-zero) tags.
  #[must_use]
  pub const fn is_registered(&self) -> bool {
    self.0 != 0
  }
}

impl fmt::Display for TypeTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}
