/// Annotation modifying how an inspector treats subsequent fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectAnnotation {
  /// Overrides the reported type name.
  TypeName(&'static str),
  /// Renders the next integral field in hexadecimal.
  HexFormatted,
  /// The next field may be absent.
  Omittable,
  /// The next field may be skipped when empty.
  OmittableIfEmpty,
  /// The next field may be skipped when it is `None`.
  OmittableIfNone,
  /// A callback runs after the next field is saved.
  SaveCallback,
  /// A callback runs after the next field is loaded.
  LoadCallback,
}
