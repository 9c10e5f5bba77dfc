use thiserror::Error;

/// Errors that can occur when extracting a value from an [`AnyBox`].
///
/// Only the failure-signaling accessors ([`AnyBox::cast`] and
/// [`AnyBox::cast_into`]) produce errors; the probing accessors report
/// absence as `None` instead.
///
/// [`AnyBox`]: crate::AnyBox
/// [`AnyBox::cast`]: crate::AnyBox::cast
/// [`AnyBox::cast_into`]: crate::AnyBox::cast_into
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnyError {
    /// The requested type is not the stored type, or the box is empty.
    #[error("type mismatch: requested `{requested}`, box holds `{stored}`")]
    TypeMismatch {
        /// Name of the type the caller asked for.
        requested: &'static str,
        /// Name of the stored type, or `"nothing"` for an empty box.
        stored: &'static str,
    },
}
