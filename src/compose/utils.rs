//! Small helpers shared by the pipeline forms.

/// Returns the value unchanged.
///
/// This is what a pipeline with no stages computes, and the unit of
/// pipeline concatenation:
///
/// ```text
/// pipe(x, (identity, f)) == pipe(x, (f,)) == pipe(x, (f, identity))
/// ```
///
/// # Examples
///
/// ```
/// use pipable::compose::{identity, pipe};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(pipe(42, ()), identity(42));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
