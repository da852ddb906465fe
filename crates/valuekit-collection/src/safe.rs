//! Null-safe access to optional collections.
//!
//! Meant for collections handed over by unreliable sources, where "no
//! collection" and "empty collection" should read the same. The returned
//! values are read-only views.

use std::ops::Deref;

/// Either the caller's collection or an owned empty one.
#[derive(Debug)]
pub enum SafeRef<'a, C> {
    Borrowed(&'a C),
    Empty(C),
}

impl<C> SafeRef<'_, C> {
    /// True when this wraps the caller's own collection.
    pub fn is_borrowed(&self) -> bool {
        matches!(self, SafeRef::Borrowed(_))
    }
}

impl<C> Deref for SafeRef<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        match self {
            SafeRef::Borrowed(value) => value,
            SafeRef::Empty(value) => value,
        }
    }
}

/// Return `value` if present, otherwise an empty collection of the same kind.
///
/// ```
/// use std::collections::HashMap;
/// use valuekit_collection::safe;
///
/// let missing: Option<&HashMap<String, u32>> = None;
/// assert!(safe(missing).is_empty());
/// ```
pub fn safe<C: Default>(value: Option<&C>) -> SafeRef<'_, C> {
    match value {
        Some(value) => SafeRef::Borrowed(value),
        None => SafeRef::Empty(C::default()),
    }
}

/// Slice flavour of [`safe`]; absent becomes the static empty slice.
pub fn safe_slice<T>(value: Option<&[T]>) -> &[T] {
    value.unwrap_or(&[])
}

/// String flavour of [`safe`]; absent becomes `""`.
pub fn safe_str(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

/// An owned copy of `value`, or an empty collection when absent.
pub fn copy_or_empty<C: Clone + Default>(value: Option<&C>) -> C {
    value.cloned().unwrap_or_default()
}

/// Method form of [`safe`].
pub trait SafeExt<'a, C> {
    fn or_empty(self) -> SafeRef<'a, C>;
}

impl<'a, C: Default> SafeExt<'a, C> for Option<&'a C> {
    fn or_empty(self) -> SafeRef<'a, C> {
        safe(self)
    }
}
