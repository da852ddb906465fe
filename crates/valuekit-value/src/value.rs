//! The immutable single-value wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::traits::HasValue;

/// Marker for what a wrapped payload means.
///
/// Kinds are uninhabited types; they exist only at the type level. Use
/// [`value_kind!`](crate::value_kind) to declare them.
pub trait ValueKind: 'static {
    /// Short name used when rendering the wrapper.
    const NAME: &'static str;
}

/// Declare one or more [`ValueKind`] markers.
///
/// ```
/// valuekit_value::value_kind! {
///     /// Identifies a customer.
///     pub CustomerId;
///     Internal;
/// }
///
/// use valuekit_value::ValueKind;
/// assert_eq!(CustomerId::NAME, "CustomerId");
/// ```
#[macro_export]
macro_rules! value_kind {
    ($($(#[$meta:meta])* $vis:vis $name:ident;)+) => {
        $(
            $(#[$meta])*
            $vis enum $name {}

            impl $crate::ValueKind for $name {
                const NAME: &'static str = ::core::stringify!($name);
            }
        )+
    };
}

/// An immutable payload of kind `K`.
///
/// Equality, ordering and hashing delegate to the payload. Wrappers of
/// different kinds are different types, so comparing them does not compile;
/// see [`ExactTypeEq`](crate::ExactTypeEq) for comparisons across erased
/// types. An optional payload is written `Value<K, Option<T>>`.
#[repr(transparent)]
pub struct Value<K: ValueKind, T> {
    value: T,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ValueKind, T> Value<K, T> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<K: ValueKind, T> HasValue for Value<K, T> {
    type Target = T;

    fn get(&self) -> &T {
        &self.value
    }
}

impl<K: ValueKind, T> From<T> for Value<K, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<K: ValueKind, T> AsRef<T> for Value<K, T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<K: ValueKind, T: Clone> Clone for Value<K, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K: ValueKind, T: Copy> Copy for Value<K, T> {}

impl<K: ValueKind, T: Default> Default for Value<K, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<K: ValueKind, T: PartialEq> PartialEq for Value<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: ValueKind, T: Eq> Eq for Value<K, T> {}

impl<K: ValueKind, T: PartialOrd> PartialOrd for Value<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K: ValueKind, T: Ord> Ord for Value<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: ValueKind, T: Hash> Hash for Value<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: ValueKind, T: fmt::Debug> fmt::Debug for Value<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<K: ValueKind, T: fmt::Display> fmt::Display for Value<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<K: ValueKind, T: Serialize> Serialize for Value<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, K: ValueKind, T: Deserialize<'de>> Deserialize<'de> for Value<K, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
