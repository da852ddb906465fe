//! The mutable single-value wrapper.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::ValueKind;

/// A replaceable payload of kind `K`, shareable across threads.
///
/// The payload sits in one atomic slot. Readers load a snapshot without
/// locking and writers swap in a new payload, so a `&MutableValue` can be
/// updated in place and reads observe the most recent write. Equality and
/// hashing look at the current payload.
pub struct MutableValue<K: ValueKind, T> {
    slot: ArcSwap<T>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ValueKind, T> MutableValue<K, T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: ArcSwap::from_pointee(value),
            _kind: PhantomData,
        }
    }

    /// A copy of the current payload.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        T::clone(&self.slot.load())
    }

    /// The current payload, shared.
    pub fn snapshot(&self) -> Arc<T> {
        self.slot.load_full()
    }

    pub fn set(&self, value: T) {
        self.slot.store(Arc::new(value));
    }

    /// Store `value` and return the previous payload.
    ///
    /// The previous payload is cloned only when a snapshot of it is still
    /// held elsewhere.
    pub fn replace(&self, value: T) -> T
    where
        T: Clone,
    {
        unshare(self.slot.swap(Arc::new(value)))
    }

    /// Run `f` against the current payload without copying it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&**self.slot.load())
    }

    pub fn into_inner(self) -> T
    where
        T: Clone,
    {
        unshare(self.slot.into_inner())
    }
}

fn unshare<T: Clone>(payload: Arc<T>) -> T {
    Arc::try_unwrap(payload).unwrap_or_else(|shared| T::clone(&shared))
}

impl<K: ValueKind, T: Default> Default for MutableValue<K, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<K: ValueKind, T: Clone> Clone for MutableValue<K, T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<K: ValueKind, T: PartialEq> PartialEq for MutableValue<K, T> {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.slot.load_full();
        let theirs = other.slot.load_full();
        Arc::ptr_eq(&ours, &theirs) || *ours == *theirs
    }
}

impl<K: ValueKind, T: Eq> Eq for MutableValue<K, T> {}

impl<K: ValueKind, T: Hash> Hash for MutableValue<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self.slot.load()).hash(state);
    }
}

impl<K: ValueKind, T: fmt::Debug> fmt::Debug for MutableValue<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&**self.slot.load()).finish()
    }
}

impl<K: ValueKind, T: fmt::Display> fmt::Display for MutableValue<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self.slot.load(), f)
    }
}

impl<K: ValueKind, T: Serialize> Serialize for MutableValue<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self.slot.load()).serialize(serializer)
    }
}

impl<'de, K: ValueKind, T: Deserialize<'de>> Deserialize<'de> for MutableValue<K, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
