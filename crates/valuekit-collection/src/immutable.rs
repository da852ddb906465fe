//! Read-only snapshots returned by the immutable override builders.
//!
//! Both types share their contents behind an `Arc`: cloning a snapshot is
//! cheap and never copies entries. Only read access is exposed.

use std::collections::{hash_map, HashMap};
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;
use std::sync::Arc;

use crate::Table;

/// A shared, read-only map.
pub struct ImmutableMap<K, V> {
    inner: Arc<HashMap<K, V>>,
}

impl<K, V> ImmutableMap<K, V> {
    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// A mutable copy of the contents.
    pub fn to_mutable(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        (*self.inner).clone()
    }
}

impl<K, V> Deref for ImmutableMap<K, V> {
    type Target = HashMap<K, V>;

    fn deref(&self) -> &HashMap<K, V> {
        &self.inner
    }
}

impl<K, V> From<HashMap<K, V>> for ImmutableMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self {
            inner: Arc::new(map),
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<K, V>>())
    }
}

impl<K, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::from(HashMap::new())
    }
}

impl<K, V> Clone for ImmutableMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<K: Eq + Hash, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: Eq + Hash, V: PartialEq> PartialEq<HashMap<K, V>> for ImmutableMap<K, V> {
    fn eq(&self, other: &HashMap<K, V>) -> bool {
        *self.inner == *other
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// A shared, read-only table.
pub struct ImmutableTable<R, C, V> {
    inner: Arc<Table<R, C, V>>,
}

impl<R, C, V> ImmutableTable<R, C, V> {
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    pub fn to_mutable(&self) -> Table<R, C, V>
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        (*self.inner).clone()
    }
}

impl<R, C, V> Deref for ImmutableTable<R, C, V> {
    type Target = Table<R, C, V>;

    fn deref(&self) -> &Table<R, C, V> {
        &self.inner
    }
}

impl<R, C, V> From<Table<R, C, V>> for ImmutableTable<R, C, V> {
    fn from(table: Table<R, C, V>) -> Self {
        Self {
            inner: Arc::new(table),
        }
    }
}

impl<R, C, V> Default for ImmutableTable<R, C, V> {
    fn default() -> Self {
        Self::from(Table::new())
    }
}

impl<R, C, V> Clone for ImmutableTable<R, C, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V: PartialEq> PartialEq for ImmutableTable<R, C, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V: Eq> Eq for ImmutableTable<R, C, V> {}

impl<R: fmt::Debug, C: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableTable<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_snapshot() {
        let map: ImmutableMap<&str, i32> = [("a", 1)].into_iter().collect();
        let copy = map.clone();
        assert!(ImmutableMap::ptr_eq(&map, &copy));
        assert_eq!(copy.get("a"), Some(&1));
    }

    #[test]
    fn test_to_mutable_is_independent() {
        let map: ImmutableMap<&str, i32> = [("a", 1)].into_iter().collect();
        let mut copy = map.to_mutable();
        copy.insert("b", 2);
        assert_eq!(map.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_compares_with_plain_map() {
        let plain: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let map = ImmutableMap::from(plain.clone());
        assert!(map == plain);
    }

    #[test]
    fn test_iterates_by_reference() {
        let map: ImmutableMap<u8, u8> = [(1, 10), (2, 20)].into_iter().collect();
        let total: u32 = (&map).into_iter().map(|(_, v)| u32::from(*v)).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_table_snapshot() {
        let table: Table<u8, u8, &str> = [(1, 1, "x")].into_iter().collect();
        let snapshot = ImmutableTable::from(table);
        assert_eq!(snapshot.get(&1, &1), Some(&"x"));
        assert!(ImmutableTable::ptr_eq(&snapshot, &snapshot.clone()));
        assert!(ImmutableTable::<u8, u8, u8>::default().is_empty());
    }
}
