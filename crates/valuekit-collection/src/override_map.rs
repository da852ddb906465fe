//! Override builders for maps.
//!
//! Both builders copy their initial map, accumulate writes into a private
//! backing map and hand out independent snapshots from `build`. A write
//! always replaces whatever was stored under the same key.
//!
//! Builders are plain values meant for use from a single thread.

use std::collections::HashMap;
use std::hash::Hash;

use crate::builder::Builder;
use crate::error::OverrideError;
use crate::immutable::ImmutableMap;
use crate::safe::copy_or_empty;

/// Builds mutable `HashMap` snapshots.
///
/// Any value type is accepted, including `Option<_>` for maps that need to
/// store absent values.
///
/// ```
/// use std::collections::HashMap;
/// use valuekit_collection::{Builder, OverridingMapBuilder};
///
/// let defaults = HashMap::from([("color", "red"), ("size", "m")]);
/// let user = HashMap::from([("size", "xl")]);
///
/// let merged = OverridingMapBuilder::from_initial(Some(&defaults))
///     .override_with_all(Some(&user))
///     .build();
///
/// assert_eq!(merged["color"], "red");
/// assert_eq!(merged["size"], "xl");
/// ```
#[derive(Debug, Clone)]
pub struct OverridingMapBuilder<K, V> {
    backing: HashMap<K, V>,
}

impl<K: Eq + Hash, V> OverridingMapBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            backing: HashMap::new(),
        }
    }

    /// Start from a copy of `initial`. The map is only read, never kept.
    pub fn from_initial(initial: Option<&HashMap<K, V>>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            backing: copy_or_empty(initial),
        }
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn override_with(&mut self, key: K, value: V) -> &mut Self {
        self.backing.insert(key, value);
        self
    }

    /// Copy every entry of `source`, replacing values under the same keys.
    /// An absent source is a no-op.
    pub fn override_with_all<'s, I>(&mut self, source: Option<I>) -> &mut Self
    where
        I: IntoIterator<Item = (&'s K, &'s V)>,
        K: Clone + 's,
        V: Clone + 's,
    {
        for (key, value) in source.into_iter().flatten() {
            self.backing.insert(key.clone(), value.clone());
        }
        self
    }
}

impl<K: Eq + Hash, V> Default for OverridingMapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Builder for OverridingMapBuilder<K, V> {
    type Output = HashMap<K, V>;

    /// A mutable copy of the backing map.
    fn build(&self) -> HashMap<K, V> {
        tracing::trace!(entries = self.backing.len(), "building map snapshot");
        self.backing.clone()
    }
}

/// Builds shared read-only [`ImmutableMap`] snapshots.
///
/// Writes coming from sources that may hold absent keys or values go
/// through [`try_override_with`](Self::try_override_with) and are rejected
/// immediately instead of surfacing later.
#[derive(Debug, Clone)]
pub struct OverridingImmutableMapBuilder<K, V> {
    backing: HashMap<K, V>,
}

impl<K: Eq + Hash, V> OverridingImmutableMapBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            backing: HashMap::new(),
        }
    }

    pub fn from_initial(initial: Option<&HashMap<K, V>>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            backing: copy_or_empty(initial),
        }
    }

    pub fn override_with(&mut self, key: K, value: V) -> &mut Self {
        self.backing.insert(key, value);
        self
    }

    /// Like [`override_with`](Self::override_with), but rejects an absent
    /// key or value. The key is checked first.
    pub fn try_override_with(
        &mut self,
        key: Option<K>,
        value: Option<V>,
    ) -> Result<&mut Self, OverrideError> {
        let key = key.ok_or(OverrideError::NullKey)?;
        let value = value.ok_or(OverrideError::NullValue)?;
        Ok(self.override_with(key, value))
    }

    pub fn override_with_all<'s, I>(&mut self, source: Option<I>) -> &mut Self
    where
        I: IntoIterator<Item = (&'s K, &'s V)>,
        K: Clone + 's,
        V: Clone + 's,
    {
        for (key, value) in source.into_iter().flatten() {
            self.backing.insert(key.clone(), value.clone());
        }
        self
    }

    /// Apply entries in order, stopping at the first one with an absent key
    /// or value. Entries applied before the failure are kept.
    pub fn try_override_with_all<I>(&mut self, source: Option<I>) -> Result<&mut Self, OverrideError>
    where
        I: IntoIterator<Item = (Option<K>, Option<V>)>,
    {
        for (key, value) in source.into_iter().flatten() {
            self.try_override_with(key, value)?;
        }
        Ok(self)
    }
}

impl<K: Eq + Hash, V> Default for OverridingImmutableMapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Builder for OverridingImmutableMapBuilder<K, V> {
    type Output = ImmutableMap<K, V>;

    fn build(&self) -> ImmutableMap<K, V> {
        tracing::trace!(entries = self.backing.len(), "building immutable map snapshot");
        ImmutableMap::from(self.backing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn first() -> HashMap<String, String> {
        map(&[("key1", "value in first"), ("key2", "another value in first")])
    }

    fn second() -> HashMap<String, String> {
        map(&[("key2", "value in second"), ("", "value in second")])
    }

    fn third() -> HashMap<String, String> {
        map(&[("", "value in third"), ("key3", "value in third")])
    }

    fn expected() -> HashMap<String, String> {
        map(&[
            ("", "value in third"),
            ("key3", "value in third"),
            ("key2", "value in second"),
            ("key1", "value in first"),
        ])
    }

    #[test]
    fn test_create_with_initial_map() {
        let actual = OverridingMapBuilder::from_initial(Some(&first())).build();
        assert_eq!(actual, first());
    }

    #[test]
    fn test_create_without_initial_map() {
        let actual = OverridingMapBuilder::<String, String>::from_initial(None).build();
        assert!(actual.is_empty());
    }

    #[test]
    fn test_override_with_maps_in_order() {
        let actual = OverridingMapBuilder::new()
            .override_with_all(Some(&first()))
            .override_with_all(Some(&second()))
            .override_with_all(Some(&third()))
            .build();
        assert_eq!(actual.len(), 4);
        assert_eq!(actual, expected());
    }

    #[test]
    fn test_override_with_initial_map() {
        let actual = OverridingMapBuilder::from_initial(Some(&first()))
            .override_with_all(Some(&second()))
            .override_with_all(Some(&third()))
            .build();
        assert_eq!(actual, expected());
    }

    #[test]
    fn test_override_single_key_twice_keeps_last() {
        let actual = OverridingMapBuilder::new()
            .override_with("key", 1)
            .override_with("key", 2)
            .build();
        assert_eq!(actual.len(), 1);
        assert_eq!(actual["key"], 2);
    }

    #[test]
    fn test_override_with_absent_map_is_noop() {
        let actual = OverridingMapBuilder::from_initial(Some(&first()))
            .override_with_all(None::<&HashMap<String, String>>)
            .build();
        assert_eq!(actual, first());
    }

    #[test]
    fn test_mutable_builder_accepts_absent_values() {
        let actual = OverridingMapBuilder::new()
            .override_with("present", Some(1))
            .override_with("absent", None)
            .build();
        assert_eq!(actual.len(), 2);
        assert_eq!(actual["absent"], None);
    }

    #[test]
    fn test_initial_map_is_not_modified() {
        let initial = first();
        let mut builder = OverridingMapBuilder::from_initial(Some(&initial));
        builder.override_with("key1".to_string(), "changed".to_string());
        assert_eq!(initial["key1"], "value in first");
    }

    #[test]
    fn test_build_returns_independent_snapshots() {
        let mut builder = OverridingMapBuilder::from_initial(Some(&first()));
        let mut snapshot1 = builder.build();
        let snapshot2 = builder.build();
        assert_eq!(snapshot1, snapshot2);

        snapshot1.insert("key9".to_string(), "only in snapshot1".to_string());
        builder.override_with("key1".to_string(), "later write".to_string());

        assert_eq!(snapshot2, first());
        assert_eq!(builder.build()["key1"], "later write");
        assert!(!builder.build().contains_key("key9"));
    }

    #[test]
    fn test_immutable_build_returns_distinct_equal_snapshots() {
        let builder = OverridingImmutableMapBuilder::from_initial(Some(&first()));
        let snapshot1 = builder.build();
        let snapshot2 = builder.build();
        assert_eq!(snapshot1, snapshot2);
        assert!(!ImmutableMap::ptr_eq(&snapshot1, &snapshot2));
        assert_eq!(snapshot1.len(), 2);
    }

    #[test]
    fn test_immutable_override_with_maps_in_order() {
        let actual = OverridingImmutableMapBuilder::new()
            .override_with_all(Some(&first()))
            .override_with_all(Some(&second()))
            .override_with_all(Some(&third()))
            .build();
        assert!(actual == expected());
    }

    #[test]
    fn test_immutable_rejects_absent_key() {
        let mut builder = OverridingImmutableMapBuilder::<String, String>::new();
        let err = builder
            .try_override_with(None, Some("some value".to_string()))
            .unwrap_err();
        assert_eq!(err, OverrideError::NullKey);
        assert_eq!(err.to_string(), "Null keys are not allowed");
    }

    #[test]
    fn test_immutable_rejects_absent_value() {
        let mut builder = OverridingImmutableMapBuilder::<String, String>::new();
        let err = builder.try_override_with(Some("key".to_string()), None).unwrap_err();
        assert_eq!(err, OverrideError::NullValue);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_immutable_try_override_with_all_fails_fast() {
        let mut builder = OverridingImmutableMapBuilder::new();
        let entries = vec![
            (Some("a"), Some(1)),
            (None, Some(2)),
            (Some("c"), Some(3)),
        ];
        let err = builder.try_override_with_all(Some(entries)).unwrap_err();
        assert_eq!(err, OverrideError::NullKey);

        let actual = builder.build();
        assert_eq!(actual.len(), 1);
        assert_eq!(actual.get("a"), Some(&1));
    }

    #[test]
    fn test_immutable_try_override_with_all_accepts_absent_source() {
        let mut builder = OverridingImmutableMapBuilder::<&str, i32>::new();
        builder
            .try_override_with_all(None::<Vec<(Option<&str>, Option<i32>)>>)
            .unwrap()
            .override_with("k", 1);
        assert_eq!(builder.build().len(), 1);
    }
}
