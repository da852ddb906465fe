//! String wrapper with an optional payload.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::traits::HasStringValue;
use crate::value::ValueKind;

/// An immutable, possibly absent string of kind `K`.
///
/// An absent payload renders as the empty string and hashes as zero.
/// [`Ord`] puts absent before every present string; use
/// [`compare_lenient`](Self::compare_lenient) when absence should compare
/// equal to anything.
pub struct StringValue<K: ValueKind> {
    value: Option<String>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ValueKind> StringValue<K> {
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_option(Some(value.into()))
    }

    pub const fn absent() -> Self {
        Self {
            value: None,
            _kind: PhantomData,
        }
    }

    pub fn from_option(value: Option<String>) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn into_inner(self) -> Option<String> {
        self.value
    }

    /// Compare payloads, treating an absent payload on either side as equal.
    pub fn compare_lenient(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl<K: ValueKind> HasStringValue for StringValue<K> {
    fn string_value(&self) -> Option<&str> {
        self.get()
    }
}

impl<K: ValueKind> From<&str> for StringValue<K> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<K: ValueKind> From<String> for StringValue<K> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<K: ValueKind> From<Option<String>> for StringValue<K> {
    fn from(value: Option<String>) -> Self {
        Self::from_option(value)
    }
}

impl<K: ValueKind> Default for StringValue<K> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<K: ValueKind> Clone for StringValue<K> {
    fn clone(&self) -> Self {
        Self::from_option(self.value.clone())
    }
}

impl<K: ValueKind> PartialEq for StringValue<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: ValueKind> Eq for StringValue<K> {}

impl<K: ValueKind> PartialOrd for StringValue<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: ValueKind> Ord for StringValue<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: ValueKind> Hash for StringValue<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            Some(value) => value.hash(state),
            None => state.write_u64(0),
        }
    }
}

impl<K: ValueKind> fmt::Debug for StringValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<K: ValueKind> fmt::Display for StringValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get().unwrap_or_default())
    }
}

impl<K: ValueKind> Serialize for StringValue<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, K: ValueKind> Deserialize<'de> for StringValue<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::{DefaultHasher, RandomState};
    use std::collections::BTreeSet;
    use std::hash::BuildHasher;

    use super::*;

    crate::value_kind! {
        Name;
    }

    type NameValue = StringValue<Name>;

    #[test]
    fn test_display_of_absent_is_empty() {
        assert_eq!(NameValue::absent().to_string(), "");
        assert_eq!(NameValue::new("bob").to_string(), "bob");
    }

    #[test]
    fn test_hash() {
        let state = RandomState::new();
        assert_eq!(state.hash_one(NameValue::new("x")), state.hash_one("x"));

        let mut hasher = DefaultHasher::new();
        hasher.write_u64(0);
        let mut absent = DefaultHasher::new();
        NameValue::absent().hash(&mut absent);
        assert_eq!(absent.finish(), hasher.finish());
    }

    #[test]
    fn test_equality() {
        assert_eq!(NameValue::new("a"), NameValue::from("a"));
        assert_eq!(NameValue::absent(), NameValue::from_option(None));
        assert_ne!(NameValue::absent(), NameValue::new(""));
        assert_ne!(NameValue::new("a"), NameValue::new("b"));
    }

    #[test]
    fn test_total_order_puts_absent_first() {
        let set: BTreeSet<NameValue> = [
            NameValue::new("b"),
            NameValue::absent(),
            NameValue::new("a"),
        ]
        .into_iter()
        .collect();
        let ordered: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(ordered, vec!["", "a", "b"]);
    }

    #[test]
    fn test_compare_lenient() {
        let a = NameValue::new("a");
        let b = NameValue::new("b");
        let absent = NameValue::absent();
        assert_eq!(a.compare_lenient(&b), Ordering::Less);
        assert_eq!(b.compare_lenient(&a), Ordering::Greater);
        assert_eq!(a.compare_lenient(&a), Ordering::Equal);
        assert_eq!(a.compare_lenient(&absent), Ordering::Equal);
        assert_eq!(absent.compare_lenient(&b), Ordering::Equal);
    }

    #[test]
    fn test_string_helpers() {
        assert_eq!(NameValue::new("abc").length(), 3);
        assert!(NameValue::absent().is_empty());
        assert!(NameValue::new(" \t").is_blank());
        assert!(!NameValue::new(" x ").is_blank());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", NameValue::new("a")), r#"Name(Some("a"))"#);
        assert_eq!(format!("{:?}", NameValue::absent()), "Name(None)");
    }

    #[test]
    fn test_serde_maps_absent_to_null() {
        assert_eq!(serde_json::to_string(&NameValue::new("a")).unwrap(), r#""a""#);
        assert_eq!(serde_json::to_string(&NameValue::absent()).unwrap(), "null");
        let parsed: NameValue = serde_json::from_str("null").unwrap();
        assert!(parsed.is_absent());
    }
}
