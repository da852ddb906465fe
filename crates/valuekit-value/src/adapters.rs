//! Conversions between wrappers and their raw wire form.
//!
//! Wrappers already serialize as their payload. An adapter is for fields
//! whose conversion needs a rule of its own, such as rejecting an absent
//! value. Hook one into serde with [`serialize_marshalled`] and
//! [`deserialize_unmarshalled`]:
//!
//! ```
//! use serde::{Deserialize, Deserializer, Serialize, Serializer};
//! use valuekit_value::adapters::{deserialize_unmarshalled, serialize_marshalled};
//! use valuekit_value::{value_kind, StringValue, StringValueAdapter};
//!
//! value_kind! { pub Title; }
//!
//! fn to_raw<S: Serializer>(v: &StringValue<Title>, s: S) -> Result<S::Ok, S::Error> {
//!     serialize_marshalled::<StringValueAdapter<Title>, S>(v, s)
//! }
//!
//! fn from_raw<'de, D: Deserializer<'de>>(d: D) -> Result<StringValue<Title>, D::Error> {
//!     deserialize_unmarshalled::<StringValueAdapter<Title>, D>(d)
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Book {
//!     #[serde(serialize_with = "to_raw", deserialize_with = "from_raw")]
//!     title: StringValue<Title>,
//! }
//!
//! let book: Book = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
//! assert_eq!(book.title.get(), Some("Dune"));
//! ```

use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AdapterError;
use crate::string_value::StringValue;
use crate::value::ValueKind;

/// Converts between a wrapper and its raw form.
pub trait ValueAdapter {
    type Raw;
    type Value;

    /// Build a wrapper from a raw value, which may be absent.
    fn create_new_instance(raw: Option<Self::Raw>) -> Result<Self::Value, AdapterError>;

    /// The raw form of `value`, or `None` when it has no payload.
    fn raw_value(value: &Self::Value) -> Option<Self::Raw>;

    fn unmarshal(raw: Option<Self::Raw>) -> Result<Self::Value, AdapterError> {
        Self::create_new_instance(raw)
    }

    fn marshal(value: Option<&Self::Value>) -> Option<Self::Raw> {
        value.and_then(Self::raw_value)
    }
}

/// Adapter for [`StringValue`]. An absent raw string gives an absent
/// wrapper.
pub struct StringValueAdapter<K>(PhantomData<fn() -> K>);

impl<K: ValueKind> ValueAdapter for StringValueAdapter<K> {
    type Raw = String;
    type Value = StringValue<K>;

    fn create_new_instance(raw: Option<String>) -> Result<StringValue<K>, AdapterError> {
        Ok(StringValue::from_option(raw))
    }

    fn raw_value(value: &StringValue<K>) -> Option<String> {
        value.get().map(str::to_owned)
    }
}

/// Serialize a field through adapter `A`.
pub fn serialize_marshalled<A, S>(value: &A::Value, serializer: S) -> Result<S::Ok, S::Error>
where
    A: ValueAdapter,
    A::Raw: Serialize,
    S: Serializer,
{
    A::marshal(Some(value)).serialize(serializer)
}

/// Deserialize a field through adapter `A`. Adapter failures surface as
/// custom deserialization errors.
pub fn deserialize_unmarshalled<'de, A, D>(deserializer: D) -> Result<A::Value, D::Error>
where
    A: ValueAdapter,
    A::Raw: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let raw = Option::<A::Raw>::deserialize(deserializer)?;
    A::unmarshal(raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    crate::value_kind! {
        Code;
        Port;
    }

    type CodeAdapter = StringValueAdapter<Code>;

    struct PortAdapter;

    impl ValueAdapter for PortAdapter {
        type Raw = u32;
        type Value = Value<Port, u16>;

        fn create_new_instance(raw: Option<u32>) -> Result<Value<Port, u16>, AdapterError> {
            let raw = raw.ok_or(AdapterError::MissingValue { kind: "Port" })?;
            u16::try_from(raw)
                .map(Value::new)
                .map_err(|e| AdapterError::Rejected {
                    kind: "Port",
                    reason: e.to_string(),
                })
        }

        fn raw_value(value: &Value<Port, u16>) -> Option<u32> {
            Some(u32::from(*value.get()))
        }
    }

    #[test]
    fn test_string_adapter_round_trips_absent() {
        let absent = CodeAdapter::unmarshal(None).unwrap();
        assert!(absent.is_absent());
        assert_eq!(CodeAdapter::marshal(Some(&absent)), None);
        assert_eq!(CodeAdapter::marshal(None), None);
    }

    #[test]
    fn test_string_adapter_keeps_payload() {
        let code = CodeAdapter::unmarshal(Some("X1".to_string())).unwrap();
        assert_eq!(code.get(), Some("X1"));
        assert_eq!(CodeAdapter::marshal(Some(&code)), Some("X1".to_string()));
    }

    #[test]
    fn test_custom_adapter_rejects() {
        assert_eq!(
            PortAdapter::unmarshal(None).unwrap_err(),
            AdapterError::MissingValue { kind: "Port" }
        );
        let err = PortAdapter::unmarshal(Some(70_000)).unwrap_err();
        assert!(err.to_string().starts_with("Port rejected value"));
        assert_eq!(*PortAdapter::unmarshal(Some(8080)).unwrap().get(), 8080);
    }

    #[test]
    fn test_serde_bridge_reports_adapter_errors() {
        #[derive(Debug, serde::Serialize, serde::Deserialize)]
        struct Listener {
            #[serde(serialize_with = "port_out", deserialize_with = "port_in")]
            port: Value<Port, u16>,
        }

        fn port_out<S: Serializer>(v: &Value<Port, u16>, s: S) -> Result<S::Ok, S::Error> {
            serialize_marshalled::<PortAdapter, S>(v, s)
        }

        fn port_in<'de, D: Deserializer<'de>>(d: D) -> Result<Value<Port, u16>, D::Error> {
            deserialize_unmarshalled::<PortAdapter, D>(d)
        }

        let listener: Listener = serde_json::from_str(r#"{"port":443}"#).unwrap();
        assert_eq!(*listener.port.get(), 443);
        assert_eq!(serde_json::to_string(&listener).unwrap(), r#"{"port":443}"#);

        let err = serde_json::from_str::<Listener>(r#"{"port":null}"#).unwrap_err();
        assert!(err.to_string().contains("Port requires a value"), "{}", err);
    }
}
