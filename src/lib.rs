//! valuekit - value objects and collection helpers.
//!
//! The workspace is split by concern; this crate re-exports all of it:
//! - [`objects`]: explicit field lists driving equality, hashing and
//!   rendering ([`ToStringStyle`])
//! - [`collection`]: null-safe helpers, override builders, tables and
//!   collection difference
//! - [`value`]: typed single-value wrappers and their adapters
//! - [`testkit`]: fixture loading and text normalization for tests

pub mod testkit;

pub use valuekit_collection as collection;
pub use valuekit_objects as objects;
pub use valuekit_value as value;

pub use valuekit_collection::{
    difference, Builder, CollectionDifference, DifferenceElement, ImmutableMap, ImmutableTable,
    Origin, OverrideError, OverridingImmutableMapBuilder, OverridingImmutableTableBuilder,
    OverridingMapBuilder, OverridingTableBuilder, Table,
};
pub use valuekit_objects::{FieldList, ToStringStyle};
pub use valuekit_value::{
    AdapterError, ExactTypeEq, HasStringValue, HasValue, MutableValue, StringValue, Value,
    ValueAdapter, ValueKind,
};
