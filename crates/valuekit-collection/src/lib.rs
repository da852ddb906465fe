//! Null-safe collection helpers, override builders and collection difference.
//!
//! - [`safe`] turns an optional collection reference into something that
//!   can always be read from.
//! - The `Overriding*Builder` types merge several maps or tables into one
//!   snapshot, later writes winning over earlier ones.
//! - [`difference`] tags the elements of two sequences by where they were
//!   found.

mod builder;
mod difference;
mod error;
mod immutable;
mod override_map;
mod override_table;
mod safe;
mod table;

pub use builder::Builder;
pub use difference::{difference, CollectionDifference, DifferenceElement, Origin};
pub use error::OverrideError;
pub use immutable::{ImmutableMap, ImmutableTable};
pub use override_map::{OverridingImmutableMapBuilder, OverridingMapBuilder};
pub use override_table::{OverridingImmutableTableBuilder, OverridingTableBuilder};
pub use safe::{copy_or_empty, safe, safe_slice, safe_str, SafeExt, SafeRef};
pub use table::Table;
