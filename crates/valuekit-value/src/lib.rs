//! Typed value-object wrappers.
//!
//! A wrapper pairs a payload with a *kind*: an uninhabited marker type that
//! names what the payload means. `Value<Speed, f32>` and
//! `Value<Temperature, f32>` hold the same kind of number but are different
//! types, so they can never be compared, mixed up or stored in the same
//! typed collection by accident.
//!
//! ```
//! use valuekit_value::{value_kind, Value};
//!
//! value_kind! {
//!     pub Speed;
//!     pub Temperature;
//! }
//!
//! let speed: Value<Speed, f32> = Value::new(42.0);
//! let same: Value<Speed, f32> = Value::new(42.0);
//! assert_eq!(speed, same);
//! assert_eq!(format!("{:?}", speed), "Speed(42.0)");
//! ```
//!
//! Every wrapper serializes as its bare payload. [`adapters`] covers
//! formats that need an explicit conversion step.

pub mod adapters;
mod error;
mod mutable;
mod string_value;
mod traits;
mod value;

pub use adapters::{StringValueAdapter, ValueAdapter};
pub use error::AdapterError;
pub use mutable::MutableValue;
pub use string_value::StringValue;
pub use traits::{ExactTypeEq, HasStringValue, HasValue};
pub use value::{Value, ValueKind};
