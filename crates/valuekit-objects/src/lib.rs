//! Explicit field lists for structural equality, hashing and rendering.
//!
//! A type names the fields that make up its identity once, through the
//! [`field_list!`], [`structural_eq!`] and [`structural_hash!`] macros.
//! Fields left out of the list are ignored by all three, the way transient
//! fields are skipped by reflective equality.

mod macros;
mod style;

pub use style::ToStringStyle;

use std::fmt;

/// A type that can enumerate its identity-bearing fields.
pub trait FieldList {
    /// Fully qualified type name. Styles may shorten it.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Field names paired with their values, in declaration order.
    fn fields(&self) -> Vec<(&'static str, &dyn fmt::Debug)>;

    /// Render this object with the given style.
    fn to_string_with(&self, style: &ToStringStyle) -> String
    where
        Self: Sized,
    {
        style.render(self)
    }
}
