//! Macros generating field-list based impls.
//!
//! All three macros accept the same input: a type name, optionally with
//! plain type parameters, followed by the braced list of fields.

/// Implement [`FieldList`](crate::FieldList) over the listed fields.
///
/// ```
/// use valuekit_objects::{field_list, FieldList, ToStringStyle};
///
/// struct Speed {
///     value: f32,
///     unit: &'static str,
/// }
///
/// field_list!(Speed { value, unit });
///
/// let speed = Speed { value: 4.5, unit: "m/s" };
/// assert_eq!(
///     speed.to_string_with(&ToStringStyle::short_prefix()),
///     r#"Speed[value=4.5,unit="m/s"]"#
/// );
/// ```
#[macro_export]
macro_rules! field_list {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::FieldList for $ty {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, &dyn ::core::fmt::Debug)> {
                ::std::vec![
                    $((::core::stringify!($field), &self.$field as &dyn ::core::fmt::Debug)),*
                ]
            }
        }
    };
    ($ty:ident < $($gen:ident),+ > { $($field:ident),* $(,)? }) => {
        impl<$($gen: ::core::fmt::Debug),+> $crate::FieldList for $ty<$($gen),+> {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, &dyn ::core::fmt::Debug)> {
                ::std::vec![
                    $((::core::stringify!($field), &self.$field as &dyn ::core::fmt::Debug)),*
                ]
            }
        }
    };
}

/// Implement `PartialEq` by comparing the listed fields pairwise.
///
/// Typed `PartialEq` only compares values of the same type, so two different
/// types with identical fields are never considered equal. Add `Eq` by hand
/// when every listed field is `Eq`.
#[macro_export]
macro_rules! structural_eq {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl ::core::cmp::PartialEq for $ty {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }
    };
    ($ty:ident < $($gen:ident),+ > { $($field:ident),* $(,)? }) => {
        impl<$($gen: ::core::cmp::PartialEq),+> ::core::cmp::PartialEq for $ty<$($gen),+> {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }
    };
}

/// Implement `Hash` by feeding the listed fields to the hasher in order.
#[macro_export]
macro_rules! structural_hash {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl ::core::hash::Hash for $ty {
            #[allow(unused_variables)]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $(::core::hash::Hash::hash(&self.$field, state);)*
            }
        }
    };
    ($ty:ident < $($gen:ident),+ > { $($field:ident),* $(,)? }) => {
        impl<$($gen: ::core::hash::Hash),+> ::core::hash::Hash for $ty<$($gen),+> {
            #[allow(unused_variables)]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $(::core::hash::Hash::hash(&self.$field, state);)*
            }
        }
    };
}
