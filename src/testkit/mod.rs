//! Helpers for tests in crates that use valuekit.
//!
//! These live outside `#[cfg(test)]` so dependent crates can use them from
//! their own test suites.

pub mod loader;
pub mod normalize;
mod settable;

pub use settable::SettableHashCode;
