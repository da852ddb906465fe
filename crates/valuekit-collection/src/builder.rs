//! The builder contract shared by the override builders.

/// Produces a snapshot of accumulated state.
///
/// `build` may be called any number of times. Every call returns a new,
/// independent snapshot: writing to the builder afterwards, or to another
/// snapshot, does not affect it.
pub trait Builder {
    type Output;

    fn build(&self) -> Self::Output;
}
