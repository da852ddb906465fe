//! Errors raised by the fail-fast override builders.

/// A write was rejected because part of it was absent.
///
/// Rejection happens at the time of the write, not when the snapshot is
/// built. Writes accepted before the rejected one stay in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverrideError {
    #[error("Null keys are not allowed")]
    NullKey,

    #[error("Null values are not allowed")]
    NullValue,

    #[error("Null rows are not allowed")]
    NullRow,

    #[error("Null columns are not allowed")]
    NullColumn,
}
