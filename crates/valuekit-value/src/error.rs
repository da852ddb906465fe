//! Adapter errors.

/// A raw value could not be turned into a wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The wrapper does not accept an absent payload.
    #[error("{kind} requires a value")]
    MissingValue { kind: &'static str },

    /// The payload is present but not acceptable.
    #[error("{kind} rejected value: {reason}")]
    Rejected { kind: &'static str, reason: String },
}
