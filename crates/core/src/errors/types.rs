//! Core error type definitions

/// Result type alias for statetree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for statetree operations using thiserror
///
/// Only precondition violations end up here. Absence (no match, missing key)
/// is always reported through `Option` or an omitted entry instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parallel key/value sequences of different lengths
    #[error("zip_object: unequal length arrays not allowed ({keys} keys, {values} values)")]
    LengthMismatch { keys: usize, values: usize },

    /// A pair element that is not array-shaped
    #[error("not an array at index {index}: {found}")]
    NotAnArray { index: usize, found: String },

    /// A value of the wrong kind where a specific kind is required
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Abstract states only exist to group children
    #[error("cannot transition to abstract state '{state}'")]
    AbstractState { state: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
