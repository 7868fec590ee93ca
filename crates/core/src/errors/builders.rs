//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a length mismatch error
    #[must_use]
    pub fn length_mismatch(keys: usize, values: usize) -> Self {
        Error::LengthMismatch { keys, values }
    }

    /// Create a not-an-array error for the element at `index`
    #[must_use]
    pub fn not_an_array(index: usize, found: impl Into<String>) -> Self {
        Error::NotAnArray {
            index,
            found: found.into(),
        }
    }

    /// Create a type mismatch error
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an abstract state error
    #[must_use]
    pub fn abstract_state(state: impl Into<String>) -> Self {
        Error::AbstractState {
            state: state.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// True for the precondition-violation class raised by the collection helpers
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. } | Error::NotAnArray { .. } | Error::TypeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::length_mismatch(2, 1);
        assert_eq!(
            err.to_string(),
            "zip_object: unequal length arrays not allowed (2 keys, 1 values)"
        );
        assert!(err.is_precondition());
    }

    #[test]
    fn test_abstract_state_is_not_precondition() {
        let err = Error::abstract_state("app");
        assert_eq!(err.to_string(), "cannot transition to abstract state 'app'");
        assert!(!err.is_precondition());
    }
}
