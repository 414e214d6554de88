use thiserror::Error;

/// Errors that can occur when processing intlist strings.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a supposed intlist string but it did not match the expected format.
    #[error("invalid intlist syntax: '{invalid_value}' is invalid: {problem}")]
    InvalidSyntax {
        /// The specific value that was invalid. This may either be the entire intlist string
        /// or a specific part of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// An integer literal was well-formed but its magnitude does not fit in the supported
    /// value type.
    #[error("integer out of range: '{invalid_value}' does not fit in an i64")]
    ValueOutOfRange {
        /// The literal whose magnitude was too large.
        invalid_value: String,
    },
}

/// A specialized `Result` type for intlist operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn invalid_syntax_is_error() {
        let error = Error::InvalidSyntax {
            invalid_value: "abc".to_string(),
            problem: "not a number".to_string(),
        };

        // Verify it is a valid Error that can be used in Result context.
        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }

    #[test]
    fn error_kinds_are_distinguishable() {
        let syntax = Error::InvalidSyntax {
            invalid_value: "3.5".to_string(),
            problem: "not a number".to_string(),
        };
        let out_of_range = Error::ValueOutOfRange {
            invalid_value: "99999999999999999999".to_string(),
        };

        assert_ne!(syntax, out_of_range);
    }
}
