//! Error types for the runtime failures of the library.
//!
//! Lazy pipelines never fail on their own: a stage that cannot produce a
//! value yields an empty range or `None`. The errors below are raised only
//! by the eager calls that are documented to fail, such as a [`ReturnRef`]
//! lookup that reached the end of the searched range, or unwrapping an empty
//! optional through [`opt::value`].
//!
//! [`ReturnRef`]: crate::algorithm::ReturnRef
//! [`opt::value`]: crate::opt::value

use thiserror::Error as ThisError;

/// Represents the runtime failures the library can report.
///
/// Each variant is produced at the point of the offending call and is
/// never retried or suppressed internally.
///
/// # Examples
///
/// ```rust
/// use lazyrange::Error;
///
/// let error = Error::EmptyRange { operation: "front" };
/// assert_eq!(format!("{error}"), "front: range is empty");
///
/// let error = Error::Parse { text: "abc".to_string(), target: "i32" };
/// assert_eq!(format!("{error}"), "Cannot parse 'abc' as i32");
/// ```
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A search reported its result as a reference but reached the end of
    /// the range without finding anything.
    #[error("element not found")]
    NotFound,

    /// A value was requested from an empty optional.
    #[error("optional has no value")]
    EmptyOptional,

    /// An operation that needs at least one element was applied to an empty
    /// range.
    #[error("{operation}: range is empty")]
    EmptyRange {
        /// The name of the operation that required an element.
        operation: &'static str,
    },

    /// Eager parsing of a piece of text failed.
    #[error("Cannot parse '{text}' as {target}")]
    Parse {
        /// The text that could not be parsed.
        text: String,
        /// The name of the type the text was parsed into.
        target: &'static str,
    },

    /// A caller-supplied failure message, used by
    /// [`opt::value_or_error`](crate::opt::value_or_error).
    #[error("{0}")]
    Message(String),
}

/// A specialized [`Result`](std::result::Result) for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(Error::NotFound, "element not found")]
    #[case::empty_optional(Error::EmptyOptional, "optional has no value")]
    #[case::empty_range(Error::EmptyRange { operation: "front" }, "front: range is empty")]
    #[case::message(Error::Message("boom".to_string()), "boom")]
    fn error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(Error::NotFound);
        assert_eq!(error.to_string(), "element not found");
    }
}
