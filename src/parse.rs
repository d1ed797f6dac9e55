//! Text parsing helpers for use inside pipelines.
//!
//! [`try_parse`] fits lazy pipelines: a failure is just `None`, so it
//! composes with [`filter_map`](crate::seq::filter_map). [`parse`] is the
//! eager form and reports failures as [`Error::Parse`].
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::parse::try_parse;
//! use lazyrange::prelude::*;
//!
//! let fields = ["4", " 8 ", "x", "15"];
//! let numbers: Vec<i32> = (&fields | filter_map(|text: &&str| try_parse::<i32>(text))).collect();
//! assert_eq!(numbers, vec![4, 8, 15]);
//! ```

use std::any::type_name;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Parses `text` after trimming surrounding whitespace.
///
/// Returns `None` when the text does not parse.
pub fn try_parse<T: FromStr>(text: impl AsRef<str>) -> Option<T> {
    text.as_ref().trim().parse().ok()
}

/// Parses `text` after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the text and the target type when the
/// text does not parse.
///
/// # Examples
///
/// ```
/// use lazyrange::parse::parse;
///
/// assert_eq!(parse::<u8>("42"), Ok(42));
/// let error = parse::<u8>("300").unwrap_err();
/// assert_eq!(error.to_string(), "Cannot parse '300' as u8");
/// ```
pub fn parse<T: FromStr>(text: impl AsRef<str>) -> Result<T> {
    let text = text.as_ref();
    try_parse(text).ok_or_else(|| {
        let target = type_name::<T>();
        tracing::debug!(text, target_type = target, "parse failed");
        Error::Parse {
            text: text.to_owned(),
            target,
        }
    })
}
