//! Display helpers for ranges.

use std::fmt;

use crate::range::{IntoRange, Range};

/// A range displayed as its elements joined by a separator.
///
/// Built by [`delimit`]. The range is walked anew on every formatting call.
#[derive(Debug, Clone)]
pub struct Delimited<'s, C> {
    range: Range<C>,
    separator: &'s str,
}

impl<C> fmt::Display for Delimited<'_, C>
where
    C: crate::cursor::Cursor,
    C::Item: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.range.clone().enumerate() {
            if index > 0 {
                formatter.write_str(self.separator)?;
            }
            fmt::Display::fmt(&item, formatter)?;
        }
        Ok(())
    }
}

/// Displays the elements of `range` separated by `separator`.
///
/// Formatting options such as width apply to each element.
///
/// # Examples
///
/// ```
/// use lazyrange::format::delimit;
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3];
/// assert_eq!(delimit(&data, ", ").to_string(), "1, 2, 3");
/// assert_eq!(format!("[{:>2}]", delimit(iota(8, 11), "|")), "[ 8| 9|10]");
/// assert_eq!(delimit(iota(0, 0), "-").to_string(), "");
/// ```
pub fn delimit<R: IntoRange>(range: R, separator: &str) -> Delimited<'_, R::Cursor> {
    Delimited {
        range: range.into_range(),
        separator,
    }
}
