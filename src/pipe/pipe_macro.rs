//! The `pipe!` macro for left-to-right stage application.

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, a, b, c)` is equivalent to `x | a | b | c`. Each stage is any
/// [`Pipe`](crate::pipe::Pipe) value, and the input is anything the `|`
/// operator accepts: a range-like value or an [`Option`].
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, a)` - Returns `x | a`
/// - `pipe!(x, a, b, ...)` - Returns `x | a | b | ...`
///
/// # Examples
///
/// ```
/// use lazyrange::pipe;
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let result: Vec<i32> = pipe!(
///     &data,
///     filter(|value: &i32| value % 2 == 0),
///     map(|value: &i32| value * 10),
///     take(2)
/// )
/// .collect();
/// assert_eq!(result, vec![20, 40]);
/// ```
///
/// ## Optional values
///
/// ```
/// use lazyrange::{opt, pipe};
///
/// let result = pipe!(Some(4), opt::map(|value: i32| value + 1), opt::value_or(0));
/// assert_eq!(result, 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single stage: apply it
    ($value:expr, $stage:expr $(,)?) => {
        ($value) | ($stage)
    };

    // Multiple stages: apply left to right recursively
    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!(($value) | ($stage), $($remaining_stages),+)
    };
}
