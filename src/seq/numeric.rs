//! Counting sources: `iota`, `iota_to` and `repeat`.

use crate::cursor::{Seek, Seeker, offset_index, signed_distance};
use crate::range::Range;

/// A value that can be counted through one step at a time.
///
/// Implemented for every primitive integer and float. For floats a step is
/// `1.0` and distances round up, so `0.0..2.5` yields `0.0, 1.0, 2.0`.
pub trait Numeric: Copy + PartialOrd + Default {
    /// Returns the value `by` steps away.
    #[must_use]
    fn offset(self, by: isize) -> Self;

    /// Returns the number of steps from `self` to `to`.
    fn distance(self, to: Self) -> isize;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss,
                clippy::cast_lossless
            )]
            impl Numeric for $t {
                fn offset(self, by: isize) -> Self {
                    (self as i128 + by as i128) as $t
                }

                fn distance(self, to: Self) -> isize {
                    (to as i128 - self as i128) as isize
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            impl Numeric for $t {
                fn offset(self, by: isize) -> Self {
                    self + by as $t
                }

                fn distance(self, to: Self) -> isize {
                    (to - self).ceil() as isize
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);

// =============================================================================
// iota
// =============================================================================

/// A position in a counting sequence; dereferencing yields the value itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPosition<T> {
    value: T,
}

impl<T: Numeric> NumericPosition<T> {
    /// Returns the current value.
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: Numeric> Seek for NumericPosition<T> {
    type Item = T;

    fn deref(&self) -> T {
        self.value
    }

    fn advance(&mut self, offset: isize) {
        self.value = self.value.offset(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.value.distance(other.value)
    }
}

/// A random-access cursor over consecutive values.
pub type NumericCursor<T> = Seeker<NumericPosition<T>>;

/// Counts from `low` up to but not including `high`.
///
/// When `high` is below `low` the range is empty.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// assert_eq!(iota(2, 5).collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert!(iota(5, 2).is_empty());
/// assert_eq!(iota(0_u8, 4).rev().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
/// ```
pub fn iota<T: Numeric>(low: T, high: T) -> Range<NumericCursor<T>> {
    let high = if high < low { low } else { high };
    Range::new(
        Seeker::new(NumericPosition { value: low }),
        Seeker::new(NumericPosition { value: high }),
    )
}

/// Counts from zero up to but not including `high`.
pub fn iota_to<T: Numeric>(high: T) -> Range<NumericCursor<T>> {
    iota(T::default(), high)
}

// =============================================================================
// repeat
// =============================================================================

/// A position in a sequence of identical values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatPosition<T> {
    value: T,
    index: usize,
}

impl<T: Clone> Seek for RepeatPosition<T> {
    type Item = T;

    fn deref(&self) -> T {
        self.value.clone()
    }

    fn advance(&mut self, offset: isize) {
        self.index = offset_index(self.index, offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        signed_distance(self.index, other.index)
    }
}

/// A random-access cursor that yields the same value at every position.
pub type RepeatCursor<T> = Seeker<RepeatPosition<T>>;

/// Yields `value` exactly `count` times.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let dashes: String = repeat('-', 3).collect();
/// assert_eq!(dashes, "---");
/// ```
pub fn repeat<T: Clone>(value: T, count: usize) -> Range<RepeatCursor<T>> {
    Range::new(
        Seeker::new(RepeatPosition {
            value: value.clone(),
            index: 0,
        }),
        Seeker::new(RepeatPosition { value, index: count }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ascending(0, 4, vec![0, 1, 2, 3])]
    #[case::negative(-2, 1, vec![-2, -1, 0])]
    #[case::equal_bounds(3, 3, vec![])]
    #[case::inverted(5, 1, vec![])]
    fn iota_counts(#[case] low: i32, #[case] high: i32, #[case] expected: Vec<i32>) {
        assert_eq!(iota(low, high).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn iota_is_random_access() {
        let range = iota(10_u64, 20);
        assert_eq!(range.size(), 10);
        assert_eq!(range.at(4), Some(14));
        assert_eq!(range.back(), Some(19));
    }

    #[rstest]
    fn iota_to_starts_at_zero() {
        assert_eq!(iota_to(3_usize).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[rstest]
    fn float_iota_rounds_distance_up() {
        let values: Vec<f64> = iota(0.0, 2.5).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[rstest]
    fn repeat_yields_count_copies() {
        let range = repeat(String::from("ab"), 2);
        assert_eq!(range.size(), 2);
        assert_eq!(range.collect::<Vec<_>>(), vec!["ab", "ab"]);
    }

    #[rstest]
    fn repeat_zero_is_empty() {
        assert!(repeat(1, 0).is_empty());
    }
}
