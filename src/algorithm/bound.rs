//! Binary searches over partitioned random-access ranges.
//!
//! `lower_bound`, `upper_bound` and `equal_range` are all the same bisection
//! loop ([`partition_point`]) with different predicates.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::policy::Found;
use crate::cursor::RandomAccess;
use crate::range::{CursorOf, IntoRange, ItemOf, Range};

fn bisect<C, P>(begin: &C, end: &C, predicate: &mut P) -> C
where
    C: RandomAccess,
    P: FnMut(C::Item) -> bool,
{
    let mut first = begin.clone();
    let mut length = first.distance_to(end);
    while length > 0 {
        let half = length / 2;
        let mut middle = first.clone();
        middle.advance(half);
        if predicate(middle.deref()) {
            middle.inc();
            first = middle;
            length -= half + 1;
        } else {
            length = half;
        }
    }
    first
}

/// Finds the first element for which `predicate` returns `false`.
///
/// The range must be partitioned: every element satisfying `predicate`
/// comes before every element that does not.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnBeginFound};
///
/// let data = [2, 4, 6, 7, 9];
/// let even: Vec<i32> = algorithm::partition_point(&data, |value: &i32| value % 2 == 0)
///     .returning(ReturnBeginFound)
///     .copied()
///     .collect();
/// assert_eq!(even, vec![2, 4, 6]);
/// ```
pub fn partition_point<R, P>(range: R, mut predicate: P) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    P: FnMut(ItemOf<R>) -> bool,
{
    let (begin, end) = range.into_range().into_parts();
    let found = bisect(&begin, &end, &mut predicate);
    Found::new(found, begin, end)
}

/// Finds the first element not less than `value` in a sorted range.
pub fn lower_bound<R, V>(range: R, value: &V) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    ItemOf<R>: Borrow<V>,
    V: Ord + ?Sized,
{
    partition_point(range, |item: ItemOf<R>| item.borrow() < value)
}

/// Finds the first element whose key is not less than `key`.
pub fn lower_bound_by_key<R, K, F>(range: R, key: &K, mut key_of: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(ItemOf<R>) -> K,
    K: Ord,
{
    partition_point(range, |item: ItemOf<R>| key_of(item) < *key)
}

/// Finds the first element greater than `value` in a sorted range.
pub fn upper_bound<R, V>(range: R, value: &V) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    ItemOf<R>: Borrow<V>,
    V: Ord + ?Sized,
{
    partition_point(range, |item: ItemOf<R>| item.borrow() <= value)
}

/// Finds the first element whose key is greater than `key`.
pub fn upper_bound_by_key<R, K, F>(range: R, key: &K, mut key_of: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(ItemOf<R>) -> K,
    K: Ord,
{
    partition_point(range, |item: ItemOf<R>| key_of(item) <= *key)
}

/// Finds the first element that `compare` does not order before `value`.
///
/// `compare(item, value)` returns how `item` is ordered relative to
/// `value`; the range must be sorted consistently with it.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnFound};
///
/// let descending = [9, 7, 7, 4, 1];
/// let found = algorithm::lower_bound_by(&descending, &7, |item: &i32, value: &i32| value.cmp(item));
/// assert_eq!(found.returning(ReturnFound).index(), 1);
/// ```
pub fn lower_bound_by<R, V, F>(range: R, value: &V, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(ItemOf<R>, &V) -> Ordering,
    V: ?Sized,
{
    partition_point(range, |item: ItemOf<R>| compare(item, value) == Ordering::Less)
}

/// Finds the first element that `compare` orders after `value`.
pub fn upper_bound_by<R, V, F>(range: R, value: &V, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(ItemOf<R>, &V) -> Ordering,
    V: ?Sized,
{
    partition_point(range, |item: ItemOf<R>| compare(item, value) != Ordering::Greater)
}

/// Returns the run of elements equal to `value` in a sorted range.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm;
///
/// let data = [1, 2, 2, 2, 3];
/// let run = algorithm::equal_range(&data, &2);
/// assert_eq!(run.size(), 3);
/// assert!(algorithm::equal_range(&data, &7).is_empty());
/// ```
pub fn equal_range<R, V>(range: R, value: &V) -> Range<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    ItemOf<R>: Borrow<V>,
    V: Ord + ?Sized,
{
    let (begin, end) = range.into_range().into_parts();
    let lower = bisect(&begin, &end, &mut |item: ItemOf<R>| item.borrow() < value);
    let upper = bisect(&lower, &end, &mut |item: ItemOf<R>| item.borrow() <= value);
    Range::new(lower, upper)
}

/// Returns the run of elements that `compare` considers equivalent to
/// `value`.
pub fn equal_range_by<R, V, F>(range: R, value: &V, mut compare: F) -> Range<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(ItemOf<R>, &V) -> Ordering,
    V: ?Sized,
{
    let (begin, end) = range.into_range().into_parts();
    let lower = bisect(&begin, &end, &mut |item: ItemOf<R>| {
        compare(item, value) == Ordering::Less
    });
    let upper = bisect(&lower, &end, &mut |item: ItemOf<R>| {
        compare(item, value) != Ordering::Greater
    });
    Range::new(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ReturnFound;
    use crate::seq::iota;
    use rstest::rstest;

    const SORTED: [i32; 7] = [1, 3, 3, 3, 5, 8, 8];

    #[rstest]
    #[case::below_all(0, 0, 0)]
    #[case::run(3, 1, 4)]
    #[case::between(4, 4, 4)]
    #[case::last_run(8, 5, 7)]
    #[case::above_all(9, 7, 7)]
    fn bounds(#[case] value: i32, #[case] lower: usize, #[case] upper: usize) {
        assert_eq!(lower_bound(&SORTED, &value).returning(ReturnFound).index(), lower);
        assert_eq!(upper_bound(&SORTED, &value).returning(ReturnFound).index(), upper);
        assert_eq!(equal_range(&SORTED, &value).size(), upper - lower);
    }

    #[rstest]
    fn bounds_by_key() {
        let people = [("ann", 20), ("bob", 31), ("cid", 31), ("dee", 40)];
        let age = |person: &(&str, i32)| person.1;
        let lower = lower_bound_by_key(&people, &31, age).returning(ReturnFound);
        let upper = upper_bound_by_key(&people, &31, age).returning(ReturnFound);
        assert_eq!((lower.index(), upper.index()), (1, 3));
    }

    #[rstest]
    fn partition_point_over_counting_range() {
        let found = partition_point(iota(0, 100), |value: i32| value * value < 50);
        assert_eq!(found.returning(ReturnFound).core().value(), 8);
    }

    #[rstest]
    fn empty_range_bounds_at_begin() {
        let data: [i32; 0] = [];
        assert_eq!(lower_bound(&data, &1).returning(ReturnFound).index(), 0);
        assert!(equal_range(&data, &1).is_empty());
    }
}
