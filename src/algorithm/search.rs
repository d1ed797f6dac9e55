//! Linear searches that report a position.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::policy::Found;
use crate::cursor::{Cursor, RandomAccess};
use crate::range::{CursorOf, IntoRange, ItemOf};

fn first_where<C, P>(begin: C, end: C, mut predicate: P) -> Found<C>
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    let mut found = begin.clone();
    while !found.is_equal(&end) && !predicate(found.deref()) {
        found.inc();
    }
    Found::new(found, begin, end)
}

/// Returns `true` if the elements starting at `at` begin with the whole
/// pattern `[pattern, pattern_end)`.
fn matches_at<C, D>(at: &C, end: &C, pattern: &D, pattern_end: &D) -> bool
where
    C: Cursor,
    D: Cursor,
    C::Item: PartialEq<D::Item>,
{
    let mut position = at.clone();
    let mut expected = pattern.clone();
    loop {
        if expected.is_equal(pattern_end) {
            return true;
        }
        if position.is_equal(end) || position.deref() != expected.deref() {
            return false;
        }
        position.inc();
        expected.inc();
    }
}

/// Finds the first element equal to `value`.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnFound};
///
/// let data = [4, 8, 15, 16];
/// assert_eq!(algorithm::find(&data, &15).returning(ReturnFound).index(), 2);
/// assert!(!algorithm::find(&data, &23).is_found());
/// ```
pub fn find<R, V>(range: R, value: &V) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    find_if(range, |item: ItemOf<R>| item.borrow() == value)
}

/// Finds the first element for which `predicate` returns `true`.
pub fn find_if<R, P>(range: R, predicate: P) -> Found<CursorOf<R>>
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    let (begin, end) = range.into_range().into_parts();
    first_where(begin, end, predicate)
}

/// Finds the first element for which `predicate` returns `false`.
pub fn find_if_not<R, P>(range: R, mut predicate: P) -> Found<CursorOf<R>>
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    find_if(range, |item: ItemOf<R>| !predicate(item))
}

/// Finds the first element equal to any element of `candidates`.
pub fn find_first_of<R, S>(range: R, candidates: S) -> Found<CursorOf<R>>
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    let candidates = candidates.into_range();
    find_if(range, |item: ItemOf<R>| {
        candidates.clone().any(|candidate| item == candidate)
    })
}

/// Finds the start of the first occurrence of `pattern`.
///
/// An empty pattern is found at the begin.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnFoundEnd};
///
/// let text = [1, 2, 3, 1, 2, 3];
/// let rest: Vec<i32> = algorithm::search(&text, &[2, 3]).returning(ReturnFoundEnd).copied().collect();
/// assert_eq!(rest, vec![2, 3, 1, 2, 3]);
/// ```
pub fn search<R, S>(range: R, pattern: S) -> Found<CursorOf<R>>
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    let (begin, end) = range.into_range().into_parts();
    let (pattern, pattern_end) = pattern.into_range().into_parts();
    let mut candidate = begin.clone();
    loop {
        if matches_at(&candidate, &end, &pattern, &pattern_end) {
            return Found::new(candidate, begin, end);
        }
        if candidate.is_equal(&end) {
            return Found::new(candidate, begin, end);
        }
        candidate.inc();
    }
}

/// Finds the start of the last occurrence of `pattern`.
///
/// An empty pattern, or one that never occurs, yields `end`.
pub fn find_end<R, S>(range: R, pattern: S) -> Found<CursorOf<R>>
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    let (begin, end) = range.into_range().into_parts();
    let (pattern, pattern_end) = pattern.into_range().into_parts();
    let mut found = end.clone();
    if pattern.is_equal(&pattern_end) {
        return Found::new(found, begin, end);
    }
    let mut candidate = begin.clone();
    while !candidate.is_equal(&end) {
        if matches_at(&candidate, &end, &pattern, &pattern_end) {
            found = candidate.clone();
        }
        candidate.inc();
    }
    Found::new(found, begin, end)
}

/// Finds the first run of `count` consecutive elements equal to `value`.
///
/// A zero count is found at the begin.
pub fn search_n<R, V>(range: R, count: usize, value: &V) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    let (begin, end) = range.into_range().into_parts();
    if count == 0 {
        return Found::new(begin.clone(), begin, end);
    }
    let mut run_start = begin.clone();
    let mut run_length = 0;
    let mut position = begin.clone();
    while !position.is_equal(&end) {
        if position.deref().borrow() == value {
            if run_length == 0 {
                run_start = position.clone();
            }
            run_length += 1;
            if run_length == count {
                return Found::new(run_start, begin, end);
            }
        } else {
            run_length = 0;
        }
        position.inc();
    }
    Found::new(end.clone(), begin, end)
}

/// Finds the first element equal to the element after it.
pub fn adjacent_find<R>(range: R) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: PartialEq,
{
    let (begin, end) = range.into_range().into_parts();
    if begin.is_equal(&end) {
        return Found::new(end.clone(), begin, end);
    }
    let mut previous = begin.clone();
    let mut next = begin.clone();
    next.inc();
    while !next.is_equal(&end) {
        if previous.deref() == next.deref() {
            return Found::new(previous, begin, end);
        }
        previous = next.clone();
        next.inc();
    }
    Found::new(end.clone(), begin, end)
}

/// Walks both ranges in step and stops at the first unequal pair.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnOptRef};
///
/// let (left, right) = algorithm::mismatch(&[1, 2, 3], &[1, 2, 4, 5]);
/// assert_eq!(left.returning(ReturnOptRef), Some(&3));
/// assert_eq!(right.returning(ReturnOptRef), Some(&4));
/// ```
pub fn mismatch<R, S>(left: R, right: S) -> (Found<CursorOf<R>>, Found<CursorOf<S>>)
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    let (left_begin, left_end) = left.into_range().into_parts();
    let (right_begin, right_end) = right.into_range().into_parts();
    let mut left_at = left_begin.clone();
    let mut right_at = right_begin.clone();
    while !left_at.is_equal(&left_end)
        && !right_at.is_equal(&right_end)
        && left_at.deref() == right_at.deref()
    {
        left_at.inc();
        right_at.inc();
    }
    (
        Found::new(left_at, left_begin, left_end),
        Found::new(right_at, right_begin, right_end),
    )
}

// =============================================================================
// Extremes
// =============================================================================

fn extreme_by<C, K, F, B>(begin: C, end: C, mut key: F, mut better: B) -> Found<C>
where
    C: Cursor,
    F: FnMut(C::Item) -> K,
    B: FnMut(&K, &K) -> bool,
{
    if begin.is_equal(&end) {
        return Found::new(end.clone(), begin, end);
    }
    let mut best = begin.clone();
    let mut best_key = key(best.deref());
    let mut position = begin.clone();
    position.inc();
    while !position.is_equal(&end) {
        let candidate = key(position.deref());
        if better(&candidate, &best_key) {
            best = position.clone();
            best_key = candidate;
        }
        position.inc();
    }
    Found::new(best, begin, end)
}

/// Finds the first smallest element.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnRef};
///
/// let data = [3, 1, 4, 1, 5];
/// assert_eq!(algorithm::min_element(&data).returning(ReturnRef), Ok(&1));
/// assert_eq!(algorithm::max_element(&data).returning(ReturnRef), Ok(&5));
/// ```
pub fn min_element<R>(range: R) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, |item| item, |candidate, best| candidate < best)
}

/// Finds the first element with the smallest key.
pub fn min_element_by_key<R, K, F>(range: R, key: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    F: FnMut(ItemOf<R>) -> K,
    K: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, key, |candidate, best| candidate < best)
}

/// Finds the first largest element.
pub fn max_element<R>(range: R) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, |item| item, |candidate, best| candidate > best)
}

/// Finds the first element with the largest key.
pub fn max_element_by_key<R, K, F>(range: R, key: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    F: FnMut(ItemOf<R>) -> K,
    K: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, key, |candidate, best| candidate > best)
}

/// Finds the first smallest element under `compare`.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnRef};
///
/// let data = [3, 1, 4, 1, 5];
/// let descending = |left: &&i32, right: &&i32| right.cmp(left);
/// assert_eq!(algorithm::min_element_by(&data, descending).returning(ReturnRef), Ok(&5));
/// ```
pub fn min_element_by<R, F>(range: R, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    F: FnMut(&ItemOf<R>, &ItemOf<R>) -> Ordering,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, |item| item, |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

/// Finds the first largest element under `compare`.
pub fn max_element_by<R, F>(range: R, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    F: FnMut(&ItemOf<R>, &ItemOf<R>) -> Ordering,
{
    let (begin, end) = range.into_range().into_parts();
    extreme_by(begin, end, |item| item, |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

fn minmax_where<C, L>(begin: C, end: C, mut less: L) -> (Found<C>, Found<C>)
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut smallest = begin.clone();
    let mut largest = begin.clone();
    if !begin.is_equal(&end) {
        let mut position = begin.clone();
        position.inc();
        while !position.is_equal(&end) {
            let item = position.deref();
            if less(&item, &smallest.deref()) {
                smallest = position.clone();
            }
            if !less(&item, &largest.deref()) {
                largest = position.clone();
            }
            position.inc();
        }
    }
    (
        Found::new(smallest, begin.clone(), end.clone()),
        Found::new(largest, begin, end),
    )
}

/// Finds the first smallest and the last largest element in one pass.
pub fn minmax_element<R>(range: R) -> (Found<CursorOf<R>>, Found<CursorOf<R>>)
where
    R: IntoRange,
    ItemOf<R>: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    minmax_where(begin, end, |item, other| item < other)
}

/// Finds the first smallest and the last largest element under `compare`.
pub fn minmax_element_by<R, F>(range: R, mut compare: F) -> (Found<CursorOf<R>>, Found<CursorOf<R>>)
where
    R: IntoRange,
    F: FnMut(&ItemOf<R>, &ItemOf<R>) -> Ordering,
{
    let (begin, end) = range.into_range().into_parts();
    minmax_where(begin, end, |item, other| compare(item, other) == Ordering::Less)
}

// =============================================================================
// Order checks
// =============================================================================

fn sorted_until_where<C, L>(begin: C, end: C, mut less: L) -> Found<C>
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    if begin.is_equal(&end) {
        return Found::new(end.clone(), begin, end);
    }
    let mut previous = begin.clone();
    let mut next = begin.clone();
    next.inc();
    while !next.is_equal(&end) {
        if less(&next.deref(), &previous.deref()) {
            return Found::new(next, begin, end);
        }
        previous = next.clone();
        next.inc();
    }
    Found::new(end.clone(), begin, end)
}

/// Finds the first element smaller than the one before it.
pub fn is_sorted_until<R>(range: R) -> Found<CursorOf<R>>
where
    R: IntoRange,
    ItemOf<R>: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    sorted_until_where(begin, end, |item, other| item < other)
}

/// Finds the first element that `compare` orders before the one preceding
/// it.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnFound};
///
/// let data = [9, 7, 7, 8, 1];
/// let broken = algorithm::is_sorted_until_by(&data, |left: &&i32, right: &&i32| right.cmp(left));
/// assert_eq!(broken.returning(ReturnFound).index(), 3);
/// ```
pub fn is_sorted_until_by<R, F>(range: R, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    F: FnMut(&ItemOf<R>, &ItemOf<R>) -> Ordering,
{
    let (begin, end) = range.into_range().into_parts();
    sorted_until_where(begin, end, |item, other| compare(item, other) == Ordering::Less)
}

fn heap_until_where<C, L>(begin: C, end: C, mut less: L) -> Found<C>
where
    C: RandomAccess,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    let length = begin.distance_to(&end);
    let element = |index: isize| {
        let mut position = begin.clone();
        position.advance(index);
        position
    };
    for child in 1..length {
        let parent = (child - 1) / 2;
        let child_at = element(child);
        if less(&element(parent).deref(), &child_at.deref()) {
            return Found::new(child_at, begin.clone(), end);
        }
    }
    Found::new(end.clone(), begin, end)
}

/// Finds the first element that breaks the max-heap order.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnBeginFound};
///
/// let data = [9, 5, 4, 1, 7, 2];
/// let heap: Vec<i32> = algorithm::is_heap_until(&data).returning(ReturnBeginFound).copied().collect();
/// assert_eq!(heap, vec![9, 5, 4, 1]);
/// ```
pub fn is_heap_until<R>(range: R) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    ItemOf<R>: PartialOrd,
{
    let (begin, end) = range.into_range().into_parts();
    heap_until_where(begin, end, |parent, child| parent < child)
}

/// Finds the first element that breaks the heap order defined by `compare`.
///
/// With a reversed comparison this checks for a min-heap.
pub fn is_heap_until_by<R, F>(range: R, mut compare: F) -> Found<CursorOf<R>>
where
    R: IntoRange,
    CursorOf<R>: RandomAccess,
    F: FnMut(&ItemOf<R>, &ItemOf<R>) -> Ordering,
{
    let (begin, end) = range.into_range().into_parts();
    heap_until_where(begin, end, |parent, child| compare(parent, child) == Ordering::Less)
}
