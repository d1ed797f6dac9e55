//! Reordering algorithms over mutable slices.
//!
//! Each one rearranges the slice in place and reports the split point as a
//! [`Found`] over the rearranged slice, so any return policy applies.

use super::policy::Found;
use crate::cursor::SliceCursor;

fn split_at<T>(slice: &[T], index: usize) -> Found<SliceCursor<'_, T>> {
    Found::new(
        SliceCursor::at(slice, index),
        SliceCursor::at(slice, 0),
        SliceCursor::at(slice, slice.len()),
    )
}

/// Swaps the elements accepted by `keep` to the front, in the order they
/// are met, and returns how many there were.
fn gather_front<T, P>(slice: &mut [T], mut keep: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut boundary = 0;
    let mut scan = 0;
    while scan < slice.len() {
        if keep(&slice[scan]) {
            slice.swap(boundary, scan);
            boundary += 1;
        }
        scan += 1;
    }
    boundary
}

/// Moves the elements satisfying `predicate` to the front.
///
/// Relative order is not kept. The result points at the first element of
/// the second group.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnBoth};
///
/// let mut data = [1, 2, 3, 4, 5, 6];
/// let (even, odd) = algorithm::partition(&mut data, |value: &i32| value % 2 == 0).returning(ReturnBoth);
/// assert!(even.clone().all(|value| value % 2 == 0));
/// assert_eq!(even.size(), 3);
/// assert!(odd.clone().all(|value| value % 2 == 1));
/// ```
pub fn partition<T, P>(slice: &mut [T], predicate: P) -> Found<SliceCursor<'_, T>>
where
    P: FnMut(&T) -> bool,
{
    let boundary = gather_front(slice, predicate);
    split_at(slice, boundary)
}

/// Moves the elements satisfying `predicate` to the front, keeping the
/// relative order inside both groups.
pub fn stable_partition<T, P>(slice: &mut [T], mut predicate: P) -> Found<SliceCursor<'_, T>>
where
    P: FnMut(&T) -> bool,
{
    slice.sort_by_cached_key(|item| !predicate(item));
    let boundary = slice.partition_point(|item| predicate(item));
    split_at(slice, boundary)
}

/// Moves every element for which `predicate` returns `false` to the front,
/// in order.
///
/// The result points at the first removed element; the removed elements
/// are left after it in unspecified order.
pub fn remove_if<T, P>(slice: &mut [T], mut predicate: P) -> Found<SliceCursor<'_, T>>
where
    P: FnMut(&T) -> bool,
{
    let kept = gather_front(slice, |item| !predicate(item));
    split_at(slice, kept)
}

/// Moves every element not equal to `value` to the front, in order.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, ReturnBeginFound};
///
/// let mut data = [1, 0, 2, 0, 3];
/// let kept: Vec<i32> = algorithm::remove(&mut data, &0).returning(ReturnBeginFound).copied().collect();
/// assert_eq!(kept, vec![1, 2, 3]);
/// ```
pub fn remove<'a, T: PartialEq>(slice: &'a mut [T], value: &T) -> Found<SliceCursor<'a, T>> {
    remove_if(slice, |item| item == value)
}

/// Collapses each run of equal neighbours to its first element.
///
/// The result points just past the last kept element.
pub fn unique<T: PartialEq>(slice: &mut [T]) -> Found<SliceCursor<'_, T>> {
    if slice.is_empty() {
        return split_at(slice, 0);
    }
    let mut written = 1;
    let mut scan = 1;
    while scan < slice.len() {
        if slice[scan] != slice[written - 1] {
            slice.swap(scan, written);
            written += 1;
        }
        scan += 1;
    }
    split_at(slice, written)
}

/// Rotates the slice so that the element at `middle` comes first.
///
/// The result points at the element that used to be first. A `middle` past
/// the end is clamped to the length.
pub fn rotate<T>(slice: &mut [T], middle: usize) -> Found<SliceCursor<'_, T>> {
    let middle = middle.min(slice.len());
    slice.rotate_left(middle);
    let moved = slice.len() - middle;
    split_at(slice, moved)
}
