//! The range value: a begin/end cursor pair.
//!
//! [`Range`] is the currency passed between adaptors and algorithms. It is a
//! cheap view that never owns the data it walks over unless its cursors do
//! (see [`owned`](crate::seq::owned)).
//!
//! A range is also a standard [`Iterator`] that pulls from the front, so
//! anything in `std` that consumes iterators consumes ranges as well. When
//! the cursors are [`Bidirectional`] the range is a [`DoubleEndedIterator`],
//! and when they are [`RandomAccess`] it is an [`ExactSizeIterator`].
//!
//! [`IntoRange`] converts the usual containers into ranges: slices, arrays
//! and vectors by reference (borrowing), vectors by value (owning), and
//! numeric `std::ops::Range` values (counting).
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::prelude::*;
//!
//! let data = vec![1, 2, 3];
//! let range = (&data).into_range();
//! assert_eq!(range.size(), 3);
//! assert_eq!(range.clone().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
//! assert_eq!(range.at(1), Some(&2));
//! ```

use std::iter::FusedIterator;

use crate::cursor::{self, Bidirectional, Category, Cursor, RandomAccess, SliceCursor};
use crate::seq::{Numeric, NumericCursor, OwningCursor, iota};

/// A half-open pair of cursors `[begin, end)`.
///
/// `end` must be reachable from `begin` by repeated increments. This is not
/// checked; a range built from unrelated cursors iterates forever or panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Range<C> {
    begin: C,
    end: C,
}

impl<C> Range<C> {
    /// Creates a range from its two ends.
    pub const fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Returns the begin cursor.
    pub const fn begin(&self) -> &C {
        &self.begin
    }

    /// Returns the end cursor.
    pub const fn end(&self) -> &C {
        &self.end
    }

    /// Splits the range into `(begin, end)`.
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }

    pub(crate) const fn begin_mut(&mut self) -> &mut C {
        &mut self.begin
    }
}

impl<C: Cursor> Range<C> {
    /// Returns `true` if the range has no elements.
    pub fn is_empty(&self) -> bool {
        self.begin.is_equal(&self.end)
    }

    /// Returns the number of elements.
    ///
    /// Constant time for random-access ranges, a full walk otherwise.
    pub fn size(&self) -> usize {
        cursor::distance(&self.begin, &self.end)
    }

    /// Returns the first element, if any.
    pub fn front(&self) -> Option<C::Item> {
        (!self.is_empty()).then(|| self.begin.deref())
    }

    /// Returns the traversal category of the cursors.
    pub const fn category(&self) -> Category {
        C::CATEGORY
    }
}

impl<C: Bidirectional> Range<C> {
    /// Returns the last element, if any.
    pub fn back(&self) -> Option<C::Item> {
        if self.is_empty() {
            return None;
        }
        let mut last = self.end.clone();
        last.dec();
        Some(last.deref())
    }
}

impl<C: RandomAccess> Range<C> {
    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn at(&self, index: usize) -> Option<C::Item> {
        if index >= self.size() {
            return None;
        }
        let mut position = self.begin.clone();
        position.advance(cursor::to_offset(index));
        Some(position.deref())
    }
}

impl<C: Cursor> Iterator for Range<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.begin.is_equal(&self.end) {
            return None;
        }
        let item = self.begin.deref();
        self.begin.inc();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.begin.distance_hint(&self.end) {
            Some(length) => (length, Some(length)),
            None => (0, None),
        }
    }

    fn nth(&mut self, count: usize) -> Option<C::Item> {
        let end = self.end.clone();
        self.begin.advance_bounded(count, &end);
        self.next()
    }
}

impl<C: Bidirectional> DoubleEndedIterator for Range<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.begin.is_equal(&self.end) {
            return None;
        }
        self.end.dec();
        Some(self.end.deref())
    }
}

impl<C: RandomAccess> ExactSizeIterator for Range<C> {}

impl<C: Cursor> FusedIterator for Range<C> {}

/// Moves the begin of `range` forward by up to `count` elements.
///
/// Returns how many elements were skipped, which is less than `count` only
/// when the range ran out.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
/// use lazyrange::range::advance_bounded;
///
/// let mut range = iota(0, 5);
/// assert_eq!(advance_bounded(&mut range, 3), 3);
/// assert_eq!(advance_bounded(&mut range, 3), 2);
/// assert!(range.is_empty());
/// ```
pub fn advance_bounded<C: Cursor>(range: &mut Range<C>, count: usize) -> usize {
    range.begin.advance_bounded(count, &range.end)
}

/// Moves the begin of `range` past the leading elements satisfying
/// `predicate`, returning how many were skipped.
pub fn advance_while<C, P>(range: &mut Range<C>, mut predicate: P) -> usize
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    let mut skipped = 0;
    while !range.begin.is_equal(&range.end) && predicate(range.begin.deref()) {
        range.begin.inc();
        skipped += 1;
    }
    skipped
}

// =============================================================================
// IntoRange
// =============================================================================

/// Conversion into a [`Range`].
///
/// Every argument documented as "a range" accepts any `IntoRange` value.
pub trait IntoRange {
    /// The cursor type of the produced range.
    type Cursor: crate::cursor::Cursor;

    /// Performs the conversion.
    fn into_range(self) -> Range<Self::Cursor>;
}

/// The cursor type of a range-like value.
pub type CursorOf<R> = <R as IntoRange>::Cursor;

/// The element type of a range-like value.
pub type ItemOf<R> = <CursorOf<R> as Cursor>::Item;

impl<C: Cursor> IntoRange for Range<C> {
    type Cursor = C;

    fn into_range(self) -> Range<C> {
        self
    }
}

impl<C: Cursor> IntoRange for &Range<C> {
    type Cursor = C;

    fn into_range(self) -> Range<C> {
        self.clone()
    }
}

impl<'a, T> IntoRange for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_range(self) -> Range<SliceCursor<'a, T>> {
        Range::new(SliceCursor::at(self, 0), SliceCursor::at(self, self.len()))
    }
}

impl<'a, T, const N: usize> IntoRange for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_range(self) -> Range<SliceCursor<'a, T>> {
        self.as_slice().into_range()
    }
}

impl<'a, T> IntoRange for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_range(self) -> Range<SliceCursor<'a, T>> {
        self.as_slice().into_range()
    }
}

/// Taking a vector by value moves it into shared storage owned by the
/// cursors, and elements are yielded by clone.
impl<T: Clone> IntoRange for Vec<T> {
    type Cursor = OwningCursor<T>;

    fn into_range(self) -> Range<OwningCursor<T>> {
        crate::seq::owned(self)
    }
}

impl<T: Numeric> IntoRange for std::ops::Range<T> {
    type Cursor = NumericCursor<T>;

    fn into_range(self) -> Range<NumericCursor<T>> {
        iota(self.start, self.end)
    }
}
