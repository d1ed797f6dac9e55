//! `enumerate`: pair every element with its index.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor yielding `(index, element)` pairs.
///
/// Over random-access cursors the end cursor carries the index one past the
/// last element, so the enumeration stays random access and can be walked
/// backwards. Over weaker cursors it is forward only.
#[derive(Debug, Clone)]
pub struct EnumerateCursor<C> {
    base: C,
    index: usize,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    const CATEGORY: Category = if C::CATEGORY.is_random_access() {
        Category::RandomAccess
    } else {
        Category::Forward
    };

    fn deref(&self) -> Self::Item {
        (self.index, self.base.deref())
    }

    fn inc(&mut self) {
        self.base.inc();
        self.index += 1;
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        let moved = self.base.advance_bounded(count, &end.base);
        self.index += moved;
        moved
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.base.distance_hint(&end.base)
    }
}

impl<C: RandomAccess> Bidirectional for EnumerateCursor<C> {
    fn dec(&mut self) {
        self.base.dec();
        self.index = self.index.saturating_sub(1);
    }
}

impl<C: RandomAccess> RandomAccess for EnumerateCursor<C> {
    fn advance(&mut self, offset: isize) {
        self.base.advance(offset);
        self.index = self.index.saturating_add_signed(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// The stage built by [`enumerate`] and [`enumerate_from`].
#[derive(Debug, Clone, Copy)]
pub struct EnumerateStage {
    start: usize,
}

impl<C: Cursor> Stage<Range<C>> for EnumerateStage {
    type Output = Range<EnumerateCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        let length = begin.distance_hint(&end).unwrap_or(0);
        Range::new(
            EnumerateCursor {
                base: begin,
                index: self.start,
            },
            EnumerateCursor {
                base: end,
                index: self.start.saturating_add(length),
            },
        )
    }
}

/// Pairs every element with its position, counting from zero.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let letters = ["a", "b", "c"];
/// let pairs: Vec<(usize, &&str)> = (&letters | enumerate()).collect();
/// assert_eq!(pairs, vec![(0, &"a"), (1, &"b"), (2, &"c")]);
/// ```
pub const fn enumerate() -> Pipe<EnumerateStage> {
    enumerate_from(0)
}

/// Pairs every element with its position, counting from `start`.
pub const fn enumerate_from(start: usize) -> Pipe<EnumerateStage> {
    Pipe::new(EnumerateStage { start })
}
