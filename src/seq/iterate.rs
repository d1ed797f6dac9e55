//! `iterate`: expose cursors instead of elements.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor whose elements are the positions of another range.
///
/// Useful with algorithms that need to report where something is rather
/// than what it is.
#[derive(Debug, Clone)]
pub struct IterateCursor<C> {
    base: C,
}

impl<C: Cursor> Cursor for IterateCursor<C> {
    type Item = C;

    const CATEGORY: Category = C::CATEGORY;

    fn deref(&self) -> C {
        self.base.clone()
    }

    fn inc(&mut self) {
        self.base.inc();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        self.base.advance_bounded(count, &end.base)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.base.distance_hint(&end.base)
    }
}

impl<C: Bidirectional> Bidirectional for IterateCursor<C> {
    fn dec(&mut self) {
        self.base.dec();
    }

    fn retreat(&mut self, count: usize) {
        self.base.retreat(count);
    }
}

impl<C: RandomAccess> RandomAccess for IterateCursor<C> {
    fn advance(&mut self, offset: isize) {
        self.base.advance(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// The stage built by [`iterate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IterateStage;

impl<C: Cursor> Stage<Range<C>> for IterateStage {
    type Output = Range<IterateCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(IterateCursor { base: begin }, IterateCursor { base: end })
    }
}

/// Yields the cursors of a range in order.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = ['a', 'b', 'c'];
/// let indices: Vec<usize> = (&data | iterate()).map(|cursor| cursor.index()).collect();
/// assert_eq!(indices, vec![0, 1, 2]);
/// ```
pub const fn iterate() -> Pipe<IterateStage> {
    Pipe::new(IterateStage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn iterated_cursors_dereference_to_elements() {
        let data = [3, 1, 4];
        let values: Vec<i32> = (&data | iterate()).map(|cursor| *cursor.deref()).collect();
        assert_eq!(values, vec![3, 1, 4]);
    }

    #[rstest]
    fn iterate_keeps_category() {
        let data = [1];
        assert_eq!((&data | iterate()).category(), Category::RandomAccess);
    }
}
