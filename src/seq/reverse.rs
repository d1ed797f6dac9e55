//! `reverse`: walk a bidirectional range back to front.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess, advance_linear};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that moves its wrapped cursor in the opposite direction.
///
/// The reversed cursor sits one position after the element it denotes, so
/// the reverse of `[begin, end)` is `[reverse(end), reverse(begin))`.
#[derive(Debug, Clone, Copy)]
pub struct ReverseCursor<C> {
    base: C,
}

impl<C> ReverseCursor<C> {
    /// Wraps a cursor.
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the wrapped cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Bidirectional> Cursor for ReverseCursor<C> {
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY;

    fn deref(&self) -> C::Item {
        let mut previous = self.base.clone();
        previous.dec();
        previous.deref()
    }

    fn inc(&mut self) {
        self.base.dec();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        match self.distance_hint(end) {
            Some(available) => {
                let step = count.min(available);
                self.base.retreat(step);
                step
            }
            None => advance_linear(self, count, end),
        }
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        end.base.distance_hint(&self.base)
    }
}

impl<C: Bidirectional> Bidirectional for ReverseCursor<C> {
    fn dec(&mut self) {
        self.base.inc();
    }
}

impl<C: RandomAccess> RandomAccess for ReverseCursor<C> {
    fn advance(&mut self, offset: isize) {
        self.base.advance(-offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}

/// Returns the reversed view of a bidirectional range.
pub fn reversed<C: Bidirectional>(range: Range<C>) -> Range<ReverseCursor<C>> {
    let (begin, end) = range.into_parts();
    Range::new(ReverseCursor::new(end), ReverseCursor::new(begin))
}

/// Undoes [`reversed`], recovering a range over the original cursors.
pub fn unreverse<C>(range: Range<ReverseCursor<C>>) -> Range<C> {
    let (begin, end) = range.into_parts();
    Range::new(end.into_base(), begin.into_base())
}

/// The stage built by [`reverse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStage;

impl<C: Bidirectional> Stage<Range<C>> for ReverseStage {
    type Output = Range<ReverseCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        reversed(input)
    }
}

/// Reverses a bidirectional range.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3];
/// let backwards: Vec<&i32> = (&data | reverse()).collect();
/// assert_eq!(backwards, vec![&3, &2, &1]);
/// ```
pub const fn reverse() -> Pipe<ReverseStage> {
    Pipe::new(ReverseStage)
}
