//! `map`: apply a function to every element.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that applies a function on dereference.
///
/// The function runs every time the cursor is dereferenced; results are not
/// cached (see [`cache_latest`](super::cache_latest)). The cursor keeps the
/// full capability of the cursor it wraps.
#[derive(Debug, Clone)]
pub struct MapCursor<C, F> {
    base: C,
    function: F,
}

impl<C, F> MapCursor<C, F> {
    pub(crate) const fn new(base: C, function: F) -> Self {
        Self { base, function }
    }

    /// Returns the wrapped cursor.
    pub const fn base(&self) -> &C {
        &self.base
    }
}

impl<C, F, B> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> B + Clone,
{
    type Item = B;

    const CATEGORY: Category = C::CATEGORY;

    fn deref(&self) -> B {
        (self.function)(self.base.deref())
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

impl<C, F, B> Bidirectional for MapCursor<C, F>
where
    C: Bidirectional,
    F: Fn(C::Item) -> B + Clone,
{
    fn dec(&mut self) {
        self.base.dec();
    }

    fn retreat(&mut self, count: usize) {
        self.base.retreat(count);
    }
}

impl<C, F, B> RandomAccess for MapCursor<C, F>
where
    C: RandomAccess,
    F: Fn(C::Item) -> B + Clone,
{
    fn advance(&mut self, offset: isize) {
        self.base.advance(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// The stage built by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct MapStage<F> {
    function: F,
}

impl<F> MapStage<F> {
    pub(crate) const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<C, F, B> Stage<Range<C>> for MapStage<F>
where
    C: Cursor,
    F: Fn(C::Item) -> B + Clone,
{
    type Output = Range<MapCursor<C, F>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(
            MapCursor::new(begin, self.function.clone()),
            MapCursor::new(end, self.function),
        )
    }
}

/// Lazily applies `function` to every element.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let words = ["a", "bb", "ccc"];
/// let lengths: Vec<usize> = (&words | map(|word: &&str| word.len())).collect();
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub const fn map<F>(function: F) -> Pipe<MapStage<F>> {
    Pipe::new(MapStage::new(function))
}

/// Alias of [`map`].
pub const fn transform<F>(function: F) -> Pipe<MapStage<F>> {
    map(function)
}
