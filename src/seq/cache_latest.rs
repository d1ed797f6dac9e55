//! `cache_latest`: remember the most recently dereferenced element.

use std::cell::OnceCell;

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that computes its element on first dereference and reuses it
/// until the cursor moves.
///
/// Placed after an expensive [`map`](super::map), it makes repeated
/// dereferences of the same position run the function once.
///
/// The cache is filled through a shared reference, so this cursor is not
/// [`Sync`]. Each thread should own its own copy of the pipeline.
#[derive(Debug)]
pub struct CacheLatestCursor<C: Cursor> {
    base: C,
    cache: OnceCell<C::Item>,
}

impl<C> Clone for CacheLatestCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<C> CacheLatestCursor<C>
where
    C: Cursor,
{
    fn invalidate(&mut self) {
        self.cache.take();
    }
}

impl<C> Cursor for CacheLatestCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY;

    fn deref(&self) -> C::Item {
        self.cache.get_or_init(|| self.base.deref()).clone()
    }

    fn inc(&mut self) {
        self.base.inc();
        self.invalidate();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        self.invalidate();
        self.base.advance_bounded(count, &end.base)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.base.distance_hint(&end.base)
    }
}

impl<C> Bidirectional for CacheLatestCursor<C>
where
    C: Bidirectional,
    C::Item: Clone,
{
    fn dec(&mut self) {
        self.base.dec();
        self.invalidate();
    }
}

impl<C> RandomAccess for CacheLatestCursor<C>
where
    C: RandomAccess,
    C::Item: Clone,
{
    fn advance(&mut self, offset: isize) {
        self.base.advance(offset);
        self.invalidate();
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// The stage built by [`cache_latest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheLatestStage;

impl<C> Stage<Range<C>> for CacheLatestStage
where
    C: Cursor,
    C::Item: Clone,
{
    type Output = Range<CacheLatestCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(
            CacheLatestCursor {
                base: begin,
                cache: OnceCell::new(),
            },
            CacheLatestCursor {
                base: end,
                cache: OnceCell::new(),
            },
        )
    }
}

/// Caches the element at the current position until the cursor moves.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use lazyrange::prelude::*;
///
/// let calls = Cell::new(0);
/// let data = [1, 2, 3];
/// let doubled = &data
///     | map(|value: &i32| {
///         calls.set(calls.get() + 1);
///         value * 2
///     })
///     | cache_latest()
///     | filter(|value: i32| value > 2);
/// assert_eq!(doubled.collect::<Vec<_>>(), vec![4, 6]);
/// ```
pub const fn cache_latest() -> Pipe<CacheLatestStage> {
    Pipe::new(CacheLatestStage)
}
