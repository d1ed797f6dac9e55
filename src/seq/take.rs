//! `take`: the first `n` elements.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess, advance_linear};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor limited to a number of increments.
///
/// Over random-access cursors the end position is computed when the range
/// is built, `remaining` is `None` on both ends, and the cursor keeps random
/// access. Over weaker cursors the begin cursor counts down from `n` and the
/// end cursor is a sentinel with `remaining == None`.
///
/// A cursor whose count reached zero equals the sentinel and any other
/// exhausted cursor; every other comparison falls back to the wrapped
/// positions, which also stops the range at the end of a shorter input.
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    base: C,
    remaining: Option<usize>,
}

impl<C> TakeCursor<C> {
    /// Returns the wrapped cursor.
    pub const fn base(&self) -> &C {
        &self.base
    }

    /// Returns how many increments are left, or `None` for unbounded.
    pub const fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    const CATEGORY: Category = if C::CATEGORY.is_random_access() {
        Category::RandomAccess
    } else {
        Category::Forward
    };

    fn deref(&self) -> C::Item {
        self.base.deref()
    }

    fn inc(&mut self) {
        self.base.inc();
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
    }

    fn is_equal(&self, other: &Self) -> bool {
        match (self.remaining, other.remaining) {
            (Some(0), None | Some(0)) | (None, Some(0)) => true,
            _ => self.base.is_equal(&other.base),
        }
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        if self.remaining.is_none() && end.remaining.is_none() {
            self.base.advance_bounded(count, &end.base)
        } else {
            advance_linear(self, count, end)
        }
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        match (self.remaining, end.remaining) {
            (None, None) => self.base.distance_hint(&end.base),
            (Some(remaining), None) => self
                .base
                .distance_hint(&end.base)
                .map(|length| length.min(remaining)),
            _ => None,
        }
    }
}

impl<C: RandomAccess> Bidirectional for TakeCursor<C> {
    fn dec(&mut self) {
        self.base.dec();
        if let Some(remaining) = &mut self.remaining {
            *remaining += 1;
        }
    }

    fn retreat(&mut self, count: usize) {
        self.base.retreat(count);
        if let Some(remaining) = &mut self.remaining {
            *remaining += count;
        }
    }
}

impl<C: RandomAccess> RandomAccess for TakeCursor<C> {
    fn advance(&mut self, offset: isize) {
        self.base.advance(offset);
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_add_signed(-offset);
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

/// The stage built by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct TakeStage {
    count: usize,
}

impl<C: Cursor> Stage<Range<C>> for TakeStage {
    type Output = Range<TakeCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        if C::CATEGORY.is_random_access() {
            let mut last = begin.clone();
            last.advance_bounded(self.count, &end);
            Range::new(
                TakeCursor {
                    base: begin,
                    remaining: None,
                },
                TakeCursor {
                    base: last,
                    remaining: None,
                },
            )
        } else {
            Range::new(
                TakeCursor {
                    base: begin,
                    remaining: Some(self.count),
                },
                TakeCursor {
                    base: end,
                    remaining: None,
                },
            )
        }
    }
}

/// Yields at most the first `count` elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!((&data | take(2)).collect::<Vec<_>>(), vec![&1, &2]);
/// assert_eq!((&data | take(10)).count(), 4);
/// ```
pub const fn take(count: usize) -> Pipe<TakeStage> {
    Pipe::new(TakeStage { count })
}
