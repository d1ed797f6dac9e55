//! `chain`: one range followed by another.

use crate::cursor::{Bidirectional, Category, Cursor};
use crate::pipe::{Pipe, Stage};
use crate::range::{IntoRange, Range};

/// A cursor over the elements of a first range followed by a second one.
///
/// The cursor walks the first range until it reaches that range's end and
/// then continues with the second. Random access is not preserved; when both
/// inputs are bidirectional the chain is too.
#[derive(Debug, Clone)]
pub struct ChainCursor<A, B> {
    first: A,
    first_end: A,
    second: B,
    second_begin: B,
}

impl<A, B> ChainCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    fn in_first(&self) -> bool {
        !self.first.is_equal(&self.first_end)
    }
}

impl<A, B> Cursor for ChainCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    const CATEGORY: Category = A::CATEGORY.min(B::CATEGORY).at_most(Category::Bidirectional);

    fn deref(&self) -> A::Item {
        if self.in_first() {
            self.first.deref()
        } else {
            self.second.deref()
        }
    }

    fn inc(&mut self) {
        if self.in_first() {
            self.first.inc();
        } else {
            self.second.inc();
        }
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.first.is_equal(&other.first) && self.second.is_equal(&other.second)
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        let mut moved = self.first.advance_bounded(count, &self.first_end);
        if moved < count {
            moved += self.second.advance_bounded(count - moved, &end.second);
        }
        moved
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        let first = self.first.distance_hint(&self.first_end)?;
        let second = self.second.distance_hint(&end.second)?;
        first.checked_add(second)
    }
}

impl<A, B> Bidirectional for ChainCursor<A, B>
where
    A: Bidirectional,
    B: Bidirectional<Item = A::Item>,
{
    fn dec(&mut self) {
        if self.second.is_equal(&self.second_begin) {
            self.first.dec();
        } else {
            self.second.dec();
        }
    }
}

/// Chains two ranges with the same element type.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let head = [1, 2];
/// let tail = vec![3];
/// let all: Vec<&i32> = chain(&head, &tail).collect();
/// assert_eq!(all, vec![&1, &2, &3]);
/// ```
pub fn chain<L, R>(first: L, second: R) -> Range<ChainCursor<L::Cursor, R::Cursor>>
where
    L: IntoRange,
    R: IntoRange,
    R::Cursor: Cursor<Item = <L::Cursor as Cursor>::Item>,
{
    let (first_begin, first_end) = first.into_range().into_parts();
    let (second_begin, second_end) = second.into_range().into_parts();
    Range::new(
        ChainCursor {
            first: first_begin,
            first_end: first_end.clone(),
            second: second_begin.clone(),
            second_begin: second_begin.clone(),
        },
        ChainCursor {
            first: first_end.clone(),
            first_end,
            second: second_end,
            second_begin,
        },
    )
}

/// The stage built by [`chain_with`].
#[derive(Debug, Clone)]
pub struct ChainStage<R> {
    second: R,
}

impl<C, R> Stage<Range<C>> for ChainStage<R>
where
    C: Cursor,
    R: IntoRange,
    R::Cursor: Cursor<Item = C::Item>,
{
    type Output = Range<ChainCursor<C, R::Cursor>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        chain(input, self.second)
    }
}

/// Appends `second` to the piped range.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2];
/// let more = [3, 4];
/// let all: Vec<i32> = (&data | chain_with(&more) | map(|value: &i32| *value)).collect();
/// assert_eq!(all, vec![1, 2, 3, 4]);
/// ```
pub const fn chain_with<R>(second: R) -> Pipe<ChainStage<R>> {
    Pipe::new(ChainStage { second })
}

/// Chains any number of ranges with the same element type.
///
/// `chain!(a, b, c)` is `chain(chain(a, b), c)`; a single argument is just
/// converted into a range.
///
/// # Examples
///
/// ```
/// use lazyrange::chain;
///
/// let all: Vec<i32> = chain!(vec![1], vec![2, 3], Vec::new(), vec![4]).collect();
/// assert_eq!(all, vec![1, 2, 3, 4]);
/// ```
#[macro_export]
macro_rules! chain {
    ($single:expr $(,)?) => {
        $crate::range::IntoRange::into_range($single)
    };

    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain!($crate::seq::chain($first, $second) $(, $rest)*)
    };
}
