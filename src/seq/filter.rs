//! `filter` and `drop_if`: keep the elements that pass a predicate.

use crate::cursor::{Bidirectional, Category, Cursor};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that skips elements rejected by a predicate.
///
/// The begin cursor is moved onto the first accepted element when the range
/// is built, so dereferencing never runs the predicate. Filtering drops
/// random access: the cursor is at most [`Bidirectional`].
#[derive(Debug, Clone)]
pub struct FilterCursor<C, P> {
    current: C,
    end: C,
    predicate: P,
    keep: bool,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    fn accepts(&self) -> bool {
        (self.predicate)(self.current.deref()) == self.keep
    }

    fn settle(&mut self) {
        while !self.current.is_equal(&self.end) && !self.accepts() {
            self.current.inc();
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.at_most(Category::Bidirectional);

    fn deref(&self) -> C::Item {
        self.current.deref()
    }

    fn inc(&mut self) {
        self.current.inc();
        self.settle();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.current.is_equal(&other.current)
    }
}

impl<C, P> Bidirectional for FilterCursor<C, P>
where
    C: Bidirectional,
    P: Fn(C::Item) -> bool + Clone,
{
    /// Moves back to the previous accepted element.
    ///
    /// There must be one: decrementing the begin cursor is a contract
    /// violation.
    fn dec(&mut self) {
        loop {
            self.current.dec();
            if self.accepts() {
                return;
            }
        }
    }
}

/// The stage built by [`filter`] and [`drop_if`].
#[derive(Debug, Clone, Copy)]
pub struct FilterStage<P> {
    predicate: P,
    keep: bool,
}

impl<C, P> Stage<Range<C>> for FilterStage<P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    type Output = Range<FilterCursor<C, P>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        let mut first = FilterCursor {
            current: begin,
            end: end.clone(),
            predicate: self.predicate.clone(),
            keep: self.keep,
        };
        first.settle();
        let last = FilterCursor {
            current: end.clone(),
            end,
            predicate: self.predicate,
            keep: self.keep,
        };
        Range::new(first, last)
    }
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let odd: Vec<i32> = ((1..8) | filter(|value: i32| value % 2 == 1)).collect();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// ```
pub const fn filter<P>(predicate: P) -> Pipe<FilterStage<P>> {
    Pipe::new(FilterStage { predicate, keep: true })
}

/// Alias of [`filter`].
pub const fn take_if<P>(predicate: P) -> Pipe<FilterStage<P>> {
    filter(predicate)
}

/// Drops the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// let kept: Vec<&i32> = (&data | drop_if(|value: &i32| *value > 2)).collect();
/// assert_eq!(kept, vec![&1, &2]);
/// ```
pub const fn drop_if<P>(predicate: P) -> Pipe<FilterStage<P>> {
    Pipe::new(FilterStage { predicate, keep: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none_match(vec![1, 3, 5], vec![])]
    #[case::all_match(vec![2, 4], vec![2, 4])]
    #[case::leading_rejects(vec![1, 1, 2, 3, 4], vec![2, 4])]
    #[case::empty(vec![], vec![])]
    fn filter_keeps_even(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let result: Vec<i32> = (input | filter(|value: i32| value % 2 == 0)).collect();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn filter_is_bidirectional_over_slices() {
        let data = [1, 2, 3, 4, 5, 6];
        let evens = &data | filter(|value: &i32| value % 2 == 0);
        assert_eq!(evens.category(), Category::Bidirectional);
        assert_eq!(evens.rev().collect::<Vec<_>>(), vec![&6, &4, &2]);
    }

    #[rstest]
    fn filter_predicate_not_called_on_dereference() {
        let calls = std::cell::Cell::new(0);
        let data = [1, 2];
        let filtered = &data | filter(|value: &i32| {
            calls.set(calls.get() + 1);
            *value > 1
        });
        let after_build = calls.get();
        let begin = filtered.begin().clone();
        assert_eq!(*begin.deref(), 2);
        assert_eq!(calls.get(), after_build);
    }

    #[rstest]
    fn drop_if_is_negated_filter() {
        let data = [1, 2, 3, 4, 5];
        let kept: Vec<i32> = (&data | drop_if(|value: &i32| value % 2 == 0)).copied().collect();
        assert_eq!(kept, vec![1, 3, 5]);
    }
}
