//! `filter_map`: map to an optional and keep the present values.

use crate::cursor::Cursor;
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

use super::past_end;

/// A cursor that runs a function returning [`Option`] and skips `None`.
///
/// The value produced for the current position is cached inside the cursor,
/// so the function runs once per position rather than once per dereference.
/// The cursor is forward only.
#[derive(Debug, Clone)]
pub struct FilterMapCursor<C, F, T> {
    current: C,
    end: C,
    function: F,
    value: Option<T>,
}

impl<C, F, T> FilterMapCursor<C, F, T>
where
    C: Cursor,
    F: Fn(C::Item) -> Option<T> + Clone,
{
    fn settle(&mut self) {
        while !self.current.is_equal(&self.end) {
            if let Some(value) = (self.function)(self.current.deref()) {
                self.value = Some(value);
                return;
            }
            self.current.inc();
        }
        self.value = None;
    }
}

impl<C, F, T> Cursor for FilterMapCursor<C, F, T>
where
    C: Cursor,
    F: Fn(C::Item) -> Option<T> + Clone,
    T: Clone,
{
    type Item = T;

    fn deref(&self) -> T {
        match &self.value {
            Some(value) => value.clone(),
            None => past_end("filter_map"),
        }
    }

    fn inc(&mut self) {
        self.current.inc();
        self.settle();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.current.is_equal(&other.current)
    }
}

/// The stage built by [`filter_map`].
#[derive(Debug, Clone, Copy)]
pub struct FilterMapStage<F> {
    function: F,
}

impl<C, F, T> Stage<Range<C>> for FilterMapStage<F>
where
    C: Cursor,
    F: Fn(C::Item) -> Option<T> + Clone,
    T: Clone,
{
    type Output = Range<FilterMapCursor<C, F, T>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        let mut first = FilterMapCursor {
            current: begin,
            end: end.clone(),
            function: self.function.clone(),
            value: None,
        };
        first.settle();
        let last = FilterMapCursor {
            current: end.clone(),
            end,
            function: self.function,
            value: None,
        };
        Range::new(first, last)
    }
}

/// Applies `function` to every element and yields the `Some` results.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let words = ["1", "x", "3"];
/// let numbers: Vec<i32> = (&words | filter_map(|word: &&str| word.parse().ok())).collect();
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub const fn filter_map<F>(function: F) -> Pipe<FilterMapStage<F>> {
    Pipe::new(FilterMapStage { function })
}

/// Alias of [`filter_map`].
pub const fn transform_maybe<F>(function: F) -> Pipe<FilterMapStage<F>> {
    filter_map(function)
}
