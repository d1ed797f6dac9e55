//! `flat_map` and `flatten`: splice inner ranges into one sequence.

use crate::cursor::Cursor;
use crate::pipe::{Pipe, Stage};
use crate::range::{IntoRange, Range};

use super::past_end;

/// A cursor over the concatenation of the ranges produced by a function.
///
/// The cursor holds the outer position and, while not at the end, a
/// non-empty inner range. Outer elements whose inner range is empty are
/// skipped. The cursor is forward only.
///
/// Two cursors are equal when their outer positions are equal and, if both
/// hold an inner range, their inner positions are equal too. A cursor
/// without an inner range has finished, so it only equals another cursor at
/// the same outer position.
pub struct FlatMapCursor<C, F, R: IntoRange> {
    outer: C,
    outer_end: C,
    function: F,
    inner: Option<Range<R::Cursor>>,
}

impl<C: Clone, F: Clone, R: IntoRange> Clone for FlatMapCursor<C, F, R> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            function: self.function.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<C, F, R> FlatMapCursor<C, F, R>
where
    C: Cursor,
    F: Fn(C::Item) -> R + Clone,
    R: IntoRange,
{
    fn load(&mut self) {
        while !self.outer.is_equal(&self.outer_end) {
            let inner = (self.function)(self.outer.deref()).into_range();
            if !inner.is_empty() {
                self.inner = Some(inner);
                return;
            }
            self.outer.inc();
        }
        self.inner = None;
    }
}

impl<C, F, R> Cursor for FlatMapCursor<C, F, R>
where
    C: Cursor,
    F: Fn(C::Item) -> R + Clone,
    R: IntoRange,
{
    type Item = <R::Cursor as Cursor>::Item;

    fn deref(&self) -> Self::Item {
        match &self.inner {
            Some(inner) => inner.begin().deref(),
            None => past_end("flat_map"),
        }
    }

    fn inc(&mut self) {
        if let Some(inner) = &mut self.inner {
            inner.begin_mut().inc();
            if !inner.is_empty() {
                return;
            }
        }
        self.inner = None;
        self.outer.inc();
        self.load();
    }

    fn is_equal(&self, other: &Self) -> bool {
        if !self.outer.is_equal(&other.outer) {
            return false;
        }
        match (&self.inner, &other.inner) {
            (Some(left), Some(right)) => left.begin().is_equal(right.begin()),
            (None, None) => true,
            _ => false,
        }
    }
}

/// The stage built by [`flat_map`].
#[derive(Debug, Clone, Copy)]
pub struct FlatMapStage<F> {
    function: F,
}

impl<C, F, R> Stage<Range<C>> for FlatMapStage<F>
where
    C: Cursor,
    F: Fn(C::Item) -> R + Clone,
    R: IntoRange,
{
    type Output = Range<FlatMapCursor<C, F, R>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        let mut first = FlatMapCursor {
            outer: begin,
            outer_end: end.clone(),
            function: self.function.clone(),
            inner: None,
        };
        first.load();
        let last = FlatMapCursor {
            outer: end.clone(),
            outer_end: end,
            function: self.function,
            inner: None,
        };
        Range::new(first, last)
    }
}

/// Maps every element to a range and yields the elements of those ranges in
/// order.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3];
/// let result: Vec<i32> = (&data | flat_map(|value: &i32| vec![*value; *value as usize])).collect();
/// assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub const fn flat_map<F>(function: F) -> Pipe<FlatMapStage<F>> {
    Pipe::new(FlatMapStage { function })
}

/// The stage built by [`flatten`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenStage;

/// The function used by [`flatten`] to pass each inner range through.
pub type Passthrough<T> = fn(T) -> T;

const fn passthrough<T>(value: T) -> T {
    value
}

impl<C> Stage<Range<C>> for FlattenStage
where
    C: Cursor,
    C::Item: IntoRange,
{
    type Output = Range<FlatMapCursor<C, Passthrough<C::Item>, C::Item>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let function: Passthrough<C::Item> = passthrough;
        FlatMapStage { function }.apply(input)
    }
}

/// Concatenates a range of ranges; `flat_map` with the identity function.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// let flat: Vec<&i32> = (&nested | flatten()).collect();
/// assert_eq!(flat, vec![&1, &2, &3]);
/// ```
pub const fn flatten() -> Pipe<FlattenStage> {
    Pipe::new(FlattenStage)
}

/// Alias of [`flat_map`].
pub const fn transform_join<F>(function: F) -> Pipe<FlatMapStage<F>> {
    flat_map(function)
}

/// Alias of [`flatten`].
pub const fn join() -> Pipe<FlattenStage> {
    flatten()
}
