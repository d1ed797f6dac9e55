//! Pipeline stages and the `|` compositor.
//!
//! A [`Stage`] is a reusable transformation of one value into another. Every
//! adaptor constructor in [`seq`](crate::seq) and [`opt`](crate::opt)
//! returns its stage wrapped in [`Pipe`], which gives it two operators:
//!
//! - `input | stage` applies the stage to a range-like value or an
//!   [`Option`].
//! - `stage_a | stage_b` composes two stages into a new one that computes
//!   `stage_b(stage_a(x))`.
//!
//! Composition is associative and lazy: composing range adaptors only builds
//! cursor types, and nothing is pulled until a terminal consumer runs.
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::prelude::*;
//!
//! let evens_times_ten = filter(|value: &i32| value % 2 == 0) | map(|value: &i32| value * 10);
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let first_two: Vec<i32> = (&data | evens_times_ten.clone() | take(2)).collect();
//! assert_eq!(first_two, vec![20, 40]);
//!
//! let other = vec![8, 9];
//! assert_eq!((&other | evens_times_ten).collect::<Vec<_>>(), vec![80]);
//! ```

mod pipe_macro;
mod utils;

pub use utils::{Func, Identity, Tee, func, identity, tee};

use std::ops::BitOr;

use crate::cursor::{Cursor, SliceCursor};
use crate::range::{IntoRange, Range};
use crate::seq::{Numeric, NumericCursor, OwningCursor};

/// A transformation of an `In` value.
///
/// Stages are consumed by [`apply`](Stage::apply); a stage that should be
/// applied more than once is cloned.
pub trait Stage<In> {
    /// The result of applying the stage.
    type Output;

    /// Applies the stage to `input`.
    fn apply(self, input: In) -> Self::Output;
}

/// A stage that supports the `|` operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipe<S>(S);

impl<S> Pipe<S> {
    /// Wraps a stage.
    pub const fn new(stage: S) -> Self {
        Self(stage)
    }

    /// Unwraps the stage.
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Applies the stage directly, without the `|` operator.
    pub fn apply<In>(self, input: In) -> S::Output
    where
        S: Stage<In>,
    {
        self.0.apply(input)
    }

    /// Converts `range` into a [`Range`] and applies the stage to it.
    pub fn over<R>(self, range: R) -> S::Output
    where
        R: IntoRange,
        S: Stage<Range<R::Cursor>>,
    {
        self.0.apply(range.into_range())
    }
}

impl<In, S: Stage<In>> Stage<In> for Pipe<S> {
    type Output = S::Output;

    fn apply(self, input: In) -> S::Output {
        self.0.apply(input)
    }
}

/// Two stages run one after the other.
#[derive(Debug, Clone, Copy)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Stage<In> for Composed<A, B>
where
    A: Stage<In>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    fn apply(self, input: In) -> B::Output {
        self.second.apply(self.first.apply(input))
    }
}

impl<A, B> BitOr<Pipe<B>> for Pipe<A> {
    type Output = Pipe<Composed<A, B>>;

    fn bitor(self, second: Pipe<B>) -> Self::Output {
        Pipe(Composed {
            first: self.0,
            second: second.0,
        })
    }
}

// =============================================================================
// Applying a stage with `input | stage`
// =============================================================================

impl<C: Cursor, S: Stage<Range<C>>> BitOr<Pipe<S>> for Range<C> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self)
    }
}

impl<C: Cursor, S: Stage<Range<C>>> BitOr<Pipe<S>> for &Range<C> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.clone())
    }
}

impl<'a, T, S: Stage<Range<SliceCursor<'a, T>>>> BitOr<Pipe<S>> for &'a [T] {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.into_range())
    }
}

impl<'a, T, const N: usize, S: Stage<Range<SliceCursor<'a, T>>>> BitOr<Pipe<S>> for &'a [T; N] {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.into_range())
    }
}

impl<'a, T, S: Stage<Range<SliceCursor<'a, T>>>> BitOr<Pipe<S>> for &'a Vec<T> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.into_range())
    }
}

impl<T: Clone, S: Stage<Range<OwningCursor<T>>>> BitOr<Pipe<S>> for Vec<T> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.into_range())
    }
}

impl<T: Numeric, S: Stage<Range<NumericCursor<T>>>> BitOr<Pipe<S>> for std::ops::Range<T> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self.into_range())
    }
}

impl<T, S: Stage<Option<T>>> BitOr<Pipe<S>> for Option<T> {
    type Output = S::Output;

    fn bitor(self, stage: Pipe<S>) -> S::Output {
        stage.0.apply(self)
    }
}
