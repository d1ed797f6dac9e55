//! Narrowing a range from one or both ends.
//!
//! Every operation here is written once, against the front of a range, as a
//! [`Narrow`] implementation. The "last" forms run the same operation on the
//! reversed view and reverse the result back; the "both ends" forms run it
//! on the front and then on the back. Narrowing is eager and keeps the
//! cursor type of its input.
//!
//! | front          | back                 | both ends    |
//! |----------------|----------------------|--------------|
//! | [`drop`]       | [`drop_last`]        | [`trim`]     |
//! | [`drop_while`] | [`drop_last_while`]  | [`trim_while`] |
//! | [`drop_until`] | [`drop_last_until`]  | [`trim_until`] |
//! |                | [`take_last`]        |              |
//! |                | [`take_last_while`]  |              |
//! |                | [`take_last_until`]  |              |

use crate::cursor::{Bidirectional, Cursor};
use crate::pipe::{Pipe, Stage};
use crate::range::{Range, advance_bounded, advance_while};

use super::reverse::{reversed, unreverse};

/// An eager, front-anchored narrowing of a range.
pub trait Narrow<T> {
    /// Narrows `range` from its front.
    fn narrow<C: Cursor<Item = T>>(&self, range: Range<C>) -> Range<C>;
}

/// Skips a fixed number of leading elements.
#[derive(Debug, Clone, Copy)]
pub struct Skip(usize);

impl<T> Narrow<T> for Skip {
    fn narrow<C: Cursor<Item = T>>(&self, mut range: Range<C>) -> Range<C> {
        advance_bounded(&mut range, self.0);
        range
    }
}

/// Keeps a fixed number of leading elements.
#[derive(Debug, Clone, Copy)]
pub struct Keep(usize);

impl<T> Narrow<T> for Keep {
    fn narrow<C: Cursor<Item = T>>(&self, range: Range<C>) -> Range<C> {
        let mut rest = range.clone();
        advance_bounded(&mut rest, self.0);
        Range::new(range.into_parts().0, rest.into_parts().0)
    }
}

/// Skips the leading elements whose predicate result equals `skip_on`.
#[derive(Debug, Clone, Copy)]
pub struct SkipWhile<P> {
    predicate: P,
    skip_on: bool,
}

impl<T, P: Fn(T) -> bool> Narrow<T> for SkipWhile<P> {
    fn narrow<C: Cursor<Item = T>>(&self, mut range: Range<C>) -> Range<C> {
        advance_while(&mut range, |item| (self.predicate)(item) == self.skip_on);
        range
    }
}

/// Keeps the leading elements whose predicate result equals `keep_on`.
#[derive(Debug, Clone, Copy)]
pub struct KeepWhile<P> {
    predicate: P,
    keep_on: bool,
}

impl<T, P: Fn(T) -> bool> Narrow<T> for KeepWhile<P> {
    fn narrow<C: Cursor<Item = T>>(&self, range: Range<C>) -> Range<C> {
        let mut rest = range.clone();
        advance_while(&mut rest, |item| (self.predicate)(item) == self.keep_on);
        Range::new(range.into_parts().0, rest.into_parts().0)
    }
}

/// Applies a narrowing at the back of a bidirectional range.
pub fn narrow_back<C, N>(operation: &N, range: Range<C>) -> Range<C>
where
    C: Bidirectional,
    N: Narrow<C::Item>,
{
    unreverse(operation.narrow(reversed(range)))
}

/// Applies a narrowing at both ends of a bidirectional range.
pub fn narrow_both<C, N>(operation: &N, range: Range<C>) -> Range<C>
where
    C: Bidirectional,
    N: Narrow<C::Item>,
{
    narrow_back(operation, operation.narrow(range))
}

// =============================================================================
// Stages
// =============================================================================

/// Runs a [`Narrow`] at the front of the input.
#[derive(Debug, Clone, Copy)]
pub struct FromFront<N>(N);

impl<C, N> Stage<Range<C>> for FromFront<N>
where
    C: Cursor,
    N: Narrow<C::Item>,
{
    type Output = Range<C>;

    fn apply(self, input: Range<C>) -> Range<C> {
        self.0.narrow(input)
    }
}

/// Runs a [`Narrow`] at the back of the input.
#[derive(Debug, Clone, Copy)]
pub struct FromBack<N>(N);

impl<C, N> Stage<Range<C>> for FromBack<N>
where
    C: Bidirectional,
    N: Narrow<C::Item>,
{
    type Output = Range<C>;

    fn apply(self, input: Range<C>) -> Range<C> {
        narrow_back(&self.0, input)
    }
}

/// Runs a [`Narrow`] at both ends of the input.
#[derive(Debug, Clone, Copy)]
pub struct FromBothEnds<N>(N);

impl<C, N> Stage<Range<C>> for FromBothEnds<N>
where
    C: Bidirectional,
    N: Narrow<C::Item>,
{
    type Output = Range<C>;

    fn apply(self, input: Range<C>) -> Range<C> {
        narrow_both(&self.0, input)
    }
}

/// Skips the first `count` elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!((&data | drop(1)).collect::<Vec<_>>(), vec![&2, &3, &4]);
/// assert!((&data | drop(9)).is_empty());
/// ```
pub const fn drop(count: usize) -> Pipe<FromFront<Skip>> {
    Pipe::new(FromFront(Skip(count)))
}

/// Skips the leading elements that satisfy `predicate`.
pub const fn drop_while<P>(predicate: P) -> Pipe<FromFront<SkipWhile<P>>> {
    Pipe::new(FromFront(SkipWhile { predicate, skip_on: true }))
}

/// Skips the leading elements up to the first one that satisfies
/// `predicate`.
pub const fn drop_until<P>(predicate: P) -> Pipe<FromFront<SkipWhile<P>>> {
    Pipe::new(FromFront(SkipWhile { predicate, skip_on: false }))
}

/// Keeps the last `count` elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!((&data | take_last(2)).collect::<Vec<_>>(), vec![&3, &4]);
/// ```
pub const fn take_last(count: usize) -> Pipe<FromBack<Keep>> {
    Pipe::new(FromBack(Keep(count)))
}

/// Drops the last `count` elements.
pub const fn drop_last(count: usize) -> Pipe<FromBack<Skip>> {
    Pipe::new(FromBack(Skip(count)))
}

/// Keeps the trailing elements that satisfy `predicate`.
pub const fn take_last_while<P>(predicate: P) -> Pipe<FromBack<KeepWhile<P>>> {
    Pipe::new(FromBack(KeepWhile { predicate, keep_on: true }))
}

/// Keeps the trailing elements after the last one that satisfies
/// `predicate`.
pub const fn take_last_until<P>(predicate: P) -> Pipe<FromBack<KeepWhile<P>>> {
    Pipe::new(FromBack(KeepWhile { predicate, keep_on: false }))
}

/// Drops the trailing elements that satisfy `predicate`.
pub const fn drop_last_while<P>(predicate: P) -> Pipe<FromBack<SkipWhile<P>>> {
    Pipe::new(FromBack(SkipWhile { predicate, skip_on: true }))
}

/// Drops the trailing elements after the last one that satisfies
/// `predicate`.
pub const fn drop_last_until<P>(predicate: P) -> Pipe<FromBack<SkipWhile<P>>> {
    Pipe::new(FromBack(SkipWhile { predicate, skip_on: false }))
}

/// Drops `count` elements from each end.
pub const fn trim(count: usize) -> Pipe<FromBothEnds<Skip>> {
    Pipe::new(FromBothEnds(Skip(count)))
}

/// Drops the elements that satisfy `predicate` from both ends.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let text = "  padded  ";
/// let bytes = text.as_bytes();
/// let trimmed: Vec<u8> = (bytes | trim_while(|byte: &u8| *byte == b' ')).copied().collect();
/// assert_eq!(trimmed, b"padded");
/// ```
pub const fn trim_while<P>(predicate: P) -> Pipe<FromBothEnds<SkipWhile<P>>> {
    Pipe::new(FromBothEnds(SkipWhile { predicate, skip_on: true }))
}

/// Drops elements from both ends until one satisfies `predicate`.
pub const fn trim_until<P>(predicate: P) -> Pipe<FromBothEnds<SkipWhile<P>>> {
    Pipe::new(FromBothEnds(SkipWhile { predicate, skip_on: false }))
}
