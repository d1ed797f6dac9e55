//! `take_while` and `take_until`: the leading run of accepted elements.

use crate::cursor::Cursor;
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that ends at the first element rejected by a predicate.
///
/// The end of the range is a sentinel. A live cursor equals the sentinel
/// once it reaches the end of the wrapped range or sits on a rejected
/// element, so the predicate runs during comparison rather than during
/// increment.
#[derive(Debug, Clone)]
pub struct TakeWhileCursor<C, P> {
    base: C,
    predicate: P,
    keep: bool,
    sentinel: bool,
}

impl<C, P> TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    fn stops_at(&self, sentinel: &Self) -> bool {
        self.base.is_equal(&sentinel.base) || (self.predicate)(self.base.deref()) != self.keep
    }
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    type Item = C::Item;

    fn deref(&self) -> C::Item {
        self.base.deref()
    }

    fn inc(&mut self) {
        self.base.inc();
    }

    fn is_equal(&self, other: &Self) -> bool {
        match (self.sentinel, other.sentinel) {
            (false, true) => self.stops_at(other),
            (true, false) => other.stops_at(self),
            _ => self.base.is_equal(&other.base),
        }
    }
}

/// The stage built by [`take_while`] and [`take_until`].
#[derive(Debug, Clone, Copy)]
pub struct TakeWhileStage<P> {
    predicate: P,
    keep: bool,
}

impl<C, P> Stage<Range<C>> for TakeWhileStage<P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool + Clone,
{
    type Output = Range<TakeWhileCursor<C, P>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(
            TakeWhileCursor {
                base: begin,
                predicate: self.predicate.clone(),
                keep: self.keep,
                sentinel: false,
            },
            TakeWhileCursor {
                base: end,
                predicate: self.predicate,
                keep: self.keep,
                sentinel: true,
            },
        )
    }
}

/// Yields elements while `predicate` holds and stops at the first one that
/// fails it.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let small: Vec<i32> = ((1..100) | take_while(|value: i32| value * value < 20)).collect();
/// assert_eq!(small, vec![1, 2, 3, 4]);
/// ```
pub const fn take_while<P>(predicate: P) -> Pipe<TakeWhileStage<P>> {
    Pipe::new(TakeWhileStage { predicate, keep: true })
}

/// Yields elements until `predicate` first holds.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let words = ["a", "b", "", "c"];
/// let head: Vec<&&str> = (&words | take_until(|word: &&str| word.is_empty())).collect();
/// assert_eq!(head, vec![&"a", &"b"]);
/// ```
pub const fn take_until<P>(predicate: P) -> Pipe<TakeWhileStage<P>> {
    Pipe::new(TakeWhileStage { predicate, keep: false })
}
