//! `boxed`: erase the cursor type behind a pointer.

use std::any::Any;
use std::fmt;

use crate::cursor::Cursor;
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// The object-safe part of [`Cursor`] used by [`BoxedCursor`].
trait DynCursor<T> {
    fn current(&self) -> T;
    fn step(&mut self);
    fn same_position(&self, other: &dyn DynCursor<T>) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn clone_box(&self) -> Box<dyn DynCursor<T>>;
}

impl<C> DynCursor<C::Item> for C
where
    C: Cursor + 'static,
{
    fn current(&self) -> C::Item {
        self.deref()
    }

    fn step(&mut self) {
        self.inc();
    }

    fn same_position(&self, other: &dyn DynCursor<C::Item>) -> bool {
        other
            .as_any()
            .downcast_ref::<C>()
            .is_some_and(|other| self.is_equal(other))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn DynCursor<C::Item>> {
        Box::new(self.clone())
    }
}

/// A forward cursor of any concrete type yielding `T`.
///
/// Boxing gives every pipeline with the same element type the same cursor
/// type, at the price of dynamic dispatch and of traversal capability: a
/// boxed cursor is always forward only.
pub struct BoxedCursor<T> {
    inner: Box<dyn DynCursor<T>>,
}

impl<T> Clone for BoxedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> fmt::Debug for BoxedCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BoxedCursor")
    }
}

impl<T> Cursor for BoxedCursor<T> {
    type Item = T;

    fn deref(&self) -> T {
        self.inner.current()
    }

    fn inc(&mut self) {
        self.inner.step();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.inner.same_position(other.inner.as_ref())
    }
}

/// A range with its cursor type erased.
pub type Iterable<T> = Range<BoxedCursor<T>>;

/// The stage built by [`boxed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxedStage;

impl<C> Stage<Range<C>> for BoxedStage
where
    C: Cursor + 'static,
{
    type Output = Iterable<C::Item>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(
            BoxedCursor { inner: Box::new(begin) },
            BoxedCursor { inner: Box::new(end) },
        )
    }
}

/// Erases the cursor type of a pipeline.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// fn evens(limit: i32, squared: bool) -> Iterable<i32> {
///     let evens = iota(0, limit) | filter(|value: i32| value % 2 == 0);
///     if squared {
///         evens | map(|value: i32| value * value) | boxed()
///     } else {
///         evens | boxed()
///     }
/// }
///
/// assert_eq!(evens(6, false).collect::<Vec<_>>(), vec![0, 2, 4]);
/// assert_eq!(evens(6, true).collect::<Vec<_>>(), vec![0, 4, 16]);
/// ```
pub const fn boxed() -> Pipe<BoxedStage> {
    Pipe::new(BoxedStage)
}
