//! Terminal stages: consume a range inside a pipeline.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// The stage built by [`for_each`].
#[derive(Debug, Clone, Copy)]
pub struct ForEachStage<F> {
    function: F,
}

impl<C, F> Stage<Range<C>> for ForEachStage<F>
where
    C: Cursor,
    F: FnMut(C::Item),
{
    type Output = ();

    fn apply(self, input: Range<C>) {
        input.for_each(self.function);
    }
}

/// Calls `function` on every element, front to back.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let mut total = 0;
/// (1..5) | for_each(|value: i32| total += value);
/// assert_eq!(total, 10);
/// ```
pub const fn for_each<F>(function: F) -> Pipe<ForEachStage<F>> {
    Pipe::new(ForEachStage { function })
}

/// The stage built by [`copy`].
#[derive(Debug, Clone)]
pub struct CopyStage<E> {
    sink: E,
}

impl<C, E> Stage<Range<C>> for CopyStage<E>
where
    C: Cursor,
    E: Extend<C::Item>,
{
    type Output = E;

    fn apply(mut self, input: Range<C>) -> E {
        self.sink.extend(input);
        self.sink
    }
}

/// Appends every element to `sink` and returns it.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let collected = (1..4) | map(|value: i32| value * 2) | copy(vec![0]);
/// assert_eq!(collected, vec![0, 2, 4, 6]);
/// ```
pub const fn copy<E>(sink: E) -> Pipe<CopyStage<E>> {
    Pipe::new(CopyStage { sink })
}

/// The stage built by [`front`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontStage;

impl<C: Cursor> Stage<Range<C>> for FrontStage {
    type Output = Result<C::Item>;

    fn apply(self, input: Range<C>) -> Result<C::Item> {
        input.front().ok_or_else(|| {
            tracing::debug!("front requested on an empty range");
            Error::EmptyRange { operation: "front" }
        })
    }
}

/// Returns the first element, or [`Error::EmptyRange`] when there is none.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
/// use lazyrange::Error;
///
/// assert_eq!((3..9) | front(), Ok(3));
/// assert_eq!(
///     (3..3) | front(),
///     Err(Error::EmptyRange { operation: "front" })
/// );
/// ```
pub const fn front() -> Pipe<FrontStage> {
    Pipe::new(FrontStage)
}
