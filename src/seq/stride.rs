//! `stride`: every `step`-th element.

use tracing::warn;

use crate::cursor::Cursor;
use crate::pipe::{Pipe, Stage};
use crate::range::Range;

/// A cursor that moves `step` positions per increment, stopping at the end
/// of the wrapped range instead of running past it.
#[derive(Debug, Clone)]
pub struct StrideCursor<C> {
    base: C,
    end: C,
    step: usize,
}

impl<C: Cursor> Cursor for StrideCursor<C> {
    type Item = C::Item;

    fn deref(&self) -> C::Item {
        self.base.deref()
    }

    fn inc(&mut self) {
        self.base.advance_bounded(self.step, &self.end);
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.base.is_equal(&other.base)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.base
            .distance_hint(&end.base)
            .map(|length| length.div_ceil(self.step))
    }
}

/// The stage built by [`stride`].
#[derive(Debug, Clone, Copy)]
pub struct StrideStage {
    step: usize,
}

impl<C: Cursor> Stage<Range<C>> for StrideStage {
    type Output = Range<StrideCursor<C>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let (begin, end) = input.into_parts();
        Range::new(
            StrideCursor {
                base: begin,
                end: end.clone(),
                step: self.step,
            },
            StrideCursor {
                base: end.clone(),
                end,
                step: self.step,
            },
        )
    }
}

/// Yields the first element and then every `step`-th one after it.
///
/// A `step` of zero would never advance; it is treated as one.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let every_third: Vec<i32> = ((0..10) | stride(3)).collect();
/// assert_eq!(every_third, vec![0, 3, 6, 9]);
/// ```
pub fn stride(step: usize) -> Pipe<StrideStage> {
    let step = if step == 0 {
        warn!("stride step of zero would never advance; using a step of one");
        1
    } else {
        step
    };
    Pipe::new(StrideStage { step })
}
