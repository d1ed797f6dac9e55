//! `generate`: a sequence produced by repeatedly calling a function.

use crate::cursor::Cursor;
use crate::range::Range;

use super::past_end;

/// A cursor over the values returned by a generator until it yields `None`.
///
/// Each position holds the value produced for it and a running index. The
/// end cursor carries no generator at all and sits at the sentinel index
/// [`usize::MAX`]; a cursor whose generator has returned `None` moves to the
/// same sentinel, which is how the two compare equal.
///
/// Cloning a cursor clones the generator along with any state it captured,
/// so each copy continues the sequence independently.
#[derive(Debug, Clone)]
pub struct GenerateCursor<F, T> {
    generator: Option<F>,
    current: Option<T>,
    index: usize,
}

const EXHAUSTED: usize = usize::MAX;

impl<F, T> GenerateCursor<F, T>
where
    F: FnMut() -> Option<T>,
{
    fn pull(&mut self) {
        self.current = self.generator.as_mut().and_then(|generator| generator());
        if self.current.is_none() {
            self.index = EXHAUSTED;
        }
    }
}

impl<F, T> Cursor for GenerateCursor<F, T>
where
    F: FnMut() -> Option<T> + Clone,
    T: Clone,
{
    type Item = T;

    fn deref(&self) -> T {
        match &self.current {
            Some(value) => value.clone(),
            None => past_end("generate"),
        }
    }

    fn inc(&mut self) {
        self.index = self.index.saturating_add(1);
        self.pull();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Builds a range from a generator that returns `None` when it is done.
///
/// The generator is called once when the range is built and once per
/// increment afterwards.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// // 2, then repeatedly square while the value stays at or below 100.
/// let mut next = 2_u32;
/// let squares = generate(move || {
///     let value = next;
///     next = value * value;
///     (value <= 100).then_some(value)
/// });
/// assert_eq!(squares.collect::<Vec<_>>(), vec![2, 4, 16]);
/// ```
pub fn generate<F, T>(generator: F) -> Range<GenerateCursor<F, T>>
where
    F: FnMut() -> Option<T> + Clone,
    T: Clone,
{
    let mut first = GenerateCursor {
        generator: Some(generator),
        current: None,
        index: 0,
    };
    first.pull();
    let last = GenerateCursor {
        generator: None,
        current: None,
        index: EXHAUSTED,
    };
    Range::new(first, last)
}
