//! Return policies: the shapes a search result can take.
//!
//! Every search in this module produces a [`Found`] triple `(found, begin,
//! end)`. A policy turns that triple into what the caller wants, without
//! walking the range again:
//!
//! | Policy | Output | When nothing was found |
//! |--------|--------|------------------------|
//! | [`ReturnFound`] | `found` | `end` |
//! | [`ReturnFoundEnd`] | `[found, end)` | empty range at `end` |
//! | [`ReturnBeginFound`] | `[begin, found)` | the whole range |
//! | [`ReturnFoundNext`] | `[found, found + 1)` | empty range at `end` |
//! | [`ReturnBeginNext`] | `[begin, found + 1)` | empty range at `end` |
//! | [`ReturnNextEnd`] | `[found + 1, end)` | empty range at `end` |
//! | [`ReturnRef`] | `Ok(element)` | `Err(Error::NotFound)` |
//! | [`ReturnOptRef`] | `Some(element)` | `None` |
//! | [`ReturnOptFound`] | `Some(found)` | `None` |
//! | [`ReturnBoth`] | `([begin, found), [found, end))` | `(whole, empty)` |

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::range::{IntoRange, Range};

/// The raw result of a search: a position inside `[begin, end)`.
///
/// `found == end` means nothing was found.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Found<C> {
    found: C,
    begin: C,
    end: C,
}

impl<C> Found<C> {
    /// Creates a search result.
    pub const fn new(found: C, begin: C, end: C) -> Self {
        Self { found, begin, end }
    }

    /// Returns the found position.
    pub const fn found(&self) -> &C {
        &self.found
    }

    /// Returns the begin of the searched range.
    pub const fn begin(&self) -> &C {
        &self.begin
    }

    /// Returns the end of the searched range.
    pub const fn end(&self) -> &C {
        &self.end
    }

    /// Splits the result into `(found, begin, end)`.
    pub fn into_parts(self) -> (C, C, C) {
        (self.found, self.begin, self.end)
    }

    /// Shapes the result with `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyrange::algorithm::{self, ReturnBoth, ReturnOptRef};
    ///
    /// let data = [1, 2, 5, 6];
    /// assert_eq!(algorithm::find(&data, &5).returning(ReturnOptRef), Some(&5));
    ///
    /// let (head, tail) = algorithm::find(&data, &5).returning(ReturnBoth);
    /// assert_eq!(head.copied().collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(tail.copied().collect::<Vec<_>>(), vec![5, 6]);
    /// ```
    pub fn returning<P>(self, policy: P) -> P::Output<C>
    where
        C: Cursor,
        P: ReturnPolicy,
    {
        policy.shape(self.found, self.begin, self.end)
    }
}

impl<C: Cursor> Found<C> {
    /// Returns `true` unless the search reached `end`.
    pub fn is_found(&self) -> bool {
        !self.found.is_equal(&self.end)
    }
}

/// A found result used as a range is shaped with [`DefaultPolicy`].
impl<C: Cursor> IntoRange for Found<C> {
    type Cursor = C;

    fn into_range(self) -> Range<C> {
        self.returning(DefaultPolicy::default())
    }
}

/// A stateless strategy for shaping a [`Found`] triple.
///
/// Implementations must be total functions of the triple and must not
/// traverse the range beyond one step past `found`.
pub trait ReturnPolicy: Copy {
    /// The shaped result for a cursor type.
    type Output<C: Cursor>;

    /// Shapes `(found, begin, end)`.
    fn shape<C: Cursor>(self, found: C, begin: C, end: C) -> Self::Output<C>;
}

/// The policy used when a result is consumed as a range.
pub type DefaultPolicy = ReturnFoundEnd;

fn successor<C: Cursor>(mut cursor: C) -> C {
    cursor.inc();
    cursor
}

/// The found position itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnFound;

impl ReturnPolicy for ReturnFound {
    type Output<C: Cursor> = C;

    fn shape<C: Cursor>(self, found: C, _begin: C, _end: C) -> C {
        found
    }
}

/// The range from the found position to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnFoundEnd;

impl ReturnPolicy for ReturnFoundEnd {
    type Output<C: Cursor> = Range<C>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Range<C> {
        Range::new(found, end)
    }
}

/// The range before the found position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnBeginFound;

impl ReturnPolicy for ReturnBeginFound {
    type Output<C: Cursor> = Range<C>;

    fn shape<C: Cursor>(self, found: C, begin: C, _end: C) -> Range<C> {
        Range::new(begin, found)
    }
}

/// The single found element as a range.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnFoundNext;

impl ReturnPolicy for ReturnFoundNext {
    type Output<C: Cursor> = Range<C>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Range<C> {
        if found.is_equal(&end) {
            Range::new(found, end)
        } else {
            let next = successor(found.clone());
            Range::new(found, next)
        }
    }
}

/// The range from the begin up to and including the found element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnBeginNext;

impl ReturnPolicy for ReturnBeginNext {
    type Output<C: Cursor> = Range<C>;

    fn shape<C: Cursor>(self, found: C, begin: C, end: C) -> Range<C> {
        if found.is_equal(&end) {
            Range::new(found, end)
        } else {
            Range::new(begin, successor(found))
        }
    }
}

/// The range after the found element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnNextEnd;

impl ReturnPolicy for ReturnNextEnd {
    type Output<C: Cursor> = Range<C>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Range<C> {
        if found.is_equal(&end) {
            Range::new(found, end)
        } else {
            Range::new(successor(found), end)
        }
    }
}

/// The found element, or [`Error::NotFound`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnRef;

impl ReturnPolicy for ReturnRef {
    type Output<C: Cursor> = Result<C::Item>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Result<C::Item> {
        if found.is_equal(&end) {
            tracing::debug!("search reached the end of the range");
            return Err(Error::NotFound);
        }
        Ok(found.deref())
    }
}

/// The found element, or `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOptRef;

impl ReturnPolicy for ReturnOptRef {
    type Output<C: Cursor> = Option<C::Item>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Option<C::Item> {
        (!found.is_equal(&end)).then(|| found.deref())
    }
}

/// The found position, or `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOptFound;

impl ReturnPolicy for ReturnOptFound {
    type Output<C: Cursor> = Option<C>;

    fn shape<C: Cursor>(self, found: C, _begin: C, end: C) -> Option<C> {
        (!found.is_equal(&end)).then_some(found)
    }
}

/// Both halves around the found position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnBoth;

impl ReturnPolicy for ReturnBoth {
    type Output<C: Cursor> = (Range<C>, Range<C>);

    fn shape<C: Cursor>(self, found: C, begin: C, end: C) -> (Range<C>, Range<C>) {
        (Range::new(begin, found.clone()), Range::new(found, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;
    use rstest::rstest;

    static DATA: [i32; 4] = [10, 20, 30, 40];

    fn found_at(index: usize) -> Found<SliceCursor<'static, i32>> {
        Found::new(
            SliceCursor::at(&DATA, index),
            SliceCursor::at(&DATA, 0),
            SliceCursor::at(&DATA, DATA.len()),
        )
    }

    fn values(range: Range<SliceCursor<'static, i32>>) -> Vec<i32> {
        range.copied().collect()
    }

    #[rstest]
    #[case::middle(2, vec![30, 40])]
    #[case::missing(4, vec![])]
    fn found_end(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(values(found_at(index).returning(ReturnFoundEnd)), expected);
    }

    #[rstest]
    #[case::middle(2, vec![10, 20])]
    #[case::missing(4, vec![10, 20, 30, 40])]
    fn begin_found(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(values(found_at(index).returning(ReturnBeginFound)), expected);
    }

    #[rstest]
    #[case::middle(1, vec![20])]
    #[case::missing(4, vec![])]
    fn found_next(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(values(found_at(index).returning(ReturnFoundNext)), expected);
    }

    #[rstest]
    #[case::middle(1, vec![10, 20])]
    #[case::missing(4, vec![])]
    fn begin_next(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(values(found_at(index).returning(ReturnBeginNext)), expected);
    }

    #[rstest]
    #[case::middle(1, vec![30, 40])]
    #[case::last(3, vec![])]
    #[case::missing(4, vec![])]
    fn next_end(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(values(found_at(index).returning(ReturnNextEnd)), expected);
    }

    #[rstest]
    fn reference_policies() {
        assert_eq!(found_at(0).returning(ReturnRef), Ok(&10));
        assert_eq!(found_at(4).returning(ReturnRef), Err(Error::NotFound));
        assert_eq!(found_at(3).returning(ReturnOptRef), Some(&40));
        assert_eq!(found_at(4).returning(ReturnOptRef), None);
    }

    #[rstest]
    fn position_policies() {
        assert_eq!(found_at(2).returning(ReturnFound).index(), 2);
        assert_eq!(found_at(2).returning(ReturnOptFound).map(|cursor| cursor.index()), Some(2));
        assert!(found_at(4).returning(ReturnOptFound).is_none());
    }

    #[rstest]
    fn both_splits_at_found() {
        let (head, tail) = found_at(1).returning(ReturnBoth);
        assert_eq!(values(head), vec![10]);
        assert_eq!(values(tail), vec![20, 30, 40]);
    }

    #[rstest]
    fn found_as_range_uses_default_policy() {
        assert_eq!(values(found_at(1).into_range()), vec![20, 30, 40]);
        assert!(found_at(1).is_found());
        assert!(!found_at(4).is_found());
    }
}
