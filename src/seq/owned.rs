//! `owned`: ranges that keep their elements alive.

use std::fmt;
use std::sync::Arc;

use crate::cursor::{Seek, Seeker, offset_index, signed_distance};
use crate::range::Range;

/// A position inside shared, immutable storage.
///
/// Every cursor of an owning range holds a handle to the same storage, so
/// the range can outlive the vector it was built from. Two positions compare
/// by index only; comparing positions from different storage is a contract
/// violation.
pub struct OwningPosition<T> {
    items: Arc<[T]>,
    index: usize,
}

impl<T> Clone for OwningPosition<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: self.index,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OwningPosition<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OwningPosition")
            .field("index", &self.index)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> OwningPosition<T> {
    /// Returns the index of this position.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the shared storage.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Seek for OwningPosition<T> {
    type Item = T;

    fn deref(&self) -> T {
        self.items[self.index].clone()
    }

    fn advance(&mut self, offset: isize) {
        self.index = offset_index(self.index, offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        signed_distance(self.index, other.index)
    }
}

/// A random-access cursor that owns its elements and yields clones.
pub type OwningCursor<T> = Seeker<OwningPosition<T>>;

/// Moves `items` into shared storage and returns a range over it.
///
/// Elements are yielded by clone. Wrap large elements in [`Arc`] or
/// [`Rc`](std::rc::Rc) when cloning them is expensive.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// fn names() -> Iterable<String> {
///     let local = vec![String::from("ada"), String::from("grace")];
///     owned(local) | map(|name: String| name.to_uppercase()) | boxed()
/// }
///
/// assert_eq!(names().collect::<Vec<_>>(), vec!["ADA", "GRACE"]);
/// ```
pub fn owned<T: Clone>(items: impl Into<Arc<[T]>>) -> Range<OwningCursor<T>> {
    let items: Arc<[T]> = items.into();
    let len = items.len();
    tracing::debug!(len, "moving elements into owning range");
    Range::new(
        Seeker::new(OwningPosition {
            items: Arc::clone(&items),
            index: 0,
        }),
        Seeker::new(OwningPosition { items, index: len }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use rstest::rstest;

    #[rstest]
    fn owned_range_outlives_source() {
        let range = {
            let source = vec![1, 2, 3];
            owned(source)
        };
        assert_eq!(range.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn owned_cursors_share_storage() {
        let range = owned(vec![String::from("x")]);
        let (begin, end) = range.into_parts();
        assert!(std::ptr::eq(begin.core().items(), end.core().items()));
        assert_eq!(end.core().index(), 1);
        assert_eq!(begin.deref(), "x");
    }

    #[rstest]
    fn owned_accepts_boxed_slices() {
        let boxed: Box<[u8]> = Box::new([7, 8]);
        assert_eq!(owned(boxed).rev().collect::<Vec<_>>(), vec![8, 7]);
    }
}
