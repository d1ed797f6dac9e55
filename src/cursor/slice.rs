//! The random-access cursor over borrowed slices.

use super::{Seek, Seeker, offset_index, signed_distance};

/// A position inside a borrowed slice.
///
/// Dereferencing yields `&'a T`, so elements reached through a slice cursor
/// are real references into the caller's data.
#[derive(Debug)]
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

// Manual impls: the position is copyable even when `T` is not.
impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<'a, T> SlicePosition<'a, T> {
    /// Returns the index of this position inside the slice.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the whole underlying slice.
    pub const fn slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T> Seek for SlicePosition<'a, T> {
    type Item = &'a T;

    fn deref(&self) -> &'a T {
        &self.slice[self.index]
    }

    fn advance(&mut self, offset: isize) {
        self.index = offset_index(self.index, offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        signed_distance(self.index, other.index)
    }
}

/// A random-access cursor over `&'a [T]`.
pub type SliceCursor<'a, T> = Seeker<SlicePosition<'a, T>>;

impl<'a, T> Seeker<SlicePosition<'a, T>> {
    /// Creates a cursor at `index` inside `slice`.
    ///
    /// `index` may equal `slice.len()`, which is the past-the-end position.
    pub const fn at(slice: &'a [T], index: usize) -> Self {
        Self::new(SlicePosition { slice, index })
    }

    /// Returns the index of the cursor inside its slice.
    pub const fn index(&self) -> usize {
        self.core().index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Bidirectional, Cursor, RandomAccess};
    use rstest::rstest;

    #[rstest]
    fn slice_cursor_yields_references() {
        let data = vec![String::from("a"), String::from("b")];
        let cursor = SliceCursor::at(&data, 1);
        assert_eq!(cursor.deref(), "b");
        assert!(std::ptr::eq(cursor.deref(), &data[1]));
    }

    #[rstest]
    fn slice_cursor_moves_in_both_directions() {
        let data = [10, 20, 30, 40];
        let mut cursor = SliceCursor::at(&data, 0);
        cursor.advance(3);
        assert_eq!(*cursor.deref(), 40);
        cursor.dec();
        assert_eq!(*cursor.deref(), 30);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.distance_to(&SliceCursor::at(&data, 4)), 2);
    }

    #[rstest]
    fn slice_cursor_is_copy_for_non_copy_elements() {
        let data = vec![String::from("x")];
        let cursor = SliceCursor::at(&data, 0);
        let copy = cursor;
        assert!(cursor.is_equal(&copy));
    }
}
