//! Cursor capability tiers.
//!
//! A cursor is a position inside a sequence. Every cursor can be
//! dereferenced, moved forward and compared for equality; richer cursors
//! also move backward or jump by an arbitrary offset. The three tiers are
//! expressed as a trait hierarchy:
//!
//! - [`Cursor`]: dereference, increment and equality (forward traversal)
//! - [`Bidirectional`]: adds decrement
//! - [`RandomAccess`]: adds signed advance, distance and ordering
//!
//! Each adaptor implements the tiers its underlying cursors allow, so a
//! capability is a static property of the concrete type. Algorithms that
//! need a particular tier ask for it in their bounds, and misuse is a
//! compile error:
//!
//! ```compile_fail
//! use lazyrange::prelude::*;
//!
//! // `generate` only supports forward traversal, so it cannot be reversed.
//! let mut count = 0;
//! let values = generate(move || {
//!     count += 1;
//!     (count < 3).then_some(count)
//! });
//! let _ = values | reverse();
//! ```
//!
//! Cursors that only know how to seek by an offset can be written against
//! the smaller [`Seek`] interface; [`Seeker`] derives the full random-access
//! contract from it.

mod facade;
mod slice;

pub use facade::{Facade, Seek, Seeker};
pub use slice::{SliceCursor, SlicePosition};

/// The traversal capability of a cursor.
///
/// Categories are ordered from weakest to strongest, so combining the
/// categories of several cursors is a matter of taking the minimum.
///
/// # Examples
///
/// ```rust
/// use lazyrange::cursor::Category;
///
/// assert!(Category::Forward < Category::RandomAccess);
/// assert_eq!(
///     Category::RandomAccess.at_most(Category::Bidirectional),
///     Category::Bidirectional
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    /// Equality and increment.
    #[default]
    Forward,
    /// Forward plus decrement.
    Bidirectional,
    /// Bidirectional plus advance, distance and ordering.
    RandomAccess,
}

impl Category {
    const fn rank(self) -> u8 {
        match self {
            Self::Forward => 0,
            Self::Bidirectional => 1,
            Self::RandomAccess => 2,
        }
    }

    /// Returns the weaker of two categories.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if self.rank() <= other.rank() { self } else { other }
    }

    /// Caps this category at `limit`.
    #[must_use]
    pub const fn at_most(self, limit: Self) -> Self {
        self.min(limit)
    }

    /// Returns `true` for [`Category::Bidirectional`] and stronger.
    pub const fn is_bidirectional(self) -> bool {
        self.rank() >= Self::Bidirectional.rank()
    }

    /// Returns `true` for [`Category::RandomAccess`].
    pub const fn is_random_access(self) -> bool {
        self.rank() >= Self::RandomAccess.rank()
    }
}

// =============================================================================
// Capability tiers
// =============================================================================

/// A forward cursor.
///
/// Implementors supply the three primitives `deref`, `inc` and `is_equal`.
/// The provided [`advance_bounded`](Cursor::advance_bounded) and
/// [`distance_hint`](Cursor::distance_hint) fall back to stepping one
/// element at a time; random-access cursors override them with constant-time
/// versions.
///
/// `deref` returns the element by value. Leaf cursors over borrowed data
/// return references, adaptors return whatever their function computes.
/// Dereferencing a cursor that sits at the end of its range is a contract
/// violation and panics.
pub trait Cursor: Clone {
    /// The element produced by dereferencing.
    type Item;

    /// The strongest tier this cursor implements.
    const CATEGORY: Category = Category::Forward;

    /// Produces the element at the current position.
    fn deref(&self) -> Self::Item;

    /// Moves to the next position.
    fn inc(&mut self);

    /// Returns `true` if both cursors denote the same position.
    fn is_equal(&self, other: &Self) -> bool;

    /// Moves forward by up to `count` positions without passing `end`.
    ///
    /// Returns the number of positions actually moved.
    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        advance_linear(self, count, end)
    }

    /// Returns the number of positions between `self` and `end` when it can
    /// be computed without traversal.
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        let _ = end;
        None
    }
}

/// A cursor that can also move backward.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional cursor",
    label = "this cursor can only move forward"
)]
pub trait Bidirectional: Cursor {
    /// Moves to the previous position.
    fn dec(&mut self);

    /// Moves backward by `count` positions.
    fn retreat(&mut self, count: usize) {
        for _ in 0..count {
            self.dec();
        }
    }
}

/// A cursor that can jump by an arbitrary offset and measure distances.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a random-access cursor",
    label = "this cursor cannot jump by an offset"
)]
pub trait RandomAccess: Bidirectional {
    /// Moves by `offset` positions (negative values move backward).
    fn advance(&mut self, offset: isize);

    /// Returns the signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;

    /// Returns `true` if `self` comes strictly before `other`.
    fn is_less(&self, other: &Self) -> bool {
        self.distance_to(other) > 0
    }
}

/// Steps `cursor` forward one position at a time, at most `count` times and
/// never past `end`.
///
/// This is the fallback behind [`Cursor::advance_bounded`]; overrides use it
/// when a faster path is not available.
pub fn advance_linear<C: Cursor>(cursor: &mut C, count: usize, end: &C) -> usize {
    let mut moved = 0;
    while moved < count && !cursor.is_equal(end) {
        cursor.inc();
        moved += 1;
    }
    moved
}

/// Counts the positions from `begin` to `end`, using the distance hint
/// when one is available.
pub fn distance<C: Cursor>(begin: &C, end: &C) -> usize {
    begin.distance_hint(end).unwrap_or_else(|| {
        let mut cursor = begin.clone();
        advance_linear(&mut cursor, usize::MAX, end)
    })
}

// =============================================================================
// Offset arithmetic shared by the leaf cursors
// =============================================================================

pub(crate) fn to_offset(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX)
}

pub(crate) fn signed_distance(from: usize, to: usize) -> isize {
    if to >= from {
        to_offset(to - from)
    } else {
        -to_offset(from - to)
    }
}

pub(crate) const fn offset_index(index: usize, offset: isize) -> usize {
    index.saturating_add_signed(offset)
}
