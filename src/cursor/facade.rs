//! Synthesizing the full cursor contract from a minimal core.
//!
//! Two helpers live here:
//!
//! - [`Seeker`] turns a [`Seek`] core (dereference, signed advance and
//!   distance) into a random-access [`Cursor`]. Increment is `advance(1)`,
//!   decrement is `advance(-1)`, equality is "distance is zero" and ordering
//!   is "distance is positive".
//! - [`Facade`] wraps any cursor and exposes the familiar operators:
//!   `==` for every cursor, and `<`, `+`, `-`, `+=`, `-=` and cursor
//!   subtraction for random-access cursors only.
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::cursor::{Cursor, Facade, Seek, Seeker};
//!
//! #[derive(Clone)]
//! struct Squares {
//!     index: isize,
//! }
//!
//! impl Seek for Squares {
//!     type Item = isize;
//!
//!     fn deref(&self) -> isize {
//!         self.index * self.index
//!     }
//!
//!     fn advance(&mut self, offset: isize) {
//!         self.index += offset;
//!     }
//!
//!     fn distance_to(&self, other: &Self) -> isize {
//!         other.index - self.index
//!     }
//! }
//!
//! let begin = Facade::new(Seeker::new(Squares { index: 0 }));
//! let third = begin.clone() + 3;
//! assert_eq!(third.get(), 9);
//! assert_eq!(third.clone() - begin.clone(), 3);
//! assert!(begin < third);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{Bidirectional, Category, Cursor, RandomAccess, to_offset};

/// The minimal core of a random-access cursor.
///
/// Implement this instead of the three capability traits when a position
/// is naturally described by an offset; wrap the result in [`Seeker`].
pub trait Seek: Clone {
    /// The element produced by dereferencing.
    type Item;

    /// Produces the element at the current position.
    fn deref(&self) -> Self::Item;

    /// Moves by `offset` positions.
    fn advance(&mut self, offset: isize);

    /// Returns the signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// A random-access cursor derived from a [`Seek`] core.
#[derive(Debug, Clone, Copy, Default)]
pub struct Seeker<S>(S);

impl<S> Seeker<S> {
    /// Wraps a seek core.
    pub const fn new(core: S) -> Self {
        Self(core)
    }

    /// Returns the wrapped core.
    pub const fn core(&self) -> &S {
        &self.0
    }

    /// Unwraps the core.
    pub fn into_core(self) -> S {
        self.0
    }
}

impl<S: Seek> Cursor for Seeker<S> {
    type Item = S::Item;

    const CATEGORY: Category = Category::RandomAccess;

    fn deref(&self) -> S::Item {
        self.0.deref()
    }

    fn inc(&mut self) {
        self.0.advance(1);
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.0.distance_to(&other.0) == 0
    }

    fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
        let available = usize::try_from(self.0.distance_to(&end.0)).unwrap_or(0);
        let step = count.min(available);
        self.0.advance(to_offset(step));
        step
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        usize::try_from(self.0.distance_to(&end.0)).ok()
    }
}

impl<S: Seek> Bidirectional for Seeker<S> {
    fn dec(&mut self) {
        self.0.advance(-1);
    }

    fn retreat(&mut self, count: usize) {
        self.0.advance(-to_offset(count));
    }
}

impl<S: Seek> RandomAccess for Seeker<S> {
    fn advance(&mut self, offset: isize) {
        self.0.advance(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.0.distance_to(&other.0)
    }
}

// =============================================================================
// Facade
// =============================================================================

/// An operator view over a cursor.
///
/// Equality is available for every cursor. Ordering, offset arithmetic and
/// cursor subtraction only exist when the wrapped cursor is
/// [`RandomAccess`]; using them on a weaker cursor does not compile:
///
/// ```compile_fail
/// use lazyrange::cursor::Facade;
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// let evens = &data | filter(|value: &i32| value % 2 == 0);
/// let (begin, end) = evens.into_parts();
/// let _ = Facade::new(end) - Facade::new(begin);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Facade<C>(C);

impl<C> Facade<C> {
    /// Wraps a cursor.
    pub const fn new(cursor: C) -> Self {
        Self(cursor)
    }

    /// Returns the wrapped cursor.
    pub const fn cursor(&self) -> &C {
        &self.0
    }

    /// Unwraps the cursor.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: Cursor> Facade<C> {
    /// Dereferences the wrapped cursor.
    pub fn get(&self) -> C::Item {
        self.0.deref()
    }

    /// Returns the cursor one position further.
    #[must_use]
    pub fn successor(mut self) -> Self {
        self.0.inc();
        self
    }
}

impl<C: Bidirectional> Facade<C> {
    /// Returns the cursor one position back.
    #[must_use]
    pub fn predecessor(mut self) -> Self {
        self.0.dec();
        self
    }
}

impl<C: RandomAccess> Facade<C> {
    /// Dereferences the position `offset` steps away.
    pub fn at(&self, offset: isize) -> C::Item {
        let mut cursor = self.0.clone();
        cursor.advance(offset);
        cursor.deref()
    }
}

impl<C: Cursor> PartialEq for Facade<C> {
    fn eq(&self, other: &Self) -> bool {
        self.0.is_equal(&other.0)
    }
}

impl<C: RandomAccess> PartialOrd for Facade<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.0.is_equal(&other.0) {
            Some(Ordering::Equal)
        } else if self.0.is_less(&other.0) {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Greater)
        }
    }
}

impl<C: RandomAccess> AddAssign<isize> for Facade<C> {
    fn add_assign(&mut self, offset: isize) {
        self.0.advance(offset);
    }
}

impl<C: RandomAccess> SubAssign<isize> for Facade<C> {
    fn sub_assign(&mut self, offset: isize) {
        self.0.advance(-offset);
    }
}

impl<C: RandomAccess> Add<isize> for Facade<C> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<C: RandomAccess> Sub<isize> for Facade<C> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<C: RandomAccess> Sub for Facade<C> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        other.0.distance_to(&self.0)
    }
}
