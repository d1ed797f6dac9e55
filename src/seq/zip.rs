//! `zip`, `zip_transform`, `adjacent` and `adjacent_transform`.
//!
//! Zipping walks several ranges in lockstep. A zipped cursor reaches the end
//! as soon as any of its components does, so the result is as long as the
//! shortest input. When every input can report its length without
//! traversal, the end cursor is placed exactly that many steps from the
//! beginning of every component, which keeps the components aligned when
//! walking backwards.

use crate::cursor::{Bidirectional, Category, Cursor, RandomAccess, advance_linear};
use crate::pipe::{Pipe, Stage};
use crate::range::{IntoRange, Range};

use super::map::{MapCursor, MapStage};
use super::narrow::drop;

/// A cursor over a tuple of cursors that move together.
///
/// Implemented for tuples of two to four cursors. It is random access when
/// every component is, and forward only otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T> ZipCursor<T> {
    /// Returns the component cursors.
    pub const fn cursors(&self) -> &T {
        &self.cursors
    }
}

/// Tuples of ranges that can be zipped together.
pub trait IntoZip {
    /// The zipped cursor type.
    type Cursor: Cursor;

    /// Builds the zipped range.
    fn into_zip(self) -> Range<Self::Cursor>;
}

const fn zip_category(categories: &[Category]) -> Category {
    let mut index = 0;
    while index < categories.len() {
        if !categories[index].is_random_access() {
            return Category::Forward;
        }
        index += 1;
    }
    Category::RandomAccess
}

macro_rules! impl_zip {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Cursor),+> Cursor for ZipCursor<($($name,)+)> {
            type Item = ($($name::Item,)+);

            const CATEGORY: Category = zip_category(&[$($name::CATEGORY),+]);

            fn deref(&self) -> Self::Item {
                ($(self.cursors.$index.deref(),)+)
            }

            fn inc(&mut self) {
                $(self.cursors.$index.inc();)+
            }

            fn is_equal(&self, other: &Self) -> bool {
                $(
                    if self.cursors.$index.is_equal(&other.cursors.$index) {
                        return true;
                    }
                )+
                false
            }

            fn advance_bounded(&mut self, count: usize, end: &Self) -> usize {
                match self.distance_hint(end) {
                    Some(available) => {
                        let step = count.min(available);
                        $(self.cursors.$index.advance_bounded(step, &end.cursors.$index);)+
                        step
                    }
                    None => advance_linear(self, count, end),
                }
            }

            fn distance_hint(&self, end: &Self) -> Option<usize> {
                let mut shortest = usize::MAX;
                $(shortest = shortest.min(self.cursors.$index.distance_hint(&end.cursors.$index)?);)+
                Some(shortest)
            }
        }

        impl<$($name: RandomAccess),+> Bidirectional for ZipCursor<($($name,)+)> {
            fn dec(&mut self) {
                $(self.cursors.$index.dec();)+
            }

            fn retreat(&mut self, count: usize) {
                $(self.cursors.$index.retreat(count);)+
            }
        }

        impl<$($name: RandomAccess),+> RandomAccess for ZipCursor<($($name,)+)> {
            fn advance(&mut self, offset: isize) {
                $(self.cursors.$index.advance(offset);)+
            }

            // Components of a random-access zip are aligned, so any of them
            // measures the same distance.
            fn distance_to(&self, other: &Self) -> isize {
                self.cursors.0.distance_to(&other.cursors.0)
            }
        }

        impl<$($name: IntoRange),+> IntoZip for ($($name,)+) {
            type Cursor = ZipCursor<($($name::Cursor,)+)>;

            fn into_zip(self) -> Range<Self::Cursor> {
                let ranges = ($(self.$index.into_range(),)+);
                let begin = ($(ranges.$index.begin().clone(),)+);
                let hints = [$(ranges.$index.begin().distance_hint(ranges.$index.end()),)+];
                let shortest = hints
                    .into_iter()
                    .try_fold(usize::MAX, |shortest, hint| hint.map(|length| shortest.min(length)));
                let end = match shortest {
                    Some(length) => {
                        let mut end = begin.clone();
                        $(end.$index.advance_bounded(length, ranges.$index.end());)+
                        end
                    }
                    None => ($(ranges.$index.end().clone(),)+),
                };
                Range::new(ZipCursor { cursors: begin }, ZipCursor { cursors: end })
            }
        }
    };
}

impl_zip!(A 0, B 1);
impl_zip!(A 0, B 1, C 2);
impl_zip!(A 0, B 1, C 2, D 3);

/// The item type of a zip over `Z`.
pub type ZipItem<Z> = <<Z as IntoZip>::Cursor as Cursor>::Item;

/// Walks a tuple of ranges in lockstep, yielding tuples of elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let names = ["one", "two"];
/// let pairs: Vec<(&i32, &&str)> = zip((&numbers, &names)).collect();
/// assert_eq!(pairs, vec![(&1, &"one"), (&2, &"two")]);
/// ```
pub fn zip<Z: IntoZip>(ranges: Z) -> Range<Z::Cursor> {
    ranges.into_zip()
}

/// Zips a tuple of ranges and applies `function` to every tuple of
/// elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let left = [1, 2, 3];
/// let right = [10, 20, 30, 40];
/// let sums: Vec<i32> = zip_transform(|(a, b): (&i32, &i32)| a + b, (&left, &right)).collect();
/// assert_eq!(sums, vec![11, 22, 33]);
/// ```
pub fn zip_transform<Z, F, B>(function: F, ranges: Z) -> Range<MapCursor<Z::Cursor, F>>
where
    Z: IntoZip,
    F: Fn(ZipItem<Z>) -> B + Clone,
{
    MapStage::new(function).apply(zip(ranges))
}

/// The stage built by [`adjacent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentStage;

impl<C: Cursor> Stage<Range<C>> for AdjacentStage {
    type Output = Range<ZipCursor<(C, C)>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        let following = input.clone() | drop(1);
        zip((input, following))
    }
}

/// Pairs every element with its successor.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 2, 4];
/// let pairs: Vec<(&i32, &i32)> = (&data | adjacent()).collect();
/// assert_eq!(pairs, vec![(&1, &2), (&2, &4)]);
/// ```
pub const fn adjacent() -> Pipe<AdjacentStage> {
    Pipe::new(AdjacentStage)
}

/// The stage built by [`adjacent_transform`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacentTransformStage<F> {
    function: F,
}

impl<C, F, B> Stage<Range<C>> for AdjacentTransformStage<F>
where
    C: Cursor,
    F: Fn((C::Item, C::Item)) -> B + Clone,
{
    type Output = Range<MapCursor<ZipCursor<(C, C)>, F>>;

    fn apply(self, input: Range<C>) -> Self::Output {
        MapStage::new(self.function).apply(AdjacentStage.apply(input))
    }
}

/// Applies `function` to every pair of neighbouring elements.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [1, 4, 9, 16];
/// let gaps: Vec<i32> = (&data | adjacent_transform(|(a, b): (&i32, &i32)| b - a)).collect();
/// assert_eq!(gaps, vec![3, 5, 7]);
/// ```
pub const fn adjacent_transform<F>(function: F) -> Pipe<AdjacentTransformStage<F>> {
    Pipe::new(AdjacentTransformStage { function })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::generate;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], vec![4, 5, 6], 3)]
    #[case(vec![1], vec![4, 5, 6], 1)]
    #[case(vec![1, 2, 3], vec![], 0)]
    fn zip_stops_at_shortest(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: usize) {
        let zipped = zip((&left, &right));
        assert_eq!(zipped.len(), expected);
        assert_eq!(zipped.count(), expected);
    }

    #[rstest]
    fn zip_of_unequal_lengths_walks_backwards_aligned() {
        let left = [1, 2, 3, 4];
        let right = [10, 20];
        let backwards: Vec<(i32, i32)> = zip((&left, &right)).rev().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(backwards, vec![(2, 20), (1, 10)]);
    }

    #[rstest]
    fn zip_three_ranges() {
        let a = [1, 2];
        let b = ["x", "y"];
        let c = [true, false];
        let zipped: Vec<(&i32, &&str, &bool)> = zip((&a, &b, &c)).collect();
        assert_eq!(zipped, vec![(&1, &"x", &true), (&2, &"y", &false)]);
    }

    #[rstest]
    fn zip_with_forward_range_stops_at_either_end() {
        let mut next = 0;
        let counter = generate(move || {
            next += 1;
            (next <= 5).then_some(next)
        });
        let letters = ['a', 'b'];
        let zipped = zip((counter, &letters));
        assert_eq!(zipped.category(), Category::Forward);
        assert_eq!(zipped.collect::<Vec<_>>(), vec![(1, &'a'), (2, &'b')]);
    }

    #[rstest]
    fn zip_random_access_arithmetic() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let zipped = zip((&a, &b));
        assert_eq!(zipped.at(2), Some((&3, &6)));
        let (begin, end) = zipped.into_parts();
        assert_eq!(begin.distance_to(&end), 3);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![])]
    #[case(vec![1, 2, 3], vec![(1, 2), (2, 3)])]
    fn adjacent_pairs(#[case] input: Vec<i32>, #[case] expected: Vec<(i32, i32)>) {
        let pairs: Vec<(i32, i32)> = (&input | adjacent()).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, expected);
    }
}
