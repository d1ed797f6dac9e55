//! Integration tests for the cursor capability tiers and the operator facade.
//!
//! Capabilities are checked at compile time with `static_assertions`: an
//! adaptor must keep exactly the tiers its input allows.

use lazyrange::cursor::{Bidirectional, Category, Cursor, Facade, RandomAccess, Seek, Seeker, SliceCursor};
use lazyrange::prelude::*;
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

type Slice = SliceCursor<'static, i32>;
type Filtered = FilterCursor<Slice, fn(&'static i32) -> bool>;

// =============================================================================
// Capability propagation
// =============================================================================

assert_impl_all!(Slice: RandomAccess, Copy);
assert_impl_all!(NumericCursor<i64>: RandomAccess);
assert_impl_all!(RepeatCursor<char>: RandomAccess);
assert_impl_all!(OwningCursor<String>: RandomAccess);

assert_impl_all!(MapCursor<Slice, fn(&'static i32) -> i32>: RandomAccess);
assert_impl_all!(ReverseCursor<Slice>: RandomAccess);
assert_impl_all!(TakeCursor<Slice>: RandomAccess);
assert_impl_all!(EnumerateCursor<Slice>: RandomAccess);
assert_impl_all!(CacheLatestCursor<Slice>: RandomAccess);
assert_impl_all!(ZipCursor<(Slice, NumericCursor<usize>)>: RandomAccess);

assert_impl_all!(Filtered: Bidirectional);
assert_not_impl_any!(Filtered: RandomAccess);
assert_impl_all!(ReverseCursor<Filtered>: Bidirectional);
assert_not_impl_any!(ReverseCursor<Filtered>: RandomAccess);
assert_impl_all!(ChainCursor<Slice, Slice>: Bidirectional);
assert_not_impl_any!(ChainCursor<Slice, Slice>: RandomAccess);

assert_not_impl_any!(TakeCursor<Filtered>: Bidirectional);
assert_not_impl_any!(StrideCursor<Slice>: Bidirectional);
assert_not_impl_any!(TakeWhileCursor<Slice, fn(&'static i32) -> bool>: Bidirectional);
assert_not_impl_any!(FilterMapCursor<Slice, fn(&'static i32) -> Option<i32>, i32>: Bidirectional);
assert_not_impl_any!(BoxedCursor<i32>: Bidirectional);
assert_not_impl_any!(ZipCursor<(Slice, Filtered)>: Bidirectional);

// =============================================================================
// Reported categories
// =============================================================================

#[rstest]
fn test_category_reported_by_pipelines() {
    let data = [1, 2, 3, 4];
    assert_eq!((&data).into_range().category(), Category::RandomAccess);
    assert_eq!((&data | map(|value: &i32| value + 1)).category(), Category::RandomAccess);
    assert_eq!((&data | filter(|value: &i32| *value > 1)).category(), Category::Bidirectional);
    assert_eq!((&data | filter(|value: &i32| *value > 1) | take(2)).category(), Category::Forward);
    assert_eq!((&data | stride(2)).category(), Category::Forward);
    assert_eq!((iota(0, 4) | boxed()).category(), Category::Forward);
}

#[rstest]
fn test_category_constant_matches_traits() {
    assert!(<Slice as Cursor>::CATEGORY.is_random_access());
    assert!(<Filtered as Cursor>::CATEGORY.is_bidirectional());
    assert!(!<Filtered as Cursor>::CATEGORY.is_random_access());
    assert_eq!(<TakeCursor<Filtered> as Cursor>::CATEGORY, Category::Forward);
}

#[rstest]
#[case::weaker_wins(Category::RandomAccess, Category::Forward, Category::Forward)]
#[case::equal(Category::Bidirectional, Category::Bidirectional, Category::Bidirectional)]
#[case::cap_not_reached(Category::Forward, Category::RandomAccess, Category::Forward)]
fn test_category_at_most(#[case] category: Category, #[case] limit: Category, #[case] expected: Category) {
    assert_eq!(category.at_most(limit), expected);
    assert_eq!(category.min(limit), expected);
}

// =============================================================================
// Facade operators
// =============================================================================

fn facades(data: &[i32]) -> (Facade<SliceCursor<'_, i32>>, Facade<SliceCursor<'_, i32>>) {
    let (begin, end) = data.into_range().into_parts();
    (Facade::new(begin), Facade::new(end))
}

#[rstest]
fn test_facade_arithmetic() {
    let data = [10, 20, 30, 40, 50];
    let (begin, end) = facades(&data);
    assert_eq!(end.clone() - begin.clone(), 5);
    assert_eq!(begin.at(3), &40);

    let mut cursor = begin.clone() + 4;
    assert_eq!(cursor.get(), &50);
    cursor -= 2;
    assert_eq!(cursor.get(), &30);
    cursor += 1;
    assert_eq!((cursor - 3).get(), &20);
}

#[rstest]
fn test_facade_ordering_and_equality() {
    let data = [1, 2, 3];
    let (begin, end) = facades(&data);
    assert!(begin < end);
    assert!(end > begin);
    assert!(begin.clone() + 3 == end);
    assert!(begin.clone().successor() != begin);
    assert!(end.clone().predecessor() == begin.clone() + 2);
}

#[rstest]
fn test_facade_over_forward_cursor_has_equality() {
    let data = [1, 2, 3, 4];
    let (begin, end) = (&data | stride(2)).into_parts();
    let first = Facade::new(begin);
    let second = first.clone().successor();
    assert_eq!(first.get(), &1);
    assert_eq!(second.get(), &3);
    assert!(second.clone().successor() == Facade::new(end));
}

// =============================================================================
// Seek cores
// =============================================================================

#[derive(Debug, Clone)]
struct Countdown {
    remaining: i64,
}

impl Seek for Countdown {
    type Item = i64;

    fn deref(&self) -> i64 {
        self.remaining
    }

    fn advance(&mut self, offset: isize) {
        self.remaining -= offset as i64;
    }

    fn distance_to(&self, other: &Self) -> isize {
        (self.remaining - other.remaining) as isize
    }
}

#[rstest]
fn test_seek_core_becomes_a_full_range() {
    let range = Range::new(Seeker::new(Countdown { remaining: 5 }), Seeker::new(Countdown { remaining: 0 }));
    assert_eq!(range.size(), 5);
    assert_eq!(range.at(1), Some(4));
    assert_eq!(range.clone().rev().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!((range | map(|value: i64| value * 10) | take(2)).collect::<Vec<_>>(), vec![50, 40]);
}
