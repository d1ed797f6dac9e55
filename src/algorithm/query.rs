//! Algorithms that answer a question or fill a sink instead of reporting a
//! position.

use std::borrow::Borrow;

use crate::range::{IntoRange, ItemOf};

/// Turns a plain value into an equality predicate.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm::{self, equal_to};
///
/// let data = [1, 2, 2, 3];
/// assert_eq!(algorithm::count_if(&data, equal_to(2)), 2);
/// ```
pub fn equal_to<V, I>(value: V) -> impl Fn(I) -> bool
where
    V: PartialEq,
    I: Borrow<V>,
{
    move |item: I| *item.borrow() == value
}

/// Returns `true` if `predicate` holds for every element.
pub fn all_of<R, P>(range: R, predicate: P) -> bool
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    range.into_range().all(predicate)
}

/// Returns `true` if `predicate` holds for at least one element.
pub fn any_of<R, P>(range: R, predicate: P) -> bool
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    range.into_range().any(predicate)
}

/// Returns `true` if `predicate` holds for no element.
pub fn none_of<R, P>(range: R, predicate: P) -> bool
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    !any_of(range, predicate)
}

/// Counts the elements equal to `value`.
pub fn count<R, V>(range: R, value: &V) -> usize
where
    R: IntoRange,
    ItemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    count_if(range, |item: ItemOf<R>| item.borrow() == value)
}

/// Counts the elements satisfying `predicate`.
pub fn count_if<R, P>(range: R, predicate: P) -> usize
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    range.into_range().map(predicate).filter(|hit| *hit).count()
}

/// Returns `true` if both ranges have the same length and equal elements.
pub fn equal<R, S>(left: R, right: S) -> bool
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    left.into_range().eq(right.into_range())
}

/// Folds the elements into `init` from front to back.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm;
///
/// let product = algorithm::accumulate(1_u64..6, 1, |total: u64, value: u64| total * value);
/// assert_eq!(product, 120);
/// ```
pub fn accumulate<R, A, F>(range: R, init: A, function: F) -> A
where
    R: IntoRange,
    F: FnMut(A, ItemOf<R>) -> A,
{
    range.into_range().fold(init, function)
}

/// Calls `function` on every element and gives the function back.
pub fn for_each<R, F>(range: R, mut function: F) -> F
where
    R: IntoRange,
    F: FnMut(ItemOf<R>),
{
    for item in range.into_range() {
        function(item);
    }
    function
}

/// Appends every element to `sink`.
pub fn copy<R, E>(range: R, mut sink: E) -> E
where
    R: IntoRange,
    E: Extend<ItemOf<R>>,
{
    sink.extend(range.into_range());
    sink
}

/// Appends the elements satisfying `predicate` to `sink`.
pub fn copy_if<R, E, P>(range: R, mut sink: E, mut predicate: P) -> E
where
    R: IntoRange,
    ItemOf<R>: Clone,
    E: Extend<ItemOf<R>>,
    P: FnMut(ItemOf<R>) -> bool,
{
    sink.extend(range.into_range().filter(|item| predicate(item.clone())));
    sink
}

/// Appends elements to `sink` until the first one failing `predicate`.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm;
///
/// let data = [2, 4, 5, 6];
/// let prefix = algorithm::copy_while(&data, Vec::<&i32>::new(), |value: &i32| value % 2 == 0);
/// assert_eq!(prefix, vec![&2, &4]);
/// ```
pub fn copy_while<R, E, P>(range: R, mut sink: E, mut predicate: P) -> E
where
    R: IntoRange,
    ItemOf<R>: Clone,
    E: Extend<ItemOf<R>>,
    P: FnMut(ItemOf<R>) -> bool,
{
    sink.extend(range.into_range().take_while(|item| predicate(item.clone())));
    sink
}

/// Appends elements to `sink` until the first one satisfying `predicate`.
pub fn copy_until<R, E, P>(range: R, sink: E, mut predicate: P) -> E
where
    R: IntoRange,
    ItemOf<R>: Clone,
    E: Extend<ItemOf<R>>,
    P: FnMut(ItemOf<R>) -> bool,
{
    copy_while(range, sink, |item: ItemOf<R>| !predicate(item))
}

/// Appends `function(element)` to `sink` for the elements satisfying
/// `predicate`.
pub fn transform_if<R, E, F, B, P>(range: R, mut sink: E, mut function: F, mut predicate: P) -> E
where
    R: IntoRange,
    ItemOf<R>: Clone,
    E: Extend<B>,
    F: FnMut(ItemOf<R>) -> B,
    P: FnMut(ItemOf<R>) -> bool,
{
    sink.extend(
        range
            .into_range()
            .filter(|item| predicate(item.clone()))
            .map(&mut function),
    );
    sink
}

/// Returns `true` if no element is smaller than the one before it.
pub fn is_sorted<R>(range: R) -> bool
where
    R: IntoRange,
    ItemOf<R>: PartialOrd,
{
    !super::is_sorted_until(range).is_found()
}

/// Returns `true` if every element satisfying `predicate` comes before
/// every element that does not.
pub fn is_partitioned<R, P>(range: R, mut predicate: P) -> bool
where
    R: IntoRange,
    P: FnMut(ItemOf<R>) -> bool,
{
    let mut range = range.into_range();
    range.by_ref().all(&mut predicate);
    range.all(|item| !predicate(item))
}

/// Returns `true` if every element equals the first one.
pub fn all_equal<R>(range: R) -> bool
where
    R: IntoRange,
    ItemOf<R>: PartialEq,
{
    let mut range = range.into_range();
    match range.next() {
        Some(first) => range.all(|item| item == first),
        None => true,
    }
}

/// Returns `true` if `range` begins with all of `prefix`.
///
/// # Examples
///
/// ```
/// use lazyrange::algorithm;
///
/// assert!(algorithm::starts_with("hello".as_bytes(), "he".as_bytes()));
/// assert!(!algorithm::starts_with(&[1, 2], &[1, 2, 3]));
/// ```
pub fn starts_with<R, S>(range: R, prefix: S) -> bool
where
    R: IntoRange,
    S: IntoRange,
    ItemOf<R>: PartialEq<ItemOf<S>>,
{
    let (_, rest) = super::mismatch(range, prefix);
    !rest.is_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::all(&[2, 4][..], true, true, false)]
    #[case::some(&[1, 2][..], false, true, false)]
    #[case::none(&[1, 3][..], false, false, true)]
    #[case::empty(&[][..], true, false, true)]
    fn quantifiers(#[case] data: &[i32], #[case] all: bool, #[case] any: bool, #[case] none: bool) {
        let even = |value: &i32| value % 2 == 0;
        assert_eq!(all_of(data, even), all);
        assert_eq!(any_of(data, even), any);
        assert_eq!(none_of(data, even), none);
    }

    #[rstest]
    fn counting() {
        let data = [1, 2, 1, 3, 1];
        assert_eq!(count(&data, &1), 3);
        assert_eq!(count_if(&data, |value: &i32| *value > 1), 2);
    }

    #[rstest]
    #[case::same(&[1, 2][..], &[1, 2][..], true)]
    #[case::shorter(&[1][..], &[1, 2][..], false)]
    #[case::different(&[1, 3][..], &[1, 2][..], false)]
    fn equality(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
        assert_eq!(equal(left, right), expected);
    }

    #[rstest]
    fn for_each_returns_the_function() {
        let mut total = 0;
        for_each(1..4, |value: i32| total += value);
        assert_eq!(total, 6);
    }

    #[rstest]
    fn copy_variants() {
        let data = [1, 2, 3, 4, 1];
        assert_eq!(copy(1..3, vec![0]), vec![0, 1, 2]);
        assert_eq!(copy_if(&data, Vec::<&i32>::new(), |value: &i32| *value > 2), vec![&3, &4]);
        assert_eq!(copy_until(&data, Vec::<&i32>::new(), |value: &i32| *value == 3), vec![&1, &2]);
        let squares = transform_if(&data, Vec::new(), |value: &i32| value * value, |value: &i32| value % 2 == 0);
        assert_eq!(squares, vec![4, 16]);
    }

    #[rstest]
    #[case::sorted(&[1, 1, 2][..], true)]
    #[case::unsorted(&[2, 1][..], false)]
    #[case::empty(&[][..], true)]
    fn sortedness(#[case] data: &[i32], #[case] expected: bool) {
        assert_eq!(is_sorted(data), expected);
    }

    #[rstest]
    #[case::partitioned(&[2, 4, 1, 3][..], true)]
    #[case::interleaved(&[2, 1, 4][..], false)]
    #[case::all_true(&[2, 4][..], true)]
    #[case::empty(&[][..], true)]
    fn partitioned(#[case] data: &[i32], #[case] expected: bool) {
        assert_eq!(is_partitioned(data, |value: &i32| value % 2 == 0), expected);
    }

    #[rstest]
    #[case::same(&[7, 7, 7][..], true)]
    #[case::differ(&[7, 8][..], false)]
    #[case::empty(&[][..], true)]
    fn all_equal_cases(#[case] data: &[i32], #[case] expected: bool) {
        assert_eq!(all_equal(data), expected);
    }

    #[rstest]
    fn starts_with_prefixes() {
        assert!(starts_with(&[1, 2, 3], &[1, 2]));
        assert!(starts_with(&[1, 2, 3], &[] as &[i32]));
        assert!(!starts_with(&[1, 2, 3], &[2]));
    }

    #[rstest]
    fn equal_to_works_on_references_and_values() {
        let matches_two = equal_to(2);
        assert!(matches_two(&2));
        assert!(!equal_to(2)(3));
    }
}
