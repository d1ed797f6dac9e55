#![cfg(feature = "opt")]
//! Property-based tests for the optional combinators.
//!
//! - **Identity**: `map(id)` changes nothing
//! - **Composition**: `map(f) | map(g)` equals `map(g . f)`
//! - **Left identity**: `some(a) | and_then(f)` equals `f(a)`
//! - **Right identity**: `m | and_then(some)` equals `m`
//! - **Std agreement**: every combinator matches the `Option` method

use lazyrange::opt;
use proptest::prelude::*;

fn halve(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value / 2)
}

proptest! {
    /// Mapping the identity function is a no-op
    #[test]
    fn prop_map_identity(input in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(input | opt::map(|value: i32| value), input);
    }

    /// Two maps equal one map of the composition
    #[test]
    fn prop_map_composition(input in proptest::option::of(-1000_i32..1000)) {
        let separate = input | opt::map(|value: i32| value + 1) | opt::map(|value: i32| value * 3);
        let fused = input | opt::map(|value: i32| (value + 1) * 3);
        prop_assert_eq!(separate, fused);
    }

    /// `some` is a left identity of `and_then`
    #[test]
    fn prop_and_then_left_identity(value in any::<i32>()) {
        prop_assert_eq!(opt::some(value) | opt::and_then(halve), halve(value));
    }

    /// `some` is a right identity of `and_then`
    #[test]
    fn prop_and_then_right_identity(input in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(input | opt::and_then(opt::some), input);
    }

    /// `filter` and `drop_if` partition every value
    #[test]
    fn prop_filter_and_drop_if_are_complementary(input in proptest::option::of(any::<i32>())) {
        let kept = input | opt::filter(|value: &i32| *value > 0);
        let dropped = input | opt::drop_if(|value: &i32| *value > 0);
        prop_assert_eq!(kept.or(dropped), input);
        prop_assert!(kept.is_none() || dropped.is_none());
    }

    /// The combinators agree with the `Option` methods
    #[test]
    fn prop_matches_std(
        input in proptest::option::of(any::<i32>()),
        other in proptest::option::of(any::<i32>()),
        default in any::<i32>(),
    ) {
        prop_assert_eq!(input | opt::or_(other), input.or(other));
        prop_assert_eq!(input | opt::and_(other), input.and(other));
        prop_assert_eq!(input | opt::or_else(|| other), input.or_else(|| other));
        prop_assert_eq!(input | opt::and_else(|| other), input.and(other));
        prop_assert_eq!(input | opt::value_or(default), input.unwrap_or(default));
        prop_assert_eq!(input | opt::has_value(), input.is_some());
        prop_assert_eq!((input | opt::value()).ok(), input);
    }
}
