#![cfg(feature = "opt")]
//! Integration tests for the optional combinators.
//!
//! The `_else` variants must only run their operand when it decides the
//! result, and no callable may run on `None`.

use std::cell::Cell;

use lazyrange::opt;
use lazyrange::{Error, pipe};
use rstest::rstest;

// =============================================================================
// Queries and transformations
// =============================================================================

#[rstest]
#[case::present(Some(1), true)]
#[case::absent(None, false)]
fn test_has_value(#[case] input: Option<i32>, #[case] expected: bool) {
    assert_eq!(input | opt::has_value(), expected);
}

#[rstest]
fn test_some_wraps() {
    assert_eq!(opt::some(3) | opt::map(|value: i32| value * 2), Some(6));
}

#[rstest]
fn test_map_not_called_on_none() {
    let calls = Cell::new(0);
    let result = None::<i32>
        | opt::map(|value: i32| {
            calls.set(calls.get() + 1);
            value
        });
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_transform_changes_type() {
    let result = Some(42) | opt::transform(|value: i32| value.to_string());
    assert_eq!(result, Some("42".to_string()));
}

#[rstest]
#[case::parses(Some("12"), Some(12))]
#[case::rejects(Some("x"), None)]
#[case::absent(None, None)]
fn test_and_then_chains_failures(#[case] input: Option<&str>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::and_then(|text: &str| text.parse::<i32>().ok()), expected);
    assert_eq!(input | opt::flat_map(|text: &str| text.parse::<i32>().ok()), expected);
}

#[rstest]
#[case::kept(Some(4), Some(4))]
#[case::rejected(Some(3), None)]
#[case::absent(None, None)]
fn test_filter_and_take_if(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::filter(|value: &i32| value % 2 == 0), expected);
    assert_eq!(input | opt::take_if(|value: &i32| value % 2 == 0), expected);
}

#[rstest]
#[case::dropped(Some(4), None)]
#[case::kept(Some(3), Some(3))]
#[case::absent(None, None)]
fn test_drop_if(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::drop_if(|value: &i32| value % 2 == 0), expected);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_value_reports_empty_optional() {
    assert_eq!(Some(7) | opt::value(), Ok(7));
    assert_eq!(None::<i32> | opt::value(), Err(Error::EmptyOptional));
}

#[rstest]
#[case::present(Some(7), 7)]
#[case::absent(None, -1)]
fn test_value_or(#[case] input: Option<i32>, #[case] expected: i32) {
    assert_eq!(input | opt::value_or(-1), expected);
    assert_eq!(input | opt::value_or_else(|| -1), expected);
}

#[rstest]
fn test_value_or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        0
    };
    assert_eq!(Some(5) | opt::value_or_else(fallback), 5);
    assert_eq!(calls.get(), 0);
    assert_eq!(None | opt::value_or_else(fallback), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_value_or_error_carries_message() {
    assert_eq!(Some(1) | opt::value_or_error("missing"), Ok(1));
    let error = (None::<i32> | opt::value_or_error(format!("missing {}", "port"))).unwrap_err();
    assert_eq!(error.to_string(), "missing port");
}

// =============================================================================
// Disjunction and conjunction
// =============================================================================

#[rstest]
#[case::left_wins(Some(3), Some(9), Some(3))]
#[case::right_fills(None, Some(9), Some(9))]
#[case::both_empty(None, None, None)]
fn test_or(#[case] input: Option<i32>, #[case] other: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::or_(other), expected);
    assert_eq!(input | opt::disjunction(other), expected);
}

#[rstest]
#[case::left_wins(Some(5), Some(5))]
#[case::fallback_used(None, Some(-1))]
fn test_or_else(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::or_else(|| Some(-1)), expected);
}

#[rstest]
#[case::right_wins(Some(3), Some(9), Some(9))]
#[case::left_empty(None, Some(9), None)]
#[case::right_empty(Some(3), None, None)]
fn test_and(#[case] input: Option<i32>, #[case] other: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::and_(other), expected);
    assert_eq!(input | opt::conjunction(other), expected);
}

#[rstest]
#[case::operand_used(Some(5), Some(-1))]
#[case::left_empty(None, None)]
fn test_and_else(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input | opt::and_else(|| Some(-1)), expected);
}

#[rstest]
fn test_or_else_and_and_else_are_lazy() {
    let calls = Cell::new(0);
    let operand = || {
        calls.set(calls.get() + 1);
        Some(0)
    };
    assert_eq!(Some(1) | opt::or_else(operand), Some(1));
    assert_eq!(None::<i32> | opt::and_else(operand), None::<i32>);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_and_changes_type() {
    assert_eq!(Some(1) | opt::and_(Some("one")), Some("one"));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_composed_optional_stage() {
    let port = opt::and_then(|text: &str| text.parse::<u16>().ok())
        | opt::filter(|port: &u16| *port >= 1024)
        | opt::value_or(8080);
    assert_eq!(Some("9000") | port, 9000);
    assert_eq!(Some("80") | port, 8080);
    assert_eq!(Some("http") | port, 8080);
    assert_eq!(None | port, 8080);
}

#[rstest]
fn test_pipe_macro_over_optional() {
    let result = pipe!(Some(10), opt::map(|value: i32| value + 1), opt::filter(|value: &i32| *value > 5), opt::value());
    assert_eq!(result, Ok(11));
}
