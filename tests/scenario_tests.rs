//! End-to-end pipelines mixing sources, adaptors, algorithms and optional
//! combinators the way application code uses them.

use std::collections::BTreeMap;

use lazyrange::algorithm::{self, ReturnBeginFound, ReturnOptRef};
use lazyrange::parse::try_parse;
use lazyrange::prelude::*;
use lazyrange::{opt, pipe};
use rstest::rstest;

// =============================================================================
// Reference scenarios
// =============================================================================

#[rstest]
fn test_even_times_ten_first_two() {
    let data = [1, 2, 3, 4, 5, 6];
    let result: Vec<i32> = (&data | filter(|value: &i32| value % 2 == 0) | map(|value: &i32| value * 10) | take(2)).collect();
    assert_eq!(result, vec![20, 40]);
}

#[rstest]
fn test_generate_squares_until_past_hundred() {
    let mut next = 2_u64;
    let squares = generate(move || {
        let value = next;
        next = value * value;
        (value <= 100).then_some(value)
    });
    assert_eq!(squares.collect::<Vec<_>>(), vec![2, 4, 16]);
}

#[rstest]
fn test_enumerate_from_zero() {
    let letters = ["a", "b", "c"];
    let pairs: Vec<(usize, &str)> = (&letters | enumerate_from(0) | map(|(index, letter): (usize, &&'static str)| (index, *letter))).collect();
    assert_eq!(pairs, vec![(0, "a"), (1, "b"), (2, "c")]);
}

// =============================================================================
// Mixed pipelines
// =============================================================================

#[rstest]
fn test_parse_config_lines() {
    let lines = ["# ports", "http = 80", "https=443", "", "bogus = x", "admin = 8443"];
    let settings: BTreeMap<String, u16> = (&lines
        | map(|line: &&'static str| line.trim())
        | drop_if(|line: &str| line.is_empty() || line.starts_with('#'))
        | filter_map(|line: &str| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), try_parse::<u16>(value)?))
        }))
    .collect();

    assert_eq!(settings.len(), 3);
    assert_eq!(settings.get("https"), Some(&443));
    let admin = settings.get("admin").copied() | opt::filter(|port: &u16| *port > 1024) | opt::value_or(0);
    assert_eq!(admin, 8443);
}

#[rstest]
fn test_running_differences_of_sorted_values() {
    let readings = [3, 9, 4, 15, 1];
    let mut sorted = readings.to_vec();
    sorted.sort_unstable();
    let gaps: Vec<i32> = (&sorted | adjacent_transform(|(low, high): (&i32, &i32)| high - low)).collect();
    assert_eq!(gaps, vec![2, 1, 5, 6]);
}

#[rstest]
fn test_zip_names_with_scores_and_pick_best() {
    let names = ["ada", "bob", "cy"];
    let scores = vec![71, 93, 88, 100];
    let pairs: Vec<(&str, i32)> = zip_transform(|(name, score): (&&'static str, &i32)| (*name, *score), (&names, &scores)).collect();
    assert_eq!(pairs.len(), 3);

    let best = algorithm::max_element_by_key(&pairs, |pair: &(&str, i32)| pair.1).returning(ReturnOptRef);
    assert_eq!(best.map(|pair| pair.0), Some("bob"));
}

#[rstest]
fn test_prefix_before_first_negative() {
    let samples = vec![4, 8, 15, -1, 16];
    let before: i32 = algorithm::find_if(&samples, |value: &i32| *value < 0)
        .returning(ReturnBeginFound)
        .sum();
    assert_eq!(before, 27);
}

#[rstest]
fn test_chain_then_stride_then_reverse() {
    let left = [1, 2, 3];
    let right = vec![4, 5, 6, 7];
    let picked: Vec<i32> = pipe!(
        &left,
        chain_with(&right),
        stride(3),
        map(|value: &i32| *value),
    )
    .collect();
    assert_eq!(picked, vec![1, 4, 7]);

    let backwards: Vec<i32> = (&left | chain_with(&right) | reverse() | take(2)).copied().collect();
    assert_eq!(backwards, vec![7, 6]);
}

#[rstest]
fn test_owned_source_outlives_its_vector() {
    fn words() -> Iterable<String> {
        let local = vec!["x".to_string(), "yy".to_string(), "zzz".to_string()];
        local | filter(|word: String| word.len() > 1) | boxed()
    }
    assert_eq!(words().collect::<Vec<_>>(), vec!["yy", "zzz"]);
}

#[rstest]
fn test_flat_map_expands_and_front_reads_first() {
    let counts = [2_usize, 0, 3];
    let expanded: Vec<usize> = (&counts | flat_map(|count: &usize| repeat(*count, *count))).collect();
    assert_eq!(expanded, vec![2, 2, 3, 3, 3]);

    let first = &counts | drop_while(|count: &usize| *count > 1) | front();
    assert_eq!(first, Ok(&0));
}
