//! Test that binary search over a filtered range produces a compile error.

use lazyrange::algorithm::lower_bound;
use lazyrange::seq::{filter, iota};

fn is_even(value: i32) -> bool {
    value % 2 == 0
}

fn main() {
    let evens = iota(0, 10) | filter(is_even as fn(i32) -> bool);
    let _ = lower_bound(evens, &4);
}
