//! Searching, bounding and reordering algorithms with return policies.
//!
//! Every positional algorithm runs its search once and returns a
//! [`Found`] triple `(found, begin, end)`. The caller picks the shape of the
//! answer with [`Found::returning`] and a [`ReturnPolicy`]: the position,
//! one of the sub-ranges around it, the element, or an optional.
//!
//! All algorithms accept anything that implements
//! [`IntoRange`](crate::range::IntoRange). The binary searches require
//! random-access cursors; calling them on a weaker range does not compile:
//!
//! ```compile_fail
//! use lazyrange::algorithm;
//! use lazyrange::prelude::*;
//!
//! let data = [1, 2, 3];
//! let odd = &data | filter(|value: &i32| value % 2 == 1);
//! let _ = algorithm::lower_bound(odd, &2);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::algorithm::{self, ReturnBeginFound, ReturnRef};
//! use lazyrange::Error;
//!
//! let data = [1, 3, 5, 6, 7];
//! let odd_prefix: Vec<i32> = algorithm::find_if(&data, |value: &i32| value % 2 == 0)
//!     .returning(ReturnBeginFound)
//!     .copied()
//!     .collect();
//! assert_eq!(odd_prefix, vec![1, 3, 5]);
//!
//! assert_eq!(algorithm::find(&data, &4).returning(ReturnRef), Err(Error::NotFound));
//! ```

mod bound;
mod mutate;
mod policy;
mod query;
mod search;

pub use bound::{
    equal_range, equal_range_by, lower_bound, lower_bound_by, lower_bound_by_key,
    partition_point, upper_bound, upper_bound_by, upper_bound_by_key,
};
pub use mutate::{partition, remove, remove_if, rotate, stable_partition, unique};
pub use policy::{
    DefaultPolicy, Found, ReturnBeginFound, ReturnBeginNext, ReturnBoth, ReturnFound,
    ReturnFoundEnd, ReturnFoundNext, ReturnNextEnd, ReturnOptFound, ReturnOptRef, ReturnPolicy,
    ReturnRef,
};
pub use query::{
    accumulate, all_equal, all_of, any_of, copy, copy_if, copy_until, copy_while, count, count_if,
    equal, equal_to, for_each, is_partitioned, is_sorted, none_of, starts_with, transform_if,
};
pub use search::{
    adjacent_find, find, find_end, find_first_of, find_if, find_if_not, is_heap_until,
    is_heap_until_by, is_sorted_until, is_sorted_until_by, max_element, max_element_by,
    max_element_by_key, min_element, min_element_by, min_element_by_key, minmax_element,
    minmax_element_by, mismatch, search, search_n,
};
