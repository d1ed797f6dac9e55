//! Range adaptors, sources and terminal stages.
//!
//! Adaptors are built with free functions that return a [`Pipe`](crate::pipe::Pipe)
//! stage, and are applied with `|`:
//!
//! | Adaptor | Resulting category |
//! |---------|--------------------|
//! | [`map`], [`enumerate`], [`iterate`], [`cache_latest`], [`reverse`] | same as input |
//! | [`filter`], [`drop_if`], [`chain`] | at most bidirectional |
//! | [`take`], [`zip`] | random access over random access, forward otherwise |
//! | [`filter_map`], [`flat_map`], [`take_while`], [`stride`], [`generate`], [`boxed`] | forward |
//!
//! Narrowing adaptors ([`drop`], [`take_last`], [`trim`] and their predicate
//! forms) return a range of the *same* cursor type, with one or both ends
//! moved inward.
//!
//! Closures given to adaptors must name their parameter type, since the
//! element type is only known once the stage meets its input. Elements of
//! borrowed slices are references; elements of owned vectors and numeric
//! ranges are values.
//!
//! # Examples
//!
//! ```rust
//! use lazyrange::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let result: Vec<i32> = (&data
//!     | filter(|value: &i32| value % 2 == 0)
//!     | map(|value: &i32| value * 10)
//!     | take(2))
//!     .collect();
//! assert_eq!(result, vec![20, 40]);
//! ```

mod boxed;
mod cache_latest;
mod chain;
mod enumerate;
mod filter;
mod filter_map;
mod flat_map;
mod generate;
mod iterate;
mod map;
mod narrow;
mod numeric;
mod owned;
mod reverse;
mod stride;
mod take;
mod take_while;
mod terminal;
mod zip;

pub use boxed::{BoxedCursor, BoxedStage, Iterable, boxed};
pub use cache_latest::{CacheLatestCursor, CacheLatestStage, cache_latest};
pub use chain::{ChainCursor, ChainStage, chain, chain_with};
pub use enumerate::{EnumerateCursor, EnumerateStage, enumerate, enumerate_from};
pub use filter::{FilterCursor, FilterStage, drop_if, filter, take_if};
pub use filter_map::{FilterMapCursor, FilterMapStage, filter_map, transform_maybe};
pub use flat_map::{
    FlatMapCursor, FlatMapStage, FlattenStage, Passthrough, flat_map, flatten, join, transform_join,
};
pub use generate::{GenerateCursor, generate};
pub use iterate::{IterateCursor, IterateStage, iterate};
pub use map::{MapCursor, MapStage, map, transform};
pub use narrow::{
    FromBack, FromBothEnds, FromFront, Keep, KeepWhile, Narrow, Skip, SkipWhile, drop,
    drop_last, drop_last_until, drop_last_while, drop_until, drop_while, narrow_back,
    narrow_both, take_last, take_last_until, take_last_while, trim, trim_until, trim_while,
};
pub use numeric::{
    Numeric, NumericCursor, NumericPosition, RepeatCursor, RepeatPosition, iota, iota_to, repeat,
};
pub use owned::{OwningCursor, OwningPosition, owned};
pub use reverse::{ReverseCursor, ReverseStage, reverse, reversed, unreverse};
pub use stride::{StrideCursor, StrideStage, stride};
pub use take::{TakeCursor, TakeStage, take};
pub use take_while::{TakeWhileCursor, TakeWhileStage, take_until, take_while};
pub use terminal::{CopyStage, ForEachStage, FrontStage, copy, for_each, front};
pub use zip::{
    AdjacentStage, AdjacentTransformStage, IntoZip, ZipCursor, ZipItem, adjacent,
    adjacent_transform, zip, zip_transform,
};

/// Panics for a dereference at the end of a range.
#[cold]
#[track_caller]
pub(crate) fn past_end(adaptor: &'static str) -> ! {
    panic!("{adaptor}: dereferenced past the end of the range")
}
