//! # lazyrange
//!
//! Lazy, composable sequence processing built on cursors.
//!
//! ## Overview
//!
//! A range is a pair of cursors. Adaptors wrap cursors in new cursors, so
//! a pipeline is a stack of small value types and no element is produced
//! until something pulls:
//!
//! - **Cursors**: three capability tiers ([`Cursor`](cursor::Cursor),
//!   [`Bidirectional`](cursor::Bidirectional),
//!   [`RandomAccess`](cursor::RandomAccess)) and a facade that derives the
//!   full contract from a minimal core
//! - **Ranges**: [`Range`](range::Range), which is also a standard iterator
//! - **Adaptors**: `map`, `filter`, `take`, `zip`, `chain`, `flat_map` and
//!   many more in [`seq`], each keeping the strongest capability it can
//! - **Pipes**: `range | stage` application and `stage | stage` composition
//! - **Algorithms**: searches whose result shape is picked by a return
//!   policy
//! - **Optionals**: pipeable combinators over [`Option`]
//!
//! ## Feature Flags
//!
//! - `algorithm`: Searching and reordering algorithms with return policies
//! - `opt`: Combinators over `Option`
//! - `parse`: Text parsing helpers
//! - `format`: Display helpers for ranges
//! - `full`: Enable all features (the default)
//!
//! ## Example
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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, the range value, the pipe machinery,
/// every adaptor in [`seq`], and the return policies. Combinators over
/// [`Option`] are reachable as `opt::...` to keep their names apart from the
/// range adaptors.
///
/// # Usage
///
/// ```rust
/// use lazyrange::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::{
        Bidirectional, Category, Cursor, Facade, RandomAccess, Seek, Seeker, SliceCursor,
    };
    pub use crate::error::Error;
    pub use crate::pipe::{Pipe, Stage, func, identity, tee};
    pub use crate::range::{IntoRange, Range};
    pub use crate::seq::*;

    #[cfg(feature = "algorithm")]
    pub use crate::algorithm::{
        DefaultPolicy, Found, ReturnBeginFound, ReturnBeginNext, ReturnBoth, ReturnFound,
        ReturnFoundEnd, ReturnFoundNext, ReturnNextEnd, ReturnOptFound, ReturnOptRef,
        ReturnPolicy, ReturnRef,
    };

    #[cfg(feature = "opt")]
    pub use crate::opt;
}

pub mod cursor;
pub mod error;
pub mod pipe;
pub mod range;
pub mod seq;

#[cfg(feature = "algorithm")]
pub mod algorithm;

#[cfg(feature = "opt")]
pub mod opt;

#[cfg(feature = "parse")]
pub mod parse;

#[cfg(feature = "format")]
pub mod format;

pub use error::{Error, Result};
