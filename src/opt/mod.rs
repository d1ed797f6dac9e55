//! Pipeable combinators over [`Option`].
//!
//! Each function returns a [`Pipe`] stage that is applied with `|`:
//!
//! ```rust
//! use lazyrange::opt;
//!
//! let port = Some("8080")
//!     | opt::and_then(|text: &str| text.parse::<u16>().ok())
//!     | opt::filter(|port: &u16| *port >= 1024)
//!     | opt::value_or(80);
//! assert_eq!(port, 8080);
//! ```
//!
//! Callables given to `map`, `flat_map`, `filter` and `drop_if` are never
//! invoked on `None`. The operands of `value_or_else`, `or_else` and
//! `and_else` are only evaluated when they decide the result; their
//! `value_or`, `or_` and `and_` counterparts take an already computed value.

use crate::error::{Error, Result};
use crate::pipe::{Pipe, Stage};

/// Wraps a value in `Some`.
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

// =============================================================================
// Queries and transformations
// =============================================================================

/// The stage built by [`has_value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HasValue;

impl<T> Stage<Option<T>> for HasValue {
    type Output = bool;

    fn apply(self, input: Option<T>) -> bool {
        input.is_some()
    }
}

/// Returns `true` for `Some`.
pub const fn has_value() -> Pipe<HasValue> {
    Pipe::new(HasValue)
}

/// The stage built by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    function: F,
}

impl<T, U, F> Stage<Option<T>> for Map<F>
where
    F: FnOnce(T) -> U,
{
    type Output = Option<U>;

    fn apply(self, input: Option<T>) -> Option<U> {
        input.map(self.function)
    }
}

/// Applies `function` to the contained value.
///
/// # Examples
///
/// ```
/// use lazyrange::opt;
///
/// assert_eq!(Some(3) | opt::map(|value: i32| value * 2), Some(6));
/// assert_eq!(None | opt::map(|value: i32| value * 2), None);
/// ```
pub const fn map<F>(function: F) -> Pipe<Map<F>> {
    Pipe::new(Map { function })
}

/// Alias of [`map`].
pub const fn transform<F>(function: F) -> Pipe<Map<F>> {
    map(function)
}

/// The stage built by [`flat_map`].
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<F> {
    function: F,
}

impl<T, U, F> Stage<Option<T>> for FlatMap<F>
where
    F: FnOnce(T) -> Option<U>,
{
    type Output = Option<U>;

    fn apply(self, input: Option<T>) -> Option<U> {
        input.and_then(self.function)
    }
}

/// Applies `function`, which itself may produce nothing.
pub const fn flat_map<F>(function: F) -> Pipe<FlatMap<F>> {
    Pipe::new(FlatMap { function })
}

/// Alias of [`flat_map`].
pub const fn and_then<F>(function: F) -> Pipe<FlatMap<F>> {
    flat_map(function)
}

/// The stage built by [`filter`] and [`drop_if`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
    keep: bool,
}

impl<T, P> Stage<Option<T>> for Filter<P>
where
    P: FnOnce(&T) -> bool,
{
    type Output = Option<T>;

    fn apply(self, input: Option<T>) -> Option<T> {
        let keep = self.keep;
        input.filter(|value| (self.predicate)(value) == keep)
    }
}

/// Keeps the value only if `predicate` accepts it.
///
/// # Examples
///
/// ```
/// use lazyrange::opt;
///
/// assert_eq!(Some(4) | opt::filter(|value: &i32| value % 2 == 0), Some(4));
/// assert_eq!(Some(5) | opt::filter(|value: &i32| value % 2 == 0), None);
/// ```
pub const fn filter<P>(predicate: P) -> Pipe<Filter<P>> {
    Pipe::new(Filter { predicate, keep: true })
}

/// Alias of [`filter`].
pub const fn take_if<P>(predicate: P) -> Pipe<Filter<P>> {
    filter(predicate)
}

/// Discards the value if `predicate` accepts it.
pub const fn drop_if<P>(predicate: P) -> Pipe<Filter<P>> {
    Pipe::new(Filter { predicate, keep: false })
}

// =============================================================================
// Extraction
// =============================================================================

/// The stage built by [`value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Value;

impl<T> Stage<Option<T>> for Value {
    type Output = Result<T>;

    fn apply(self, input: Option<T>) -> Result<T> {
        input.ok_or_else(|| {
            tracing::debug!("value requested from an empty optional");
            Error::EmptyOptional
        })
    }
}

/// Extracts the value, or fails with [`Error::EmptyOptional`].
///
/// # Examples
///
/// ```
/// use lazyrange::{Error, opt};
///
/// assert_eq!(Some('x') | opt::value(), Ok('x'));
/// assert_eq!(None::<char> | opt::value(), Err(Error::EmptyOptional));
/// ```
pub const fn value() -> Pipe<Value> {
    Pipe::new(Value)
}

/// The stage built by [`value_or`].
#[derive(Debug, Clone, Copy)]
pub struct ValueOr<T> {
    default: T,
}

impl<T> Stage<Option<T>> for ValueOr<T> {
    type Output = T;

    fn apply(self, input: Option<T>) -> T {
        input.unwrap_or(self.default)
    }
}

/// Extracts the value, or returns `default`.
pub const fn value_or<T>(default: T) -> Pipe<ValueOr<T>> {
    Pipe::new(ValueOr { default })
}

/// The stage built by [`value_or_else`].
#[derive(Debug, Clone, Copy)]
pub struct ValueOrElse<F> {
    default: F,
}

impl<T, F> Stage<Option<T>> for ValueOrElse<F>
where
    F: FnOnce() -> T,
{
    type Output = T;

    fn apply(self, input: Option<T>) -> T {
        input.unwrap_or_else(self.default)
    }
}

/// Extracts the value, or computes one with `default`.
///
/// `default` only runs when the optional is empty.
pub const fn value_or_else<F>(default: F) -> Pipe<ValueOrElse<F>> {
    Pipe::new(ValueOrElse { default })
}

/// The stage built by [`value_or_error`].
#[derive(Debug, Clone)]
pub struct ValueOrError {
    message: String,
}

impl<T> Stage<Option<T>> for ValueOrError {
    type Output = Result<T>;

    fn apply(self, input: Option<T>) -> Result<T> {
        input.ok_or(Error::Message(self.message))
    }
}

/// Extracts the value, or fails with [`Error::Message`] carrying `message`.
///
/// # Examples
///
/// ```
/// use lazyrange::{Error, opt};
///
/// let missing = None::<u8> | opt::value_or_error("no port configured");
/// assert_eq!(missing, Err(Error::Message("no port configured".into())));
/// ```
pub fn value_or_error(message: impl Into<String>) -> Pipe<ValueOrError> {
    Pipe::new(ValueOrError {
        message: message.into(),
    })
}

// =============================================================================
// Disjunction and conjunction
// =============================================================================

/// The stage built by [`or_`].
#[derive(Debug, Clone, Copy)]
pub struct Or<T> {
    other: Option<T>,
}

impl<T> Stage<Option<T>> for Or<T> {
    type Output = Option<T>;

    fn apply(self, input: Option<T>) -> Option<T> {
        input.or(self.other)
    }
}

/// Returns the input if it has a value, `other` otherwise.
///
/// # Examples
///
/// ```
/// use lazyrange::opt;
///
/// assert_eq!(Some(3) | opt::or_(Some(9)), Some(3));
/// assert_eq!(None | opt::or_(Some(9)), Some(9));
/// ```
pub const fn or_<T>(other: Option<T>) -> Pipe<Or<T>> {
    Pipe::new(Or { other })
}

/// Alias of [`or_`].
pub const fn disjunction<T>(other: Option<T>) -> Pipe<Or<T>> {
    or_(other)
}

/// The stage built by [`or_else`].
#[derive(Debug, Clone, Copy)]
pub struct OrElse<F> {
    other: F,
}

impl<T, F> Stage<Option<T>> for OrElse<F>
where
    F: FnOnce() -> Option<T>,
{
    type Output = Option<T>;

    fn apply(self, input: Option<T>) -> Option<T> {
        input.or_else(self.other)
    }
}

/// Returns the input if it has a value, `other()` otherwise.
///
/// `other` only runs when the input is empty.
pub const fn or_else<F>(other: F) -> Pipe<OrElse<F>> {
    Pipe::new(OrElse { other })
}

/// The stage built by [`and_`].
#[derive(Debug, Clone, Copy)]
pub struct And<U> {
    other: Option<U>,
}

impl<T, U> Stage<Option<T>> for And<U> {
    type Output = Option<U>;

    fn apply(self, input: Option<T>) -> Option<U> {
        input.and(self.other)
    }
}

/// Returns `None` if the input is empty, `other` otherwise.
///
/// # Examples
///
/// ```
/// use lazyrange::opt;
///
/// assert_eq!(Some(3) | opt::and_(Some(9)), Some(9));
/// assert_eq!(None::<i32> | opt::and_(Some(9)), None);
/// ```
pub const fn and_<U>(other: Option<U>) -> Pipe<And<U>> {
    Pipe::new(And { other })
}

/// Alias of [`and_`].
pub const fn conjunction<U>(other: Option<U>) -> Pipe<And<U>> {
    and_(other)
}

/// The stage built by [`and_else`].
#[derive(Debug, Clone, Copy)]
pub struct AndElse<F> {
    other: F,
}

impl<T, U, F> Stage<Option<T>> for AndElse<F>
where
    F: FnOnce() -> Option<U>,
{
    type Output = Option<U>;

    fn apply(self, input: Option<T>) -> Option<U> {
        input.and_then(|_| (self.other)())
    }
}

/// Returns `None` if the input is empty, `other()` otherwise.
///
/// `other` only runs when the input has a value.
pub const fn and_else<F>(other: F) -> Pipe<AndElse<F>> {
    Pipe::new(AndElse { other })
}
