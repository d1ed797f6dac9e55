//! Helper stages for building pipelines out of plain functions.
//!
//! - [`func`]: lifts a one-argument function into a stage
//! - [`tee`]: observes a value and passes it on unchanged
//! - [`identity`]: the stage that returns its input (the unit of `|`)

use super::{Pipe, Stage};

/// A stage that applies a plain function.
#[derive(Debug, Clone, Copy)]
pub struct Func<F>(F);

impl<In, F, B> Stage<In> for Func<F>
where
    F: FnOnce(In) -> B,
{
    type Output = B;

    fn apply(self, input: In) -> B {
        (self.0)(input)
    }
}

/// Lifts `function` into a pipeline stage.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let halve = func(|value: Option<i32>| value.filter(|inner| inner % 2 == 0).map(|inner| inner / 2));
/// assert_eq!(Some(8) | halve, Some(4));
/// assert_eq!(Some(7) | halve, None);
/// ```
pub const fn func<F>(function: F) -> Pipe<Func<F>> {
    Pipe::new(Func(function))
}

/// A stage that calls a function on a borrowed input and returns the input.
#[derive(Debug, Clone, Copy)]
pub struct Tee<F>(F);

impl<In, F> Stage<In> for Tee<F>
where
    F: FnOnce(&In),
{
    type Output = In;

    fn apply(self, input: In) -> In {
        (self.0)(&input);
        input
    }
}

/// Observes the value flowing through a pipeline without changing it.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let mut seen = 0;
/// let value = Some(3) | tee(|value: &Option<i32>| seen = value.unwrap_or_default());
/// assert_eq!(value, Some(3));
/// assert_eq!(seen, 3);
/// ```
pub const fn tee<F>(function: F) -> Pipe<Tee<F>> {
    Pipe::new(Tee(function))
}

/// The stage that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<In> Stage<In> for Identity {
    type Output = In;

    #[inline]
    fn apply(self, input: In) -> In {
        input
    }
}

/// Returns the identity stage.
///
/// `identity() | stage` and `stage | identity()` behave exactly like `stage`.
///
/// # Examples
///
/// ```
/// use lazyrange::prelude::*;
///
/// let data = [4, 5];
/// let collected: Vec<&i32> = (&data | identity()).collect();
/// assert_eq!(collected, vec![&4, &5]);
/// ```
pub const fn identity() -> Pipe<Identity> {
    Pipe::new(Identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn func_applies_function() {
        assert_eq!(func(|value: i32| value + 1).apply(41), 42);
    }

    #[rstest]
    fn func_accepts_consuming_closures() {
        let suffix = String::from("!");
        let stage = func(move |value: String| value + &suffix);
        assert_eq!(stage.apply(String::from("hi")), "hi!");
    }

    #[rstest]
    fn tee_passes_value_through() {
        let mut observed = Vec::new();
        let result = tee(|value: &Vec<i32>| observed.extend(value.iter().copied())).apply(vec![1, 2]);
        assert_eq!(result, vec![1, 2]);
        assert_eq!(observed, vec![1, 2]);
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    fn identity_returns_input(#[case] value: i32) {
        assert_eq!(identity().apply(value), value);
    }

    #[rstest]
    fn identity_is_unit_of_composition() {
        let stage = func(|value: i32| value * 3);
        assert_eq!((identity() | stage).apply(2), stage.apply(2));
        assert_eq!((stage | identity()).apply(2), stage.apply(2));
    }
}
