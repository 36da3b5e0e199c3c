//! Application primitives.
//!
//! The smallest building blocks: invoking a callable with an explicit
//! argument list, collecting an argument list, identity, constants and
//! negation.
//!
//! # Overview
//!
//! - [`apply`] / [`apply_with`]: invoke a callable with an argument list
//! - [`argv`] / [`Argv`]: collect an argument list into a `Vec`
//! - [`itself`]: the identity function
//! - [`value`], [`true_`], [`false_`]: constant producers
//! - [`not`], [`Not`], [`truthy`], [`ToBoolean`]: truthiness
//!
//! # Examples
//!
//! ```
//! use pointfree::application::{apply, argv, itself, value};
//! use pointfree::callable::Invoke;
//!
//! fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
//!
//! assert_eq!(apply(&subtract, (10, 4)), 6);
//! assert_eq!(argv((1, 2, 3)), vec![1, 2, 3]);
//! assert_eq!(itself("same"), "same");
//! assert_eq!(value(7).invoke(()), 7);
//! ```

mod truthy;

pub use truthy::{Not, ToBoolean, Truthy, not, truthy};

use crate::callable::{ArgumentList, Callable};

/// Invokes `function` with `arguments` and the unit receiver.
///
/// The argument list is passed through exactly; nothing is defaulted or
/// reordered.
#[inline]
pub fn apply<F, Args>(function: &F, arguments: Args) -> F::Output
where
    F: Callable<(), Args>,
{
    apply_with(&(), function, arguments)
}

/// Invokes `function` on `receiver` with `arguments`.
///
/// # Examples
///
/// ```
/// use pointfree::application::apply_with;
/// use pointfree::callable::receiving;
///
/// let greet = receiving(|name: &str, greeting: &str| format!("{greeting}, {name}"));
///
/// assert_eq!(apply_with("Ada", &greet, ("Hello",)), "Hello, Ada");
/// ```
#[inline]
pub fn apply_with<C, F, Args>(receiver: &C, function: &F, arguments: Args) -> F::Output
where
    C: ?Sized,
    F: Callable<C, Args>,
{
    function.call_with(receiver, arguments)
}

/// Collects an argument list into a `Vec`, preserving order.
#[inline]
pub fn argv<Args: ArgumentList>(arguments: Args) -> Vec<Args::Item> {
    arguments.into_vec()
}

/// The callable form of [`argv`].
///
/// Accepts any [`ArgumentList`], so `compose(f, Argv)` hands `f` the whole
/// invocation as one `Vec` (see [`collect`](crate::composition::collect)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argv;

impl<C, Args> Callable<C, Args> for Argv
where
    C: ?Sized,
    Args: ArgumentList,
{
    type Output = Vec<Args::Item>;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: Args) -> Self::Output {
        argv(arguments)
    }
}

/// Returns `value` unchanged.
#[inline]
pub const fn itself<T>(value: T) -> T {
    value
}

/// A callable that always produces the same value.
///
/// Created by [`value`], [`true_`] and [`false_`]. It accepts any argument
/// list and ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Value<T> {
    value: T,
}

/// Creates a callable that always returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::application::value;
/// use pointfree::callable::Invoke;
///
/// let always_answer = value(String::from("42"));
///
/// assert_eq!(always_answer.invoke(()), "42");
/// assert_eq!(always_answer.invoke((1, 2)), "42");
/// ```
#[inline]
pub const fn value<T>(value: T) -> Value<T> {
    Value { value }
}

/// A callable that always returns `true`.
#[inline]
pub const fn true_() -> Value<bool> {
    value(true)
}

/// A callable that always returns `false`.
#[inline]
pub const fn false_() -> Value<bool> {
    value(false)
}

impl<C, Args, T> Callable<C, Args> for Value<T>
where
    C: ?Sized,
    T: Clone,
{
    type Output = T;

    #[inline]
    fn call_with(&self, _receiver: &C, _arguments: Args) -> T {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{Invoke, receiving};

    #[test]
    fn test_apply_passes_arguments_in_order() {
        let pair = |first: char, second: char| format!("{first}{second}");
        assert_eq!(apply(&pair, ('a', 'b')), "ab");
    }

    #[test]
    fn test_apply_with_forwards_receiver() {
        let read = receiving(|receiver: &i32| *receiver);
        assert_eq!(apply_with(&9, &read, ()), 9);
    }

    #[test]
    fn test_argv_callable_with_vec() {
        assert_eq!(Argv.invoke(vec!["x", "y"]), vec!["x", "y"]);
    }

    #[test]
    fn test_boolean_constants() {
        assert!(true_().invoke(()));
        assert!(!false_().invoke(()));
    }

    #[test]
    fn test_value_captures_at_construction() {
        let mut source = vec![1, 2];
        let constant = value(source.clone());
        source.push(3);
        assert_eq!(constant.invoke(()), vec![1, 2]);
    }
}
