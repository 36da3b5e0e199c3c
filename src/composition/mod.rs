//! Function composition.
//!
//! This module chains callables so that the output of one feeds the input
//! of the next.
//!
//! # Overview
//!
//! - [`compose`]: right-to-left composition of two callables
//! - [`compose!`]: right-to-left composition of any number of callables
//! - [`collect`]: gather the whole argument list into one `Vec` argument
//! - [`spread`]: expand a single argument list into positional arguments
//! - [`negate`]: negate a predicate without changing its arity
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! Here `A` may be any argument list: `g` receives the complete invocation
//! and `f` receives `g`'s result as its only argument. Both are called on the
//! receiver of the composed call.
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(itself, f) == f`
//! - **Right Identity**: `compose(f, itself) == f`
//! - **Collect/Spread**: `spread(collect(f)) == f` on argument vectors

mod compose_macro;

use crate::application::{Argv, Not, apply_with};
use crate::callable::Callable;

/// Two callables chained right to left.
///
/// Created by [`compose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compose<F, G> {
    outer: F,
    inner: G,
}

/// Composes `outer` after `inner`.
///
/// `compose(f, g)` invoked with `arguments` calls `g` with `arguments` and
/// then `f` with `(g_result,)`, both on the caller's receiver.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::composition::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn sum(x: i32, y: i32) -> i32 { x + y }
///
/// let composed = compose(add_one, sum);
/// assert_eq!(composed.invoke((2, 3)), 6);
/// ```
#[inline]
pub const fn compose<F, G>(outer: F, inner: G) -> Compose<F, G> {
    Compose { outer, inner }
}

impl<C, Args, F, G> Callable<C, Args> for Compose<F, G>
where
    C: ?Sized,
    G: Callable<C, Args>,
    F: Callable<C, (G::Output,)>,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, receiver: &C, arguments: Args) -> Self::Output {
        let intermediate = self.inner.call_with(receiver, arguments);
        self.outer.call_with(receiver, (intermediate,))
    }
}

/// Wraps `function` so that it receives its caller's whole argument list as a
/// single `Vec`.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::composition::collect;
///
/// let count = collect(|values: Vec<&str>| values.len());
/// assert_eq!(count.invoke(("a", "b", "c")), 3);
/// ```
#[inline]
pub const fn collect<F>(function: F) -> Compose<F, Argv> {
    compose(function, Argv)
}

/// A callable that expands its single argument into an argument list.
///
/// Created by [`spread`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spread<F> {
    function: F,
}

/// Wraps `function` so that its one argument is used as the argument list.
///
/// The argument may be a tuple (positional arguments) or, for
/// [`variadic`](crate::callable::variadic) callables, a `Vec`.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::composition::spread;
///
/// fn area(width: u32, height: u32) -> u32 { width * height }
///
/// let area_of = spread(area);
/// assert_eq!(area_of.invoke(((3, 4),)), 12);
/// ```
#[inline]
pub const fn spread<F>(function: F) -> Spread<F> {
    Spread { function }
}

impl<C, Args, F> Callable<C, (Args,)> for Spread<F>
where
    C: ?Sized,
    F: Callable<C, Args>,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, receiver: &C, (arguments,): (Args,)) -> Self::Output {
        apply_with(receiver, &self.function, arguments)
    }
}

/// Negates the result of `predicate`.
///
/// The result accepts exactly the argument lists `predicate` accepts.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::composition::negate;
///
/// let is_even = |n: i32| n % 2 == 0;
/// let is_odd = negate(is_even);
///
/// assert!(is_odd.invoke((3,)));
/// assert!(!is_odd.invoke((4,)));
/// ```
#[inline]
pub const fn negate<P>(predicate: P) -> Compose<Not, P> {
    compose(Not, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::itself;
    use crate::callable::{Invoke, receiving, variadic};

    #[test]
    fn test_compose_applies_inner_first() {
        let append_a = |text: String| text + "a";
        let append_b = |text: String| text + "b";
        let composed = compose(append_a, append_b);
        assert_eq!(composed.invoke((String::new(),)), "ba");
    }

    #[test]
    fn test_compose_with_zero_argument_inner() {
        let composed = compose(|n: i32| n * 3, || 7);
        assert_eq!(composed.invoke(()), 21);
    }

    #[test]
    fn test_compose_identity() {
        let double = |n: i32| n * 2;
        assert_eq!(compose(itself::<i32>, double).invoke((4,)), 8);
        assert_eq!(compose(double, itself::<i32>).invoke((4,)), 8);
    }

    #[test]
    fn test_compose_forwards_receiver_to_both() {
        let add_offset = receiving(|offset: &i32, n: i32| n + *offset);
        let times_offset = receiving(|offset: &i32, n: i32| n * *offset);
        let composed = compose(add_offset, times_offset);
        assert_eq!(composed.call_with(&10, (2,)), 30);
    }

    #[test]
    fn test_spread_of_variadic() {
        let total = spread(variadic(|values: Vec<u8>| values.len()));
        assert_eq!(total.invoke((vec![1, 2, 3],)), 3);
    }

    #[test]
    fn test_spread_undoes_collect() {
        let first_of = collect(|values: Vec<i32>| values[0]);
        let roundtrip = spread(first_of);
        assert_eq!(roundtrip.invoke(((9, 8, 7),)), 9);
    }

    #[test]
    fn test_negate_truthy_result() {
        let length = |text: &str| text.len();
        let is_empty = negate(length);
        assert!(is_empty.invoke(("",)));
        assert!(!is_empty.invoke(("x",)));
    }
}
