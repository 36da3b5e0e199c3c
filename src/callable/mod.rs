//! The calling convention shared by every combinator.
//!
//! A combinator is anything that can be invoked with a receiver and a
//! positional argument list. Dynamic languages thread the receiver implicitly;
//! here it is an explicit `&C` parameter that every wrapping combinator hands
//! on to the callables it wraps.
//!
//! # Overview
//!
//! - [`Callable`]: the invocation trait, `call_with(&receiver, arguments)`
//! - [`Invoke`]: `invoke(arguments)` for callables used with the unit receiver
//! - [`receiving`]: adapts a closure that wants to see the receiver
//! - [`variadic`]: adapts a closure that takes the whole argument list
//! - [`ArgumentList`]: homogeneous argument lists (tuples, arrays, `Vec`)
//!
//! Every plain `Fn` of arity 0 through 6 is a [`Callable`] for any receiver.
//! Its argument list is the tuple of its parameters, and the receiver is
//! ignored.
//!
//! # Examples
//!
//! ```
//! use pointfree::callable::{Callable, Invoke, receiving};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(add.invoke((2, 3)), 5);
//!
//! struct Scale { factor: i32 }
//!
//! let scaled = receiving(|scale: &Scale, value: i32| value * scale.factor);
//! assert_eq!(scaled.call_with(&Scale { factor: 10 }, (4,)), 40);
//! ```

mod arguments;

pub use arguments::{ArgumentList, TakeFirst, TakeLast, TakeSecond, TakeThird};

/// A value that can be invoked with a receiver and an argument list.
///
/// `C` is the receiver type and `Args` the argument list, usually a tuple
/// whose elements are the positional arguments. A single type may be callable
/// with several argument lists; combinators pick the one their caller uses.
///
/// # Type Parameters
///
/// * `C` - The receiver the call is made on
/// * `Args` - The positional argument list
pub trait Callable<C: ?Sized, Args> {
    /// The value produced by the call.
    type Output;

    /// Invokes the callable on `receiver` with `arguments`.
    fn call_with(&self, receiver: &C, arguments: Args) -> Self::Output;
}

/// Invocation with the unit receiver.
///
/// Blanket-implemented for every [`Callable`] over `()`, so plain pipelines
/// never have to spell out a receiver.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::composition::compose;
///
/// let composed = compose(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(composed.invoke((5,)), 11);
/// ```
pub trait Invoke<Args>: Callable<(), Args> {
    /// Invokes the callable with the unit receiver.
    #[inline]
    fn invoke(&self, arguments: Args) -> <Self as Callable<(), Args>>::Output {
        self.call_with(&(), arguments)
    }
}

impl<F, Args> Invoke<Args> for F where F: Callable<(), Args> + ?Sized {}

macro_rules! impl_callable_for_functions {
    ($(($($argument:ident: $type:ident),*)),* $(,)?) => {
        $(
            impl<C, F, R, $($type),*> Callable<C, ($($type,)*)> for F
            where
                C: ?Sized,
                F: Fn($($type),*) -> R,
            {
                type Output = R;

                #[inline]
                fn call_with(&self, _receiver: &C, ($($argument,)*): ($($type,)*)) -> R {
                    self($($argument),*)
                }
            }
        )*
    };
}

impl_callable_for_functions!(
    (),
    (first: A1),
    (first: A1, second: A2),
    (first: A1, second: A2, third: A3),
    (first: A1, second: A2, third: A3, fourth: A4),
    (first: A1, second: A2, third: A3, fourth: A4, fifth: A5),
    (first: A1, second: A2, third: A3, fourth: A4, fifth: A5, sixth: A6),
);

/// A closure that receives the receiver as its first parameter.
///
/// Created by [`receiving`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receiving<F> {
    function: F,
}

/// Adapts `function` so that it is called with the receiver in front of its
/// positional arguments.
///
/// The receiver is whatever the surrounding call forwarded: the receiver of
/// the outermost `call_with`, or the owner fixed by
/// [`method`](crate::binding::method).
///
/// # Examples
///
/// ```
/// use pointfree::callable::{Callable, receiving};
/// use pointfree::binding::bind1st;
///
/// struct Offset(i32);
///
/// let shifted_sum = receiving(|offset: &Offset, lhs: i32, rhs: i32| lhs + rhs + offset.0);
/// let add_ten = bind1st(shifted_sum, 10);
///
/// assert_eq!(add_ten.call_with(&Offset(100), (1,)), 111);
/// ```
#[inline]
pub const fn receiving<F>(function: F) -> Receiving<F> {
    Receiving { function }
}

macro_rules! impl_callable_for_receiving {
    ($(($($argument:ident: $type:ident),*)),* $(,)?) => {
        $(
            impl<C, F, R, $($type),*> Callable<C, ($($type,)*)> for Receiving<F>
            where
                C: ?Sized,
                F: Fn(&C, $($type),*) -> R,
            {
                type Output = R;

                #[inline]
                fn call_with(&self, receiver: &C, ($($argument,)*): ($($type,)*)) -> R {
                    (self.function)(receiver, $($argument),*)
                }
            }
        )*
    };
}

impl_callable_for_receiving!(
    (),
    (first: A1),
    (first: A1, second: A2),
    (first: A1, second: A2, third: A3),
    (first: A1, second: A2, third: A3, fourth: A4),
    (first: A1, second: A2, third: A3, fourth: A4, fifth: A5),
);

/// A closure that takes its whole argument list as one `Vec`.
///
/// Created by [`variadic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variadic<F> {
    function: F,
}

/// Adapts `function` to accept any [`ArgumentList`], collected into a `Vec`.
///
/// This is the spread-call counterpart of a positional function: invoking a
/// variadic callable with `vec![a, b, c]` or `(a, b, c)` passes all three
/// values.
///
/// # Examples
///
/// ```
/// use pointfree::callable::{Invoke, variadic};
///
/// let sum = variadic(|values: Vec<i32>| values.iter().sum::<i32>());
///
/// assert_eq!(sum.invoke((1, 2, 3)), 6);
/// assert_eq!(sum.invoke(vec![4, 5]), 9);
/// assert_eq!(sum.invoke(Vec::new()), 0);
/// ```
#[inline]
pub const fn variadic<F>(function: F) -> Variadic<F> {
    Variadic { function }
}

impl<C, Args, F, R> Callable<C, Args> for Variadic<F>
where
    C: ?Sized,
    Args: ArgumentList,
    F: Fn(Vec<Args::Item>) -> R,
{
    type Output = R;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: Args) -> R {
        (self.function)(arguments.into_vec())
    }
}
