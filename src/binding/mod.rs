//! Partial application and binding.
//!
//! This module fixes arguments or receivers of a callable ahead of time,
//! producing a new callable of smaller arity.
//!
//! # Overview
//!
//! - [`bind1st`]: fix the first argument of a binary callable
//! - [`bind2nd`]: fix the second argument of a binary callable
//! - [`bind`]: derive every argument from the full invocation through binders
//! - [`method`]: fix the receiver
//! - [`push`]: a shared sequence's append operation, bound to that sequence
//!
//! All bound values are captured when the combinator is built. They are
//! cloned on each call, so later changes to the caller's copies are not seen.
//!
//! # Laws
//!
//! - `bind1st(f, lhs)(rhs) == f(lhs, rhs)`
//! - `bind2nd(f, rhs)(lhs) == f(lhs, rhs)`
//!
//! # Examples
//!
//! ```
//! use pointfree::binding::{bind1st, bind2nd};
//! use pointfree::callable::Invoke;
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! let ten_over = bind1st(divide, 10.0);
//! let half = bind2nd(divide, 2.0);
//!
//! assert!((ten_over.invoke((4.0,)) - 2.5).abs() < f64::EPSILON);
//! assert!((half.invoke((9.0,)) - 4.5).abs() < f64::EPSILON);
//! ```

mod binders;
mod method;

pub use binders::{Bind, Binders, bind};
pub use method::{Append, Method, method, push};

use crate::callable::Callable;

/// A binary callable with its first argument fixed.
///
/// Created by [`bind1st`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bind1st<F, L> {
    function: F,
    lhs: L,
}

/// Fixes the first argument of `function`.
///
/// The result is unary: `bind1st(f, lhs)` called with `(rhs,)` calls `f` with
/// `(lhs, rhs)` on the same receiver.
#[inline]
pub const fn bind1st<F, L>(function: F, lhs: L) -> Bind1st<F, L> {
    Bind1st { function, lhs }
}

impl<C, F, L, A> Callable<C, (A,)> for Bind1st<F, L>
where
    C: ?Sized,
    F: Callable<C, (L, A)>,
    L: Clone,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, receiver: &C, (rhs,): (A,)) -> Self::Output {
        self.function.call_with(receiver, (self.lhs.clone(), rhs))
    }
}

/// A binary callable with its second argument fixed.
///
/// Created by [`bind2nd`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bind2nd<F, R> {
    function: F,
    rhs: R,
}

/// Fixes the second argument of `function`.
///
/// # Examples
///
/// ```
/// use pointfree::binding::bind2nd;
/// use pointfree::sequence::{Sequence, map};
///
/// fn pow(base: i64, exponent: u32) -> i64 { base.pow(exponent) }
///
/// let squares = map(bind2nd(pow, 2), &Sequence::from(vec![0, 1, 2, 3]));
/// assert_eq!(squares, Sequence::from(vec![0, 1, 4, 9]));
/// ```
#[inline]
pub const fn bind2nd<F, R>(function: F, rhs: R) -> Bind2nd<F, R> {
    Bind2nd { function, rhs }
}

impl<C, F, R, A> Callable<C, (A,)> for Bind2nd<F, R>
where
    C: ?Sized,
    F: Callable<C, (A, R)>,
    R: Clone,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, receiver: &C, (lhs,): (A,)) -> Self::Output {
        self.function.call_with(receiver, (lhs, self.rhs.clone()))
    }
}
