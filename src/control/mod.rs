//! Imperative control.
//!
//! [`while_`] is the only unbounded construct in the crate: it loops for as
//! long as its condition reads as true. Both the condition and the body are
//! zero-argument callables, so any state they share lives in their
//! captures.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//!
//! use pointfree::control::while_;
//!
//! let remaining = Cell::new(3);
//! let steps = Cell::new(0);
//!
//! while_(
//!     || remaining.get(),
//!     || {
//!         remaining.set(remaining.get() - 1);
//!         steps.set(steps.get() + 1);
//!     },
//! );
//!
//! assert_eq!(steps.get(), 3);
//! ```

use crate::application::Truthy;
use crate::callable::Callable;

/// Invokes `body` for as long as `condition` returns a truthy value.
///
/// `condition` is invoked before every iteration, so `body` runs zero times
/// when it is falsy from the start. The loop never ends if `condition` never
/// becomes falsy.
#[inline]
pub fn while_<P, F>(condition: P, body: F)
where
    P: Callable<(), ()>,
    P::Output: Truthy,
    F: Callable<(), ()>,
{
    while_with(&(), condition, body);
}

/// Like [`while_`], invoking `condition` and `body` on `receiver`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
///
/// use pointfree::callable::receiving;
/// use pointfree::control::while_with;
///
/// let counter = Cell::new(0_u32);
///
/// while_with(
///     &counter,
///     receiving(|counter: &Cell<u32>| counter.get() < 5),
///     receiving(|counter: &Cell<u32>| counter.set(counter.get() + 1)),
/// );
///
/// assert_eq!(counter.get(), 5);
/// ```
pub fn while_with<C, P, F>(receiver: &C, condition: P, body: F)
where
    C: ?Sized,
    P: Callable<C, ()>,
    P::Output: Truthy,
    F: Callable<C, ()>,
{
    while condition.call_with(receiver, ()).is_truthy() {
        body.call_with(receiver, ());
    }
}
