//! Receiver binding.

use crate::callable::{ArgumentList, Callable};
use crate::sequence::SharedSequence;

/// A callable whose receiver is fixed to an owner.
///
/// Created by [`method`] and [`push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method<O, F> {
    owner: O,
    function: F,
}

/// Fixes the receiver of `function` to `owner`.
///
/// Unlike every other combinator, the result does not forward the receiver
/// it is invoked with; `function` always sees `owner`.
///
/// # Examples
///
/// ```
/// use pointfree::binding::method;
/// use pointfree::callable::{Callable, Invoke, receiving};
///
/// struct Account { balance: i64 }
///
/// let balance_after = receiving(|account: &Account, amount: i64| account.balance + amount);
/// let deposit = method(Account { balance: 100 }, balance_after);
///
/// assert_eq!(deposit.invoke((50,)), 150);
/// assert_eq!(deposit.call_with(&Account { balance: -1 }, (50,)), 150);
/// ```
#[inline]
pub const fn method<O, F>(owner: O, function: F) -> Method<O, F> {
    Method { owner, function }
}

impl<O, F> Method<O, F> {
    /// Returns the fixed receiver.
    #[inline]
    pub const fn owner(&self) -> &O {
        &self.owner
    }
}

impl<C, O, F, Args> Callable<C, Args> for Method<O, F>
where
    C: ?Sized,
    F: Callable<O, Args>,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: Args) -> Self::Output {
        self.function.call_with(&self.owner, arguments)
    }
}

/// The append-to-end operation of a [`SharedSequence`].
///
/// Invoked on a shared sequence, it appends every argument in order and
/// returns the new length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Append;

impl<T, Args> Callable<SharedSequence<T>, Args> for Append
where
    Args: ArgumentList<Item = T>,
{
    type Output = usize;

    fn call_with(&self, receiver: &SharedSequence<T>, arguments: Args) -> usize {
        let mut sequence = receiver.borrow_mut();
        for element in arguments.into_vec() {
            sequence.push(element);
        }
        sequence.len()
    }
}

/// Binds the append operation of `sequence` to that sequence.
///
/// The returned callable shares the sequence with the caller, so appends are
/// visible through every handle.
///
/// # Panics
///
/// Invoking the result panics if the sequence is currently borrowed, for
/// example from inside a [`for_`](crate::sequence::for_) over a borrow of the
/// same sequence. Traverse with [`for_shared`](crate::sequence::for_shared)
/// to append while iterating.
///
/// # Examples
///
/// ```
/// use pointfree::binding::push;
/// use pointfree::callable::Invoke;
/// use pointfree::sequence::{Sequence, shared};
///
/// let numbers = shared(Sequence::from(vec![1]));
/// let append = push(&numbers);
///
/// assert_eq!(append.invoke((2, 3)), 3);
/// assert_eq!(*numbers.borrow(), Sequence::from(vec![1, 2, 3]));
/// ```
#[inline]
pub fn push<T>(sequence: &SharedSequence<T>) -> Method<SharedSequence<T>, Append> {
    method(SharedSequence::clone(sequence), Append)
}
