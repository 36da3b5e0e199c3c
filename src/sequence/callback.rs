//! Traversal callbacks of one, two or three parameters.
//!
//! The marker parameter of [`ElementCallback`] records which shape a callable
//! has, so the same traversal functions accept all three without the caller
//! naming it.

use crate::callable::Callable;

/// Marker for callbacks taking `(element)`.
#[derive(Debug)]
pub enum ElementOnly {}

/// Marker for callbacks taking `(element, index)`.
#[derive(Debug)]
pub enum ElementAndIndex {}

/// Marker for callbacks taking `(element, index, sequence)`.
#[derive(Debug)]
pub enum ElementIndexAndSequence {}

/// A callable usable as a traversal callback.
///
/// `S` is the type the sequence is handed over as (a shared reference), and
/// `Marker` one of [`ElementOnly`], [`ElementAndIndex`] or
/// [`ElementIndexAndSequence`]. Parameters the callable does not take are
/// not passed.
pub trait ElementCallback<C: ?Sized, T, S, Marker> {
    /// The value produced per element.
    type Output;

    /// Invokes the callback for the element at `index` of `sequence`.
    fn call_element(&self, receiver: &C, element: T, index: usize, sequence: S) -> Self::Output;
}

impl<C, T, S, F> ElementCallback<C, T, S, ElementOnly> for F
where
    C: ?Sized,
    F: Callable<C, (T,)>,
{
    type Output = F::Output;

    #[inline]
    fn call_element(&self, receiver: &C, element: T, _index: usize, _sequence: S) -> Self::Output {
        self.call_with(receiver, (element,))
    }
}

impl<C, T, S, F> ElementCallback<C, T, S, ElementAndIndex> for F
where
    C: ?Sized,
    F: Callable<C, (T, usize)>,
{
    type Output = F::Output;

    #[inline]
    fn call_element(&self, receiver: &C, element: T, index: usize, _sequence: S) -> Self::Output {
        self.call_with(receiver, (element, index))
    }
}

impl<C, T, S, F> ElementCallback<C, T, S, ElementIndexAndSequence> for F
where
    C: ?Sized,
    F: Callable<C, (T, usize, S)>,
{
    type Output = F::Output;

    #[inline]
    fn call_element(&self, receiver: &C, element: T, index: usize, sequence: S) -> Self::Output {
        self.call_with(receiver, (element, index, sequence))
    }
}
