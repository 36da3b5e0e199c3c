//! Traversal of present elements.

use super::{ElementCallback, Sequence, SharedSequence};

/// Invokes `function` for every present element of `sequence`, in ascending
/// index order, with the unit receiver.
///
/// Holes are skipped: `function` is not called for them at all. Results are
/// discarded; use a callable with interior mutability to collect effects.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
///
/// use pointfree::sequence::{Sequence, for_};
///
/// let sparse = Sequence::from_slots(vec![Some('a'), None, Some('c')]);
/// let visited = RefCell::new(Vec::new());
///
/// for_(&sparse, |element: char, index: usize| visited.borrow_mut().push((index, element)));
///
/// assert_eq!(visited.into_inner(), vec![(0, 'a'), (2, 'c')]);
/// ```
#[inline]
pub fn for_<'s, T, F, M>(sequence: &'s Sequence<T>, function: F)
where
    T: Clone,
    F: ElementCallback<(), T, &'s Sequence<T>, M>,
{
    for_with(&(), sequence, function);
}

/// Invokes `function` on `receiver` for every present element of `sequence`.
///
/// See [`for_`].
pub fn for_with<'s, C, T, F, M>(receiver: &C, sequence: &'s Sequence<T>, function: F)
where
    C: ?Sized,
    T: Clone,
    F: ElementCallback<C, T, &'s Sequence<T>, M>,
{
    for (index, element) in sequence.iter() {
        function.call_element(receiver, element.clone(), index, sequence);
    }
}

/// Builds a new sequence holding `function`'s result for every present
/// element, at the element's own index.
///
/// The output has the length of `sequence`, and holes stay holes.
/// `function` is never invoked for a hole.
///
/// # Examples
///
/// ```
/// use pointfree::sequence::{Sequence, map};
///
/// let sparse = Sequence::from_slots(vec![None, Some(2), None, Some(4)]);
/// let labelled = map(|n: i32, index: usize| format!("{index}:{n}"), &sparse);
///
/// assert_eq!(labelled.len(), 4);
/// assert_eq!(labelled.get(1).map(String::as_str), Some("1:2"));
/// assert_eq!(labelled.hole_indices(), vec![0, 2]);
/// ```
#[inline]
pub fn map<'s, T, F, M>(function: F, sequence: &'s Sequence<T>) -> Sequence<F::Output>
where
    T: Clone,
    F: ElementCallback<(), T, &'s Sequence<T>, M>,
{
    map_with(&(), function, sequence)
}

/// Like [`map`], invoking `function` on `receiver`.
pub fn map_with<'s, C, T, F, M>(
    receiver: &C,
    function: F,
    sequence: &'s Sequence<T>,
) -> Sequence<F::Output>
where
    C: ?Sized,
    T: Clone,
    F: ElementCallback<C, T, &'s Sequence<T>, M>,
{
    Sequence::from_slots(sequence.slots().iter().enumerate().map(|(index, slot)| {
        slot.as_ref().map(|element| {
            function.call_element(receiver, element.clone(), index, sequence)
        })
    }))
}

/// Collects `function`'s result for every present element into a dense
/// `Vec`, in ascending index order.
///
/// The output has one entry per present element; holes leave no gap.
///
/// # Examples
///
/// ```
/// use pointfree::sequence::{Sequence, map_compact};
///
/// let sparse = Sequence::from_slots(vec![None, Some(2), None, Some(4)]);
///
/// assert_eq!(map_compact(|n: i32| n * 10, &sparse), vec![20, 40]);
/// ```
#[inline]
pub fn map_compact<'s, T, F, M>(function: F, sequence: &'s Sequence<T>) -> Vec<F::Output>
where
    T: Clone,
    F: ElementCallback<(), T, &'s Sequence<T>, M>,
{
    map_compact_with(&(), function, sequence)
}

/// Like [`map_compact`], invoking `function` on `receiver`.
pub fn map_compact_with<'s, C, T, F, M>(
    receiver: &C,
    function: F,
    sequence: &'s Sequence<T>,
) -> Vec<F::Output>
where
    C: ?Sized,
    T: Clone,
    F: ElementCallback<C, T, &'s Sequence<T>, M>,
{
    sequence
        .iter()
        .map(|(index, element)| function.call_element(receiver, element.clone(), index, sequence))
        .collect()
}

// =============================================================================
// Shared Traversal
// =============================================================================

/// Invokes `function` for every present element of a shared sequence.
///
/// The sequence is borrowed only long enough to read each element, so the
/// callback may append to it (for example through
/// [`push`](crate::binding::push)). Only the slots present when traversal
/// starts are visited.
///
/// # Examples
///
/// ```
/// use pointfree::binding::push;
/// use pointfree::callable::Invoke;
/// use pointfree::sequence::{Sequence, for_shared, shared};
///
/// let numbers = shared(Sequence::from(vec![1, 2]));
/// let append = push(&numbers);
///
/// for_shared(&numbers, |n: i32| {
///     append.invoke((n * 10,));
/// });
///
/// assert_eq!(*numbers.borrow(), Sequence::from(vec![1, 2, 10, 20]));
/// ```
#[inline]
pub fn for_shared<'s, T, F, M>(sequence: &'s SharedSequence<T>, function: F)
where
    T: Clone,
    F: ElementCallback<(), T, &'s SharedSequence<T>, M>,
{
    for_shared_with(&(), sequence, function);
}

/// Like [`for_shared`], invoking `function` on `receiver`.
pub fn for_shared_with<'s, C, T, F, M>(receiver: &C, sequence: &'s SharedSequence<T>, function: F)
where
    C: ?Sized,
    T: Clone,
    F: ElementCallback<C, T, &'s SharedSequence<T>, M>,
{
    let length = sequence.borrow().len();
    for index in 0..length {
        let element = sequence.borrow().get(index).cloned();
        if let Some(element) = element {
            function.call_element(receiver, element, index, sequence);
        }
    }
}

/// Like [`map`], over a shared sequence the callback may append to.
///
/// The output has the length the sequence had when traversal started.
#[inline]
pub fn map_shared<'s, T, F, M>(function: F, sequence: &'s SharedSequence<T>) -> Sequence<F::Output>
where
    T: Clone,
    F: ElementCallback<(), T, &'s SharedSequence<T>, M>,
{
    map_shared_with(&(), function, sequence)
}

/// Like [`map_shared`], invoking `function` on `receiver`.
pub fn map_shared_with<'s, C, T, F, M>(
    receiver: &C,
    function: F,
    sequence: &'s SharedSequence<T>,
) -> Sequence<F::Output>
where
    C: ?Sized,
    T: Clone,
    F: ElementCallback<C, T, &'s SharedSequence<T>, M>,
{
    let length = sequence.borrow().len();
    Sequence::from_slots((0..length).map(|index| {
        let element = sequence.borrow().get(index).cloned();
        element.map(|element| function.call_element(receiver, element, index, sequence))
    }))
}
