//! Sparse sequences and their traversal.
//!
//! A [`Sequence`] is an ordered list of slots, each either holding an element
//! or being a *hole*. Holes are not elements: traversal skips them entirely.
//!
//! # Overview
//!
//! - [`Sequence`]: the sparse, index-addressed container
//! - [`list`]: a new empty sequence
//! - [`shared`] / [`SharedSequence`]: a sequence shared between handles, as
//!   used by [`push`](crate::binding::push)
//! - [`for_`] / [`for_with`]: visit every present element for effect
//! - [`map`] / [`map_with`]: transform present elements, keeping positions
//! - [`map_compact`] / [`map_compact_with`]: transform present elements into
//!   a dense `Vec`
//! - [`for_shared`] / [`map_shared`]: traverse a [`SharedSequence`] whose
//!   callback may append to it
//!
//! # Callbacks
//!
//! A traversal callback is any [`Callable`](crate::callable::Callable) taking
//! `(element)`, `(element, index)` or `(element, index, sequence)`. Elements
//! are passed by value (cloned); the sequence is passed by reference. Plain
//! traversal never modifies it.
//!
//! # Examples
//!
//! ```
//! use pointfree::sequence::{Sequence, map, map_compact};
//!
//! let sparse = Sequence::from_slots(vec![Some(1), None, Some(3)]);
//!
//! let doubled = map(|n: i32| n * 2, &sparse);
//! assert_eq!(doubled.slots(), &[Some(2), None, Some(6)]);
//!
//! let positions = map_compact(|n: i32, index: usize| (index, n), &sparse);
//! assert_eq!(positions, vec![(0, 1), (2, 3)]);
//! ```

mod callback;
mod iteration;

pub use callback::{ElementAndIndex, ElementCallback, ElementIndexAndSequence, ElementOnly};
pub use iteration::{
    for_, for_shared, for_shared_with, for_with, map, map_compact, map_compact_with, map_shared,
    map_shared_with, map_with,
};

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::Truthy;
use crate::projection::{Length, Member};

/// An ordered, index-addressed collection that may contain holes.
///
/// The length counts every slot, holes included, like the `length` of a
/// sparse array. Writing past the end with [`set`](Sequence::set) grows the
/// sequence and fills the gap with holes; [`remove`](Sequence::remove) turns
/// an element back into a hole without shifting anything.
///
/// # Examples
///
/// ```
/// use pointfree::sequence::Sequence;
///
/// let mut sequence = Sequence::new();
/// sequence.push('a');
/// sequence.set(3, 'd');
///
/// assert_eq!(sequence.len(), 4);
/// assert_eq!(sequence.present_len(), 2);
/// assert!(sequence.contains_index(3));
/// assert!(!sequence.contains_index(1));
/// assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![(0, &'a'), (3, &'d')]);
/// ```
///
/// With the `serde` feature, a sequence serializes as its length plus the
/// `(index, element)` pairs of its present slots, so holes stay distinct from
/// elements that are themselves empty:
///
/// ```json
/// {"length": 3, "elements": [[0, "a"], [2, "c"]]}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
}

/// A sequence shared between several handles.
pub type SharedSequence<T> = Rc<RefCell<Sequence<T>>>;

/// Returns a new empty sequence.
#[inline]
pub const fn list<T>() -> Sequence<T> {
    Sequence::new()
}

/// Wraps `sequence` for shared mutation.
#[inline]
pub fn shared<T>(sequence: Sequence<T>) -> SharedSequence<T> {
    Rc::new(RefCell::new(sequence))
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a sequence from explicit slots; `None` marks a hole.
    #[inline]
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Creates a sequence of `length` holes.
    pub fn holes(length: usize) -> Self {
        Self::from_slots(std::iter::repeat_with(|| None).take(length))
    }

    /// Returns the number of slots, holes included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the sequence has no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots holding an element.
    pub fn present_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if `index` holds an element.
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns the element at `index`, or `None` for a hole or an index past
    /// the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns every slot in order.
    #[inline]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Appends `element` after the last slot and returns the new length.
    pub fn push(&mut self, element: T) -> usize {
        self.slots.push(Some(element));
        self.slots.len()
    }

    /// Appends a hole and returns the new length.
    pub fn push_hole(&mut self) -> usize {
        self.slots.push(None);
        self.slots.len()
    }

    /// Stores `element` at `index`, returning what was there.
    ///
    /// Indices past the end grow the sequence; the slots in between become
    /// holes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `usize::MAX`, since no length can cover it.
    pub fn set(&mut self, index: usize, element: T) -> Option<T> {
        if index >= self.slots.len() {
            let Some(length) = index.checked_add(1) else {
                panic!("sequence index {index} leaves no room for a slot");
            };
            self.slots.resize_with(length, || None);
        }
        self.slots[index].replace(element)
    }

    /// Turns the slot at `index` into a hole, returning its element.
    ///
    /// The length does not change.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Iterates over present elements in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|element| (index, element)))
    }

    /// Returns the indices of every hole, in ascending order.
    pub fn hole_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
            .collect()
    }

    /// Consumes the sequence and returns its slots.
    #[inline]
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }

    /// Consumes the sequence and returns its present elements in order,
    /// dropping the holes.
    pub fn into_present(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_slots(elements.into_iter().map(Some))
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_slots(elements.into_iter().map(Some))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_slots(iterator.into_iter().map(Some))
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.slots.extend(iterator.into_iter().map(Some));
    }
}

impl<T: Clone> Member<usize> for Sequence<T> {
    type Output = Option<T>;

    #[inline]
    fn member(&self, key: usize) -> Option<T> {
        self.get(key).cloned()
    }
}

impl<T> Member<Length> for Sequence<T> {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.len()
    }
}

impl<T> Truthy for Sequence<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Sequence", 2)?;
        state.serialize_field("length", &self.len())?;
        state.serialize_field("elements", &PresentElements(self))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
struct PresentElements<'a, T>(&'a Sequence<T>);

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PresentElements<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.present_len()))?;
        for entry in self.0.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Sequence", deny_unknown_fields)]
struct SparseForm<T> {
    length: usize,
    elements: Vec<(usize, T)>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let SparseForm { length, elements } = SparseForm::deserialize(deserializer)?;
        let mut sequence = Self::holes(length);
        for (index, element) in elements {
            if index >= length {
                return Err(D::Error::custom(format_args!(
                    "element index {index} out of range for length {length}"
                )));
            }
            if sequence.set(index, element).is_some() {
                return Err(D::Error::custom(format_args!(
                    "duplicate element index {index}"
                )));
            }
        }
        Ok(sequence)
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(SharedSequence<i32>: Send, Sync);
