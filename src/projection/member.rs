//! Keyed and indexed member access.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::binding::{Bind2nd, bind2nd};
use crate::callable::Callable;

/// The `length` property key.
///
/// # Examples
///
/// ```
/// use pointfree::projection::{Length, member};
///
/// assert_eq!(member(&vec![1, 2, 3], Length), 3);
/// assert_eq!(member("héllo", Length), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Length;

/// Values with members addressable by a key of type `K`.
///
/// Positional keys (`usize`) and map keys return `Option`: `None` stands for
/// a missing member. The [`Length`] key returns the member count; for strings
/// this is the number of characters.
pub trait Member<K> {
    /// The member type.
    type Output;

    /// Returns the member at `key`.
    fn member(&self, key: K) -> Self::Output;
}

impl<O, K> Member<K> for &O
where
    O: Member<K> + ?Sized,
{
    type Output = O::Output;

    #[inline]
    fn member(&self, key: K) -> Self::Output {
        (**self).member(key)
    }
}

impl<T: Clone> Member<usize> for [T] {
    type Output = Option<T>;

    #[inline]
    fn member(&self, key: usize) -> Option<T> {
        self.get(key).cloned()
    }
}

impl<T> Member<Length> for [T] {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.len()
    }
}

impl<T: Clone> Member<usize> for Vec<T> {
    type Output = Option<T>;

    #[inline]
    fn member(&self, key: usize) -> Option<T> {
        self.as_slice().member(key)
    }
}

impl<T> Member<Length> for Vec<T> {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.len()
    }
}

impl<T: Clone, const N: usize> Member<usize> for [T; N] {
    type Output = Option<T>;

    #[inline]
    fn member(&self, key: usize) -> Option<T> {
        self.as_slice().member(key)
    }
}

impl<T, const N: usize> Member<Length> for [T; N] {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        N
    }
}

impl Member<usize> for str {
    type Output = Option<char>;

    #[inline]
    fn member(&self, key: usize) -> Option<char> {
        self.chars().nth(key)
    }
}

impl Member<Length> for str {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.chars().count()
    }
}

impl Member<usize> for String {
    type Output = Option<char>;

    #[inline]
    fn member(&self, key: usize) -> Option<char> {
        self.as_str().member(key)
    }
}

impl Member<Length> for String {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.as_str().member(Length)
    }
}

impl<Q, K, V, S> Member<&Q> for HashMap<K, V, S>
where
    Q: Hash + Eq + ?Sized,
    K: Borrow<Q> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Output = Option<V>;

    #[inline]
    fn member(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K, V, S> Member<Length> for HashMap<K, V, S> {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.len()
    }
}

impl<Q, K, V> Member<&Q> for BTreeMap<K, V>
where
    Q: Ord + ?Sized,
    K: Borrow<Q> + Ord,
    V: Clone,
{
    type Output = Option<V>;

    #[inline]
    fn member(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K, V> Member<Length> for BTreeMap<K, V> {
    type Output = usize;

    #[inline]
    fn member(&self, _key: Length) -> usize {
        self.len()
    }
}

/// Returns `object[key]`.
#[inline]
pub fn member<O, K>(object: &O, key: K) -> O::Output
where
    O: Member<K> + ?Sized,
{
    object.member(key)
}

/// The callable form of [`member`], taking `(object, key)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemberOf;

impl<C, O, K> Callable<C, (O, K)> for MemberOf
where
    C: ?Sized,
    O: Member<K>,
{
    type Output = O::Output;

    #[inline]
    fn call_with(&self, _receiver: &C, (object, key): (O, K)) -> Self::Output {
        object.member(key)
    }
}

/// A unary callable returning the length of its argument.
///
/// This is [`MemberOf`] with [`Length`] bound as the key.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::projection::size;
///
/// assert_eq!(size().invoke((&[1, 2, 3, 4],)), 4);
/// assert_eq!(size().invoke(("abc",)), 3);
/// ```
#[inline]
pub const fn size() -> Bind2nd<MemberOf, Length> {
    bind2nd(MemberOf, Length)
}
