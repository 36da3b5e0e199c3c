//! Projection and selection.
//!
//! Two kinds of extraction are provided. *Selection* reads a property or
//! element of a single value ([`select`], [`member`], [`size`]). *Projection*
//! picks one positional argument out of an invocation ([`project`],
//! [`first`], [`second`], [`third`], [`last`]).
//!
//! # Examples
//!
//! ```
//! use pointfree::callable::Invoke;
//! use pointfree::projection::{last, project, select, size};
//!
//! let words = vec!["alpha", "beta", "gamma"];
//!
//! assert_eq!(select(1_usize).invoke((&words,)), Some("beta"));
//! assert_eq!(size().invoke((&words,)), 3);
//! assert_eq!(project(2).invoke((10, 20, 30)), 30);
//! assert_eq!(last().invoke((1, "two", 3.5)), 3.5);
//! ```

mod member;

pub use member::{Length, Member, MemberOf, member, size};

use crate::callable::{ArgumentList, Callable, TakeFirst, TakeLast, TakeSecond, TakeThird};

/// A unary callable reading `argument[key]`.
///
/// Created by [`select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Select<K> {
    key: K,
}

/// Creates a callable that reads `key` out of its single argument.
///
/// Lookup goes through [`Member`]: indices and map keys yield an `Option`,
/// [`Length`] yields the length.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use pointfree::callable::Invoke;
/// use pointfree::projection::select;
///
/// let ages = HashMap::from([("ada", 36), ("alan", 41)]);
///
/// assert_eq!(select("ada").invoke((&ages,)), Some(36));
/// assert_eq!(select("grace").invoke((&ages,)), None);
/// ```
#[inline]
pub const fn select<K>(key: K) -> Select<K> {
    Select { key }
}

impl<C, O, K> Callable<C, (O,)> for Select<K>
where
    C: ?Sized,
    O: Member<K>,
    K: Clone,
{
    type Output = O::Output;

    #[inline]
    fn call_with(&self, _receiver: &C, (object,): (O,)) -> Self::Output {
        object.member(self.key.clone())
    }
}

/// A variadic callable returning the argument at a fixed position.
///
/// Created by [`project`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Project {
    index: usize,
}

/// Creates a callable returning the argument at `index`, ignoring the rest.
///
/// Works on any [`ArgumentList`]; for tuples of mixed types use [`first`],
/// [`second`], [`third`] or [`last`].
///
/// # Panics
///
/// Invoking the result with `index` or fewer arguments panics. Use
/// [`try_project`] when the arity is not known in advance.
#[inline]
pub const fn project(index: usize) -> Project {
    Project { index }
}

impl Project {
    /// Returns the projected position.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<C, Args> Callable<C, Args> for Project
where
    C: ?Sized,
    Args: ArgumentList,
{
    type Output = Args::Item;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: Args) -> Self::Output {
        let arity = arguments.arity();
        match arguments.into_nth(self.index) {
            Some(argument) => argument,
            None => panic!(
                "project index {} out of range for {arity} arguments",
                self.index
            ),
        }
    }
}

/// A variadic callable returning the argument at a fixed position, if any.
///
/// Created by [`try_project`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TryProject {
    index: usize,
}

/// Like [`project`], yielding `None` instead of panicking when there are too
/// few arguments.
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::projection::try_project;
///
/// assert_eq!(try_project(1).invoke(vec!['a', 'b']), Some('b'));
/// assert_eq!(try_project(2).invoke(vec!['a', 'b']), None);
/// ```
#[inline]
pub const fn try_project(index: usize) -> TryProject {
    TryProject { index }
}

impl TryProject {
    /// Returns the projected position.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<C, Args> Callable<C, Args> for TryProject
where
    C: ?Sized,
    Args: ArgumentList,
{
    type Output = Option<Args::Item>;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: Args) -> Self::Output {
        arguments.into_nth(self.index)
    }
}

macro_rules! define_positional {
    ($(#[$attribute:meta])* $name:ident, $constructor:ident, $take:ident, $method:ident) => {
        $(#[$attribute])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        #[doc = concat!("Returns [`", stringify!($name), "`].")]
        #[inline]
        pub const fn $constructor() -> $name {
            $name
        }

        impl<C, Args> Callable<C, Args> for $name
        where
            C: ?Sized,
            Args: $take,
        {
            type Output = Args::Output;

            #[inline]
            fn call_with(&self, _receiver: &C, arguments: Args) -> Self::Output {
                arguments.$method()
            }
        }
    };
}

define_positional!(
    /// Returns the first argument of any invocation, whatever its arity.
    First, first, TakeFirst, take_first
);

define_positional!(
    /// Returns the second argument of any invocation of two or more
    /// arguments.
    Second, second, TakeSecond, take_second
);

define_positional!(
    /// Returns the third argument of any invocation of three or more
    /// arguments.
    Third, third, TakeThird, take_third
);

define_positional!(
    /// Returns the last argument of any invocation, whatever its arity.
    ///
    /// `last()` invoked with `(10, 20, 30)` returns `30`, and with `(5,)`
    /// returns `5`.
    Last, last, TakeLast, take_last
);
