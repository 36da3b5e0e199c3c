//! Truthiness.
//!
//! Conditions and negation in this crate are not restricted to `bool`. A
//! value is truthy unless it is `false`, a numeric zero, `NaN`, an empty
//! string, `None` or `()`. Collections are always truthy, empty or not.

use crate::callable::{Callable, TakeFirst};

/// Values with a boolean reading.
///
/// # Examples
///
/// ```
/// use pointfree::application::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!("f".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(Some(-3_i64).is_truthy());
/// assert!(!Some(0_u8).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true in a condition.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Returns the boolean reading of `value`.
#[inline]
pub fn truthy<T: Truthy>(value: T) -> bool {
    value.is_truthy()
}

/// Returns the logical negation of `value` under [`Truthy`] rules.
///
/// # Examples
///
/// ```
/// use pointfree::application::not;
///
/// assert!(not(0));
/// assert!(!not("text"));
/// assert!(not(false));
/// ```
#[inline]
pub fn not<T: Truthy>(value: T) -> bool {
    !value.is_truthy()
}

/// The callable form of [`truthy`]: converts its first argument to `bool`.
///
/// # Examples
///
/// ```
/// use pointfree::application::ToBoolean;
/// use pointfree::callable::Invoke;
///
/// assert!(ToBoolean.invoke(("f",)));
/// assert!(!ToBoolean.invoke((0,)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToBoolean;

impl<C, T> Callable<C, (T,)> for ToBoolean
where
    C: ?Sized,
    T: Truthy,
{
    type Output = bool;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: (T,)) -> bool {
        arguments.take_first().is_truthy()
    }
}

/// The callable form of [`not`].
///
/// # Examples
///
/// ```
/// use pointfree::application::Not;
/// use pointfree::callable::Invoke;
///
/// assert!(Not.invoke((0,)));
/// assert!(!Not.invoke((true,)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Not;

impl<C, T> Callable<C, (T,)> for Not
where
    C: ?Sized,
    T: Truthy,
{
    type Output = bool;

    #[inline]
    fn call_with(&self, _receiver: &C, arguments: (T,)) -> bool {
        not(arguments.take_first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, false)]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(0.5, true)]
    #[case(f64::INFINITY, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_collections_are_truthy_even_when_empty() {
        assert!(Vec::<i32>::new().is_truthy());
        assert!([0_u8; 0].as_slice().is_truthy());
    }

    #[test]
    fn test_unit_is_falsy() {
        assert!(not(()));
    }

    #[test]
    fn test_nested_option() {
        assert!(!Some(None::<i32>).is_truthy());
        assert!(Some(Some(1)).is_truthy());
    }
}
