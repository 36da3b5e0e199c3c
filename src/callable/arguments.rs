//! Argument lists.
//!
//! [`ArgumentList`] covers lists whose positions all share one type and whose
//! length may only be known at run time. The positional traits
//! ([`TakeFirst`], [`TakeSecond`], [`TakeThird`], [`TakeLast`]) work on
//! tuples of any element types, up to six positions.

/// An ordered argument list whose elements share one type.
///
/// Implemented for `Vec<T>`, `[T; N]` and homogeneous tuples of one to six
/// elements. The unit tuple has no element type; use `Vec::new()` or `[]` for
/// an empty list.
///
/// # Examples
///
/// ```
/// use pointfree::callable::ArgumentList;
///
/// assert_eq!((1, 2, 3).arity(), 3);
/// assert_eq!((1, 2, 3).into_vec(), vec![1, 2, 3]);
/// assert_eq!(["a", "b"].into_vec(), vec!["a", "b"]);
/// assert_eq!((1, 2, 3).into_nth(1), Some(2));
/// assert_eq!(vec!['x'].into_nth(1), None);
/// ```
pub trait ArgumentList {
    /// The type shared by every argument.
    type Item;

    /// Returns the number of arguments.
    fn arity(&self) -> usize;

    /// Collects the arguments, in order.
    fn into_vec(self) -> Vec<Self::Item>;

    /// Returns the argument at `index`, or `None` past the end.
    fn into_nth(self, index: usize) -> Option<Self::Item>;
}

impl<T> ArgumentList for Vec<T> {
    type Item = T;

    #[inline]
    fn arity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn into_vec(self) -> Vec<T> {
        self
    }

    #[inline]
    fn into_nth(self, index: usize) -> Option<T> {
        self.into_iter().nth(index)
    }
}

impl<T, const N: usize> ArgumentList for [T; N] {
    type Item = T;

    #[inline]
    fn arity(&self) -> usize {
        N
    }

    #[inline]
    fn into_vec(self) -> Vec<T> {
        Vec::from(self)
    }

    #[inline]
    fn into_nth(self, index: usize) -> Option<T> {
        self.into_iter().nth(index)
    }
}

macro_rules! item_type {
    ($ignored:ident) => {
        T
    };
}

macro_rules! impl_argument_list_for_tuples {
    ($(($($argument:ident),+)),+ $(,)?) => {
        $(
            impl<T> ArgumentList for ($(item_type!($argument),)+) {
                type Item = T;

                #[inline]
                fn arity(&self) -> usize {
                    [$(stringify!($argument)),+].len()
                }

                #[inline]
                fn into_vec(self) -> Vec<T> {
                    let ($($argument,)+) = self;
                    vec![$($argument),+]
                }

                #[inline]
                fn into_nth(self, index: usize) -> Option<T> {
                    let ($($argument,)+) = self;
                    [$($argument),+].into_iter().nth(index)
                }
            }
        )+
    };
}

impl_argument_list_for_tuples!(
    (first),
    (first, second),
    (first, second, third),
    (first, second, third, fourth),
    (first, second, third, fourth, fifth),
    (first, second, third, fourth, fifth, sixth),
);

/// Tuples with at least one position.
pub trait TakeFirst {
    /// The type of the first position.
    type Output;

    /// Returns the first position, dropping the rest.
    fn take_first(self) -> Self::Output;
}

/// Tuples with at least two positions.
pub trait TakeSecond {
    /// The type of the second position.
    type Output;

    /// Returns the second position, dropping the rest.
    fn take_second(self) -> Self::Output;
}

/// Tuples with at least three positions.
pub trait TakeThird {
    /// The type of the third position.
    type Output;

    /// Returns the third position, dropping the rest.
    fn take_third(self) -> Self::Output;
}

/// Tuples with at least one position; yields the last one whatever the arity.
pub trait TakeLast {
    /// The type of the last position.
    type Output;

    /// Returns the last position, dropping the rest.
    fn take_last(self) -> Self::Output;
}

macro_rules! impl_take {
    ($trait_name:ident, $method:ident, $output:ident; $(($($type:ident),+)),+ $(,)?) => {
        $(
            impl<$($type),+> $trait_name for ($($type,)+) {
                type Output = $output;

                #[inline]
                #[allow(non_snake_case, unused_variables)]
                fn $method(self) -> $output {
                    let ($($type,)+) = self;
                    $output
                }
            }
        )+
    };
}

impl_take!(TakeFirst, take_first, A1;
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
);

impl_take!(TakeSecond, take_second, A2;
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
);

impl_take!(TakeThird, take_third, A3;
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
);

impl_take!(TakeLast, take_last, A1; (A1));
impl_take!(TakeLast, take_last, A2; (A1, A2));
impl_take!(TakeLast, take_last, A3; (A1, A2, A3));
impl_take!(TakeLast, take_last, A4; (A1, A2, A3, A4));
impl_take!(TakeLast, take_last, A5; (A1, A2, A3, A4, A5));
impl_take!(TakeLast, take_last, A6; (A1, A2, A3, A4, A5, A6));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_arity() {
        assert_eq!((1,).arity(), 1);
        assert_eq!((1, 2, 3, 4, 5, 6).arity(), 6);
    }

    #[test]
    fn test_empty_vec_is_an_argument_list() {
        let arguments: Vec<i32> = Vec::new();
        assert_eq!(arguments.arity(), 0);
        assert!(arguments.into_vec().is_empty());
    }

    #[test]
    fn test_take_positions_of_mixed_tuple() {
        let arguments = (1, "two", 3.0_f64, '4');
        assert_eq!(arguments.take_first(), 1);
        assert_eq!(arguments.take_second(), "two");
        assert!((arguments.take_third() - 3.0).abs() < f64::EPSILON);
        assert_eq!(arguments.take_last(), '4');
    }

    #[test]
    fn test_take_last_of_single() {
        assert_eq!((5,).take_last(), 5);
    }
}
