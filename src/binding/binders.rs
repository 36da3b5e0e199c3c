//! The general n-ary binder.

use crate::application::apply_with;
use crate::callable::Callable;

/// An ordered collection of binders.
///
/// Each binder receives the complete argument list of the bound call and
/// derives one argument for the wrapped callable. Tuples of up to six binders
/// derive a tuple (a positional argument list); a `Vec` of binders derives a
/// `Vec`, for use with [`variadic`](crate::callable::variadic) callables.
pub trait Binders<C: ?Sized, Args> {
    /// The derived argument list.
    type Output;

    /// Runs every binder on `arguments`, in order, forwarding `receiver`.
    fn derive_with(&self, receiver: &C, arguments: &Args) -> Self::Output;
}

impl<C, Args> Binders<C, Args> for ()
where
    C: ?Sized,
{
    type Output = ();

    #[inline]
    fn derive_with(&self, _receiver: &C, _arguments: &Args) {}
}

macro_rules! impl_binders_for_tuples {
    ($(($($binder:ident . $index:tt),+)),+ $(,)?) => {
        $(
            impl<C, Args, $($binder),+> Binders<C, Args> for ($($binder,)+)
            where
                C: ?Sized,
                Args: Clone,
                $($binder: Callable<C, Args>,)+
            {
                type Output = ($($binder::Output,)+);

                #[inline]
                fn derive_with(&self, receiver: &C, arguments: &Args) -> Self::Output {
                    ($(self.$index.call_with(receiver, arguments.clone()),)+)
                }
            }
        )+
    };
}

impl_binders_for_tuples!(
    (B1.0),
    (B1.0, B2.1),
    (B1.0, B2.1, B3.2),
    (B1.0, B2.1, B3.2, B4.3),
    (B1.0, B2.1, B3.2, B4.3, B5.4),
    (B1.0, B2.1, B3.2, B4.3, B5.4, B6.5),
);

impl<C, Args, B> Binders<C, Args> for Vec<B>
where
    C: ?Sized,
    Args: Clone,
    B: Callable<C, Args>,
{
    type Output = Vec<B::Output>;

    fn derive_with(&self, receiver: &C, arguments: &Args) -> Self::Output {
        self.iter()
            .map(|binder| binder.call_with(receiver, arguments.clone()))
            .collect()
    }
}

/// A callable whose arguments are derived by binders.
///
/// Created by [`bind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bind<F, B> {
    function: F,
    binders: B,
}

/// Builds a callable that derives each argument of `function` from its own
/// full argument list.
///
/// When the result is invoked with `arguments`, every binder is invoked with
/// a clone of `arguments`, and `function` is applied to the binder outputs in
/// binder order. The receiver reaches the binders and `function` alike.
/// `bind1st(f, x)` is `bind(f, (value(x), first()))`, and `bind2nd(f, x)` is
/// `bind(f, (first(), value(x)))`.
///
/// # Examples
///
/// ```
/// use pointfree::binding::bind;
/// use pointfree::callable::Invoke;
/// use pointfree::projection::project;
///
/// let concat = |lhs: &str, rhs: &str| format!("{lhs}{rhs}");
/// let outer = bind(concat, (project(0), project(2)));
///
/// assert_eq!(outer.invoke(("a", "b", "c")), "ac");
/// ```
///
/// A `Vec` of binders feeds a variadic callable:
///
/// ```
/// use pointfree::binding::bind;
/// use pointfree::callable::{Invoke, variadic};
/// use pointfree::projection::project;
///
/// let reversed = bind(
///     variadic(|values: Vec<i32>| values),
///     vec![project(2), project(1), project(0)],
/// );
///
/// assert_eq!(reversed.invoke((1, 2, 3)), vec![3, 2, 1]);
/// ```
#[inline]
pub const fn bind<F, B>(function: F, binders: B) -> Bind<F, B> {
    Bind { function, binders }
}

impl<C, Args, F, B> Callable<C, Args> for Bind<F, B>
where
    C: ?Sized,
    B: Binders<C, Args>,
    F: Callable<C, B::Output>,
{
    type Output = F::Output;

    #[inline]
    fn call_with(&self, receiver: &C, arguments: Args) -> Self::Output {
        let derived = self.binders.derive_with(receiver, &arguments);
        apply_with(receiver, &self.function, derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::value;
    use crate::callable::{Invoke, receiving};
    use crate::projection::{first, project, second};

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_bind_generalizes_bind1st() {
        let from_ten = bind(subtract, (value(10), first()));
        assert_eq!(from_ten.invoke((4,)), 6);
    }

    #[test]
    fn test_bind_generalizes_bind2nd() {
        let minus_ten = bind(subtract, (first(), value(10)));
        assert_eq!(minus_ten.invoke((4,)), -6);
    }

    #[test]
    fn test_bind_may_repeat_a_position() {
        let square = bind(|lhs: i32, rhs: i32| lhs * rhs, (first(), first()));
        assert_eq!(square.invoke((7,)), 49);
    }

    #[test]
    fn test_bind_swaps_arguments() {
        let flipped = bind(subtract, (second(), first()));
        assert_eq!(flipped.invoke((1, 10)), 9);
    }

    #[test]
    fn test_bind_with_no_binders_calls_with_no_arguments() {
        let constant = bind(|| "called", ());
        assert_eq!(constant.invoke((1, 2, 3)), "called");
    }

    #[test]
    fn test_bind_forwards_receiver_to_binders_and_function() {
        let offset_of = receiving(|offset: &i32, value: i32, _ignored: i32| value + *offset);
        let scaled_sum = receiving(|offset: &i32, lhs: i32, rhs: i32| (lhs + rhs) * *offset);
        let bound = bind(scaled_sum, (offset_of, project(1)));

        // ((1 + 100) + 2) * 100
        assert_eq!(bound.call_with(&100, (1, 2)), 10_300);
    }
}
