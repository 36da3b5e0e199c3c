//! The `compose!` macro for chains of callables.
//!
//! This module provides the [`compose!`] macro which folds any number of
//! callables into nested [`compose`](crate::composition::compose) calls,
//! right to left.

/// Composes callables from right to left.
///
/// `compose!(f, g, h)` is `compose(f, compose(g, h))`: `h` receives the
/// complete argument list, each function to its left receives the previous
/// result, and the receiver reaches all of them.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `compose(f, g)`
/// - `compose!(f, g, h, ...)` - Composes any number of callables
///
/// # Examples
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.invoke((3,)), 19);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use pointfree::callable::Invoke;
/// use pointfree::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left.invoke((10,)), right.invoke((10,)));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::composition::compose($outer_function, $inner_function)
    };

    // compose!(f, g, h, ...) = compose(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::composition::compose(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
    };
}
