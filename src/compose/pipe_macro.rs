//! The `pipe!` macro: an unbounded, fully typed pipeline.
//!
//! Tuple pipelines stop at [`MAX_ARITY`](super::MAX_ARITY) stages. `pipe!`
//! expands to nested calls instead, so it has no stage limit.

/// Pipes a value through any number of functions from left to right.
///
/// `pipe!(x, f, g, h)` expands to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use pipable::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(pipe!(5, double, add_one), 11);
/// assert_eq!(pipe!(5), 5);
/// ```
///
/// ## More stages than a tuple pipeline accepts
///
/// ```
/// use pipable::pipe;
///
/// let inc = |x: u32| x + 1;
/// let result = pipe!(
///     0, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc,
///     inc, inc, inc, inc, inc, inc, inc, inc, inc, inc
/// );
/// assert_eq!(result, 20);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($remaining_functions),+)
    };
}
