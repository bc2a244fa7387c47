//! The `pipe_async!` macro: an unbounded async pipeline.
//!
//! Expands to an `async move` block that awaits the seed and then every stage
//! result in turn, converting each through
//! [`Eventual`](crate::compose::Eventual).

/// Pipes an eventually-available value through any number of stages,
/// awaiting each result before the next stage runs.
///
/// `pipe_async!(x, f, g)` evaluates to a future equivalent to
/// `async { g(f(x.await).await).await }`.
///
/// # Syntax
///
/// - `pipe_async!(x)` - Resolves `x`
/// - `pipe_async!(x, f, g, ...)` - Resolves `x`, then applies and resolves each stage
///
/// # Examples
///
/// ```
/// use futures::FutureExt;
/// use pipable::pipe_async;
///
/// # futures::executor::block_on(async {
/// let result = pipe_async!(
///     2_i32,
///     |x: i32| x + 1,
///     |x: i32| async move { x * 10 }.boxed(),
/// ).await;
/// assert_eq!(result, 30);
/// # });
/// ```
#[macro_export]
macro_rules! pipe_async {
    ($value:expr $(,)?) => {
        async move { $crate::compose::Eventual::into_eventual($value).await }
    };

    ($value:expr, $($function:expr),+ $(,)?) => {
        async move {
            let __pipe_async_value = $crate::compose::Eventual::into_eventual($value).await;
            $(
                let __pipe_async_value =
                    $crate::compose::Eventual::into_eventual(($function)(__pipe_async_value)).await;
            )+
            __pipe_async_value
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::{Deferred, Pure};

    #[tokio::test]
    async fn test_pipe_async_value_only() {
        assert_eq!(pipe_async!(Pure("ready")).await, "ready");
    }

    #[tokio::test]
    async fn test_pipe_async_mixed_stages() {
        let result = pipe_async!(
            2_i32,
            |x: i32| x + 1,
            |x: i32| Deferred(async move { x * 10 }),
        )
        .await;
        assert_eq!(result, 30);
    }

    #[tokio::test]
    async fn test_pipe_async_many_stages() {
        let inc = |x: u64| x + 1;
        let result = pipe_async!(
            0_u64, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc,
            inc, inc
        )
        .await;
        assert_eq!(result, 18);
    }
}
