//! Eventually-available values.
//!
//! An async pipeline stage may return a plain value or a pending one. Both are
//! [`Eventual`]: something that can be turned into a future of its output.
//! Rust cannot implement one trait for "every future" and for plain types at
//! the same time, so plain types are listed explicitly, pending values come
//! in as boxed futures or [`Deferred`], and any other value can be wrapped in
//! [`Pure`].

use std::future::{Ready, ready};

use futures::future::{BoxFuture, LocalBoxFuture};

/// A value that is available now or will be later.
///
/// # Laws
///
/// ## Plain values resolve to themselves
///
/// ```text
/// value.into_eventual().await == value
/// ```
///
/// ## Pending values resolve to their output
///
/// ```text
/// Deferred(future).into_eventual().await == future.await
/// ```
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use pipable::compose::{Deferred, Eventual};
///
/// # futures::executor::block_on(async {
/// assert_eq!(42_i32.into_eventual().await, 42);
/// assert_eq!(async { 7 }.boxed().into_eventual().await, 7);
/// assert_eq!(Deferred(async { "later" }).into_eventual().await, "later");
/// # });
/// ```
pub trait Eventual {
    /// The value once resolved.
    type Output;

    /// The future that resolves it.
    type Future: Future<Output = Self::Output>;

    /// Converts `self` into a future of its value.
    fn into_eventual(self) -> Self::Future;
}

macro_rules! impl_eventual_for_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Eventual for $ty {
                type Output = Self;
                type Future = Ready<Self>;

                fn into_eventual(self) -> Self::Future {
                    ready(self)
                }
            }
        )*
    };
}

impl_eventual_for_values!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    (),
    String,
    &'static str,
);

impl<T> Eventual for Vec<T> {
    type Output = Self;
    type Future = Ready<Self>;

    fn into_eventual(self) -> Self::Future {
        ready(self)
    }
}

impl<T> Eventual for Option<T> {
    type Output = Self;
    type Future = Ready<Self>;

    fn into_eventual(self) -> Self::Future {
        ready(self)
    }
}

impl<T, E> Eventual for Result<T, E> {
    type Output = Self;
    type Future = Ready<Self>;

    fn into_eventual(self) -> Self::Future {
        ready(self)
    }
}

impl<T> Eventual for Ready<T> {
    type Output = T;
    type Future = Self;

    fn into_eventual(self) -> Self {
        self
    }
}

impl<T> Eventual for futures::future::Ready<T> {
    type Output = T;
    type Future = Self;

    fn into_eventual(self) -> Self {
        self
    }
}

impl<T> Eventual for BoxFuture<'_, T> {
    type Output = T;
    type Future = Self;

    fn into_eventual(self) -> Self {
        self
    }
}

impl<T> Eventual for LocalBoxFuture<'_, T> {
    type Output = T;
    type Future = Self;

    fn into_eventual(self) -> Self {
        self
    }
}

/// Wraps a value of any type so it resolves immediately.
///
/// ```rust
/// use pipable::compose::{pipe_async, Pure};
///
/// #[derive(Debug, PartialEq)]
/// struct Order { total: u32 }
///
/// # futures::executor::block_on(async {
/// let total = pipe_async(Pure(Order { total: 30 }), (|order: Order| order.total * 2,)).await;
/// assert_eq!(total, 60);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pure<A>(pub A);

impl<A> Pure<A> {
    /// Wraps `value`.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Eventual for Pure<A> {
    type Output = A;
    type Future = Ready<A>;

    fn into_eventual(self) -> Self::Future {
        ready(self.0)
    }
}

/// Wraps any future so it can be returned from an async stage without
/// boxing.
///
/// ```rust
/// use pipable::compose::{pipe_async, Deferred};
///
/// # futures::executor::block_on(async {
/// let result = pipe_async(2_i32, (
///     |x: i32| x + 1,
///     |x: i32| Deferred(async move { x * 10 }),
/// )).await;
/// assert_eq!(result, 30);
/// # });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deferred<F>(pub F);

impl<F: Future> Deferred<F> {
    /// Wraps `future`.
    pub const fn new(future: F) -> Self {
        Self(future)
    }
}

impl<F: Future> Eventual for Deferred<F> {
    type Output = F::Output;
    type Future = F;

    fn into_eventual(self) -> F {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[tokio::test]
    async fn test_plain_values_resolve_to_themselves() {
        assert_eq!(5_i32.into_eventual().await, 5);
        assert_eq!(String::from("x").into_eventual().await, "x");
        assert_eq!(vec![1, 2].into_eventual().await, vec![1, 2]);
        assert_eq!(Some(3).into_eventual().await, Some(3));
        assert_eq!(Ok::<i32, String>(4).into_eventual().await, Ok(4));
    }

    #[tokio::test]
    async fn test_pending_values_resolve_to_output() {
        assert_eq!(async { 1 }.boxed().into_eventual().await, 1);
        assert_eq!(async { 2 }.boxed_local().into_eventual().await, 2);
        assert_eq!(Deferred::new(async { 3 }).into_eventual().await, 3);
        assert_eq!(ready(4).into_eventual().await, 4);
        assert_eq!(futures::future::ready(5).into_eventual().await, 5);
    }

    #[tokio::test]
    async fn test_pure_wraps_any_type() {
        struct Opaque(u8);
        let resolved = Pure::new(Opaque(9)).into_eventual().await;
        assert_eq!(resolved.0, 9);
        assert_eq!(Pure(1).into_inner(), 1);
    }
}
