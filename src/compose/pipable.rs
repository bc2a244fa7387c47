//! A value that carries its own `pipe` methods.
//!
//! [`Pipable`] owns a value and lets a pipeline start from it with method
//! syntax. The wrapped value is reachable through `Deref`, so its fields and
//! methods stay available exactly as before wrapping.
//!
//! [`to_pipable`] is also a plain one-argument function, so it can close a
//! pipeline and let the next one continue with `.pipe(..)`:
//!
//! ```
//! use pipable::compose::{pipe, to_pipable};
//!
//! let add = |x: u32| x + 1;
//! let total = pipe(0, (add, add, add, to_pipable)).into_pipe((add, add));
//! assert_eq!(total, 5);
//! ```

use std::ops::{Deref, DerefMut};

use super::pipeline::{Pipeline, TryPipeline};
#[cfg(feature = "async")]
use super::pipeline_async::{AsyncPipeline, TryAsyncPipeline};

/// A value with pipeline entry points attached.
///
/// # Examples
///
/// ```
/// use pipable::compose::Pipable;
///
/// struct Record { a: i32 }
///
/// let record = Pipable::new(Record { a: 1 });
/// assert_eq!(record.pipe((|r: &Record| r.a + 1,)), 2);
/// assert_eq!(record.a, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pipable<T> {
    value: T,
}

impl<T> Pipable<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Pipes a reference to the wrapped value through `stages`.
    pub fn pipe<'a, P>(&'a self, stages: P) -> P::Output
    where
        P: Pipeline<&'a T>,
    {
        stages.run(&self.value)
    }

    /// Pipes the wrapped value itself through `stages`.
    pub fn into_pipe<P>(self, stages: P) -> P::Output
    where
        P: Pipeline<T>,
    {
        stages.run(self.value)
    }

    /// Pipes a reference to the wrapped value through fallible `stages`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage.
    pub fn try_pipe<'a, Failure, P>(&'a self, stages: P) -> Result<P::Output, Failure>
    where
        P: TryPipeline<&'a T, Failure>,
    {
        stages.try_run(&self.value)
    }

    /// Pipes the wrapped value itself through fallible `stages`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage.
    pub fn try_into_pipe<Failure, P>(self, stages: P) -> Result<P::Output, Failure>
    where
        P: TryPipeline<T, Failure>,
    {
        stages.try_run(self.value)
    }

    /// Pipes a reference to the wrapped value through async `stages`.
    #[cfg(feature = "async")]
    pub fn pipe_async<'a, P>(&'a self, stages: P) -> impl Future<Output = P::Output>
    where
        P: AsyncPipeline<&'a T>,
    {
        stages.run_async(std::future::ready(&self.value))
    }

    /// Pipes the wrapped value itself through async `stages`.
    #[cfg(feature = "async")]
    pub fn into_pipe_async<P>(self, stages: P) -> impl Future<Output = P::Output>
    where
        P: AsyncPipeline<T>,
    {
        stages.run_async(std::future::ready(self.value))
    }

    /// Pipes a reference to the wrapped value through async fallible `stages`.
    #[cfg(feature = "async")]
    pub fn try_pipe_async<'a, Failure, P>(
        &'a self,
        stages: P,
    ) -> impl Future<Output = Result<P::Output, Failure>>
    where
        P: TryAsyncPipeline<&'a T, Failure>,
    {
        stages.try_run_async(std::future::ready(&self.value))
    }
}

impl<T> Deref for Pipable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Pipable<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> AsRef<T> for Pipable<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> AsMut<T> for Pipable<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> From<T> for Pipable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Wraps `value` in a [`Pipable`].
pub const fn to_pipable<T>(value: T) -> Pipable<T> {
    Pipable::new(value)
}

static_assertions::assert_impl_all!(Pipable<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Pipable<std::rc::Rc<u8>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        a: i32,
        label: String,
    }

    fn record() -> Pipable<Record> {
        Pipable::new(Record {
            a: 1,
            label: String::from("one"),
        })
    }

    #[test]
    fn test_pipe_reads_wrapped_fields() {
        let wrapped = record();
        assert_eq!(wrapped.pipe((|r: &Record| r.a + 1,)), 2);
        assert_eq!(wrapped.a, 1);
        assert_eq!(wrapped.label, "one");
    }

    #[test]
    fn test_pipe_zero_stages_returns_reference() {
        let wrapped = record();
        assert!(std::ptr::eq(wrapped.pipe(()), &*wrapped));
    }

    #[test]
    fn test_into_pipe_consumes_value() {
        let label = record().into_pipe((|r: Record| r.label, |s: String| s.to_uppercase()));
        assert_eq!(label, "ONE");
    }

    #[test]
    fn test_try_pipe_reports_failure() {
        let wrapped = record();
        let result = wrapped.try_pipe((
            |r: &Record| if r.a > 0 { Ok(r.a) } else { Err("negative") },
            |a: i32| if a > 1 { Ok(a) } else { Err("too small") },
        ));
        assert_eq!(result, Err("too small"));
        assert_eq!(record().try_into_pipe::<(), _>(()), Ok(record().into_inner()));
    }

    #[test]
    fn test_deref_mut_updates_wrapped_value() {
        let mut wrapped = record();
        wrapped.a = 10;
        assert_eq!(wrapped.pipe((|r: &Record| r.a * 2,)), 20);
        assert_eq!(wrapped.into_inner().a, 10);
    }

    #[test]
    fn test_to_pipable_continues_pipeline() {
        let increment = |x: i32| x + 1;
        let wrapped = crate::compose::pipe(1, (increment, to_pipable));
        assert_eq!(*wrapped, 2);
        assert_eq!(wrapped.into_pipe((increment, increment)), 4);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_pipe_async_closes_over_value() {
        use futures::FutureExt;

        let wrapped = record();
        let result = wrapped
            .pipe_async((|r: &Record| r.a, |a: i32| async move { a * 10 }.boxed()))
            .await;
        assert_eq!(result, 10);
        assert_eq!(wrapped.a, 1);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_into_pipe_async() {
        let result = Pipable::from(3_i32)
            .into_pipe_async((|x: i32| x + 1,))
            .await;
        assert_eq!(result, 4);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_try_pipe_async_on_wrapped_value() {
        let wrapped = record();
        let result = wrapped
            .try_pipe_async((|r: &Record| Err::<i32, _>(r.label.clone()),))
            .await;
        assert_eq!(result, Err(String::from("one")));
    }
}
