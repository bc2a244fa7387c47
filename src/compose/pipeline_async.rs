//! Asynchronous left-to-right pipelines.
//!
//! The seed and every stage result are [`Eventual`]: each is awaited before
//! the next stage is called, so stages run strictly one after another and a
//! stage never observes a pending input.
//!
//! ```text
//! pipe_async(seed, (f, g)).await == g(f(seed.await).await).await
//! ```
//!
//! There is no cancellation hook. Dropping the returned future stops the
//! pipeline at its current await point; a stage that wants to bail out early
//! must check its own flag.

use super::eventual::Eventual;

/// A sequence of stages whose results may be pending.
pub trait AsyncPipeline<Input> {
    /// The resolved value of the last stage.
    type Output;

    /// Awaits `seed`, then applies and awaits every stage in order.
    fn run_async<Seed>(self, seed: Seed) -> impl Future<Output = Self::Output>
    where
        Seed: Eventual<Output = Input>;
}

/// A sequence of stages whose results may be pending and may fail.
///
/// The first stage that resolves to `Err` ends the pipeline with that error;
/// later stages are never called.
pub trait TryAsyncPipeline<Input, Failure> {
    /// The resolved success value of the last stage.
    type Output;

    /// Awaits `seed`, then applies and awaits every stage in order, stopping
    /// at the first failure.
    fn try_run_async<Seed>(self, seed: Seed) -> impl Future<Output = Result<Self::Output, Failure>>
    where
        Seed: Eventual<Output = Input>;
}

impl<A> AsyncPipeline<A> for () {
    type Output = A;

    fn run_async<Seed>(self, seed: Seed) -> impl Future<Output = A>
    where
        Seed: Eventual<Output = A>,
    {
        seed.into_eventual()
    }
}

impl<A, Failure> TryAsyncPipeline<A, Failure> for () {
    type Output = A;

    fn try_run_async<Seed>(self, seed: Seed) -> impl Future<Output = Result<A, Failure>>
    where
        Seed: Eventual<Output = A>,
    {
        async move { Ok::<_, Failure>(seed.into_eventual().await) }
    }
}

/// Pipes an eventually-available `seed` through `stages`, awaiting every
/// intermediate value.
///
/// # Examples
///
/// ```
/// use futures::FutureExt;
/// use pipable::compose::pipe_async;
///
/// # futures::executor::block_on(async {
/// let result = pipe_async(2_i32, (
///     |x: i32| x + 1,
///     |x: i32| async move { x * 10 }.boxed(),
/// )).await;
/// assert_eq!(result, 30);
/// # });
/// ```
pub fn pipe_async<Seed, P>(seed: Seed, stages: P) -> impl Future<Output = P::Output>
where
    Seed: Eventual,
    P: AsyncPipeline<Seed::Output>,
{
    stages.run_async(seed)
}

/// Pipes `seed` through stages that resolve to `Result`, ending at the first
/// `Err`.
///
/// # Errors
///
/// The returned future resolves to the error of the first failing stage,
/// unchanged.
///
/// # Examples
///
/// ```
/// use futures::FutureExt;
/// use pipable::compose::try_pipe_async;
///
/// # futures::executor::block_on(async {
/// let result = try_pipe_async(2_i32, (
///     |x: i32| Ok::<_, String>(x + 1),
///     |_: i32| async { Err::<i32, _>(String::from("rejected")) }.boxed(),
///     |x: i32| Ok::<_, String>(x * 100),
/// )).await;
/// assert_eq!(result, Err(String::from("rejected")));
/// # });
/// ```
pub fn try_pipe_async<Seed, Failure, P>(
    seed: Seed,
    stages: P,
) -> impl Future<Output = Result<P::Output, Failure>>
where
    Seed: Eventual,
    P: TryAsyncPipeline<Seed::Output, Failure>,
{
    stages.try_run_async(seed)
}

/// Pipes `seed` through any number of async stages that share one type.
///
/// This is the fallback for pipelines longer than
/// [`MAX_ARITY`](super::MAX_ARITY) whose stages all map `T` to an eventual `T`.
///
/// ```
/// use futures::future::ready;
/// use pipable::compose::pipe_all_async;
///
/// # futures::executor::block_on(async {
/// let stages = (1..=20).map(|n| move |x: u64| ready(x + n));
/// assert_eq!(pipe_all_async(0_u64, stages).await, 210);
/// # });
/// ```
pub async fn pipe_all_async<Seed, T, F, R, I>(seed: Seed, stages: I) -> T
where
    Seed: Eventual<Output = T>,
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> R,
    R: Eventual<Output = T>,
{
    let mut value = seed.into_eventual().await;
    for stage in stages {
        value = stage(value).into_eventual().await;
    }
    value
}
