//! Typed left-to-right pipelines over tuples of stages.
//!
//! A pipeline is a tuple of single-argument functions. Stage `i` receives
//! exactly the output of stage `i - 1` (the first stage receives the seed), so
//! each stage may change the value's type:
//!
//! ```text
//! pipe(seed, (f, g, h)) == h(g(f(seed)))
//! ```
//!
//! Tuples of `0..=MAX_ARITY` stages implement [`Pipeline`], [`TryPipeline`],
//! and (with the `async` feature) the async traits. Longer pipelines can use
//! [`pipe!`](crate::pipe!), nest a [`Pipable`](super::Pipable), or, when every
//! stage has the same type, [`pipe_all`].

#[cfg(feature = "async")]
use super::eventual::Eventual;
#[cfg(feature = "async")]
use super::pipeline_async::{AsyncPipeline, TryAsyncPipeline};

/// The largest stage tuple with a typed pipeline implementation.
pub const MAX_ARITY: usize = 16;

#[cfg(feature = "codegen")]
static_assertions::const_assert_eq!(MAX_ARITY, crate::codegen::DEFAULT_MAX_ARITY);

/// A sequence of stages that turns an `Input` into [`Self::Output`].
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// ().run(x) == x
/// ```
///
/// ## Sequencing
///
/// ```text
/// (f, g).run(x) == g(f(x))
/// ```
pub trait Pipeline<Input> {
    /// The value produced by the last stage.
    type Output;

    /// Applies every stage in order.
    fn run(self, input: Input) -> Self::Output;
}

/// A sequence of fallible stages sharing one error type.
///
/// The first `Err` ends the pipeline and is returned unchanged; later stages
/// are never called.
pub trait TryPipeline<Input, Failure> {
    /// The success value of the last stage.
    type Output;

    /// Applies every stage in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails.
    fn try_run(self, input: Input) -> Result<Self::Output, Failure>;
}

impl<A> Pipeline<A> for () {
    type Output = A;

    fn run(self, input: A) -> A {
        input
    }
}

impl<A, Failure> TryPipeline<A, Failure> for () {
    type Output = A;

    fn try_run(self, input: A) -> Result<A, Failure> {
        Ok(input)
    }
}

/// Implements every pipeline trait for one tuple length.
///
/// Each stage is `(binding Function Return From To)`: the stage bound to
/// `binding` has type `Function`, takes `From`, and produces `To` (or, for the
/// async traits, a `Return` that eventually yields `To`).
macro_rules! impl_pipelines {
    ($input:ident => $output:ident; $(($stage:ident $function:ident $ret:ident $from:ident $to:ident))+) => {
        impl<$input, $($function, $to),+> Pipeline<$input> for ($($function,)+)
        where
            $($function: FnOnce($from) -> $to,)+
        {
            type Output = $output;

            fn run(self, input: $input) -> Self::Output {
                let ($($stage,)+) = self;
                let value = input;
                $(let value = $stage(value);)+
                value
            }
        }

        impl<$input, Failure, $($function, $to),+> TryPipeline<$input, Failure> for ($($function,)+)
        where
            $($function: FnOnce($from) -> Result<$to, Failure>,)+
        {
            type Output = $output;

            fn try_run(self, input: $input) -> Result<Self::Output, Failure> {
                let ($($stage,)+) = self;
                let value = input;
                $(let value = $stage(value)?;)+
                Ok(value)
            }
        }

        #[cfg(feature = "async")]
        impl<$input, $($function, $ret, $to),+> AsyncPipeline<$input> for ($($function,)+)
        where
            $($function: FnOnce($from) -> $ret, $ret: Eventual<Output = $to>,)+
        {
            type Output = $output;

            fn run_async<Seed>(self, seed: Seed) -> impl Future<Output = Self::Output>
            where
                Seed: Eventual<Output = $input>,
            {
                let ($($stage,)+) = self;
                async move {
                    let value = seed.into_eventual().await;
                    $(let value = $stage(value).into_eventual().await;)+
                    value
                }
            }
        }

        #[cfg(feature = "async")]
        impl<$input, Failure, $($function, $ret, $to),+> TryAsyncPipeline<$input, Failure>
            for ($($function,)+)
        where
            $($function: FnOnce($from) -> $ret, $ret: Eventual<Output = Result<$to, Failure>>,)+
        {
            type Output = $output;

            fn try_run_async<Seed>(
                self,
                seed: Seed,
            ) -> impl Future<Output = Result<Self::Output, Failure>>
            where
                Seed: Eventual<Output = $input>,
            {
                let ($($stage,)+) = self;
                async move {
                    let value = seed.into_eventual().await;
                    $(let value = $stage(value).into_eventual().await?;)+
                    Ok::<_, Failure>(value)
                }
            }
        }
    };
}

/// Walks the stage list, emitting one set of impls per prefix length.
macro_rules! pipeline_family {
    ([$input:ident] [$previous:ident] [$($done:tt)*]) => {};
    (
        [$input:ident] [$previous:ident] [$($done:tt)*]
        ($stage:ident $function:ident $ret:ident $to:ident)
        $($rest:tt)*
    ) => {
        impl_pipelines!($input => $to; $($done)* ($stage $function $ret $previous $to));
        pipeline_family!(
            [$input] [$to] [$($done)* ($stage $function $ret $previous $to)]
            $($rest)*
        );
    };
}

pipeline_family!(
    [A] [A] []
    (f F1 R1 B)
    (g F2 R2 C)
    (h F3 R3 D)
    (i F4 R4 E)
    (j F5 R5 F)
    (k F6 R6 G)
    (l F7 R7 H)
    (m F8 R8 I)
    (n F9 R9 J)
    (o F10 R10 K)
    (p F11 R11 L)
    (q F12 R12 M)
    (r F13 R13 N)
    (s F14 R14 O)
    (t F15 R15 P)
    (u F16 R16 Q)
);

/// Pipes `seed` through `stages` from left to right.
///
/// `stages` is a tuple of up to [`MAX_ARITY`] functions; `()` returns the
/// seed unchanged. A panic inside a stage propagates to the caller and no
/// further stages run.
///
/// # Examples
///
/// ```
/// use pipable::compose::pipe;
///
/// let double = |x: i32| x * 2;
/// let increment = |x: i32| x + 1;
/// assert_eq!(pipe(5, (double, increment)), 11);
/// assert_eq!(pipe(5, ()), 5);
///
/// let length = pipe(12345, (|x: i32| x.to_string(), |s: String| s.len()));
/// assert_eq!(length, 5);
/// ```
pub fn pipe<A, P>(seed: A, stages: P) -> P::Output
where
    P: Pipeline<A>,
{
    stages.run(seed)
}

/// Pipes `seed` through fallible `stages`, returning the first error.
///
/// # Errors
///
/// Returns the error of the first failing stage unchanged.
///
/// # Examples
///
/// ```
/// use pipable::compose::try_pipe;
///
/// let parse = |text: &str| text.trim().parse::<i32>().map_err(|_| "not a number");
/// let positive = |n: i32| if n > 0 { Ok(n) } else { Err("not positive") };
///
/// assert_eq!(try_pipe(" 42 ", (parse, positive)), Ok(42));
/// assert_eq!(try_pipe("-1", (parse, positive)), Err("not positive"));
/// ```
pub fn try_pipe<A, Failure, P>(seed: A, stages: P) -> Result<P::Output, Failure>
where
    P: TryPipeline<A, Failure>,
{
    stages.try_run(seed)
}

/// Pipes `seed` through any number of stages that share one type.
///
/// This is the fallback for pipelines longer than [`MAX_ARITY`] whose stages
/// all map `T` to `T`.
///
/// ```
/// use pipable::compose::pipe_all;
///
/// let stages: Vec<Box<dyn FnOnce(u64) -> u64>> = (1..=20).map(|n| {
///     Box::new(move |x: u64| x + n) as Box<dyn FnOnce(u64) -> u64>
/// }).collect();
/// assert_eq!(pipe_all(0, stages), 210);
/// ```
pub fn pipe_all<T, F, I>(seed: T, stages: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    stages.into_iter().fold(seed, |value, stage| stage(value))
}
