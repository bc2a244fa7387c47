//! Left-to-right function pipelines.
//!
//! A pipeline applies a sequence of single-argument stages to a seed value,
//! each stage receiving the previous stage's output:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! # Overview
//!
//! - [`pipe`] / [`try_pipe`]: typed pipelines over a tuple of up to
//!   [`MAX_ARITY`] stages; `try_pipe` stops at the first `Err`.
//! - [`pipe_async`] / [`try_pipe_async`]: the same over stages whose results
//!   may be pending (`async` feature).
//! - [`Pipable`] / [`to_pipable`]: a wrapper exposing these as methods on
//!   the wrapped value.
//! - [`pipe_all`] / [`pipe_all_async`]: unbounded pipelines whose stages all
//!   share one type.
//! - [`pipe!`](crate::pipe!) / [`pipe_async!`](crate::pipe_async!): unbounded,
//!   fully typed macro forms.
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use pipable::compose::pipe;
//!
//! let double = |x: i32| x * 2;
//! let increment = |x: i32| x + 1;
//! assert_eq!(pipe(5, (double, increment)), 11);
//! ```
//!
//! ## Wrapped value
//!
//! ```
//! use pipable::compose::to_pipable;
//!
//! struct Point { x: i32, y: i32 }
//!
//! let point = to_pipable(Point { x: 3, y: 4 });
//! let length_squared = point.pipe((|p: &Point| p.x * p.x + p.y * p.y,));
//! assert_eq!(length_squared, 25);
//! assert_eq!(point.x, 3);
//! ```
//!
//! # Failure
//!
//! Stages are never wrapped or retried. A panicking stage unwinds through the
//! caller; a stage returning `Err` to `try_pipe`/`try_pipe_async` ends the
//! pipeline with that error. Either way no later stage runs and no partial
//! result is returned.
//!
//! # Laws
//!
//! - **Identity**: `pipe(x, ()) == x`
//! - **Sequencing**: `pipe(x, (f, g)) == g(f(x))`
//! - **Unit**: `pipe(x, (identity, f)) == pipe(x, (f, identity)) == f(x)`

#[cfg(feature = "async")]
mod eventual;
mod pipable;
#[cfg(feature = "async")]
mod pipe_async_macro;
mod pipe_macro;
mod pipeline;
#[cfg(feature = "async")]
mod pipeline_async;
mod utils;

#[cfg(feature = "async")]
pub use eventual::{Deferred, Eventual, Pure};
pub use self::pipable::{Pipable, to_pipable};
pub use pipeline::{MAX_ARITY, Pipeline, TryPipeline, pipe, pipe_all, try_pipe};
#[cfg(feature = "async")]
pub use pipeline_async::{
    AsyncPipeline, TryAsyncPipeline, pipe_all_async, pipe_async, try_pipe_async,
};
pub use utils::identity;
