//! # pipable
//!
//! Left-to-right function pipelines for Rust, plus the generator that produces
//! the bounded family of typed `pipe` overload declarations for targets that,
//! like Rust itself, cannot express a variadic list of differently-typed stages
//! in one generic signature.
//!
//! ## Overview
//!
//! - **Code generation**: spreadsheet-style label sequences (`A`, `B`, ..., `Z`,
//!   `AA`, ...), per-arity signature assembly, and the four overload families
//!   (free function, async free function, method, async method).
//! - **Composition**: [`pipe`](compose::pipe), [`try_pipe`](compose::try_pipe),
//!   and the [`Pipable`](compose::Pipable) wrapper that exposes composition as a
//!   method on a value.
//! - **Async composition**: [`pipe_async`](compose::pipe_async) and
//!   [`try_pipe_async`](compose::try_pipe_async), awaiting every intermediate
//!   value before the next stage runs.
//!
//! ## Feature Flags
//!
//! - `codegen`: Overload declaration generator
//! - `compose`: Synchronous pipelines and the `Pipable` wrapper
//! - `async`: Asynchronous pipelines (implies `compose`)
//! - `serde`: `Serialize` for generated declarations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipable::prelude::*;
//!
//! let double = |x: i32| x * 2;
//! let increment = |x: i32| x + 1;
//! assert_eq!(pipe(5, (double, increment)), 11);
//!
//! let overloads = OverloadSet::generate(Arity::new(2).unwrap());
//! assert_eq!(
//!     overloads.family(DeclarationKind::Function)[0].text(),
//!     "export function pipe<A, B>(value: A, f: (v: A) => B): B;"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use pipable::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "codegen")]
    pub use crate::codegen::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "codegen")]
pub mod codegen;

#[cfg(feature = "compose")]
pub mod compose;
