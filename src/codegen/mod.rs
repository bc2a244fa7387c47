//! Generation of bounded-arity `pipe` overload declarations.
//!
//! A typed left-to-right pipeline over differently-typed stages needs one
//! signature per stage count when the target type system has no variadic
//! generics. This module produces that family of signatures as text.
//!
//! # Overview
//!
//! - [`letter_identifier`] / [`LabelSequence`]: spreadsheet-style labels
//!   (`A`..`Z`, `AA`, ...) over an inclusive [`LabelRange`].
//! - [`assemble`]: the declaration for one [`DeclarationKind`] and [`Arity`].
//! - [`OverloadSet`]: the four families for arities `1..=N`.
//!
//! Generation is pure: no I/O, no shared state. Splicing the families into a
//! document and formatting the result are left to the caller (see the
//! `xtask codegen` command in this workspace).
//!
//! # Example
//!
//! ```rust
//! use pipable::codegen::{generate_overloads, DeclarationKind};
//!
//! let overloads = generate_overloads(3);
//! let functions = overloads.family(DeclarationKind::Function);
//! assert_eq!(functions.len(), 3);
//! assert_eq!(
//!     functions[2].text(),
//!     "export function pipe<A, B, C, D>(value: A, f: (v: A) => B, g: (v: B) => C, h: (v: C) => D): D;"
//! );
//! ```
//!
//! # Preconditions
//!
//! Inverted label ranges, start characters outside their range, and a zero
//! arity are programmer errors. The plain entry points panic on them; each
//! has a `try_` counterpart returning [`GenerateError`].

mod error;
mod label;
mod overload;
mod signature;

pub use error::{GenerateError, ParseDeclarationKindError};
pub use label::{
    LOWERCASE, LabelRange, LabelSequence, UPPERCASE, compare_labels, letter_identifier,
    try_letter_identifier,
};
pub use overload::{DEFAULT_MAX_ARITY, OverloadSet, generate_overloads};
pub use signature::{
    Arity, DeclarationKind, GeneratedDeclaration, LabelScheme, assemble, assemble_with,
};
