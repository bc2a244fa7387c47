//! Error types for overload generation.
//!
//! Every variant is a precondition violation: a caller handed the generator
//! something that cannot produce well-formed declaration text. The panicking
//! entry points (`LabelRange::new`, `generate_overloads`, ...) report the same
//! conditions through their panic message.

/// Errors produced by the fallible (`try_*`) generation entry points.
///
/// # Examples
///
/// ```rust
/// use pipable::codegen::{GenerateError, LabelRange};
///
/// let error = LabelRange::try_new('Z', 'A').unwrap_err();
/// assert_eq!(error, GenerateError::InvertedRange { low: 'Z', high: 'A' });
/// assert_eq!(format!("{error}"), "label range 'Z'..='A' is inverted");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The low bound of a label range sorts after its high bound.
    InvertedRange {
        /// The requested low bound.
        low: char,
        /// The requested high bound.
        high: char,
    },
    /// A sequence start character lies outside its label range.
    StartOutOfRange {
        /// The requested start character.
        start: char,
        /// Low bound of the range.
        low: char,
        /// High bound of the range.
        high: char,
    },
    /// A pipeline arity (or maximum arity) of zero was requested.
    ZeroArity,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedRange { low, high } => {
                write!(formatter, "label range {low:?}..={high:?} is inverted")
            }
            Self::StartOutOfRange { start, low, high } => write!(
                formatter,
                "start {start:?} is outside label range {low:?}..={high:?}"
            ),
            Self::ZeroArity => write!(formatter, "arity must be at least 1"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Returned when a string does not name a [`DeclarationKind`](super::DeclarationKind).
///
/// ```rust
/// use pipable::codegen::DeclarationKind;
///
/// let error = "pipe".parse::<DeclarationKind>().unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "unknown declaration kind \"pipe\" (expected one of: function, async-function, method, async-method)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDeclarationKindError {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for ParseDeclarationKindError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "unknown declaration kind {:?} (expected one of: function, async-function, method, async-method)",
            self.input
        )
    }
}

impl std::error::Error for ParseDeclarationKindError {}
