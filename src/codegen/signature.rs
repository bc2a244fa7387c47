//! Per-arity signature assembly.
//!
//! A declaration of arity `N` accepts `N` stage functions. Stage `i` takes
//! type label `i` and returns type label `i + 1`, so the type of each stage's
//! output is threaded into the next stage's input:
//!
//! ```text
//! export function pipe<A, B, C>(value: A, f: (v: A) => B, g: (v: B) => C): C;
//! ```
//!
//! Async kinds unwrap one level of asynchrony on every stage input
//! (`Awaited<A>`) and wrap the final result (`Promise<Awaited<C>>`). Method
//! kinds take no seed parameter: the receiver's own type `A` is the input of
//! the first stage, which is always named `f`.
//!
//! The zero-stage declaration (`pipe<A>(value: A): A`) is not part of any
//! generated family.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::label::{LOWERCASE, LabelRange, LabelSequence, UPPERCASE};
use super::{GenerateError, ParseDeclarationKindError};

/// Number of stage functions a declaration accepts. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Arity(NonZeroUsize);

impl Arity {
    /// A single-stage declaration.
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(stages: usize) -> Option<Self> {
        match NonZeroUsize::new(stages) {
            Some(stages) => Some(Self(stages)),
            None => None,
        }
    }

    /// The number of stages.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Iterates `1..=self` in increasing order.
    pub fn up_to(self) -> impl Iterator<Item = Self> {
        (1..=self.get()).filter_map(Self::new)
    }
}

impl TryFrom<usize> for Arity {
    type Error = GenerateError;

    fn try_from(stages: usize) -> Result<Self, Self::Error> {
        Self::new(stages).ok_or(GenerateError::ZeroArity)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> Self {
        arity.get()
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The four shapes of generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum DeclarationKind {
    /// `export function pipe<..>(value, f, ..)`
    Function,
    /// `export function pipeAsync<..>(value, f, ..)`
    AsyncFunction,
    /// `pipe<..>(f, ..)` on a pipable receiver.
    Method,
    /// `pipeAsync<..>(f, ..)` on a pipable receiver.
    AsyncMethod,
}

impl DeclarationKind {
    /// Every kind, in the order the families are emitted.
    pub const ALL: [Self; 4] = [
        Self::Function,
        Self::AsyncFunction,
        Self::Method,
        Self::AsyncMethod,
    ];

    /// Whether stage inputs are awaited and the result is a promise.
    #[must_use]
    pub const fn is_async(self) -> bool {
        matches!(self, Self::AsyncFunction | Self::AsyncMethod)
    }

    /// Whether the declaration is a method on the receiver rather than a
    /// free function taking the seed value.
    #[must_use]
    pub const fn is_method(self) -> bool {
        matches!(self, Self::Method | Self::AsyncMethod)
    }

    /// The template placeholder this kind's family replaces.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Function => "//#[function-overload]",
            Self::AsyncFunction => "//#[async-function-overload]",
            Self::Method => "//#[method-overload]",
            Self::AsyncMethod => "//#[async-method-overload]",
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::AsyncFunction => "async-function",
            Self::Method => "method",
            Self::AsyncMethod => "async-method",
        }
    }

    /// The identifier of the declared function or method.
    #[must_use]
    pub const fn callee(self) -> &'static str {
        if self.is_async() { "pipeAsync" } else { "pipe" }
    }

    /// Where this kind draws its labels from.
    #[must_use]
    pub const fn scheme(self) -> LabelScheme {
        if self.is_method() {
            LabelScheme::METHOD
        } else {
            LabelScheme::FUNCTION
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for DeclarationKind {
    type Err = ParseDeclarationKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == input)
            .ok_or_else(|| ParseDeclarationKindError {
                input: input.to_owned(),
            })
    }
}

/// Label ranges and starting characters for one family.
///
/// Type labels and parameter names use disjoint ranges. Method families
/// reserve a receiver type label and a receiver-stage parameter name, and
/// start their generated streams just past them, so free-function and method
/// declarations never reuse the same letter for the same role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelScheme {
    /// Alphabet of type placeholders.
    pub types: LabelRange,
    /// First generated type placeholder.
    pub type_start: char,
    /// Fixed type of the receiver, for method families.
    pub receiver_type: Option<char>,
    /// Alphabet of parameter names.
    pub parameters: LabelRange,
    /// First generated parameter name.
    pub parameter_start: char,
    /// Fixed name of the stage that consumes the receiver, for method families.
    pub receiver_parameter: Option<char>,
}

impl LabelScheme {
    /// Labels for free-function declarations.
    pub const FUNCTION: Self = Self {
        types: UPPERCASE,
        type_start: 'A',
        receiver_type: None,
        parameters: LOWERCASE,
        parameter_start: 'f',
        receiver_parameter: None,
    };

    /// Labels for method declarations.
    pub const METHOD: Self = Self {
        types: UPPERCASE,
        type_start: 'B',
        receiver_type: Some('A'),
        parameters: LOWERCASE,
        parameter_start: 'g',
        receiver_parameter: Some('f'),
    };

    /// `arity + 1` type labels; the first is the seed (or receiver) type.
    ///
    /// # Errors
    ///
    /// Fails if a start character lies outside its range.
    pub fn type_labels(&self, arity: Arity) -> Result<Vec<String>, GenerateError> {
        let generated = LabelSequence::try_new(self.types, self.type_start)?;
        Ok(match self.receiver_type {
            Some(receiver) => std::iter::once(receiver.to_string())
                .chain(generated.take(arity.get()))
                .collect(),
            None => generated.take(arity.get() + 1).collect(),
        })
    }

    /// `arity` parameter names, one per stage.
    ///
    /// # Errors
    ///
    /// Fails if a start character lies outside its range.
    pub fn parameter_labels(&self, arity: Arity) -> Result<Vec<String>, GenerateError> {
        let generated = LabelSequence::try_new(self.parameters, self.parameter_start)?;
        Ok(match self.receiver_parameter {
            Some(receiver) => std::iter::once(receiver.to_string())
                .chain(generated.take(arity.get() - 1))
                .collect(),
            None => generated.take(arity.get()).collect(),
        })
    }
}

/// One assembled declaration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratedDeclaration {
    kind: DeclarationKind,
    arity: Arity,
    type_labels: Vec<String>,
    parameter_labels: Vec<String>,
    text: String,
}

impl GeneratedDeclaration {
    /// The declaration's shape.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Number of stages the declaration accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// All `arity + 1` type labels, seed or receiver first.
    #[must_use]
    pub fn type_labels(&self) -> &[String] {
        &self.type_labels
    }

    /// One parameter name per stage.
    #[must_use]
    pub fn parameter_labels(&self) -> &[String] {
        &self.parameter_labels
    }

    /// The declaration source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of stage arrows (`=>`) in the text.
    #[must_use]
    pub fn transitions(&self) -> usize {
        self.text.matches("=>").count()
    }

    /// Consumes the declaration, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for GeneratedDeclaration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Assembles the declaration of `kind` accepting `arity` stages.
///
/// # Examples
///
/// ```rust
/// use pipable::codegen::{assemble, Arity, DeclarationKind};
///
/// let two = Arity::new(2).unwrap();
/// assert_eq!(
///     assemble(DeclarationKind::AsyncMethod, two).text(),
///     "pipeAsync<B, C>(f: (v: Awaited<A>) => B, g: (v: Awaited<B>) => C): Promise<Awaited<C>>;"
/// );
/// ```
#[must_use]
pub fn assemble(kind: DeclarationKind, arity: Arity) -> GeneratedDeclaration {
    match assemble_with(kind, kind.scheme(), arity) {
        Ok(declaration) => declaration,
        Err(error) => panic!("built-in label scheme is invalid: {error}"),
    }
}

/// Assembles a declaration using a caller-supplied [`LabelScheme`].
///
/// # Errors
///
/// Returns [`GenerateError::StartOutOfRange`] if the scheme starts a label
/// stream outside its range.
pub fn assemble_with(
    kind: DeclarationKind,
    scheme: LabelScheme,
    arity: Arity,
) -> Result<GeneratedDeclaration, GenerateError> {
    let type_labels = scheme.type_labels(arity)?;
    let parameter_labels = scheme.parameter_labels(arity)?;
    let text = render(kind, &type_labels, &parameter_labels);

    Ok(GeneratedDeclaration {
        kind,
        arity,
        type_labels,
        parameter_labels,
        text,
    })
}

fn render(kind: DeclarationKind, types: &[String], parameters: &[String]) -> String {
    let input = |label: &str| {
        if kind.is_async() {
            format!("Awaited<{label}>")
        } else {
            label.to_owned()
        }
    };

    let stages = parameters
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{name}: (v: {}) => {}", input(types[i].as_str()), types[i + 1]))
        .collect::<Vec<_>>()
        .join(", ");

    let last = &types[types.len() - 1];
    let result = if kind.is_async() {
        format!("Promise<Awaited<{last}>>")
    } else {
        last.clone()
    };

    if kind.is_method() {
        format!(
            "{}<{}>({stages}): {result};",
            kind.callee(),
            types[1..].join(", ")
        )
    } else {
        format!(
            "export function {}<{}>(value: {}, {stages}): {result};",
            kind.callee(),
            types.join(", "),
            types[0]
        )
    }
}
