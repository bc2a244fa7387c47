//! The four overload families for arities `1..=N`.

use super::signature::{Arity, DeclarationKind, GeneratedDeclaration, assemble};
use super::GenerateError;

/// The maximum arity the bundled template is generated with.
pub const DEFAULT_MAX_ARITY: usize = 16;

/// Every generated declaration for arities `1..=max_arity`, grouped by kind.
///
/// Generation is deterministic: the same maximum always produces the same
/// text, and `generate(N)` starts with exactly the entries of `generate(N - 1)`.
///
/// # Examples
///
/// ```rust
/// use pipable::codegen::{Arity, DeclarationKind, OverloadSet};
///
/// let overloads = OverloadSet::generate(Arity::new(2).unwrap());
/// assert_eq!(
///     overloads.joined(DeclarationKind::Method),
///     "pipe<B>(f: (v: A) => B): B; pipe<B, C>(f: (v: A) => B, g: (v: B) => C): C;"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OverloadSet {
    max_arity: Arity,
    function: Vec<GeneratedDeclaration>,
    async_function: Vec<GeneratedDeclaration>,
    method: Vec<GeneratedDeclaration>,
    async_method: Vec<GeneratedDeclaration>,
}

impl OverloadSet {
    /// Generates all four families up to `max_arity`.
    #[must_use]
    pub fn generate(max_arity: Arity) -> Self {
        let family = |kind| {
            max_arity
                .up_to()
                .map(|arity| assemble(kind, arity))
                .collect::<Vec<_>>()
        };

        Self {
            max_arity,
            function: family(DeclarationKind::Function),
            async_function: family(DeclarationKind::AsyncFunction),
            method: family(DeclarationKind::Method),
            async_method: family(DeclarationKind::AsyncMethod),
        }
    }

    /// Generates all four families, rejecting a maximum of zero.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ZeroArity`] if `max_arity` is zero.
    pub fn try_generate(max_arity: usize) -> Result<Self, GenerateError> {
        Arity::try_from(max_arity).map(Self::generate)
    }

    /// The largest arity in every family.
    #[must_use]
    pub const fn max_arity(&self) -> Arity {
        self.max_arity
    }

    /// Declarations of `kind`, ordered by increasing arity.
    #[must_use]
    pub fn family(&self, kind: DeclarationKind) -> &[GeneratedDeclaration] {
        match kind {
            DeclarationKind::Function => &self.function,
            DeclarationKind::AsyncFunction => &self.async_function,
            DeclarationKind::Method => &self.method,
            DeclarationKind::AsyncMethod => &self.async_method,
        }
    }

    /// The texts of one family joined by a single space, ready to replace
    /// that kind's template marker.
    #[must_use]
    pub fn joined(&self, kind: DeclarationKind) -> String {
        self.family(kind)
            .iter()
            .map(GeneratedDeclaration::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every family paired with its kind, in [`DeclarationKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclarationKind, &[GeneratedDeclaration])> {
        DeclarationKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.family(kind)))
    }
}

impl Default for OverloadSet {
    fn default() -> Self {
        Self::generate(Arity::new(DEFAULT_MAX_ARITY).unwrap_or(Arity::ONE))
    }
}

/// Generates the overload families up to `max_arity`.
///
/// # Panics
///
/// Panics if `max_arity` is zero; see [`OverloadSet::try_generate`].
#[must_use]
pub fn generate_overloads(max_arity: usize) -> OverloadSet {
    match OverloadSet::try_generate(max_arity) {
        Ok(overloads) => overloads,
        Err(error) => panic!("{error}"),
    }
}
