//! Marker substitution for the declaration template.
//!
//! Each [`DeclarationKind`] owns exactly one marker line in the template,
//! which is replaced by that kind's family joined with single spaces. Every
//! occurrence of [`COUNT_MARKER`] becomes the maximum arity numeral.

use anyhow::{Result, bail};
use pipable::codegen::{DeclarationKind, OverloadSet};

/// Placeholder for the maximum arity, used in documentation text.
pub const COUNT_MARKER: &str = "#{overload-count}";

/// A template document holding one marker per declaration kind.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Checks that every kind's marker appears exactly once.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        for kind in DeclarationKind::ALL {
            let occurrences = source.matches(kind.marker()).count();
            if occurrences != 1 {
                bail!(
                    "template must contain marker {} exactly once for {kind} overloads, found {occurrences}",
                    kind.marker()
                );
            }
        }
        Ok(Self { source })
    }

    /// Replaces every marker with the generated text.
    pub fn render(&self, overloads: &OverloadSet) -> String {
        let mut rendered = self
            .source
            .replace(COUNT_MARKER, &overloads.max_arity().to_string());

        for (kind, family) in overloads.iter() {
            tracing::debug!(%kind, declarations = family.len(), "substituting overload family");
            rendered = rendered.replace(kind.marker(), &overloads.joined(kind));
        }

        rendered
    }
}
