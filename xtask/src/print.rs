//! Overload family printer
//!
//! This module provides the `print` subcommand, which writes generated
//! families to stdout without touching any template.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pipable::codegen::{Arity, DEFAULT_MAX_ARITY, DeclarationKind, OverloadSet};
use std::io::Write;

use crate::config::MAX_ARITY_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One declaration per line
    Text,
    /// The full overload set as JSON
    Json,
}

/// Arguments for the print subcommand
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Only print this kind (function, async-function, method, async-method)
    #[arg(long)]
    pub kind: Option<DeclarationKind>,

    /// Largest generated arity
    #[arg(long, env = MAX_ARITY_ENV, default_value_t = DEFAULT_MAX_ARITY)]
    pub max_arity: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn run(args: &PrintArgs) -> Result<()> {
    let max_arity = Arity::try_from(args.max_arity).context("Invalid maximum arity")?;
    let overloads = OverloadSet::generate(max_arity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_overloads(&mut out, &overloads, args.kind, args.format)?;
    out.flush().context("Failed to flush stdout")
}

fn write_overloads(
    out: &mut impl Write,
    overloads: &OverloadSet,
    kind: Option<DeclarationKind>,
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => {
            let json = match kind {
                Some(kind) => serde_json::to_string_pretty(overloads.family(kind))?,
                None => serde_json::to_string_pretty(overloads)?,
            };
            writeln!(out, "{json}")?;
        }
        Format::Text => {
            for (family_kind, family) in overloads.iter() {
                if kind.is_some_and(|wanted| wanted != family_kind) {
                    continue;
                }
                for declaration in family {
                    writeln!(out, "{declaration}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipable::codegen::generate_overloads;

    fn render(kind: Option<DeclarationKind>, format: Format) -> String {
        let mut buffer = Vec::new();
        write_overloads(&mut buffer, &generate_overloads(2), kind, format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_prints_one_declaration_per_line() {
        let text = render(None, Format::Text);
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_text_filters_by_kind() {
        assert_eq!(
            render(Some(DeclarationKind::Method), Format::Text),
            "pipe<B>(f: (v: A) => B): B;\npipe<B, C>(f: (v: A) => B, g: (v: B) => C): C;\n"
        );
    }

    #[test]
    fn test_json_contains_kind_and_text() {
        let json: serde_json::Value =
            serde_json::from_str(&render(Some(DeclarationKind::AsyncFunction), Format::Json)).unwrap();
        assert_eq!(json[0]["kind"], "async-function");
        assert_eq!(json[0]["arity"], 1);
        assert_eq!(json[1]["type_labels"], serde_json::json!(["A", "B", "C"]));
    }

    #[test]
    fn test_json_full_set_has_every_family() {
        let json: serde_json::Value = serde_json::from_str(&render(None, Format::Json)).unwrap();
        assert_eq!(json["max_arity"], 2);
        for key in ["function", "async_function", "method", "async_method"] {
            assert_eq!(json[key].as_array().map(Vec::len), Some(2), "{key}");
        }
    }
}
