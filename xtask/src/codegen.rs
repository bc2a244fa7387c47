//! Declaration file generator
//!
//! This module provides the `codegen` subcommand, which fills the declaration
//! template with the generated overload families and writes the result.
//! Formatting the output is left to the target language's own tooling.

use anyhow::{Context, Result, bail};
use clap::Args;
use pipable::codegen::OverloadSet;
use std::fs;
use std::path::PathBuf;

use crate::config::{self, CodegenConfig, ConfigFile, Overrides};
use crate::template::Template;

/// Arguments for the codegen subcommand
#[derive(Args, Debug)]
pub struct CodegenArgs {
    /// Configuration file, relative to the project root
    #[arg(long, default_value = "codegen.yaml")]
    pub config: PathBuf,

    /// Template file (overrides the config file)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output file (overrides the config file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Largest generated arity (overrides PIPABLE_MAX_ARITY and the config file)
    #[arg(long)]
    pub max_arity: Option<usize>,

    /// Fail instead of writing if the output is out of date
    #[arg(long)]
    pub check: bool,
}

/// What a codegen run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Unchanged,
}

pub fn run(args: &CodegenArgs) -> Result<()> {
    let root = config::project_root();
    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        root.join(&args.config)
    };

    let file = ConfigFile::load(&config_path)?;
    let overrides = Overrides {
        template: args.template.clone(),
        output: args.output.clone(),
        max_arity: args.max_arity,
    };
    let config = CodegenConfig::resolve(&root, &overrides, &file)?;

    match generate(&config, args.check)? {
        Outcome::Written => tracing::info!(output = %config.output.display(), "wrote declarations"),
        Outcome::Unchanged => tracing::info!(output = %config.output.display(), "declarations up to date"),
    }

    Ok(())
}

/// Renders the template and writes (or, with `check`, verifies) the output.
pub fn generate(config: &CodegenConfig, check: bool) -> Result<Outcome> {
    let _span = tracing::info_span!("codegen", max_arity = %config.max_arity).entered();

    let source = fs::read_to_string(&config.template)
        .with_context(|| format!("Failed to read template {}", config.template.display()))?;
    let template = Template::parse(source)
        .with_context(|| format!("Invalid template {}", config.template.display()))?;

    let overloads = OverloadSet::generate(config.max_arity);
    let rendered = template.render(&overloads);

    let existing = fs::read_to_string(&config.output).ok();
    if existing.as_deref() == Some(rendered.as_str()) {
        return Ok(Outcome::Unchanged);
    }

    if check {
        bail!(
            "{} is out of date; run `cargo xtask codegen`",
            config.output.display()
        );
    }

    if let Some(parent) = config.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&config.output, rendered)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(Outcome::Written)
}
