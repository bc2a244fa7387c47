//! Codegen configuration.
//!
//! Values resolve in priority order: CLI > environment > config file > default.

use anyhow::{Context, Result};
use pipable::codegen::{Arity, DEFAULT_MAX_ARITY};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the maximum arity.
pub const MAX_ARITY_ENV: &str = "PIPABLE_MAX_ARITY";

const DEFAULT_TEMPLATE: &str = "templates/pipe.ts.in";
const DEFAULT_OUTPUT: &str = "generated/pipe.ts";

/// Contents of `codegen.yaml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub max_arity: Option<usize>,
}

impl ConfigFile {
    /// Reads `path`, or returns an empty config if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no codegen config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Fully resolved codegen settings, paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    pub template: PathBuf,
    pub output: PathBuf,
    pub max_arity: Arity,
}

/// Command-line overrides.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub max_arity: Option<usize>,
}

impl CodegenConfig {
    /// Merges overrides, the environment, and the config file.
    pub fn resolve(root: &Path, overrides: &Overrides, file: &ConfigFile) -> Result<Self> {
        let env_max_arity = match env::var(MAX_ARITY_ENV) {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("{MAX_ARITY_ENV}={value:?} is not a number"))?,
            ),
            Err(_) => None,
        };

        let max_arity = overrides
            .max_arity
            .or(env_max_arity)
            .or(file.max_arity)
            .unwrap_or(DEFAULT_MAX_ARITY);
        let max_arity = Arity::try_from(max_arity).context("Invalid maximum arity")?;

        let template = overrides
            .template
            .clone()
            .or_else(|| file.template.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE));

        let output = overrides
            .output
            .clone()
            .or_else(|| file.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            template: absolute(root, template),
            output: absolute(root, output),
            max_arity,
        })
    }
}

fn absolute(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { root.join(path) }
}

/// Get the project root directory
pub fn project_root() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask is in project_root/xtask, so go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map_or_else(|| manifest_dir.clone(), Path::to_path_buf)
    } else {
        manifest_dir
    }
}
