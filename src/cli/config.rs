//! CLI handlers for the `config` subcommands.

use crate::config::{generate_full_example_config, load_or_default};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// File name written by `config init`.
const INIT_FILE_NAME: &str = ".pagewatch.yaml";

/// Render the effective configuration as YAML, with the file it came from.
pub fn render_effective_config(explicit: Option<&Path>) -> Result<(String, Option<PathBuf>)> {
    let (config, loaded_from) = load_or_default(explicit);
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    Ok((yaml, loaded_from))
}

/// Write the commented example configuration into `dir`.
///
/// Refuses to overwrite an existing file.
pub fn init_config_file(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(INIT_FILE_NAME);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_full_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}
