//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".pagewatch.yaml",
    ".pagewatch.yml",
    "pagewatch.yaml",
    "pagewatch.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. The directories from [`config_search_dirs`]
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|path| path.exists()) {
        return Some(path.to_path_buf());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in order:
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/pagewatch/)
/// 4. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    search_dirs_from(std::env::current_dir().ok())
}

fn search_dirs_from(cwd: Option<PathBuf>) -> Vec<PathBuf> {
    let git_root = cwd.as_deref().and_then(find_git_root);
    let candidates = [
        cwd,
        git_root,
        dirs::config_dir().map(|dir| dir.join("pagewatch")),
        dirs::home_dir(),
    ];

    let mut ordered: Vec<PathBuf> = Vec::with_capacity(candidates.len());
    for dir in candidates.into_iter().flatten() {
        if !ordered.contains(&dir) {
            ordered.push(dir);
        }
    }
    ordered
}

/// Find a config file in a specific directory.
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the default settings.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        r"# pagewatch configuration
# Place this file at .pagewatch.yaml in your project root or ~/.config/pagewatch/

{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# pagewatch configuration file
# =============================
#
# Place it at:
#   - .pagewatch.yaml in your project root
#   - ~/.config/pagewatch/pagewatch.yaml for global config
#
# CLI arguments always override file settings.

# Key and payload generation
generator:
  # Prefix of every generated page key
  key_prefix: https://dns-name/
  # URL-safe characters for the random part of a key
  key_alphabet: abcdefghijklmnopqrstuvwxyz/-
  # Characters for generated page content
  payload_alphabet: abcdefghijklmnopqrstuvwxyz<>!-/
  # Length bounds, minimum inclusive and maximum exclusive
  min_key_len: 7
  max_key_len: 15
  min_payload_len: 150
  max_payload_len: 10000
  # Give up after this many collisions with live values
  max_attempts: 1000
  # Fixed seed for reproducible runs
  # seed: 42

# Changes applied by `pagewatch simulate`
simulation:
  initial_pages: 10
  removals: 4
  additions: 5
  updates: 3

# Report output
output:
  # Format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: report.txt
  # Name used in the greeting
  recipient: Site Owner
"
    .to_string()
}
