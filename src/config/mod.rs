//! Configuration module for pagewatch.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust
//! use pagewatch::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Compact);
//! assert!(config.is_valid());
//!
//! let config = AppConfig::builder().seed(Some(42)).recipient("Ops").build();
//! assert_eq!(config.generator.seed, Some(42));
//! ```
//!
//! # Configuration File
//!
//! Place a `.pagewatch.yaml` file in your project root or `~/.config/pagewatch/`:
//!
//! ```yaml
//! generator:
//!   min_payload_len: 16
//!   max_payload_len: 64
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_KEY_ALPHABET, DEFAULT_KEY_PREFIX, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_KEY_LEN, DEFAULT_MAX_PAYLOAD_LEN, DEFAULT_MIN_KEY_LEN, DEFAULT_MIN_PAYLOAD_LEN,
    DEFAULT_PAYLOAD_ALPHABET, DEFAULT_RECIPIENT, KEY_LEN_LIMIT, PAYLOAD_LEN_LIMIT,
};
pub use types::{AppConfig, AppConfigBuilder, GeneratorConfig, OutputConfig, SimulationConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, find_config_in_dir, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
    CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.pagewatch.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
