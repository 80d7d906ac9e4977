//! Configuration types for pagewatch operations.
//!
//! Provides structured configuration for the identifier generator, the
//! simulation scenario and report output.

use super::defaults::{
    DEFAULT_KEY_ALPHABET, DEFAULT_KEY_PREFIX, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_KEY_LEN,
    DEFAULT_MAX_PAYLOAD_LEN, DEFAULT_MIN_KEY_LEN, DEFAULT_MIN_PAYLOAD_LEN,
    DEFAULT_PAYLOAD_ALPHABET, DEFAULT_RECIPIENT,
};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings by the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Key and payload generation settings
    pub generator: GeneratorConfig,
    /// Simulated change counts
    pub simulation: SimulationConfig,
    /// Report output settings
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the generator configuration.
    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.config.generator = generator;
        self
    }

    /// Seed the generator for reproducible runs.
    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.generator.seed = seed;
        self
    }

    /// Set the simulated change counts.
    pub const fn simulation(mut self, simulation: SimulationConfig) -> Self {
        self.config.simulation = simulation;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the report recipient.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.config.output.recipient = recipient.into();
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Settings for generating unique page keys and payloads.
///
/// Length bounds are inclusive-exclusive and apply to the random part only;
/// `key_prefix` is prepended to every key and is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed prefix for every generated key (scheme + host)
    pub key_prefix: String,
    /// Characters a key may be built from (URL-safe only)
    pub key_alphabet: String,
    /// Characters a payload may be built from
    pub payload_alphabet: String,
    /// Minimum random key length (inclusive)
    pub min_key_len: usize,
    /// Maximum random key length (exclusive)
    pub max_key_len: usize,
    /// Minimum payload length (inclusive)
    pub min_payload_len: usize,
    /// Maximum payload length (exclusive)
    pub max_payload_len: usize,
    /// Retry cap for finding a value not already live
    pub max_attempts: usize,
    /// PRNG seed for reproducible runs (OS entropy when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            key_alphabet: DEFAULT_KEY_ALPHABET.to_string(),
            payload_alphabet: DEFAULT_PAYLOAD_ALPHABET.to_string(),
            min_key_len: DEFAULT_MIN_KEY_LEN,
            max_key_len: DEFAULT_MAX_KEY_LEN,
            min_payload_len: DEFAULT_MIN_PAYLOAD_LEN,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Short payloads, for quick demos and tests.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            min_payload_len: 16,
            max_payload_len: 64,
            ..Self::default()
        }
    }

    /// Use a fixed PRNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ============================================================================
// Simulation Configuration
// ============================================================================

/// How many changes the simulation applies between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pages created before the baseline commit
    pub initial_pages: usize,
    /// Random pages removed after the commit
    pub removals: usize,
    /// Fresh pages added after the commit
    pub additions: usize,
    /// Random pages whose content is regenerated after the commit
    pub updates: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_pages: 10,
            removals: 4,
            additions: 5,
            updates: 3,
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Name used in the report greeting
    pub recipient: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            file: None,
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .seed(Some(7))
            .output_format(ReportFormat::Json)
            .recipient("Ops")
            .simulation(SimulationConfig {
                initial_pages: 3,
                removals: 1,
                additions: 1,
                updates: 1,
            })
            .build();

        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.output.recipient, "Ops");
        assert_eq!(config.simulation.initial_pages, 3);
    }

    #[test]
    fn test_compact_keeps_key_settings() {
        let compact = GeneratorConfig::compact();
        let default = GeneratorConfig::default();
        assert_eq!(compact.key_prefix, default.key_prefix);
        assert_eq!(compact.min_key_len, default.min_key_len);
        assert!(compact.max_payload_len < default.max_payload_len);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "generator:\n  min_key_len: 3\n  max_key_len: 5\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.generator.min_key_len, 3);
        assert_eq!(config.generator.max_key_len, 5);
        assert_eq!(config.generator.key_prefix, DEFAULT_KEY_PREFIX);
        assert_eq!(config.simulation, SimulationConfig::default());
    }
}
