//! Default values and named presets for pagewatch.

use super::types::{AppConfig, GeneratorConfig, OutputConfig, SimulationConfig};

// ============================================================================
// Default Value Constants
// ============================================================================

/// Prefix of every generated page key.
pub const DEFAULT_KEY_PREFIX: &str = "https://dns-name/";

/// Characters generated keys are drawn from.
pub const DEFAULT_KEY_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz/-";

/// Characters generated payloads are drawn from.
pub const DEFAULT_PAYLOAD_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz<>!-/";

/// Minimum random key length (inclusive).
pub const DEFAULT_MIN_KEY_LEN: usize = 7;

/// Maximum random key length (exclusive).
pub const DEFAULT_MAX_KEY_LEN: usize = 15;

/// Minimum payload length (inclusive).
pub const DEFAULT_MIN_PAYLOAD_LEN: usize = 150;

/// Maximum payload length (exclusive).
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 10_000;

/// Largest accepted `max_key_len`.
pub const KEY_LEN_LIMIT: usize = 2048;

/// Largest accepted `max_payload_len`.
pub const PAYLOAD_LEN_LIMIT: usize = 16 * 1024 * 1024;

/// Retry cap for unique value generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Greeting name used by text reports.
pub const DEFAULT_RECIPIENT: &str = "Site Owner";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Full-size pages and the daily change mix
    Default,
    /// Short payloads, for demos and fast test runs
    Compact,
    /// Machine-readable output for pipelines
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "compact" | "small" => Some(Self::Compact),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Compact, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Compact => Self {
                generator: GeneratorConfig::compact(),
                ..Self::default()
            },
            ConfigPreset::CiCd => Self {
                generator: GeneratorConfig::compact(),
                simulation: SimulationConfig::default(),
                output: OutputConfig {
                    format: crate::reports::ReportFormat::Json,
                    ..OutputConfig::default()
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_ci_preset_uses_json() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, crate::reports::ReportFormat::Json);
    }

    #[test]
    fn test_default_bounds_are_ordered() {
        assert!(DEFAULT_MIN_KEY_LEN < DEFAULT_MAX_KEY_LEN);
        assert!(DEFAULT_MIN_PAYLOAD_LEN < DEFAULT_MAX_PAYLOAD_LEN);
    }
}
