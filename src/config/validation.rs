//! Configuration validation for pagewatch.
//!
//! Provides the validation trait and implementations for all configuration types.

use super::defaults::{KEY_LEN_LIMIT, PAYLOAD_LEN_LIMIT};
use super::types::{AppConfig, GeneratorConfig, OutputConfig, SimulationConfig};
use std::collections::HashSet;

/// Characters besides ASCII alphanumerics that may appear in a generated key.
const URL_SAFE_PUNCTUATION: &str = "-._~/";

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.generator.validate());
        errors.extend(self.simulation.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        validate_alphabet("generator.key_alphabet", &self.key_alphabet, &mut errors);
        if let Some(bad) = self
            .key_alphabet
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !URL_SAFE_PUNCTUATION.contains(*c))
        {
            errors.push(ConfigError::new(
                "generator.key_alphabet",
                format!("'{bad}' is not URL-safe (allowed: a-z, A-Z, 0-9, {URL_SAFE_PUNCTUATION})"),
            ));
        }
        validate_alphabet(
            "generator.payload_alphabet",
            &self.payload_alphabet,
            &mut errors,
        );

        validate_bounds(
            "generator.min_key_len",
            self.min_key_len,
            self.max_key_len,
            KEY_LEN_LIMIT,
            &mut errors,
        );
        validate_bounds(
            "generator.min_payload_len",
            self.min_payload_len,
            self.max_payload_len,
            PAYLOAD_LEN_LIMIT,
            &mut errors,
        );

        if self.max_attempts == 0 {
            errors.push(ConfigError::new(
                "generator.max_attempts",
                "must allow at least one attempt",
            ));
        }

        errors
    }
}

impl Validatable for SimulationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Counts larger than the live page set degrade to no-ops at runtime.
        Vec::new()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if self.recipient.trim().is_empty() {
            errors.push(ConfigError::new("output.recipient", "must not be blank"));
        }

        errors
    }
}

fn validate_alphabet(field: &str, alphabet: &str, errors: &mut Vec<ConfigError>) {
    if alphabet.is_empty() {
        errors.push(ConfigError::new(field, "alphabet must not be empty"));
        return;
    }

    let mut seen = HashSet::new();
    if let Some(dup) = alphabet.chars().find(|c| !seen.insert(*c)) {
        errors.push(ConfigError::new(
            field,
            format!("character '{dup}' appears more than once"),
        ));
    }
}

fn validate_bounds(
    field: &str,
    min: usize,
    max: usize,
    limit: usize,
    errors: &mut Vec<ConfigError>,
) {
    if min == 0 {
        errors.push(ConfigError::new(field, "minimum length must be at least 1"));
    }
    if max > limit {
        errors.push(ConfigError::new(
            field,
            format!("maximum ({max}) exceeds the supported limit ({limit})"),
        ));
    }
    if min >= max {
        errors.push(ConfigError::new(
            field,
            format!("minimum ({min}) must be less than maximum ({max})"),
        ));
    }
}
