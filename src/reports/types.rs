//! Report type definitions.

use crate::state::Snapshot;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain-text message for a human recipient
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Context a report is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    /// Name used in the greeting
    pub recipient: String,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Commit number of the baseline snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_sequence: Option<u64>,
    /// When the baseline snapshot was committed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_committed_at: Option<DateTime<Utc>>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            generated_at: Utc::now(),
            baseline_sequence: None,
            baseline_committed_at: None,
        }
    }

    /// Record which snapshot the diff was computed against.
    #[must_use]
    pub fn with_baseline(mut self, snapshot: &Snapshot) -> Self {
        self.baseline_sequence = Some(snapshot.sequence());
        self.baseline_committed_at = Some(snapshot.committed_at());
        self
    }
}
