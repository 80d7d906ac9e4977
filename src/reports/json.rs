//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::diff::{DiffSummary, PageDiff};
use serde::Serialize;

/// JSON reporter
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    summary: DiffSummary,
    #[serde(flatten)]
    diff: &'a PageDiff,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, diff: &PageDiff, metadata: &ReportMetadata) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata,
            summary: diff.summary(),
            diff,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
