//! Report generation for page diffs.
//!
//! - Text: the change notice sent to the site owner
//! - JSON: structured data for programmatic integration

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::diff::PageDiff;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a diff as a report
    fn generate(&self, diff: &PageDiff, metadata: &ReportMetadata) -> Result<String, ReportError>;

    /// The format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(SummaryReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
